// src/constants.rs

// Minor version assumed when the caller supplies only a major on a release
// line where the minor disambiguates. Ubuntu 10 defaults to 10.04 LTS, the
// others to the line's first release.
pub const MACOS_DEFAULT_MINOR: u64 = 0;
pub const WINDOWS_DEFAULT_MINOR: u64 = 0;
pub const UBUNTU_DEFAULT_MINOR: u64 = 4;
pub const RHEL_DEFAULT_MINOR: u64 = 0;

// Families the platform nominally uses for its UI but does not make
// available to ordinary font systems. Matching rules substitute a close
// relative and advise the caller.
pub const MACOS_INTENDED_FONTS: &[&str] = &["San Francisco Text"];
pub const RHEL_INTENDED_FONTS: &[&str] = &["Sans", "Luxi Sans"];
