//! Per-family font rule tables
//!
//! Each family is an ordered predicate chain over (major, minor), newest
//! release first; the first matching arm wins. Before a chain runs, a
//! shared pre-step substitutes the family's documented default minor when
//! the caller supplied only a major on the release line where the minor
//! disambiguates.

use crate::constants::{
    MACOS_DEFAULT_MINOR, MACOS_INTENDED_FONTS, RHEL_DEFAULT_MINOR, RHEL_INTENDED_FONTS,
    UBUNTU_DEFAULT_MINOR, WINDOWS_DEFAULT_MINOR,
};
use crate::os::{OsFamily, VersionVector};
use crate::resolver::Advisory;

/// Outcome of a matched rule
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleMatch {
    pub font_name: &'static str,
    pub font_size: u32,
    /// Families the platform intends for its UI but does not make usable;
    /// `font_name` stands in for them.
    pub missing: Option<&'static [&'static str]>,
}

impl RuleMatch {
    const fn plain(font_name: &'static str, font_size: u32) -> Self {
        Self { font_name, font_size, missing: None }
    }

    const fn substituting(
        font_name: &'static str,
        font_size: u32,
        missing: &'static [&'static str],
    ) -> Self {
        Self { font_name, font_size, missing: Some(missing) }
    }
}

/// Run the family's rule chain against a validated version
pub(crate) fn classify(
    family: OsFamily,
    version: &VersionVector,
    advisories: &mut Vec<Advisory>,
) -> Option<RuleMatch> {
    match family {
        OsFamily::Macos => classify_macos(version, advisories),
        OsFamily::Windows => classify_windows(version, advisories),
        OsFamily::Ubuntu => classify_ubuntu(version, advisories),
        OsFamily::Centos | OsFamily::Redhat => classify_rhel(family, version, advisories),
    }
}

/// Split a version into (major, minor), defaulting a missing minor
///
/// The advisory fires only on `boundary_major`, the release line whose
/// rules read the minor. Off that line a missing minor cannot change the
/// outcome and is treated as 0 silently.
fn split_with_default(
    version: &VersionVector,
    os: OsFamily,
    boundary_major: u64,
    default_minor: u64,
    advisories: &mut Vec<Advisory>,
) -> (u64, u64) {
    let major = version.major();
    match version.minor() {
        Some(minor) => (major, minor),
        None if major == boundary_major => {
            advisories.push(Advisory::MinorVersionNeeded { os, assumed_minor: default_minor });
            (major, default_minor)
        }
        None => (major, 0),
    }
}

fn classify_macos(version: &VersionVector, advisories: &mut Vec<Advisory>) -> Option<RuleMatch> {
    let (major, minor) =
        split_with_default(version, OsFamily::Macos, 10, MACOS_DEFAULT_MINOR, advisories);

    if major > 10 || (major == 10 && minor >= 11) {
        // 10.11+ ships San Francisco, which is not addressable by name
        Some(RuleMatch::substituting("Helvetica Neue", 13, MACOS_INTENDED_FONTS))
    } else if major == 10 && minor == 10 {
        Some(RuleMatch::plain("Helvetica Neue", 13))
    } else if major == 10 {
        Some(RuleMatch::plain("Lucida Grande", 13))
    } else {
        None
    }
}

fn classify_windows(version: &VersionVector, advisories: &mut Vec<Advisory>) -> Option<RuleMatch> {
    let (major, minor) =
        split_with_default(version, OsFamily::Windows, 3, WINDOWS_DEFAULT_MINOR, advisories);

    if major >= 6 {
        // Vista and later
        Some(RuleMatch::plain("Segoe UI", 9))
    } else if major == 5 {
        // 2000 / XP / Server 2003
        Some(RuleMatch::plain("Tahoma", 8))
    } else if major == 4 || (major == 3 && minor >= 10) {
        Some(RuleMatch::plain("Microsoft Sans Serif", 8))
    } else {
        None
    }
}

fn classify_ubuntu(version: &VersionVector, advisories: &mut Vec<Advisory>) -> Option<RuleMatch> {
    let (major, minor) =
        split_with_default(version, OsFamily::Ubuntu, 10, UBUNTU_DEFAULT_MINOR, advisories);

    if major > 10 || (major == 10 && minor >= 10) {
        // Ubuntu's own family landed in 10.10
        Some(RuleMatch::plain("Ubuntu", 11))
    } else {
        None
    }
}

fn classify_rhel(
    family: OsFamily,
    version: &VersionVector,
    advisories: &mut Vec<Advisory>,
) -> Option<RuleMatch> {
    let (major, minor) =
        split_with_default(version, family, 6, RHEL_DEFAULT_MINOR, advisories);

    if major == 6 && minor >= 8 {
        Some(RuleMatch::substituting("DejaVu Sans Condensed", 10, RHEL_INTENDED_FONTS))
    } else if major > 6 {
        Some(RuleMatch::plain("Cantarell", 11))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(raw: &[f64]) -> VersionVector {
        VersionVector::new(raw).unwrap()
    }

    fn run(family: OsFamily, raw: &[f64]) -> (Option<RuleMatch>, Vec<Advisory>) {
        let mut advisories = Vec::new();
        let matched = classify(family, &version(raw), &mut advisories);
        (matched, advisories)
    }

    #[test]
    fn test_macos_boundaries() {
        let (m, _) = run(OsFamily::Macos, &[11.0, 0.0]);
        assert_eq!(m.unwrap().font_name, "Helvetica Neue");

        let (m, _) = run(OsFamily::Macos, &[10.0, 11.0]);
        let m = m.unwrap();
        assert_eq!(m.font_name, "Helvetica Neue");
        assert!(m.missing.is_some());

        let (m, _) = run(OsFamily::Macos, &[10.0, 10.0]);
        let m = m.unwrap();
        assert_eq!(m.font_name, "Helvetica Neue");
        assert!(m.missing.is_none());

        let (m, _) = run(OsFamily::Macos, &[10.0, 9.0]);
        assert_eq!(m.unwrap().font_name, "Lucida Grande");

        let (m, _) = run(OsFamily::Macos, &[9.0, 0.0]);
        assert!(m.is_none());
    }

    #[test]
    fn test_macos_major_only_defaults_and_warns() {
        let (m, advisories) = run(OsFamily::Macos, &[10.0]);
        assert_eq!(m.unwrap().font_name, "Lucida Grande");
        assert_eq!(
            advisories,
            vec![Advisory::MinorVersionNeeded { os: OsFamily::Macos, assumed_minor: 0 }]
        );
    }

    #[test]
    fn test_macos_off_boundary_major_is_silent() {
        let (m, advisories) = run(OsFamily::Macos, &[11.0]);
        assert_eq!(m.unwrap().font_name, "Helvetica Neue");
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_windows_boundaries() {
        let (m, _) = run(OsFamily::Windows, &[10.0, 0.0]);
        let m = m.unwrap();
        assert_eq!((m.font_name, m.font_size), ("Segoe UI", 9));

        let (m, _) = run(OsFamily::Windows, &[6.0, 1.0, 7601.0]);
        assert_eq!(m.unwrap().font_name, "Segoe UI");

        let (m, _) = run(OsFamily::Windows, &[5.0, 1.0]);
        let m = m.unwrap();
        assert_eq!((m.font_name, m.font_size), ("Tahoma", 8));

        let (m, _) = run(OsFamily::Windows, &[4.0, 0.0]);
        assert_eq!(m.unwrap().font_name, "Microsoft Sans Serif");

        let (m, _) = run(OsFamily::Windows, &[3.0, 11.0]);
        assert_eq!(m.unwrap().font_name, "Microsoft Sans Serif");

        let (m, _) = run(OsFamily::Windows, &[3.0, 1.0]);
        assert!(m.is_none());
    }

    #[test]
    fn test_windows_3_major_only_defaults_below_threshold() {
        let (m, advisories) = run(OsFamily::Windows, &[3.0]);
        assert!(m.is_none());
        assert_eq!(
            advisories,
            vec![Advisory::MinorVersionNeeded { os: OsFamily::Windows, assumed_minor: 0 }]
        );
    }

    #[test]
    fn test_ubuntu_boundaries() {
        let (m, _) = run(OsFamily::Ubuntu, &[10.0, 10.0]);
        let m = m.unwrap();
        assert_eq!((m.font_name, m.font_size), ("Ubuntu", 11));

        let (m, _) = run(OsFamily::Ubuntu, &[12.0, 4.0]);
        assert_eq!(m.unwrap().font_name, "Ubuntu");

        let (m, _) = run(OsFamily::Ubuntu, &[10.0, 4.0]);
        assert!(m.is_none());
    }

    #[test]
    fn test_ubuntu_major_only_assumes_lts_minor() {
        let (m, advisories) = run(OsFamily::Ubuntu, &[10.0]);
        assert!(m.is_none());
        assert_eq!(
            advisories,
            vec![Advisory::MinorVersionNeeded { os: OsFamily::Ubuntu, assumed_minor: 4 }]
        );
    }

    #[test]
    fn test_rhel_boundaries() {
        let (m, _) = run(OsFamily::Centos, &[6.0, 8.0]);
        let m = m.unwrap();
        assert_eq!((m.font_name, m.font_size), ("DejaVu Sans Condensed", 10));
        assert_eq!(m.missing, Some(RHEL_INTENDED_FONTS));

        let (m, _) = run(OsFamily::Centos, &[7.0]);
        let m = m.unwrap();
        assert_eq!((m.font_name, m.font_size), ("Cantarell", 11));

        let (m, _) = run(OsFamily::Redhat, &[6.0, 7.0]);
        assert!(m.is_none());

        let (m, _) = run(OsFamily::Redhat, &[5.0, 11.0]);
        assert!(m.is_none());
    }

    #[test]
    fn test_rhel_major_only_defaults_and_warns() {
        let (m, advisories) = run(OsFamily::Redhat, &[6.0]);
        assert!(m.is_none());
        assert_eq!(
            advisories,
            vec![Advisory::MinorVersionNeeded { os: OsFamily::Redhat, assumed_minor: 0 }]
        );
    }
}
