//! osfont - native UI font resolution for desktop operating systems
//!
//! Given an OS tag and a release version, this crate answers "which font,
//! at which point size, does that platform's UI use?" so toolkits can
//! approximate native look-and-feel without querying the OS at runtime.
//! A [`FontCatalog`] collaborator decides whether the resolved family is
//! actually usable in the caller's rendering environment.

pub mod catalog;
pub mod constants;
#[cfg(feature = "font-discovery")]
pub mod discovery;
pub mod error;
pub mod os;
pub mod resolver;
mod rules;

// Re-export main types
pub use catalog::{FontCatalog, StaticCatalog};
#[cfg(feature = "font-discovery")]
pub use discovery::SystemCatalog;
pub use error::{ResolveError, ResolverResult};
pub use os::{OsFamily, VersionVector};
pub use resolver::{Advisory, FontResolver, Resolution};
