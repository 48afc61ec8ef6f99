//! Version-aware native UI font resolution

use std::fmt;

use crate::catalog::FontCatalog;
use crate::error::ResolverResult;
use crate::os::{OsFamily, VersionVector};
use crate::rules;

/// Non-fatal notice accompanying an otherwise-successful resolution
///
/// Advisories never change control flow; they ride along on the
/// [`Resolution`] and are also logged at `warn` level as they arise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The caller supplied only a major version on a release line where
    /// the minor decides the font; a documented default was assumed.
    MinorVersionNeeded { os: OsFamily, assumed_minor: u64 },

    /// The platform's nominal UI font is not usable by name; a close
    /// relative was substituted.
    FontNotAvailable { intended: &'static [&'static str], substitute: &'static str },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinorVersionNeeded { os, assumed_minor } => {
                write!(f, "{os} minor version not given; assuming .{assumed_minor}")
            }
            Self::FontNotAvailable { intended, substitute } => {
                write!(f, "font \"{}\" not available; using \"{substitute}\"", intended.join("\"/\""))
            }
        }
    }
}

/// Result of a resolution attempt
///
/// `font_size` is `Some` exactly when a rule matched. `font_name` is `Some`
/// only when a rule matched and the catalog reported the family as
/// available, so check the name independently of the size: the size stays
/// usable for layout even when the caller must substitute a family.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    pub font_name: Option<String>,
    pub font_size: Option<u32>,
    pub advisories: Vec<Advisory>,
}

impl Resolution {
    /// Whether a rule matched this OS and version
    pub fn is_match(&self) -> bool {
        self.font_size.is_some()
    }

    fn no_match() -> Self {
        Self::default()
    }
}

/// Resolves the native UI font for an OS release
///
/// Holds the [`FontCatalog`] collaborator that decides whether a resolved
/// family is usable in the caller's environment. The rule tables are
/// static and every call keeps its state local, so a shared resolver is
/// safe to use from any number of threads.
///
/// # Examples
/// ```
/// use osfont::{FontResolver, StaticCatalog};
///
/// let resolver = FontResolver::new(StaticCatalog::new(["Segoe UI"]));
/// let resolution = resolver.resolve("windows", &[6.0, 1.0, 7601.0]).unwrap();
/// assert_eq!(resolution.font_name.as_deref(), Some("Segoe UI"));
/// assert_eq!(resolution.font_size, Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct FontResolver<C> {
    catalog: C,
}

impl<C: FontCatalog> FontResolver<C> {
    /// Create a resolver over the given catalog
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Resolve the native UI font for an OS tag and release version
    ///
    /// An empty `os` means "undetected": the result is empty and `version`
    /// is ignored entirely, malformed content included. For a non-empty
    /// `os` the version must be a non-empty sequence of finite, integral,
    /// non-negative components or the call fails with a
    /// [`crate::ResolveError`]. Unsupported tags and releases older than
    /// every rule resolve to an empty result, not an error.
    pub fn resolve(&self, os: &str, version: &[f64]) -> ResolverResult<Resolution> {
        if os.is_empty() {
            return Ok(Resolution::no_match());
        }

        // Version validation applies to every non-empty tag, recognized
        // or not.
        let version = VersionVector::new(version)?;

        let Some(family) = OsFamily::parse(os) else {
            tracing::debug!(os, "no font rules for OS tag");
            return Ok(Resolution::no_match());
        };

        let mut advisories = Vec::new();
        let Some(matched) = rules::classify(family, &version, &mut advisories) else {
            tracing::debug!(%family, %version, "no font rule matched");
            emit(&advisories);
            return Ok(Resolution { advisories, ..Resolution::no_match() });
        };

        if let Some(intended) = matched.missing {
            advisories.push(Advisory::FontNotAvailable {
                intended,
                substitute: matched.font_name,
            });
        }
        emit(&advisories);

        // Availability gate: a rejected name is cleared while the size is
        // kept, silently.
        let font_name = if self.catalog.exists(matched.font_name) {
            Some(matched.font_name.to_string())
        } else {
            tracing::debug!(font = matched.font_name, "resolved font not in catalog");
            None
        };

        Ok(Resolution { font_name, font_size: Some(matched.font_size), advisories })
    }

    /// The catalog this resolver consults
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}

fn emit(advisories: &[Advisory]) {
    for advisory in advisories {
        tracing::warn!("{advisory}");
    }
}
