//! Entity identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque reference to an entity: a display name plus its canonical href.
///
/// Identifiers order by `(name, href)` using ordinal (byte-wise) string
/// comparison, never a locale-aware collation. Every sort in the workspace
/// goes through this ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identifier {
    /// Display name (e.g. `"Thing"`).
    pub name: String,
    /// Canonical resource locator (e.g. `"https://schema.org/Thing"`).
    pub href: String,
}

impl Identifier {
    /// Creates an identifier from an explicit name and href.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }

    /// Creates an identifier from a URL, naming it after the URL's local name.
    ///
    /// E.g. `"https://schema.org/Thing"` → name `"Thing"`.
    pub fn from_url(url: impl Into<String>) -> Self {
        let href = url.into();
        let name = local_name(&href).to_string();
        Self { name, href }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

/// Extracts the local name from a full IRI (after the last `/` or `#`).
pub fn local_name(iri: &str) -> &str {
    let after_slash = iri.rsplit('/').next().unwrap_or(iri);
    after_slash.rsplit('#').next().unwrap_or(after_slash)
}
