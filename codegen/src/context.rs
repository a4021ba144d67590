//! Namespace context used to name properties and discriminant tags.

use serde::{Deserialize, Serialize};
use typegraph_model::vocab::SCHEMA;
use typegraph_model::Identifier;

/// A namespace URL and the prefix its terms are written with.
///
/// The empty prefix marks the default namespace, whose terms are written bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Prefix (e.g. `"bib"`), or `""` for the default namespace.
    pub prefix: String,
    /// Namespace URL (e.g. `"https://schema.org/"`).
    pub url: String,
}

/// The set of namespaces known to the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Registered namespaces.
    pub namespaces: Vec<Namespace>,
}

impl Default for Context {
    /// schema.org as the default namespace.
    fn default() -> Self {
        Self {
            namespaces: vec![Namespace {
                prefix: String::new(),
                url: SCHEMA.to_string(),
            }],
        }
    }
}

impl Context {
    /// Adds a namespace.
    #[must_use]
    pub fn with_namespace(mut self, prefix: impl Into<String>, url: impl Into<String>) -> Self {
        self.namespaces.push(Namespace {
            prefix: prefix.into(),
            url: url.into(),
        });
        self
    }

    /// The name `id` is written with.
    ///
    /// Bare for the default namespace, `prefix:term` for other registered
    /// namespaces, the full href otherwise. The longest matching namespace
    /// URL wins.
    pub fn scoped_name(&self, id: &Identifier) -> String {
        let best = self
            .namespaces
            .iter()
            .filter(|ns| id.href.len() > ns.url.len() && id.href.starts_with(&ns.url))
            .max_by_key(|ns| ns.url.len());

        match best {
            Some(ns) => {
                let term = &id.href[ns.url.len()..];
                if ns.prefix.is_empty() {
                    term.to_string()
                } else {
                    format!("{}:{term}", ns.prefix)
                }
            }
            None => id.href.clone(),
        }
    }
}
