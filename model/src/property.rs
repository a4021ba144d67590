//! Properties and enumerated values attached to classes.
//!
//! Both are built by the collaborator that resolves property and enum-value
//! facts; the class model only stores, sorts and hands them to the emitter.

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// A property declared on a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// The property's own identifier.
    pub id: Identifier,
    /// Identifiers of the types this property's values may take.
    #[serde(default)]
    pub ranges: Vec<Identifier>,
    /// Documentation string.
    #[serde(default)]
    pub comment: Option<String>,
    /// Whether the property is superseded by another one.
    #[serde(default)]
    pub deprecated: bool,
}

impl Property {
    /// Creates a non-deprecated property with the given ranges and no comment.
    pub fn new(id: Identifier, ranges: Vec<Identifier>) -> Self {
        Self {
            id,
            ranges,
            comment: None,
            deprecated: false,
        }
    }

    /// Sets the documentation string.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Marks the property deprecated.
    #[must_use]
    pub fn mark_deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Sort key: `(name, href)`.
    pub fn key(&self) -> &Identifier {
        &self.id
    }
}

/// A named instance enumerated on a class (e.g. `Monday` on `DayOfWeek`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// The value's identifier. Its href is the emitted literal.
    pub id: Identifier,
    /// Documentation string.
    #[serde(default)]
    pub comment: Option<String>,
}

impl EnumValue {
    /// Creates an enum value without a comment.
    pub fn new(id: Identifier) -> Self {
        Self { id, comment: None }
    }

    /// Sets the documentation string.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sort key: `(name, href)`.
    pub fn key(&self) -> &Identifier {
        &self.id
    }
}
