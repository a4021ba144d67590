//! `(predicate, object)` facts about a single entity.

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;
use crate::vocab::{RDFS_COMMENT, RDFS_SUBCLASS_OF, SCHEMA_SUPERSEDED_BY};

/// The object position of a fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Object {
    /// A reference to another resource.
    Iri(Identifier),
    /// A plain string literal.
    Literal(String),
}

/// One `(predicate, object)` pair about the entity receiving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Full IRI of the predicate.
    pub predicate: String,
    /// The object of the fact.
    pub object: Object,
}

/// The fact shapes the class model consumes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FactShape<'a> {
    Comment(&'a str),
    SubclassOf(&'a Identifier),
    SupersededBy(&'a Identifier),
}

impl Fact {
    /// Creates a fact from a predicate IRI and an object.
    pub fn new(predicate: impl Into<String>, object: Object) -> Self {
        Self {
            predicate: predicate.into(),
            object,
        }
    }

    /// An `rdfs:comment` fact.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(RDFS_COMMENT, Object::Literal(text.into()))
    }

    /// An `rdfs:subClassOf` fact.
    pub fn subclass_of(parent: Identifier) -> Self {
        Self::new(RDFS_SUBCLASS_OF, Object::Iri(parent))
    }

    /// A `schema:supersededBy` fact.
    pub fn superseded_by(target: Identifier) -> Self {
        Self::new(SCHEMA_SUPERSEDED_BY, Object::Iri(target))
    }

    /// Classifies this fact, or `None` when the model does not consume it.
    ///
    /// A predicate paired with the wrong kind of object is not recognized.
    pub(crate) fn shape(&self) -> Option<FactShape<'_>> {
        match (self.predicate.as_str(), &self.object) {
            (RDFS_COMMENT, Object::Literal(text)) => Some(FactShape::Comment(text)),
            (RDFS_SUBCLASS_OF, Object::Iri(id)) => Some(FactShape::SubclassOf(id)),
            (SCHEMA_SUPERSEDED_BY, Object::Iri(id)) => Some(FactShape::SupersededBy(id)),
            _ => None,
        }
    }
}
