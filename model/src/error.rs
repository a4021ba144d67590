//! Ingestion errors.

use thiserror::Error;

/// A fatal problem with the fact stream. The entity being ingested is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// A subclass-of fact names an entity that is not registered yet.
    #[error("{entity}: unresolved parent {parent}")]
    UnresolvedParent {
        /// Href of the entity receiving the fact.
        entity: String,
        /// Href of the missing parent.
        parent: String,
    },

    /// A superseded-by fact names an entity that is not registered yet.
    #[error("{entity}: unresolved supersession target {target}")]
    UnresolvedSupersession {
        /// Href of the entity receiving the fact.
        entity: String,
        /// Href of the missing replacement.
        target: String,
    },

    /// A subclass-of fact would make an entity its own ancestor.
    #[error("{entity}: subclass of {parent} would create an inheritance cycle")]
    InheritanceCycle {
        /// Href of the entity receiving the fact.
        entity: String,
        /// Href of the offending parent.
        parent: String,
    },

    /// An entity with this href is already registered.
    #[error("{href}: entity registered twice")]
    DuplicateEntity {
        /// The repeated href.
        href: String,
    },

    /// A second data-type union was registered; a graph carries exactly one.
    #[error("{href}: data-type union already registered as {existing}")]
    DuplicateDataTypeUnion {
        /// Href of the union already in the graph.
        existing: String,
        /// Href of the rejected union.
        href: String,
    },

    /// A data-type union member is not a plain builtin or boolean enum.
    #[error("{union}: member {member} is not a builtin")]
    InvalidDataTypeMember {
        /// Href of the union.
        union: String,
        /// Href of the rejected member.
        member: String,
    },
}
