//! Typegraph class model.
//!
//! Holds the in-memory graph of domain-model entities (classes, their
//! properties and enumerated values, inheritance edges and deprecation links)
//! that the `typegraph-codegen` crate turns into declarative type definitions.
//!
//! The graph is built in two phases. A [`RegistryBuilder`] accepts entities
//! and facts about them; [`RegistryBuilder::freeze`] then produces a read-only
//! [`Registry`] that every type computation works against.
//!
//! ```
//! use typegraph_model::{Fact, Identifier, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! let thing = builder.register_class(Identifier::from_url("https://schema.org/Thing"), false)?;
//! let book = builder.register_class(Identifier::from_url("https://schema.org/Book"), false)?;
//! builder.add(book, &Fact::subclass_of(Identifier::from_url("https://schema.org/Thing")))?;
//!
//! let registry = builder.freeze();
//! assert_eq!(registry.get(thing).class.children, vec![book]);
//! # Ok::<(), typegraph_model::IngestError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builtins;
pub mod entity;
pub mod error;
pub mod fact;
pub mod identifier;
pub mod ordering;
pub mod property;
pub mod registry;
pub mod vocab;

pub use entity::{
    BooleanEnum, Builtin, Class, DataTypeUnion, Entity, EntityId, EntityKind, GroupRank,
};
pub use error::IngestError;
pub use fact::{Fact, Object};
pub use identifier::Identifier;
pub use ordering::compare_entities;
pub use property::{EnumValue, Property};
pub use registry::{Diagnostic, Registry, RegistryBuilder, Severity};
