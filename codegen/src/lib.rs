//! Typegraph code generator.
//!
//! Reads a frozen [`Registry`] and produces a deterministic bundle of
//! declarations: every class becomes an optional enum, a `…Base` structural
//! alias and a public alias whose type is a union of its own tagged shape,
//! its subtypes and (for enumerations) its enum. Builtins become aliases of
//! target-language primitives.
//!
//! ```
//! use typegraph_codegen::{generate, GeneratorOptions};
//! use typegraph_model::{Fact, Identifier, Property, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! let thing = builder.register_class(Identifier::from_url("https://schema.org/Thing"), false)?;
//! builder.add_prop(
//!     thing,
//!     Property::new(
//!         Identifier::from_url("https://schema.org/name"),
//!         vec![Identifier::from_url("https://schema.org/Text")],
//!     ),
//! );
//! let registry = builder.freeze();
//!
//! let bundle = generate(&registry, &GeneratorOptions::default());
//! assert_eq!(bundle.declarations[1].name(), "Thing");
//! # Ok::<(), typegraph_model::IngestError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod algebra;
pub mod context;
pub mod decl;
pub mod declare;
pub mod emit;
pub mod ingest;
pub mod options;
pub mod ts;

use anyhow::{Context as _, Result};
use typegraph_model::{Diagnostic, Registry};

pub use algebra::TypeAlgebra;
pub use context::{Context, Namespace};
pub use decl::{Declaration, EnumDecl, EnumMember, TypeAlias};
pub use ingest::{load_graph, ClassFacts};
pub use options::GeneratorOptions;
pub use ts::{Field, TypeExpr};

/// Report of what was generated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of entities processed.
    pub entity_count: usize,
    /// Number of enum declarations.
    pub enum_count: usize,
    /// Number of type alias declarations.
    pub alias_count: usize,
    /// Number of deprecated entities.
    pub deprecated_count: usize,
    /// Diagnostics carried over from graph construction.
    pub diagnostics: Vec<Diagnostic>,
}

/// The ordered declarations for a whole registry.
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Declarations in global order.
    pub declarations: Vec<Declaration>,
    /// Summary counts.
    pub report: GenerationReport,
}

impl Bundle {
    /// Renders the bundle as source text.
    pub fn render(&self) -> String {
        emit::render(&self.declarations)
    }

    /// Serializes the declaration tree for an external printer.
    ///
    /// # Errors
    ///
    /// Returns an error if the declarations cannot be serialized.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(&self.declarations).context("Failed to serialize declarations")
    }
}

/// Generates the declarations of every entity in `registry`.
///
/// Entities are visited in global order (builtins, then the data-type union,
/// then classes by name and href) and their declaration sets concatenated.
pub fn generate(registry: &Registry, options: &GeneratorOptions) -> Bundle {
    let alg = TypeAlgebra::new(registry, options);
    let mut report = GenerationReport {
        diagnostics: registry.diagnostics().to_vec(),
        ..GenerationReport::default()
    };
    let mut declarations = Vec::new();

    for id in registry.sorted() {
        report.entity_count += 1;
        if registry.get(id).class.deprecated() {
            report.deprecated_count += 1;
        }
        for decl in declare::declarations(&alg, id) {
            match decl {
                Declaration::Enum(_) => report.enum_count += 1,
                Declaration::TypeAlias(_) => report.alias_count += 1,
            }
            declarations.push(decl);
        }
    }

    Bundle {
        declarations,
        report,
    }
}
