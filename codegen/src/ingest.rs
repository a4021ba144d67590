//! Batch loading of classes into a registry builder.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use typegraph_model::{Diagnostic, EnumValue, Fact, Identifier, Property, RegistryBuilder};

/// Everything known about one class, as handed over by the fact parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFacts {
    /// The class's identifier.
    pub subject: Identifier,
    /// Instances may also be written as a bare string.
    #[serde(default)]
    pub allow_string: bool,
    /// Comment, subclass-of and superseded-by facts (others are reported).
    #[serde(default)]
    pub facts: Vec<Fact>,
    /// Properties whose domain includes this class.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Enumerated instances of this class.
    #[serde(default)]
    pub enum_values: Vec<EnumValue>,
}

impl ClassFacts {
    /// A class with no facts yet.
    pub fn new(subject: Identifier) -> Self {
        Self {
            subject,
            allow_string: false,
            facts: Vec::new(),
            properties: Vec::new(),
            enum_values: Vec::new(),
        }
    }
}

/// Registers and ingests `classes` in order.
///
/// Each class is registered and then fed its facts, properties and enum
/// values before the next one is touched, so parents and replacements must
/// come earlier in `classes` (or already be in `builder`). Facts the class
/// model does not consume are recorded as informational diagnostics.
///
/// A class's facts are all checked before it is registered. A class that
/// fails leaves no trace in `builder`; classes loaded before it stay.
///
/// # Errors
///
/// Returns an error naming the offending class if it is registered twice or
/// references a parent or replacement that is not registered yet.
pub fn load_graph(builder: &mut RegistryBuilder, classes: &[ClassFacts]) -> Result<()> {
    for class in classes {
        let href = &class.subject.href;
        let handled = class
            .facts
            .iter()
            .map(|fact| builder.check(href, fact))
            .collect::<Result<Vec<bool>, _>>()
            .with_context(|| format!("Failed to ingest facts for {href}"))?;

        let id = builder
            .register_class(class.subject.clone(), class.allow_string)
            .with_context(|| format!("Failed to register {href}"))?;

        for (fact, handled) in class.facts.iter().zip(handled) {
            if handled {
                builder
                    .add(id, fact)
                    .with_context(|| format!("Failed to ingest facts for {href}"))?;
            } else {
                debug!(entity = %href, predicate = %fact.predicate, "fact not consumed");
                builder.record(Diagnostic::info(
                    href.clone(),
                    format!("unhandled fact {}", fact.predicate),
                ));
            }
        }
        for property in &class.properties {
            builder.add_prop(id, property.clone());
        }
        for value in &class.enum_values {
            builder.add_enum(id, value.clone());
        }
    }
    Ok(())
}
