//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::context::Context;

/// Options threaded through type computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Leave deprecated properties out of base types.
    pub skip_deprecated_properties: bool,
    /// Namespaces used to name properties and tags.
    pub context: Context,
    /// Key of the identifier field added to root classes.
    pub id_field: String,
    /// Key of the discriminant field.
    pub type_field: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            skip_deprecated_properties: false,
            context: Context::default(),
            id_field: "@id".to_string(),
            type_field: "@type".to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Parses options from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not valid JSON for these options.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(
            GeneratorOptions::from_json("{}").unwrap(),
            GeneratorOptions::default()
        );
    }

    #[test]
    fn partial_json_overrides() {
        let opts = GeneratorOptions::from_json(
            r#"{
                "skip_deprecated_properties": true,
                "context": { "namespaces": [
                    { "prefix": "", "url": "https://schema.org/" },
                    { "prefix": "pending", "url": "https://pending.schema.org/" }
                ] }
            }"#,
        )
        .unwrap();
        assert!(opts.skip_deprecated_properties);
        assert_eq!(opts.context.namespaces.len(), 2);
        assert_eq!(opts.id_field, "@id");
    }

    #[test]
    fn unknown_shape_is_rejected() {
        assert!(GeneratorOptions::from_json(r#"{"skip_deprecated_properties": "yes"}"#).is_err());
    }
}
