//! Standard IRI constants recognized by the class model.

/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// schema.org namespace.
pub const SCHEMA: &str = "https://schema.org/";

/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:subClassOf`.
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `schema:supersededBy`.
pub const SCHEMA_SUPERSEDED_BY: &str = "https://schema.org/supersededBy";

// Data types
/// `schema:Text`.
pub const SCHEMA_TEXT: &str = "https://schema.org/Text";
/// `schema:Number`.
pub const SCHEMA_NUMBER: &str = "https://schema.org/Number";
/// `schema:Time`.
pub const SCHEMA_TIME: &str = "https://schema.org/Time";
/// `schema:Date`.
pub const SCHEMA_DATE: &str = "https://schema.org/Date";
/// `schema:DateTime`.
pub const SCHEMA_DATE_TIME: &str = "https://schema.org/DateTime";
/// `schema:Boolean`.
pub const SCHEMA_BOOLEAN: &str = "https://schema.org/Boolean";
/// `schema:True`.
pub const SCHEMA_TRUE: &str = "https://schema.org/True";
/// `schema:False`.
pub const SCHEMA_FALSE: &str = "https://schema.org/False";
/// `schema:DataType`.
pub const SCHEMA_DATA_TYPE: &str = "https://schema.org/DataType";
