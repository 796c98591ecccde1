use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("Error deserializing a persisted document: {0}")]
    DeserializationError(String),

    #[error(
        "Found multiple definitions named `{0}`. Definition names must be \
        unique within a document (use `extend` to add to an existing type)."
    )]
    DuplicateDefinitionName(String),

    #[error("Found multiple `schema` definitions within the same document")]
    DuplicateSchemaDefinition,

    #[error("No `{0}` object type is defined to act as the root Query type")]
    NoQueryTypeDefined(String),

    #[error("Error parsing a partial schema snippet: {0}")]
    PartialParseError(String),

    #[error("Error parsing schema source: {0}")]
    SchemaParseError(String),

    #[error("Error serializing document: {0}")]
    SerializationError(String),
}
