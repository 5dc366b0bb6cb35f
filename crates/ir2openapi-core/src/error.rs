use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An IR value carried a variant outside the set this converter understands.
///
/// These always point at a producer/consumer version mismatch; nothing is
/// defaulted or skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unrecognized type shape: {0}")]
    UnrecognizedShape(String),

    #[error("unrecognized type reference: {0}")]
    UnrecognizedTypeReference(String),

    #[error("unrecognized container type: {0}")]
    UnrecognizedContainer(String),

    #[error("unrecognized primitive type: {0}")]
    UnrecognizedPrimitive(String),

    #[error("unrecognized auth scheme: {0}")]
    UnrecognizedAuthScheme(String),

    #[error("unrecognized auth requirement: {0}")]
    UnrecognizedAuthRequirement(String),

    /// A known tag whose payload is missing or has the wrong fields.
    #[error("malformed {kind} `{tag}`: payload does not match the expected fields")]
    Malformed { kind: &'static str, tag: String },
}

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("schema name `{name}` produced by both `{first}` and `{second}`")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },
}
