pub mod auth;
pub mod types;

pub use auth::*;
pub use types::*;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ParseError};

/// A loadable IR document: every declared type plus the API's auth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IrDocument {
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
    #[serde(default)]
    pub auth: ApiAuth,
}

/// Parse an IR document from YAML.
pub fn from_yaml(input: &str) -> Result<IrDocument, ParseError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Parse an IR document from JSON.
pub fn from_json(input: &str) -> Result<IrDocument, ParseError> {
    Ok(serde_json::from_str(input)?)
}

/// Label for an IR node whose variant was not recognized: its `_type` tag when
/// present, the raw JSON otherwise.
pub(crate) fn unrecognized_tag(value: &serde_json::Value) -> String {
    match value.get("_type").and_then(|tag| tag.as_str()) {
        Some(tag) => tag.to_string(),
        None => value.to_string(),
    }
}

/// Error for a node that fell through to an `Unrecognized` variant.
///
/// A tag listed in `known_tags` means the payload failed to deserialize, which
/// is reported as [`ConvertError::Malformed`]; any other tag goes to `unknown`.
pub(crate) fn unrecognized_error(
    value: &serde_json::Value,
    kind: &'static str,
    known_tags: &[&str],
    unknown: fn(String) -> ConvertError,
) -> ConvertError {
    let tag = unrecognized_tag(value);
    if known_tags.contains(&tag.as_str()) {
        ConvertError::Malformed { kind, tag }
    } else {
        unknown(tag)
    }
}
