use serde::{Deserialize, Serialize};

/// How the declared schemes combine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthRequirement {
    /// Every scheme must be satisfied at once.
    #[default]
    All,
    /// Any single scheme is sufficient.
    Any,
    #[serde(untagged)]
    Unrecognized(String),
}

/// The API's authentication declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiAuth {
    #[serde(default)]
    pub requirement: AuthRequirement,
    #[serde(default)]
    pub schemes: Vec<AuthScheme>,
}

/// A single authentication scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum AuthScheme {
    Bearer,
    Basic,
    Header(HeaderAuthScheme),
    #[serde(untagged)]
    Unrecognized(serde_json::Value),
}

impl AuthScheme {
    pub const TAGS: &'static [&'static str] = &["bearer", "basic", "header"];
}

/// An API key passed in a request header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderAuthScheme {
    /// Header name on the wire, e.g. `X-API-Key`.
    pub header: String,
    /// Human-readable name used to derive the scheme name.
    pub name: String,
}
