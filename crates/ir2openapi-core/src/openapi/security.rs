use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A security scheme type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecuritySchemeType {
    ApiKey,
    Http,
}

/// Location of an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
}

/// A security scheme definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: SecuritySchemeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ApiKeyLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl SecurityScheme {
    /// An HTTP authentication scheme such as `bearer` or `basic`.
    pub fn http(scheme: &str) -> Self {
        Self {
            scheme_type: SecuritySchemeType::Http,
            name: None,
            location: None,
            scheme: Some(scheme.to_string()),
        }
    }

    /// An API key carried in the named request header.
    pub fn api_key_header(header: &str) -> Self {
        Self {
            scheme_type: SecuritySchemeType::ApiKey,
            name: Some(header.to_string()),
            location: Some(ApiKeyLocation::Header),
            scheme: None,
        }
    }
}

/// A security requirement: map of scheme name → required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;
