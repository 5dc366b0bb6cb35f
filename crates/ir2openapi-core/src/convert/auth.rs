use heck::ToPascalCase;
use indexmap::IndexMap;

use crate::error::ConvertError;
use crate::ir::{ApiAuth, AuthRequirement, AuthScheme, unrecognized_error};
use crate::openapi::{SecurityRequirement, SecurityScheme};

/// Build the security requirement list for an API.
///
/// `ALL` yields a single requirement naming every scheme (logical AND);
/// `ANY` yields one requirement per scheme (logical OR).
pub fn security_requirements(auth: &ApiAuth) -> Result<Vec<SecurityRequirement>, ConvertError> {
    match &auth.requirement {
        AuthRequirement::All => {
            let mut requirement = SecurityRequirement::new();
            for scheme in &auth.schemes {
                requirement.insert(scheme_name(scheme)?, Vec::new());
            }
            Ok(vec![requirement])
        }
        AuthRequirement::Any => auth
            .schemes
            .iter()
            .map(|scheme| {
                scheme_name(scheme).map(|name| SecurityRequirement::from([(name, Vec::new())]))
            })
            .collect(),
        AuthRequirement::Unrecognized(other) => {
            Err(ConvertError::UnrecognizedAuthRequirement(other.clone()))
        }
    }
}

/// Build the `components.securitySchemes` map, in declaration order.
///
/// A later scheme whose name collides with an earlier one replaces it.
pub fn security_schemes(
    auth: &ApiAuth,
) -> Result<IndexMap<String, SecurityScheme>, ConvertError> {
    let mut schemes = IndexMap::with_capacity(auth.schemes.len());
    for scheme in &auth.schemes {
        let name = scheme_name(scheme)?;
        let converted = match scheme {
            AuthScheme::Bearer => SecurityScheme::http("bearer"),
            AuthScheme::Basic => SecurityScheme::http("basic"),
            AuthScheme::Header(header) => SecurityScheme::api_key_header(&header.header),
            AuthScheme::Unrecognized(value) => {
                return Err(unrecognized_scheme(value));
            }
        };
        log::debug!("security scheme {name}");
        if schemes.insert(name.clone(), converted).is_some() {
            log::warn!("security scheme `{name}` declared more than once; keeping the last");
        }
    }
    Ok(schemes)
}

/// The name a scheme is registered under.
pub fn scheme_name(scheme: &AuthScheme) -> Result<String, ConvertError> {
    match scheme {
        AuthScheme::Bearer => Ok("BearerAuth".to_string()),
        AuthScheme::Basic => Ok("BasicAuth".to_string()),
        AuthScheme::Header(header) => Ok(format!("{}Auth", header.name.to_pascal_case())),
        AuthScheme::Unrecognized(value) => Err(unrecognized_scheme(value)),
    }
}

fn unrecognized_scheme(value: &serde_json::Value) -> ConvertError {
    unrecognized_error(
        value,
        "auth scheme",
        AuthScheme::TAGS,
        ConvertError::UnrecognizedAuthScheme,
    )
}
