use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::CollisionPolicy;
use crate::convert::{self, auth};
use crate::error::AssembleError;
use crate::ir::{DeclaredTypeName, IrDocument};
use crate::openapi::{Components, SecurityRequirement};

/// Options for assembling a fragment.
#[derive(Debug, Clone, Default)]
pub struct FragmentOptions {
    pub on_collision: CollisionPolicy,
}

/// The OpenAPI pieces derived from one IR document: `components` plus the
/// top-level `security` list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenApiFragment {
    #[serde(default)]
    pub components: Components,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
}

/// Convert every declaration and the auth block of `document`.
pub fn build_fragment(
    document: &IrDocument,
    options: &FragmentOptions,
) -> Result<OpenApiFragment, AssembleError> {
    let mut components = Components::default();
    let mut owners: HashMap<String, &DeclaredTypeName> = HashMap::new();

    for declaration in &document.types {
        let converted = convert::convert(declaration)?;
        log::debug!(
            "converted {} `{}` → {}",
            declaration.shape.kind(),
            declaration.name,
            converted.schema_name
        );

        if let Some(previous) = owners.insert(converted.schema_name.clone(), &declaration.name) {
            match options.on_collision {
                CollisionPolicy::Overwrite => log::warn!(
                    "schema `{}` from `{}` replaces the one from `{}`",
                    converted.schema_name,
                    declaration.name,
                    previous
                ),
                CollisionPolicy::Error => {
                    return Err(AssembleError::NameCollision {
                        name: converted.schema_name,
                        first: previous.to_string(),
                        second: declaration.name.to_string(),
                    });
                }
            }
        }

        components
            .schemas
            .insert(converted.schema_name, converted.schema);
    }

    components.security_schemes = auth::security_schemes(&document.auth)?;
    let mut security = auth::security_requirements(&document.auth)?;
    if document.auth.schemes.is_empty() {
        security.clear();
    }

    Ok(OpenApiFragment {
        components,
        security,
    })
}
