pub mod components;
pub mod schema;
pub mod security;

pub use components::Components;
pub use schema::{Schema, SchemaOrRef, SchemaType};
pub use security::{ApiKeyLocation, SecurityRequirement, SecurityScheme, SecuritySchemeType};
