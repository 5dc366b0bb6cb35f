pub mod auth;
pub mod names;
pub mod types;

pub use auth::{scheme_name, security_requirements, security_schemes};
pub use types::{ConvertedSchema, convert, convert_type_reference};
