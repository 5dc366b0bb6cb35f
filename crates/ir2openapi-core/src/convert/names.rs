use heck::ToLowerCamelCase;

use crate::ir::DeclaredTypeName;

/// Prefix of every component schema pointer.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Derive the `components.schemas` key for a declared type.
///
/// The path segments and the leaf name are joined into one space-separated
/// phrase before casing, so segment boundaries and word boundaries inside a
/// segment are treated alike:
///
/// - `core` / `models` / `user` → `CoreModelsUser`
/// - `my_service` / `userProfile` → `MyServiceUserProfile`
pub fn resolve(name: &DeclaredTypeName) -> String {
    let phrase = name
        .fern_filepath
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(name.name.as_str()))
        .collect::<Vec<_>>()
        .join(" ");

    let camel = phrase.to_lower_camel_case();
    if camel.is_empty() {
        return "Unnamed".to_string();
    }
    upper_first(&camel)
}

/// The `$ref` pointer for a declared type.
pub fn reference(name: &DeclaredTypeName) -> String {
    format!("{SCHEMA_REF_PREFIX}{}", resolve(name))
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
