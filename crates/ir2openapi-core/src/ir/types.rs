use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a declared type: its namespace path plus a leaf name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredTypeName {
    #[serde(default)]
    pub fern_filepath: Vec<String>,
    pub name: String,
}

impl DeclaredTypeName {
    pub fn new<I, S>(fern_filepath: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fern_filepath: fern_filepath.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }
}

impl fmt::Display for DeclaredTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.fern_filepath {
            write!(f, "{segment}.")?;
        }
        write!(f, "{}", self.name)
    }
}

/// A reference to a type, as used by properties, aliases and union variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum TypeReference {
    Primitive {
        primitive: PrimitiveType,
    },
    Container {
        container: ContainerType,
    },
    Named(DeclaredTypeName),
    Unknown,
    Void,
    /// A reference kind this crate does not understand.
    #[serde(untagged)]
    Unrecognized(serde_json::Value),
}

impl TypeReference {
    /// `_type` tags this crate understands.
    pub const TAGS: &'static [&'static str] =
        &["primitive", "container", "named", "unknown", "void"];

    pub fn primitive(primitive: PrimitiveType) -> Self {
        TypeReference::Primitive { primitive }
    }

    pub fn named(name: DeclaredTypeName) -> Self {
        TypeReference::Named(name)
    }

    pub fn list(element: TypeReference) -> Self {
        TypeReference::Container {
            container: ContainerType::List {
                list: Box::new(element),
            },
        }
    }

    pub fn set(element: TypeReference) -> Self {
        TypeReference::Container {
            container: ContainerType::Set {
                set: Box::new(element),
            },
        }
    }

    pub fn map(key_type: TypeReference, value_type: TypeReference) -> Self {
        TypeReference::Container {
            container: ContainerType::Map(MapType {
                key_type: Box::new(key_type),
                value_type: Box::new(value_type),
            }),
        }
    }

    pub fn optional(inner: TypeReference) -> Self {
        TypeReference::Container {
            container: ContainerType::Optional {
                optional: Box::new(inner),
            },
        }
    }

    /// Whether this reference is an `optional` container at the top level.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            TypeReference::Container {
                container: ContainerType::Optional { .. }
            }
        )
    }
}

/// Built-in scalar kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimitiveType {
    Integer,
    Double,
    String,
    Boolean,
    Long,
    DateTime,
    Uuid,
    #[serde(untagged)]
    Unrecognized(String),
}

/// Wrapping container kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum ContainerType {
    List { list: Box<TypeReference> },
    Set { set: Box<TypeReference> },
    Map(MapType),
    Optional { optional: Box<TypeReference> },
    #[serde(untagged)]
    Unrecognized(serde_json::Value),
}

impl ContainerType {
    pub const TAGS: &'static [&'static str] = &["list", "set", "map", "optional"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapType {
    pub key_type: Box<TypeReference>,
    pub value_type: Box<TypeReference>,
}

/// A named, documented type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: DeclaredTypeName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    pub shape: TypeShape,
}

/// The structural kind of a declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum TypeShape {
    Alias(AliasTypeDeclaration),
    Enum(EnumTypeDeclaration),
    Object(ObjectTypeDeclaration),
    Union(UnionTypeDeclaration),
    #[serde(untagged)]
    Unrecognized(serde_json::Value),
}

impl TypeShape {
    pub const TAGS: &'static [&'static str] = &["alias", "enum", "object", "union"];

    /// Lowercase kind label, as it appears in the `_type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeShape::Alias(_) => "alias",
            TypeShape::Enum(_) => "enum",
            TypeShape::Object(_) => "object",
            TypeShape::Union(_) => "union",
            TypeShape::Unrecognized(_) => "unrecognized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasTypeDeclaration {
    pub alias_of: TypeReference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumTypeDeclaration {
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectTypeDeclaration {
    /// Supertypes whose properties this object inherits.
    #[serde(default)]
    pub extends: Vec<DeclaredTypeName>,
    #[serde(default)]
    pub properties: Vec<ObjectProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectProperty {
    pub key: String,
    pub value_type: TypeReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionTypeDeclaration {
    /// Name of the field that carries the variant tag.
    pub discriminant: String,
    #[serde(default)]
    pub types: Vec<SingleUnionType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleUnionType {
    pub discriminant_value: String,
    pub value_type: TypeReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}
