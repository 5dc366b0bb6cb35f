use indexmap::IndexMap;

use crate::error::ConvertError;
use crate::ir::{
    AliasTypeDeclaration, ContainerType, EnumTypeDeclaration, ObjectTypeDeclaration,
    PrimitiveType, SingleUnionType, TypeDeclaration, TypeReference, TypeShape,
    UnionTypeDeclaration, unrecognized_error,
};
use crate::openapi::{Schema, SchemaOrRef, SchemaType};

use super::names;

/// A declared type converted into a component schema, keyed by its schema name.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedSchema {
    pub schema_name: String,
    pub schema: SchemaOrRef,
}

/// Convert a `TypeDeclaration` into its component schema.
pub fn convert(declaration: &TypeDeclaration) -> Result<ConvertedSchema, ConvertError> {
    let docs = declaration.docs.clone();
    let schema = match &declaration.shape {
        TypeShape::Alias(alias) => convert_alias(alias, docs)?,
        TypeShape::Enum(enumeration) => convert_enum(enumeration, docs),
        TypeShape::Object(object) => convert_object(object, docs)?,
        TypeShape::Union(union) => convert_union(union, docs)?,
        TypeShape::Unrecognized(value) => {
            return Err(unrecognized_error(
                value,
                "type shape",
                TypeShape::TAGS,
                ConvertError::UnrecognizedShape,
            ));
        }
    };

    Ok(ConvertedSchema {
        schema_name: names::resolve(&declaration.name),
        schema,
    })
}

fn convert_alias(
    alias: &AliasTypeDeclaration,
    docs: Option<String>,
) -> Result<SchemaOrRef, ConvertError> {
    Ok(convert_type_reference(&alias.alias_of)?.with_description(docs))
}

fn convert_enum(enumeration: &EnumTypeDeclaration, docs: Option<String>) -> SchemaOrRef {
    Schema {
        schema_type: Some(SchemaType::String),
        enum_values: Some(enumeration.values.iter().map(|v| v.value.clone()).collect()),
        description: docs,
        ..Default::default()
    }
    .into()
}

fn convert_object(
    object: &ObjectTypeDeclaration,
    docs: Option<String>,
) -> Result<SchemaOrRef, ConvertError> {
    let mut properties = IndexMap::with_capacity(object.properties.len());
    let mut required = Vec::new();

    for property in &object.properties {
        let schema =
            convert_type_reference(&property.value_type)?.with_description(property.docs.clone());
        properties.insert(property.key.clone(), schema);
        if !property.value_type.is_optional() {
            required.push(property.key.clone());
        }
    }

    let all_of = object
        .extends
        .iter()
        .map(|parent| SchemaOrRef::reference(names::reference(parent)))
        .collect();

    Ok(Schema {
        schema_type: Some(SchemaType::Object),
        description: docs,
        properties,
        required,
        all_of,
        ..Default::default()
    }
    .into())
}

fn convert_union(
    union: &UnionTypeDeclaration,
    docs: Option<String>,
) -> Result<SchemaOrRef, ConvertError> {
    let one_of = union
        .types
        .iter()
        .map(|variant| convert_union_variant(&union.discriminant, variant))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Schema {
        one_of: Some(one_of),
        description: docs,
        ..Default::default()
    }
    .into())
}

/// Named variants merge a single-value tag enum next to the referenced type.
/// Any other variant stores its payload schema under the discriminant key
/// itself, so the tag value does not appear in the output.
fn convert_union_variant(
    discriminant: &str,
    variant: &SingleUnionType,
) -> Result<SchemaOrRef, ConvertError> {
    let schema = match &variant.value_type {
        TypeReference::Named(name) => {
            let tag = Schema {
                schema_type: Some(SchemaType::String),
                enum_values: Some(vec![variant.discriminant_value.clone()]),
                ..Default::default()
            };
            let tag_object = Schema {
                schema_type: Some(SchemaType::Object),
                properties: IndexMap::from([(discriminant.to_string(), tag.into())]),
                ..Default::default()
            };
            Schema {
                schema_type: Some(SchemaType::Object),
                all_of: vec![
                    SchemaOrRef::reference(names::reference(name)),
                    tag_object.into(),
                ],
                ..Default::default()
            }
        }
        other => Schema {
            schema_type: Some(SchemaType::Object),
            properties: IndexMap::from([(
                discriminant.to_string(),
                convert_type_reference(other)?,
            )]),
            ..Default::default()
        },
    };
    Ok(schema.into())
}

/// Convert a `TypeReference` into a schema or `$ref`.
///
/// Named references always become a `$ref` and are never followed, so cycles
/// in the declared type graph cannot cause unbounded recursion.
pub fn convert_type_reference(type_ref: &TypeReference) -> Result<SchemaOrRef, ConvertError> {
    match type_ref {
        TypeReference::Primitive { primitive } => Ok(convert_primitive(primitive)?.into()),
        TypeReference::Container { container } => convert_container(container),
        TypeReference::Named(name) => Ok(SchemaOrRef::reference(names::reference(name))),
        TypeReference::Unknown | TypeReference::Void => Ok(Schema::default().into()),
        TypeReference::Unrecognized(value) => Err(unrecognized_error(
            value,
            "type reference",
            TypeReference::TAGS,
            ConvertError::UnrecognizedTypeReference,
        )),
    }
}

fn convert_container(container: &ContainerType) -> Result<SchemaOrRef, ConvertError> {
    match container {
        ContainerType::List { list: element } | ContainerType::Set { set: element } => {
            Ok(Schema {
                schema_type: Some(SchemaType::Array),
                items: Some(Box::new(convert_type_reference(element)?)),
                ..Default::default()
            }
            .into())
        }
        ContainerType::Map(map) => Ok(Schema {
            schema_type: Some(SchemaType::Object),
            additional_properties: Some(Box::new(convert_type_reference(&map.value_type)?)),
            ..Default::default()
        }
        .into()),
        ContainerType::Optional { optional } => convert_type_reference(optional),
        ContainerType::Unrecognized(value) => Err(unrecognized_error(
            value,
            "container type",
            ContainerType::TAGS,
            ConvertError::UnrecognizedContainer,
        )),
    }
}

fn convert_primitive(primitive: &PrimitiveType) -> Result<Schema, ConvertError> {
    let schema = match primitive {
        PrimitiveType::Boolean => Schema::typed(SchemaType::Boolean),
        PrimitiveType::String => Schema::typed(SchemaType::String),
        PrimitiveType::DateTime => Schema::formatted(SchemaType::String, "date-time"),
        PrimitiveType::Double => Schema::formatted(SchemaType::Number, "double"),
        PrimitiveType::Integer => Schema::typed(SchemaType::Integer),
        PrimitiveType::Long => Schema::formatted(SchemaType::Integer, "int64"),
        PrimitiveType::Uuid => Schema::formatted(SchemaType::String, "uuid"),
        PrimitiveType::Unrecognized(other) => {
            return Err(ConvertError::UnrecognizedPrimitive(other.clone()));
        }
    };
    Ok(schema)
}
