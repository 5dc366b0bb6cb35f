use ir2openapi_core::convert::{convert, convert_type_reference};
use ir2openapi_core::error::ConvertError;
use ir2openapi_core::ir::*;
use ir2openapi_core::openapi::SchemaOrRef;
use serde_json::{Value, json};

fn declared(path: &[&str], name: &str) -> DeclaredTypeName {
    DeclaredTypeName::new(path.iter().copied(), name)
}

fn string() -> TypeReference {
    TypeReference::primitive(PrimitiveType::String)
}

fn to_json(schema: &SchemaOrRef) -> Value {
    serde_json::to_value(schema).unwrap()
}

fn reference_json(type_ref: &TypeReference) -> Value {
    to_json(&convert_type_reference(type_ref).unwrap())
}

fn property(key: &str, value_type: TypeReference) -> ObjectProperty {
    ObjectProperty {
        key: key.to_string(),
        value_type,
        docs: None,
    }
}

fn declaration(name: DeclaredTypeName, docs: Option<&str>, shape: TypeShape) -> TypeDeclaration {
    TypeDeclaration {
        name,
        docs: docs.map(str::to_string),
        shape,
    }
}

#[test]
fn primitives_follow_fixed_table() {
    let cases = [
        (PrimitiveType::Boolean, json!({"type": "boolean"})),
        (PrimitiveType::String, json!({"type": "string"})),
        (
            PrimitiveType::DateTime,
            json!({"type": "string", "format": "date-time"}),
        ),
        (
            PrimitiveType::Double,
            json!({"type": "number", "format": "double"}),
        ),
        (PrimitiveType::Integer, json!({"type": "integer"})),
        (
            PrimitiveType::Long,
            json!({"type": "integer", "format": "int64"}),
        ),
        (
            PrimitiveType::Uuid,
            json!({"type": "string", "format": "uuid"}),
        ),
    ];
    for (primitive, expected) in cases {
        assert_eq!(
            reference_json(&TypeReference::primitive(primitive.clone())),
            expected,
            "{primitive:?}"
        );
    }
}

#[test]
fn list_and_set_are_both_arrays() {
    let expected = json!({"type": "array", "items": {"type": "string"}});
    assert_eq!(reference_json(&TypeReference::list(string())), expected);
    assert_eq!(reference_json(&TypeReference::set(string())), expected);
}

#[test]
fn map_drops_key_type() {
    let map = TypeReference::map(
        TypeReference::primitive(PrimitiveType::Uuid),
        TypeReference::primitive(PrimitiveType::Integer),
    );
    assert_eq!(
        reference_json(&map),
        json!({"type": "object", "additionalProperties": {"type": "integer"}})
    );
}

#[test]
fn optional_is_transparent() {
    let inner = TypeReference::list(TypeReference::named(declared(&["core"], "tag")));
    let optional = TypeReference::optional(inner.clone());
    assert_eq!(
        convert_type_reference(&optional).unwrap(),
        convert_type_reference(&inner).unwrap()
    );
}

#[test]
fn optional_nested_inside_containers() {
    let list_of_optional = TypeReference::list(TypeReference::optional(string()));
    assert_eq!(
        reference_json(&list_of_optional),
        json!({"type": "array", "items": {"type": "string"}})
    );
}

#[test]
fn unknown_and_void_are_empty_schemas() {
    assert_eq!(reference_json(&TypeReference::Unknown), json!({}));
    assert_eq!(reference_json(&TypeReference::Void), json!({}));
}

#[test]
fn named_becomes_ref() {
    let named = TypeReference::named(declared(&["core", "models"], "user"));
    assert_eq!(
        reference_json(&named),
        json!({"$ref": "#/components/schemas/CoreModelsUser"})
    );
}

#[test]
fn alias_takes_declaration_docs() {
    let decl = declaration(
        declared(&["imdb"], "movieId"),
        Some("Movie identifier."),
        TypeShape::Alias(AliasTypeDeclaration {
            alias_of: TypeReference::primitive(PrimitiveType::Uuid),
        }),
    );
    let converted = convert(&decl).unwrap();
    assert_eq!(converted.schema_name, "ImdbMovieId");
    assert_eq!(
        to_json(&converted.schema),
        json!({"type": "string", "format": "uuid", "description": "Movie identifier."})
    );
}

#[test]
fn alias_of_named_type_keeps_ref() {
    let decl = declaration(
        declared(&[], "account"),
        Some("Alias for a user."),
        TypeShape::Alias(AliasTypeDeclaration {
            alias_of: TypeReference::named(declared(&["core"], "user")),
        }),
    );
    let converted = convert(&decl).unwrap();
    assert_eq!(
        to_json(&converted.schema),
        json!({"$ref": "#/components/schemas/CoreUser", "description": "Alias for a user."})
    );
}

#[test]
fn enum_preserves_value_order() {
    let decl = declaration(
        declared(&[], "color"),
        Some("Primary colors."),
        TypeShape::Enum(EnumTypeDeclaration {
            values: ["RED", "GREEN", "BLUE"]
                .into_iter()
                .map(|value| EnumValue {
                    value: value.to_string(),
                    docs: None,
                })
                .collect(),
        }),
    );
    let converted = convert(&decl).unwrap();
    assert_eq!(
        to_json(&converted.schema),
        json!({
            "type": "string",
            "enum": ["RED", "GREEN", "BLUE"],
            "description": "Primary colors.",
        })
    );
}

#[test]
fn object_required_excludes_optional_properties() {
    let decl = declaration(
        declared(&["core"], "user"),
        None,
        TypeShape::Object(ObjectTypeDeclaration {
            extends: vec![],
            properties: vec![
                property("nickname", TypeReference::optional(string())),
                ObjectProperty {
                    docs: Some("Login name.".to_string()),
                    ..property("username", string())
                },
                property("age", TypeReference::primitive(PrimitiveType::Integer)),
                property(
                    "emails",
                    TypeReference::list(TypeReference::optional(string())),
                ),
            ],
        }),
    );
    let converted = convert(&decl).unwrap();
    let schema = converted.schema.as_schema().expect("inline schema");

    let keys: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["nickname", "username", "age", "emails"]);
    assert_eq!(schema.required, ["username", "age", "emails"]);
    assert_eq!(
        to_json(&schema.properties["username"]),
        json!({"type": "string", "description": "Login name."})
    );
    assert!(schema.all_of.is_empty());
}

#[test]
fn object_extends_becomes_all_of() {
    let decl = declaration(
        declared(&["zoo"], "dog"),
        Some("A good dog."),
        TypeShape::Object(ObjectTypeDeclaration {
            extends: vec![declared(&["zoo"], "animal"), declared(&["zoo"], "pet")],
            properties: vec![property("breed", string())],
        }),
    );
    let converted = convert(&decl).unwrap();
    assert_eq!(
        to_json(&converted.schema),
        json!({
            "type": "object",
            "description": "A good dog.",
            "properties": {"breed": {"type": "string"}},
            "required": ["breed"],
            "allOf": [
                {"$ref": "#/components/schemas/ZooAnimal"},
                {"$ref": "#/components/schemas/ZooPet"},
            ],
        })
    );
}

#[test]
fn empty_object_is_well_formed() {
    let decl = declaration(
        declared(&[], "empty"),
        None,
        TypeShape::Object(ObjectTypeDeclaration {
            extends: vec![],
            properties: vec![],
        }),
    );
    assert_eq!(
        to_json(&convert(&decl).unwrap().schema),
        json!({"type": "object"})
    );
}

#[test]
fn union_named_variant_merges_tag_enum() {
    let decl = declaration(
        declared(&[], "shape"),
        Some("A drawable shape."),
        TypeShape::Union(UnionTypeDeclaration {
            discriminant: "kind".to_string(),
            types: vec![SingleUnionType {
                discriminant_value: "circle".to_string(),
                value_type: TypeReference::named(declared(&["geometry"], "circle")),
                docs: None,
            }],
        }),
    );
    assert_eq!(
        to_json(&convert(&decl).unwrap().schema),
        json!({
            "description": "A drawable shape.",
            "oneOf": [{
                "type": "object",
                "allOf": [
                    {"$ref": "#/components/schemas/GeometryCircle"},
                    {
                        "type": "object",
                        "properties": {"kind": {"type": "string", "enum": ["circle"]}},
                    },
                ],
            }],
        })
    );
}

/// Known asymmetry: a non-named variant puts its payload schema under the
/// discriminant key, so the tag value ("label") does not appear anywhere.
#[test]
fn union_non_named_variant_known_asymmetry() {
    let decl = declaration(
        declared(&[], "shape"),
        None,
        TypeShape::Union(UnionTypeDeclaration {
            discriminant: "kind".to_string(),
            types: vec![SingleUnionType {
                discriminant_value: "label".to_string(),
                value_type: string(),
                docs: None,
            }],
        }),
    );
    let json = to_json(&convert(&decl).unwrap().schema);
    assert_eq!(
        json,
        json!({"oneOf": [{"type": "object", "properties": {"kind": {"type": "string"}}}]})
    );
    assert!(!json.to_string().contains("label"));
}

#[test]
fn union_preserves_variant_order() {
    let variant = |value: &str, name: &str| SingleUnionType {
        discriminant_value: value.to_string(),
        value_type: TypeReference::named(declared(&[], name)),
        docs: None,
    };
    let decl = declaration(
        declared(&[], "event"),
        None,
        TypeShape::Union(UnionTypeDeclaration {
            discriminant: "type".to_string(),
            types: vec![
                variant("z", "zebra"),
                variant("a", "aardvark"),
                variant("m", "meerkat"),
            ],
        }),
    );
    let converted = convert(&decl).unwrap();
    let refs: Vec<&str> = converted
        .schema
        .as_schema()
        .unwrap()
        .one_of
        .as_deref()
        .unwrap()
        .iter()
        .map(|v| v.as_schema().unwrap().all_of[0].ref_path().unwrap())
        .collect();
    assert_eq!(
        refs,
        [
            "#/components/schemas/Zebra",
            "#/components/schemas/Aardvark",
            "#/components/schemas/Meerkat",
        ]
    );
}

#[test]
fn conversion_is_idempotent() {
    let decl = declaration(
        declared(&["core"], "node"),
        Some("Self-referential."),
        TypeShape::Object(ObjectTypeDeclaration {
            extends: vec![],
            properties: vec![property(
                "next",
                TypeReference::optional(TypeReference::named(declared(&["core"], "node"))),
            )],
        }),
    );
    assert_eq!(convert(&decl).unwrap(), convert(&decl).unwrap());
}

#[test]
fn unrecognized_shape_fails() {
    let decl = declaration(
        declared(&[], "mystery"),
        None,
        TypeShape::Unrecognized(json!({"_type": "undiscriminatedUnion", "members": []})),
    );
    assert_eq!(
        convert(&decl).unwrap_err(),
        ConvertError::UnrecognizedShape("undiscriminatedUnion".to_string())
    );
}

#[test]
fn unrecognized_reference_inside_object_fails() {
    let decl = declaration(
        declared(&[], "holder"),
        None,
        TypeShape::Object(ObjectTypeDeclaration {
            extends: vec![],
            properties: vec![
                property("ok", string()),
                property(
                    "bad",
                    TypeReference::Unrecognized(json!({"_type": "literal", "literal": "x"})),
                ),
            ],
        }),
    );
    assert_eq!(
        convert(&decl).unwrap_err(),
        ConvertError::UnrecognizedTypeReference("literal".to_string())
    );
}

#[test]
fn unrecognized_container_fails() {
    let tuple = TypeReference::Container {
        container: ContainerType::Unrecognized(json!({"_type": "tuple"})),
    };
    assert_eq!(
        convert_type_reference(&TypeReference::list(tuple)).unwrap_err(),
        ConvertError::UnrecognizedContainer("tuple".to_string())
    );
}

#[test]
fn empty_enum_keeps_enum_key() {
    let decl = declaration(
        declared(&[], "nothing"),
        None,
        TypeShape::Enum(EnumTypeDeclaration { values: vec![] }),
    );
    assert_eq!(
        to_json(&convert(&decl).unwrap().schema),
        json!({"type": "string", "enum": []})
    );
}

#[test]
fn empty_union_keeps_one_of() {
    let decl = declaration(
        declared(&[], "never"),
        Some("Has no variants."),
        TypeShape::Union(UnionTypeDeclaration {
            discriminant: "k".to_string(),
            types: vec![],
        }),
    );
    assert_eq!(
        to_json(&convert(&decl).unwrap().schema),
        json!({"description": "Has no variants.", "oneOf": []})
    );
}

fn single_declaration(shape: &str) -> TypeDeclaration {
    let json = format!(r#"{{"types": [{{"name": {{"name": "holder"}}, "shape": {shape}}}]}}"#);
    ir2openapi_core::ir::from_json(&json)
        .unwrap()
        .types
        .remove(0)
}

#[test]
fn known_reference_tag_with_bad_payload_is_malformed() {
    let decl = single_declaration(
        r#"{"_type": "alias", "aliasOf": {"_type": "named", "fernFilepath": []}}"#,
    );
    let err = convert(&decl).unwrap_err();
    assert_eq!(
        err,
        ConvertError::Malformed {
            kind: "type reference",
            tag: "named".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "malformed type reference `named`: payload does not match the expected fields"
    );
}

#[test]
fn known_container_tag_with_bad_payload_is_malformed() {
    let decl = single_declaration(
        r#"{"_type": "alias", "aliasOf": {"_type": "container", "container": {"_type": "map"}}}"#,
    );
    assert_eq!(
        convert(&decl).unwrap_err(),
        ConvertError::Malformed {
            kind: "container type",
            tag: "map".to_string(),
        }
    );
}

#[test]
fn known_shape_tag_with_bad_payload_is_malformed() {
    let decl = single_declaration(r#"{"_type": "union", "types": []}"#);
    assert_eq!(
        convert(&decl).unwrap_err(),
        ConvertError::Malformed {
            kind: "type shape",
            tag: "union".to_string(),
        }
    );
}
