use serde_json::json;

use crate::generator::ast::{DeclaredType, PrimitiveKind, TypeCategory, TypePath};

fn compact(tokens: &proc_macro2::TokenStream) -> String {
  tokens.to_string().replace(' ', "")
}

#[test]
fn test_declared_type_from_manifest_json() {
  let cases = [
    (json!({ "kind": "primitive", "primitive": "i32" }), DeclaredType::primitive(PrimitiveKind::I32)),
    (json!({ "kind": "primitive", "primitive": "bool" }), DeclaredType::primitive(PrimitiveKind::Bool)),
    (json!({ "kind": "boxed", "primitive": "f64" }), DeclaredType::boxed(PrimitiveKind::F64)),
    (json!({ "kind": "string" }), DeclaredType::String),
    (
      json!({ "kind": "serializable", "path": "crate::model::User" }),
      DeclaredType::serializable(TypePath::parse("crate::model::User").unwrap()),
    ),
    (
      json!({ "kind": "array", "element": { "kind": "string" } }),
      DeclaredType::array_of(DeclaredType::String),
    ),
  ];

  for (input, expected) in cases {
    let parsed: DeclaredType = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(parsed, expected, "parsing {input} failed");
  }
}

#[test]
fn test_invalid_serializable_path_is_rejected() {
  let result = serde_json::from_value::<DeclaredType>(json!({ "kind": "serializable", "path": "not a path" }));
  assert!(result.is_err());
}

#[test]
fn test_category_dispatch() {
  let cases = [
    (DeclaredType::primitive(PrimitiveKind::I64), TypeCategory::PrimitiveNumeric, false),
    (DeclaredType::primitive(PrimitiveKind::Char), TypeCategory::PrimitiveNumeric, false),
    (DeclaredType::primitive(PrimitiveKind::Bool), TypeCategory::PrimitiveBool, false),
    (DeclaredType::boxed(PrimitiveKind::Bool), TypeCategory::Boxed, true),
    (DeclaredType::String, TypeCategory::String, true),
    (
      DeclaredType::serializable(TypePath::parse("Point").unwrap()),
      TypeCategory::Serializable,
      true,
    ),
    (
      DeclaredType::array_of(DeclaredType::primitive(PrimitiveKind::U8)),
      TypeCategory::Array,
      true,
    ),
  ];

  for (declared, category, nullable) in cases {
    assert_eq!(declared.category(), category, "category of {declared}");
    assert_eq!(declared.category().is_nullable(), nullable, "nullability of {declared}");
  }
}

#[test]
fn test_storage_and_value_types() {
  let cases = [
    (DeclaredType::primitive(PrimitiveKind::I32), "i32", "i32"),
    (DeclaredType::boxed(PrimitiveKind::I32), "Option<i32>", "i32"),
    (DeclaredType::String, "Option<String>", "String"),
    (
      DeclaredType::serializable(TypePath::parse("crate::model::User").unwrap()),
      "Option<crate::model::User>",
      "crate::model::User",
    ),
    (
      DeclaredType::array_of(DeclaredType::primitive(PrimitiveKind::F32)),
      "Option<Vec<f32>>",
      "Vec<f32>",
    ),
    (
      DeclaredType::array_of(DeclaredType::boxed(PrimitiveKind::I32)),
      "Option<Vec<Option<i32>>>",
      "Vec<Option<i32>>",
    ),
    (
      DeclaredType::array_of(DeclaredType::String),
      "Option<Vec<String>>",
      "Vec<String>",
    ),
  ];

  for (declared, storage, value) in cases {
    assert_eq!(compact(&declared.storage_type()), storage, "storage type of {declared}");
    assert_eq!(compact(&declared.value_type()), value, "value type of {declared}");
  }
}

#[test]
fn test_type_path_display_and_equality() {
  let path = TypePath::parse(" crate::screens::Detail ").unwrap();
  assert_eq!(path.as_str(), "crate::screens::Detail");
  assert_eq!(path, TypePath::parse("crate::screens::Detail").unwrap());
  assert_eq!(path.to_string(), "crate::screens::Detail");
}
