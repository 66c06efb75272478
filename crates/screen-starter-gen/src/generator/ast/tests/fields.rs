use serde_json::json;

use crate::generator::ast::{DeclaredType, DefaultLiteral, Field, PrimitiveKind};

fn int_field(name: &str) -> Field {
  Field::builder()
    .name(name)
    .declared_type(DeclaredType::primitive(PrimitiveKind::I32))
    .build()
}

#[test]
fn test_field_without_marker_is_required() {
  let field = int_field("id");

  assert!(!field.has_default_marker());
  assert!(!field.has_default_annotation_value());
  assert!(field.is_required());
  assert_eq!(field.default_value_literal(), DefaultLiteral::Int(0));
}

#[test]
fn test_field_with_marker_is_optional() {
  let field = Field::builder()
    .name("tag")
    .declared_type(DeclaredType::String)
    .raw_default(json!("none"))
    .build();

  assert!(field.has_default_marker());
  assert!(field.has_default_annotation_value());
  assert!(field.is_optional());
  assert_eq!(field.default_value_literal(), DefaultLiteral::Str("none".to_string()));
}

#[test]
fn test_zero_marker_is_classified_as_required() {
  let cases = [
    (DeclaredType::primitive(PrimitiveKind::I32), json!(0)),
    (DeclaredType::primitive(PrimitiveKind::F64), json!(0.0)),
    (DeclaredType::primitive(PrimitiveKind::Bool), json!(false)),
    (DeclaredType::boxed(PrimitiveKind::I32), json!(null)),
    (DeclaredType::String, json!(null)),
  ];

  for (declared_type, marker) in cases {
    let field = Field::builder()
      .name("value")
      .declared_type(declared_type.clone())
      .raw_default(marker.clone())
      .build();

    assert!(field.has_default_marker(), "{declared_type} with {marker}");
    assert!(!field.has_default_annotation_value(), "{declared_type} with {marker}");
    assert!(field.is_required(), "{declared_type} with {marker}");
  }
}

#[test]
fn test_zero_literal_on_nullable_type_is_optional() {
  let cases = [
    (DeclaredType::boxed(PrimitiveKind::I64), json!(0), DefaultLiteral::Int(0)),
    (DeclaredType::boxed(PrimitiveKind::Bool), json!(false), DefaultLiteral::Bool(false)),
    (DeclaredType::String, json!(false), DefaultLiteral::Bool(false)),
  ];

  for (declared_type, marker, literal) in cases {
    let field = Field::builder()
      .name("step")
      .declared_type(declared_type.clone())
      .raw_default(marker.clone())
      .build();

    assert!(field.has_default_annotation_value(), "{declared_type} with {marker}");
    assert!(field.is_optional(), "{declared_type} with {marker}");
    assert_eq!(field.default_value_literal(), literal);
  }
}

#[test]
fn test_required_is_negation_of_default_value() {
  let markers = [None, Some(json!(0)), Some(json!(3)), Some(json!(-1)), Some(json!(null))];

  for marker in markers {
    let field = Field::builder()
      .name("count")
      .declared_type(DeclaredType::primitive(PrimitiveKind::I64))
      .maybe_raw_default(marker)
      .build();
    assert_eq!(field.is_required(), !field.has_default_annotation_value());
  }
}

#[test]
fn test_derived_names() {
  let field = int_field("userId");
  assert_eq!(field.const_field_name(), "USER_ID");
  assert_eq!(field.setter_name(), "set_userId");
  assert_eq!(field.getter_name(), "userId");
  assert_eq!(field.key(), "userId");

  let keyword = int_field("type");
  assert_eq!(keyword.name, "r#type");
  assert_eq!(keyword.key(), "type");
  assert_eq!(keyword.const_field_name(), "TYPE");
  assert_eq!(keyword.setter_name(), "set_type");
}

#[test]
fn test_private_flag_defaults_to_false() {
  assert!(!int_field("id").is_private);

  let private = Field::builder()
    .name("count")
    .declared_type(DeclaredType::primitive(PrimitiveKind::I32))
    .is_private(true)
    .build();
  assert!(private.is_private);
}
