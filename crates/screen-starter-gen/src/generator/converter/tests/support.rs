use serde_json::json;

use crate::generator::ast::{AnnotatedClass, DeclaredType, Field, PrimitiveKind, TypePath};

pub(super) fn screen(identity: &str, fields: impl IntoIterator<Item = Field>) -> AnnotatedClass {
  let mut class = AnnotatedClass::builder()
    .identity(TypePath::parse(identity).unwrap())
    .package_name("crate::screens")
    .build();
  for field in fields {
    class.add_field(field);
  }
  class
}

pub(super) fn detail() -> AnnotatedClass {
  screen(
    "crate::screens::Detail",
    [
      Field::builder()
        .name("id")
        .declared_type(DeclaredType::primitive(PrimitiveKind::I32))
        .build(),
      Field::builder()
        .name("tag")
        .declared_type(DeclaredType::String)
        .raw_default(json!("none"))
        .build(),
    ],
  )
}
