use serde_json::json;

use crate::generator::{
  ast::{DeclaredType, PrimitiveKind, TypePath},
  discovery::{ManifestSupertypes, SubtypeCheck, SymbolManifest, discover},
};

struct EverythingIsAScreen;

impl SubtypeCheck for EverythingIsAScreen {
  fn is_subtype_of(&self, _candidate: &TypePath, _base: &TypePath) -> bool {
    true
  }
}

fn manifest(value: serde_json::Value) -> SymbolManifest {
  serde_json::from_value(value).unwrap()
}

#[test]
fn test_detail_screen_is_discovered_with_ordered_fields() {
  let manifest = manifest(json!({
    "classes": [
      { "identity": "crate::screens::Detail", "supertypes": ["screen_starter_support::Screen"] }
    ],
    "fields": [
      { "enclosing": "crate::screens::Detail", "name": "id", "type": { "kind": "primitive", "primitive": "i32" } },
      { "enclosing": "crate::screens::Detail", "name": "tag", "type": { "kind": "string" }, "default": "none" }
    ]
  }));
  let subtypes = ManifestSupertypes::from_classes(&manifest.classes);

  let discovered = discover(&manifest, &subtypes);

  assert_eq!(discovered.classes.len(), 1);
  assert_eq!(discovered.ignored_entries, 0);
  let detail = &discovered.classes[0];
  assert_eq!(detail.package_name, "crate::screens");
  let names = detail.fields().map(|f| f.key().to_string()).collect::<Vec<_>>();
  assert_eq!(names, ["id", "tag"]);
  assert_eq!(
    detail.field("id").map(|f| f.declared_type.clone()),
    Some(DeclaredType::primitive(PrimitiveKind::I32))
  );
  assert!(detail.field("tag").is_some_and(|f| f.is_optional()));
}

#[test]
fn test_malformed_entries_are_ignored_silently() {
  let manifest = manifest(json!({
    "classes": [
      { "identity": "crate::Home" },
      { "identity": "crate::helpers", "element": "method" }
    ],
    "fields": [
      { "enclosing": "crate::Home", "name": "title", "type": { "kind": "string" } },
      { "enclosing": "crate::Home", "name": "open", "element": "method", "type": { "kind": "string" } },
      { "enclosing": "crate::Missing", "name": "lost", "type": { "kind": "string" } },
      { "enclosing": "crate::helpers", "name": "x", "type": { "kind": "string" } },
      { "enclosing": "crate::Home", "name": "not valid", "type": { "kind": "string" } },
      { "enclosing": "crate::Home", "name": "_", "type": { "kind": "string" } }
    ]
  }));

  let discovered = discover(&manifest, &EverythingIsAScreen);

  assert_eq!(discovered.classes.len(), 1);
  assert_eq!(discovered.classes[0].field_count(), 1);
  assert_eq!(discovered.ignored_entries, 6);
}

#[test]
fn test_non_subtypes_are_ignored() {
  let manifest = manifest(json!({
    "classes": [
      { "identity": "crate::Home", "supertypes": ["screen_starter_support::Screen"] },
      { "identity": "crate::Widget", "supertypes": ["crate::View"] }
    ],
    "fields": [
      { "enclosing": "crate::Widget", "name": "size", "type": { "kind": "primitive", "primitive": "u32" } }
    ]
  }));
  let subtypes = ManifestSupertypes::from_classes(&manifest.classes);

  let discovered = discover(&manifest, &subtypes);

  let identities = discovered.classes.iter().map(|c| c.identity.to_string()).collect::<Vec<_>>();
  assert_eq!(identities, ["crate::Home"]);
  assert_eq!(discovered.ignored_entries, 2);
}

#[test]
fn test_abstract_screens_keep_their_fields_but_are_not_emittable() {
  let manifest = manifest(json!({
    "classes": [
      { "identity": "crate::BaseScreen", "abstract": true },
      { "identity": "crate::Detail" }
    ],
    "fields": [
      { "enclosing": "crate::BaseScreen", "name": "session", "type": { "kind": "string" } }
    ]
  }));

  let discovered = discover(&manifest, &EverythingIsAScreen);

  assert_eq!(discovered.classes.len(), 2);
  assert_eq!(discovered.abstract_count(), 1);
  assert_eq!(discovered.classes[0].field_count(), 1);
  let emittable = discovered.emittable().map(|c| c.simple_name().to_string()).collect::<Vec<_>>();
  assert_eq!(emittable, ["Detail"]);
}

#[test]
fn test_duplicate_markers_keep_the_first() {
  let manifest = manifest(json!({
    "classes": [
      { "identity": "crate::Home" },
      { "identity": "crate::Home", "abstract": true }
    ],
    "fields": [
      { "enclosing": "crate::Home", "name": "id", "type": { "kind": "primitive", "primitive": "i64" } },
      { "enclosing": "crate::Home", "name": "id", "type": { "kind": "string" } }
    ]
  }));

  let discovered = discover(&manifest, &EverythingIsAScreen);

  assert_eq!(discovered.classes.len(), 1);
  assert!(!discovered.classes[0].is_abstract);
  assert_eq!(
    discovered.classes[0].field("id").map(|f| f.declared_type.clone()),
    Some(DeclaredType::primitive(PrimitiveKind::I64))
  );
  assert_eq!(discovered.ignored_entries, 2);
}
