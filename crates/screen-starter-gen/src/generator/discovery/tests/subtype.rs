use serde_json::json;

use crate::generator::{
  ast::TypePath,
  discovery::{ManifestSupertypes, SubtypeCheck, SymbolManifest},
};

fn path(raw: &str) -> TypePath {
  TypePath::parse(raw).unwrap()
}

fn supertypes() -> ManifestSupertypes {
  let manifest: SymbolManifest = serde_json::from_value(json!({
    "classes": [
      { "identity": "crate::BaseScreen", "supertypes": ["screen_starter_support::Screen"] },
      { "identity": "crate::Detail", "supertypes": ["crate::BaseScreen"] },
      { "identity": "crate::Loop", "supertypes": ["crate::Other"] },
      { "identity": "crate::Other", "supertypes": ["crate::Loop"] },
      { "identity": "crate::Plain" }
    ]
  }))
  .unwrap();
  ManifestSupertypes::from_classes(&manifest.classes)
}

#[test]
fn test_direct_and_transitive_subtypes() {
  let check = supertypes();
  let base = path("screen_starter_support::Screen");

  assert!(check.is_subtype_of(&path("crate::BaseScreen"), &base));
  assert!(check.is_subtype_of(&path("crate::Detail"), &base));
  assert!(check.is_subtype_of(&base, &base));
  assert!(!check.is_subtype_of(&path("crate::Plain"), &base));
  assert!(!check.is_subtype_of(&path("crate::Unknown"), &base));
}

#[test]
fn test_cyclic_supertypes_terminate() {
  let check = supertypes();
  assert!(!check.is_subtype_of(&path("crate::Loop"), &path("screen_starter_support::Screen")));
  assert!(check.is_subtype_of(&path("crate::Loop"), &path("crate::Other")));
}
