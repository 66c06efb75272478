mod manifest;
mod subtype;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

pub use manifest::SymbolManifest;
use manifest::{ClassEntry, FieldEntry};
#[cfg(test)]
pub use manifest::{DEFAULT_BASE_TYPE, ElementKind};
pub use subtype::{ManifestSupertypes, SubtypeCheck};

use crate::generator::ast::{AnnotatedClass, Field, TypePath};

static FIELD_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(r#)?[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Screens found in a manifest, in the order their markers were observed.
#[derive(Debug, Clone, Default)]
pub struct Discovered {
  pub classes: Vec<AnnotatedClass>,
  /// Marked entries that did not describe a usable screen or field.
  pub ignored_entries: usize,
}

impl Discovered {
  pub fn emittable(&self) -> impl Iterator<Item = &AnnotatedClass> {
    self.classes.iter().filter(|class| !class.is_abstract)
  }

  pub fn abstract_count(&self) -> usize {
    self.classes.iter().filter(|class| class.is_abstract).count()
  }
}

/// Builds class models from the manifest's marker events.
///
/// Malformed entries are dropped without an error: screen markers on non-class
/// elements, screens that are not subtypes of the base type, field markers on
/// non-field elements, field markers whose enclosing element is not a recorded
/// screen, and fields whose names are not Rust identifiers.
pub fn discover(manifest: &SymbolManifest, subtypes: &dyn SubtypeCheck) -> Discovered {
  let mut classes: IndexMap<String, AnnotatedClass> = IndexMap::new();
  let mut ignored_entries = 0;

  for entry in &manifest.classes {
    if !entry.element.is_class()
      || !subtypes.is_subtype_of(&entry.identity, &manifest.base_type)
      || classes.contains_key(entry.identity.as_str())
    {
      ignored_entries += 1;
      continue;
    }

    classes.insert(entry.identity.to_string(), class_from_entry(entry));
  }

  for entry in &manifest.fields {
    if !entry.element.is_field() || !is_valid_field_name(&entry.name) {
      ignored_entries += 1;
      continue;
    }

    let Some(class) = classes.get_mut(enclosing_key(&entry.enclosing).as_str()) else {
      ignored_entries += 1;
      continue;
    };

    if !class.add_field(field_from_entry(entry)) {
      ignored_entries += 1;
    }
  }

  Discovered {
    classes: classes.into_values().collect(),
    ignored_entries,
  }
}

fn class_from_entry(entry: &ClassEntry) -> AnnotatedClass {
  AnnotatedClass::builder()
    .identity(entry.identity.clone())
    .package_name(entry.package_name())
    .is_abstract(entry.is_abstract)
    .build()
}

fn field_from_entry(entry: &FieldEntry) -> Field {
  Field::builder()
    .name(entry.name.as_str())
    .declared_type(entry.declared_type.clone())
    .is_private(entry.is_private)
    .maybe_raw_default(entry.default.clone())
    .build()
}

// Enclosing identities go through the same normalization as class identities.
fn enclosing_key(enclosing: &str) -> String {
  TypePath::parse(enclosing).map_or_else(|_| enclosing.trim().to_string(), |path| path.to_string())
}

fn is_valid_field_name(name: &str) -> bool {
  name != "_" && FIELD_NAME_RE.is_match(name)
}
