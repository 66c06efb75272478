use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::generator::ast::{DeclaredType, TypePath};

pub const DEFAULT_BASE_TYPE: &str = "screen_starter_support::Screen";

/// The symbol model handed over by the host toolchain: every element carrying a
/// screen marker and every element carrying a field marker.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolManifest {
  #[serde(default = "default_base_type")]
  pub base_type: TypePath,
  #[serde(default)]
  pub classes: Vec<ClassEntry>,
  #[serde(default)]
  pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
  #[default]
  Class,
  Field,
  Enum,
  Trait,
  Method,
  #[serde(other)]
  Other,
}

impl ElementKind {
  pub const fn is_class(self) -> bool {
    matches!(self, Self::Class)
  }

  pub const fn is_field(self) -> bool {
    matches!(self, Self::Field)
  }
}

/// An element marked as a screen.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassEntry {
  pub identity: TypePath,
  /// Module path of the screen; derived from `identity` when omitted.
  pub package: Option<String>,
  #[serde(default)]
  pub element: ElementKind,
  #[serde(default, rename = "abstract")]
  pub is_abstract: bool,
  #[serde(default)]
  pub supertypes: Vec<TypePath>,
}

impl ClassEntry {
  #[must_use]
  pub fn package_name(&self) -> String {
    if let Some(package) = &self.package {
      return package.clone();
    }
    self
      .identity
      .as_str()
      .rsplit_once("::")
      .map(|(package, _)| package.to_string())
      .unwrap_or_default()
  }
}

/// An element marked as a payload field.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldEntry {
  pub enclosing: String,
  #[serde(default = "field_element")]
  pub element: ElementKind,
  pub name: String,
  #[serde(rename = "type")]
  pub declared_type: DeclaredType,
  #[serde(default, rename = "private")]
  pub is_private: bool,
  /// `Some(Value::Null)` for an explicit `"default": null`, `None` when no marker is present.
  #[serde(default, deserialize_with = "present_marker")]
  pub default: Option<Value>,
}

fn default_base_type() -> TypePath {
  TypePath::parse(DEFAULT_BASE_TYPE).expect("default base type is a valid path")
}

const fn field_element() -> ElementKind {
  ElementKind::Field
}

fn present_marker<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
  D: Deserializer<'de>,
{
  Value::deserialize(deserializer).map(Some)
}
