use indexmap::IndexMap;

use super::{
  fields::Field,
  tokens::{BuilderToken, ModuleToken},
  types::TypePath,
};
use crate::generator::naming::identifiers::simple_name;

/// A screen selected for builder generation, with its fields in discovery order.
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct AnnotatedClass {
  pub identity: TypePath,
  #[builder(into)]
  pub package_name: String,
  #[builder(default)]
  pub is_abstract: bool,
  #[builder(default)]
  fields: IndexMap<String, Field>,
}

impl AnnotatedClass {
  /// Records a field; a second field with an already-seen name is dropped.
  pub fn add_field(&mut self, field: Field) -> bool {
    let key = field.key().to_string();
    if self.fields.contains_key(&key) {
      return false;
    }
    self.fields.insert(key, field);
    true
  }

  pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> {
    self.fields.values()
  }

  #[cfg(test)]
  pub fn field(&self, name: &str) -> Option<&Field> {
    self.fields.get(name)
  }

  #[must_use]
  pub fn field_count(&self) -> usize {
    self.fields.len()
  }

  #[must_use]
  pub fn simple_name(&self) -> &str {
    simple_name(self.identity.as_str())
  }

  #[must_use]
  pub fn generated_class_name(&self) -> BuilderToken {
    BuilderToken::new(&format!("{}Builder", self.simple_name()))
  }

  #[must_use]
  pub fn module_name(&self) -> ModuleToken {
    ModuleToken::for_builder(&self.generated_class_name())
  }

  pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
    self.fields().filter(|field| field.is_required())
  }

  pub fn optional_fields(&self) -> impl Iterator<Item = &Field> {
    self.fields().filter(|field| field.is_optional())
  }
}
