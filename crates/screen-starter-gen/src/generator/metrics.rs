use strum::Display;

use super::{
  ast::{AnnotatedClass, BuilderUnit},
  discovery::Discovered,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub screens_discovered: usize,
  pub abstract_screens: usize,
  pub builders_generated: usize,
  pub members_generated: usize,
  pub fields_processed: usize,
  pub required_fields: usize,
  pub optional_fields: usize,
  pub private_fields: usize,
  pub ignored_entries: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_discovery(&mut self, discovered: &Discovered) {
    self.screens_discovered += discovered.classes.len();
    self.abstract_screens += discovered.abstract_count();
    self.ignored_entries += discovered.ignored_entries;
  }

  pub fn record_class(&mut self, class: &AnnotatedClass) {
    for field in class.fields() {
      self.fields_processed += 1;
      if field.is_required() {
        self.required_fields += 1;
      } else {
        self.optional_fields += 1;
      }
      if field.is_private {
        self.private_fields += 1;
      }
    }
  }

  pub fn record_builder(&mut self, unit: &BuilderUnit) {
    self.builders_generated += 1;
    self.members_generated += unit.members.len();
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Failed to emit builder for '{screen}': {error}")]
  EmissionFailed { screen: String, error: String },
  #[strum(to_string = "Builder '{builder}' shares its name with another screen; written to module '{module}'")]
  ModuleRenamed { builder: String, module: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::EmissionFailed { .. })
  }
}
