use std::collections::{BTreeSet, HashMap, VecDeque};

use super::manifest::ClassEntry;
use crate::generator::ast::TypePath;

/// Answers whether a type is the base type or one of its subtypes.
pub trait SubtypeCheck {
  fn is_subtype_of(&self, candidate: &TypePath, base: &TypePath) -> bool;
}

/// Subtype check backed by the supertypes each manifest class declares.
///
/// Declared supertypes that are themselves manifest classes are followed transitively.
#[derive(Debug, Clone, Default)]
pub struct ManifestSupertypes {
  supertypes: HashMap<String, Vec<String>>,
}

impl ManifestSupertypes {
  pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a ClassEntry>) -> Self {
    let mut supertypes: HashMap<String, Vec<String>> = HashMap::new();
    for class in classes {
      supertypes
        .entry(class.identity.to_string())
        .or_default()
        .extend(class.supertypes.iter().map(ToString::to_string));
    }
    Self { supertypes }
  }
}

impl SubtypeCheck for ManifestSupertypes {
  fn is_subtype_of(&self, candidate: &TypePath, base: &TypePath) -> bool {
    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::from([candidate.as_str()]);

    while let Some(current) = queue.pop_front() {
      if current == base.as_str() {
        return true;
      }
      if !visited.insert(current) {
        continue;
      }
      if let Some(parents) = self.supertypes.get(current) {
        queue.extend(parents.iter().map(String::as_str));
      }
    }

    false
  }
}
