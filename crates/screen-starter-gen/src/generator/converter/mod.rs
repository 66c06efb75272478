mod accessors;
mod methods;

#[cfg(test)]
mod tests;

use super::ast::{AnnotatedClass, BuilderMember, BuilderUnit, FieldBinding};

/// Turns one screen into the ordered member list of its builder.
///
/// Member order: key constants, storage fields, factory and fluent setters,
/// encode, decode, save-state, the two re-entry methods, the four triggers.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BuilderSynthesizer;

impl BuilderSynthesizer {
  /// Abstract screens yield no unit.
  pub fn synthesize(&self, class: &AnnotatedClass) -> Option<BuilderUnit> {
    if class.is_abstract {
      return None;
    }

    let bindings = class.fields().map(FieldBinding::from).collect::<Vec<_>>();

    let mut members: Vec<BuilderMember> = vec![];
    members.extend(accessors::key_constants(class));
    members.extend(accessors::storage_fields(&bindings));
    members.extend(accessors::factory_and_setters(class));
    members.extend(methods::payload_methods(&bindings));
    members.extend(methods::re_entry_methods());
    members.extend(methods::trigger_methods());

    Some(
      BuilderUnit::builder()
        .package_name(class.package_name.clone())
        .name(class.generated_class_name())
        .module(class.module_name())
        .target(class.identity.clone())
        .members(members)
        .build(),
    )
  }
}
