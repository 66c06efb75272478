use crate::generator::ast::{AnnotatedClass, BuilderMember, FieldBinding};

pub(super) fn key_constants(class: &AnnotatedClass) -> impl Iterator<Item = BuilderMember> + '_ {
  class.fields().map(|field| BuilderMember::KeyConstant {
    name: field.const_field_name(),
    key: field.key().to_string(),
  })
}

pub(super) fn storage_fields(bindings: &[FieldBinding]) -> impl Iterator<Item = BuilderMember> + '_ {
  bindings.iter().cloned().map(BuilderMember::StorageField)
}

/// The factory takes the required fields as parameters; each optional field gets a chainable setter.
pub(super) fn factory_and_setters(class: &AnnotatedClass) -> Vec<BuilderMember> {
  let required = class.required_fields().map(FieldBinding::from).collect::<Vec<_>>();
  let optional = class.optional_fields().map(FieldBinding::from).collect::<Vec<_>>();

  let setters = optional.iter().cloned().map(BuilderMember::Setter).collect::<Vec<_>>();

  std::iter::once(BuilderMember::Factory { required, optional })
    .chain(setters)
    .collect()
}
