use crate::generator::ast::{BuilderMember, FieldBinding, ReEntryMode, TriggerShape};

pub(super) fn payload_methods(bindings: &[FieldBinding]) -> [BuilderMember; 3] {
  [
    BuilderMember::Encode(bindings.to_vec()),
    BuilderMember::Decode(bindings.to_vec()),
    BuilderMember::SaveState(bindings.to_vec()),
  ]
}

pub(super) fn re_entry_methods() -> [BuilderMember; 2] {
  [
    BuilderMember::ReEntry(ReEntryMode::Replace),
    BuilderMember::ReEntry(ReEntryMode::Conditional),
  ]
}

pub(super) fn trigger_methods() -> impl Iterator<Item = BuilderMember> {
  TriggerShape::ALL.into_iter().map(BuilderMember::Trigger)
}
