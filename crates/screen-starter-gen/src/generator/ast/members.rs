use itertools::Itertools;
use strum::Display;

use super::{
  fields::Field,
  literals::DefaultLiteral,
  tokens::{BuilderToken, ConstToken, FieldNameToken, MethodNameToken, ModuleToken},
  types::{DeclaredType, TypePath},
};

/// How generated code reaches a field on the screen instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAccess {
  Direct,
  Accessors {
    setter: MethodNameToken,
    getter: MethodNameToken,
  },
}

/// Everything a generated member needs to know about one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
  pub name: FieldNameToken,
  pub key_const: ConstToken,
  pub declared_type: DeclaredType,
  pub default: DefaultLiteral,
  pub access: FieldAccess,
}

impl From<&Field> for FieldBinding {
  fn from(field: &Field) -> Self {
    let access = if field.is_private {
      FieldAccess::Accessors {
        setter: field.setter_name(),
        getter: field.getter_name(),
      }
    } else {
      FieldAccess::Direct
    };

    Self {
      name: field.name.clone(),
      key_const: field.const_field_name(),
      declared_type: field.declared_type.clone(),
      default: field.default_value_literal(),
      access,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReEntryMode {
  /// Always replaces the remembered payload, then decodes it.
  Replace,
  /// Replaces only when asked to, decodes only when a payload arrived.
  Conditional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerShape {
  pub with_options: bool,
  pub for_result: bool,
}

impl TriggerShape {
  pub const ALL: [Self; 4] = [
    Self {
      with_options: false,
      for_result: false,
    },
    Self {
      with_options: true,
      for_result: false,
    },
    Self {
      with_options: false,
      for_result: true,
    },
    Self {
      with_options: true,
      for_result: true,
    },
  ];

  #[must_use]
  pub fn method_name(self) -> MethodNameToken {
    let name = match (self.for_result, self.with_options) {
      (false, false) => "start",
      (false, true) => "start_with_options",
      (true, false) => "start_for_result",
      (true, true) => "start_for_result_with_options",
    };
    MethodNameToken::new(name)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MemberKind {
  KeyConstant,
  StorageField,
  Factory,
  Setter,
  Encode,
  Decode,
  SaveState,
  ReEntry,
  Trigger,
}

/// One member of a generated builder, in the order it is emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderMember {
  KeyConstant { name: ConstToken, key: String },
  StorageField(FieldBinding),
  Factory { required: Vec<FieldBinding>, optional: Vec<FieldBinding> },
  Setter(FieldBinding),
  Encode(Vec<FieldBinding>),
  Decode(Vec<FieldBinding>),
  SaveState(Vec<FieldBinding>),
  ReEntry(ReEntryMode),
  Trigger(TriggerShape),
}

impl BuilderMember {
  #[must_use]
  pub const fn kind(&self) -> MemberKind {
    match self {
      Self::KeyConstant { .. } => MemberKind::KeyConstant,
      Self::StorageField(_) => MemberKind::StorageField,
      Self::Factory { .. } => MemberKind::Factory,
      Self::Setter(_) => MemberKind::Setter,
      Self::Encode(_) => MemberKind::Encode,
      Self::Decode(_) => MemberKind::Decode,
      Self::SaveState(_) => MemberKind::SaveState,
      Self::ReEntry(_) => MemberKind::ReEntry,
      Self::Trigger(_) => MemberKind::Trigger,
    }
  }

  /// The generated item name: constant, field or method identifier.
  #[must_use]
  pub fn item_name(&self) -> String {
    match self {
      Self::KeyConstant { name, .. } => name.to_string(),
      Self::StorageField(binding) | Self::Setter(binding) => binding.name.to_string(),
      Self::Factory { .. } => "builder".to_string(),
      Self::Encode(_) => "payload".to_string(),
      Self::Decode(_) => "inject".to_string(),
      Self::SaveState(_) => "save_state".to_string(),
      Self::ReEntry(ReEntryMode::Replace) => "process_new_payload".to_string(),
      Self::ReEntry(ReEntryMode::Conditional) => "process_new_payload_with_update".to_string(),
      Self::Trigger(shape) => shape.method_name().to_string(),
    }
  }
}

/// One generated builder: where it lives, what it targets, and its ordered members.
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct BuilderUnit {
  #[builder(into)]
  pub package_name: String,
  pub name: BuilderToken,
  pub module: ModuleToken,
  pub target: TypePath,
  #[builder(default)]
  pub members: Vec<BuilderMember>,
}

impl BuilderUnit {
  #[cfg(test)]
  pub fn members_of(&self, kind: MemberKind) -> impl Iterator<Item = &BuilderMember> {
    self.members.iter().filter(move |member| member.kind() == kind)
  }

  /// Constant and method names defined by more than one member.
  ///
  /// Storage fields are skipped: they live in the struct, not the impl block.
  pub fn clashing_item_names(&self) -> Vec<String> {
    self
      .members
      .iter()
      .filter(|member| member.kind() != MemberKind::StorageField)
      .map(BuilderMember::item_name)
      .duplicates()
      .collect()
  }

  pub fn storage_fields(&self) -> impl Iterator<Item = &FieldBinding> {
    self.members.iter().filter_map(|member| match member {
      BuilderMember::StorageField(binding) => Some(binding),
      _ => None,
    })
  }
}
