use serde_json::Value;

use super::{
  literals::DefaultLiteral,
  tokens::{ConstToken, FieldNameToken, MethodNameToken},
  types::DeclaredType,
};

/// One annotated, payload-carrying field of a screen.
///
/// Everything beyond the four declared attributes is derived on demand.
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct Field {
  #[builder(into)]
  pub name: FieldNameToken,
  pub declared_type: DeclaredType,
  #[builder(default)]
  pub is_private: bool,
  /// The literal attached to the default marker, when the field carries one.
  pub raw_default: Option<Value>,
}

impl Field {
  /// Whether a default marker was written on the field at all, even one holding the zero value.
  #[must_use]
  pub fn has_default_marker(&self) -> bool {
    self.raw_default.is_some()
  }

  /// Whether the default marker supplies a value other than the type's natural zero.
  #[must_use]
  pub fn has_default_annotation_value(&self) -> bool {
    self
      .marker_literal()
      .is_some_and(|literal| !literal.is_zero_for(&self.declared_type))
  }

  #[must_use]
  pub fn is_required(&self) -> bool {
    !self.has_default_annotation_value()
  }

  #[must_use]
  pub fn is_optional(&self) -> bool {
    !self.is_required()
  }

  /// The payload key: the field name without any raw-identifier prefix.
  #[must_use]
  pub fn key(&self) -> &str {
    self.name.key()
  }

  #[must_use]
  pub fn const_field_name(&self) -> ConstToken {
    ConstToken::from(&self.name)
  }

  #[must_use]
  pub fn setter_name(&self) -> MethodNameToken {
    MethodNameToken::setter_for(&self.name)
  }

  #[must_use]
  pub fn getter_name(&self) -> MethodNameToken {
    MethodNameToken::getter_for(&self.name)
  }

  /// The marker literal reproduced verbatim, or the type's zero when there is no marker.
  #[must_use]
  pub fn default_value_literal(&self) -> DefaultLiteral {
    self
      .marker_literal()
      .unwrap_or_else(|| DefaultLiteral::zero_for(&self.declared_type))
  }

  fn marker_literal(&self) -> Option<DefaultLiteral> {
    self
      .raw_default
      .as_ref()
      .map(|value| DefaultLiteral::from_marker(value, &self.declared_type))
  }
}
