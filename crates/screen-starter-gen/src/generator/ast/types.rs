use std::fmt::{Debug, Display, Formatter};

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use serde::{Deserialize, Deserializer, de::Error as _};

/// A validated Rust type path such as `crate::model::User`.
#[derive(Clone)]
pub struct TypePath {
  raw: String,
  path: syn::Path,
}

impl TypePath {
  pub fn parse(raw: &str) -> syn::Result<Self> {
    let path = syn::parse_str::<syn::Path>(raw)?;
    Ok(Self {
      raw: raw.trim().to_string(),
      path,
    })
  }

  pub fn as_str(&self) -> &str {
    &self.raw
  }
}

impl PartialEq for TypePath {
  fn eq(&self, other: &Self) -> bool {
    self.raw == other.raw
  }
}

impl Eq for TypePath {}

impl Debug for TypePath {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("TypePath").field(&self.raw).finish()
  }
}

impl Display for TypePath {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.raw)
  }
}

impl ToTokens for TypePath {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    self.path.to_tokens(tokens);
  }
}

impl<'de> Deserialize<'de> for TypePath {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    Self::parse(&raw).map_err(|err| D::Error::custom(format!("invalid type path '{raw}': {err}")))
  }
}

/// Primitive value types a field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveKind {
  Bool,
  I8,
  I16,
  I32,
  I64,
  U8,
  U16,
  U32,
  U64,
  F32,
  F64,
  Char,
}

impl PrimitiveKind {
  pub const fn is_float(self) -> bool {
    matches!(self, Self::F32 | Self::F64)
  }
}

impl ToTokens for PrimitiveKind {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let ts = match self {
      Self::Bool => quote! { bool },
      Self::I8 => quote! { i8 },
      Self::I16 => quote! { i16 },
      Self::I32 => quote! { i32 },
      Self::I64 => quote! { i64 },
      Self::U8 => quote! { u8 },
      Self::U16 => quote! { u16 },
      Self::U32 => quote! { u32 },
      Self::U64 => quote! { u64 },
      Self::F32 => quote! { f32 },
      Self::F64 => quote! { f64 },
      Self::Char => quote! { char },
    };
    tokens.extend(ts);
  }
}

/// The semantic type of an annotated field, as reported by the discovery manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclaredType {
  Primitive { primitive: PrimitiveKind },
  Boxed { primitive: PrimitiveKind },
  String,
  Serializable { path: TypePath },
  Array { element: Box<DeclaredType> },
}

/// Closed dispatch tag for everything that depends on a field's type: storage type,
/// zero value, and how the value is written to and read from a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TypeCategory {
  PrimitiveNumeric,
  PrimitiveBool,
  Boxed,
  String,
  Serializable,
  Array,
}

impl TypeCategory {
  /// Nullable categories are stored as `Option<T>` and default to `None`.
  pub const fn is_nullable(self) -> bool {
    match self {
      Self::PrimitiveNumeric | Self::PrimitiveBool => false,
      Self::Boxed | Self::String | Self::Serializable | Self::Array => true,
    }
  }
}

impl DeclaredType {
  pub const fn category(&self) -> TypeCategory {
    match self {
      Self::Primitive {
        primitive: PrimitiveKind::Bool,
      } => TypeCategory::PrimitiveBool,
      Self::Primitive { .. } => TypeCategory::PrimitiveNumeric,
      Self::Boxed { .. } => TypeCategory::Boxed,
      Self::String => TypeCategory::String,
      Self::Serializable { .. } => TypeCategory::Serializable,
      Self::Array { .. } => TypeCategory::Array,
    }
  }

  /// The primitive behind a primitive or boxed type.
  pub const fn primitive_kind(&self) -> Option<PrimitiveKind> {
    match self {
      Self::Primitive { primitive } | Self::Boxed { primitive } => Some(*primitive),
      Self::String | Self::Serializable { .. } | Self::Array { .. } => None,
    }
  }

  /// The type a value travels as inside a payload: the boxed form of the field type.
  pub fn value_type(&self) -> TokenStream {
    match self {
      Self::Primitive { primitive } | Self::Boxed { primitive } => quote! { #primitive },
      Self::String => quote! { String },
      Self::Serializable { path } => quote! { #path },
      Self::Array { element } => {
        let element_type = element.element_type();
        quote! { Vec<#element_type> }
      }
    }
  }

  /// The type of the field in both the screen and the generated builder.
  pub fn storage_type(&self) -> TokenStream {
    let value_type = self.value_type();
    if self.category().is_nullable() {
      quote! { Option<#value_type> }
    } else {
      value_type
    }
  }

  // Array elements keep boxed primitives nullable and unwrap every other category.
  fn element_type(&self) -> TokenStream {
    match self.category() {
      TypeCategory::Boxed => self.storage_type(),
      TypeCategory::PrimitiveNumeric
      | TypeCategory::PrimitiveBool
      | TypeCategory::String
      | TypeCategory::Serializable
      | TypeCategory::Array => self.value_type(),
    }
  }
}

#[cfg(test)]
impl DeclaredType {
  pub fn primitive(primitive: PrimitiveKind) -> Self {
    Self::Primitive { primitive }
  }

  pub fn boxed(primitive: PrimitiveKind) -> Self {
    Self::Boxed { primitive }
  }

  pub fn serializable(path: TypePath) -> Self {
    Self::Serializable { path }
  }

  pub fn array_of(element: DeclaredType) -> Self {
    Self::Array {
      element: Box::new(element),
    }
  }
}

impl Display for DeclaredType {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Primitive { primitive } => write!(f, "{primitive}"),
      Self::Boxed { primitive } => write!(f, "Option<{primitive}>"),
      Self::String => f.write_str("String"),
      Self::Serializable { path } => write!(f, "{path}"),
      Self::Array { element } => write!(f, "[{element}]"),
    }
  }
}
