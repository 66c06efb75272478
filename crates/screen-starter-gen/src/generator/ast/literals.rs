use std::fmt::{Display, Formatter};

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use serde_json::Value;

use super::types::{DeclaredType, PrimitiveKind, TypeCategory};

/// A default value as it will be written into generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultLiteral {
  Bool(bool),
  Int(i64),
  UInt(u64),
  Float(f64),
  Char(char),
  Str(String),
  Null,
  /// A marker literal that has no Rust spelling for the field's type.
  Unsupported(String),
}

impl DefaultLiteral {
  /// The natural zero of a declared type: `false`, `0`, `0.0`, `'\0'` or `None`.
  pub fn zero_for(declared_type: &DeclaredType) -> Self {
    match declared_type.category() {
      TypeCategory::PrimitiveBool => Self::Bool(false),
      TypeCategory::PrimitiveNumeric => match declared_type.primitive_kind() {
        Some(PrimitiveKind::Char) => Self::Char('\0'),
        Some(kind) if kind.is_float() => Self::Float(0.0),
        _ => Self::Int(0),
      },
      TypeCategory::Boxed | TypeCategory::String | TypeCategory::Serializable | TypeCategory::Array => Self::Null,
    }
  }

  /// Interprets a marker literal against the declared type it belongs to.
  pub fn from_marker(value: &Value, declared_type: &DeclaredType) -> Self {
    let kind = declared_type.primitive_kind();
    match value {
      Value::Null => Self::zero_for(declared_type),
      Value::Bool(b) => Self::Bool(*b),
      Value::Number(number) => {
        if kind.is_some_and(PrimitiveKind::is_float) {
          number.as_f64().map_or_else(|| Self::Unsupported(number.to_string()), Self::Float)
        } else if let Some(int) = number.as_i64() {
          Self::Int(int)
        } else if let Some(uint) = number.as_u64() {
          Self::UInt(uint)
        } else {
          number.as_f64().map_or_else(|| Self::Unsupported(number.to_string()), Self::Float)
        }
      }
      Value::String(text) => {
        let mut chars = text.chars();
        match (kind, chars.next(), chars.next()) {
          (Some(PrimitiveKind::Char), Some(c), None) => Self::Char(c),
          _ => Self::Str(text.clone()),
        }
      }
      Value::Array(_) | Value::Object(_) => Self::Unsupported(value.to_string()),
    }
  }

  /// Whether the literal is the natural zero of `declared_type`.
  ///
  /// Primitives treat `0`, `0.0`, `false` and `'\0'` as zero; every nullable category only `null`.
  pub fn is_zero_for(&self, declared_type: &DeclaredType) -> bool {
    if declared_type.category().is_nullable() {
      return matches!(self, Self::Null);
    }

    match self {
      Self::Bool(b) => !b,
      Self::Int(i) => *i == 0,
      Self::UInt(u) => *u == 0,
      Self::Float(f) => *f == 0.0,
      Self::Char(c) => *c == '\0',
      Self::Null => true,
      Self::Str(_) | Self::Unsupported(_) => false,
    }
  }

  /// Renders the literal as an expression of the field's storage type.
  ///
  /// Non-null literals of nullable types are wrapped in `Some(..)`. Literals that do not
  /// fit the declared type are emitted as-is and fail when the generated file is compiled.
  pub fn to_expr(&self, declared_type: &DeclaredType) -> TokenStream {
    let category = declared_type.category();
    let value = match self {
      Self::Null => {
        return if category.is_nullable() {
          quote! { None }
        } else {
          Self::zero_for(declared_type).to_expr(declared_type)
        };
      }
      Self::Unsupported(raw) => {
        let message = format!("unsupported default literal {raw} for a field of type {declared_type}");
        return quote! { compile_error!(#message) };
      }
      Self::Bool(b) => quote! { #b },
      Self::Int(i) => {
        let lit = Literal::u64_unsuffixed(i.unsigned_abs());
        if *i < 0 {
          quote! { -#lit }
        } else {
          quote! { #lit }
        }
      }
      Self::UInt(u) => {
        let lit = Literal::u64_unsuffixed(*u);
        quote! { #lit }
      }
      Self::Float(f) => {
        let lit = Literal::f64_unsuffixed(f.abs());
        if f.is_sign_negative() {
          quote! { -#lit }
        } else {
          quote! { #lit }
        }
      }
      Self::Char(c) => {
        let lit = Literal::character(*c);
        quote! { #lit }
      }
      Self::Str(text) if category == TypeCategory::String => quote! { String::from(#text) },
      Self::Str(text) => quote! { #text },
    };

    if category.is_nullable() {
      quote! { Some(#value) }
    } else {
      value
    }
  }
}

impl Display for DefaultLiteral {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Bool(b) => write!(f, "{b}"),
      Self::Int(i) => write!(f, "{i}"),
      Self::UInt(u) => write!(f, "{u}"),
      Self::Float(v) => write!(f, "{v:?}"),
      Self::Char(c) => write!(f, "{c:?}"),
      Self::Str(text) => write!(f, "{text:?}"),
      Self::Null => f.write_str("None"),
      Self::Unsupported(raw) => f.write_str(raw),
    }
  }
}
