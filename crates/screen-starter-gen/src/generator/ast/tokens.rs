use std::fmt::{Display, Formatter};

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use string_cache::DefaultAtom;
use syn::Ident;

use crate::generator::naming::identifiers::{
  escape_field_name, to_rust_const_name, to_rust_module_name, to_setter_name, unraw,
};

macro_rules! ident_token {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct $name(DefaultAtom);

    impl $name {
      pub fn as_str(&self) -> &str {
        &self.0
      }
    }

    impl Display for $name {
      fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
      }
    }

    impl ToTokens for $name {
      fn to_tokens(&self, tokens: &mut TokenStream) {
        ident_from_str(&self.0).to_tokens(tokens);
      }
    }

    impl PartialEq<str> for $name {
      fn eq(&self, other: &str) -> bool {
        &*self.0 == other
      }
    }

    impl PartialEq<&str> for $name {
      fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
      }
    }
  };
}

fn ident_from_str(name: &str) -> Ident {
  match name.strip_prefix("r#") {
    Some(raw) => Ident::new_raw(raw, Span::call_site()),
    None => Ident::new(name, Span::call_site()),
  }
}

ident_token!(
  /// A struct field identifier, keyword-escaped.
  FieldNameToken
);

ident_token!(
  /// A payload-key constant identifier (`USER_ID`).
  ConstToken
);

ident_token!(MethodNameToken);

ident_token!(
  /// The generated builder type identifier (`DetailBuilder`).
  BuilderToken
);

ident_token!(ModuleToken);

impl FieldNameToken {
  pub fn new(name: &str) -> Self {
    Self(DefaultAtom::from(escape_field_name(name)))
  }

  /// The name as written into payloads: the field name without a raw prefix.
  pub fn key(&self) -> &str {
    unraw(&self.0)
  }
}

impl From<&str> for FieldNameToken {
  fn from(name: &str) -> Self {
    Self::new(name)
  }
}

impl From<&FieldNameToken> for ConstToken {
  fn from(field: &FieldNameToken) -> Self {
    Self(DefaultAtom::from(to_rust_const_name(field.key())))
  }
}

impl MethodNameToken {
  pub fn new(name: &str) -> Self {
    Self(DefaultAtom::from(name))
  }

  pub fn setter_for(field: &FieldNameToken) -> Self {
    Self(DefaultAtom::from(to_setter_name(field.as_str())))
  }

  pub fn getter_for(field: &FieldNameToken) -> Self {
    Self(DefaultAtom::from(field.as_str()))
  }
}

impl BuilderToken {
  pub fn new(name: &str) -> Self {
    Self(DefaultAtom::from(name))
  }
}

impl ModuleToken {
  pub fn new(name: &str) -> Self {
    Self(DefaultAtom::from(name))
  }

  pub fn for_builder(builder: &BuilderToken) -> Self {
    Self(DefaultAtom::from(to_rust_module_name(builder.as_str())))
  }
}
