use proc_macro2::TokenStream;
use quote::quote;

use crate::generator::ast::{DefaultLiteral, FieldAccess, FieldBinding, TypeCategory};

/// A statement writing one field under its key; `put` is the writer method path.
pub(super) fn write_statement(binding: &FieldBinding, place: &TokenStream, put: &TokenStream) -> TokenStream {
  let key = &binding.key_const;
  match binding.declared_type.category() {
    TypeCategory::PrimitiveNumeric | TypeCategory::PrimitiveBool => quote! {
      #put(Self::#key, &#place)?;
    },
    TypeCategory::Boxed | TypeCategory::String | TypeCategory::Serializable | TypeCategory::Array => quote! {
      if let Some(value) = &#place {
        #put(Self::#key, value)?;
      }
    },
  }
}

/// An expression reading one field from `state`, falling back to the field's default.
pub(super) fn read_expression(binding: &FieldBinding, state: &TokenStream) -> TokenStream {
  let key = &binding.key_const;
  let value_type = binding.declared_type.value_type();
  let default = binding.default.to_expr(&binding.declared_type);

  match binding.declared_type.category() {
    TypeCategory::PrimitiveNumeric | TypeCategory::PrimitiveBool => quote! {
      #state.get_or::<#value_type>(Self::#key, #default)
    },
    TypeCategory::Boxed | TypeCategory::String | TypeCategory::Serializable | TypeCategory::Array => {
      if matches!(binding.default, DefaultLiteral::Null) {
        quote! { #state.get::<#value_type>(Self::#key) }
      } else {
        quote! { #state.get::<#value_type>(Self::#key).or_else(|| #default) }
      }
    }
  }
}

/// Reads a field from a typed screen instance, through its getter when private.
pub(super) fn instance_place(binding: &FieldBinding, instance: &TokenStream) -> TokenStream {
  match &binding.access {
    FieldAccess::Direct => {
      let name = &binding.name;
      quote! { #instance.#name }
    }
    FieldAccess::Accessors { getter, .. } => quote! { #instance.#getter() },
  }
}

/// Stores a value into a typed screen instance, through its setter when private.
pub(super) fn instance_store(binding: &FieldBinding, instance: &TokenStream, value: &TokenStream) -> TokenStream {
  match &binding.access {
    FieldAccess::Direct => {
      let name = &binding.name;
      quote! { #instance.#name = #value; }
    }
    FieldAccess::Accessors { setter, .. } => quote! { #instance.#setter(#value); },
  }
}
