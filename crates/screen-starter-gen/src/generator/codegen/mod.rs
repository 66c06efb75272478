use proc_macro2::TokenStream;
use quote::quote;

use super::ast::{LintConfig, TypePath};

pub mod builder;
pub mod mod_file;
mod values;


pub const DEFAULT_SUPPORT_CRATE: &str = "screen_starter_support";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
}

impl Visibility {
  pub(crate) fn to_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
    }
  }
}

/// Settings shared by every file emitted in one run.
#[derive(Debug, Clone)]
pub struct CodegenConfig {
  pub visibility: Visibility,
  /// Path generated code uses to reach the runtime support crate.
  pub support_crate: TypePath,
  /// Manifest path recorded in file headers.
  pub source_path: String,
  pub gen_version: String,
}

impl CodegenConfig {
  pub fn new(source_path: impl Into<String>) -> anyhow::Result<Self> {
    Ok(Self {
      visibility: Visibility::default(),
      support_crate: TypePath::parse(DEFAULT_SUPPORT_CRATE)?,
      source_path: source_path.into(),
      gen_version: env!("CARGO_PKG_VERSION").to_string(),
    })
  }

  #[must_use]
  pub fn with_visibility(mut self, visibility: Visibility) -> Self {
    self.visibility = visibility;
    self
  }

  #[must_use]
  pub fn with_support_crate(mut self, support_crate: TypePath) -> Self {
    self.support_crate = support_crate;
    self
  }
}

/// Parses, formats and prefixes a generated file with its header.
///
/// Fails when `code` is not a valid Rust file.
pub(crate) fn generate_source(
  code: &TokenStream,
  title: &str,
  lint_config: Option<&LintConfig>,
  config: &CodegenConfig,
) -> anyhow::Result<String> {
  let lints = lint_config.map(|lints| quote! { #lints });
  let file = quote! {
    #lints
    #code
  };

  let syntax_tree = syn::parse2::<syn::File>(file)?;
  let formatted = prettyplease::unparse(&syntax_tree);

  Ok(format!(
    "//! AUTO-GENERATED CODE - DO NOT EDIT!\n//!\n//! {title}\n//! Source: {}\n//! Generated by `screen-starter-gen` v{}\n\n{formatted}",
    config.source_path, config.gen_version
  ))
}
