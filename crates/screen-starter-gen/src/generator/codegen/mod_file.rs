use itertools::Itertools;
use quote::quote;

use super::{CodegenConfig, generate_source};
use crate::generator::ast::{BuilderToken, ModuleToken};

/// Renders the `mod.rs` that declares every generated builder module.
///
/// Builders are re-exported at the top level only when no other builder shares their name.
pub(crate) struct ModFileGenerator<'a> {
  modules: &'a [(ModuleToken, BuilderToken)],
  config: &'a CodegenConfig,
}

impl<'a> ModFileGenerator<'a> {
  pub(crate) fn new(modules: &'a [(ModuleToken, BuilderToken)], config: &'a CodegenConfig) -> Self {
    Self { modules, config }
  }

  pub(crate) fn generate(&self) -> anyhow::Result<String> {
    let vis = self.config.visibility.to_tokens();

    let name_counts = self.modules.iter().map(|(_, builder)| builder).counts();

    let declarations = self.modules.iter().map(|(module, _)| quote! { #vis mod #module; });
    let re_exports = self
      .modules
      .iter()
      .filter(|(_, builder)| name_counts.get(builder).copied() == Some(1))
      .map(|(module, builder)| quote! { #vis use #module::#builder; });

    let code = quote! {
      #(#declarations)*

      #(#re_exports)*
    };

    generate_source(&code, "Generated screen builders", None, self.config)
  }
}
