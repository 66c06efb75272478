use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintAllow {
  ClippyCollapsibleIf,
  ClippyMissingErrorsDoc,
  ClippyMustUseCandidate,
  ClippyNeedlessPassByValue,
  ClippyReturnSelfNotMustUse,
  ClippyTooManyArguments,
  DeadCode,
  UnusedVariables,
}

impl ToTokens for LintAllow {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let attr = match self {
      Self::ClippyCollapsibleIf => quote! { #![allow(clippy::collapsible_if)] },
      Self::ClippyMissingErrorsDoc => quote! { #![allow(clippy::missing_errors_doc)] },
      Self::ClippyMustUseCandidate => quote! { #![allow(clippy::must_use_candidate)] },
      Self::ClippyNeedlessPassByValue => quote! { #![allow(clippy::needless_pass_by_value)] },
      Self::ClippyReturnSelfNotMustUse => quote! { #![allow(clippy::return_self_not_must_use)] },
      Self::ClippyTooManyArguments => quote! { #![allow(clippy::too_many_arguments)] },
      Self::DeadCode => quote! { #![allow(dead_code)] },
      Self::UnusedVariables => quote! { #![allow(unused_variables)] },
    };
    tokens.extend(attr);
  }
}

#[derive(Debug, Clone)]
pub struct LintConfig {
  pub allows: Vec<LintAllow>,
}

impl Default for LintConfig {
  fn default() -> Self {
    Self {
      allows: vec![
        LintAllow::ClippyCollapsibleIf,
        LintAllow::ClippyMissingErrorsDoc,
        LintAllow::ClippyMustUseCandidate,
        LintAllow::ClippyNeedlessPassByValue,
        LintAllow::ClippyReturnSelfNotMustUse,
        LintAllow::ClippyTooManyArguments,
        LintAllow::DeadCode,
        LintAllow::UnusedVariables,
      ],
    }
  }
}

impl ToTokens for LintConfig {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    for allow in &self.allows {
      allow.to_tokens(tokens);
    }
  }
}
