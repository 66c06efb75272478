use proc_macro2::TokenStream;
use quote::quote;

use super::{
  CodegenConfig, generate_source,
  values::{instance_place, instance_store, read_expression, write_statement},
};
use crate::generator::ast::{BuilderMember, BuilderUnit, FieldBinding, LintConfig, ReEntryMode, TriggerShape};

/// Renders one `BuilderUnit` as a complete Rust source file.
pub(crate) struct BuilderGenerator<'a> {
  config: &'a CodegenConfig,
}

impl<'a> BuilderGenerator<'a> {
  pub(crate) fn new(config: &'a CodegenConfig) -> Self {
    Self { config }
  }

  /// Fails when two members would share a name, since the file would not compile.
  pub(crate) fn generate_file(&self, unit: &BuilderUnit) -> anyhow::Result<String> {
    let clashes = unit.clashing_item_names();
    if !clashes.is_empty() {
      anyhow::bail!("`{}` would define more than one item named {}", unit.name, clashes.join(", "));
    }

    let code = self.generate(unit);
    let title = format!("Builder for `{}` in `{}`", unit.target, unit.package_name);
    generate_source(&code, &title, Some(&LintConfig::default()), self.config)
  }

  pub(crate) fn generate(&self, unit: &BuilderUnit) -> TokenStream {
    let support = &self.config.support_crate;
    let struct_def = self.generate_struct(unit);
    let items = unit
      .members
      .iter()
      .filter_map(|member| self.generate_member(unit, member))
      .collect::<Vec<_>>();
    let name = &unit.name;

    quote! {
      use #support::{Context, Extras, ExtrasError, LaunchFlags, Payload, Screen};

      #struct_def

      impl #name {
        #(#items)*
      }
    }
  }

  fn generate_struct(&self, unit: &BuilderUnit) -> TokenStream {
    let vis = self.config.visibility.to_tokens();
    let name = &unit.name;
    let doc = format!(" Builds and starts a payload for [`{}`].", unit.target);
    let fields = unit.storage_fields().map(|binding| {
      let field_name = &binding.name;
      let storage_type = binding.declared_type.storage_type();
      quote! { #field_name: #storage_type }
    });

    quote! {
      #[doc = #doc]
      #vis struct #name {
        #(#fields),*
      }
    }
  }

  // Storage fields are rendered on the struct itself.
  fn generate_member(&self, unit: &BuilderUnit, member: &BuilderMember) -> Option<TokenStream> {
    let vis = self.config.visibility.to_tokens();
    let tokens = match member {
      BuilderMember::KeyConstant { name, key } => quote! {
        #vis const #name: &'static str = #key;
      },
      BuilderMember::StorageField(_) => return None,
      BuilderMember::Factory { required, optional } => generate_factory(&vis, required, optional),
      BuilderMember::Setter(binding) => generate_setter(&vis, binding),
      BuilderMember::Encode(bindings) => generate_encode(&vis, unit, bindings),
      BuilderMember::Decode(bindings) => generate_decode(&vis, unit, bindings),
      BuilderMember::SaveState(bindings) => generate_save_state(&vis, unit, bindings),
      BuilderMember::ReEntry(mode) => generate_re_entry(&vis, unit, *mode),
      BuilderMember::Trigger(shape) => generate_trigger(&vis, *shape),
    };
    Some(tokens)
  }
}

fn generate_factory(vis: &TokenStream, required: &[FieldBinding], optional: &[FieldBinding]) -> TokenStream {
  let params = required.iter().map(|binding| {
    let name = &binding.name;
    let storage_type = binding.declared_type.storage_type();
    quote! { #name: #storage_type }
  });
  let required_inits = required.iter().map(|binding| {
    let name = &binding.name;
    quote! { #name }
  });
  let optional_inits = optional.iter().map(|binding| {
    let name = &binding.name;
    let default = binding.default.to_expr(&binding.declared_type);
    quote! { #name: #default }
  });

  quote! {
    #vis fn builder(#(#params),*) -> Self {
      Self {
        #(#required_inits,)*
        #(#optional_inits,)*
      }
    }
  }
}

fn generate_setter(vis: &TokenStream, binding: &FieldBinding) -> TokenStream {
  let name = &binding.name;
  let storage_type = binding.declared_type.storage_type();

  quote! {
    #vis fn #name(mut self, #name: #storage_type) -> Self {
      self.#name = #name;
      self
    }
  }
}

fn generate_encode(vis: &TokenStream, unit: &BuilderUnit, bindings: &[FieldBinding]) -> TokenStream {
  let target = &unit.target;
  let put = quote! { payload.put_extra };
  let writes = bindings.iter().map(|binding| {
    let name = &binding.name;
    write_statement(binding, &quote! { self.#name }, &put)
  });

  quote! {
    /// Encodes every field into a payload targeting the screen.
    #vis fn payload(&self) -> Result<Payload, ExtrasError> {
      let mut payload = Payload::for_screen::<#target>();
      #(#writes)*
      Ok(payload)
    }
  }
}

fn generate_decode(vis: &TokenStream, unit: &BuilderUnit, bindings: &[FieldBinding]) -> TokenStream {
  let target = &unit.target;
  let typed = quote! { typed };
  let state = quote! { state };
  let stores = bindings
    .iter()
    .map(|binding| instance_store(binding, &typed, &read_expression(binding, &state)));

  quote! {
    /// Reads the payload fields back into `instance` when it is the target screen.
    ///
    /// Absent keys take the field's default.
    #vis fn inject(instance: &mut dyn Screen, state: Option<&Extras>) {
      if let Some(typed) = instance.as_any_mut().downcast_mut::<#target>() {
        if let Some(state) = state {
          #(#stores)*
        }
      }
    }
  }
}

fn generate_save_state(vis: &TokenStream, unit: &BuilderUnit, bindings: &[FieldBinding]) -> TokenStream {
  let target = &unit.target;
  let typed = quote! { typed };
  let put = quote! { out_state.put };
  let writes = bindings
    .iter()
    .map(|binding| write_statement(binding, &instance_place(binding, &typed), &put));

  quote! {
    /// Writes the screen's current field values into `out_state`.
    #vis fn save_state(instance: &dyn Screen, out_state: &mut Extras) -> Result<(), ExtrasError> {
      if let Some(typed) = instance.as_any().downcast_ref::<#target>() {
        #(#writes)*
      }
      Ok(())
    }
  }
}

fn generate_re_entry(vis: &TokenStream, unit: &BuilderUnit, mode: ReEntryMode) -> TokenStream {
  let target = &unit.target;

  match mode {
    ReEntryMode::Replace => quote! {
      /// Remembers `payload` on the screen and decodes it.
      #vis fn process_new_payload(screen: &mut #target, payload: Option<Payload>) {
        Self::process_new_payload_with_update(screen, payload, true);
      }
    },
    ReEntryMode::Conditional => quote! {
      /// Remembers `payload` only when `update` is set; decodes it when present.
      #vis fn process_new_payload_with_update(screen: &mut #target, payload: Option<Payload>, update: bool) {
        let extras = payload.as_ref().map(|payload| payload.extras().clone());
        if update {
          screen.set_payload(payload);
        }
        if let Some(extras) = extras {
          Self::inject(screen, Some(&extras));
        }
      }
    },
  }
}

fn generate_trigger(vis: &TokenStream, shape: TriggerShape) -> TokenStream {
  let name = shape.method_name();

  match (shape.for_result, shape.with_options) {
    (false, false) => quote! {
      #vis fn #name(&self, context: &dyn Context) -> Result<(), ExtrasError> {
        self.start_with_options(context, None)
      }
    },
    (false, true) => quote! {
      #vis fn #name(&self, context: &dyn Context, options: Option<&Extras>) -> Result<(), ExtrasError> {
        let mut payload = self.payload()?;
        if !context.is_screen() {
          payload.add_flags(LaunchFlags::NEW_TASK);
        }
        context.start_screen(payload, options);
        Ok(())
      }
    },
    (true, false) => quote! {
      #vis fn #name(&self, screen: &dyn Screen, request_code: i32) -> Result<(), ExtrasError> {
        self.start_for_result_with_options(screen, request_code, None)
      }
    },
    (true, true) => quote! {
      #vis fn #name(
        &self,
        screen: &dyn Screen,
        request_code: i32,
        options: Option<&Extras>,
      ) -> Result<(), ExtrasError> {
        let mut payload = self.payload()?;
        if !screen.is_screen() {
          payload.add_flags(LaunchFlags::NEW_TASK);
        }
        screen.start_screen_for_result(payload, request_code, options);
        Ok(())
      }
    },
  }
}
