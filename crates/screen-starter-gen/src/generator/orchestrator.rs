//! Orchestration for the manifest to builder generation pipeline.
//!
//! The `Orchestrator` runs discovery, synthesis and emission for one manifest and
//! returns the files to write together with statistics about the run. It holds no
//! global state: everything it needs is passed in through a `GenerationContext`.
//!
//! ## Usage
//!
//! ```no_run
//! # fn example(manifest: SymbolManifest) -> anyhow::Result<()> {
//! let codegen = CodegenConfig::new("screens.json")?;
//! let context = GenerationContext::from_manifest(&manifest, codegen);
//! let output = Orchestrator::new(manifest, context).generate()?;
//!
//! for file in &output.files {
//!   std::fs::write(&file.file_name, &file.code)?;
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use super::{
  ast::{AnnotatedClass, BuilderToken, ModuleToken},
  codegen::{CodegenConfig, builder::BuilderGenerator, mod_file::ModFileGenerator},
  converter::BuilderSynthesizer,
  discovery::{Discovered, ManifestSupertypes, SubtypeCheck, SymbolManifest, discover},
  metrics::{GenerationStats, GenerationWarning},
  naming::identifiers::ensure_unique,
};

pub const MOD_FILE_NAME: &str = "mod.rs";

/// Everything a run depends on besides the manifest itself.
pub struct GenerationContext {
  pub subtypes: Box<dyn SubtypeCheck>,
  pub codegen: CodegenConfig,
}

impl GenerationContext {
  pub fn new(subtypes: impl SubtypeCheck + 'static, codegen: CodegenConfig) -> Self {
    Self {
      subtypes: Box::new(subtypes),
      codegen,
    }
  }

  /// Uses the supertypes declared in the manifest as the subtype check.
  pub fn from_manifest(manifest: &SymbolManifest, codegen: CodegenConfig) -> Self {
    Self::new(ManifestSupertypes::from_classes(&manifest.classes), codegen)
  }
}

/// One file to write into the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub file_name: String,
  pub code: String,
}

#[derive(Debug, Clone)]
pub struct GenerationOutput {
  /// Builder modules in discovery order, followed by `mod.rs`.
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  manifest: SymbolManifest,
  context: GenerationContext,
}

impl Orchestrator {
  pub fn new(manifest: SymbolManifest, context: GenerationContext) -> Self {
    Self { manifest, context }
  }

  /// Screens found in the manifest, abstract ones included.
  pub fn discover(&self) -> Discovered {
    discover(&self.manifest, self.context.subtypes.as_ref())
  }

  /// Generates one builder file per non-abstract screen plus the `mod.rs` declaring them.
  ///
  /// A screen whose builder fails to emit is recorded as a warning and left out;
  /// the remaining screens are still generated.
  ///
  /// # Errors
  ///
  /// Returns an error only if the `mod.rs` file cannot be rendered.
  pub fn generate(&self) -> anyhow::Result<GenerationOutput> {
    let discovered = self.discover();
    let mut stats = GenerationStats::default();
    stats.record_discovery(&discovered);

    let generator = BuilderGenerator::new(&self.context.codegen);
    let mut used_modules = BTreeSet::new();
    let mut modules: Vec<(ModuleToken, BuilderToken)> = vec![];
    let mut files = vec![];

    for class in discovered.emittable() {
      stats.record_class(class);

      let Some(mut unit) = BuilderSynthesizer.synthesize(class) else {
        continue;
      };

      let module_name = ensure_unique(unit.module.as_str(), &used_modules);
      if unit.module != module_name.as_str() {
        stats.record_warning(GenerationWarning::ModuleRenamed {
          builder: unit.name.to_string(),
          module: module_name.clone(),
        });
        unit.module = ModuleToken::new(&module_name);
      }
      used_modules.insert(module_name.clone());

      match generator.generate_file(&unit) {
        Ok(code) => {
          stats.record_builder(&unit);
          modules.push((unit.module.clone(), unit.name.clone()));
          files.push(GeneratedFile {
            file_name: format!("{module_name}.rs"),
            code,
          });
        }
        Err(error) => stats.record_warning(emission_failed(class, &error)),
      }
    }

    let mod_file = ModFileGenerator::new(&modules, &self.context.codegen).generate()?;
    files.push(GeneratedFile {
      file_name: MOD_FILE_NAME.to_string(),
      code: mod_file,
    });

    Ok(GenerationOutput { files, stats })
  }
}

fn emission_failed(class: &AnnotatedClass, error: &anyhow::Error) -> GenerationWarning {
  GenerationWarning::EmissionFailed {
    screen: class.identity.to_string(),
    error: error.to_string(),
  }
}
