use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    ast::TypePath,
    codegen::{CodegenConfig, Visibility},
    discovery::SymbolManifest,
    metrics::GenerationStats,
    orchestrator::{GeneratedFile, GenerationContext, Orchestrator},
  },
  ui::{Colors, GenerateCommand, VisibilityArg},
  utils::ManifestLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub visibility: Visibility,
  pub support_crate: TypePath,
  pub verbose: bool,
  pub quiet: bool,
}

impl From<VisibilityArg> for Visibility {
  fn from(arg: VisibilityArg) -> Self {
    match arg {
      VisibilityArg::Public => Visibility::Public,
      VisibilityArg::Crate => Visibility::Crate,
    }
  }
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      visibility,
      support_crate,
      verbose,
      quiet,
    } = command;

    let support_crate = TypePath::parse(&support_crate)
      .map_err(|err| anyhow::anyhow!("Invalid --support-crate path '{support_crate}': {err}"))?;

    Ok(Self {
      input,
      output,
      visibility: visibility.into(),
      support_crate,
      verbose,
      quiet,
    })
  }

  async fn load_manifest(&self) -> anyhow::Result<SymbolManifest> {
    ManifestLoader::open(&self.input).await?.parse()
  }

  fn create_orchestrator(&self, manifest: SymbolManifest) -> anyhow::Result<Orchestrator> {
    let codegen = CodegenConfig::new(self.input.display().to_string())?
      .with_visibility(self.visibility)
      .with_support_crate(self.support_crate.clone());
    let context = GenerationContext::from_manifest(&manifest, codegen);
    Ok(Orchestrator::new(manifest, context))
  }

  async fn write_file(&self, file: &GeneratedFile) -> anyhow::Result<PathBuf> {
    let path = self.output.join(&file.file_name);
    tokio::fs::write(&path, &file.code)
      .await
      .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn verbose(&self, message: &str) {
    if self.config.verbose {
      self.info(message);
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading symbol manifest from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating screen builders...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Screens discovered:", stats.screens_discovered.to_string());
    if stats.abstract_screens > 0 {
      self.stat("", format!("{} abstract, not emitted", stats.abstract_screens));
    }
    self.stat("Builders generated:", stats.builders_generated.to_string());
    self.stat("Fields processed:", stats.fields_processed.to_string());
    self.stat(
      "",
      format!("{} required, {} optional", stats.required_fields, stats.optional_fields),
    );
    if stats.private_fields > 0 {
      self.stat("", format!("{} behind accessors", stats.private_fields));
    }
    if self.config.verbose {
      self.stat("Members generated:", stats.members_generated.to_string());
      self.stat("Entries ignored:", stats.ignored_entries.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_file_written(&self, path: &std::path::Path) {
    self.verbose(&format!("Wrote {}", path.display()).with(self.colors.value()).to_string());
  }

  fn log_write_failed(&self, error: &anyhow::Error) {
    eprintln!(
      "{} {}",
      "Warning:".with(self.colors.accent()),
      format!("{error:#}").with(self.colors.primary())
    );
  }

  fn log_success(&self, files_written: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {files_written} files").with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let manifest = config.load_manifest().await?;

  logger.log_generating();
  let output = config.create_orchestrator(manifest)?.generate()?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  tokio::fs::create_dir_all(&config.output)
    .await
    .with_context(|| format!("Failed to create {}", config.output.display()))?;

  let mut failed = 0;
  for file in &output.files {
    match config.write_file(file).await {
      Ok(path) => logger.log_file_written(&path),
      Err(error) => {
        logger.log_write_failed(&error);
        failed += 1;
      }
    }
  }

  if failed > 0 {
    anyhow::bail!("Failed to write {failed} of {} generated files", output.files.len());
  }

  logger.log_success(output.files.len());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ui::colors::Theme;

  fn config(output: PathBuf) -> GenerateConfig {
    GenerateConfig::from_command(GenerateCommand {
      input: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/screens.json"),
      output,
      visibility: VisibilityArg::Public,
      support_crate: "screen_starter_support".to_string(),
      verbose: false,
      quiet: true,
    })
    .unwrap()
  }

  #[test]
  fn test_from_command_rejects_invalid_support_path() {
    let result = GenerateConfig::from_command(GenerateCommand {
      input: PathBuf::from("screens.json"),
      output: PathBuf::from("out"),
      visibility: VisibilityArg::Crate,
      support_crate: "not a path".to_string(),
      verbose: false,
      quiet: false,
    });

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid --support-crate path"));
  }

  #[test]
  fn test_from_command_maps_visibility() {
    let config = GenerateConfig::from_command(GenerateCommand {
      input: PathBuf::from("screens.json"),
      output: PathBuf::from("out"),
      visibility: VisibilityArg::Crate,
      support_crate: "my_app::runtime".to_string(),
      verbose: true,
      quiet: false,
    })
    .unwrap();

    assert_eq!(config.visibility, Visibility::Crate);
    assert_eq!(config.support_crate.as_str(), "my_app::runtime");
  }

  #[tokio::test]
  async fn test_generate_code_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("generated");
    let colors = Colors::new(false, Theme::Dark);

    generate_code(config(output.clone()), &colors).await.unwrap();

    for file_name in ["detail_builder.rs", "counter_builder.rs", "mod.rs"] {
      let path = output.join(file_name);
      assert!(path.exists(), "{} missing", path.display());
    }
    let mod_file = std::fs::read_to_string(output.join("mod.rs")).unwrap();
    assert!(mod_file.contains("pub mod detail_builder;"));
  }

  #[tokio::test]
  async fn test_generate_code_fails_when_a_file_cannot_be_written() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().to_path_buf();
    std::fs::create_dir(output.join("mod.rs")).unwrap();
    let colors = Colors::new(false, Theme::Dark);

    let err = generate_code(config(output.clone()), &colors).await.unwrap_err();

    assert!(err.to_string().contains("Failed to write 1 of 3"));
    assert!(output.join("detail_builder.rs").exists());
    assert!(output.join("counter_builder.rs").exists());
  }
}
