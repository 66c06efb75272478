use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "screen-starter-gen")]
#[command(author, version, about = "Generates navigation builders for annotated screens")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List the screens and fields found in a symbol manifest
  List {
    /// Path to the symbol manifest JSON file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
  /// Generate one builder module per screen
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the symbol manifest JSON file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the builder modules and their mod.rs are written to
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Visibility level for generated builders
  #[arg(long, value_enum, default_value = "public")]
  pub visibility: VisibilityArg,

  /// Path generated code uses to reach the runtime support crate
  #[arg(long, value_name = "PATH", default_value = "screen_starter_support")]
  pub support_crate: String,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum VisibilityArg {
  Public,
  Crate,
}
