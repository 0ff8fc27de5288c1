use std::path::PathBuf;

use clap::Parser;

/// Command line interface for mindoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "mindoc: a minimal source-to-documentation converter"
)]
pub struct Cli {
  /// Source files or directories to convert; directories are walked
  /// recursively for recognized source extensions
  #[arg(required = true)]
  pub paths: Vec<PathBuf>,

  /// Watch sources and re-generate documentation on a fixed interval
  #[arg(short, long)]
  pub watch: bool,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a configuration file (TOML)
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
