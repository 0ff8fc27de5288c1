use std::{io, path::PathBuf};

use thiserror::Error;

/// Top-level error type for the mindoc-weave crate.
#[derive(Debug, Error)]
pub enum WeaveError {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  /// The file extension maps to no known fencing convention. Non-fatal for a
  /// batch: callers report it and continue.
  #[error("unsupported source kind: {}", .0.display())]
  UnsupportedSource(PathBuf),
}
