//! Output-path mapping and persistence.
use std::{
  ffi::OsStr,
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Result, WrapErr};

/// Map a source path to its documentation output path.
///
/// The filename keeps its stem with the extension swapped to `.html`. The
/// output directory is a sibling `docs` directory, except when the source
/// already lives in a directory literally named `src`, in which case `docs`
/// replaces that segment in place:
///
/// - `awesome.py` -> `docs/awesome.html`
/// - `src/awesome.py` -> `docs/awesome.html`
/// - `lib/awesome.py` -> `lib/docs/awesome.html`
#[must_use]
pub fn doc_path(source: &Path) -> PathBuf {
  let parent = source.parent().unwrap_or_else(|| Path::new(""));
  let dir = if parent.file_name() == Some(OsStr::new("src")) {
    parent.parent().unwrap_or_else(|| Path::new("")).join("docs")
  } else {
    parent.join("docs")
  };

  let mut destination =
    dir.join(source.file_name().unwrap_or_else(|| OsStr::new("index")));
  destination.set_extension("html");
  destination
}

/// Persist a generated page, creating the output directory on demand.
///
/// # Errors
///
/// Returns an error when the directory cannot be created or the file cannot
/// be written.
pub fn write_doc(destination: &Path, html: &str) -> Result<()> {
  if let Some(parent) = destination.parent() {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create directory: {}", parent.display())
    })?;
  }
  fs::write(destination, html)
    .wrap_err_with(|| format!("Failed to write {}", destination.display()))
}
