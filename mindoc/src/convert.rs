//! Batch conversion driver.
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use log::{debug, info, warn};
use mindoc_weave::{DocOptions, DocProcessor, SourceKind, WeaveError};
use walkdir::WalkDir;

use crate::{config::Config, output};

/// Collect convertible source files from the given paths.
///
/// Directories are walked recursively and filtered to recognized source
/// extensions. Files named explicitly are kept as-is, so an unsupported one
/// still surfaces its diagnostic during conversion.
#[must_use]
pub fn collect_sources(paths: &[PathBuf]) -> Vec<PathBuf> {
  let mut sources = Vec::new();

  for path in paths {
    if path.is_dir() {
      for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
      {
        let entry_path = entry.path();
        if entry_path.is_file() && SourceKind::from_path(entry_path).is_some()
        {
          sources.push(entry_path.to_owned());
        }
      }
    } else {
      sources.push(path.clone());
    }
  }

  debug!("Found {} source files to convert", sources.len());
  sources
}

/// Convert every source file and persist the generated documentation.
///
/// An unsupported file kind is reported and skipped; an I/O failure is fatal
/// and aborts the remaining batch. Announcements are silenced on watch-mode
/// re-renders.
///
/// # Errors
///
/// Returns an error when a source cannot be read or a destination cannot be
/// written.
pub fn convert_all(
  sources: &[PathBuf],
  config: &Config,
  announce: bool,
) -> Result<()> {
  let processor = DocProcessor::new(DocOptions {
    language:       config.language.clone(),
    toggle_label:   config.toggle_label.clone(),
    fallback_title: None,
  });

  for source in sources {
    let result = match processor.convert_path(source) {
      Ok(result) => result,
      Err(WeaveError::UnsupportedSource(path)) => {
        warn!("Unsupported file kind: {}", path.display());
        continue;
      },
      Err(error) => {
        return Err(error).wrap_err_with(|| {
          format!("Failed to convert {}", source.display())
        });
      },
    };

    let destination = output::doc_path(source);
    output::write_doc(&destination, &result.html)?;

    if announce {
      info!(
        "Doc for {} saved as {}",
        source.display(),
        destination.display()
      );
    }
  }

  Ok(())
}
