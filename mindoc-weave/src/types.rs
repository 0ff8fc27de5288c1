//! Types for the mindoc-weave public API.
use std::path::Path;

use serde::{Deserialize, Serialize};

/// How documentation is fenced off from code in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceStyle {
  /// Alternating documentation/code blocks delimited by a `"""` line.
  Fenced,
  /// A single leading `/* ... */` comment holds the documentation; the rest
  /// of the file is one code block.
  Block,
  /// Pre-rendered markup; the file passes through as documentation.
  Markup,
}

/// The segmentation convention and fence language tag for one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceKind {
  pub style:    FenceStyle,
  /// Language tag emitted into the code-viewer fence.
  pub language: &'static str,
}

impl SourceKind {
  const fn fenced(language: &'static str) -> Self {
    Self {
      style: FenceStyle::Fenced,
      language,
    }
  }

  const fn block(language: &'static str) -> Self {
    Self {
      style: FenceStyle::Block,
      language,
    }
  }

  /// Select the segmentation convention from a file extension.
  ///
  /// Returns `None` for extensions without a known convention; callers are
  /// expected to report those and move on rather than abort a batch.
  #[must_use]
  pub fn from_path(path: &Path) -> Option<Self> {
    let extension = path.extension()?.to_str()?;
    match extension {
      "py" => Some(Self::fenced("python")),
      "js" | "mjs" => Some(Self::block("javascript")),
      "c" | "h" => Some(Self::block("c")),
      "css" => Some(Self::block("css")),
      "java" => Some(Self::block("java")),
      "rs" => Some(Self::block("rust")),
      "md" | "markdown" => {
        Some(Self {
          style:    FenceStyle::Markup,
          language: "markdown",
        })
      },
      _ => None,
    }
  }
}

/// Represents a heading discovered in the rendered document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
  /// Heading text, verbatim (internal whitespace preserved).
  pub text:  String,
  /// Heading level (1-4; deeper headings are invisible to the TOC).
  pub level: u8,
  /// Generated anchor ID for the heading.
  pub id:    String,
}

/// Result of converting one source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentResult {
  /// The complete HTML page.
  pub html: String,

  /// Headings discovered while building the table of contents. Empty when
  /// the document never asked for one.
  pub headings: Vec<Heading>,

  /// Title of the document, taken from its first heading when present.
  pub title: Option<String>,
}

/// Options for configuring a [`crate::DocProcessor`].
#[derive(Debug, Clone)]
pub struct DocOptions {
  /// Override for the fence language tag derived from the source kind.
  pub language: Option<String>,

  /// Label shown on the collapsible code-viewer toggle.
  pub toggle_label: String,

  /// Title used when the document has no headings and no file stem is
  /// available.
  pub fallback_title: Option<String>,
}

impl Default for DocOptions {
  fn default() -> Self {
    Self {
      language:       None,
      toggle_label:   "View code".to_string(),
      fallback_title: None,
    }
  }
}
