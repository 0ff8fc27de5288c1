//! The conversion pipeline.
use std::{fs, path::Path};

use log::debug;
use tendril::TendrilSink as _;

use crate::{
  error::WeaveError,
  page, render, segment, toc,
  types::{DocOptions, DocumentResult, FenceStyle, Heading, SourceKind},
  utils, xref,
};

/// Main document converter.
///
/// One processor can be reused across files; it holds no per-document state.
#[derive(Debug, Clone, Default)]
pub struct DocProcessor {
  options: DocOptions,
}

impl DocProcessor {
  /// Create a new `DocProcessor` with the given options.
  #[must_use]
  pub const fn new(options: DocOptions) -> Self {
    Self { options }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &DocOptions {
    &self.options
  }

  /// Convert raw source text into a complete documentation page.
  #[must_use]
  pub fn convert(&self, source: &str, kind: SourceKind) -> DocumentResult {
    self.convert_inner(source, kind, None)
  }

  /// Convert a source file, selecting the segmentation convention from its
  /// extension and falling back to the file stem for the page title.
  ///
  /// # Errors
  ///
  /// Returns [`WeaveError::UnsupportedSource`] when the extension maps to no
  /// known convention, and [`WeaveError::Io`] when the file cannot be read.
  pub fn convert_path(&self, path: &Path) -> Result<DocumentResult, WeaveError> {
    let kind = SourceKind::from_path(path)
      .ok_or_else(|| WeaveError::UnsupportedSource(path.to_path_buf()))?;
    let source = fs::read_to_string(path)?;
    let stem = path.file_stem().and_then(|s| s.to_str());
    Ok(self.convert_inner(&source, kind, stem))
  }

  fn convert_inner(
    &self,
    source: &str,
    kind: SourceKind,
    stem: Option<&str>,
  ) -> DocumentResult {
    let markdown = match kind.style {
      FenceStyle::Markup => utils::normalize_newlines(source),
      FenceStyle::Fenced | FenceStyle::Block => {
        let segments = segment::segment(source, kind.style);
        debug!("split source into {} segments", segments.len());
        let language =
          self.options.language.as_deref().unwrap_or(kind.language);
        segment::weave(&segments, language, &self.options.toggle_label)
      },
    };

    let title = utils::extract_markdown_title(&markdown)
      .or_else(|| self.options.fallback_title.clone())
      .or_else(|| stem.map(str::to_owned))
      .unwrap_or_else(|| "Documentation".to_string());

    let body = render::to_html(&markdown);
    let page = page::assemble(&title, &body);

    // The TOC pass does not short-circuit internally; the token check is the
    // caller's job.
    let (html, headings) = if page.contains(toc::TOC_TOKEN) {
      postprocess(&page)
    } else {
      (page, Vec::new())
    };

    DocumentResult {
      html: format!("<!DOCTYPE html>\n{html}"),
      headings,
      title: Some(title),
    }
  }
}

/// Apply the DOM transformations, then splice the TOC fragment into the
/// serialized document.
fn postprocess(page: &str) -> (String, Vec<Heading>) {
  let document = kuchikikiki::parse_html().one(page);

  let anchored = toc::anchor_headings(&document);
  toc::insert_backlinks(&anchored);
  let headings: Vec<Heading> =
    anchored.into_iter().map(|(_, heading)| heading).collect();
  xref::link_references(&document, &headings);

  let serialized = utils::serialize_document(&document);
  let fragment = toc::render_fragment(&headings);
  (toc::splice(&serialized, &fragment), headings)
}
