//! Markdown rendering.
//!
//! The woven Markdown document is handed to comrak; the boundary markup the
//! wrapper produced passes through raw (`render.unsafe`), so the collapsible
//! viewers survive rendering intact.
use comrak::options::Options;

/// Render a Markdown document to an HTML body fragment.
#[must_use]
pub fn to_html(markdown: &str) -> String {
  let options = comrak_options();
  let html = comrak::markdown_to_html(markdown, &options);

  // Wire rendered fences to the client-side highlighter.
  html.replace("class=\"language-", "class=\"prettyprint lang-")
}

fn comrak_options() -> Options<'static> {
  let mut options = Options::default();
  options.extension.table = true;
  options.extension.footnotes = true;
  options.extension.strikethrough = true;
  options.extension.tasklist = true;
  options.extension.autolink = true;
  options.render.r#unsafe = true;
  options
}
