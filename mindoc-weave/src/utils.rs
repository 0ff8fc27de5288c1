//! Small helpers shared across the pipeline stages.
use comrak::{Arena, nodes::NodeValue, options::Options, parse_document};
use kuchikikiki::{Attribute, ExpandedName, NodeRef};
use regex::Regex;

/// Normalize platform line endings to a single `\n` convention.
///
/// Fence delimiters match on exact newline-bounded tokens, so this must run
/// before any delimiter scanning.
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
  text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Derive the anchor identifier for a heading.
///
/// The contract is deliberately simple and deterministic: strip outer
/// whitespace and embedded newline/tab characters, turn spaces and periods
/// into underscores, and lowercase the result. Running the derivation on its
/// own output is a no-op.
#[must_use]
pub fn heading_id(text: &str) -> String {
  text
    .trim()
    .chars()
    .filter(|c| !matches!(c, '\n' | '\t'))
    .map(|c| {
      match c {
        ' ' | '.' => '_',
        other => other,
      }
    })
    .collect::<String>()
    .to_lowercase()
}

/// Extract the first heading from markdown content as the page title.
/// Returns `None` if no heading is found.
#[must_use]
pub fn extract_markdown_title(content: &str) -> Option<String> {
  let arena = Arena::new();
  let mut options = Options::default();
  options.extension.table = true;
  options.extension.strikethrough = true;
  options.render.r#unsafe = true;

  let root = parse_document(&arena, content, &options);

  for node in root.descendants() {
    if let NodeValue::Heading(_) = &node.data.borrow().value {
      let mut text = String::new();
      for child in node.children() {
        if let NodeValue::Text(t) = &child.data.borrow().value {
          text.push_str(t);
        }
        if let NodeValue::Code(t) = &child.data.borrow().value {
          text.push_str(&t.literal);
        }
      }
      if !text.trim().is_empty() {
        return Some(text.trim().to_string());
      }
    }
  }
  None
}

/// Serialize a parsed document back to an HTML string.
pub(crate) fn serialize_document(document: &NodeRef) -> String {
  let mut out = Vec::new();
  document.serialize(&mut out).ok();
  String::from_utf8(out).unwrap_or_default()
}

/// Build an HTML element node with the given attributes.
pub(crate) fn html_element(
  name: markup5ever::LocalName,
  attributes: Vec<(ExpandedName, Attribute)>,
) -> NodeRef {
  NodeRef::new_element(
    markup5ever::QualName::new(None, markup5ever::ns!(html), name),
    attributes,
  )
}

/// Build one attribute pair for [`html_element`].
pub(crate) fn html_attribute(
  name: &str,
  value: String,
) -> (ExpandedName, Attribute) {
  (ExpandedName::new("", name), Attribute {
    prefix: None,
    value,
  })
}

/// Create a regex that never matches anything.
///
/// Used as a fallback when a static pattern fails to compile, which is safer
/// than a trivial pattern like `^$` that would match empty strings.
#[must_use]
pub fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "This pattern is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn heading_id_follows_the_derivation_contract() {
    assert_eq!(heading_id("My Section."), "my_section_");
    assert_eq!(heading_id("  How to use  "), "how_to_use");
  }

  #[test]
  fn heading_id_drops_embedded_newlines_and_tabs() {
    assert_eq!(heading_id("A\n\tB"), "ab");
  }

  #[test]
  fn heading_id_is_idempotent() {
    let once = heading_id("Some .py Code style");
    assert_eq!(heading_id(&once), once);
  }

  #[test]
  fn newline_normalization_covers_crlf_and_bare_cr() {
    assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
  }
}
