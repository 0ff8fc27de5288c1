//! Heading indexing and table-of-contents synthesis.
//!
//! Works on a parsed document tree: every `h1`-`h4` element gets a stable
//! anchor identifier, every heading except the first gets a back-to-contents
//! link, and the assembled TOC fragment replaces the first literal
//! occurrence of the placeholder token in the serialized document. Headings
//! of level 5 and deeper are invisible to the whole pass.
use std::{collections::HashMap, fmt::Write as _};

use kuchikikiki::NodeRef;
use markup5ever::local_name;

use crate::{types::Heading, utils};

/// Placeholder token replaced by the generated table of contents. Only the
/// first occurrence per document is recognized; callers check for the token
/// before invoking the pass.
pub const TOC_TOKEN: &str = "[TOC]";

/// Anchor of the TOC header itself, targeted by the back-to-contents links.
const TOC_ANCHOR: &str = "toc";

/// Walk the document in order, assign an anchor identifier to every
/// `h1`-`h4` heading, and return the heading records paired with their
/// nodes.
///
/// Identifiers are derived with [`utils::heading_id`]; a duplicate derivation
/// gets a `_2`, `_3`, ... suffix so the TOC never targets one anchor twice.
pub(crate) fn anchor_headings(document: &NodeRef) -> Vec<(NodeRef, Heading)> {
  let mut seen: HashMap<String, usize> = HashMap::new();
  let mut anchored = Vec::new();

  for node in document.inclusive_descendants() {
    let Some(element) = node.as_element() else {
      continue;
    };
    let level = match element.name.local.as_ref() {
      "h1" => 1,
      "h2" => 2,
      "h3" => 3,
      "h4" => 4,
      _ => continue,
    };

    let text = node.text_contents();
    let base = utils::heading_id(&text);
    let count = *seen
      .entry(base.clone())
      .and_modify(|c| *c += 1)
      .or_insert(1);
    let id = if count > 1 {
      format!("{base}_{count}")
    } else {
      base
    };

    element
      .attributes
      .borrow_mut()
      .insert(local_name!("id"), id.clone());

    anchored.push((node.clone(), Heading {
      text,
      level,
      id,
    }));
  }

  anchored
}

/// Insert a back-to-contents link after every heading except the first. The
/// first heading is exempt because the TOC conventionally sits right below
/// it.
pub(crate) fn insert_backlinks(anchored: &[(NodeRef, Heading)]) {
  for (node, _) in anchored.iter().skip(1) {
    let link = utils::html_element(local_name!("a"), vec![
      utils::html_attribute("href", format!("#{TOC_ANCHOR}")),
      utils::html_attribute("class", "back-to-toc".to_string()),
    ]);
    link.append(NodeRef::new_text("TOC"));

    node.insert_after(utils::html_element(local_name!("br"), Vec::new()));
    node.insert_after(link);
  }
}

/// Render the TOC fragment: a contents header followed by one indented link
/// per heading. Link text is the original display text, escaped.
pub(crate) fn render_fragment(headings: &[Heading]) -> String {
  let mut fragment = format!(
    "<h3 class=\"toc-title\" id=\"{TOC_ANCHOR}\">Table of Contents</h3>\n"
  );
  for heading in headings {
    let _ = writeln!(
      fragment,
      "<p class=\"toc-entry toc-level-{}\"><a href=\"#{}\">{}</a></p>",
      heading.level,
      heading.id,
      html_escape::encode_text(&heading.text),
    );
  }
  fragment.push_str("<br>\n");
  fragment
}

/// Replace the first literal occurrence of [`TOC_TOKEN`] with the fragment.
/// Later occurrences are left as literal text.
pub(crate) fn splice(html: &str, fragment: &str) -> String {
  html.replacen(TOC_TOKEN, fragment, 1)
}
