//! Cross-reference linking.
//!
//! A literal `[Heading Text]` marker anywhere in documentation prose becomes
//! a link to that heading's anchor. The substitution is a tree-aware
//! text-node rewrite rather than a global string replacement: attribute
//! values, existing anchors, code listings and the embedded style/script can
//! never be corrupted by a coincidental match.
use kuchikikiki::NodeRef;
use markup5ever::local_name;

use crate::{types::Heading, utils};

/// Replace every marker occurrence in prose text nodes with a link to the
/// matching heading. When two headings share the same trimmed display text,
/// the earlier heading owns the marker.
pub(crate) fn link_references(document: &NodeRef, headings: &[Heading]) {
  let mut targets: Vec<(String, &Heading)> = Vec::new();
  for heading in headings {
    let marker = format!("[{}]", heading.text.trim());
    if marker.len() > 2 && !targets.iter().any(|(m, _)| *m == marker) {
      targets.push((marker, heading));
    }
  }
  if targets.is_empty() {
    return;
  }

  // Snapshot first: the rewrite splices new nodes into the tree.
  let mut text_nodes = Vec::new();
  for node in document.inclusive_descendants() {
    if node.as_text().is_some() && !in_skipped_subtree(&node) {
      text_nodes.push(node);
    }
  }

  for node in text_nodes {
    let Some(text) = node.as_text() else {
      continue;
    };
    let content = text.borrow().clone();
    let Some(rewritten) = rewrite(&content, &targets) else {
      continue;
    };
    for new_node in rewritten {
      node.insert_before(new_node);
    }
    node.detach();
  }
}

/// Text inside these elements is never rewritten.
fn in_skipped_subtree(node: &NodeRef) -> bool {
  let mut parent = node.parent();
  while let Some(ancestor) = parent {
    if let Some(element) = ancestor.as_element() {
      if matches!(
        element.name.local.as_ref(),
        "a" | "code" | "pre" | "script" | "style"
      ) {
        return true;
      }
    }
    parent = ancestor.parent();
  }
  false
}

/// Split one text node's content around marker occurrences. Returns `None`
/// when no marker matches, so untouched nodes stay in place.
fn rewrite(
  content: &str,
  targets: &[(String, &Heading)],
) -> Option<Vec<NodeRef>> {
  let mut nodes = Vec::new();
  let mut rest = content;

  loop {
    // Earliest occurrence wins; on a tie, the earlier heading does.
    let hit = targets
      .iter()
      .enumerate()
      .filter_map(|(rank, (marker, heading))| {
        rest.find(marker).map(|at| (at, rank, marker, *heading))
      })
      .min_by_key(|(at, rank, ..)| (*at, *rank));

    let Some((at, _, marker, heading)) = hit else {
      break;
    };
    if at > 0 {
      nodes.push(NodeRef::new_text(&rest[..at]));
    }
    nodes.push(reference_link(heading));
    rest = &rest[at + marker.len()..];
  }

  if nodes.is_empty() {
    return None;
  }
  if !rest.is_empty() {
    nodes.push(NodeRef::new_text(rest));
  }
  Some(nodes)
}

fn reference_link(heading: &Heading) -> NodeRef {
  let link = utils::html_element(local_name!("a"), vec![
    utils::html_attribute("href", format!("#{}", heading.id)),
    utils::html_attribute("class", "xref".to_string()),
  ]);
  link.append(NodeRef::new_text(heading.text.trim()));
  link
}
