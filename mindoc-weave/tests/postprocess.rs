//! Table-of-contents synthesis and cross-reference linking over full
//! documents.
#![allow(clippy::unwrap_used, reason = "Tests can unwrap")]

use mindoc_weave::{DocOptions, DocProcessor, FenceStyle, SourceKind};

const PYTHON: SourceKind = SourceKind {
  style:    FenceStyle::Fenced,
  language: "python",
};

fn convert(source: &str) -> mindoc_weave::DocumentResult {
  DocProcessor::new(DocOptions::default()).convert(source, PYTHON)
}

#[test]
fn headings_receive_derived_anchor_identifiers() {
  let source = "\"\"\"\n# Intro\n\n[TOC]\n\n## My Section.\n\"\"\"\npass\n";
  let result = convert(source);

  assert!(result.html.contains("<h1 id=\"intro\">"));
  assert!(result.html.contains("<h2 id=\"my_section_\">"));
  assert_eq!(result.headings.len(), 2);
  assert_eq!(result.headings[1].id, "my_section_");
  assert_eq!(result.headings[1].level, 2);
}

#[test]
fn only_the_first_toc_token_is_replaced() {
  let source =
    "\"\"\"\n# Alpha\n\n[TOC]\n\n[TOC]\n\n## Beta\n\"\"\"\npass\n";
  let result = convert(source);

  assert_eq!(result.html.matches("id=\"toc\"").count(), 1);
  assert_eq!(result.html.matches("[TOC]").count(), 1);
  assert!(result.html.contains("Table of Contents"));
}

#[test]
fn without_the_token_the_whole_pass_is_skipped() {
  let source = "\"\"\"\n# Alpha\n\n## Beta\n\"\"\"\npass\n";
  let result = convert(source);

  assert!(!result.html.contains("id=\"alpha\""));
  assert!(!result.html.contains("Table of Contents"));
  assert!(result.headings.is_empty());
}

#[test]
fn toc_entries_are_indented_by_level() {
  let source =
    "\"\"\"\n# A\n\n[TOC]\n\n## B\n\n### C\n\n#### D\n\"\"\"\npass\n";
  let result = convert(source);

  assert!(result.html.contains("class=\"toc-entry toc-level-1\""));
  assert!(result.html.contains("class=\"toc-entry toc-level-2\""));
  assert!(result.html.contains("class=\"toc-entry toc-level-3\""));
  assert!(result.html.contains("class=\"toc-entry toc-level-4\""));
  assert!(result.html.contains("href=\"#a\""));
  assert!(result.html.contains("href=\"#d\""));
}

#[test]
fn every_heading_but_the_first_links_back_to_the_toc() {
  let source =
    "\"\"\"\n# A\n\n[TOC]\n\n## B\n\n## C\n\n### D\n\"\"\"\npass\n";
  let result = convert(source);

  assert_eq!(result.headings.len(), 4);
  assert_eq!(result.html.matches("class=\"back-to-toc\"").count(), 3);
}

#[test]
fn headings_deeper_than_level_four_are_invisible() {
  let source =
    "\"\"\"\n# A\n\n[TOC]\n\n##### Deep\n\"\"\"\npass\n";
  let result = convert(source);

  assert_eq!(result.headings.len(), 1);
  assert!(!result.html.contains("href=\"#deep\""));
  assert!(result.html.contains("<h5>Deep</h5>"));
}

#[test]
fn bracketed_heading_text_becomes_a_cross_reference() {
  let source = "\"\"\"\n# Intro\n\n[TOC]\n\nSee [Setup] for details.\n\n\
                # Setup\n\nBack to [Intro].\n\"\"\"\npass\n";
  let result = convert(source);

  assert_eq!(result.html.matches("class=\"xref\"").count(), 2);
  assert!(result.html.contains("href=\"#setup\""));
  assert!(result.html.contains("See "));
  assert!(result.html.contains(" for details."));
  assert!(!result.html.contains("[Setup]"));
  assert!(!result.html.contains("[Intro]"));
}

#[test]
fn markers_inside_code_segments_stay_literal() {
  let source = "\"\"\"\n# Intro\n\n[TOC]\n\n`[Intro]` stays literal.\n\"\"\"\n\
                x = \"[Intro]\"\n";
  let result = convert(source);

  assert_eq!(result.html.matches("class=\"xref\"").count(), 0);
  assert_eq!(result.html.matches("[Intro]").count(), 2);
}

#[test]
fn duplicate_headings_get_suffixed_identifiers() {
  let source =
    "\"\"\"\n# Top\n\n[TOC]\n\nSee [Dup].\n\n## Dup\n\n## Dup\n\"\"\"\npass\n";
  let result = convert(source);

  assert!(result.html.contains("id=\"dup\""));
  assert!(result.html.contains("id=\"dup_2\""));
  // The cross-reference and the first TOC entry both target the first one.
  assert_eq!(result.html.matches("href=\"#dup\"").count(), 2);
  assert_eq!(result.html.matches("href=\"#dup_2\"").count(), 1);
}
