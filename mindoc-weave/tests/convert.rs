//! End-to-end conversion behavior over the `DocProcessor` surface.
#![allow(clippy::unwrap_used, reason = "Tests can unwrap")]

use mindoc_weave::{
  DocOptions, DocProcessor, FenceStyle, SourceKind, WeaveError,
};

const PYTHON: SourceKind = SourceKind {
  style:    FenceStyle::Fenced,
  language: "python",
};

const JAVASCRIPT: SourceKind = SourceKind {
  style:    FenceStyle::Block,
  language: "javascript",
};

const MARKDOWN: SourceKind = SourceKind {
  style:    FenceStyle::Markup,
  language: "markdown",
};

fn convert(source: &str, kind: SourceKind) -> mindoc_weave::DocumentResult {
  DocProcessor::new(DocOptions::default()).convert(source, kind)
}

#[test]
fn fenced_source_becomes_prose_plus_collapsible_viewer() {
  let source = "\"\"\"\n# Demo\n\nSome prose.\n\"\"\"\nprint(\"hi\")\n";
  let result = convert(source, PYTHON);

  assert!(result.html.starts_with("<!DOCTYPE html>"));
  assert!(result.html.contains("<h1"));
  assert!(result.html.contains("Some prose."));
  assert!(result.html.contains("class=\"collapsible\""));
  assert!(result.html.contains("View code"));
  assert!(result.html.contains("class=\"prettyprint lang-python\""));
  assert!(result.html.contains("print("));
}

#[test]
fn no_viewer_artifact_precedes_the_leading_documentation() {
  let source = "\"\"\"\nLeading doc.\n\"\"\"\ncode()\n";
  let result = convert(source, PYTHON);

  let doc = result.html.find("Leading doc.").unwrap();
  let button = result.html.find("<button").unwrap();
  assert!(doc < button);
}

#[test]
fn block_source_keeps_later_comments_as_code() {
  let source =
    "/*\n# Notes\n*/\nlet a = 1;\n/* inline */\nlet b = 2;\n";
  let result = convert(source, JAVASCRIPT);

  assert!(result.html.contains("<h1"));
  assert!(result.html.contains("class=\"prettyprint lang-javascript\""));
  assert!(result.html.contains("/* inline */"));
  assert_eq!(result.html.matches("class=\"collapsible\"").count(), 1);
}

#[test]
fn markup_source_passes_through_without_viewers() {
  let result = convert("# Title\n\nplain text\n", MARKDOWN);

  assert!(result.html.contains("<h1"));
  assert!(result.html.contains("plain text"));
  assert!(!result.html.contains("<button"));
}

#[test]
fn title_comes_from_the_first_heading() {
  let result = convert("\"\"\"\n# Demo\n\"\"\"\npass\n", PYTHON);
  assert_eq!(result.title.as_deref(), Some("Demo"));
  assert!(result.html.contains("<title>Demo</title>"));
}

#[test]
fn title_falls_back_to_the_configured_default() {
  let options = DocOptions {
    fallback_title: Some("my script".to_string()),
    ..DocOptions::default()
  };
  let result = DocProcessor::new(options)
    .convert("\"\"\"\nno headings here\n\"\"\"\npass\n", PYTHON);
  assert_eq!(result.title.as_deref(), Some("my script"));
}

#[test]
fn toggle_label_and_language_are_configurable() {
  let options = DocOptions {
    language: Some("python3".to_string()),
    toggle_label: "Show".to_string(),
    ..DocOptions::default()
  };
  let result = DocProcessor::new(options)
    .convert("\"\"\"\ndoc\n\"\"\"\npass\n", PYTHON);
  assert!(result.html.contains(">Show</button>"));
  assert!(result.html.contains("class=\"prettyprint lang-python3\""));
}

#[test]
fn convert_path_reads_kind_and_title_from_the_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("script.py");
  std::fs::write(&path, "\"\"\"\nno headings\n\"\"\"\npass\n").unwrap();

  let result = DocProcessor::new(DocOptions::default())
    .convert_path(&path)
    .unwrap();
  assert_eq!(result.title.as_deref(), Some("script"));
  assert!(result.html.contains("class=\"prettyprint lang-python\""));
}

#[test]
fn convert_path_rejects_unknown_extensions() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("notes.txt");
  std::fs::write(&path, "plain").unwrap();

  let error = DocProcessor::new(DocOptions::default())
    .convert_path(&path)
    .unwrap_err();
  assert!(matches!(error, WeaveError::UnsupportedSource(_)));
}
