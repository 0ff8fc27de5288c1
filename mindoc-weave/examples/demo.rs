//! Convert a small fenced source inline and print the generated page.
#![allow(clippy::print_stdout, reason = "Example output")]

use mindoc_weave::{DocOptions, DocProcessor, FenceStyle, SourceKind};

fn main() {
  let source = "\"\"\"\n# Demo\n\n[TOC]\n\nSee [Usage].\n\n## Usage\n\n\
                Run it.\n\"\"\"\nprint(\"hello\")\n";

  let processor = DocProcessor::new(DocOptions::default());
  let kind = SourceKind {
    style:    FenceStyle::Fenced,
    language: "python",
  };
  let result = processor.convert(source, kind);

  println!("{}", result.html);
}
