//! # mindoc-weave
//!
//! The engine behind `mindoc`: converts a source file written with a
//! comment-fencing convention into a self-contained HTML documentation page,
//! with collapsible code viewers, a generated table of contents and
//! automatic cross-reference links.
//!
//! ## Quick Start
//!
//! ```rust
//! use mindoc_weave::{DocOptions, DocProcessor, FenceStyle, SourceKind};
//!
//! let processor = DocProcessor::new(DocOptions::default());
//! let kind = SourceKind {
//!   style:    FenceStyle::Fenced,
//!   language: "python",
//! };
//! let result =
//!   processor.convert("\"\"\"\n# Demo\n\"\"\"\nprint(\"hi\")\n", kind);
//!
//! assert!(result.html.contains("<h1"));
//! assert_eq!(result.title.as_deref(), Some("Demo"));
//! ```
//!
//! ## Pipeline
//!
//! - **Segmentation**: the source is split into alternating documentation and
//!   code segments by an explicit two-state machine over the fence
//!   delimiters.
//! - **Weaving**: code segments are wrapped in collapsible-viewer markup and
//!   the whole file becomes one linear Markdown document.
//! - **Rendering**: comrak turns the document into HTML.
//! - **Postprocessing**: when the document contains a `[TOC]` placeholder,
//!   every `h1`-`h4` heading gets a stable anchor, the table of contents is
//!   spliced in, and `[Heading Text]` markers in prose become links.

mod error;
mod page;
mod processor;
mod render;
pub mod segment;
mod toc;
mod types;
pub mod utils;
mod xref;

pub use crate::{
  error::WeaveError,
  processor::DocProcessor,
  toc::TOC_TOKEN,
  types::{DocOptions, DocumentResult, FenceStyle, Heading, SourceKind},
};
