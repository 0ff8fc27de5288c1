//! Fence segmentation and code-viewer markup.
//!
//! A source file is an alternating sequence of documentation and code
//! segments. The very first fence delimiter only opens segment 0 (always
//! documentation) and is discarded; every later delimiter toggles between the
//! two kinds. The segmenter is an explicit two-state machine over the lazy
//! sequence of delimiter occurrences, so the alternation invariant is carried
//! by the types rather than by occurrence counting.
use std::sync::LazyLock;

use regex::Regex;

use crate::{types::FenceStyle, utils};

/// Fence delimiter for [`FenceStyle::Fenced`] sources, matched only on its
/// own line. The first occurrence may open at file start.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(?m)^"{3}\n"#).unwrap_or_else(|e| {
    log::error!("Failed to compile FENCE_RE regex: {e}");
    utils::never_matching_regex()
  })
});

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Closing markup for a collapsible code viewer. Appended unconditionally at
/// the end of every woven document so a trailing code segment with no
/// terminating delimiter is still closed.
pub const VIEWER_CLOSE: &str = "```\n\n</div>\n</div>\n";

/// The kind of one contiguous run of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
  Documentation,
  Code,
}

/// A contiguous slice of the source document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
  pub kind: SegmentKind,
  pub text: String,
}

impl Segment {
  fn documentation(text: String) -> Self {
    Self {
      kind: SegmentKind::Documentation,
      text,
    }
  }

  fn code(text: String) -> Self {
    Self {
      kind: SegmentKind::Code,
      text,
    }
  }
}

/// Which boundary the next fence delimiter introduces.
#[derive(Debug, Clone, Copy)]
enum FenceState {
  AwaitCodeBoundary,
  AwaitDocBoundary,
}

/// Split raw source text into an ordered sequence of segments.
///
/// Line endings are normalized before matching. Segment kinds strictly
/// alternate starting with documentation; an empty trailing segment is kept
/// so [`weave`] reproduces boundary markup exactly. Fencing-convention
/// violations are not detected — the split is silent best-effort.
#[must_use]
pub fn segment(source: &str, style: FenceStyle) -> Vec<Segment> {
  let text = utils::normalize_newlines(source);
  match style {
    FenceStyle::Markup => vec![Segment::documentation(text)],
    FenceStyle::Block => segment_block(&text),
    FenceStyle::Fenced => segment_fenced(&text),
  }
}

fn segment_fenced(text: &str) -> Vec<Segment> {
  let mut boundaries = FENCE_RE.find_iter(text);
  let Some(first) = boundaries.next() else {
    return vec![Segment::documentation(text.to_string())];
  };

  let mut segments = Vec::new();
  // Text before the first delimiter merges into segment 0; the delimiter
  // itself produces no boundary markup.
  let mut current = String::from(&text[..first.start()]);
  let mut start = first.end();
  let mut state = FenceState::AwaitCodeBoundary;

  for boundary in boundaries {
    current.push_str(&text[start..boundary.start()]);
    let (kind, next) = match state {
      FenceState::AwaitCodeBoundary => {
        (SegmentKind::Documentation, FenceState::AwaitDocBoundary)
      },
      FenceState::AwaitDocBoundary => {
        (SegmentKind::Code, FenceState::AwaitCodeBoundary)
      },
    };
    segments.push(Segment {
      kind,
      text: std::mem::take(&mut current),
    });
    state = next;
    start = boundary.end();
  }

  current.push_str(&text[start..]);
  let kind = match state {
    FenceState::AwaitCodeBoundary => SegmentKind::Documentation,
    FenceState::AwaitDocBoundary => SegmentKind::Code,
  };
  segments.push(Segment {
    kind,
    text: current,
  });
  segments
}

/// Block-comment sources have no alternation: the first `/* ... */` comment
/// is the documentation and everything after it is one code segment, even if
/// it contains further literal comment delimiters.
fn segment_block(text: &str) -> Vec<Segment> {
  let Some(open) = text.find(BLOCK_OPEN) else {
    return vec![Segment::documentation(text.to_string())];
  };

  let head = &text[..open];
  let rest = &text[open + BLOCK_OPEN.len()..];
  let rest = rest.strip_prefix('\n').unwrap_or(rest);

  match rest.find(BLOCK_CLOSE) {
    Some(close) => {
      let body = &rest[close + BLOCK_CLOSE.len()..];
      let body = body.strip_prefix('\n').unwrap_or(body);
      vec![
        Segment::documentation(format!("{head}{}", &rest[..close])),
        Segment::code(body.to_string()),
      ]
    },
    None => vec![Segment::documentation(format!("{head}{rest}"))],
  }
}

/// Reconstitute a linear Markdown document from a segment sequence.
///
/// Documentation segments pass through as-is. Each code segment opens a
/// collapsible viewer with a fenced code block; the close appears at each
/// code-to-documentation boundary, plus once unconditionally at the end.
#[must_use]
pub fn weave(segments: &[Segment], language: &str, label: &str) -> String {
  let mut woven = String::with_capacity(
    segments.iter().map(|s| s.text.len() + 64).sum::<usize>() + 64,
  );
  let mut in_code = false;

  for segment in segments {
    match segment.kind {
      SegmentKind::Documentation => {
        if in_code {
          woven.push_str(VIEWER_CLOSE);
          in_code = false;
        }
        woven.push_str(&segment.text);
      },
      SegmentKind::Code => {
        woven.push_str(&viewer_open(language, label));
        woven.push_str(&segment.text);
        in_code = true;
      },
    }
  }

  woven.push_str(VIEWER_CLOSE);
  woven
}

/// Opening markup for a collapsible code viewer.
///
/// Structured so a CommonMark renderer sees one raw HTML block (the toggle
/// button and the content container), a blank line, then a fenced code block.
fn viewer_open(language: &str, label: &str) -> String {
  format!(
    "\n<div class=\"codeview\">\n<button type=\"button\" \
     class=\"collapsible\">{}</button>\n<div class=\"content\">\n\n```{}\n",
    html_escape::encode_text(label),
    language
  )
}
