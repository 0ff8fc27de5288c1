//! Full-document assembly.
//!
//! Every generated page is self-contained: the stylesheet and the
//! collapsible-viewer script are inlined, and syntax highlighting is done
//! client-side by the prettify loader.

pub(crate) const STYLE: &str = r"
body { width: 90%; max-width: 1200px; margin: auto; font-family: Helvetica, arial, sans-serif; font-size: 14px; line-height: 1.6; padding: 10px; background-color: white; color: #333; }
a { color: #4183C4; }
h1, h2, h3, h4, h5, h6 { margin: 20px 0 10px; padding: 0; font-weight: bold; cursor: text; position: relative; }
h1 { font-size: 28px; color: black; }
h2 { font-size: 24px; border-bottom: 1px solid #cccccc; color: black; }
h3 { font-size: 18px; }
h4 { font-size: 16px; }
p, blockquote, ul, ol, dl, li, table, pre { margin: 15px 0; }
ul, ol { padding-left: 30px; }
blockquote { border-left: 4px solid #dddddd; padding: 0 15px; color: #777777; }
table { padding: 0; }
table tr { border-top: 1px solid #cccccc; background-color: white; margin: 0; padding: 0; }
table tr:nth-child(2n) { background-color: #f8f8f8; }
table tr th, table tr td { border: 1px solid #cccccc; text-align: left; margin: 0; padding: 6px 13px; }
img { max-width: 100%; }
code, tt { margin: 0; padding: 0 5px; white-space: nowrap; }
pre { background-color: #333; border: none; font-size: 13px; line-height: 19px; overflow: auto; padding: 6px 10px; margin: 0; }
pre code { margin: 0; padding: 0; white-space: pre; border: none; background: transparent; }
.codeview { margin-top: 10px; }
.collapsible { background-color: #ccc; color: white; cursor: pointer; padding: 5px; width: 80px; border: none; text-align: center; outline: none; font-size: 12px; margin: 0; }
.active, .collapsible:hover { background-color: #aaa; }
.content { padding: 0; max-height: 0; overflow: hidden; transition: max-height 0.15s ease-out; margin: 0; }
.toc-title { color: #555; }
.toc-entry { margin-top: 0; margin-bottom: 0; }
.toc-entry a { color: #333; }
.toc-level-1 { margin-left: 0; }
.toc-level-2 { margin-left: 20px; }
.toc-level-3 { margin-left: 40px; }
.toc-level-4 { margin-left: 60px; }
.back-to-toc { font-size: 10px; color: #555; margin-top: 0; }
.xref { color: #555; text-decoration: none; }
";

pub(crate) const SCRIPT: &str = r#"
var coll = document.getElementsByClassName("collapsible");
var i;
for (i = 0; i < coll.length; i++) {
  coll[i].addEventListener("click", function() {
    this.classList.toggle("active");
    var content = this.nextElementSibling;
    if (content.style.maxHeight) {
      content.style.maxHeight = null;
    } else {
      content.style.maxHeight = content.scrollHeight + "px";
    }
  });
}
"#;

const HIGHLIGHT_LOADER: &str = "https://cdn.jsdelivr.net/gh/google/code-prettify@master/loader/run_prettify.js?skin=desert";

/// Wrap a rendered body fragment into a complete, self-contained HTML page.
#[must_use]
pub fn assemble(title: &str, body: &str) -> String {
  format!(
    "<html><head><meta charset=\"utf-8\"><meta name=\"viewport\" \
     content=\"width=device-width, initial-scale=1\"><title>{}</title>\
     <style>{STYLE}</style></head><body>\n{body}\n<script>{SCRIPT}</script>\
     <script src=\"{HIGHLIGHT_LOADER}\"></script></body></html>",
    html_escape::encode_text(title)
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn assembled_page_is_self_contained() {
    let page = assemble("Demo", "<p>hello</p>");
    assert!(page.contains("<title>Demo</title>"));
    assert!(page.contains("<p>hello</p>"));
    assert!(page.contains(".collapsible"));
    assert!(page.contains("run_prettify"));
  }

  #[test]
  fn title_text_is_escaped() {
    let page = assemble("a < b", "");
    assert!(page.contains("<title>a &lt; b</title>"));
  }
}
