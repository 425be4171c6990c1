//! Read-only markup tree consumed by the microformats parser.
//!
//! html5ever does the tokenizing and tree construction; this module owns
//! the arena the tree lands in plus the text and HTML views of a subtree
//! that property parsing needs.
//!
//! # Example
//!
//! ```
//! use mf2::dom::{parse_html, text_of};
//!
//! let dom = parse_html("<p>Hello, <b>World</b>!</p>");
//! let p = dom.find_by_tag("p").unwrap();
//! assert_eq!(text_of(&dom, p), "Hello, World!");
//! ```

mod arena;
mod elements;
mod serialize;
mod text;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, ChildrenIter};
pub use elements::is_block_level;
pub use serialize::{inner_html, outer_html};
pub use text::{text_of, trimmed_text};
pub use tree_sink::ArenaSink;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse an HTML document into an [`ArenaDom`].
///
/// Parsing never fails: malformed markup is repaired the way browsers
/// repair it.
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    let dom = parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom();
    tracing::trace!(nodes = dom.len(), "parsed html");
    dom
}

/// Parse HTML bytes into an [`ArenaDom`].
///
/// Convenience wrapper that handles byte-to-string conversion. Supports
/// UTF-8, Windows-1252, and any encoding declared by a `<meta charset>`.
pub fn parse_html_bytes(html: &[u8]) -> ArenaDom {
    let hint_encoding = crate::util::extract_meta_charset(html);
    let html_str = crate::util::decode_text(html, hint_encoding);
    parse_html(&html_str)
}
