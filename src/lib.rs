//! # mf2
//!
//! A microformats2 parser: extracts `h-*` items, their properties and the
//! document's relation links from HTML.
//!
//! ## Features
//!
//! - Plain, URL, embedded-markup and datetime properties, including the
//!   value-class-pattern
//! - Compound properties and nested child items
//! - Implied `name`, `photo` and `url`
//! - `rels`, `rel-urls` and `alternates`, resolved against `<base href>`
//! - JSON output in the standard microformats2 shape
//!
//! ## Quick Start
//!
//! ```
//! use mf2::{ParseOptions, parse_html_str};
//!
//! let html = r#"
//!     <div class="h-card">
//!       <a class="p-name u-url" href="/amy">Amy Smith</a>
//!     </div>
//!     <a rel="me" href="https://social.example/@amy">me</a>
//! "#;
//!
//! let options = ParseOptions::new().with_base_url("https://example.com/");
//! let doc = parse_html_str(html, &options)?;
//!
//! let card = &doc.items[0];
//! assert_eq!(card.texts("name").next(), Some("Amy Smith"));
//! assert_eq!(card.texts("url").next(), Some("https://example.com/amy"));
//! assert_eq!(doc.rel("me"), ["https://social.example/@amy"]);
//!
//! println!("{}", doc.to_json_pretty()?);
//! # Ok::<(), mf2::Error>(())
//! ```
//!
//! ## Working with a Parsed Tree
//!
//! Parsing the HTML and extracting microformats are separate steps, so a
//! tree can be parsed once and searched many times, or only part of it
//! extracted:
//!
//! ```
//! use mf2::{ParseOptions, Parser, parse_html};
//!
//! let dom = parse_html(r#"<main><article class="h-entry">Hello</article></main>"#);
//! let parser = Parser::new(ParseOptions::default())?;
//!
//! let main = dom.find_by_tag("main").unwrap();
//! let doc = parser.parse_node(&dom, main)?;
//! assert_eq!(doc.items[0].texts("name").next(), Some("Hello"));
//! # Ok::<(), mf2::Error>(())
//! ```

pub mod dom;
pub mod error;
pub mod model;
pub mod options;
pub mod parser;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::path::Path;

pub use dom::{ArenaDom, ArenaNodeId, parse_html, parse_html_bytes};
pub use error::{Error, Result};
pub use model::{Alternate, Document, EmbeddedHtml, Item, PropertyValue, RelUrl};
pub use options::ParseOptions;
pub use parser::Parser;

/// Parse an HTML string and extract its microformats in one step.
pub fn parse_html_str(html: &str, options: &ParseOptions) -> Result<Document> {
    let parser = Parser::new(options.clone())?;
    parser.parse(&parse_html(html))
}

/// Parse HTML bytes, decoding them as UTF-8, their declared charset or
/// Windows-1252, in that order.
pub fn parse_bytes(html: &[u8], options: &ParseOptions) -> Result<Document> {
    let parser = Parser::new(options.clone())?;
    parser.parse(&parse_html_bytes(html))
}

/// Read and parse an HTML file.
pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Document> {
    let bytes = std::fs::read(path)?;
    parse_bytes(&bytes, options)
}
