//! Parse result model.
//!
//! Plain data populated by the parser:
//! - [`Document`]: items plus document-level relation links
//! - [`Item`]: one microformat object and its properties
//! - [`PropertyValue`]: string, embedded markup, or nested item
//! - [`RelUrl`] and [`Alternate`]: link metadata

mod document;
mod item;

pub use document::{Alternate, Document, RelUrl};
pub use item::{EmbeddedHtml, Item, PropertyValue};
