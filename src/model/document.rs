//! Whole-document parse result.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::error::Result;

/// Everything extracted from one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Top-level items: items with no enclosing item.
    pub items: Vec<Item>,

    /// Relation token to absolute URLs, duplicates kept, in document order.
    #[serde(default)]
    pub rels: IndexMap<String, Vec<String>>,

    /// Absolute URL to the metadata of the last link pointing at it.
    #[serde(rename = "rel-urls", default)]
    pub rel_urls: IndexMap<String, RelUrl>,

    /// Links whose `rel` contained `alternate`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<Alternate>,
}

impl Document {
    /// Serialize to compact JSON in the microformats2 exchange shape.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a previously serialized document.
    ///
    /// Compound values nest several JSON levels per item, so the recursion
    /// limit is lifted and the stack grows on demand instead.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let doc = Self::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(doc)
    }

    /// URLs recorded for a relation token.
    pub fn rel(&self, token: &str) -> &[String] {
        self.rels.get(token).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every item in the document, including nested and child items.
    pub fn all_items(&self) -> Vec<&Item> {
        let mut out = Vec::new();
        for item in &self.items {
            item.walk(&mut |i| out.push(i));
        }
        out
    }

    /// Top-level items carrying the given type.
    pub fn items_of_type<'a>(&'a self, ty: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.types.iter().any(|t| t == ty))
    }
}

/// Metadata about a URL referenced by a relation link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelUrl {
    /// Relation tokens of the link, in attribute order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rels: Vec<String>,

    /// Visible link text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub media: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hreflang: String,

    /// Content-type hint from the `type` attribute.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub media_type: String,
}

/// A link to an alternate representation of the document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alternate {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// The link's relation tokens minus `alternate`, space-separated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rel: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub media: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hreflang: String,

    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub media_type: String,
}
