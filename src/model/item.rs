//! Items and property values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A microformats2 item: the object rooted at an element with an `h-*` class.
///
/// `types` is never empty and property names are never empty; the parser
/// only creates items through [`Item::new`] with at least one root class and
/// [`Item::push_property`] drops nameless properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    /// Root class names in the order they appear on the element.
    #[serde(rename = "type")]
    pub types: Vec<String>,

    /// Property name to values, both in document order.
    #[serde(default)]
    pub properties: IndexMap<String, Vec<PropertyValue>>,

    /// Scalar value when this item is itself the value of a property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Markup when this item is the value of an `e-*` property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// `shape` attribute of an `<area>` root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,

    /// `coords` attribute of an `<area>` root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<String>,

    /// Nested items that are not the value of any property.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,
}

impl Item {
    /// Create an empty item with the given root types.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Whether any value has been recorded for `name`.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// All values of a property, in document order.
    pub fn property(&self, name: &str) -> Option<&[PropertyValue]> {
        self.properties.get(name).map(Vec::as_slice)
    }

    /// Plain-string values of a property, skipping embedded and nested values.
    pub fn texts<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.properties
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(PropertyValue::as_text)
    }

    /// Append a value to a property. Empty property names are ignored.
    pub fn push_property(&mut self, name: impl Into<String>, value: PropertyValue) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.properties.entry(name).or_default().push(value);
    }

    /// Visit this item and every item nested beneath it, depth-first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Item)) {
        visit(self);
        for values in self.properties.values() {
            for value in values {
                if let PropertyValue::Item(nested) = value {
                    nested.walk(visit);
                }
            }
        }
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Number of items in this tree, counting `self`.
    pub fn item_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }
}

/// One value of a property.
///
/// Serialized without a tag, so consumers see a bare string, a
/// `{value, html}` object or a nested item object and must branch on shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Plain text, URL or datetime string.
    Text(String),
    /// A compound property: the value is itself an item.
    Item(Box<Item>),
    /// An `e-*` property: text plus the markup it came from.
    Embedded(EmbeddedHtml),
}

impl PropertyValue {
    /// The string payload if this is a plain value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The nested item if this is a compound value.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            PropertyValue::Item(item) => Some(item),
            _ => None,
        }
    }

    /// The embedded markup if this is an `e-*` value.
    pub fn as_embedded(&self) -> Option<&EmbeddedHtml> {
        match self {
            PropertyValue::Embedded(embedded) => Some(embedded),
            _ => None,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Text(text)
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

impl From<Item> for PropertyValue {
    fn from(item: Item) -> Self {
        PropertyValue::Item(Box::new(item))
    }
}

/// Value of an `e-*` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedHtml {
    /// Trimmed text content.
    pub value: String,
    /// Serialized markup of the element's children.
    pub html: String,
}
