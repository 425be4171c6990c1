//! Recognizes root and property class names.

/// How a property's value is parsed, from its class prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// `p-*`: plain text.
    Plain,
    /// `u-*`: URL.
    Url,
    /// `e-*`: embedded markup.
    Embedded,
    /// `dt-*`: date/time string, passed through unparsed.
    DateTime,
}

impl PropertyKind {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "p" => Some(PropertyKind::Plain),
            "u" => Some(PropertyKind::Url),
            "e" => Some(PropertyKind::Embedded),
            "dt" => Some(PropertyKind::DateTime),
            _ => None,
        }
    }
}

/// One `(p|u|e|dt)-name` class on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyClass<'a> {
    pub kind: PropertyKind,
    pub name: &'a str,
}

/// The microformat classes found on one element.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Classes<'a> {
    /// `h-*` classes in token order.
    pub roots: Vec<&'a str>,
    /// Property classes in token order.
    pub properties: Vec<PropertyClass<'a>>,
}

impl Classes<'_> {
    pub fn is_root(&self) -> bool {
        !self.roots.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.properties.is_empty()
    }
}

/// Split an element's class tokens into root and property classes.
///
/// Tokens with an empty name (`h-`, `p-`) are ignored. Every other token is
/// kept, so an element may be several types and carry several properties at
/// once.
pub fn classify(classes: &[String]) -> Classes<'_> {
    let mut out = Classes::default();
    for class in classes {
        if is_root_class(class) {
            out.roots.push(class);
        } else if let Some(property) = property_class(class) {
            out.properties.push(property);
        }
    }
    out
}

/// Whether a class token is an `h-*` root.
pub fn is_root_class(class: &str) -> bool {
    class.strip_prefix("h-").is_some_and(|name| !name.is_empty())
}

/// Parse a `(p|u|e|dt)-name` token.
pub fn property_class(class: &str) -> Option<PropertyClass<'_>> {
    let (prefix, name) = class.split_once('-')?;
    let kind = PropertyKind::from_prefix(prefix)?;
    if name.is_empty() {
        return None;
    }
    Some(PropertyClass { kind, name })
}

/// Whether any token marks a property.
pub fn has_property_class(classes: &[String]) -> bool {
    classes.iter().any(|c| property_class(c).is_some())
}

/// Whether any token marks a root.
pub fn has_root_class(classes: &[String]) -> bool {
    classes.iter().any(|c| is_root_class(c))
}
