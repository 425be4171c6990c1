//! Property value parsing.
//!
//! Each property kind has a fixed chain of sources; the first one present
//! wins. "Present" means the attribute exists, even if it is empty.

use crate::dom::{ArenaDom, ArenaNodeId, inner_html, is_block_level, text_of, trimmed_text};

use super::classify::{PropertyKind, is_root_class};
use super::urls::BaseUrl;

/// The raw outcome of parsing one property element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedValue {
    pub value: String,
    /// Markup of the element's children, for `e-*` only.
    pub html: Option<String>,
}

impl ParsedValue {
    fn text(value: String) -> Self {
        Self { value, html: None }
    }
}

/// Parse the value of a property of the given kind on element `id`.
pub fn parse_property(
    dom: &ArenaDom,
    id: ArenaNodeId,
    kind: PropertyKind,
    base: &BaseUrl,
) -> ParsedValue {
    match kind {
        PropertyKind::Plain => ParsedValue::text(plain_value(dom, id)),
        PropertyKind::Url => ParsedValue::text(base.resolve(&url_value(dom, id))),
        PropertyKind::Embedded => ParsedValue {
            value: trimmed_text(dom, id),
            html: Some(inner_html(dom, id)),
        },
        PropertyKind::DateTime => ParsedValue::text(datetime_value(dom, id)),
    }
}

fn plain_value(dom: &ArenaDom, id: ArenaNodeId) -> String {
    value_class_pattern(dom, id, PropertyKind::Plain)
        .filter(|v| !v.is_empty())
        .or_else(|| attr_if(dom, id, &["abbr"], "title"))
        .or_else(|| attr_if(dom, id, &["data", "input"], "value"))
        .or_else(|| attr_if(dom, id, &["img", "area"], "alt"))
        .unwrap_or_else(|| trimmed_text(dom, id))
}

fn url_value(dom: &ArenaDom, id: ArenaNodeId) -> String {
    attr_if(dom, id, &["a", "area"], "href")
        .or_else(|| attr_if(dom, id, &["img", "audio", "video", "source"], "src"))
        .or_else(|| attr_if(dom, id, &["object"], "data"))
        .or_else(|| value_class_pattern(dom, id, PropertyKind::Url))
        .or_else(|| attr_if(dom, id, &["abbr"], "title"))
        .or_else(|| attr_if(dom, id, &["data", "input"], "value"))
        .unwrap_or_else(|| trimmed_text(dom, id))
}

fn datetime_value(dom: &ArenaDom, id: ArenaNodeId) -> String {
    value_class_pattern(dom, id, PropertyKind::DateTime)
        .or_else(|| attr_if(dom, id, &["time", "ins", "del"], "datetime"))
        .or_else(|| attr_if(dom, id, &["abbr"], "title"))
        .or_else(|| attr_if(dom, id, &["data", "input"], "value"))
        .unwrap_or_else(|| trimmed_text(dom, id))
}

/// The attribute's value when `id` is one of `tags` and the attribute exists.
pub(crate) fn attr_if(dom: &ArenaDom, id: ArenaNodeId, tags: &[&str], attr: &str) -> Option<String> {
    if !dom.is_tag(id, tags) {
        return None;
    }
    dom.get_attr(id, attr).map(str::to_string)
}

/// A fragment found by the value-class-pattern and where it came from.
struct Fragment {
    text: String,
    block: bool,
}

/// Run the value-class-pattern over the descendants of `id`.
///
/// Collects elements classed `value` or `value-title`, without descending
/// into them or into nested items. Returns `None` when there are none.
///
/// Only called on elements whose subtree the walker has already visited,
/// so recursion here is bounded by the configured depth limit.
pub fn value_class_pattern(dom: &ArenaDom, id: ArenaNodeId, kind: PropertyKind) -> Option<String> {
    let mut fragments = Vec::new();
    collect_fragments(dom, id, kind, &mut fragments);
    if fragments.is_empty() {
        return None;
    }

    let mut out = String::new();
    let mut prev_block = false;
    for fragment in fragments {
        let needs_space = !out.is_empty()
            && !out.ends_with(char::is_whitespace)
            && !fragment.text.starts_with(char::is_whitespace)
            && (prev_block || fragment.block);
        if needs_space {
            out.push(' ');
        }
        out.push_str(&fragment.text);
        prev_block = fragment.block;
    }
    Some(out.trim().to_string())
}

fn collect_fragments(dom: &ArenaDom, parent: ArenaNodeId, kind: PropertyKind, out: &mut Vec<Fragment>) {
    for child in dom.element_children(parent) {
        let classes = dom.element_classes(child);
        if classes.iter().any(|c| is_root_class(c)) {
            continue;
        }

        let block = dom.element_name(child).is_some_and(|n| is_block_level(n));
        if classes.iter().any(|c| c == "value-title") {
            if let Some(title) = dom.get_attr(child, "title") {
                out.push(Fragment {
                    text: title.to_string(),
                    block,
                });
            }
        } else if classes.iter().any(|c| c == "value") {
            out.push(Fragment {
                text: value_element_text(dom, child, kind),
                block,
            });
        } else {
            collect_fragments(dom, child, kind, out);
        }
    }
}

/// The contribution of one `.value` element.
fn value_element_text(dom: &ArenaDom, id: ArenaNodeId, kind: PropertyKind) -> String {
    let datetime = if kind == PropertyKind::DateTime {
        attr_if(dom, id, &["time", "ins", "del"], "datetime")
    } else {
        None
    };

    datetime
        .or_else(|| attr_if(dom, id, &["img", "area"], "alt"))
        .or_else(|| attr_if(dom, id, &["data"], "value"))
        .or_else(|| attr_if(dom, id, &["abbr"], "title"))
        .unwrap_or_else(|| text_of(dom, id))
}
