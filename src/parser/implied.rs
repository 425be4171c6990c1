//! Implied `name`, `photo` and `url` for items that do not state them.

use crate::dom::{ArenaDom, ArenaNodeId, text_of};
use crate::model::{Item, PropertyValue};

use super::classify::{has_property_class, has_root_class};
use super::urls::BaseUrl;
use super::value::attr_if;

/// Fill in implied properties on `item`, whose root element is `id`.
///
/// Runs after the item's subtree has been walked, so explicit properties
/// always take precedence. An implied value that comes out empty leaves the
/// property absent.
pub fn apply_implied(dom: &ArenaDom, id: ArenaNodeId, item: &mut Item, base: &BaseUrl) {
    if !item.has_property("name")
        && let Some(name) = implied_name(dom, id)
    {
        item.push_property("name", PropertyValue::Text(name));
    }
    if !item.has_property("photo")
        && let Some(photo) = implied_photo(dom, id, base)
    {
        item.push_property("photo", PropertyValue::Text(photo));
    }
    if !item.has_property("url")
        && let Some(url) = implied_url(dom, id, base)
    {
        item.push_property("url", PropertyValue::Text(url));
    }
}

/// The only element child of `id`, if it has exactly one and that child is
/// neither a property nor an item of its own.
fn sole_plain_child(dom: &ArenaDom, id: ArenaNodeId) -> Option<ArenaNodeId> {
    let mut children = dom.element_children(id);
    let child = children.next()?;
    if children.next().is_some() {
        return None;
    }
    let classes = dom.element_classes(child);
    if has_property_class(classes) || has_root_class(classes) {
        return None;
    }
    Some(child)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

pub fn implied_name(dom: &ArenaDom, id: ArenaNodeId) -> Option<String> {
    if dom.is_tag(id, &["img", "area"]) {
        return attr_if(dom, id, &["img", "area"], "alt").and_then(non_empty);
    }

    let from_child = sole_plain_child(dom, id).and_then(|child| {
        attr_if(dom, child, &["img", "area"], "alt")
            .or_else(|| attr_if(dom, child, &["abbr"], "title"))
            .or_else(|| dom.is_tag(child, &["a"]).then(|| text_of(dom, child)))
    });

    from_child
        .and_then(non_empty)
        .or_else(|| non_empty(text_of(dom, id)))
}

/// Where a media element keeps the URL of its picture.
fn photo_source(dom: &ArenaDom, id: ArenaNodeId) -> Option<String> {
    attr_if(dom, id, &["img"], "src")
        .or_else(|| attr_if(dom, id, &["video"], "poster"))
        .or_else(|| attr_if(dom, id, &["object"], "data"))
}

pub fn implied_photo(dom: &ArenaDom, id: ArenaNodeId, base: &BaseUrl) -> Option<String> {
    photo_source(dom, id)
        .or_else(|| sole_plain_child(dom, id).and_then(|child| photo_source(dom, child)))
        .and_then(non_empty)
        .map(|src| base.resolve(&src))
}

pub fn implied_url(dom: &ArenaDom, id: ArenaNodeId, base: &BaseUrl) -> Option<String> {
    attr_if(dom, id, &["a", "area"], "href")
        .or_else(|| {
            sole_plain_child(dom, id).and_then(|child| attr_if(dom, child, &["a", "area"], "href"))
        })
        .and_then(non_empty)
        .map(|href| base.resolve(&href))
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::dom::parse_html;

    fn first_with_class(dom: &ArenaDom, class: &str) -> ArenaNodeId {
        dom.find(|n| match &n.data {
            crate::dom::ArenaNodeData::Element { classes, .. } => classes.iter().any(|c| c == class),
            _ => false,
        })
        .expect("element with class")
    }

    fn implied(html: &str) -> Item {
        let dom = parse_html(html);
        let id = first_with_class(&dom, "h-card");
        let mut item = Item::new(["h-card"]);
        let base = BaseUrl::new(Some(Url::parse("https://example.com/").unwrap()));
        apply_implied(&dom, id, &mut item, &base);
        item
    }

    #[test]
    fn test_name_from_text() {
        let item = implied(r#"<p class="h-card">  Amy Smith  </p>"#);
        assert_eq!(item.texts("name").collect::<Vec<_>>(), vec!["Amy Smith"]);
        assert!(!item.has_property("photo"));
        assert!(!item.has_property("url"));
    }

    #[test]
    fn test_img_root() {
        let item = implied(r#"<img class="h-card" alt="Amy" src="/amy.png">"#);
        assert_eq!(item.texts("name").next(), Some("Amy"));
        assert_eq!(item.texts("photo").next(), Some("https://example.com/amy.png"));
    }

    #[test]
    fn test_anchor_root() {
        let item = implied(r#"<a class="h-card" href="/amy">Amy</a>"#);
        assert_eq!(item.texts("name").next(), Some("Amy"));
        assert_eq!(item.texts("url").next(), Some("https://example.com/amy"));
    }

    #[test]
    fn test_sole_child_sources() {
        let item = implied(r#"<div class="h-card"><abbr title="Amy Smith">AS</abbr></div>"#);
        assert_eq!(item.texts("name").next(), Some("Amy Smith"));

        let item = implied(r#"<div class="h-card"><img src="a.png" alt="Amy"></div>"#);
        assert_eq!(item.texts("name").next(), Some("Amy"));
        assert_eq!(item.texts("photo").next(), Some("https://example.com/a.png"));

        let item = implied(r#"<div class="h-card"><a href="/amy">Amy</a></div>"#);
        assert_eq!(item.texts("url").next(), Some("https://example.com/amy"));
    }

    #[test]
    fn test_video_poster_and_object_data() {
        let item = implied(r#"<div class="h-card"><video poster="/p.jpg"></video></div>"#);
        assert_eq!(item.texts("photo").next(), Some("https://example.com/p.jpg"));

        let item = implied(r#"<object class="h-card" data="/o.png"></object>"#);
        assert_eq!(item.texts("photo").next(), Some("https://example.com/o.png"));
    }

    #[test]
    fn test_marked_child_is_not_used() {
        let item = implied(r#"<div class="h-card"><a class="u-uid" href="/amy">Amy</a></div>"#);
        assert!(!item.has_property("url"));
        // name still falls back to the root's own text
        assert_eq!(item.texts("name").next(), Some("Amy"));
    }

    #[test]
    fn test_multiple_children_disable_child_rules() {
        let item = implied(r#"<div class="h-card"><img src="a.png" alt="A"><img src="b.png" alt="B"></div>"#);
        assert!(!item.has_property("photo"));
        assert!(!item.has_property("name"));
    }

    #[test]
    fn test_explicit_properties_win() {
        let dom = parse_html(r#"<a class="h-card" href="/implied">Implied</a>"#);
        let id = first_with_class(&dom, "h-card");
        let mut item = Item::new(["h-card"]);
        item.push_property("name", "Explicit".into());
        item.push_property("url", "/explicit".into());
        apply_implied(&dom, id, &mut item, &BaseUrl::default());

        assert_eq!(item.texts("name").collect::<Vec<_>>(), vec!["Explicit"]);
        assert_eq!(item.texts("url").collect::<Vec<_>>(), vec!["/explicit"]);
    }

    #[test]
    fn test_empty_alt_leaves_name_absent() {
        let item = implied(r#"<img class="h-card" alt="" src="a.png">"#);
        assert!(!item.has_property("name"));
    }
}
