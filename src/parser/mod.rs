//! Microformats2 extraction.
//!
//! A [`Parser`] walks an [`ArenaDom`] once, depth-first, and builds a
//! [`Document`]. The walk keeps all of its state in a per-call context, so
//! one parser can be shared across threads and documents.

mod classify;
mod implied;
mod rels;
mod urls;
mod value;

pub use classify::{Classes, PropertyClass, PropertyKind, classify, is_root_class, property_class};
pub use implied::{apply_implied, implied_name, implied_photo, implied_url};
pub use rels::collect_rel;
pub use urls::{BaseUrl, resolve};
pub use value::{ParsedValue, parse_property};

use url::Url;

use crate::dom::{ArenaDom, ArenaNodeId};
use crate::error::{Error, Result};
use crate::model::{Document, EmbeddedHtml, Item, PropertyValue};
use crate::options::ParseOptions;

/// Extracts microformats2 items and relation links from parsed HTML.
///
/// ```
/// use mf2::{ParseOptions, Parser, parse_html};
///
/// let dom = parse_html(r#"<a class="h-card" href="/amy">Amy</a>"#);
/// let parser = Parser::new(ParseOptions::new().with_base_url("https://example.com/"))?;
/// let doc = parser.parse(&dom)?;
///
/// let card = &doc.items[0];
/// assert_eq!(card.types, ["h-card"]);
/// assert_eq!(card.texts("url").next(), Some("https://example.com/amy"));
/// # Ok::<(), mf2::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    options: ParseOptions,
    base: Option<Url>,
}

impl Parser {
    /// Create a parser, validating `options.base_url` up front.
    pub fn new(options: ParseOptions) -> Result<Self> {
        let base = options
            .base_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|source| Error::InvalidBaseUrl {
                    url: raw.to_string(),
                    source,
                })
            })
            .transpose()?;
        Ok(Self { options, base })
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse the whole document.
    pub fn parse(&self, dom: &ArenaDom) -> Result<Document> {
        self.parse_node(dom, dom.document())
    }

    /// Parse the subtree rooted at `root`.
    ///
    /// Items found directly under `root` become top-level items of the
    /// result even if `root` sits inside an item in the full tree.
    pub fn parse_node(&self, dom: &ArenaDom, root: ArenaNodeId) -> Result<Document> {
        if dom.get(root).is_none() {
            return Err(Error::MissingRoot(root.0));
        }

        let mut walker = Walker {
            dom,
            options: &self.options,
            base: BaseUrl::new(self.base.clone()),
            visited: 0,
            doc: Document::default(),
        };
        if let Err(err) = walker.walk(root, 0, None) {
            tracing::warn!(%err, visited = walker.visited, "microformats parse aborted");
            return Err(err);
        }

        let doc = walker.doc;
        tracing::debug!(
            nodes = walker.visited,
            items = doc.items.len(),
            rels = doc.rels.len(),
            alternates = doc.alternates.len(),
            "parsed microformats"
        );
        Ok(doc)
    }
}

/// Traversal state for a single parse.
struct Walker<'a> {
    dom: &'a ArenaDom,
    options: &'a ParseOptions,
    base: BaseUrl,
    /// Nodes visited plus items copied into compound values, checked
    /// against `max_nodes`.
    visited: usize,
    doc: Document,
}

impl Walker<'_> {
    /// Visit `id` and its subtree.
    ///
    /// `parent` is the nearest enclosing item. Values of property classes on
    /// `id` are attached to it once the subtree is done, resolved against the
    /// base that was in effect when `id` was entered.
    fn walk(&mut self, id: ArenaNodeId, depth: usize, mut parent: Option<&mut Item>) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(Error::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        self.charge(1)?;

        let dom = self.dom;
        let classes = classify(dom.element_classes(id));
        let mut own = classes.is_root().then(|| self.new_item(id, &classes.roots));

        // A <base> inside this subtree must not affect this element's own URLs.
        let entry_base = (!classes.is_empty() && !self.base.is_settled()).then(|| self.base.clone());

        self.base.observe(dom, id);
        if self.options.collect_rels {
            collect_rel(dom, id, &self.base, &mut self.doc);
        }

        for child in dom.children(id) {
            let context = match own.as_mut() {
                Some(item) => Some(item),
                None => parent.as_deref_mut(),
            };
            self.walk(child, depth + 1, context)?;
        }

        // Every property class past the first attaches another full copy of
        // the item, nested compound values included.
        if let Some(item) = own.as_ref()
            && parent.is_some()
            && classes.properties.len() > 1
        {
            let copies = classes.properties.len() - 1;
            self.charge(copies.saturating_mul(item.item_count()))?;
        }

        let base = entry_base.as_ref().unwrap_or(&self.base);

        if self.options.implied_properties
            && let Some(item) = own.as_mut()
        {
            apply_implied(dom, id, item, base);
        }

        match (own, parent) {
            (Some(item), Some(parent)) => {
                let Some((last, rest)) = classes.properties.split_last() else {
                    parent.children.push(item);
                    return Ok(());
                };
                for property in rest {
                    let nested = compound_value(dom, id, property, item.clone(), base);
                    parent.push_property(property.name, nested);
                }
                let nested = compound_value(dom, id, last, item, base);
                parent.push_property(last.name, nested);
            }
            (Some(item), None) => self.doc.items.push(item),
            (None, Some(parent)) => {
                for property in &classes.properties {
                    if let Some(value) = scalar_value(dom, id, property, base) {
                        parent.push_property(property.name, value);
                    }
                }
            }
            (None, None) => {}
        }
        Ok(())
    }

    /// Spend `amount` of the `max_nodes` budget.
    fn charge(&mut self, amount: usize) -> Result<()> {
        self.visited = self.visited.saturating_add(amount);
        if self.visited > self.options.max_nodes {
            return Err(Error::NodeLimitExceeded {
                limit: self.options.max_nodes,
            });
        }
        Ok(())
    }

    fn new_item(&self, id: ArenaNodeId, roots: &[&str]) -> Item {
        let mut item = Item::new(roots.iter().copied());
        if self.dom.is_tag(id, &["area"]) {
            item.shape = self.dom.get_attr(id, "shape").map(str::to_string);
            item.coords = self.dom.get_attr(id, "coords").map(str::to_string);
        }
        tracing::trace!(types = ?item.types, node = id.0, "item root");
        item
    }
}

/// `item` as the value of `property`, carrying the property's parsed value.
fn compound_value(
    dom: &ArenaDom,
    id: ArenaNodeId,
    property: &PropertyClass<'_>,
    mut item: Item,
    base: &BaseUrl,
) -> PropertyValue {
    let parsed = parse_property(dom, id, property.kind, base);
    item.value = Some(parsed.value);
    item.html = parsed.html;
    PropertyValue::Item(Box::new(item))
}

/// The value a plain property element contributes, if any.
fn scalar_value(
    dom: &ArenaDom,
    id: ArenaNodeId,
    property: &PropertyClass<'_>,
    base: &BaseUrl,
) -> Option<PropertyValue> {
    let ParsedValue { value, html } = parse_property(dom, id, property.kind, base);
    match html {
        Some(html) if !value.is_empty() || !html.is_empty() => {
            Some(PropertyValue::Embedded(EmbeddedHtml { value, html }))
        }
        Some(_) => None,
        None if value.is_empty() => None,
        None => Some(PropertyValue::Text(value)),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::dom::parse_html;

    fn parse(html: &str) -> Document {
        let options = ParseOptions::new().with_base_url("https://example.com/");
        Parser::new(options).unwrap().parse(&parse_html(html)).unwrap()
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Parser::new(ParseOptions::new().with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_missing_root() {
        let dom = parse_html("<p>x</p>");
        let parser = Parser::new(ParseOptions::default()).unwrap();
        let err = parser.parse_node(&dom, ArenaNodeId(9999)).unwrap_err();
        assert!(matches!(err, Error::MissingRoot(9999)));
    }

    #[test]
    fn test_plain_and_url_properties() {
        let doc = parse(r#"<div class="h-card"><a class="p-name u-url" href="/x">Amy</a></div>"#);
        assert_eq!(doc.items.len(), 1);
        let card = &doc.items[0];
        assert_eq!(card.texts("name").collect::<Vec<_>>(), ["Amy"]);
        assert_eq!(card.texts("url").collect::<Vec<_>>(), ["https://example.com/x"]);
    }

    #[test]
    fn test_compound_property() {
        let doc = parse(
            r#"<div class="h-card"><div class="p-org h-card"><span class="p-name">Co</span></div></div>"#,
        );
        let card = &doc.items[0];
        let org = card.property("org").unwrap();
        assert_eq!(org.len(), 1);
        let nested = org[0].as_item().expect("nested item");
        assert_eq!(nested.types, ["h-card"]);
        assert_eq!(nested.texts("name").collect::<Vec<_>>(), ["Co"]);
        assert_eq!(nested.value.as_deref(), Some("Co"));
        assert!(card.children.is_empty());
    }

    #[test]
    fn test_child_items() {
        let doc = parse(
            r#"<div class="h-feed"><p class="p-name">Feed</p>
                 <article class="h-entry"><p class="p-name">One</p></article>
                 <article class="h-entry"><p class="p-name">Two</p></article></div>"#,
        );
        let feed = &doc.items[0];
        let names: Vec<_> = feed
            .children
            .iter()
            .flat_map(|c| c.texts("name"))
            .collect();
        assert_eq!(names, ["One", "Two"]);
        assert_eq!(feed.texts("name").collect::<Vec<_>>(), ["Feed"]);
    }

    #[test]
    fn test_property_outside_item_is_dropped() {
        let doc = parse(r#"<p class="p-name">Orphan</p><div class="p-author h-card">Amy</div>"#);
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.items[0].value, None);
        assert_eq!(doc.items[0].texts("name").next(), Some("Amy"));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let doc = parse(r#"<div class="h-entry"><p class="p-summary"></p><div class="e-content"></div></div>"#);
        let entry = &doc.items[0];
        assert!(!entry.has_property("summary"));
        assert!(!entry.has_property("content"));
    }

    #[test]
    fn test_embedded_value() {
        let doc = parse(r#"<div class="h-entry"><div class="e-content"><b>Hi</b> there</div></div>"#);
        let content = doc.items[0].property("content").unwrap()[0]
            .as_embedded()
            .unwrap();
        assert_eq!(content.value, "Hi there");
        assert_eq!(content.html, "<b>Hi</b> there");
    }

    #[test]
    fn test_area_item() {
        let doc = parse(r#"<map><area class="h-card" shape="circle" coords="1,2,3" href="/a" alt="A"></map>"#);
        let card = &doc.items[0];
        assert_eq!(card.shape.as_deref(), Some("circle"));
        assert_eq!(card.coords.as_deref(), Some("1,2,3"));
        assert_eq!(card.texts("name").next(), Some("A"));
    }

    #[test]
    fn test_options_disable_rels_and_implied() {
        let dom = parse_html(r#"<a rel="me" href="/me">me</a><p class="h-card">Amy</p>"#);
        let options = ParseOptions::new().with_rels(false).with_implied_properties(false);
        let doc = Parser::new(options).unwrap().parse(&dom).unwrap();
        assert!(doc.rels.is_empty());
        assert!(doc.items[0].properties.is_empty());
    }

    #[test]
    fn test_depth_limit() {
        let html = "<div>".repeat(50);
        let dom = parse_html(&html);
        let parser = Parser::new(ParseOptions::new().with_max_depth(10)).unwrap();
        let err = parser.parse(&dom).unwrap_err();
        assert!(matches!(err, Error::DepthExceeded { limit: 10 }));
    }

    #[test]
    fn test_node_limit() {
        let html = "<p>x</p>".repeat(100);
        let dom = parse_html(&html);
        let parser = Parser::new(ParseOptions::new().with_max_nodes(20)).unwrap();
        let err = parser.parse(&dom).unwrap_err();
        assert!(matches!(err, Error::NodeLimitExceeded { limit: 20 }));
    }

    fn two_property_chain(depth: usize) -> String {
        format!("{}x{}", r#"<div class="h-x p-a p-b">"#.repeat(depth), "</div>".repeat(depth))
    }

    #[test]
    fn test_compound_copies_count_against_node_limit() {
        // Each level doubles the items below it: 2^16 - 1 items from 16 divs.
        let dom = parse_html(&two_property_chain(16));
        let parser = Parser::new(ParseOptions::new().with_max_nodes(5_000)).unwrap();
        let err = parser.parse(&dom).unwrap_err();
        assert!(matches!(err, Error::NodeLimitExceeded { limit: 5_000 }));
    }

    #[test]
    fn test_shallow_compound_chain_fits_budget() {
        let doc = parse(&two_property_chain(4));
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.all_items().len(), 15);
    }

    #[test]
    fn test_base_inside_item_is_not_retroactive() {
        let doc = parse(
            r#"<a class="h-card" href="/x"><span class="u-uid">/id</span><base href="https://other.example/"></a>
               <a class="h-card" href="/y">later</a>"#,
        );
        assert_eq!(doc.items[0].texts("url").next(), Some("https://example.com/x"));
        assert_eq!(doc.items[0].texts("uid").next(), Some("https://example.com/id"));
        assert_eq!(doc.items[1].texts("url").next(), Some("https://other.example/y"));
    }

    #[test]
    fn test_parse_node_subtree() {
        let dom = parse_html(r#"<div class="h-feed"><section id="s"><p class="h-entry">Post</p></section></div>"#);
        let section = dom.find_by_tag("section").unwrap();
        let parser = Parser::new(ParseOptions::default()).unwrap();
        let doc = parser.parse_node(&dom, section).unwrap();
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.items[0].types, ["h-entry"]);
    }

    fn fragment() -> impl Strategy<Value = String> {
        let class = prop::sample::select(vec![
            "h-card", "h-entry", "p-name", "u-url", "e-content", "dt-published", "h-", "p-", "value", "x",
        ]);
        let tag = prop::sample::select(vec!["div", "span", "a", "img", "abbr", "time"]);
        let leaf = (tag.clone(), prop::collection::vec(class.clone(), 0..3), "[a-z ]{0,8}").prop_map(
            |(tag, classes, text)| format!(r#"<{tag} class="{}" href="/{text}">{text}</{tag}>"#, classes.join(" ")),
        );
        leaf.prop_recursive(4, 32, 4, move |inner| {
            (tag.clone(), prop::collection::vec(class.clone(), 0..3), prop::collection::vec(inner, 0..4))
                .prop_map(|(tag, classes, children)| {
                    format!(r#"<{tag} class="{}">{}</{tag}>"#, classes.join(" "), children.concat())
                })
        })
    }

    proptest! {
        #[test]
        fn prop_items_have_types_and_named_properties(html in fragment()) {
            let doc = parse(&html);
            for item in doc.all_items() {
                prop_assert!(!item.types.is_empty());
                prop_assert!(item.properties.keys().all(|k| !k.is_empty()));
            }
        }

        #[test]
        fn prop_parsing_is_deterministic(html in fragment()) {
            prop_assert_eq!(parse(&html), parse(&html));
        }

        #[test]
        fn prop_rels_follow_document_order(hrefs in prop::collection::vec("[a-z]{1,6}", 0..8)) {
            let html: String = hrefs
                .iter()
                .map(|h| format!(r#"<a rel="tag" href="https://t.example/{h}">{h}</a>"#))
                .collect();
            let doc = parse(&html);
            let expected: Vec<String> = hrefs.iter().map(|h| format!("https://t.example/{h}")).collect();
            prop_assert_eq!(doc.rel("tag"), expected.as_slice());
        }
    }
}
