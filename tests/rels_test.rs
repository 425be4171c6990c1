//! Relation link tests: `rels`, `rel-urls` and `alternates`.

use mf2::{Alternate, ParseOptions, parse_html_str};

fn parse(html: &str, base: Option<&str>) -> mf2::Document {
    let mut options = ParseOptions::new();
    options.base_url = base.map(str::to_string);
    parse_html_str(html, &options).unwrap()
}

#[test]
fn test_tag_links_keep_order() {
    let doc = parse(r#"<a rel="tag" href="/a">a</a> <a rel="tag" href="/b">b</a>"#, None);
    assert_eq!(doc.rel("tag"), ["/a", "/b"]);
}

#[test]
fn test_duplicates_are_preserved() {
    let doc = parse(
        r#"<a rel="me" href="https://a.example/">A</a>
           <link rel="me" href="https://a.example/">
           <a rel="me" href="https://b.example/">B</a>"#,
        None,
    );
    assert_eq!(
        doc.rel("me"),
        ["https://a.example/", "https://a.example/", "https://b.example/"]
    );
    assert_eq!(doc.rel_urls.len(), 2);
}

#[test]
fn test_rel_urls_metadata_last_writer_wins() {
    let doc = parse(
        r#"<a rel="author" href="/amy" hreflang="en">Amy</a>
           <a rel="me nofollow" href="/amy" type="text/html">Amy again</a>"#,
        Some("https://example.com/"),
    );
    let meta = &doc.rel_urls["https://example.com/amy"];
    assert_eq!(meta.rels, ["me", "nofollow"]);
    assert_eq!(meta.text, "Amy again");
    assert_eq!(meta.media_type, "text/html");
    assert!(meta.hreflang.is_empty());
    assert_eq!(doc.rel("author"), ["https://example.com/amy"]);
}

#[test]
fn test_alternate_links() {
    let doc = parse(
        r#"<head>
             <link rel="alternate" type="application/rss+xml" href="/feed.xml">
             <link rel="home alternate" hreflang="fr" href="/fr/">
           </head>"#,
        Some("https://example.com/"),
    );
    assert!(doc.rels.is_empty());
    assert!(!doc.rel_urls.contains_key("https://example.com/feed.xml"));
    assert_eq!(
        doc.alternates,
        [
            Alternate {
                url: "https://example.com/feed.xml".to_string(),
                media_type: "application/rss+xml".to_string(),
                ..Default::default()
            },
            Alternate {
                url: "https://example.com/fr/".to_string(),
                rel: "home".to_string(),
                hreflang: "fr".to_string(),
                ..Default::default()
            },
        ]
    );
}

#[test]
fn test_base_applies_to_later_links_only() {
    let doc = parse(
        r#"<html><head>
             <link rel="icon" href="icon-before.png">
             <base href="https://cdn.example/">
             <base href="https://ignored.example/">
             <link rel="stylesheet" href="style.css">
           </head></html>"#,
        Some("https://example.com/"),
    );
    assert_eq!(doc.rel("icon"), ["https://example.com/icon-before.png"]);
    assert_eq!(doc.rel("stylesheet"), ["https://cdn.example/style.css"]);
}

#[test]
fn test_rels_inside_items_are_collected() {
    let doc = parse(
        r#"<div class="h-card"><a class="u-url" rel="me" href="https://amy.example/">Amy</a></div>"#,
        None,
    );
    assert_eq!(doc.rel("me"), ["https://amy.example/"]);
    assert_eq!(doc.items[0].texts("url").next(), Some("https://amy.example/"));
}

#[test]
fn test_rels_disabled() {
    let options = ParseOptions::new().with_rels(false);
    let doc = parse_html_str(
        r#"<a rel="me" href="/me">me</a><link rel="alternate" href="/feed">"#,
        &options,
    )
    .unwrap();
    assert!(doc.rels.is_empty());
    assert!(doc.rel_urls.is_empty());
    assert!(doc.alternates.is_empty());
}
