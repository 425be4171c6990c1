//! Document-level relation links.

use crate::dom::{ArenaDom, ArenaNodeId, trimmed_text};
use crate::model::{Alternate, Document, RelUrl};

use super::urls::BaseUrl;

const LINK_TAGS: &[&str] = &["a", "link", "area"];

/// Record the relation link at `id`, if it is one.
///
/// Links with `alternate` among their tokens go to `doc.alternates` only;
/// every other link feeds `doc.rels` and `doc.rel_urls`. Returns whether
/// anything was recorded.
pub fn collect_rel(dom: &ArenaDom, id: ArenaNodeId, base: &BaseUrl, doc: &mut Document) -> bool {
    if !dom.is_tag(id, LINK_TAGS) {
        return false;
    }
    let (Some(rel), Some(href)) = (dom.get_attr(id, "rel"), dom.get_attr(id, "href")) else {
        return false;
    };

    let tokens: Vec<&str> = rel.split_ascii_whitespace().collect();
    if tokens.is_empty() {
        return false;
    }

    let url = base.resolve(href);
    let attr = |name: &str| dom.get_attr(id, name).unwrap_or_default().to_string();

    if tokens.contains(&"alternate") {
        let rel = tokens
            .iter()
            .copied()
            .filter(|t| *t != "alternate")
            .collect::<Vec<_>>()
            .join(" ");
        tracing::trace!(%url, %rel, "alternate link");
        doc.alternates.push(Alternate {
            url,
            rel,
            media: attr("media"),
            hreflang: attr("hreflang"),
            media_type: attr("type"),
        });
        return true;
    }

    tracing::trace!(%url, rel, "relation link");
    for token in &tokens {
        doc.rels
            .entry((*token).to_string())
            .or_default()
            .push(url.clone());
    }
    doc.rel_urls.insert(
        url,
        RelUrl {
            rels: tokens.iter().map(|t| (*t).to_string()).collect(),
            text: trimmed_text(dom, id),
            media: attr("media"),
            hreflang: attr("hreflang"),
            media_type: attr("type"),
        },
    );
    true
}
