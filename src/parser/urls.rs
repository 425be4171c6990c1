//! Relative URL resolution against the document base.

use url::Url;

use crate::dom::{ArenaDom, ArenaNodeId};

/// The base URL in effect at some point of the traversal.
///
/// Starts from the caller-supplied URL. The first `<base href>` in document
/// order replaces it; later `<base>` elements are ignored.
#[derive(Debug, Clone, Default)]
pub struct BaseUrl {
    current: Option<Url>,
    declared: bool,
}

impl BaseUrl {
    pub fn new(initial: Option<Url>) -> Self {
        Self {
            current: initial,
            declared: false,
        }
    }

    pub fn get(&self) -> Option<&Url> {
        self.current.as_ref()
    }

    /// Whether a `<base>` element has been seen, after which the base no
    /// longer changes.
    pub fn is_settled(&self) -> bool {
        self.declared
    }

    /// Adopt the `href` of a `<base>` element if none has been seen yet.
    pub fn observe(&mut self, dom: &ArenaDom, id: ArenaNodeId) {
        if self.declared || !dom.is_tag(id, &["base"]) {
            return;
        }
        let Some(href) = dom.get_attr(id, "href").filter(|h| !h.trim().is_empty()) else {
            return;
        };
        self.declared = true;

        let parsed = match &self.current {
            Some(base) => base.join(href.trim()),
            None => Url::parse(href.trim()),
        };
        match parsed {
            Ok(url) => {
                tracing::trace!(base = %url, "document base declared");
                self.current = Some(url);
            }
            Err(err) => {
                tracing::debug!(href, %err, "ignoring unresolvable <base href>");
            }
        }
    }

    /// Resolve `raw` against the current base.
    pub fn resolve(&self, raw: &str) -> String {
        resolve(self.get(), raw)
    }
}

/// Resolve `raw` against `base`.
///
/// Empty values, a missing base and unparseable references all pass `raw`
/// through untouched.
pub fn resolve(base: Option<&Url>, raw: &str) -> String {
    let Some(base) = base else {
        return raw.to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return raw.to_string();
    }
    match base.join(trimmed) {
        Ok(url) => url.into(),
        Err(err) => {
            tracing::debug!(url = raw, %err, "leaving unresolvable url as-is");
            raw.to_string()
        }
    }
}
