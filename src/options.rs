//! Parser configuration.

/// Default ceiling on element nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default ceiling on the number of nodes visited per document.
pub const DEFAULT_MAX_NODES: usize = 1_000_000;

/// Options controlling a parse.
///
/// ```
/// use mf2::ParseOptions;
///
/// let options = ParseOptions::new()
///     .with_base_url("https://example.com/blog/")
///     .with_max_depth(128);
/// assert_eq!(options.max_depth, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Base URL for resolving relative links, until a `<base href>` overrides it.
    pub base_url: Option<String>,
    /// Nesting deeper than this aborts the parse with `Error::DepthExceeded`.
    pub max_depth: usize,
    /// Visiting more nodes than this aborts with `Error::NodeLimitExceeded`.
    /// Items copied into compound values count against the same budget.
    pub max_nodes: usize,
    /// Collect `rels`, `rel-urls` and `alternates`.
    pub collect_rels: bool,
    /// Infer `name`, `photo` and `url` when an item lacks them.
    pub implied_properties: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
            collect_rels: true,
            implied_properties: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_rels(mut self, collect_rels: bool) -> Self {
        self.collect_rels = collect_rels;
        self
    }

    pub fn with_implied_properties(mut self, implied: bool) -> Self {
        self.implied_properties = implied;
        self
    }
}
