//! Element categories used when joining text fragments.

/// Whether an element starts a new block when rendered.
///
/// Unknown elements default to inline, matching how browsers render custom
/// elements without a stylesheet.
pub fn is_block_level(local_name: &str) -> bool {
    match local_name {
        // Sectioning and grouping
        "div" | "section" | "article" | "nav" | "header" | "footer" | "main" | "address"
        | "aside" | "details" | "summary" | "hgroup" | "dialog" | "search" => true,

        "p" | "pre" | "blockquote" | "hr" | "figure" | "figcaption" | "caption" | "center"
        | "fieldset" | "form" | "legend" => true,

        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => true,

        // Lists
        "ul" | "ol" | "li" | "menu" | "dl" | "dt" | "dd" => true,

        // Tables
        "table" | "thead" | "tbody" | "tfoot" | "tr" | "td" | "th" => true,

        _ => false,
    }
}
