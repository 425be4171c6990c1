//! Text extraction over the arena DOM.

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};

/// Elements whose contents never count as visible text.
const SKIPPED: &[&str] = &["script", "style", "template"];

/// Concatenate the text of every descendant text node in document order.
///
/// `script`, `style` and `template` subtrees contribute nothing. Uses an
/// explicit stack, so arbitrarily deep markup cannot overflow the call stack.
pub fn text_of(dom: &ArenaDom, id: ArenaNodeId) -> String {
    let mut out = String::new();
    let mut stack = vec![id];

    while let Some(current) = stack.pop() {
        let Some(node) = dom.get(current) else {
            continue;
        };
        match &node.data {
            ArenaNodeData::Text(text) => out.push_str(text),
            ArenaNodeData::Element { name, .. } if SKIPPED.contains(&name.local.as_ref()) => {}
            ArenaNodeData::Element { .. } | ArenaNodeData::Document => {
                let mut children: Vec<_> = dom.children(current).collect();
                children.reverse();
                stack.extend(children);
            }
            ArenaNodeData::Comment(_) | ArenaNodeData::Doctype { .. } => {}
        }
    }

    out
}

/// [`text_of`] with leading and trailing whitespace removed.
pub fn trimmed_text(dom: &ArenaDom, id: ArenaNodeId) -> String {
    text_of(dom, id).trim().to_string()
}
