// crates/collect_literal_blocks/src/lib.rs

use doctree::{Node, NodeKind};

/// Returns the plain text of every literal block below `section`, in
/// document order.
///
/// Only descendants are inspected; the kind of `section` itself does not
/// matter. An empty vector means the section holds no literal blocks.
pub fn collect_literal_blocks(section: &Node) -> Vec<String> {
    let blocks: Vec<String> = section
        .descendants()
        .filter(|node| node.kind == NodeKind::LiteralBlock)
        .map(Node::astext)
        .collect();
    log::debug!("Collected {} literal block(s)", blocks.len());
    blocks
}
