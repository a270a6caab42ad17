// crates/doctree/src/traverse.rs

use crate::node::Node;

/// Pre-order, left-to-right iterator over a node and its descendants.
pub struct Traverse<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Traverse<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Traverse<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the leftmost child is popped first.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{Node, NodeKind};

    fn label(node: &Node) -> String {
        match node.kind {
            NodeKind::Text => node.astext(),
            kind => kind.tagname().to_string(),
        }
    }

    #[test]
    fn test_preorder_visits_parent_before_children_left_to_right() {
        let tree = Node::document()
            .with_child(
                Node::new(NodeKind::Section)
                    .with_child(Node::text("a"))
                    .with_child(Node::new(NodeKind::Paragraph).with_child(Node::text("b"))),
            )
            .with_child(Node::text("c"));

        let order: Vec<String> = tree.traverse().map(label).collect();
        assert_eq!(order, vec!["document", "section", "a", "paragraph", "b", "c"]);
    }

    #[test]
    fn test_descendants_skip_root() {
        let tree = Node::document().with_child(Node::text("only"));
        let order: Vec<String> = tree.descendants().map(label).collect();
        assert_eq!(order, vec!["only"]);
    }

    #[test]
    fn test_descendants_of_leaf_is_empty() {
        let leaf = Node::text("leaf");
        assert_eq!(leaf.descendants().count(), 0);
    }
}
