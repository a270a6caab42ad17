// crates/doctree/src/node.rs

use crate::traverse::Traverse;

/// Node kinds produced by the parsers in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Section,
    Title,
    /// Promoted title of the lone section under the document title.
    Subtitle,
    Paragraph,
    LiteralBlock,
    DoctestBlock,
    BlockQuote,
    BulletList,
    EnumeratedList,
    ListItem,
    DefinitionList,
    DefinitionListItem,
    Term,
    Definition,
    Comment,
    Target,
    Footnote,
    FieldList,
    Field,
    FieldName,
    FieldBody,
    LineBlock,
    Line,
    Table,
    Row,
    Entry,
    Transition,
    /// Body directive container (admonitions, topics, unknown directives).
    Directive,
    Text,
}

impl NodeKind {
    /// Returns the docutils tag name for this kind, e.g. `"literal_block"`.
    pub fn tagname(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Section => "section",
            NodeKind::Title => "title",
            NodeKind::Subtitle => "subtitle",
            NodeKind::Paragraph => "paragraph",
            NodeKind::LiteralBlock => "literal_block",
            NodeKind::DoctestBlock => "doctest_block",
            NodeKind::BlockQuote => "block_quote",
            NodeKind::BulletList => "bullet_list",
            NodeKind::EnumeratedList => "enumerated_list",
            NodeKind::ListItem => "list_item",
            NodeKind::DefinitionList => "definition_list",
            NodeKind::DefinitionListItem => "definition_list_item",
            NodeKind::Term => "term",
            NodeKind::Definition => "definition",
            NodeKind::Comment => "comment",
            NodeKind::Target => "target",
            NodeKind::Footnote => "footnote",
            NodeKind::FieldList => "field_list",
            NodeKind::Field => "field",
            NodeKind::FieldName => "field_name",
            NodeKind::FieldBody => "field_body",
            NodeKind::LineBlock => "line_block",
            NodeKind::Line => "line",
            NodeKind::Table => "table",
            NodeKind::Row => "row",
            NodeKind::Entry => "entry",
            NodeKind::Transition => "transition",
            NodeKind::Directive => "directive",
            NodeKind::Text => "#text",
        }
    }

    /// Text elements hold inline content; their children are concatenated
    /// without separators by [`Node::astext`].
    fn is_text_element(self) -> bool {
        matches!(
            self,
            NodeKind::Title
                | NodeKind::Subtitle
                | NodeKind::Paragraph
                | NodeKind::LiteralBlock
                | NodeKind::DoctestBlock
                | NodeKind::Comment
                | NodeKind::Term
                | NodeKind::FieldName
                | NodeKind::Line
        )
    }
}

/// Attribute set carried by every node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub ids: Vec<String>,
    pub names: Vec<String>,
    pub classes: Vec<String>,
    /// Language argument of a code directive, if any.
    pub language: Option<String>,
}

/// One node of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub attributes: Attributes,
    pub children: Vec<Node>,
    /// Only `Text` leaves carry a payload.
    pub text: Option<String>,
}

impl Node {
    /// Creates an element with no attributes and no children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: Attributes::default(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Creates a text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            attributes: Attributes::default(),
            children: Vec::new(),
            text: Some(content.into()),
        }
    }

    /// Creates a text element (paragraph, literal block, …) holding a
    /// single text leaf.
    pub fn text_element(kind: NodeKind, content: impl Into<String>) -> Self {
        Self::new(kind).with_child(Node::text(content))
    }

    /// Shorthand for an empty `Document` root.
    pub fn document() -> Self {
        Self::new(NodeKind::Document)
    }

    /// Builds a section with a title and a single id, mostly useful in tests.
    pub fn section(id: &str, title: &str) -> Self {
        Self::new(NodeKind::Section)
            .with_id(id)
            .with_child(Node::text_element(NodeKind::Title, title))
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I: IntoIterator<Item = Node>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.attributes.ids.push(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.names.push(name.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.attributes.classes.push(class.into());
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Docutils tag name of this node.
    pub fn tagname(&self) -> &'static str {
        self.kind.tagname()
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.attributes.ids.iter().any(|candidate| candidate == id)
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse::new(self)
    }

    /// Pre-order iterator over the descendants only.
    pub fn descendants(&self) -> Traverse<'_> {
        let mut iter = Traverse::new(self);
        iter.next();
        iter
    }

    /// First node in pre-order (self included) matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&Node>
    where
        P: FnMut(&Node) -> bool,
    {
        self.traverse().find(|node| predicate(node))
    }

    /// All nodes in pre-order (self included) matching `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&Node>
    where
        P: FnMut(&Node) -> bool,
    {
        self.traverse().filter(|node| predicate(node)).collect()
    }

    /// Plain-text content with all nested structure stripped.
    ///
    /// Text leaves return their payload; text elements concatenate their
    /// children; structural elements separate children with a blank line.
    pub fn astext(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        let separator = if self.kind.is_text_element() { "" } else { "\n\n" };
        self.children
            .iter()
            .map(Node::astext)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagname_matches_docutils_names() {
        assert_eq!(NodeKind::Section.tagname(), "section");
        assert_eq!(NodeKind::LiteralBlock.tagname(), "literal_block");
        assert_eq!(Node::text("x").tagname(), "#text");
    }

    #[test]
    fn test_astext_text_element_concatenates() {
        let para = Node::new(NodeKind::Paragraph)
            .with_child(Node::text("Hello, "))
            .with_child(Node::text("world"));
        assert_eq!(para.astext(), "Hello, world");
    }

    #[test]
    fn test_astext_structural_element_separates_with_blank_line() {
        let quote = Node::new(NodeKind::BlockQuote)
            .with_child(Node::text_element(NodeKind::Paragraph, "one"))
            .with_child(Node::text_element(NodeKind::Paragraph, "two"));
        assert_eq!(quote.astext(), "one\n\ntwo");
    }

    #[test]
    fn test_astext_preserves_literal_whitespace() {
        let block = Node::text_element(NodeKind::LiteralBlock, "def f():\n    return 1");
        assert_eq!(block.astext(), "def f():\n    return 1");
    }

    #[test]
    fn test_has_id() {
        let section = Node::section("usage", "Usage").with_id("detail");
        assert!(section.has_id("usage"));
        assert!(section.has_id("detail"));
        assert!(!section.has_id("other"));
    }

    #[test]
    fn test_find_and_filter_use_preorder() {
        let tree = Node::document()
            .with_child(
                Node::section("a", "A")
                    .with_child(Node::text_element(NodeKind::LiteralBlock, "first")),
            )
            .with_child(Node::text_element(NodeKind::LiteralBlock, "second"));

        let first = tree
            .find(|n| n.kind == NodeKind::LiteralBlock)
            .expect("literal block present");
        assert_eq!(first.astext(), "first");

        let all: Vec<String> = tree
            .filter(|n| n.kind == NodeKind::LiteralBlock)
            .into_iter()
            .map(Node::astext)
            .collect();
        assert_eq!(all, vec!["first", "second"]);
    }
}
