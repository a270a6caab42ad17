// crates/doctree_rst/src/document.rs

use doctree::{normalize_name, Attributes, Node, NodeKind};

use crate::adornment::Style;
use crate::body::Block;
use crate::error::{ParseError, ParseErrorKind};

/// Internal hyperlink target waiting for the element that follows it.
struct PendingTarget {
    id: String,
    name: String,
}

/// Moves pending target ids and names onto `node`.
fn attach_targets(node: &mut Node, pending: &mut Vec<PendingTarget>) {
    for target in pending.drain(..) {
        if !node.has_id(&target.id) {
            node.attributes.ids.push(target.id);
        }
        if !node.attributes.names.contains(&target.name) {
            node.attributes.names.push(target.name);
        }
    }
}

/// Targets with nothing left to attach to stay in the tree as `target` nodes.
fn flush_targets(container: &mut Node, pending: &mut Vec<PendingTarget>) {
    for target in pending.drain(..) {
        container.push(
            Node::new(NodeKind::Target)
                .with_id(target.id)
                .with_name(target.name),
        );
    }
}

/// Places a body node into `container`, resolving pending targets.
/// Comments never receive targets.
fn place(container: &mut Node, mut node: Node, pending: &mut Vec<PendingTarget>) {
    if node.kind != NodeKind::Comment {
        attach_targets(&mut node, pending);
    }
    container.push(node);
}

/// Assembles an indented body (no section titles) into nodes.
pub(crate) fn assemble_body(blocks: Vec<Block>) -> Vec<Node> {
    let mut container = Node::new(NodeKind::Document);
    let mut pending = Vec::new();
    for block in blocks {
        match block {
            Block::Target { id, name } => pending.push(PendingTarget { id, name }),
            Block::Node(node) => place(&mut container, node, &mut pending),
            // Titles are rejected while parsing indented bodies.
            Block::Title { .. } => {}
        }
    }
    flush_targets(&mut container, &mut pending);
    container.children
}

/// Builds the document tree, nesting sections by adornment style.
///
/// Styles get levels in the order they are first seen. A title may close any
/// number of open sections but may open at most one new level.
pub(crate) fn assemble_document(blocks: Vec<Block>) -> Result<Node, ParseError> {
    let mut styles: Vec<Style> = Vec::new();
    // stack[0] is the document; stack[n] is the open section at level n.
    let mut stack: Vec<Node> = vec![Node::document()];
    let mut pending = Vec::new();

    for block in blocks {
        match block {
            Block::Target { id, name } => pending.push(PendingTarget { id, name }),
            Block::Node(node) => {
                if let Some(container) = stack.last_mut() {
                    place(container, node, &mut pending);
                }
            }
            Block::Title {
                style,
                text,
                id,
                line,
            } => {
                let depth = stack.len() - 1;
                let level = match styles.iter().position(|known| *known == style) {
                    Some(idx) => idx + 1,
                    None if styles.len() == depth => {
                        styles.push(style);
                        styles.len()
                    }
                    None => 0,
                };
                if level == 0 || level > depth + 1 {
                    return Err(ParseError::new(
                        line,
                        ParseErrorKind::InconsistentTitleLevel { title: text },
                    ));
                }

                while stack.len() > level {
                    close_section(&mut stack);
                }

                let mut section = Node::new(NodeKind::Section)
                    .with_id(id)
                    .with_name(normalize_name(&text))
                    .with_child(Node::text_element(NodeKind::Title, text));
                attach_targets(&mut section, &mut pending);
                log::debug!("line {}: section level {} {:?}", line, level, section.attributes.ids);
                stack.push(section);
            }
        }
    }

    if let Some(container) = stack.last_mut() {
        flush_targets(container, &mut pending);
    }
    while stack.len() > 1 {
        close_section(&mut stack);
    }
    Ok(stack.pop().unwrap_or_else(Node::document))
}

fn close_section(stack: &mut Vec<Node>) {
    if let Some(section) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.push(section);
        }
    }
}

/// Comments, targets and titles may precede a promoted title.
fn is_prebibliographic(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::Comment | NodeKind::Target | NodeKind::Title | NodeKind::Subtitle
    )
}

/// Index of the section that can be promoted: the first child that is not
/// prebibliographic, when it is a section and the last child.
fn promotion_candidate(node: &Node) -> Option<usize> {
    let index = node.children.iter().position(|child| !is_prebibliographic(child))?;
    (index + 1 == node.children.len() && node.children[index].kind == NodeKind::Section)
        .then_some(index)
}

/// Turns a lone top-level section into the document title and, when that
/// succeeds, a lone section directly below it into the subtitle. Promoted
/// sections stop being sections; their ids move to the document and the
/// subtitle respectively.
pub(crate) fn promote_titles(mut document: Node) -> Node {
    let Some(index) = promotion_candidate(&document) else {
        return document;
    };
    let Node {
        attributes,
        children,
        ..
    } = document.children.remove(index);
    log::debug!("promoting section {:?} to document title", attributes.ids);
    merge_attributes(&mut document, attributes);

    let mut section_children = children.into_iter();
    let before = std::mem::take(&mut document.children);
    document.children = section_children
        .next()
        .into_iter()
        .chain(before)
        .chain(section_children)
        .collect();

    promote_subtitle(&mut document);
    document
}

fn promote_subtitle(document: &mut Node) {
    let Some(index) = promotion_candidate(document) else {
        return;
    };
    let Node {
        attributes,
        children,
        ..
    } = document.children.remove(index);
    log::debug!("promoting section {:?} to document subtitle", attributes.ids);

    let mut section_children = children.into_iter();
    let mut subtitle = Node::new(NodeKind::Subtitle);
    subtitle.attributes = attributes;
    if let Some(title) = section_children.next() {
        subtitle.children = title.children;
    }
    document.children.insert(1, subtitle);
    document.children.extend(section_children);
}

fn merge_attributes(node: &mut Node, attributes: Attributes) {
    node.attributes.ids.extend(attributes.ids);
    node.attributes.names.extend(attributes.names);
    node.attributes.classes.extend(attributes.classes);
}
