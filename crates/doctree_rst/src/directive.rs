// crates/doctree_rst/src/directive.rs

use doctree::{normalize_name, Node, NodeKind};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::body::BodyParser;
use crate::error::ParseError;
use crate::inline::strip_inline_markup;
use crate::lines::{dedent, join_text, trim_blank_lines, Line};

static OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:([^:\s][^:]*):(?:\s+(.*))?$").expect("option pattern is valid"));

/// How a directive's block is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectiveKind {
    /// `code`, `code-block`, `sourcecode`: verbatim literal block.
    Code,
    /// `parsed-literal`: literal block with inline markup removed.
    ParsedLiteral,
    /// Admonitions whose first-line text is already body content.
    Admonition,
    /// Directives whose argument is a title (`admonition`, `topic`, …).
    Titled,
    /// Directives whose argument is a class list and whose body is parsed.
    Container,
    /// Known directives whose content carries no body elements.
    Ignored,
    Unknown,
}

impl DirectiveKind {
    fn of(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "code" | "code-block" | "sourcecode" => DirectiveKind::Code,
            "parsed-literal" => DirectiveKind::ParsedLiteral,
            "attention" | "caution" | "danger" | "error" | "hint" | "important" | "note"
            | "tip" | "warning" | "seealso" => DirectiveKind::Admonition,
            "admonition" | "topic" | "sidebar" | "rubric" => DirectiveKind::Titled,
            "container" | "compound" | "epigraph" | "highlights" | "pull-quote" => {
                DirectiveKind::Container
            }
            "image" | "figure" | "include" | "literalinclude" | "raw" | "math" | "contents"
            | "sectnum" | "header" | "footer" | "table" | "csv-table" | "list-table"
            | "replace" | "unicode" | "date" | "class" | "role" | "default-role" | "title"
            | "meta" | "line-block" | "target-notes" | "toctree" | "highlight" => {
                DirectiveKind::Ignored
            }
            _ => DirectiveKind::Unknown,
        }
    }

    /// Whether lines up to the first blank line continue the argument.
    fn multiline_argument(self) -> bool {
        matches!(self, DirectiveKind::Titled)
    }
}

/// A directive block split into argument, options and content.
struct DirectiveBlock {
    argument: String,
    options: Vec<(String, String)>,
    content: Vec<Line>,
}

fn split_block(kind: DirectiveKind, argument: Option<&str>, body: &[Line]) -> DirectiveBlock {
    let lines = dedent(body);
    let mut idx = 0;
    let mut argument = argument.unwrap_or("").trim().to_string();

    if kind.multiline_argument() && !argument.is_empty() {
        while idx < lines.len() && !lines[idx].is_blank() && !OPTION.is_match(&lines[idx].text) {
            argument.push(' ');
            argument.push_str(lines[idx].text.trim());
            idx += 1;
        }
    }

    let mut options = Vec::new();
    while let Some(caps) = lines.get(idx).and_then(|line| OPTION.captures(&line.text)) {
        let name = caps.get(1).map_or("", |m| m.as_str()).to_lowercase();
        let mut value = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
        idx += 1;
        // Option values may continue on further indented lines.
        while idx < lines.len() && !lines[idx].is_blank() && lines[idx].indent() > 0 {
            value.push(' ');
            value.push_str(lines[idx].text.trim());
            idx += 1;
        }
        options.push((name, value));
    }

    DirectiveBlock {
        argument,
        options,
        content: dedent(trim_blank_lines(&lines[idx..])),
    }
}

/// Prefixes every line with its number, right-aligned to the width of the
/// number one past the last line.
fn number_lines(content: &[Line], first: usize) -> String {
    let width = (first + content.len()).to_string().len();
    content
        .iter()
        .enumerate()
        .map(|(offset, line)| format!("{:>width$} {}", first + offset, line.text, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Applies the `:class:` and `:name:` options shared by all directives.
fn apply_common_options(parser: &mut BodyParser<'_>, mut node: Node, options: &[(String, String)]) -> Node {
    for (name, value) in options {
        match name.as_str() {
            "class" => node
                .attributes
                .classes
                .extend(value.split_whitespace().map(str::to_lowercase)),
            "name" if !value.is_empty() => {
                let id = parser.claim_id(value);
                node.attributes.ids.push(id);
                node.attributes.names.push(normalize_name(value));
            }
            _ => {}
        }
    }
    node
}

/// Builds the node for `.. name:: argument` followed by `body`.
///
/// Returns `None` when the directive produces nothing, such as a code block
/// without content.
pub(crate) fn parse_directive(
    parser: &mut BodyParser<'_>,
    name: &str,
    argument: Option<&str>,
    body: &[Line],
    line: usize,
) -> Result<Option<Node>, ParseError> {
    let kind = DirectiveKind::of(name);
    let name = name.to_lowercase();

    let node = match kind {
        DirectiveKind::Code | DirectiveKind::ParsedLiteral => {
            let block = split_block(kind, argument, body);
            if block.content.is_empty() {
                log::warn!("line {}: content block expected for the \"{}\" directive; none found", line, name);
                return Ok(None);
            }
            let mut literal = if kind == DirectiveKind::Code {
                let first_number = block
                    .options
                    .iter()
                    .find(|(option, _)| option == "number-lines")
                    .map(|(_, value)| value.as_str());
                let text = match first_number {
                    None => join_text(&block.content),
                    Some("") => number_lines(&block.content, 1),
                    Some(value) => match value.parse::<usize>() {
                        Ok(first) => number_lines(&block.content, first),
                        Err(_) => {
                            log::warn!(
                                "line {}: \":number-lines:\" with non-integer start value {:?}",
                                line,
                                value
                            );
                            return Ok(None);
                        }
                    },
                };
                Node::text_element(NodeKind::LiteralBlock, text).with_class("code")
            } else {
                let raw = join_text(&block.content);
                Node::text_element(NodeKind::LiteralBlock, strip_inline_markup(&raw))
            };
            if let Some(language) = block.argument.split_whitespace().next() {
                literal.attributes.language = Some(language.to_string());
                literal = literal.with_class(language.to_lowercase());
            }
            apply_common_options(parser, literal, &block.options)
        }
        DirectiveKind::Admonition => {
            let mut content = Vec::new();
            if let Some(text) = argument.map(str::trim).filter(|text| !text.is_empty()) {
                content.push(Line::new(line, text));
                if body.first().map_or(false, Line::is_blank) {
                    content.push(Line::new(line + 1, ""));
                }
            }
            let block = split_block(kind, None, body);
            content.extend(block.content);
            let admonition = Node::new(NodeKind::Directive)
                .with_class(name.as_str())
                .with_children(parser.nested_body(&content)?);
            apply_common_options(parser, admonition, &block.options)
        }
        DirectiveKind::Titled => {
            let block = split_block(kind, argument, body);
            let mut titled = Node::new(NodeKind::Directive).with_class(name.as_str());
            if !block.argument.is_empty() {
                titled.push(Node::text_element(NodeKind::Title, block.argument.as_str()));
            }
            let titled = titled.with_children(parser.nested_body(&block.content)?);
            apply_common_options(parser, titled, &block.options)
        }
        DirectiveKind::Container => {
            let block = split_block(kind, argument, body);
            let mut container = Node::new(NodeKind::Directive).with_class(name.as_str());
            container
                .attributes
                .classes
                .extend(block.argument.split_whitespace().map(str::to_lowercase));
            let container = container.with_children(parser.nested_body(&block.content)?);
            apply_common_options(parser, container, &block.options)
        }
        DirectiveKind::Ignored => {
            log::debug!("line {}: \"{}\" directive content not parsed", line, name);
            Node::new(NodeKind::Directive).with_class(name.as_str())
        }
        DirectiveKind::Unknown => {
            log::warn!("line {}: unknown directive type \"{}\"", line, name);
            Node::new(NodeKind::Directive).with_class(name.as_str())
        }
    };
    Ok(Some(node))
}
