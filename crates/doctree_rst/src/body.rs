// crates/doctree_rst/src/body.rs

use doctree::{normalize_name, Node, NodeKind};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::adornment::{
    adornment_char, check_underline, is_punctuation, Style, Underline, MIN_TRANSITION, MIN_UNDERLINE,
};
use crate::directive;
use crate::document::assemble_body;
use crate::error::{ParseError, ParseErrorKind};
use crate::ids::IdRegistry;
use crate::lines::{dedent, indented_block_end, join_text, trim_blank_lines, Line};

/// Output of the block-level scan, before sections are nested.
pub(crate) enum Block {
    Title {
        style: Style,
        text: String,
        id: String,
        line: usize,
    },
    /// Internal hyperlink target (`.. _name:`) with no URL.
    Target { id: String, name: String },
    Node(Node),
}

static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([*+\-•‣⁃])(?: +(.*))?$").expect("bullet pattern is valid"));

static ENUMERATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+|#)([.)])|\((\d+|#)\))(?: +(.*))?$").expect("enumerator pattern is valid")
});

static ANONYMOUS_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^__:(?:\s+(.*))?$").expect("anonymous target pattern is valid"));

static TARGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^_(?:`([^`]+)`|([^:`][^:]*)):(?:\s+(.*))?$").expect("target pattern is valid")
});

static FOOTNOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\](?:\s+(.*))?$").expect("footnote pattern is valid"));

static SUBSTITUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|([^|]+)\|(?:\s+(.*))?$").expect("substitution pattern is valid"));

static FIELD_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:([^:\s][^:]*?):(?: +(.*))?$").expect("field marker pattern is valid"));

static LINE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|(?: +(.*))?$").expect("line block pattern is valid"));

static GRID_BORDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+(?:[-=]+\+)+$").expect("grid border pattern is valid"));

/// Top border of a simple table: at least two columns of `=`.
static SIMPLE_TOP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^=+(?: +=+)+$").expect("simple table pattern is valid"));

static SIMPLE_BORDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[=-]+(?: +[=-]+)*$").expect("simple border pattern is valid"));

static DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9](?:[-A-Za-z0-9_.+:]*?[A-Za-z0-9])?)::(?:\s+(.*))?$")
        .expect("directive pattern is valid")
});

/// How enumerators are punctuated; a list only continues with the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnumFormat {
    Period,
    Paren,
    Enclosed,
}

/// A list marker: its format key and the byte offset of the item text, if
/// the marker line carries any.
struct Marker<K> {
    key: K,
    text_start: Option<usize>,
}

fn bullet_marker(text: &str) -> Option<Marker<char>> {
    let caps = BULLET.captures(text)?;
    let key = caps.get(1)?.as_str().chars().next()?;
    Some(Marker {
        key,
        text_start: caps.get(2).map(|m| m.start()),
    })
}

fn enum_marker(text: &str) -> Option<Marker<EnumFormat>> {
    let caps = ENUMERATOR.captures(text)?;
    let key = match caps.get(2).map(|m| m.as_str()) {
        Some(".") => EnumFormat::Period,
        Some(_) => EnumFormat::Paren,
        None => EnumFormat::Enclosed,
    };
    Some(Marker {
        key,
        text_start: caps.get(4).map(|m| m.start()),
    })
}

fn is_explicit_markup(text: &str) -> bool {
    text == ".." || text.starts_with(".. ")
}

fn skip_blank(lines: &[Line], mut idx: usize) -> usize {
    while idx < lines.len() && lines[idx].is_blank() {
        idx += 1;
    }
    idx
}

/// Block-level reStructuredText scanner.
///
/// `nested` parsers handle indented bodies (block quotes, list items,
/// directive content) where section titles are not allowed.
pub(crate) struct BodyParser<'a> {
    ids: &'a mut IdRegistry,
    nested: bool,
}

impl<'a> BodyParser<'a> {
    pub fn new(ids: &'a mut IdRegistry, nested: bool) -> Self {
        Self { ids, nested }
    }

    pub fn claim_id(&mut self, name: &str) -> String {
        self.ids.claim(name)
    }

    /// Parses an indented body into finished nodes.
    pub fn nested_body(&mut self, lines: &[Line]) -> Result<Vec<Node>, ParseError> {
        let blocks = BodyParser::new(&mut *self.ids, true).parse(lines)?;
        Ok(assemble_body(blocks))
    }

    pub fn parse(&mut self, lines: &[Line]) -> Result<Vec<Block>, ParseError> {
        let mut blocks = Vec::new();
        let mut idx = 0;
        while idx < lines.len() {
            let line = &lines[idx];
            if line.is_blank() {
                idx += 1;
                continue;
            }
            idx = if line.indent() > 0 {
                self.block_quote(lines, idx, &mut blocks)?
            } else if line.text.starts_with(">>>") {
                self.doctest_block(lines, idx, &mut blocks)
            } else if is_explicit_markup(&line.text) {
                self.explicit_markup(lines, idx, &mut blocks)?
            } else if GRID_BORDER.is_match(&line.text) {
                self.grid_table(lines, idx, &mut blocks)?
            } else if SIMPLE_TOP.is_match(&line.text) {
                self.simple_table(lines, idx, &mut blocks)?
            } else if LINE_BLOCK.is_match(&line.text) {
                self.line_block(lines, idx, &mut blocks)
            } else if FIELD_MARKER.is_match(&line.text) {
                self.field_list(lines, idx, &mut blocks)?
            } else if let Some(marker) = bullet_marker(&line.text) {
                let bullet = marker.key;
                self.list(lines, idx, NodeKind::BulletList, &mut blocks, |text| {
                    bullet_marker(text)
                        .filter(|m| m.key == bullet)
                        .map(|m| m.text_start)
                })?
            } else if let Some(format) = self.enumerated_list_start(lines, idx) {
                self.list(lines, idx, NodeKind::EnumeratedList, &mut blocks, |text| {
                    enum_marker(text)
                        .filter(|m| m.key == format)
                        .map(|m| m.text_start)
                })?
            } else if line.text != "::" && adornment_char(&line.text).is_some() {
                self.adornment_line(lines, idx, &mut blocks)?
            } else {
                self.text_line(lines, idx, &mut blocks)?
            };
        }
        Ok(blocks)
    }

    fn block_quote(
        &mut self,
        lines: &[Line],
        start: usize,
        blocks: &mut Vec<Block>,
    ) -> Result<usize, ParseError> {
        let end = indented_block_end(lines, start, 1);
        let body = self.nested_body(&dedent(&lines[start..end]))?;
        blocks.push(Block::Node(
            Node::new(NodeKind::BlockQuote).with_children(body),
        ));
        Ok(end)
    }

    fn doctest_block(&mut self, lines: &[Line], start: usize, blocks: &mut Vec<Block>) -> usize {
        let end = lines[start..]
            .iter()
            .position(Line::is_blank)
            .map_or(lines.len(), |offset| start + offset);
        blocks.push(Block::Node(Node::text_element(
            NodeKind::DoctestBlock,
            join_text(&lines[start..end]),
        )));
        end
    }

    fn explicit_markup(
        &mut self,
        lines: &[Line],
        start: usize,
        blocks: &mut Vec<Block>,
    ) -> Result<usize, ParseError> {
        let end = indented_block_end(lines, start + 1, 1).max(start + 1);
        let number = lines[start].number;
        let first = lines[start].text.get(2..).unwrap_or("").trim();
        let body = &lines[start + 1..end];

        if let Some(caps) = ANONYMOUS_TARGET.captures(first) {
            log::debug!("line {}: anonymous target {:?}", number, caps.get(1).map(|m| m.as_str()));
            blocks.push(Block::Node(Node::new(NodeKind::Target)));
        } else if let Some(caps) = TARGET.captures(first) {
            let raw_name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str())
                .trim();
            let has_link = caps.get(3).is_some() || body.iter().any(|line| !line.is_blank());
            let id = self.claim_id(raw_name);
            let name = normalize_name(raw_name);
            if has_link {
                blocks.push(Block::Node(
                    Node::new(NodeKind::Target).with_id(id).with_name(name),
                ));
            } else {
                blocks.push(Block::Target { id, name });
            }
        } else if let Some(caps) = FOOTNOTE.captures(first) {
            let label = caps.get(1).map_or("", |m| m.as_str()).to_string();
            let mut content = Vec::new();
            if let Some(text) = caps.get(2) {
                content.push(Line::new(number, text.as_str()));
            }
            content.extend(dedent(body));
            let footnote = Node::new(NodeKind::Footnote)
                .with_name(normalize_name(&label))
                .with_children(self.nested_body(&content)?);
            blocks.push(Block::Node(footnote));
        } else if let Some(caps) = SUBSTITUTION.captures(first) {
            log::debug!(
                "line {}: skipping substitution definition |{}|",
                number,
                caps.get(1).map_or("", |m| m.as_str())
            );
        } else if let Some(caps) = DIRECTIVE.captures(first) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            let argument = caps.get(2).map(|m| m.as_str());
            if let Some(node) = directive::parse_directive(self, name, argument, body, number)? {
                blocks.push(Block::Node(node));
            }
        } else {
            let mut content = Vec::new();
            if !first.is_empty() {
                content.push(Line::new(number, first));
            }
            content.extend(dedent(body));
            blocks.push(Block::Node(Node::text_element(
                NodeKind::Comment,
                join_text(&content),
            )));
        }
        Ok(end)
    }

    /// Enumerated lists need a blank, indented or enumerated line after the
    /// first item so ordinary sentences starting with a number stay text.
    fn enumerated_list_start(&self, lines: &[Line], idx: usize) -> Option<EnumFormat> {
        let marker = enum_marker(&lines[idx].text)?;
        let follows_ok = match lines.get(idx + 1) {
            None => true,
            Some(next) => next.is_blank() || next.indent() > 0 || enum_marker(&next.text).is_some(),
        };
        follows_ok.then_some(marker.key)
    }

    /// Parses consecutive list items. `item_marker` returns the item text
    /// offset for lines that continue this list.
    fn list<F>(
        &mut self,
        lines: &[Line],
        start: usize,
        kind: NodeKind,
        blocks: &mut Vec<Block>,
        item_marker: F,
    ) -> Result<usize, ParseError>
    where
        F: Fn(&str) -> Option<Option<usize>>,
    {
        let mut list = Node::new(kind);
        let mut idx = start;
        loop {
            let line = &lines[idx];
            let text_start = item_marker(&line.text).flatten();

            let mut item_lines = Vec::new();
            let end = match text_start {
                Some(offset) => {
                    let width = line.text[..offset].chars().count();
                    let end = indented_block_end(lines, idx + 1, width);
                    item_lines.push(Line::new(line.number, &line.text[offset..]));
                    item_lines.extend(lines[idx + 1..end].iter().map(|l| l.shifted(width)));
                    end
                }
                None => {
                    let end = indented_block_end(lines, idx + 1, 1);
                    item_lines.extend(dedent(&lines[idx + 1..end]));
                    end
                }
            };
            list.push(Node::new(NodeKind::ListItem).with_children(self.nested_body(&item_lines)?));

            let next = skip_blank(lines, end);
            let continues = lines
                .get(next)
                .map_or(false, |l| l.indent() == 0 && item_marker(&l.text).is_some())
                && (kind != NodeKind::EnumeratedList
                    || self.enumerated_list_start(lines, next).is_some());
            if !continues {
                blocks.push(Block::Node(list));
                return Ok(end);
            }
            idx = next;
        }
    }

    /// Consecutive `:name: body` fields. The body is the text after the
    /// marker plus the following indented lines, dedented on their own.
    fn field_list(
        &mut self,
        lines: &[Line],
        start: usize,
        blocks: &mut Vec<Block>,
    ) -> Result<usize, ParseError> {
        let mut list = Node::new(NodeKind::FieldList);
        let mut idx = start;
        loop {
            let line = &lines[idx];
            let Some(caps) = FIELD_MARKER.captures(&line.text) else {
                break;
            };
            let name = caps.get(1).map_or("", |m| m.as_str());
            let end = indented_block_end(lines, idx + 1, 1);
            let mut content = Vec::new();
            if let Some(text) = caps.get(2) {
                content.push(Line::new(line.number, text.as_str()));
            }
            content.extend(dedent(&lines[idx + 1..end]));
            list.push(
                Node::new(NodeKind::Field)
                    .with_child(Node::text_element(NodeKind::FieldName, name))
                    .with_child(
                        Node::new(NodeKind::FieldBody).with_children(self.nested_body(&content)?),
                    ),
            );

            let next = skip_blank(lines, end);
            let continues = lines
                .get(next)
                .map_or(false, |l| l.indent() == 0 && FIELD_MARKER.is_match(&l.text));
            if !continues {
                blocks.push(Block::Node(list));
                return Ok(end);
            }
            idx = next;
        }
        blocks.push(Block::Node(list));
        Ok(idx)
    }

    /// `| text` lines; indented lines continue the line above. Line text is
    /// inline content and never introduces a literal block.
    fn line_block(&mut self, lines: &[Line], start: usize, blocks: &mut Vec<Block>) -> usize {
        let mut block = Node::new(NodeKind::LineBlock);
        let mut idx = start;
        while let Some(caps) = lines.get(idx).and_then(|line| LINE_BLOCK.captures(&line.text)) {
            let mut text = caps.get(1).map_or("", |m| m.as_str()).to_string();
            idx += 1;
            while idx < lines.len() && !lines[idx].is_blank() && lines[idx].indent() > 0 {
                text.push(' ');
                text.push_str(lines[idx].text.trim());
                idx += 1;
            }
            block.push(Node::text_element(NodeKind::Line, text));
        }
        blocks.push(Block::Node(block));
        idx
    }

    /// Grid table: rows run between `+---+` borders and cells split at the
    /// border's `+` columns. Each cell is parsed as a body of its own.
    fn grid_table(
        &mut self,
        lines: &[Line],
        start: usize,
        blocks: &mut Vec<Block>,
    ) -> Result<usize, ParseError> {
        let end = lines[start..]
            .iter()
            .position(|l| l.is_blank() || !(l.text.starts_with('+') || l.text.starts_with('|')))
            .map_or(lines.len(), |offset| start + offset);
        let columns: Vec<usize> = lines[start]
            .text
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == '+')
            .map(|(col, _)| col)
            .collect();

        let mut table = Node::new(NodeKind::Table);
        let mut row: Vec<&Line> = Vec::new();
        for line in &lines[start + 1..end] {
            if line.text.starts_with('+') {
                if !row.is_empty() {
                    table.push(self.grid_row(&row, &columns)?);
                    row.clear();
                }
            } else {
                row.push(line);
            }
        }
        if !row.is_empty() {
            log::warn!("line {}: malformed table; bottom border missing", lines[start].number);
            table.push(self.grid_row(&row, &columns)?);
        }
        blocks.push(Block::Node(table));
        Ok(end)
    }

    fn grid_row(&mut self, row: &[&Line], columns: &[usize]) -> Result<Node, ParseError> {
        let row_chars: Vec<Vec<char>> = row.iter().map(|line| line.text.chars().collect()).collect();
        // Spanning cells have no `|` at the inner column.
        let splits: Vec<usize> = columns
            .iter()
            .copied()
            .filter(|&col| {
                row_chars
                    .iter()
                    .all(|chars| matches!(chars.get(col), Some('|') | Some('+')))
            })
            .collect();

        let mut row_node = Node::new(NodeKind::Row);
        for pair in splits.windows(2) {
            let (left, right) = (pair[0] + 1, pair[1]);
            let cell: Vec<Line> = row
                .iter()
                .zip(&row_chars)
                .map(|(line, chars)| {
                    let text: String = chars
                        .get(left..right.min(chars.len()))
                        .map(|slice| slice.iter().collect())
                        .unwrap_or_default();
                    Line::new(line.number, cell_text(&text))
                })
                .collect();
            let body = self.nested_body(&dedent(&cell))?;
            row_node.push(Node::new(NodeKind::Entry).with_children(body));
        }
        Ok(row_node)
    }

    /// Simple table: `=====  =====` borders, one row per line whose first
    /// column is filled, continuation lines for the other columns.
    fn simple_table(
        &mut self,
        lines: &[Line],
        start: usize,
        blocks: &mut Vec<Block>,
    ) -> Result<usize, ParseError> {
        let closing = (start + 1..lines.len()).find(|&idx| {
            SIMPLE_BORDER.is_match(&lines[idx].text)
                && lines[idx].text.starts_with('=')
                && lines.get(idx + 1).map_or(true, Line::is_blank)
        });
        let Some(closing) = closing else {
            log::warn!("line {}: malformed table; bottom border missing", lines[start].number);
            return self.text_line(lines, start, blocks);
        };

        let starts: Vec<usize> = column_starts(&lines[start].text);
        let mut table = Node::new(NodeKind::Table);
        let mut row: Vec<&Line> = Vec::new();
        for line in &lines[start + 1..closing] {
            if !line.is_blank() && SIMPLE_BORDER.is_match(&line.text) {
                continue;
            }
            let first_filled = line
                .text
                .chars()
                .take(starts.get(1).copied().unwrap_or(usize::MAX))
                .any(|c| c != ' ');
            if first_filled && !row.is_empty() {
                table.push(self.simple_row(&row, &starts)?);
                row.clear();
            }
            row.push(line);
        }
        if !row.is_empty() {
            table.push(self.simple_row(&row, &starts)?);
        }
        blocks.push(Block::Node(table));
        Ok(closing + 1)
    }

    fn simple_row(&mut self, row: &[&Line], starts: &[usize]) -> Result<Node, ParseError> {
        let mut row_node = Node::new(NodeKind::Row);
        for (column, &left) in starts.iter().enumerate() {
            let right = starts.get(column + 1).copied();
            let cell: Vec<Line> = row
                .iter()
                .map(|line| {
                    let text: String = line
                        .text
                        .chars()
                        .skip(left)
                        .take(right.map_or(usize::MAX, |r| r - left))
                        .collect();
                    Line::new(line.number, text.trim_end())
                })
                .collect();
            let body = self.nested_body(&dedent(trim_blank_lines(&cell)))?;
            row_node.push(Node::new(NodeKind::Entry).with_children(body));
        }
        Ok(row_node)
    }

    fn adornment_line(
        &mut self,
        lines: &[Line],
        start: usize,
        blocks: &mut Vec<Block>,
    ) -> Result<usize, ParseError> {
        let line = &lines[start];
        let length = line.text.chars().count();

        let title_line = lines.get(start + 1).filter(|next| !next.is_blank());
        let Some(title_line) = title_line else {
            if length >= MIN_TRANSITION {
                blocks.push(Block::Node(Node::new(NodeKind::Transition)));
                return Ok(start + 1);
            }
            return self.text_line(lines, start, blocks);
        };
        if length < MIN_UNDERLINE {
            return self.text_line(lines, start, blocks);
        }

        let title = title_line.text.trim();
        let underline = lines
            .get(start + 2)
            .filter(|under| adornment_char(&under.text).is_some())
            .ok_or_else(|| ParseError::new(line.number, ParseErrorKind::MissingUnderline))?;
        if underline.text != line.text {
            return Err(ParseError::new(
                line.number,
                ParseErrorKind::OverlineUnderlineMismatch,
            ));
        }
        if title.chars().count() > length {
            log::warn!("line {}: title overline too short", line.number);
        }

        let style = Style {
            underline: adornment_char(&line.text).unwrap_or('='),
            overline: true,
        };
        self.title(style, title, title_line.number, blocks)?;
        Ok(start + 3)
    }

    fn title(
        &mut self,
        style: Style,
        text: &str,
        line: usize,
        blocks: &mut Vec<Block>,
    ) -> Result<(), ParseError> {
        if self.nested {
            return Err(ParseError::new(
                line,
                ParseErrorKind::UnexpectedSectionTitle {
                    title: text.to_string(),
                },
            ));
        }
        let id = self.claim_id(text);
        blocks.push(Block::Title {
            style,
            text: text.to_string(),
            id,
            line,
        });
        Ok(())
    }

    fn text_line(
        &mut self,
        lines: &[Line],
        start: usize,
        blocks: &mut Vec<Block>,
    ) -> Result<usize, ParseError> {
        let line = &lines[start];

        if let Some(next) = lines.get(start + 1) {
            let verdict = check_underline(&line.text, &next.text);
            if verdict == Underline::TooShort {
                log::warn!("line {}: title underline too short", next.number);
            }
            if verdict != Underline::No {
                let style = Style {
                    underline: adornment_char(&next.text).unwrap_or('-'),
                    overline: false,
                };
                self.title(style, line.text.trim(), line.number, blocks)?;
                return Ok(start + 2);
            }
        }

        if is_definition_term(lines, start) {
            return self.definition_list(lines, start, blocks);
        }

        let end = lines[start..]
            .iter()
            .position(|l| l.is_blank() || l.indent() > 0)
            .map_or(lines.len(), |offset| start + offset);
        let text = join_text(&lines[start..end]);

        let Some(intro) = text.strip_suffix("::") else {
            blocks.push(Block::Node(Node::text_element(NodeKind::Paragraph, text)));
            return Ok(end);
        };

        // "Text::" keeps one colon, "Text ::" keeps none, a lone "::" vanishes.
        let paragraph = if intro.is_empty() {
            None
        } else if intro.ends_with(char::is_whitespace) {
            Some(intro.trim_end().to_string())
        } else {
            Some(format!("{}:", intro))
        };
        if let Some(paragraph) = paragraph {
            blocks.push(Block::Node(Node::text_element(NodeKind::Paragraph, paragraph)));
        }
        Ok(self.literal_block(lines, end, lines[end - 1].number, blocks))
    }

    /// Reads the literal block announced by a paragraph ending in `::`.
    fn literal_block(
        &mut self,
        lines: &[Line],
        from: usize,
        intro_line: usize,
        blocks: &mut Vec<Block>,
    ) -> usize {
        let next = skip_blank(lines, from);
        let Some(line) = lines.get(next) else {
            log::warn!("line {}: literal block expected; none found", intro_line);
            return from;
        };

        if line.indent() > 0 {
            let end = indented_block_end(lines, next, 1);
            blocks.push(Block::Node(Node::text_element(
                NodeKind::LiteralBlock,
                join_text(&dedent(&lines[next..end])),
            )));
            return end;
        }

        let quote = line.text.chars().next().filter(|c| is_punctuation(*c));
        if let Some(quote) = quote {
            let end = lines[next..]
                .iter()
                .position(|l| l.is_blank() || !l.text.starts_with(quote))
                .map_or(lines.len(), |offset| next + offset);
            blocks.push(Block::Node(Node::text_element(
                NodeKind::LiteralBlock,
                join_text(&lines[next..end]),
            )));
            return end;
        }

        log::warn!("line {}: literal block expected; none found", intro_line);
        from
    }

    fn definition_list(
        &mut self,
        lines: &[Line],
        start: usize,
        blocks: &mut Vec<Block>,
    ) -> Result<usize, ParseError> {
        let mut list = Node::new(NodeKind::DefinitionList);
        let mut idx = start;
        loop {
            if lines[idx].text.ends_with("::") {
                log::info!(
                    "line {}: blank line missing before literal block (after the \"::\")? \
                     Interpreted as a definition list item.",
                    lines[idx].number
                );
            }
            let end = indented_block_end(lines, idx + 1, 1);
            let definition = self.nested_body(&dedent(&lines[idx + 1..end]))?;
            list.push(
                Node::new(NodeKind::DefinitionListItem)
                    .with_child(Node::text_element(NodeKind::Term, lines[idx].text.trim()))
                    .with_child(Node::new(NodeKind::Definition).with_children(definition)),
            );

            let next = skip_blank(lines, end);
            if !is_definition_term(lines, next) {
                blocks.push(Block::Node(list));
                return Ok(end);
            }
            idx = next;
        }
    }
}

/// Column start offsets (in characters) of a simple table border.
fn column_starts(border: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut previous = ' ';
    for (col, c) in border.chars().enumerate() {
        if c != ' ' && previous == ' ' {
            starts.push(col);
        }
        previous = c;
    }
    starts
}

/// Cell text with trailing space removed; fragments of inner borders left by
/// spanning cells read as blank.
fn cell_text(text: &str) -> String {
    let trimmed = text.trim_end();
    if !trimmed.is_empty() && trimmed.trim().chars().all(|c| matches!(c, '-' | '=' | '+')) {
        return String::new();
    }
    trimmed.to_string()
}

/// A single unindented text line directly followed by an indented line.
fn is_definition_term(lines: &[Line], idx: usize) -> bool {
    let (Some(term), Some(next)) = (lines.get(idx), lines.get(idx + 1)) else {
        return false;
    };
    !term.is_blank()
        && term.indent() == 0
        && !next.is_blank()
        && next.indent() > 0
        && !is_explicit_markup(&term.text)
        && !FIELD_MARKER.is_match(&term.text)
        && !LINE_BLOCK.is_match(&term.text)
        && !GRID_BORDER.is_match(&term.text)
        && !SIMPLE_TOP.is_match(&term.text)
        && bullet_marker(&term.text).is_none()
        && enum_marker(&term.text).is_none()
        && !term.text.starts_with(">>>")
        && adornment_char(&term.text).is_none()
}
