// crates/doctree_rst/src/lines.rs

/// One physical source line after normalisation, tagged with its 1-based
/// line number in the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line {
    pub number: usize,
    pub text: String,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn indent(&self) -> usize {
        indent_of(&self.text)
    }

    /// Removes up to `width` leading spaces.
    pub fn shifted(&self, width: usize) -> Line {
        let strip = self.indent().min(width);
        Line::new(self.number, &self.text[strip..])
    }
}

const TAB_WIDTH: usize = 8;

/// Splits source text into lines with tabs expanded to 8-column stops and
/// trailing whitespace removed.
pub(crate) fn split_lines(source: &str) -> Vec<Line> {
    source
        .lines()
        .enumerate()
        .map(|(idx, raw)| Line::new(idx + 1, expand_tabs(raw).trim_end()))
        .collect()
}

fn expand_tabs(raw: &str) -> String {
    if !raw.contains('\t') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len() + TAB_WIDTH);
    let mut column = 0;
    for c in raw.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

pub(crate) fn indent_of(text: &str) -> usize {
    text.len() - text.trim_start_matches(' ').len()
}

/// Returns the end (exclusive) of the indented block starting at `start`:
/// blank lines and lines indented by at least `min_indent` belong to it.
/// Trailing blank lines are not part of the block.
pub(crate) fn indented_block_end(lines: &[Line], start: usize, min_indent: usize) -> usize {
    let mut end = start;
    let mut last_content = start;
    while end < lines.len() {
        let line = &lines[end];
        if !line.is_blank() && line.indent() < min_indent {
            break;
        }
        end += 1;
        if !line.is_blank() {
            last_content = end;
        }
    }
    last_content
}

/// Strips the common indentation of all non-blank lines.
pub(crate) fn dedent(lines: &[Line]) -> Vec<Line> {
    let width = lines
        .iter()
        .filter(|line| !line.is_blank())
        .map(Line::indent)
        .min()
        .unwrap_or(0);
    lines.iter().map(|line| line.shifted(width)).collect()
}

/// Drops leading and trailing blank lines.
pub(crate) fn trim_blank_lines(lines: &[Line]) -> &[Line] {
    let start = lines
        .iter()
        .position(|line| !line.is_blank())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.is_blank())
        .map_or(start, |idx| idx + 1);
    &lines[start..end]
}

/// Joins line texts with `\n`.
pub(crate) fn join_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn test_split_lines_strips_trailing_whitespace_and_numbers_lines() {
        let lines = split_lines("first   \r\n\tsecond\n");
        assert_eq!(texts(&lines), vec!["first", "        second"]);
        assert_eq!(lines[1].number, 2);
    }

    #[test]
    fn test_expand_tabs_uses_eight_column_stops() {
        assert_eq!(expand_tabs("ab\tc"), "ab      c");
    }

    #[test]
    fn test_indented_block_end_excludes_trailing_blanks() {
        let lines = split_lines("    a\n\n    b\n\n\nnext");
        assert_eq!(indented_block_end(&lines, 0, 1), 3);
    }

    #[test]
    fn test_dedent_keeps_relative_indentation() {
        let lines = split_lines("    def f():\n        return 1\n\n    f()");
        let dedented = dedent(&lines);
        assert_eq!(texts(&dedented), vec!["def f():", "    return 1", "", "f()"]);
    }

    #[test]
    fn test_trim_blank_lines() {
        let lines = split_lines("\n\nbody\n\n");
        assert_eq!(texts(trim_blank_lines(&lines)), vec!["body"]);
    }
}
