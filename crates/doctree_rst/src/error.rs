// crates/doctree_rst/src/error.rs

use thiserror::Error;

/// A severe markup problem that stops parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number in the input.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("title level inconsistent for section \"{title}\"")]
    InconsistentTitleLevel { title: String },

    #[error("missing matching underline for section title overline")]
    MissingUnderline,

    #[error("title overline and underline mismatch")]
    OverlineUnderlineMismatch,

    #[error("unexpected section title \"{title}\" inside an indented block")]
    UnexpectedSectionTitle { title: String },
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}
