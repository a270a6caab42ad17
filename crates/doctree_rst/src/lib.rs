// crates/doctree_rst/src/lib.rs

//! Block-level reStructuredText parser producing a [`doctree::Node`] tree.
//!
//! Covers what the extractor needs: sections and their ids, hyperlink
//! targets, literal blocks in all their forms, and the body elements that
//! can contain them (lists, tables, block quotes, admonitions). Inline
//! markup is kept as raw paragraph text. A lone top-level section is
//! promoted to the document title.

mod adornment;
mod body;
mod directive;
mod document;
mod error;
mod ids;
mod inline;
mod lines;

use doctree::Node;

pub use error::{ParseError, ParseErrorKind};

use body::BodyParser;
use ids::IdRegistry;

/// Anything that can turn markup text into a document tree.
pub trait DocumentParser {
    fn parse(&self, source: &str) -> Result<Node, ParseError>;
}

/// Default [`DocumentParser`] for reStructuredText input.
#[derive(Debug, Default, Clone, Copy)]
pub struct RstParser;

impl DocumentParser for RstParser {
    fn parse(&self, source: &str) -> Result<Node, ParseError> {
        let lines = lines::split_lines(source);
        let mut ids = IdRegistry::default();
        let blocks = BodyParser::new(&mut ids, false).parse(&lines)?;
        let document = document::assemble_document(blocks)?;
        Ok(document::promote_titles(document))
    }
}

/// Parses reStructuredText with the default [`RstParser`].
pub fn parse_rst(source: &str) -> Result<Node, ParseError> {
    RstParser.parse(source)
}
