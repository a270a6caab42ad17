// crates/extract_detail_blocks/src/lib.rs

use std::fs;
use std::io::Write;
use std::path::Path;

use collect_literal_blocks::collect_literal_blocks;
use doctree_rst::{DocumentParser, RstParser};
use locate_section::locate_section;

mod config;
mod error;

pub use config::{ExtractConfig, DEFAULT_INPUT, DEFAULT_SECTION, DEFAULT_SEPARATOR};
pub use error::ExtractError;

/// Reads the whole input document. The file is closed before this returns.
///
/// # Errors
///
/// Returns [`ExtractError::InputNotFound`] if the file cannot be opened or
/// is not valid UTF-8.
pub fn read_input(path: &Path) -> Result<String, ExtractError> {
    fs::read_to_string(path).map_err(|source| ExtractError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses `source` and returns the text of every literal block inside the
/// section identified by `section_id`, in document order.
///
/// # Errors
///
/// Fails with [`ExtractError::Parse`] on severe markup errors and with
/// [`ExtractError::SectionNotFound`] when no section has the id.
pub fn extract_blocks(
    parser: &dyn DocumentParser,
    source: &str,
    section_id: &str,
) -> Result<Vec<String>, ExtractError> {
    let tree = parser.parse(source)?;
    let section = locate_section(&tree, section_id)?;
    Ok(collect_literal_blocks(section))
}

/// Writes each block followed by `separator`, then flushes.
pub fn write_blocks<W: Write>(
    blocks: &[String],
    separator: &str,
    out: &mut W,
) -> Result<(), ExtractError> {
    for block in blocks {
        out.write_all(block.as_bytes()).map_err(ExtractError::Output)?;
        out.write_all(separator.as_bytes()).map_err(ExtractError::Output)?;
    }
    out.flush().map_err(ExtractError::Output)
}

/// Runs the full pipeline with a caller-supplied parser and returns the
/// number of blocks written.
pub fn run_with_parser<W: Write>(
    parser: &dyn DocumentParser,
    config: &ExtractConfig,
    out: &mut W,
) -> Result<usize, ExtractError> {
    let source = read_input(&config.input)?;
    log::debug!("Read {} bytes from {}", source.len(), config.input.display());
    let blocks = extract_blocks(parser, &source, &config.section_id)?;
    write_blocks(&blocks, &config.separator, out)?;
    Ok(blocks.len())
}

/// Reads `config.input` as reStructuredText and writes the literal blocks of
/// the configured section to `out`.
pub fn run<W: Write>(config: &ExtractConfig, out: &mut W) -> Result<usize, ExtractError> {
    run_with_parser(&RstParser, config, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctree::{Node, NodeKind};
    use doctree_rst::ParseError;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
Project
=======

Detail
------

First::

    print(1)

Then::

    print(2)

Other
-----

::

    print(3)
";

    /// Parser stub returning a fixed tree, to exercise the pipeline seam.
    struct FixedTreeParser(Node);

    impl DocumentParser for FixedTreeParser {
        fn parse(&self, _source: &str) -> Result<Node, ParseError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_extract_blocks_in_memory() {
        let blocks = extract_blocks(&RstParser, SAMPLE, "detail").unwrap();
        assert_eq!(blocks, vec!["print(1)", "print(2)"]);
    }

    #[test]
    fn test_extract_blocks_missing_section() {
        let err = extract_blocks(&RstParser, "Usage\n-----\n\n::\n\n    x\n", "detail").unwrap_err();
        assert!(matches!(err, ExtractError::SectionNotFound(_)));
        assert!(err.to_string().contains("\"detail\""));
    }

    #[test]
    fn test_extract_blocks_parse_error() {
        let err = extract_blocks(&RstParser, "=====\nTitle\n-----\n", "detail").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_empty_section_is_not_an_error() {
        let source = "Detail\n------\n\nNo code here.\n\nOther\n-----\n\n::\n\n    elsewhere\n";
        let blocks = extract_blocks(&RstParser, source, "detail").unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_promoted_document_title_is_not_a_section() {
        let source = "\
Detail
======

Usage
-----

::

    under_title

More
----

::

    more
";
        let err = extract_blocks(&RstParser, source, "detail").unwrap_err();
        assert!(matches!(err, ExtractError::SectionNotFound(_)));
    }

    #[test]
    fn test_accented_section_title_matches() {
        let source = "Project\n=======\n\nDétail\n------\n\n::\n\n   accented\n\nOther\n-----\n";
        let blocks = extract_blocks(&RstParser, source, "detail").unwrap();
        assert_eq!(blocks, vec!["accented"]);
    }

    #[test]
    fn test_write_blocks_uses_separator_after_each_block() {
        let mut out = Vec::new();
        write_blocks(&["a".to_string(), "b\nc".to_string()], "\n", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_run_reads_file_and_writes_blocks() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{}", SAMPLE).expect("Failed to write to temp file");

        let config = ExtractConfig::new(temp_file.path());
        let mut out = Vec::new();
        let count = run(&config, &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "print(1)\nprint(2)\n");
    }

    #[test]
    fn test_run_is_idempotent() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", SAMPLE).unwrap();
        let config = ExtractConfig::new(temp_file.path()).with_separator("\0");

        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&config, &mut first).unwrap();
        run(&config, &mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, b"print(1)\0print(2)\0");
    }

    #[test]
    fn test_run_missing_file() {
        let config = ExtractConfig::new("non_existent_file.rst");
        let err = run(&config, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ExtractError::InputNotFound { .. }));
        assert!(err.to_string().contains("non_existent_file.rst"));
    }

    #[test]
    fn test_run_with_custom_parser() {
        let tree = Node::document().with_child(
            Node::section("detail", "Detail")
                .with_child(Node::text_element(NodeKind::LiteralBlock, "from stub")),
        );
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "ignored").unwrap();

        let mut out = Vec::new();
        let count = run_with_parser(
            &FixedTreeParser(tree),
            &ExtractConfig::new(temp_file.path()),
            &mut out,
        )
        .unwrap();
        assert_eq!(count, 1);
        assert_eq!(out, b"from stub\n");
    }
}
