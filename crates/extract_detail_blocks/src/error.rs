// crates/extract_detail_blocks/src/error.rs

use std::io;
use std::path::PathBuf;

use doctree_rst::ParseError;
use locate_section::SectionNotFound;
use thiserror::Error;

/// Everything that can stop an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input file is missing, unreadable or not UTF-8.
    #[error("Error reading input file {}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing document")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    SectionNotFound(#[from] SectionNotFound),

    #[error("Error writing output")]
    Output(#[source] io::Error),
}
