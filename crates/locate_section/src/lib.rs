// crates/locate_section/src/lib.rs

use doctree::{Node, NodeKind};
use thiserror::Error;

/// No section in the tree carries the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no section with id \"{identifier}\" found in the document")]
pub struct SectionNotFound {
    pub identifier: String,
}

/// Returns the first section, in pre-order, whose ids contain `identifier`.
///
/// When several sections share the identifier the earliest one in the
/// document wins.
///
/// # Arguments
///
/// * `tree` - Root of the parsed document (it may itself be the section).
/// * `identifier` - Section id to look for, e.g. `"detail"`.
///
/// # Errors
///
/// Returns [`SectionNotFound`] if no section matches.
pub fn locate_section<'a>(tree: &'a Node, identifier: &str) -> Result<&'a Node, SectionNotFound> {
    let found = tree.find(|node| node.kind == NodeKind::Section && node.has_id(identifier));
    match found {
        Some(section) => {
            log::debug!("Found section {:?} for id \"{}\"", section.attributes.ids, identifier);
            Ok(section)
        }
        None => Err(SectionNotFound {
            identifier: identifier.to_string(),
        }),
    }
}
