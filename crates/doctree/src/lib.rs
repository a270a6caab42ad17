// crates/doctree/src/lib.rs

//! Ordered document tree shared by the markup parser and the extractor
//! crates.
//!
//! Nodes are assembled bottom-up by a parser and only traversed afterwards.
//! Kinds map onto the usual docutils tag names (`section`,
//! `literal_block`, ...) via [`NodeKind::tagname`].

mod id;
mod node;
mod traverse;

pub use id::{make_id, normalize_name};
pub use node::{Attributes, Node, NodeKind};
pub use traverse::Traverse;
