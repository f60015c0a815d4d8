//! Compressed prefix tree (radix tree) over strings
//!
//! Strings are stored by sharing common prefixes:
//! - Each node owns a fragment, and the path of fragments from the root spells a candidate string
//! - A terminal flag marks which candidates are actually stored
//! - Sibling fragments never share a first character, so every descent is deterministic

mod iter;
mod node;
mod tree;

pub use iter::Iter;
pub use node::Node;
pub use tree::{RadixTree, Source};
