//! Persistence for exported trees
//!
//! The tree itself only produces and consumes record lists. This module
//! writes those lists to disk as id-bearing rows, reads them back, and
//! reads plain word lists for bulk construction.

mod checksum;
mod file;
mod words;

pub use checksum::Checksum;
pub use file::{read_rows, write_rows, RecordFile, RecordFormat};
pub use words::read_words;

use crate::codec::{from_rows, to_rows};
use crate::trie::RadixTree;
use crate::Result;
use std::path::Path;

/// Export `tree` and write it to `path`
pub fn save_tree(
    tree: &RadixTree,
    path: impl AsRef<Path>,
    format: RecordFormat,
) -> Result<Checksum> {
    write_rows(path, &to_rows(&tree.export()), format)
}

/// Read a file written by [`save_tree`] and rebuild the tree
pub fn load_tree(path: impl AsRef<Path>, format: RecordFormat) -> Result<RadixTree> {
    let file = read_rows(path, format)?;
    RadixTree::from_records(from_rows(file.rows)?)
}
