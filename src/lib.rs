//! # radix_db
//!
//! A compressed prefix tree (radix tree) for storing strings and answering
//! hierarchical prefix queries.
//!
//! ## Core Concepts
//!
//! - **Nodes**: Each node owns a fragment; fragments along a path spell a string
//! - **Terminal flags**: Mark which paths are stored strings
//! - **Prefix queries**: Stored prefixes of a target (`parents`) and stored
//!   extensions of it (`kids`), plus structural variants that report every node
//! - **Records**: A breadth-first `(parent_id, fragment, terminal)` table for
//!   export and import
//!
//! ## Example
//!
//! ```
//! use radix_db::RadixTree;
//!
//! let tree = RadixTree::from_strings(["mother", "mot", "fuse", "fusing"]);
//! assert!(tree.contains("mot"));
//! assert_eq!(tree.kids("mot"), vec!["mother"]);
//! assert_eq!(tree.parents("mothers"), vec!["mot", "mother"]);
//!
//! let restored = RadixTree::from_records(tree.export())?;
//! assert_eq!(restored.len(), 4);
//! # Ok::<(), radix_db::Error>(())
//! ```

pub mod codec;
pub mod store;
pub mod trie;

mod error;

pub use codec::{NodeId, Record, Row};
pub use error::{Error, Result};
pub use store::{load_tree, save_tree, Checksum, RecordFormat};
pub use trie::{Iter, Node, RadixTree, Source};

/// Record file version for format compatibility
pub const VERSION: u32 = 1;

/// Magic bytes for file identification
pub const MAGIC: &[u8; 8] = b"RADIX_DB";
