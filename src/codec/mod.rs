//! Flat record codec for radix trees
//!
//! A tree is exported as a list of `(parent_id, fragment, terminal)` records
//! in breadth-first discovery order. Every non-root node gets an id counting
//! from 1, and the root is id 0. Import replays the list in that same order;
//! any other ordering is rejected or yields a different tree.

mod record;

pub use record::{from_rows, to_rows, NodeId, Record, Row};

use crate::trie::{Node, RadixTree};
use crate::{Error, Result};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Export every non-root node breadth-first
pub fn export(tree: &RadixTree) -> Vec<Record> {
    let mut records = Vec::new();
    let mut queue = VecDeque::from([(tree.root(), 0)]);

    while let Some((node, id)) = queue.pop_front() {
        for child in node.children() {
            records.push(Record::new(id, child.fragment(), child.is_terminal()));
            queue.push_back((child, records.len() as NodeId));
        }
    }

    debug!(records = records.len(), "exported tree");
    records
}

/// A node whose children are still referenced by id
struct PendingNode {
    fragment: String,
    terminal: bool,
    children: Vec<usize>,
}

/// Rebuild a tree from records in export order
///
/// Fails on the first record whose parent has not been seen yet, or that
/// would break the node invariants. No partial tree is returned.
pub fn import(records: impl IntoIterator<Item = Record>) -> Result<RadixTree> {
    let mut pending = vec![PendingNode {
        fragment: String::new(),
        terminal: false,
        children: Vec::new(),
    }];

    for record in records {
        let id = pending.len();
        let parent = usize::try_from(record.parent_id)
            .ok()
            .filter(|&parent| parent < id);
        let Some(parent) = parent else {
            warn!(id, parent_id = record.parent_id, "record references unknown parent");
            return Err(Error::UnknownParent {
                id: id as NodeId,
                parent_id: record.parent_id,
            });
        };

        let Some(first) = record.fragment.chars().next() else {
            return Err(Error::Corruption(format!(
                "Record {} has an empty fragment",
                id
            )));
        };
        let clash = pending[parent]
            .children
            .iter()
            .any(|&sibling| pending[sibling].fragment.starts_with(first));
        if clash {
            return Err(Error::Corruption(format!(
                "Record {} starts with '{}' like one of its siblings",
                id, first
            )));
        }

        pending[parent].children.push(id);
        pending.push(PendingNode {
            fragment: record.fragment,
            terminal: record.terminal,
            children: Vec::new(),
        });
    }

    debug!(records = pending.len() - 1, "importing tree");

    // Children always carry larger ids than their parent, so assemble from the back
    let mut built: Vec<Option<Node>> = (0..pending.len()).map(|_| None).collect();
    for (id, node) in pending.into_iter().enumerate().rev() {
        let children = node
            .children
            .iter()
            .map(|&child| {
                built[child]
                    .take()
                    .ok_or_else(|| Error::Corruption(format!("Node {} claimed twice", child)))
            })
            .collect::<Result<Vec<_>>>()?;
        built[id] = Some(Node::with_children(node.fragment, node.terminal, children));
    }

    let root = built
        .first_mut()
        .and_then(Option::take)
        .ok_or_else(|| Error::Corruption("Root node missing".into()))?;
    Ok(RadixTree::from_root(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> RadixTree {
        RadixTree::from_strings(["mom", "mom", "monk", "tree", "three"])
    }

    #[test]
    fn test_export_breadth_first() {
        let records = export(&scenario_a());

        assert_eq!(
            records,
            vec![
                Record::new(0, "mo", false),
                Record::new(0, "t", false),
                Record::new(1, "m", true),
                Record::new(1, "nk", true),
                Record::new(2, "ree", true),
                Record::new(2, "hree", true),
            ]
        );
    }

    #[test]
    fn test_export_empty_tree() {
        assert!(export(&RadixTree::new()).is_empty());
        assert_eq!(import(Vec::new()).unwrap(), RadixTree::new());
    }

    #[test]
    fn test_import_restores_structure() {
        let tree = scenario_a();
        let restored = import(export(&tree)).unwrap();

        assert_eq!(restored, tree);
        assert_eq!(restored.len(), 4);
        assert!(restored.contains("monk"));
    }

    #[test]
    fn test_import_unknown_parent() {
        let records = vec![Record::new(0, "a", true), Record::new(5, "b", true)];

        match import(records) {
            Err(Error::UnknownParent { id, parent_id }) => {
                assert_eq!(id, 2);
                assert_eq!(parent_id, 5);
            }
            other => panic!("expected UnknownParent, got {:?}", other),
        }
    }

    #[test]
    fn test_import_forward_reference() {
        // A record may not point at itself or at a later record
        let records = vec![Record::new(1, "a", true)];
        assert!(matches!(
            import(records),
            Err(Error::UnknownParent { id: 1, parent_id: 1 })
        ));
    }

    #[test]
    fn test_import_rejects_empty_fragment() {
        let records = vec![Record::new(0, "", true)];
        assert!(matches!(import(records), Err(Error::Corruption(_))));
    }

    #[test]
    fn test_import_rejects_sibling_clash() {
        let records = vec![Record::new(0, "ab", true), Record::new(0, "ac", true)];
        assert!(matches!(import(records), Err(Error::Corruption(_))));
    }
}
