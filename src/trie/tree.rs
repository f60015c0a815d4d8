//! Radix tree implementation

use super::{Iter, Node};
use crate::codec::{self, Record};
use crate::Result;
use tracing::trace;

/// Input for [`RadixTree::build`]
///
/// The variant decides how the data is read: raw strings are inserted one by
/// one, records are replayed as an exported node table.
#[derive(Clone, Debug)]
pub enum Source {
    /// Strings to insert; empty strings are skipped
    Strings(Vec<String>),
    /// Records in the breadth-first order produced by [`RadixTree::export`]
    Records(Vec<Record>),
}

/// A compressed prefix tree over strings
///
/// The root carries an empty fragment and is never terminal, so the empty
/// string is never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadixTree {
    root: Node,
}

impl RadixTree {
    /// Create an empty tree
    pub fn new() -> Self {
        RadixTree {
            root: Node::default(),
        }
    }

    /// Build a tree by inserting every string of `data`
    pub fn from_strings<I, S>(data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = RadixTree::new();
        tree.extend(data);
        tree
    }

    /// Rebuild a tree from an exported record list
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self> {
        codec::import(records)
    }

    /// Build a tree from either raw strings or exported records
    pub fn build(source: Source) -> Result<Self> {
        match source {
            Source::Strings(strings) => Ok(RadixTree::from_strings(strings)),
            Source::Records(records) => RadixTree::from_records(records),
        }
    }

    pub(crate) fn from_root(root: Node) -> Self {
        RadixTree { root }
    }

    /// The root node (empty fragment, never terminal)
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Insert a string. Empty strings and strings already stored are no-ops.
    pub fn insert(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        let mut rest = s;

        loop {
            let Some(index) = head(rest).and_then(|h| node.position_with_prefix(h)) else {
                // Nothing shares the first character
                trace!(fragment = rest, "append leaf");
                node.append_leaf(rest, true);
                return;
            };

            let child = node.child_mut(index);
            let common = common_prefix_len(child.fragment(), rest);

            if common == child.fragment().len() {
                if common == rest.len() {
                    child.set_terminal(true);
                    return;
                }
                rest = &rest[common..];
                node = child;
                continue;
            }

            trace!(fragment = child.fragment(), at = common, "split node");
            child.split_at(common);
            if common == rest.len() {
                child.set_terminal(true);
            } else {
                child.set_terminal(false);
                child.append_leaf(&rest[common..], true);
            }
            return;
        }
    }

    /// Check whether `target` is a stored string
    pub fn contains(&self, target: &str) -> bool {
        if target.is_empty() {
            return false;
        }
        let (node, consumed) = self.descend(target, |_, _| {});
        consumed == target.len() && node.is_terminal()
    }

    /// Stored strings that are proper prefixes of `target`, shortest first
    pub fn parents(&self, target: &str) -> Vec<String> {
        let mut output = Vec::new();
        self.descend(without_last_char(target), |node, path| {
            if node.is_terminal() {
                output.push(path.to_string());
            }
        });
        output
    }

    /// Stored strings that have `target` as a proper prefix
    pub fn kids(&self, target: &str) -> Vec<String> {
        self.below(target, true)
    }

    /// Paths of every node boundary crossed on the way to `target`,
    /// excluding `target` itself
    pub fn structural_parents(&self, target: &str) -> Vec<String> {
        let mut output = Vec::new();
        self.descend(without_last_char(target), |_, path| {
            output.push(path.to_string());
        });
        output
    }

    /// Paths of every node that strictly extends `target`, stored or not
    pub fn structural_kids(&self, target: &str) -> Vec<String> {
        self.below(target, false)
    }

    /// Iterate over stored strings in depth-first, insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    /// Number of stored strings, counted by walking the whole tree
    pub fn len(&self) -> usize {
        count(&self.root, &|node: &Node| node.is_terminal())
    }

    /// Check if no string is stored
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Number of nodes, excluding the root
    pub fn node_count(&self) -> usize {
        count(&self.root, &|_: &Node| true) - 1
    }

    /// Export the tree as a breadth-first record list
    pub fn export(&self) -> Vec<Record> {
        codec::export(self)
    }

    // === Internal helpers ===

    /// Consume `target` through whole fragments, calling `visit` with each
    /// node reached and the path so far. Returns the last node reached and
    /// the number of bytes consumed.
    fn descend<'a>(
        &'a self,
        target: &str,
        mut visit: impl FnMut(&'a Node, &str),
    ) -> (&'a Node, usize) {
        let mut node = &self.root;
        let mut consumed = 0;

        while consumed < target.len() {
            let Some(child) = next_boundary(node, &target[consumed..]) else {
                break;
            };
            consumed += child.fragment().len();
            node = child;
            visit(node, &target[..consumed]);
        }

        (node, consumed)
    }

    fn below(&self, target: &str, terminal_only: bool) -> Vec<String> {
        let mut output = Vec::new();
        if target.is_empty() {
            return output;
        }

        let (node, consumed) = self.descend(target, |_, _| {});
        let mut path = target[..consumed].to_string();

        if consumed == target.len() {
            collect_below(node, &mut path, terminal_only, &mut output);
        } else if let Some(anchor) = node.child_with_prefix(&target[consumed..]) {
            // target ends inside this fragment, so the anchor itself extends it
            path.push_str(anchor.fragment());
            if anchor.is_terminal() || !terminal_only {
                output.push(path.clone());
            }
            collect_below(anchor, &mut path, terminal_only, &mut output);
        }

        output
    }
}

impl<S: AsRef<str>> FromIterator<S> for RadixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        RadixTree::from_strings(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for RadixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.insert(s.as_ref());
        }
    }
}

impl<'a> IntoIterator for &'a RadixTree {
    type Item = String;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The child whose whole fragment is a prefix of `rest`
fn next_boundary<'a>(node: &'a Node, rest: &str) -> Option<&'a Node> {
    let candidate = node.child_with_prefix(head(rest)?)?;
    let fragment = rest.get(..candidate.fragment().len())?;
    node.child_exact(fragment)
}

fn collect_below(node: &Node, path: &mut String, terminal_only: bool, output: &mut Vec<String>) {
    for child in node.children() {
        let len = path.len();
        path.push_str(child.fragment());
        if child.is_terminal() || !terminal_only {
            output.push(path.clone());
        }
        collect_below(child, path, terminal_only, output);
        path.truncate(len);
    }
}

fn count(node: &Node, pred: &impl Fn(&Node) -> bool) -> usize {
    let own = usize::from(pred(node));
    own + node
        .children()
        .iter()
        .map(|child| count(child, pred))
        .sum::<usize>()
}

/// The first character of `s` as a string slice
fn head(s: &str) -> Option<&str> {
    s.chars().next().map(|c| &s[..c.len_utf8()])
}

fn without_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Byte length of the longest common prefix, on a char boundary
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((i, x), _)| i + x.len_utf8())
}
