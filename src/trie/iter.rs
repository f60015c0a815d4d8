//! Resumable depth-first enumeration of stored strings

use super::Node;

/// One level of the walk: a node and the index of its next unvisited child
struct Frame<'a> {
    node: &'a Node,
    next: usize,
    /// Length of the path up to and including this node's fragment
    path_len: usize,
}

/// Iterator over the stored strings of a [`RadixTree`](super::RadixTree)
///
/// The walk state lives in an explicit stack, so each call to `next` picks
/// up where the last one stopped. Dropping the iterator early is fine; it
/// only borrows the tree.
pub struct Iter<'a> {
    stack: Vec<Frame<'a>>,
    path: String,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Iter {
            stack: vec![Frame {
                node: root,
                next: 0,
                path_len: 0,
            }],
            path: String::new(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;

            let Some(child) = node.children().get(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            self.path.truncate(frame.path_len);
            self.path.push_str(child.fragment());
            self.stack.push(Frame {
                node: child,
                next: 0,
                path_len: self.path.len(),
            });

            if child.is_terminal() {
                return Some(self.path.clone());
            }
        }
    }
}
