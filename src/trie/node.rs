//! Trie node type

/// A node in the radix tree
///
/// Each node owns:
/// - a fragment of characters, the part of a key contributed by this node
/// - a terminal flag, set when the path from the root down to this node is a stored string
/// - an ordered list of children, kept in insertion order
///
/// Sibling fragments never share a first character, so at most one child
/// can continue any given path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    fragment: String,
    terminal: bool,
    children: Vec<Node>,
}

impl Node {
    /// Create a childless node
    pub fn new(fragment: impl Into<String>, terminal: bool) -> Self {
        Node {
            fragment: fragment.into(),
            terminal,
            children: Vec::new(),
        }
    }

    /// The fragment owned by this node
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Whether the path ending at this node is a stored string
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Children in insertion order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Find the child whose fragment is exactly `s`
    pub fn child_exact(&self, s: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.fragment == s)
    }

    /// Find the child whose fragment begins with `s`
    pub fn child_with_prefix(&self, s: &str) -> Option<&Node> {
        self.position_with_prefix(s).map(|i| &self.children[i])
    }

    /// Append a new leaf child and return it
    pub fn append_leaf(&mut self, s: impl Into<String>, terminal: bool) -> &mut Node {
        let index = self.children.len();
        self.children.push(Node::new(s, terminal));
        &mut self.children[index]
    }

    pub(crate) fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    pub(crate) fn position_with_prefix(&self, s: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.fragment.starts_with(s))
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> &mut Node {
        &mut self.children[index]
    }

    /// Split this node's fragment at byte offset `at`.
    ///
    /// The suffix moves into a new node that takes over this node's terminal
    /// flag and children; that node becomes the only child. `at` must fall on
    /// a char boundary strictly inside the fragment.
    pub(crate) fn split_at(&mut self, at: usize) {
        let suffix = Node {
            fragment: self.fragment.split_off(at),
            terminal: self.terminal,
            children: std::mem::take(&mut self.children),
        };
        self.children.push(suffix);
    }

    pub(crate) fn with_children(fragment: String, terminal: bool, children: Vec<Node>) -> Self {
        Node {
            fragment,
            terminal,
            children,
        }
    }
}
