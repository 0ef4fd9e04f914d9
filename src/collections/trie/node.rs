//! Trie nodes and their identifiers.

use core::cmp::Ordering;
use core::fmt;
use std::boxed::Box;
use std::vec::Vec;

/// Stable index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Color of a node.
///
/// `Branch < Terminal`, which is the tie-break the structural ordering relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// A purely structural fork.
    Branch,
    /// The path from the root to this node spells a stored key.
    Terminal,
}

impl Color {
    /// Returns `true` for [`Color::Terminal`].
    pub fn is_terminal(self) -> bool {
        self == Color::Terminal
    }

    pub(crate) fn tag(self) -> &'static str {
        match self {
            Color::Branch => "branch",
            Color::Terminal => "terminal",
        }
    }
}

/// A node in the Patricia trie.
///
/// Each node contains:
/// - The label fragment on the edge from its parent.
/// - Its color.
/// - The children, as `(leading char, node)` pairs in insertion order.
/// - A back-reference to its parent (`None` for the root).
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) label: Box<[char]>,
    pub(crate) color: Color,
    pub(crate) children: Vec<(char, NodeId)>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// Creates the root: empty label, no parent.
    pub(crate) fn root() -> Self {
        Self {
            label: Box::new([]),
            color: Color::Branch,
            children: Vec::new(),
            parent: None,
        }
    }

    pub(crate) fn new(parent: NodeId, label: &[char], color: Color) -> Self {
        debug_assert!(!label.is_empty(), "only the root may carry an empty label");
        Self {
            label: Box::from(label),
            color,
            children: Vec::with_capacity(2),
            parent: Some(parent),
        }
    }

    /// The label fragment stored at this node.
    pub fn label(&self) -> &[char] {
        &self.label
    }

    /// The node color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The parent, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Number of children.
    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    /// Children in stored order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.children.iter().map(|&(_, id)| id)
    }

    pub(crate) fn first_char(&self) -> Option<char> {
        self.label.first().copied()
    }

    /// Returns `true` if `index` is inside the label and the char there is `c`.
    pub fn matches_at(&self, c: char, index: usize) -> bool {
        self.label.get(index) == Some(&c)
    }

    /// Finds the child whose label starts with `c`.
    pub fn child_starting_with(&self, c: char) -> Option<NodeId> {
        self.children
            .iter()
            .find(|&&(first, _)| first == c)
            .map(|&(_, id)| id)
    }

    /// Appends a child keyed by its leading char.
    pub(crate) fn add_child(&mut self, first: char, child: NodeId) {
        debug_assert!(
            self.child_starting_with(first).is_none(),
            "siblings must not share a leading char"
        );
        self.children.push((first, child));
    }

    /// Removes `child`, keeping the order of the others.
    pub(crate) fn remove_child(&mut self, child: NodeId) -> bool {
        match self.children.iter().position(|&(_, id)| id == child) {
            Some(pos) => {
                self.children.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Puts `new` where `old` was. The leading char is kept: callers only
    /// replace a node with one whose label starts the same way.
    pub(crate) fn replace_child(&mut self, old: NodeId, new: NodeId) -> bool {
        match self.children.iter_mut().find(|(_, id)| *id == old) {
            Some(entry) => {
                entry.1 = new;
                true
            }
            None => false,
        }
    }

    pub(crate) fn only_child(&self) -> Option<NodeId> {
        match self.children.as_slice() {
            [(_, id)] => Some(*id),
            _ => None,
        }
    }

    /// Diagnostic ordering: label, then `Branch < Terminal`, then arity.
    pub fn structural_cmp(&self, other: &Node) -> Ordering {
        self.label
            .cmp(&other.label)
            .then(self.color.cmp(&other.color))
            .then(self.children.len().cmp(&other.children.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_matches_at() {
        let node = Node::new(NodeId(0), &chars("cat"), Color::Terminal);
        assert!(node.matches_at('c', 0));
        assert!(node.matches_at('t', 2));
        assert!(!node.matches_at('a', 0));
        assert!(!node.matches_at('t', 3));
        assert!(!Node::root().matches_at('c', 0));
    }

    #[test]
    fn test_children_bookkeeping() {
        let mut node = Node::root();
        node.add_child('a', NodeId(1));
        node.add_child('b', NodeId(2));
        node.add_child('c', NodeId(3));

        assert_eq!(node.child_starting_with('b'), Some(NodeId(2)));
        assert_eq!(node.child_starting_with('z'), None);

        assert!(node.remove_child(NodeId(2)));
        assert!(!node.remove_child(NodeId(2)));
        assert_eq!(node.children().collect::<Vec<_>>(), vec![NodeId(1), NodeId(3)]);

        assert!(node.replace_child(NodeId(1), NodeId(7)));
        assert_eq!(node.child_starting_with('a'), Some(NodeId(7)));
        assert_eq!(node.children().collect::<Vec<_>>(), vec![NodeId(7), NodeId(3)]);
        assert_eq!(node.only_child(), None);

        node.remove_child(NodeId(3));
        assert_eq!(node.only_child(), Some(NodeId(7)));
    }

    #[test]
    fn test_structural_ordering() {
        let parent = NodeId(0);
        let ab_branch = Node::new(parent, &chars("ab"), Color::Branch);
        let ab_terminal = Node::new(parent, &chars("ab"), Color::Terminal);
        let b = Node::new(parent, &chars("b"), Color::Branch);

        assert_eq!(ab_branch.structural_cmp(&ab_terminal), Ordering::Less);
        assert_eq!(ab_terminal.structural_cmp(&b), Ordering::Less);

        let mut wide = ab_terminal.clone();
        wide.add_child('x', NodeId(5));
        assert_eq!(ab_terminal.structural_cmp(&wide), Ordering::Less);
        assert_eq!(wide.structural_cmp(&wide.clone()), Ordering::Equal);
    }
}
