//! Borrowed, read-only views of trie nodes.

use core::cmp::Ordering;
use core::fmt;
use std::string::String;

use super::node::{Color, Node, NodeId};
use super::patricia::PatriciaTrie;

/// A read-only handle to one node of a [`PatriciaTrie`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    trie: &'a PatriciaTrie,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(trie: &'a PatriciaTrie, id: NodeId) -> Self {
        Self { trie, id }
    }

    /// The underlying node.
    pub fn as_node(&self) -> &'a Node {
        self.trie.arena.get(self.id)
    }

    /// Arena index of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns `true` for the root.
    pub fn is_root(&self) -> bool {
        self.id == self.trie.root
    }

    /// The label fragment as a string.
    pub fn label(&self) -> String {
        self.as_node().label().iter().collect()
    }

    /// The label fragment as chars.
    pub fn label_chars(&self) -> &'a [char] {
        self.as_node().label()
    }

    /// The node color.
    pub fn color(&self) -> Color {
        self.as_node().color()
    }

    /// Number of children.
    pub fn children_len(&self) -> usize {
        self.as_node().children_len()
    }

    /// Children in stored order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'a>> + 'a {
        let trie = self.trie;
        self.as_node().children().map(move |id| NodeRef::new(trie, id))
    }

    /// The parent, `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.as_node().parent().map(|id| NodeRef::new(self.trie, id))
    }

    /// The full string this node represents: the labels from the root down.
    pub fn key(&self) -> String {
        let mut fragments = std::vec::Vec::new();
        let mut current = Some(*self);
        while let Some(node) = current {
            fragments.push(node.label_chars());
            current = node.parent();
        }
        fragments.iter().rev().flat_map(|f| f.iter()).collect()
    }

    /// Label, then `Branch < Terminal`, then arity.
    pub fn structural_cmp(&self, other: &NodeRef<'_>) -> Ordering {
        self.as_node().structural_cmp(other.as_node())
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("label", &self.label())
            .field("color", &self.color())
            .field("children", &self.children_len())
            .finish()
    }
}
