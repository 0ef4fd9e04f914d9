//! The trie and its mutation algorithms.

use core::fmt;
use std::vec::Vec;

use super::arena::NodeArena;
use super::iter::Keys;
use super::node::{Color, Node, NodeId};
use super::sequence::CharSequence;
use super::view::NodeRef;
use super::walk::{walk, WalkEnd};

/// A Patricia trie (compressed radix tree) over character sequences.
///
/// Common prefixes are stored once on a shared path and every non-root
/// branching node has at least two children, so no node exists only to carry
/// a single-character transition.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]; splitting a
/// label or fusing a node into its only child rewrites indices instead of
/// pointers.
///
/// The empty key is represented by the root itself being
/// [`Terminal`](Color::Terminal).
///
/// # Examples
///
/// ```
/// use patricia::PatriciaTrie;
///
/// let mut trie = PatriciaTrie::new();
/// assert!(trie.add("car"));
/// assert!(trie.add("cat"));
/// assert!(!trie.add("car"));
///
/// assert!(trie.contains("cat"));
/// assert!(!trie.contains("ca"));
/// assert_eq!(trie.size(), 2);
/// ```
#[derive(Clone)]
pub struct PatriciaTrie {
    pub(crate) arena: NodeArena,
    pub(crate) root: NodeId,
    len: usize,
}

impl PatriciaTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty trie with room for `capacity` nodes before the arena
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = NodeArena::with_capacity(capacity.max(1));
        let root = arena.alloc(Node::root());
        Self { arena, root, len: 0 }
    }

    /// Number of stored keys.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.alloc(Node::root());
        self.len = 0;
    }

    /// Read-only view of the root.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.root)
    }

    /// Iterates over the stored keys, parents before their descendants.
    pub fn iter(&self) -> Keys<'_> {
        Keys::new(self)
    }

    /// Adds `key`. Returns `false` if it was already present, in which case
    /// nothing changes.
    pub fn add<K: CharSequence + ?Sized>(&mut self, key: &K) -> bool {
        let chars = key.as_chars();
        self.insert_node(&chars).is_some()
    }

    /// Returns `true` if `key` was added and not removed since.
    pub fn contains<K: CharSequence + ?Sized>(&self, key: &K) -> bool {
        let chars = key.as_chars();
        self.lookup(&chars)
            .is_some_and(|id| self.arena.get(id).color.is_terminal())
    }

    /// Returns the node that ends exactly at `key`, whatever its color.
    ///
    /// Structural forks are reachable this way too, which makes it useful for
    /// inspecting the shape of the trie.
    pub fn node<K: CharSequence + ?Sized>(&self, key: &K) -> Option<NodeRef<'_>> {
        let chars = key.as_chars();
        self.lookup(&chars).map(|id| NodeRef::new(self, id))
    }

    /// Removes `key`. Returns `false` if it was not present, in which case
    /// nothing changes.
    pub fn remove<K: CharSequence + ?Sized>(&mut self, key: &K) -> bool {
        let chars = key.as_chars();
        let Some(id) = self.lookup(&chars) else {
            return false;
        };
        if !self.arena.get(id).color.is_terminal() {
            return false;
        }

        self.arena.get_mut(id).color = Color::Branch;
        debug_event!(node = %id, "demoted to branch");

        if id != self.root {
            let parent = self.parent_of(id);
            match self.arena.get(id).children_len() {
                0 => self.prune(id, parent),
                1 => self.fuse(id),
                _ => {}
            }
            self.compact_from(parent);
        }

        self.len -= 1;
        true
    }

    pub(crate) fn lookup(&self, key: &[char]) -> Option<NodeId> {
        let end = walk(&self.arena, self.root, key);
        trace_event!(?end, "lookup walk");
        match end {
            WalkEnd::Exact(id) => Some(id),
            _ => None,
        }
    }

    /// Inserts `key` and returns the node now marking it, or `None` if it was
    /// already present.
    pub(crate) fn insert_node(&mut self, key: &[char]) -> Option<NodeId> {
        let end = walk(&self.arena, self.root, key);
        trace_event!(?end, "insert walk");

        let added = match end {
            WalkEnd::Exact(id) => {
                let node = self.arena.get_mut(id);
                if node.color.is_terminal() {
                    return None;
                }
                node.color = Color::Terminal;
                debug_event!(node = %id, "promoted to terminal");
                id
            }
            WalkEnd::Extend { node, consumed } => self.attach_leaf(node, &key[consumed..]),
            WalkEnd::Split {
                node,
                split_at,
                consumed,
            } => {
                let rest = &key[consumed..];
                let color = if rest.is_empty() {
                    Color::Terminal
                } else {
                    Color::Branch
                };
                let fork = self.split(node, split_at, color);
                if rest.is_empty() {
                    fork
                } else {
                    self.attach_leaf(fork, rest)
                }
            }
        };

        self.len += 1;
        Some(added)
    }

    fn attach_leaf(&mut self, parent: NodeId, suffix: &[char]) -> NodeId {
        let leaf = self.arena.alloc(Node::new(parent, suffix, Color::Terminal));
        self.arena.get_mut(parent).add_child(suffix[0], leaf);
        debug_event!(parent = %parent, leaf = %leaf, "attached leaf");
        leaf
    }

    /// Cuts `node`'s label after `at` chars. A new fork carrying the prefix
    /// takes `node`'s place under its parent and `node` keeps the remainder as
    /// the fork's only child.
    fn split(&mut self, node: NodeId, at: usize, color: Color) -> NodeId {
        let parent = self.parent_of(node);
        let (head, tail) = {
            let label = self.arena.get(node).label();
            (Vec::from(&label[..at]), Vec::from(&label[at..]))
        };

        let fork = self.arena.alloc(Node::new(parent, &head, color));
        self.arena.get_mut(fork).add_child(tail[0], node);

        let moved = self.arena.get_mut(node);
        moved.label = tail.into_boxed_slice();
        moved.parent = Some(fork);

        self.relink(parent, node, fork);
        debug_event!(node = %node, fork = %fork, at, "split label");
        fork
    }

    fn prune(&mut self, id: NodeId, parent: NodeId) {
        if !self.arena.get_mut(parent).remove_child(id) {
            panic!("trie node {id} is missing from its parent {parent}");
        }
        self.arena.release(id);
        debug_event!(node = %id, "pruned");
    }

    /// Merges `id` into its only child; the child takes `id`'s place.
    fn fuse(&mut self, id: NodeId) {
        let parent = self.parent_of(id);
        let child = self
            .arena
            .get(id)
            .only_child()
            .unwrap_or_else(|| panic!("trie node {id} fused without a single child"));

        let node = self.arena.release(id);
        let absorbing = self.arena.get_mut(child);
        let mut label = Vec::with_capacity(node.label.len() + absorbing.label.len());
        label.extend_from_slice(&node.label);
        label.extend_from_slice(&absorbing.label);
        absorbing.label = label.into_boxed_slice();
        absorbing.parent = Some(parent);

        self.relink(parent, id, child);
        debug_event!(node = %id, into = %child, "fused");
    }

    /// Fuses single-child branches upward from `start` until the first
    /// terminal, multi-child node or the root.
    fn compact_from(&mut self, start: NodeId) {
        let mut current = start;
        while current != self.root {
            let node = self.arena.get(current);
            if node.color.is_terminal() || node.children_len() != 1 {
                break;
            }
            let parent = self.parent_of(current);
            self.fuse(current);
            current = parent;
        }
    }

    fn relink(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if !self.arena.get_mut(parent).replace_child(old, new) {
            panic!("trie node {old} is missing from its parent {parent}");
        }
    }

    fn parent_of(&self, id: NodeId) -> NodeId {
        self.arena
            .get(id)
            .parent
            .unwrap_or_else(|| panic!("non-root trie node {id} has no parent"))
    }
}

impl Default for PatriciaTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PatriciaTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: CharSequence> FromIterator<K> for PatriciaTrie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<K: CharSequence> Extend<K> for PatriciaTrie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(&key);
        }
    }
}

impl<'a> IntoIterator for &'a PatriciaTrie {
    type Item = std::string::String;
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
