//! The prefix-consuming walk shared by every trie operation.

use super::arena::NodeArena;
use super::node::NodeId;

/// Where a walk over the input stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkEnd {
    /// All input consumed exactly at the end of `node`'s label.
    Exact(NodeId),
    /// Stopped inside `node`'s label: `split_at` label chars matched and
    /// `consumed` input chars matched in total. `consumed` may equal the input
    /// length, in which case the input ends mid-label.
    Split {
        node: NodeId,
        split_at: usize,
        consumed: usize,
    },
    /// `node`'s label fully matched but no child starts with the next input
    /// char. `consumed` is always shorter than the input.
    Extend { node: NodeId, consumed: usize },
}

/// Walks `key` down from `root`.
pub(crate) fn walk(arena: &NodeArena, root: NodeId, key: &[char]) -> WalkEnd {
    let mut node = root;
    let mut cursor = 0;
    let mut consumed = 0;

    while let Some(&c) = key.get(consumed) {
        let current = arena.get(node);
        if current.matches_at(c, cursor) {
            cursor += 1;
            consumed += 1;
        } else if cursor < current.label().len() {
            return WalkEnd::Split {
                node,
                split_at: cursor,
                consumed,
            };
        } else if let Some(child) = current.child_starting_with(c) {
            // the child's first char is `c`
            node = child;
            cursor = 1;
            consumed += 1;
        } else {
            return WalkEnd::Extend { node, consumed };
        }
    }

    if cursor == arena.get(node).label().len() {
        WalkEnd::Exact(node)
    } else {
        WalkEnd::Split {
            node,
            split_at: cursor,
            consumed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::trie::node::{Color, Node};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // root -> "ca" -> { "r", "t" }
    fn fixture() -> (NodeArena, NodeId, NodeId, NodeId) {
        let mut arena = NodeArena::with_capacity(4);
        let root = arena.alloc(Node::root());
        let ca = arena.alloc(Node::new(root, &chars("ca"), Color::Branch));
        arena.get_mut(root).add_child('c', ca);
        let r = arena.alloc(Node::new(ca, &chars("r"), Color::Terminal));
        arena.get_mut(ca).add_child('r', r);
        let t = arena.alloc(Node::new(ca, &chars("t"), Color::Terminal));
        arena.get_mut(ca).add_child('t', t);
        (arena, root, ca, r)
    }

    #[test]
    fn test_exact_boundaries() {
        let (arena, root, ca, r) = fixture();
        assert_eq!(walk(&arena, root, &[]), WalkEnd::Exact(root));
        assert_eq!(walk(&arena, root, &chars("ca")), WalkEnd::Exact(ca));
        assert_eq!(walk(&arena, root, &chars("car")), WalkEnd::Exact(r));
    }

    #[test]
    fn test_stops_mid_label() {
        let (arena, root, ca, _) = fixture();
        assert_eq!(
            walk(&arena, root, &chars("c")),
            WalkEnd::Split {
                node: ca,
                split_at: 1,
                consumed: 1
            }
        );
        assert_eq!(
            walk(&arena, root, &chars("cob")),
            WalkEnd::Split {
                node: ca,
                split_at: 1,
                consumed: 1
            }
        );
    }

    #[test]
    fn test_stops_without_child() {
        let (arena, root, ca, r) = fixture();
        assert_eq!(
            walk(&arena, root, &chars("dog")),
            WalkEnd::Extend {
                node: root,
                consumed: 0
            }
        );
        assert_eq!(
            walk(&arena, root, &chars("cab")),
            WalkEnd::Extend {
                node: ca,
                consumed: 2
            }
        );
        assert_eq!(
            walk(&arena, root, &chars("cars")),
            WalkEnd::Extend {
                node: r,
                consumed: 3
            }
        );
    }
}
