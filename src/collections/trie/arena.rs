//! Slot arena owning every trie node.
//!
//! Nodes are addressed by [`NodeId`]. Released slots are chained into a free
//! list and handed out again by the next allocation, so a long run of
//! add/remove cycles does not grow the backing storage.

use std::vec::Vec;

use super::node::{Node, NodeId};

/// A slot in the trie arena.
/// Either an occupied node or a link to the next free slot.
#[derive(Debug, Clone)]
pub(crate) enum NodeSlot {
    Occupied(Node),
    Free(Option<NodeId>),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    slots: Vec<NodeSlot>,
    free_head: Option<NodeId>,
    live: usize,
}

impl NodeArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            live: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Total slots, free ones included.
    #[cfg(test)]
    pub(crate) fn capacity_used(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        self.live += 1;
        match self.free_head {
            Some(id) => {
                let slot = &mut self.slots[id.0];
                let NodeSlot::Free(next) = *slot else {
                    panic!("free list points at occupied slot {id}");
                };
                self.free_head = next;
                *slot = NodeSlot::Occupied(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(NodeSlot::Occupied(node));
                id
            }
        }
    }

    /// Frees the slot and returns the node it held.
    pub(crate) fn release(&mut self, id: NodeId) -> Node {
        let slot = core::mem::replace(&mut self.slots[id.0], NodeSlot::Free(self.free_head));
        match slot {
            NodeSlot::Occupied(node) => {
                self.free_head = Some(id);
                self.live -= 1;
                node
            }
            NodeSlot::Free(next) => {
                self.slots[id.0] = NodeSlot::Free(next);
                panic!("double release of trie node {id}");
            }
        }
    }

    pub(crate) fn try_get(&self, id: NodeId) -> Option<&Node> {
        match self.slots.get(id.0) {
            Some(NodeSlot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        self.try_get(id)
            .unwrap_or_else(|| panic!("trie node {id} is not live"))
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots.get_mut(id.0) {
            Some(NodeSlot::Occupied(node)) => node,
            _ => panic!("trie node {id} is not live"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::trie::node::Color;

    #[test]
    fn test_release_recycles_slots() {
        let mut arena = NodeArena::with_capacity(4);
        let root = arena.alloc(Node::root());
        let a = arena.alloc(Node::new(root, &['a'], Color::Terminal));
        let b = arena.alloc(Node::new(root, &['b'], Color::Terminal));
        assert_eq!(arena.live(), 3);

        let released = arena.release(a);
        assert_eq!(released.label(), &['a']);
        assert_eq!(arena.live(), 2);
        assert!(arena.try_get(a).is_none());

        let c = arena.alloc(Node::new(root, &['c'], Color::Terminal));
        assert_eq!(c, a);
        assert_eq!(arena.capacity_used(), 3);
        assert_eq!(arena.get(c).label(), &['c']);
        assert_eq!(arena.get(b).label(), &['b']);
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut arena = NodeArena::with_capacity(0);
        let root = arena.alloc(Node::root());
        let ids: Vec<_> = ['a', 'b', 'c']
            .iter()
            .map(|&c| arena.alloc(Node::new(root, &[c], Color::Terminal)))
            .collect();
        arena.release(ids[0]);
        arena.release(ids[2]);

        assert_eq!(arena.alloc(Node::new(root, &['x'], Color::Branch)), ids[2]);
        assert_eq!(arena.alloc(Node::new(root, &['y'], Color::Branch)), ids[0]);
        assert_eq!(arena.capacity_used(), 4);
    }

    #[test]
    #[should_panic(expected = "not live")]
    fn test_access_to_released_slot_panics() {
        let mut arena = NodeArena::with_capacity(0);
        let root = arena.alloc(Node::root());
        let a = arena.alloc(Node::new(root, &['a'], Color::Terminal));
        arena.release(a);
        let _ = arena.get(a);
    }
}
