//! Structural validation of a trie.

use core::fmt;
use std::collections::HashSet;
use std::vec::Vec;

use super::node::{Color, NodeId};
use super::patricia::PatriciaTrie;

/// A broken structural invariant, as reported by [`PatriciaTrie::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root has a parent or a non-empty label.
    MalformedRoot,
    /// A non-root node has an empty label.
    EmptyLabel(NodeId),
    /// A non-root branch has fewer than two children.
    UnderfullBranch { node: NodeId, children: usize },
    /// Two siblings start with the same char.
    DuplicateLeadingChar { parent: NodeId, first: char },
    /// The cached leading char of a child entry disagrees with the child's label.
    StaleChildKey { parent: NodeId, child: NodeId },
    /// A child does not point back at the node listing it.
    BrokenParentLink { child: NodeId, expected: NodeId },
    /// A child entry points at a free slot, or a node is reachable twice.
    DanglingChild { parent: NodeId, child: NodeId },
    /// The stored size disagrees with the number of reachable terminals.
    SizeMismatch { recorded: usize, terminals: usize },
    /// The arena holds nodes that cannot be reached from the root.
    LeakedNodes { live: usize, reachable: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRoot => f.write_str("root has a parent or a label"),
            Self::EmptyLabel(node) => write!(f, "node {node} has an empty label"),
            Self::UnderfullBranch { node, children } => {
                write!(f, "branch {node} has {children} children, expected at least 2")
            }
            Self::DuplicateLeadingChar { parent, first } => {
                write!(f, "node {parent} has several children starting with {first:?}")
            }
            Self::StaleChildKey { parent, child } => {
                write!(f, "node {parent} files child {child} under the wrong char")
            }
            Self::BrokenParentLink { child, expected } => {
                write!(f, "node {child} does not point back at its parent {expected}")
            }
            Self::DanglingChild { parent, child } => {
                write!(f, "node {parent} links to dead or shared child {child}")
            }
            Self::SizeMismatch { recorded, terminals } => {
                write!(f, "size is {recorded} but {terminals} terminal nodes are reachable")
            }
            Self::LeakedNodes { live, reachable } => {
                write!(f, "{live} nodes are live but only {reachable} are reachable")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl PatriciaTrie {
    /// Checks every structural invariant and reports the first one broken.
    ///
    /// This walks the whole trie; it is meant for tests and debugging.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let root = self.arena.get(self.root);
        if root.parent().is_some() || !root.label().is_empty() {
            return Err(InvariantViolation::MalformedRoot);
        }

        let mut seen = HashSet::new();
        let mut stack = vec![self.root];
        let mut terminals = 0;
        seen.insert(self.root);

        while let Some(id) = stack.pop() {
            let node = self.arena.get(id);
            if node.color() == Color::Terminal {
                terminals += 1;
            }
            if id != self.root {
                if node.label().is_empty() {
                    return Err(InvariantViolation::EmptyLabel(id));
                }
                if node.color() == Color::Branch && node.children_len() < 2 {
                    return Err(InvariantViolation::UnderfullBranch {
                        node: id,
                        children: node.children_len(),
                    });
                }
            }

            let mut firsts = Vec::with_capacity(node.children.len());
            for &(first, child_id) in &node.children {
                if firsts.contains(&first) {
                    return Err(InvariantViolation::DuplicateLeadingChar { parent: id, first });
                }
                firsts.push(first);

                let Some(child) = self.arena.try_get(child_id) else {
                    return Err(InvariantViolation::DanglingChild { parent: id, child: child_id });
                };
                if !seen.insert(child_id) {
                    return Err(InvariantViolation::DanglingChild { parent: id, child: child_id });
                }
                if child.first_char() != Some(first) {
                    return Err(InvariantViolation::StaleChildKey { parent: id, child: child_id });
                }
                if child.parent() != Some(id) {
                    return Err(InvariantViolation::BrokenParentLink {
                        child: child_id,
                        expected: id,
                    });
                }
                stack.push(child_id);
            }
        }

        if terminals != self.len() {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.len(),
                terminals,
            });
        }
        if seen.len() != self.arena.live() {
            return Err(InvariantViolation::LeakedNodes {
                live: self.arena.live(),
                reachable: seen.len(),
            });
        }
        Ok(())
    }
}
