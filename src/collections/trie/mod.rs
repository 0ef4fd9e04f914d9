//! Patricia trie (compressed radix tree) over character sequences.
//!
//! Nodes are kept in a slot arena and linked by [`NodeId`]. Inserting may split
//! a node's label around a new fork; removing may prune a leaf and fuse
//! single-child forks into their child, so every non-root branch keeps at
//! least two children.

mod arena;
pub mod iter;
pub mod node;
pub mod patricia;
mod render;
pub mod sequence;
pub mod validate;
pub mod view;
mod walk;

pub use iter::Keys;
pub use node::{Color, Node, NodeId};
pub use patricia::PatriciaTrie;
pub use sequence::CharSequence;
pub use validate::InvariantViolation;
pub use view::NodeRef;
