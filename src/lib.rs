//! # `patricia` - Compressed Prefix Trees
//!
//! A Patricia trie (radix tree) storing character sequences. Shared prefixes
//! are stored once, on a single path, and the tree stays compact under every
//! mutation: each non-root branching node has at least two children.
//!
//! ## Structure
//!
//! - **Nodes** carry a label fragment, a color and their children. A
//!   [`Terminal`](collections::trie::Color::Terminal) node marks that the path
//!   from the root spells a stored key; a
//!   [`Branch`](collections::trie::Color::Branch) node is a structural fork.
//! - **The arena** owns every node. Nodes link to their parent and children by
//!   index, so splitting and fusing rewrite indices and never alias a label.
//! - **The trie** drives one prefix-consuming walk for every operation. The
//!   place where the walk stops decides how the tree is edited.
//!
//! ## Mutations
//!
//! Insertion promotes an existing fork, extends a node with a new leaf, or
//! splits a label around a new fork. Removal demotes the node, prunes it if it
//! became a childless leaf or fuses it into its only child, then fuses
//! single-child forks upward until the tree is compact again.
//!
//! ## Features
//!
//! - `tracing`: emit `trace`/`debug` events for walks and structural edits.
//!
//! ## Example
//!
//! ```rust
//! use patricia::PatriciaTrie;
//!
//! let mut trie = PatriciaTrie::new();
//! trie.add("car");
//! trie.add("cat");
//! trie.add("dog");
//! assert_eq!(trie.size(), 3);
//! assert!(!trie.contains("ca"));
//!
//! trie.remove("cat");
//! // the fork holding "ca" has been fused into "car"
//! assert_eq!(trie.node("car").map(|n| n.label()), Some("car".to_string()));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;

pub use collections::trie::{
    CharSequence, Color, InvariantViolation, Keys, NodeId, NodeRef, PatriciaTrie,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // A node id is a bare index.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());
    // Colors fit in a byte.
    assert!(mem::size_of::<Color>() == 1);
};
