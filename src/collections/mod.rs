//! Collections.
//!
//! - `trie`: Patricia trie over character sequences

pub mod trie;

pub use trie::{CharSequence, PatriciaTrie};
