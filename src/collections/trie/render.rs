//! Text rendering of a trie.
//!
//! ```text
//! └── [branch]
//!     ├── (ca) [branch] ca
//!     │   ├── (r) [terminal] car
//!     │   └── (t) [terminal] cat
//!     └── (dog) [terminal] dog
//! ```
//!
//! The alternate form (`{:#}`) orders siblings with
//! [`NodeRef::structural_cmp`] instead of stored order.

use core::fmt;
use std::string::String;
use std::vec::Vec;

use super::patricia::PatriciaTrie;
use super::view::NodeRef;

impl fmt::Display for PatriciaTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sorted = f.alternate();
        write_node(f, self.root(), "", "", true, sorted)
    }
}

fn write_node(
    f: &mut fmt::Formatter<'_>,
    node: NodeRef<'_>,
    prefix: &str,
    parent_key: &str,
    is_tail: bool,
    sorted: bool,
) -> fmt::Result {
    let marker = if is_tail { "└── " } else { "├── " };
    let tag = node.color().tag();
    let mut key = String::from(parent_key);

    if node.is_root() {
        writeln!(f, "{prefix}{marker}[{tag}]")?;
    } else {
        let label = node.label();
        key.push_str(&label);
        writeln!(f, "{prefix}{marker}({label}) [{tag}] {key}")?;
    }

    let mut children: Vec<_> = node.children().collect();
    if sorted {
        children.sort_by(|a, b| a.structural_cmp(b));
    }

    let child_prefix = format!("{prefix}{}", if is_tail { "    " } else { "│   " });
    let last = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate() {
        write_node(f, child, &child_prefix, &key, i == last, sorted)?;
    }
    Ok(())
}
