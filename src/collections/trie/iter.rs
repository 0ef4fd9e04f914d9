//! Key iteration.

use std::string::String;
use std::vec::Vec;

use super::node::NodeId;
use super::patricia::PatriciaTrie;

/// Iterator over the keys of a `PatriciaTrie`.
///
/// Depth-first: a key is yielded before the keys extending it, siblings in
/// stored order.
pub struct Keys<'a> {
    trie: &'a PatriciaTrie,
    // Stack of (node, next action): 0 = yield own key, n = descend into child n - 1
    stack: Vec<(NodeId, usize)>,
    // Labels from the root down to the top of the stack
    key_buf: Vec<char>,
    remaining: usize,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(trie: &'a PatriciaTrie) -> Self {
        Self {
            trie,
            stack: vec![(trie.root, 0)],
            key_buf: Vec::new(),
            remaining: trie.len(),
        }
    }
}

impl Iterator for Keys<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let &(node_id, action) = self.stack.last()?;
            let last = self.stack.len() - 1;
            let node = self.trie.arena.get(node_id);

            if action == 0 {
                self.stack[last].1 += 1;
                if node.color().is_terminal() {
                    self.remaining -= 1;
                    return Some(self.key_buf.iter().collect());
                }
                continue;
            }

            if let Some(child_id) = node.children().nth(action - 1) {
                self.stack[last].1 += 1;
                let child = self.trie.arena.get(child_id);
                self.key_buf.extend_from_slice(child.label());
                self.stack.push((child_id, 0));
            } else {
                self.stack.pop();
                let new_len = self.key_buf.len() - node.label().len();
                self.key_buf.truncate(new_len);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Keys<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_iterator() {
        let mut trie = PatriciaTrie::new();
        trie.add("apple");
        trie.add("app");
        trie.add("banana");

        let mut items: Vec<String> = trie.iter().collect();
        // Sort for deterministic check
        items.sort();

        assert_eq!(items, vec!["app", "apple", "banana"]);
    }

    #[test]
    fn test_parents_come_first() {
        let trie: PatriciaTrie = ["abc", "ab", "a", ""].into_iter().collect();
        let keys: Vec<String> = trie.iter().collect();
        assert_eq!(keys, vec!["", "a", "ab", "abc"]);
        assert_eq!(trie.iter().len(), 4);
    }

    #[test]
    fn test_empty_trie_yields_nothing() {
        let trie = PatriciaTrie::new();
        assert_eq!(trie.iter().next(), None);
        assert_eq!((&trie).into_iter().count(), 0);
    }
}
