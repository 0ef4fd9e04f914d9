//! Input sequences accepted by the trie.

use std::borrow::Cow;
use std::boxed::Box;
use std::string::String;
use std::vec::Vec;

/// An ordered sequence of characters that can be used as a trie key.
///
/// The trie walks keys character by character and needs random access to the
/// unconsumed suffix, so implementors hand out a contiguous `[char]` view.
/// Sequences that are already stored as chars are borrowed; UTF-8 strings are
/// decoded once per operation.
pub trait CharSequence {
    /// Returns the characters of this sequence.
    fn as_chars(&self) -> Cow<'_, [char]>;
}

impl CharSequence for str {
    fn as_chars(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl CharSequence for String {
    fn as_chars(&self) -> Cow<'_, [char]> {
        self.as_str().as_chars()
    }
}

impl CharSequence for Box<str> {
    fn as_chars(&self) -> Cow<'_, [char]> {
        (**self).as_chars()
    }
}

impl CharSequence for Cow<'_, str> {
    fn as_chars(&self) -> Cow<'_, [char]> {
        self.as_ref().as_chars()
    }
}

impl CharSequence for [char] {
    fn as_chars(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self)
    }
}

impl CharSequence for Vec<char> {
    fn as_chars(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<const N: usize> CharSequence for [char; N] {
    fn as_chars(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: CharSequence + ?Sized> CharSequence for &T {
    fn as_chars(&self) -> Cow<'_, [char]> {
        (**self).as_chars()
    }
}
