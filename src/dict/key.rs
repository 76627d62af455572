//! Validated keys and the prefix matching every traversal is built on.

use std::fmt;

use crate::error::{DictError, Result};

/// A run of lowercase ASCII letters.
///
/// The root of a dictionary carries the empty key; every other key is
/// non-empty and produced by `Key::parse` or by splitting/joining keys that were.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(String);

impl Key {
    pub fn new() -> Key {
        Key(String::new())
    }

    /// Validate `word`, folding ASCII uppercase to lowercase.
    pub fn parse(word: &str) -> Result<Key> {
        if word.is_empty() {
            return Err(DictError::EmptyWord);
        }
        let mut key = String::with_capacity(word.len());
        for (pos, ch) in word.chars().enumerate() {
            if !ch.is_ascii_alphabetic() {
                return Err(DictError::InvalidChar {
                    word: word.to_owned(),
                    ch,
                    pos,
                });
            }
            key.push(ch.to_ascii_lowercase());
        }
        Ok(Key(key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Child slot selected by the letter at `idx`.
    pub fn bucket_at(&self, idx: usize) -> usize {
        bucket(self.as_bytes()[idx])
    }

    /// Child slot selected by the first letter.
    pub fn bucket(&self) -> usize {
        self.bucket_at(0)
    }

    /// Owned copy of `self[idx..]`.
    pub fn suffix(&self, idx: usize) -> Key {
        Key(self.0[idx..].to_owned())
    }

    /// Truncate `self` to `self[..idx]` and return the removed tail.
    pub fn split(&mut self, idx: usize) -> Key {
        Key(self.0.split_off(idx))
    }

    /// Concatenate `self` and `other`.
    pub fn join(mut self, other: &Key) -> Key {
        self.0.push_str(&other.0);
        self
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Offset of a lowercase letter from `'a'`.
pub fn bucket(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// Length of the shared leading run of `a` and `b`, and what is left of each
/// after it.
pub fn common_prefix<'a, 'b>(a: &'a [u8], b: &'b [u8]) -> (usize, &'a [u8], &'b [u8]) {
    let len = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    (len, &a[len..], &b[len..])
}

/// How the unmatched remainder of a query relates to a node's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    /// The two are identical.
    Full,
    /// They diverge after this many shared letters, both having more left.
    Partial(usize),
    /// The query ends inside the node's key.
    FirstPrefix,
    /// The node's key ends inside the query.
    SecondPrefix,
}

pub fn match_keys(query: &[u8], node_key: &[u8]) -> KeyMatch {
    match common_prefix(query, node_key) {
        (_, [], []) => KeyMatch::Full,
        (_, [], _) => KeyMatch::FirstPrefix,
        (_, _, []) => KeyMatch::SecondPrefix,
        (len, _, _) => KeyMatch::Partial(len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_prefix_lengths() {
        assert_eq!(common_prefix(b"answer", b"any"), (2, &b"swer"[..], &b"y"[..]));
        assert_eq!(common_prefix(b"by", b"bye"), (2, &b""[..], &b"e"[..]));
        assert_eq!(common_prefix(b"hero", b"her"), (3, &b"o"[..], &b""[..]));
        assert_eq!(common_prefix(b"the", b"the"), (3, &b""[..], &b""[..]));
        assert_eq!(common_prefix(b"abc", b"xyz"), (0, &b"abc"[..], &b"xyz"[..]));
        assert_eq!(common_prefix(b"", b"a"), (0, &b""[..], &b"a"[..]));
    }

    #[test]
    fn match_outcomes() {
        assert_eq!(match_keys(b"the", b"the"), KeyMatch::Full);
        assert_eq!(match_keys(b"there", b"the"), KeyMatch::SecondPrefix);
        assert_eq!(match_keys(b"he", b"hero"), KeyMatch::FirstPrefix);
        assert_eq!(match_keys(b"any", b"answer"), KeyMatch::Partial(2));
    }

    #[test]
    fn parse_folds_case() {
        assert_eq!(Key::parse("HeRo").unwrap().as_str(), "hero");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Key::parse(""), Err(DictError::EmptyWord));
        assert_eq!(
            Key::parse("ab1"),
            Err(DictError::InvalidChar {
                word: "ab1".into(),
                ch: '1',
                pos: 2
            })
        );
        assert!(matches!(
            Key::parse("café"),
            Err(DictError::InvalidChar { ch: 'é', pos: 3, .. })
        ));
    }

    #[test]
    fn split_and_join() {
        let mut key = Key::parse("heroplane").unwrap();
        let tail = key.split(4);
        assert_eq!(key.as_str(), "hero");
        assert_eq!(tail.as_str(), "plane");
        assert_eq!(tail.bucket(), 15);
        assert_eq!(key.join(&tail).as_str(), "heroplane");
    }
}
