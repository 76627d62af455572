//! This module contains the core algorithms.

use tracing::trace;

use super::key::{bucket, match_keys, Key, KeyMatch};
use super::segment::Segment;

use self::Descendant::*;

impl Segment {
    pub fn insert(&mut self, key: &Key) -> bool {
        iterative_insert(self, key)
    }

    pub fn get_descendant(&self, key: &[u8]) -> Option<Descendant<'_>> {
        get_descendant(self, key)
    }

    pub fn remove(&mut self, key: &[u8]) -> bool {
        recursive_remove(self, key)
    }

    pub fn get_ancestor(&self, key: &[u8]) -> Option<usize> {
        get_ancestor(self, key)
    }
}

fn iterative_insert(trie: &mut Segment, key: &Key) -> bool {
    let mut prev = trie;
    let mut depth = 0;

    loop {
        let bucket = key.bucket_at(depth);
        let current = prev;
        if let Some(ref mut child) = current.children[bucket] {
            match match_keys(&key.as_bytes()[depth..], child.key.as_bytes()) {
                KeyMatch::Full => {
                    return child.mark_word_end();
                }
                KeyMatch::Partial(idx) => {
                    trace!(node = %child.key, at = idx, "splitting diverging segment");
                    child.split(idx);

                    // Insert the new key below the prefix node.
                    let new_key = key.suffix(depth + idx);
                    child.add_child(new_key.bucket(), Box::new(Segment::leaf(new_key)));
                    return true;
                }
                KeyMatch::FirstPrefix => {
                    let idx = key.len() - depth;
                    trace!(node = %child.key, at = idx, "splitting segment at word end");
                    child.split(idx);
                    child.mark_word_end();
                    return true;
                }
                KeyMatch::SecondPrefix => {
                    depth += child.key.len();
                    prev = &mut **child;
                }
            }
        } else {
            current.add_child(bucket, Box::new(Segment::leaf(key.suffix(depth))));
            return true;
        }
    }
}

/// Where a query ends in the tree.
#[derive(Debug)]
pub enum Descendant<'a> {
    /// The query spells exactly the path to this node.
    Exact(&'a Segment),
    /// The query ends inside this node's key; the path to the node is the query
    /// truncated to `usize` letters followed by the node's key.
    Inside(&'a Segment, usize),
}

fn get_descendant<'a>(trie: &'a Segment, key: &[u8]) -> Option<Descendant<'a>> {
    if key.is_empty() {
        return Some(Exact(trie));
    }

    let mut prev = trie;
    let mut depth = 0;

    loop {
        let child = prev.child(bucket(key[depth]))?;
        match match_keys(&key[depth..], child.key.as_bytes()) {
            KeyMatch::Full => return Some(Exact(child)),
            KeyMatch::FirstPrefix => return Some(Inside(child, depth)),
            KeyMatch::SecondPrefix => {
                depth += child.key.len();
                prev = child;
            }
            KeyMatch::Partial(_) => return None,
        }
    }
}

/// Remove `key` from below `trie`, collapsing and merging the nodes it leaves
/// behind. `trie` itself is never removed.
fn recursive_remove(trie: &mut Segment, key: &[u8]) -> bool {
    let Some(&first) = key.first() else {
        return false;
    };
    let bucket = bucket(first);

    let removed = match trie.child_mut(bucket) {
        Some(child) => match match_keys(key, child.key.as_bytes()) {
            KeyMatch::Full => std::mem::replace(&mut child.is_word_end, false),
            KeyMatch::SecondPrefix => {
                let depth = child.key.len();
                recursive_remove(child, &key[depth..])
            }
            KeyMatch::FirstPrefix | KeyMatch::Partial(_) => false,
        },
        None => false,
    };

    if removed {
        compact_child(trie, bucket);
    }
    removed
}

/// Restore the shape invariants of the child at `bucket` after a word below it
/// was removed.
fn compact_child(trie: &mut Segment, bucket: usize) {
    let Some(child) = trie.child_mut(bucket) else {
        return;
    };
    if child.is_word_end {
        return;
    }
    let child_count = child.child_count;
    match child_count {
        0 => {
            trace!(node = %child.key, "collapsing word-less leaf");
            trie.take_child(bucket);
        }
        1 => {
            trace!(node = %child.key, "merging word-less segment into its only child");
            child.merge_only_child();
        }
        _ => {}
    }
}

/// Length of the longest stored word which is a prefix of `key`.
fn get_ancestor(trie: &Segment, key: &[u8]) -> Option<usize> {
    let mut prev = trie;
    let mut ancestor = None;
    let mut depth = 0;

    while depth < key.len() {
        let child = match prev.child(bucket(key[depth])) {
            Some(child) => child,
            None => break,
        };
        match match_keys(&key[depth..], child.key.as_bytes()) {
            KeyMatch::Full | KeyMatch::SecondPrefix => {
                depth += child.key.len();
                if child.is_word_end {
                    ancestor = Some(depth);
                }
                prev = child;
            }
            KeyMatch::FirstPrefix | KeyMatch::Partial(_) => break,
        }
    }

    ancestor
}
