//! A path-compressed dictionary of words over the letters `a` to `z`.
//!
//! To get started, see the docs for `CompressedDictionary` below.

pub use self::iter::Words;
pub use self::key::{common_prefix, match_keys, Key, KeyMatch};

mod dictionary;
mod iter;
mod key;
mod segment;
mod traversal;


use self::segment::Segment;

const BRANCH_FACTOR: usize = 26;

/// Data-structure for storing and querying lowercase words.
///
/// Words which share a common *prefix* are stored below a single copy of that prefix,
/// one node per shared segment. Inserting a word that diverges partway through a
/// segment splits it; removing a word collapses the nodes it no longer needs and merges
/// any word-less node left with a single child into that child.
///
/// Input is case-insensitive ASCII: uppercase letters are folded, and anything else
/// (including the empty word) is rejected with a `DictError`.
///
/// ```
/// use compressed_dict::CompressedDictionary;
///
/// let mut dict = CompressedDictionary::new();
/// dict.insert("answer").unwrap();
/// dict.insert("any").unwrap();
/// assert!(dict.search("an", true).unwrap());
/// assert!(!dict.search("an", false).unwrap());
/// ```
#[derive(Debug)]
pub struct CompressedDictionary {
    /// The number of words stored.
    length: usize,
    /// The root segment, whose key is always empty.
    node: Segment,
}
