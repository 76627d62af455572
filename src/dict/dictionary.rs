use tracing::debug;

use super::iter::Words;
use super::key::Key;
use super::segment::Segment;
use super::traversal::Descendant;
use super::CompressedDictionary;
use crate::error::Result;

impl CompressedDictionary {
    /// Create an empty dictionary.
    pub fn new() -> CompressedDictionary {
        CompressedDictionary {
            length: 0,
            node: Segment::new(),
        }
    }

    /// Build a dictionary from a sequence of words, stopping at the first invalid one.
    pub fn from_words<I, S>(words: I) -> Result<CompressedDictionary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = CompressedDictionary::new();
        dict.insert_all(words)?;
        Ok(dict)
    }

    /// Number of words stored.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Insert a word, returning true if it was not already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let key = Key::parse(word)?;
        let added = self.node.insert(&key);
        if added {
            self.length += 1;
        }
        debug!(word = %key, added, "insert");
        Ok(added)
    }

    /// Insert every word of a sequence, returning how many were new.
    pub fn insert_all<I, S>(&mut self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word.as_ref())? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Look up `word` as a stored word, or as a prefix of any stored word when
    /// `is_prefix` is set.
    pub fn search(&self, word: &str, is_prefix: bool) -> Result<bool> {
        let key = Key::parse(word)?;
        let found = match self.node.get_descendant(key.as_bytes()) {
            Some(Descendant::Exact(node)) => is_prefix || node.is_word_end,
            Some(Descendant::Inside(..)) => is_prefix,
            None => false,
        };
        Ok(found)
    }

    /// Determine if `word` is stored.
    pub fn contains(&self, word: &str) -> Result<bool> {
        self.search(word, false)
    }

    /// Determine if any stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> Result<bool> {
        self.search(prefix, true)
    }

    /// Remove a word, returning true if it was present.
    pub fn remove(&mut self, word: &str) -> Result<bool> {
        let key = Key::parse(word)?;
        let removed = self.node.remove(key.as_bytes());
        if removed {
            self.length -= 1;
        }
        debug!(word = %key, removed, "remove");
        Ok(removed)
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        debug!(words = self.length, "clear");
        self.node = Segment::new();
        self.length = 0;
    }

    /// Return an iterator over the stored words, in lexicographic order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.node, String::new())
    }

    /// Return an iterator over the stored words starting with `prefix`, in
    /// lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Result<Words<'_>> {
        let key = Key::parse(prefix)?;
        let words = match self.node.get_descendant(key.as_bytes()) {
            Some(Descendant::Exact(node)) => Words::new(node, key.to_string()),
            Some(Descendant::Inside(node, depth)) => {
                let mut path = key.as_str()[..depth].to_owned();
                path.push_str(node.key.as_str());
                Words::new(node, path)
            }
            None => Words::empty(),
        };
        Ok(words)
    }

    /// Fetch the longest stored word which is a prefix of `query` (or `query` itself).
    pub fn longest_prefix_of(&self, query: &str) -> Result<Option<String>> {
        let key = Key::parse(query)?;
        Ok(self
            .node
            .get_ancestor(key.as_bytes())
            .map(|len| key.as_str()[..len].to_owned()))
    }

    /// Check that the dictionary invariants are satisfied - you shouldn't ever have to call this!
    /// Quite slow!
    #[doc(hidden)]
    pub fn check_integrity(&self) -> bool {
        let (ok, length) = self.node.check_integrity_recursive(0);
        ok && length == self.length
    }
}

impl PartialEq for CompressedDictionary {
    fn eq(&self, other: &CompressedDictionary) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for CompressedDictionary {}

impl Default for CompressedDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a CompressedDictionary {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Words<'a> {
        self.iter()
    }
}
