use tracing::warn;

use super::key::Key;
use super::BRANCH_FACTOR;

#[derive(Debug)]
pub struct Segment {
    /// Letters associated with this node, such that joining the keys from all
    /// parent nodes and this node spells the path to this node.
    pub key: Key,

    /// Whether the path to this node spells a stored word.
    pub is_word_end: bool,

    /// The number of children which are Some rather than None.
    pub child_count: usize,

    /// The children of this node stored such that the first letter of each child key
    /// dictates the child's bucket.
    pub children: [Option<Box<Segment>>; BRANCH_FACTOR],
}

fn no_children() -> [Option<Box<Segment>>; BRANCH_FACTOR] {
    Default::default()
}

impl Segment {
    /// Create an empty, child-less node that spells no word. Used for the root.
    pub fn new() -> Segment {
        Segment {
            key: Key::new(),
            is_word_end: false,
            child_count: 0,
            children: no_children(),
        }
    }

    /// Create a child-less node ending a word.
    pub fn leaf(key: Key) -> Segment {
        Segment {
            key,
            is_word_end: true,
            child_count: 0,
            children: no_children(),
        }
    }

    pub fn child(&self, idx: usize) -> Option<&Segment> {
        self.children[idx].as_deref()
    }

    pub fn child_mut(&mut self, idx: usize) -> Option<&mut Segment> {
        self.children[idx].as_deref_mut()
    }

    /// Add a child at the given index, given that none exists there already.
    pub fn add_child(&mut self, idx: usize, node: Box<Segment>) {
        debug_assert!(self.children[idx].is_none());
        debug_assert_eq!(idx, node.key.bucket());
        self.child_count += 1;
        self.children[idx] = Some(node);
    }

    /// Remove a child at the given index, if it exists.
    pub fn take_child(&mut self, idx: usize) -> Option<Box<Segment>> {
        self.children[idx].take().map(|node| {
            self.child_count -= 1;
            node
        })
    }

    /// Helper function for removing the single child of a node.
    pub fn take_only_child(&mut self) -> Option<Box<Segment>> {
        debug_assert_eq!(self.child_count, 1);
        (0..BRANCH_FACTOR).find_map(|i| self.take_child(i))
    }

    /// Mark this node as ending a word, returning whether it was unmarked.
    pub fn mark_word_end(&mut self) -> bool {
        !std::mem::replace(&mut self.is_word_end, true)
    }

    /// Split a node at a given index in its key, transforming it into a prefix node of its
    /// previous self.
    ///
    /// The new suffix node takes over the word-end flag and all the children; the prefix
    /// node is left with the suffix node as its only child and spells no word.
    pub fn split(&mut self, idx: usize) {
        debug_assert!(idx > 0 && idx < self.key.len());

        let key = self.key.split(idx);
        let is_word_end = std::mem::replace(&mut self.is_word_end, false);
        let children = std::mem::replace(&mut self.children, no_children());
        let child_count = std::mem::replace(&mut self.child_count, 0);

        // Insert the collected items below what is now a bare prefix node.
        let bucket = key.bucket();
        self.add_child(
            bucket,
            Box::new(Segment {
                key,
                is_word_end,
                child_count,
                children,
            }),
        );
    }

    /// Fold a word-less node with a single child into that child, joining their keys.
    pub fn merge_only_child(&mut self) {
        debug_assert!(!self.is_word_end);
        if let Some(child) = self.take_only_child() {
            let Segment {
                key,
                is_word_end,
                child_count,
                children,
            } = *child;
            self.key = std::mem::take(&mut self.key).join(&key);
            self.is_word_end = is_word_end;
            self.child_count = child_count;
            self.children = children;
        }
    }

    /// Check the integrity of a subtree (quite costly).
    /// Return true and the number of words in the subtree if all checks are successful,
    /// or false and a junk value if any test fails.
    pub fn check_integrity_recursive(&self, level: usize) -> (bool, usize) {
        let mut sub_tree_size = 0;
        let is_root = level == 0;

        if is_root && self.is_word_end {
            warn!("Root node is marked as a word end.");
            return (false, sub_tree_size);
        }

        // No word-less, non-root node may be a leaf or have only 1 child.
        if !is_root && !self.is_word_end && self.child_count <= 1 {
            warn!(key = %self.key, children = self.child_count, "Word-less node with fewer than two children.");
            return (false, sub_tree_size);
        }

        if is_root != self.key.is_empty() {
            warn!(level, key = %self.key, "Key length does not match node position.");
            return (false, sub_tree_size);
        }

        let child_count = self.children.iter().flatten().count();

        if child_count != self.child_count {
            warn!(
                "Child count error, recorded: {}, actual: {}",
                self.child_count, child_count
            );
            return (false, sub_tree_size);
        }

        if self.is_word_end {
            sub_tree_size += 1;
        }

        for (i, child) in self.children.iter().enumerate() {
            if let Some(ref child) = *child {
                if child.key.is_empty() || child.key.bucket() != i {
                    warn!(bucket = i, key = %child.key, "Child stored in the wrong bucket.");
                    return (false, sub_tree_size);
                }
                match child.check_integrity_recursive(level + 1) {
                    (false, _) => return (false, sub_tree_size),
                    (true, child_size) => sub_tree_size += child_size,
                }
            }
        }

        (true, sub_tree_size)
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::new()
    }
}
