//! Iterator over the words stored below a node.

use std::iter::FilterMap;
use std::slice;

use super::segment::Segment;

type Child = Box<Segment>;
type RawChildIter<'a> = slice::Iter<'a, Option<Child>>;
type ChildMapFn<'a> = fn(&'a Option<Child>) -> Option<&'a Child>;
type ChildIter<'a> = FilterMap<RawChildIter<'a>, ChildMapFn<'a>>;

/// Iterator over stored words, in lexicographic order.
pub struct Words<'a> {
    root: Option<&'a Segment>,
    /// The letters spelled by the path to the node on top of the stack.
    word: String,
    /// Pending children of each node on the path, with the length of `word` up to
    /// and including that node.
    stack: Vec<(ChildIter<'a>, usize)>,
}

impl<'a> Words<'a> {
    /// Iterate the words below `root`, where `path` spells the path to `root`
    /// including its own key.
    pub(crate) fn new(root: &'a Segment, path: String) -> Words<'a> {
        Words {
            root: Some(root),
            word: path,
            stack: vec![],
        }
    }

    pub(crate) fn empty() -> Words<'a> {
        Words {
            root: None,
            word: String::new(),
            stack: vec![],
        }
    }
}

impl Segment {
    /// Helper function to get all the non-empty children of a node.
    fn child_iter(&self) -> ChildIter<'_> {
        fn id(x: &Option<Child>) -> Option<&Child> {
            x.as_ref()
        }

        self.children.iter().filter_map(id)
    }
}

enum IterAction<'a> {
    Push(&'a Segment, usize),
    Pop,
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        use self::IterAction::*;

        // Visit each node as it is reached from its parent (with special root handling).
        if let Some(root) = self.root.take() {
            self.stack.push((root.child_iter(), self.word.len()));
            if root.is_word_end {
                return Some(self.word.clone());
            }
        }

        loop {
            let action = match self.stack.last_mut() {
                Some((children, len)) => match children.next() {
                    Some(child) => Push(child, *len),
                    None => Pop,
                },
                None => return None,
            };

            match action {
                Push(node, len) => {
                    self.word.truncate(len);
                    self.word.push_str(node.key.as_str());
                    self.stack.push((node.child_iter(), self.word.len()));
                    if node.is_word_end {
                        return Some(self.word.clone());
                    }
                }
                Pop => {
                    self.stack.pop();
                }
            }
        }
    }
}
