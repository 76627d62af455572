//! An in-memory dictionary of lowercase words stored in a path-compressed trie.

pub mod dict;
pub mod error;

pub use crate::dict::{CompressedDictionary, Words};
pub use crate::error::{DictError, Result};
