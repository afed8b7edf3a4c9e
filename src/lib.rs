//! # fuzzytrie
//!
//! A compressed radix trie mapping byte-string keys to values, with
//! prefix-subtree enumeration and fuzzy lookup by bounded Levenshtein
//! distance.
//!
//! ## Features
//!
//! - **Compressed edges**: chains of single-child nodes are merged into
//!   multi-byte labels, so nodes exist only at branching points
//! - **Point lookups**: O(key length) regardless of compression
//! - **Prefix enumeration**: collect or stream every value stored below
//!   a prefix
//! - **Fuzzy search**: every key within a given edit distance of a query
//!   word, with its exact distance, pruned branch-and-bound style
//!
//! ## Example
//!
//! ```rust
//! use fuzzytrie::Trie;
//!
//! let mut trie: Trie<u64> = Trie::new();
//! trie.insert(b"cat", 1).unwrap();
//! trie.insert(b"car", 2).unwrap();
//!
//! assert_eq!(trie.get(b"cat"), Some(&1));
//! // A walk that stops inside an edge label is not a stored key.
//! assert_eq!(trie.get(b"ca"), None);
//!
//! let mut matches = trie.levenshtein_search(b"cap", 1);
//! matches.sort();
//! assert_eq!(matches, vec![(&1, 1), (&2, 1)]);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod node;
mod search;
mod trie;

pub use error::{Result, TrieError};
pub use trie::{Trie, TrieStats};
