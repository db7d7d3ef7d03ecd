//! # A sorted map that knows where its keys stand
//!
//! `rankmap` provides [`RankMap`], an in-memory sorted associative
//! container backed by a B+ tree with threaded leaves. Next to the usual
//! map operations it answers two positional questions in O(log n), which
//! the std maps cannot:
//!
//! - [`rank`](tree::RankMap::rank): the index a key holds in ascending
//!   order, or the index it would be inserted at;
//! - [`entry_at`](tree::RankMap::entry_at): the entry at a given index.
//!
//! Every internal node tracks the number of entries beneath it, so both
//! queries skip whole subtrees instead of counting entries. The intended
//! workload is millions of inserts in unpredictable order mixed with rank
//! lookups; if you never ask positional questions, you probably want
//! `std::collections::BTreeMap` instead of this crate.
//!
//! Keys are ordered by `K: Ord` by default, or by a comparator supplied at
//! construction:
//!
//! ```
//! use rankmap::RankMap;
//!
//! let mut m = RankMap::new();
//! m.insert("carrot", 3);
//! m.insert("apple", 1);
//! m.insert("banana", 2);
//!
//! assert_eq!(m.rank(&"banana"), Ok(1));
//! assert_eq!(m.rank(&"blueberry"), Err(2));
//! assert_eq!(m.entry_at(0).unwrap(), (&"apple", &1));
//! ```

mod error;
mod order;
pub mod tree;

pub use error::{Error, Result};
pub use order::{Comparator, NaturalOrder};
pub use tree::iter::{Cursor, IntoIter, Iter};
pub use tree::views::{KeysView, ValuesView};

/// [`tree::RankMap`] with the recommended fanout of 16.
pub type RankMap<K, V, C = NaturalOrder> = tree::RankMap<K, V, C, 16>;
