//! The element store and its read-only snapshot.
//!
//! This module provides [`MultiOrderVec`], an insertion-ordered collection
//! with duplicate support, a constant-time membership index, and a revision
//! counter that stamps every traversal taken over it.
//!
//! # Shared Storage
//!
//! The element sequence lives behind an [`Arc`](std::sync::Arc) and is
//! clone-on-write: taking a snapshot or an order view is O(1), and a later
//! mutation copies the sequence once instead of disturbing outstanding
//! readers. Traversals therefore never observe a half-mutated sequence;
//! they observe their snapshot and report staleness through the revision
//! stamp instead.
//!
//! # Examples
//!
//! ```rust
//! use multiorder::collection::MultiOrderVec;
//!
//! let mut collection = MultiOrderVec::new();
//! collection.add("banana");
//! collection.add("apple");
//! collection.add("banana");
//!
//! assert_eq!(collection.len(), 3);
//! assert_eq!(collection.count_of("banana"), 2);
//! assert_eq!(collection.to_string(), "[banana, apple, banana]");
//!
//! // Removal is by value and removes every occurrence.
//! collection.remove("banana").unwrap();
//! assert_eq!(collection.to_string(), "[apple]");
//! assert!(collection.remove("banana").is_err());
//! ```

mod store;

pub use store::{MultiOrderVec, RemoveError, Snapshot};
