//! # multiorder
//!
//! A multi-order collection for Rust: one insertion-ordered store,
//! six independent traversal strategies, no duplicated storage.
//!
//! ## Overview
//!
//! [`MultiOrderVec`](collection::MultiOrderVec) keeps its elements in
//! insertion order (duplicates allowed) alongside a membership index for
//! constant-time existence checks and a monotone revision counter. Each
//! traversal strategy maps the current contents to a permutation of
//! positional indices; cursors walk that permutation and carry the revision
//! stamp captured at creation, so any mutation of the collection turns every
//! outstanding cursor permanently stale.
//!
//! The six strategies:
//!
//! - **Regular**: insertion order
//! - **Reverse**: insertion order, mirrored
//! - **Ascending** / **Descending**: value order, ties kept in insertion order
//! - **SideCross**: smallest, largest, second-smallest, second-largest, ...
//! - **MiddleOut**: middle element first, then alternating left and right
//!
//! ## Example
//!
//! ```rust
//! use multiorder::prelude::*;
//!
//! let mut collection = MultiOrderVec::new();
//! for value in [7, 15, 6, 1, 2] {
//!     collection.add(value);
//! }
//!
//! let view = collection.ascending();
//! let ascending: Result<Vec<&i32>, CursorError> = view.iter().collect();
//! assert_eq!(ascending.unwrap(), vec![&1, &2, &6, &7, &15]);
//!
//! // Mutation invalidates cursors created before it.
//! let view = collection.side_cross();
//! let cursor = view.begin();
//! collection.add(42);
//! assert!(matches!(cursor.read(), Err(CursorError::Invalidated { .. })));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`MultiOrderVec`](collection::MultiOrderVec)
//! - `fxhash`: use `rustc-hash` for the membership index
//! - `ahash`: use `ahash` for the membership index

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of the crate.
///
/// # Usage
///
/// ```rust
/// use multiorder::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{MultiOrderVec, RemoveError, Snapshot};
    pub use crate::traversal::{Cursor, CursorError, OrderView, Traversal, TraversalOrder};
}

pub mod collection;

pub mod traversal;
