//! Traversal strategies, order views, and revision-stamped cursors.
//!
//! A traversal never touches the collection it came from: the store hands
//! out a snapshot, the strategy turns that snapshot into a permutation of
//! positional indices, and a [`Cursor`] walks the permutation while checking
//! the collection's revision on every access.
//!
//! # Overview
//!
//! | Type | Role |
//! |------|------|
//! | [`TraversalOrder`] | closed enum of the six strategies; computes the index permutation |
//! | [`OrderView`] | one strategy bound to one snapshot; source of cursors and iterators |
//! | [`Cursor`] | stateful position within a view's permutation, stamped with the revision |
//! | [`Traversal`] | `Iterator` over a view yielding `Result<&T, CursorError>` |
//!
//! # Two consumption styles
//!
//! The iterator style surfaces failures as `Err` items:
//!
//! ```rust
//! use multiorder::prelude::*;
//!
//! let collection: MultiOrderVec<i32> = [3, 1, 2].into_iter().collect();
//! let view = collection.ascending();
//! for element in &view {
//!     println!("{}", element?);
//! }
//! # Ok::<(), CursorError>(())
//! ```
//!
//! The cursor style mirrors a classic begin/end loop:
//!
//! ```rust
//! use multiorder::prelude::*;
//!
//! let collection: MultiOrderVec<i32> = [3, 1, 2].into_iter().collect();
//! let view = collection.descending();
//! let mut cursor = view.begin();
//! let end = view.end();
//! let mut values = Vec::new();
//! while cursor != end {
//!     values.push(*cursor.read()?);
//!     cursor.advance()?;
//! }
//! assert_eq!(values, vec![3, 2, 1]);
//! # Ok::<(), CursorError>(())
//! ```

mod cursor;
pub(crate) mod order;
mod view;

pub use cursor::Cursor;
pub use cursor::CursorError;
pub use order::TraversalOrder;
pub use view::OrderView;
pub use view::Traversal;
