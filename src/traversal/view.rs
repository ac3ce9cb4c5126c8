//! Order views: one strategy bound to one collection snapshot.

use std::iter::FusedIterator;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::cursor::{Cursor, CursorError};
use super::order::TraversalOrder;

/// A traversal strategy applied to a snapshot of a
/// [`MultiOrderVec`](crate::collection::MultiOrderVec).
///
/// The view computes its index permutation eagerly, once, when the order is
/// requested from the collection; every cursor and iterator it hands out
/// shares that permutation. The revision stamp is captured at the same
/// moment, so a view created before a mutation produces cursors that are
/// already stale.
///
/// # Examples
///
/// ```rust
/// use multiorder::prelude::*;
///
/// let collection: MultiOrderVec<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let view = collection.middle_out();
///
/// assert_eq!(view.order(), TraversalOrder::MiddleOut);
/// assert_eq!(view.len(), 5);
///
/// let values: Result<Vec<&i32>, CursorError> = view.iter().collect();
/// assert_eq!(values.unwrap(), vec![&6, &15, &1, &7, &2]);
/// ```
pub struct OrderView<T> {
    elements: Arc<Vec<T>>,
    indices: Arc<[usize]>,
    order: TraversalOrder,
    stamp: u64,
    revision: Arc<AtomicU64>,
}

impl<T> OrderView<T> {
    pub(crate) fn from_parts(
        elements: Arc<Vec<T>>,
        indices: Vec<usize>,
        order: TraversalOrder,
        stamp: u64,
        revision: Arc<AtomicU64>,
    ) -> Self {
        Self {
            elements,
            indices: indices.into(),
            order,
            stamp,
            revision,
        }
    }

    /// Returns the strategy this view traverses.
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns the number of elements the view covers.
    ///
    /// Fixed at view creation; later mutations of the collection do not
    /// change it.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the view covers no elements.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the revision captured when this view was created.
    pub const fn stamp(&self) -> u64 {
        self.stamp
    }

    /// Constructs a cursor at position 0.
    ///
    /// On an empty view this equals [`end`](Self::end) immediately.
    pub fn begin(&self) -> Cursor<T> {
        self.cursor_at(0)
    }

    /// Constructs a cursor at the end sentinel.
    pub fn end(&self) -> Cursor<T> {
        self.cursor_at(self.indices.len())
    }

    /// Returns an iterator over the view yielding
    /// `Result<&T, CursorError>`.
    ///
    /// Equivalent to driving a cursor from [`begin`](Self::begin) with
    /// `read`/`advance` until it equals [`end`](Self::end): a traversal that
    /// has consumed every element terminates cleanly even if the collection
    /// has since mutated (cursor equality ignores staleness), while a
    /// mutation observed mid-sequence surfaces as a single
    /// [`CursorError::Invalidated`] item, after which the iterator is fused.
    pub fn iter(&self) -> Traversal<'_, T> {
        Traversal {
            view: self,
            position: 0,
            faulted: false,
        }
    }

    fn cursor_at(&self, position: usize) -> Cursor<T> {
        Cursor::from_parts(
            Arc::clone(&self.elements),
            Arc::clone(&self.indices),
            self.order,
            position,
            self.stamp,
            Arc::clone(&self.revision),
        )
    }
}

impl<'a, T> IntoIterator for &'a OrderView<T> {
    type Item = Result<&'a T, CursorError>;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over an [`OrderView`], yielding `Result<&T, CursorError>`.
///
/// Produced by [`OrderView::iter`]. See there for the termination and
/// staleness contract.
pub struct Traversal<'a, T> {
    view: &'a OrderView<T>,
    position: usize,
    faulted: bool,
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = Result<&'a T, CursorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.faulted || self.position >= self.view.indices.len() {
            return None;
        }
        let revision = self.view.revision.load(Ordering::Relaxed);
        if revision != self.view.stamp {
            self.faulted = true;
            return Some(Err(CursorError::Invalidated {
                stamp: self.view.stamp,
                revision,
            }));
        }
        let element = &self.view.elements[self.view.indices[self.position]];
        self.position += 1;
        Some(Ok(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.faulted {
            return (0, Some(0));
        }
        // A stale view yields one Err instead of the remaining elements, so
        // only the upper bound is exact.
        (0, Some(self.view.indices.len() - self.position))
    }
}

impl<T> FusedIterator for Traversal<'_, T> {}

// =============================================================================
// Thread-safety guarantees
// =============================================================================

static_assertions::assert_impl_all!(OrderView<i32>: Send, Sync);
static_assertions::assert_impl_all!(OrderView<String>: Send, Sync);
