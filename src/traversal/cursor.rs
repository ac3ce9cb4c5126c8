//! Revision-stamped cursors over a computed traversal permutation.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::order::TraversalOrder;

// =============================================================================
// CursorError
// =============================================================================

/// Error type for [`Cursor::read`] and [`Cursor::advance`].
///
/// Both conditions are expected and local: they are reported to the
/// immediate caller and never corrupt the collection. Staleness is checked
/// before bounds, so a cursor that is both stale and at the end sentinel
/// reports [`Invalidated`](CursorError::Invalidated).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The collection mutated after this cursor's view was created.
    ///
    /// Unrecoverable for this cursor: the revision counter is monotone, so
    /// the live value never returns to the captured stamp. Obtain a fresh
    /// view instead.
    Invalidated {
        /// The revision captured when the cursor's view was created.
        stamp: u64,
        /// The collection's revision observed at the failing access.
        revision: u64,
    },
    /// The cursor sits at or past the end sentinel.
    OutOfRange {
        /// The cursor's position within the permutation.
        position: usize,
        /// The permutation length (the end sentinel value).
        length: usize,
    },
}

impl fmt::Display for CursorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalidated { stamp, revision } => write!(
                formatter,
                "collection was modified during traversal (stamp {stamp}, revision {revision})"
            ),
            Self::OutOfRange { position, length } => write!(
                formatter,
                "cursor out of bounds (position {position}, length {length})"
            ),
        }
    }
}

impl std::error::Error for CursorError {}

// =============================================================================
// Cursor
// =============================================================================

/// A stateful position within one strategy's permutation of one collection.
///
/// A cursor owns shared handles to the element snapshot, the computed
/// permutation, and the collection's live revision counter; it never borrows
/// the collection itself, so the collection stays free to mutate — which is
/// exactly what the revision stamp detects.
///
/// `position` ranges over `[0, length]`; `length` is the end sentinel.
/// [`advance`](Self::advance) only ever moves forward by one.
///
/// # Equality
///
/// Two cursors are equal iff they come from the same strategy, the same
/// collection instance, and sit at the same position. Cursors of different
/// strategies are never equal, even at identical positions over identical
/// values; cursors of different collections are unequal, never an error.
/// Staleness does not participate: a finished traversal still compares equal
/// to its end cursor.
///
/// # Examples
///
/// ```rust
/// use multiorder::prelude::*;
///
/// let collection: MultiOrderVec<i32> = [2, 1].into_iter().collect();
/// let view = collection.ascending();
/// let mut cursor = view.begin();
///
/// assert_eq!(cursor.read(), Ok(&1));
/// cursor.advance()?;
/// assert_eq!(cursor.read(), Ok(&2));
/// cursor.advance()?;
/// assert_eq!(cursor, view.end());
/// assert!(matches!(cursor.read(), Err(CursorError::OutOfRange { .. })));
/// # Ok::<(), CursorError>(())
/// ```
pub struct Cursor<T> {
    elements: Arc<Vec<T>>,
    indices: Arc<[usize]>,
    order: TraversalOrder,
    position: usize,
    stamp: u64,
    revision: Arc<AtomicU64>,
}

impl<T> Cursor<T> {
    pub(crate) fn from_parts(
        elements: Arc<Vec<T>>,
        indices: Arc<[usize]>,
        order: TraversalOrder,
        position: usize,
        stamp: u64,
        revision: Arc<AtomicU64>,
    ) -> Self {
        Self {
            elements,
            indices,
            order,
            position,
            stamp,
            revision,
        }
    }

    /// Returns the strategy this cursor traverses.
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns the cursor's position within the permutation.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if the cursor sits at the end sentinel.
    pub fn is_at_end(&self) -> bool {
        self.position == self.indices.len()
    }

    /// Returns `true` if the collection mutated after this cursor's view was
    /// created.
    ///
    /// Staleness is absorbing: once `true` it never clears.
    pub fn is_stale(&self) -> bool {
        self.revision.load(Ordering::Relaxed) != self.stamp
    }

    /// Reads the element under the cursor.
    ///
    /// # Errors
    ///
    /// [`CursorError::Invalidated`] if the collection mutated since the
    /// cursor's view was created; otherwise [`CursorError::OutOfRange`] at
    /// the end sentinel. Staleness wins when both hold.
    pub fn read(&self) -> Result<&T, CursorError> {
        self.check_access()?;
        Ok(&self.elements[self.indices[self.position]])
    }

    /// Moves the cursor forward by one position.
    ///
    /// # Errors
    ///
    /// Same conditions and precedence as [`read`](Self::read): advancing a
    /// stale cursor or a cursor at the end sentinel fails without moving it.
    pub fn advance(&mut self) -> Result<(), CursorError> {
        self.check_access()?;
        self.position += 1;
        Ok(())
    }

    /// Staleness first, bounds second.
    fn check_access(&self) -> Result<(), CursorError> {
        let revision = self.revision.load(Ordering::Relaxed);
        if revision != self.stamp {
            return Err(CursorError::Invalidated {
                stamp: self.stamp,
                revision,
            });
        }
        if self.position >= self.indices.len() {
            return Err(CursorError::OutOfRange {
                position: self.position,
                length: self.indices.len(),
            });
        }
        Ok(())
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            indices: Arc::clone(&self.indices),
            order: self.order,
            position: self.position,
            stamp: self.stamp,
            revision: Arc::clone(&self.revision),
        }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && Arc::ptr_eq(&self.revision, &other.revision)
            && self.position == other.position
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("order", &self.order)
            .field("position", &self.position)
            .field("length", &self.indices.len())
            .field("stamp", &self.stamp)
            .finish()
    }
}

// =============================================================================
// Thread-safety guarantees
// =============================================================================

static_assertions::assert_impl_all!(Cursor<i32>: Send, Sync);
static_assertions::assert_impl_all!(Cursor<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidated_display() {
        let error = CursorError::Invalidated {
            stamp: 3,
            revision: 5,
        };
        assert_eq!(
            format!("{error}"),
            "collection was modified during traversal (stamp 3, revision 5)"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let error = CursorError::OutOfRange {
            position: 4,
            length: 4,
        };
        assert_eq!(
            format!("{error}"),
            "cursor out of bounds (position 4, length 4)"
        );
    }
}
