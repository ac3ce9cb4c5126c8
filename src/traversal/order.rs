//! The six traversal strategies as pure permutation computers.
//!
//! Every strategy maps an element slice of length `n` to a permutation of
//! `[0, n)`. The value-sorted strategies use Rust's stable sort over an index
//! vector, so equal values keep their insertion order relative to each other
//! without any explicit tie-break key.

use std::fmt;

/// A traversal strategy over a [`MultiOrderVec`](crate::collection::MultiOrderVec).
///
/// A closed enum rather than an open trait: the set of orders is part of the
/// collection's contract, and cursor equality needs to compare strategies of
/// different views without type gymnastics.
///
/// # Examples
///
/// ```rust
/// use multiorder::traversal::TraversalOrder;
///
/// let elements = [7, 15, 6, 1, 2];
/// let indices = TraversalOrder::SideCross.permutation(&elements);
/// let values: Vec<i32> = indices.iter().map(|&index| elements[index]).collect();
/// assert_eq!(values, vec![1, 15, 2, 7, 6]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Insertion order: the identity permutation.
    Regular,
    /// Insertion order, mirrored.
    Reverse,
    /// Value order, smallest first; equal values in insertion order.
    Ascending,
    /// Value order, largest first; equal values in insertion order.
    Descending,
    /// Smallest, largest, second-smallest, second-largest, and so on; for an
    /// odd length the middle value is emitted once at the end.
    SideCross,
    /// The element at `len / 2` first, then alternating left and right of
    /// it, starting left; a side that runs out is skipped while the other
    /// drains.
    MiddleOut,
}

impl TraversalOrder {
    /// Computes this strategy's index permutation for `elements`.
    ///
    /// Returns a sequence of positional indices of the same length as
    /// `elements`; empty input yields an empty sequence, singleton input
    /// yields `[0]` for every strategy.
    ///
    /// `Ord` is only exercised by the three value-sorted strategies, but the
    /// unified entry point requires it for all six; the collection's order
    /// accessors reach the positional strategies without this bound.
    pub fn permutation<T: Ord>(self, elements: &[T]) -> Vec<usize> {
        match self {
            Self::Regular => identity_indices(elements.len()),
            Self::Reverse => reverse_indices(elements.len()),
            Self::Ascending => ascending_indices(elements),
            Self::Descending => descending_indices(elements),
            Self::SideCross => side_cross_indices(elements),
            Self::MiddleOut => middle_out_indices(elements.len()),
        }
    }

    /// Returns the strategy's display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Reverse => "Reverse",
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
            Self::SideCross => "SideCross",
            Self::MiddleOut => "MiddleOut",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// The identity permutation `[0, 1, ..., length-1]`.
pub(crate) fn identity_indices(length: usize) -> Vec<usize> {
    (0..length).collect()
}

/// The mirrored permutation `[length-1, ..., 1, 0]`.
pub(crate) fn reverse_indices(length: usize) -> Vec<usize> {
    (0..length).rev().collect()
}

/// Positions sorted by value ascending, stable over insertion order.
pub(crate) fn ascending_indices<T: Ord>(elements: &[T]) -> Vec<usize> {
    let mut indices = identity_indices(elements.len());
    indices.sort_by(|&left, &right| elements[left].cmp(&elements[right]));
    indices
}

/// Positions sorted by value descending, stable over insertion order.
///
/// Stability means equal values still come out in ascending insertion
/// position, same as in the ascending order.
pub(crate) fn descending_indices<T: Ord>(elements: &[T]) -> Vec<usize> {
    let mut indices = identity_indices(elements.len());
    indices.sort_by(|&left, &right| elements[right].cmp(&elements[left]));
    indices
}

/// Ascending-sorted positions interleaved from both ends: lowest, highest,
/// second-lowest, second-highest, until the two pointers meet.
pub(crate) fn side_cross_indices<T: Ord>(elements: &[T]) -> Vec<usize> {
    let length = elements.len();
    if length == 0 {
        return Vec::new();
    }
    let sorted = ascending_indices(elements);
    let mut indices = Vec::with_capacity(length);
    let mut low = 0;
    let mut high = length - 1;
    while low < high {
        indices.push(sorted[low]);
        indices.push(sorted[high]);
        low += 1;
        high -= 1;
    }
    if low == high {
        indices.push(sorted[low]);
    }
    indices
}

/// The middle position first, then alternating left and right of it.
///
/// The middle is `length / 2`, so an even length has one more element on the
/// left side; the first step after the middle goes left. A side that is
/// exhausted is skipped while the other side drains in order.
pub(crate) fn middle_out_indices(length: usize) -> Vec<usize> {
    if length == 0 {
        return Vec::new();
    }
    let middle = length / 2;
    let mut indices = Vec::with_capacity(length);
    indices.push(middle);

    let mut left = middle;
    let mut right = middle + 1;
    let mut go_left = true;
    while left > 0 || right < length {
        if go_left {
            if left > 0 {
                left -= 1;
                indices.push(left);
            }
        } else if right < length {
            indices.push(right);
            right += 1;
        }
        go_left = !go_left;
    }
    indices
}

// =============================================================================
// Tests
// =============================================================================
