//! Insertion-ordered element store with a membership index and revision
//! counter.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::traversal::order::{
    ascending_indices, descending_indices, identity_indices, middle_out_indices, reverse_indices,
    side_cross_indices,
};
use crate::traversal::{OrderView, TraversalOrder};

/// The membership index: occurrence count per distinct value.
///
/// The hasher is selected by feature flag; entries exist only for values
/// currently present (count >= 1).
#[cfg(feature = "fxhash")]
type MembershipMap<T> = rustc_hash::FxHashMap<T, usize>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type MembershipMap<T> = ahash::AHashMap<T, usize>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type MembershipMap<T> = std::collections::HashMap<T, usize>;

// =============================================================================
// RemoveError
// =============================================================================

/// Error type for [`MultiOrderVec::remove`].
///
/// Removal of an absent value is an expected, recoverable condition: the
/// collection is left untouched and no revision bump occurs.
///
/// # Examples
///
/// ```rust
/// use multiorder::collection::{MultiOrderVec, RemoveError};
///
/// let mut collection: MultiOrderVec<i32> = MultiOrderVec::new();
/// assert_eq!(collection.remove(&42), Err(RemoveError::NotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    /// The value has no occurrence in the collection.
    NotFound,
}

impl fmt::Display for RemoveError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(formatter, "element was not found"),
        }
    }
}

impl std::error::Error for RemoveError {}

// =============================================================================
// Snapshot
// =============================================================================

/// A read-only capture of a [`MultiOrderVec`]: the shared element sequence
/// plus the revision at capture time.
///
/// Snapshots are O(1) to take and never change afterwards, even while the
/// originating collection keeps mutating.
pub struct Snapshot<T> {
    elements: Arc<Vec<T>>,
    revision: u64,
}

impl<T> Snapshot<T> {
    /// Returns the captured elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the number of captured elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the capture holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the revision of the collection at capture time.
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            revision: self.revision,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Snapshot")
            .field("elements", &self.elements)
            .field("revision", &self.revision)
            .finish()
    }
}

// =============================================================================
// MultiOrderVec
// =============================================================================

/// An insertion-ordered collection traversable in six independent orders.
///
/// Elements are stored once, in insertion order, with duplicates allowed.
/// A membership index keeps an occurrence count per distinct value so
/// existence checks and removal pre-checks run in O(1) amortized. Every
/// successful mutation bumps a monotone revision counter; traversals capture
/// the counter when created and become permanently stale once it moves.
///
/// # Type Parameter Bounds
///
/// Bounds sit on the operations, not the type: `Clone + Eq + Hash` for
/// mutation (the membership index owns one copy of each distinct value),
/// `Ord` only for the three value-sorted traversal orders. A payload without
/// a total order can still use [`regular`](Self::regular),
/// [`reverse`](Self::reverse), and [`middle_out`](Self::middle_out).
///
/// # Examples
///
/// ```rust
/// use multiorder::collection::MultiOrderVec;
///
/// let mut collection = MultiOrderVec::new();
/// collection.add(7);
/// collection.add(15);
/// collection.add(6);
/// collection.add(1);
/// collection.add(2);
///
/// let side_cross: Vec<i32> = collection
///     .side_cross()
///     .iter()
///     .map(|element| *element.unwrap())
///     .collect();
/// assert_eq!(side_cross, vec![1, 15, 2, 7, 6]);
/// ```
///
/// # Concurrency
///
/// The revision stamp detects sequential misuse (mutate, then keep using an
/// old cursor) within one thread of control. It is not a lock: cross-thread
/// use requires external serialization of mutations against live traversals.
pub struct MultiOrderVec<T> {
    /// Insertion-ordered elements, shared clone-on-write with snapshots.
    elements: Arc<Vec<T>>,
    /// Occurrence count per distinct value, in exact sync with `elements`.
    membership: MembershipMap<T>,
    /// Monotone revision counter, shared with views and cursors.
    revision: Arc<AtomicU64>,
}

impl<T> MultiOrderVec<T> {
    /// Creates an empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::collection::MultiOrderVec;
    ///
    /// let collection: MultiOrderVec<i32> = MultiOrderVec::new();
    /// assert!(collection.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            elements: Arc::new(Vec::new()),
            membership: MembershipMap::default(),
            revision: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns the number of elements, counting duplicates.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an infallible iterator over the elements in insertion order.
    ///
    /// This borrows the collection directly, so the staleness machinery does
    /// not apply: the borrow checker already rules out mutation while the
    /// iterator lives. For the revision-checked equivalent, see
    /// [`regular`](Self::regular).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the current revision.
    ///
    /// Starts at 0 and increments exactly once per successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Relaxed)
    }

    /// Captures a read-only snapshot: the shared element sequence plus the
    /// current revision.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            elements: Arc::clone(&self.elements),
            revision: self.revision(),
        }
    }

    /// Removes all elements.
    ///
    /// Bumps the revision only when the collection was non-empty; clearing
    /// an empty collection is a no-op and leaves outstanding cursors valid.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.elements = Arc::new(Vec::new());
        self.membership.clear();
        self.bump_revision();
    }

    /// Returns a view of the elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::collection::MultiOrderVec;
    ///
    /// let collection: MultiOrderVec<i32> = [7, 15, 6].into_iter().collect();
    /// let regular: Vec<i32> = collection
    ///     .regular()
    ///     .iter()
    ///     .map(|element| *element.unwrap())
    ///     .collect();
    /// assert_eq!(regular, vec![7, 15, 6]);
    /// ```
    pub fn regular(&self) -> OrderView<T> {
        self.view_with(TraversalOrder::Regular, identity_indices(self.len()))
    }

    /// Returns a view of the elements in reversed insertion order.
    pub fn reverse(&self) -> OrderView<T> {
        self.view_with(TraversalOrder::Reverse, reverse_indices(self.len()))
    }

    /// Returns a view starting at the middle element, then alternating left
    /// and right of it.
    ///
    /// The middle position is `len / 2`; the first step after it goes left.
    /// A side that runs out is skipped while the other drains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::collection::MultiOrderVec;
    ///
    /// let collection: MultiOrderVec<i32> = [7, 15, 6, 1, 2].into_iter().collect();
    /// let middle_out: Vec<i32> = collection
    ///     .middle_out()
    ///     .iter()
    ///     .map(|element| *element.unwrap())
    ///     .collect();
    /// assert_eq!(middle_out, vec![6, 15, 1, 7, 2]);
    /// ```
    pub fn middle_out(&self) -> OrderView<T> {
        self.view_with(TraversalOrder::MiddleOut, middle_out_indices(self.len()))
    }

    /// Builds a view from a strategy tag and its computed permutation.
    ///
    /// The view shares the element sequence and revision handle, and stamps
    /// itself with the revision as of this call.
    fn view_with(&self, order: TraversalOrder, indices: Vec<usize>) -> OrderView<T> {
        OrderView::from_parts(
            Arc::clone(&self.elements),
            indices,
            order,
            self.revision(),
            Arc::clone(&self.revision),
        )
    }

    fn bump_revision(&self) {
        // Access is externally serialized (spec'd single mutator); the
        // counter is not a synchronization edge.
        self.revision.fetch_add(1, Ordering::Relaxed);
    }
}

impl<T: Ord> MultiOrderVec<T> {
    /// Returns a view of the elements in ascending value order.
    ///
    /// Equal values keep their insertion order relative to each other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::collection::MultiOrderVec;
    ///
    /// let collection: MultiOrderVec<i32> = [7, 15, 6, 1, 2].into_iter().collect();
    /// let ascending: Vec<i32> = collection
    ///     .ascending()
    ///     .iter()
    ///     .map(|element| *element.unwrap())
    ///     .collect();
    /// assert_eq!(ascending, vec![1, 2, 6, 7, 15]);
    /// ```
    pub fn ascending(&self) -> OrderView<T> {
        self.view_with(TraversalOrder::Ascending, ascending_indices(&self.elements))
    }

    /// Returns a view of the elements in descending value order.
    ///
    /// Equal values keep their insertion order relative to each other.
    pub fn descending(&self) -> OrderView<T> {
        self.view_with(
            TraversalOrder::Descending,
            descending_indices(&self.elements),
        )
    }

    /// Returns a view alternating between the smallest and largest remaining
    /// values: smallest, largest, second-smallest, second-largest, and so on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::collection::MultiOrderVec;
    ///
    /// let collection: MultiOrderVec<i32> = [7, 15, 6, 1, 2].into_iter().collect();
    /// let side_cross: Vec<i32> = collection
    ///     .side_cross()
    ///     .iter()
    ///     .map(|element| *element.unwrap())
    ///     .collect();
    /// assert_eq!(side_cross, vec![1, 15, 2, 7, 6]);
    /// ```
    pub fn side_cross(&self) -> OrderView<T> {
        self.view_with(
            TraversalOrder::SideCross,
            side_cross_indices(&self.elements),
        )
    }
}

impl<T: Clone + Eq + Hash> MultiOrderVec<T> {
    /// Appends a value, updates its occurrence count, and bumps the revision.
    ///
    /// Always succeeds. Every outstanding cursor becomes stale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::collection::MultiOrderVec;
    ///
    /// let mut collection = MultiOrderVec::new();
    /// collection.add(1);
    /// collection.add(1);
    /// assert_eq!(collection.len(), 2);
    /// assert_eq!(collection.count_of(&1), 2);
    /// ```
    pub fn add(&mut self, value: T) {
        *self.membership.entry(value.clone()).or_insert(0) += 1;
        Arc::make_mut(&mut self.elements).push(value);
        self.bump_revision();
    }

    /// Removes **every** occurrence of `value`, preserving the order of the
    /// remaining elements, and bumps the revision exactly once.
    ///
    /// The membership index answers the existence pre-check in O(1); on
    /// failure the collection is left untouched and the revision does not
    /// move.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::NotFound`] if no occurrence of `value` is
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiorder::collection::MultiOrderVec;
    ///
    /// let mut collection: MultiOrderVec<i32> = [1, 2, 2, 3].into_iter().collect();
    /// collection.remove(&2).unwrap();
    /// assert_eq!(collection.as_slice(), &[1, 3]);
    /// assert!(collection.remove(&2).is_err());
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> Result<(), RemoveError>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if self.membership.remove(value).is_none() {
            return Err(RemoveError::NotFound);
        }
        Arc::make_mut(&mut self.elements).retain(|element| element.borrow() != value);
        self.bump_revision();
        Ok(())
    }

    /// Returns `true` if at least one occurrence of `value` is present.
    ///
    /// O(1) amortized via the membership index.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.membership.contains_key(value)
    }

    /// Returns the number of occurrences of `value`.
    ///
    /// O(1) amortized via the membership index.
    pub fn count_of<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.membership.get(value).copied().unwrap_or(0)
    }
}

impl<T> Default for MultiOrderVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for MultiOrderVec<T> {
    /// Clones the collection into an independent store.
    ///
    /// The element sequence is shared clone-on-write, but the clone gets a
    /// fresh revision handle: cursors taken from the original never compare
    /// equal to cursors taken from the clone, and mutating one side never
    /// invalidates the other's cursors.
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            membership: self.membership.clone(),
            revision: Arc::new(AtomicU64::new(self.revision())),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MultiOrderVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for MultiOrderVec<T> {
    /// Renders `"[e0, e1, ..., en-1]"` in insertion order; empty renders
    /// `"[]"`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for MultiOrderVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iterable);
        collection
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for MultiOrderVec<T> {
    /// Extends the collection, behaving exactly as repeated
    /// [`add`](MultiOrderVec::add): one revision bump per element.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for value in iterable {
            self.add(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a MultiOrderVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for MultiOrderVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the collection, yielding elements in insertion order.
    ///
    /// Elements are moved out when this store held the last handle to the
    /// sequence, cloned otherwise.
    fn into_iter(self) -> Self::IntoIter {
        Arc::try_unwrap(self.elements)
            .unwrap_or_else(|shared| shared.as_ref().clone())
            .into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for MultiOrderVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct MultiOrderVecVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> MultiOrderVecVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for MultiOrderVecVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    type Value = MultiOrderVec<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for MultiOrderVec<T>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    /// Deserializes from a plain sequence, rebuilding the membership index;
    /// the revision restarts from the element count, as if built by `add`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(MultiOrderVecVisitor::new())
    }
}

// =============================================================================
// Thread-safety guarantees
// =============================================================================

static_assertions::assert_impl_all!(MultiOrderVec<i32>: Send, Sync);
static_assertions::assert_impl_all!(MultiOrderVec<String>: Send, Sync);
static_assertions::assert_impl_all!(Snapshot<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Membership invariant
    // =========================================================================

    #[rstest]
    fn test_membership_tracks_duplicates() {
        let mut collection = MultiOrderVec::new();
        collection.add(5);
        collection.add(5);
        collection.add(7);

        assert_eq!(collection.count_of(&5), 2);
        assert_eq!(collection.count_of(&7), 1);
        assert_eq!(collection.count_of(&9), 0);
        assert!(collection.contains(&5));
        assert!(!collection.contains(&9));
    }

    #[rstest]
    fn test_remove_zeroes_membership() {
        let mut collection = MultiOrderVec::new();
        collection.add(5);
        collection.add(5);

        collection.remove(&5).unwrap();
        assert_eq!(collection.count_of(&5), 0);
        assert!(!collection.contains(&5));
        assert!(collection.is_empty());
    }

    #[rstest]
    fn test_failed_remove_leaves_revision_alone() {
        let mut collection = MultiOrderVec::new();
        collection.add(1);
        let revision = collection.revision();

        assert_eq!(collection.remove(&2), Err(RemoveError::NotFound));
        assert_eq!(collection.revision(), revision);
        assert_eq!(collection.len(), 1);
    }

    // =========================================================================
    // Revision counter
    // =========================================================================

    #[rstest]
    fn test_revision_counts_mutations_not_occurrences() {
        let mut collection = MultiOrderVec::new();
        assert_eq!(collection.revision(), 0);

        collection.add(2);
        collection.add(2);
        collection.add(2);
        assert_eq!(collection.revision(), 3);

        // Removing three occurrences is one mutation.
        collection.remove(&2).unwrap();
        assert_eq!(collection.revision(), 4);
    }

    #[rstest]
    fn test_clear_on_empty_is_not_a_mutation() {
        let mut collection: MultiOrderVec<i32> = MultiOrderVec::new();
        collection.clear();
        assert_eq!(collection.revision(), 0);

        collection.add(1);
        collection.clear();
        assert_eq!(collection.revision(), 2);
        assert!(collection.is_empty());
    }

    // =========================================================================
    // Clone identity
    // =========================================================================

    #[rstest]
    fn test_clone_is_an_independent_store() {
        let mut original: MultiOrderVec<i32> = [1, 2, 3].into_iter().collect();
        let mut copy = original.clone();

        original.add(4);
        copy.remove(&1).unwrap();

        assert_eq!(original.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(copy.as_slice(), &[2, 3]);
    }

    #[rstest]
    fn test_clone_does_not_invalidate_original_cursors() {
        let original: MultiOrderVec<i32> = [1, 2, 3].into_iter().collect();
        let cursor = original.regular().begin();

        let mut copy = original.clone();
        copy.add(4);

        assert_eq!(cursor.read(), Ok(&1));
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    #[rstest]
    fn test_snapshot_is_immutable_under_mutation() {
        let mut collection: MultiOrderVec<i32> = [1, 2].into_iter().collect();
        let snapshot = collection.snapshot();

        collection.add(3);

        assert_eq!(snapshot.as_slice(), &[1, 2]);
        assert_eq!(snapshot.revision(), 2);
        assert_eq!(collection.revision(), 3);
    }
}
