#![cfg(feature = "serde")]

//! Integration tests for serde support.

use multiorder::collection::MultiOrderVec;
use rstest::rstest;

// =============================================================================
// Serialization
// =============================================================================

#[rstest]
fn test_serializes_as_a_plain_sequence_in_insertion_order() {
    let collection: MultiOrderVec<i32> = [7, 15, 6, 1, 2].into_iter().collect();
    let json = serde_json::to_string(&collection).unwrap();
    assert_eq!(json, "[7,15,6,1,2]");
}

#[rstest]
fn test_empty_collection_serializes_as_empty_array() {
    let collection: MultiOrderVec<i32> = MultiOrderVec::new();
    assert_eq!(serde_json::to_string(&collection).unwrap(), "[]");
}

#[rstest]
fn test_duplicates_survive_serialization() {
    let collection: MultiOrderVec<i32> = [5, 5, 5].into_iter().collect();
    assert_eq!(serde_json::to_string(&collection).unwrap(), "[5,5,5]");
}

// =============================================================================
// Deserialization
// =============================================================================

#[rstest]
fn test_round_trip_preserves_order_and_duplicates() {
    let original: MultiOrderVec<String> = ["b", "a", "b", "c"]
        .into_iter()
        .map(String::from)
        .collect();

    let json = serde_json::to_string(&original).unwrap();
    let restored: MultiOrderVec<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.as_slice(), original.as_slice());
    assert_eq!(restored.to_string(), original.to_string());
}

#[rstest]
fn test_deserialization_rebuilds_the_membership_index() {
    let restored: MultiOrderVec<i32> = serde_json::from_str("[4, 2, 4, 4]").unwrap();

    assert_eq!(restored.count_of(&4), 3);
    assert!(restored.contains(&2));
    assert!(!restored.contains(&7));

    let mut restored = restored;
    restored.remove(&4).unwrap();
    assert_eq!(restored.as_slice(), &[2]);
}

#[rstest]
fn test_deserialized_collection_traverses_normally() {
    let restored: MultiOrderVec<i32> = serde_json::from_str("[7,15,6,1,2]").unwrap();
    let view = restored.side_cross();
    let values: Vec<i32> = view.iter().map(|element| *element.unwrap()).collect();
    assert_eq!(values, vec![1, 15, 2, 7, 6]);
}
