//! Integration tests for Display trait implementations.

use multiorder::prelude::*;
use rstest::rstest;

// =============================================================================
// MultiOrderVec
// =============================================================================

#[rstest]
fn test_empty_collection_renders_brackets() {
    let collection: MultiOrderVec<i32> = MultiOrderVec::new();
    assert_eq!(collection.to_string(), "[]");
}

#[rstest]
fn test_single_element_has_no_separator() {
    let mut collection = MultiOrderVec::new();
    collection.add(314);
    assert_eq!(collection.to_string(), "[314]");
}

#[rstest]
fn test_elements_render_comma_space_separated_in_insertion_order() {
    let mut collection = MultiOrderVec::new();
    collection.add(1);
    collection.add(2);
    assert_eq!(collection.to_string(), "[1, 2]");
}

#[rstest]
fn test_string_payloads_render_unquoted() {
    let collection: MultiOrderVec<String> = ["banana", "apple"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(collection.to_string(), "[banana, apple]");
}

#[rstest]
fn test_display_reflects_removal() {
    let mut collection: MultiOrderVec<i32> = [1, 2, 1, 3].into_iter().collect();
    collection.remove(&1).unwrap();
    assert_eq!(collection.to_string(), "[2, 3]");
}

#[rstest]
fn test_debug_renders_as_list() {
    let collection: MultiOrderVec<i32> = [1, 2].into_iter().collect();
    assert_eq!(format!("{collection:?}"), "[1, 2]");
}

// =============================================================================
// TraversalOrder
// =============================================================================

#[rstest]
#[case(TraversalOrder::Regular, "Regular")]
#[case(TraversalOrder::Reverse, "Reverse")]
#[case(TraversalOrder::Ascending, "Ascending")]
#[case(TraversalOrder::Descending, "Descending")]
#[case(TraversalOrder::SideCross, "SideCross")]
#[case(TraversalOrder::MiddleOut, "MiddleOut")]
fn test_order_names(#[case] order: TraversalOrder, #[case] expected: &str) {
    assert_eq!(order.to_string(), expected);
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
fn test_error_messages_carry_context() {
    let mut collection: MultiOrderVec<i32> = [1].into_iter().collect();
    let view = collection.regular();
    let cursor = view.begin();
    collection.add(2);

    let error = cursor.read().unwrap_err();
    assert_eq!(
        error.to_string(),
        "collection was modified during traversal (stamp 1, revision 2)"
    );
}
