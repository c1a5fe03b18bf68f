//! Integration tests for list partitioning
//!
//! Pins the exact partition, including the `sub_list_number - 1` divisor.

use commons::collections::{split_chunk_size, split_list, split_slice};
use proptest::prelude::*;

// =============================================================================
// Degenerate Inputs
// =============================================================================

#[test]
fn absent_list_has_no_chunks() {
    for n in [0, 1, 2, 10, usize::MAX] {
        assert!(split_list::<String>(None, n).is_empty());
    }
}

#[test]
fn empty_list_has_no_chunks() {
    for n in [0, 1, 2, 10, usize::MAX] {
        assert!(split_list(Some(Vec::<u8>::new()), n).is_empty());
    }
}

#[test]
fn one_or_fewer_sublists_returns_input() {
    let list = vec!["a".to_string(), "b".to_string()];
    assert_eq!(split_list(Some(list.clone()), 1), vec![list.clone()]);
    assert_eq!(split_list(Some(list.clone()), 0), vec![list]);
}

// =============================================================================
// Partition Shape
// =============================================================================

#[test]
fn ten_into_three() {
    let chunks = split_list(Some((1..=10).collect()), 3);
    assert_eq!(chunks, vec![(1..=5).collect::<Vec<_>>(), (6..=10).collect()]);
}

#[test]
fn seven_into_four() {
    let chunks = split_list(Some((1..=7).collect()), 4);
    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7]]);
}

#[test]
fn chunk_count_differs_from_request() {
    // 12 / (4 - 1) = 4 per chunk, so three chunks rather than four.
    assert_eq!(split_list(Some((0..12).collect::<Vec<_>>()), 4).len(), 3);
    // 13 / (4 - 1) = 4 per chunk, leaving a short fourth chunk.
    assert_eq!(split_list(Some((0..13).collect::<Vec<_>>()), 4).len(), 4);
}

#[test]
fn huge_request_gives_singletons() {
    let chunks = split_list(Some(vec![1, 2, 3]), usize::MAX);
    assert_eq!(chunks, vec![vec![1], vec![2], vec![3]]);
    assert_eq!(split_chunk_size(3, usize::MAX), 1);
}

#[test]
fn chunks_are_independent() {
    let mut chunks = split_list(Some(vec![1, 2, 3, 4]), 3);
    chunks[0].push(99);
    assert_eq!(chunks, vec![vec![1, 2, 99], vec![3, 4]]);
}

#[test]
fn slice_split_leaves_source_untouched() {
    let source = vec!['x', 'y', 'z'];
    let chunks = split_slice(&source, 3);
    assert_eq!(chunks, vec![vec!['x'], vec!['y'], vec!['z']]);
    assert_eq!(source, vec!['x', 'y', 'z']);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn partition_preserves_order_and_size(
        data in prop::collection::vec(any::<u16>(), 0..300),
        n in 0usize..64,
    ) {
        let chunks = split_list(Some(data.clone()), n);
        prop_assert_eq!(chunks.iter().map(Vec::len).sum::<usize>(), data.len());
        prop_assert_eq!(chunks.concat(), data.clone());
        prop_assert_eq!(split_slice(&data, n), chunks);
    }
}
