//! Assertion functions for gatherer outputs.

use std::fmt::Debug;

/// Assert that two collections are equal in order and content.
///
/// Panics with the first mismatching index and both full collections.
///
/// ```
/// use gatherbeam::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 3, 6], &[1, 3, 6]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Output length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Output mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that concatenating `chunks` in order reproduces `original`.
///
/// This is the partition property of [`FixedWindow`](crate::FixedWindow) and
/// [`ConsecutiveGroup`](crate::ConsecutiveGroup).
///
/// ```
/// use gatherbeam::testing::assert_flattened_equal;
///
/// assert_flattened_equal(&[vec![1, 2], vec![3]], &[1, 2, 3]);
/// ```
pub fn assert_flattened_equal<T: Debug + PartialEq + Clone>(chunks: &[Vec<T>], original: &[T]) {
    let flat: Vec<T> = chunks.iter().flatten().cloned().collect();
    assert!(
        flat == original,
        "Flattened output does not reproduce the input:\n  Input: {original:?}\n  Flattened: {flat:?}\n  Chunks: {chunks:?}"
    );
}

/// Assert that every chunk is non-empty, holds a single repeated value, and
/// that no two adjacent chunks hold the same value.
pub fn assert_groups_are_maximal<T: Debug + PartialEq>(groups: &[Vec<T>]) {
    for (i, g) in groups.iter().enumerate() {
        let Some(head) = g.first() else {
            panic!("Group {i} is empty:\n  Groups: {groups:?}");
        };
        assert!(
            g.iter().all(|x| x == head),
            "Group {i} mixes values: {g:?}\n  Groups: {groups:?}"
        );
    }
    for (i, pair) in groups.windows(2).enumerate() {
        assert!(
            pair[0].first() != pair[1].first(),
            "Groups {i} and {} share the value {:?}:\n  Groups: {groups:?}",
            i + 1,
            pair[0].first()
        );
    }
}

/// Assert that every element of `collection` satisfies `predicate`.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}: {item:?}\n  Full collection: {collection:?}"
        );
    }
}
