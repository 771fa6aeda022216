#![allow(clippy::float_cmp)]

use super::*;

const EPS: f64 = 1e-9;

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment::from_coords(x0, y0, x1, y1).unwrap()
}

fn store_with(segments: &[Segment]) -> SegmentStore {
    let mut store = SegmentStore::new();
    for s in segments {
        store.push(*s);
    }
    store
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = SegmentStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.snapshot().is_empty());
}

#[test]
fn default_matches_new() {
    let store = SegmentStore::default();
    assert!(store.is_empty());
}

// =============================================================
// Insertion order
// =============================================================

#[test]
fn push_preserves_order_and_orientation() {
    let mut store = SegmentStore::new();
    store.push(seg(3.0, 3.0, 0.0, 0.0));
    store.push(seg(0.0, 0.0, 1.0, 0.0));
    store.push(seg(1.0, 0.0, 3.0, 3.0));
    assert_eq!(
        store.snapshot(),
        vec![[[3.0, 3.0], [0.0, 0.0]], [[0.0, 0.0], [1.0, 0.0]], [[1.0, 0.0], [3.0, 3.0]]]
    );
}

#[test]
fn duplicates_are_kept() {
    let s = seg(0.0, 0.0, 1.0, 1.0);
    let store = store_with(&[s, s, s]);
    assert_eq!(store.len(), 3);
}

// =============================================================
// Snapshot independence
// =============================================================

#[test]
fn snapshot_is_unaffected_by_later_mutation() {
    let mut store = store_with(&[seg(0.0, 0.0, 1.0, 0.0)]);
    let before = store.snapshot();
    store.push(seg(1.0, 0.0, 1.0, 1.0));
    store.clear();
    assert_eq!(before, vec![[[0.0, 0.0], [1.0, 0.0]]]);
}

#[test]
fn snapshot_serializes_as_nested_arrays() {
    let store = store_with(&[seg(0.0, 0.0, 1.0, 2.0), seg(1.0, 2.0, -3.5, 0.0)]);
    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json, serde_json::json!([[[0.0, 0.0], [1.0, 2.0]], [[1.0, 2.0], [-3.5, 0.0]]]));
}

// =============================================================
// remove_first_matching
// =============================================================

#[test]
fn remove_matching_forward() {
    let mut store = store_with(&[seg(0.0, 0.0, 1.0, 0.0), seg(0.0, 1.0, 1.0, 1.0)]);
    let removed = store.remove_first_matching(&seg(0.0, 0.0, 1.0, 0.0), EPS);
    assert_eq!(removed, Some(seg(0.0, 0.0, 1.0, 0.0)));
    assert_eq!(store.snapshot(), vec![[[0.0, 1.0], [1.0, 1.0]]]);
}

#[test]
fn remove_matching_reversed_returns_stored_orientation() {
    let mut store = store_with(&[seg(0.0, 0.0, 1.0, 0.0)]);
    let removed = store.remove_first_matching(&seg(1.0, 0.0, 0.0, 0.0), EPS);
    assert_eq!(removed, Some(seg(0.0, 0.0, 1.0, 0.0)));
    assert!(store.is_empty());
}

#[test]
fn remove_only_first_of_duplicates() {
    let s = seg(0.0, 0.0, 1.0, 1.0);
    let mut store = store_with(&[s, seg(5.0, 5.0, 6.0, 6.0), s]);
    store.remove_first_matching(&s, EPS);
    assert_eq!(store.snapshot(), vec![[[5.0, 5.0], [6.0, 6.0]], [[0.0, 0.0], [1.0, 1.0]]]);
}

#[test]
fn remove_keeps_relative_order() {
    let mut store = store_with(&[
        seg(0.0, 0.0, 1.0, 0.0),
        seg(1.0, 0.0, 1.0, 1.0),
        seg(1.0, 1.0, 0.0, 1.0),
        seg(0.0, 1.0, 0.0, 0.0),
    ]);
    store.remove_first_matching(&seg(1.0, 0.0, 1.0, 1.0), EPS);
    assert_eq!(
        store.snapshot(),
        vec![[[0.0, 0.0], [1.0, 0.0]], [[1.0, 1.0], [0.0, 1.0]], [[0.0, 1.0], [0.0, 0.0]]]
    );
}

#[test]
fn remove_missing_returns_none_and_keeps_state() {
    let mut store = store_with(&[seg(0.0, 0.0, 1.0, 1.0)]);
    assert!(store.remove_first_matching(&seg(2.0, 2.0, 3.0, 3.0), EPS).is_none());
    assert!(store.remove_first_matching(&seg(2.0, 2.0, 3.0, 3.0), EPS).is_none());
    assert_eq!(store.snapshot(), vec![[[0.0, 0.0], [1.0, 1.0]]]);
}

#[test]
fn remove_respects_epsilon() {
    let mut store = store_with(&[seg(0.0, 0.0, 1.0, 0.0)]);
    assert!(store.remove_first_matching(&seg(0.0, 0.0, 1.0 + 1e-6, 0.0), EPS).is_none());
    assert!(store.remove_first_matching(&seg(0.0, 0.0, 1.0 + 1e-6, 0.0), 1e-3).is_some());
}

#[test]
fn remove_from_empty_store() {
    let mut store = SegmentStore::new();
    assert!(store.remove_first_matching(&seg(0.0, 0.0, 1.0, 0.0), EPS).is_none());
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_empties_store() {
    let mut store = store_with(&[seg(0.0, 0.0, 1.0, 1.0), seg(1.0, 1.0, 2.0, 2.0)]);
    store.clear();
    assert!(store.is_empty());
    assert!(store.snapshot().is_empty());
}

#[test]
fn clear_on_empty_store() {
    let mut store = SegmentStore::new();
    store.clear();
    assert!(store.is_empty());
}
