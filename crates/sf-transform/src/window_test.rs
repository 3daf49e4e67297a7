use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: Option<i64>,
    at: Option<u32>,
    tag: &'static str,
}

fn row(id: Option<i64>, at: Option<u32>, tag: &'static str) -> Row {
    Row { id, at, tag }
}

#[test]
fn test_latest_per_key_keeps_highest_rank() {
    let rows = vec![
        row(Some(1), Some(1), "old"),
        row(Some(1), Some(3), "newest"),
        row(Some(1), Some(2), "middle"),
        row(Some(2), Some(5), "only"),
    ];
    let out = latest_per_key(rows, |r| r.id, |r| r.at);
    let tags: Vec<_> = out.iter().map(|r| r.tag).collect();
    assert_eq!(tags, vec!["newest", "only"]);
}

#[test]
fn test_latest_per_key_drops_null_keys() {
    let rows = vec![row(None, Some(9), "orphan"), row(Some(4), None, "kept")];
    let out = latest_per_key(rows, |r| r.id, |r| r.at);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].tag, "kept");
}

#[test]
fn test_latest_per_key_null_rank_loses() {
    let rows = vec![row(Some(1), None, "undated"), row(Some(1), Some(1), "dated")];
    let out = latest_per_key(rows, |r| r.id, |r| r.at);
    assert_eq!(out[0].tag, "dated");
}

#[test]
fn test_latest_per_key_tie_keeps_first_in_input() {
    let rows = vec![
        row(Some(7), Some(2), "first"),
        row(Some(7), Some(2), "second"),
    ];
    let out = latest_per_key(rows, |r| r.id, |r| r.at);
    assert_eq!(out[0].tag, "first");
}

#[test]
fn test_latest_per_key_independent_of_input_order() {
    let forward = vec![
        row(Some(3), Some(1), "a"),
        row(Some(1), Some(4), "b"),
        row(Some(3), Some(8), "c"),
        row(Some(1), Some(2), "d"),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    let a = latest_per_key(forward, |r| r.id, |r| r.at);
    let b = latest_per_key(backward, |r| r.id, |r| r.at);
    assert_eq!(a, b);
    assert_eq!(a.iter().map(|r| r.id).collect::<Vec<_>>(), vec![Some(1), Some(3)]);
}

#[test]
fn test_with_next_pairs_following_value() {
    let rows = vec![
        row(Some(1), Some(30), "c"),
        row(Some(1), Some(10), "a"),
        row(Some(1), Some(20), "b"),
    ];
    let out = with_next(rows, |r| r.id, |r| r.at);
    let pairs: Vec<_> = out.iter().map(|(r, next)| (r.tag, *next)).collect();
    assert_eq!(
        pairs,
        vec![
            ("a", Some(Some(20))),
            ("b", Some(Some(30))),
            ("c", None),
        ]
    );
}

#[test]
fn test_with_next_does_not_cross_partitions() {
    let rows = vec![
        row(Some(2), Some(1), "x"),
        row(Some(1), Some(5), "y"),
        row(Some(2), Some(3), "z"),
    ];
    let out = with_next(rows, |r| r.id, |r| r.at);
    let pairs: Vec<_> = out.iter().map(|(r, next)| (r.tag, *next)).collect();
    assert_eq!(
        pairs,
        vec![("y", None), ("x", Some(Some(3))), ("z", None)]
    );
}

#[test]
fn test_with_next_empty_input() {
    let out = with_next(Vec::<Row>::new(), |r| r.id, |r| r.at);
    assert!(out.is_empty());
}
