//! Integration tests for the structural merge engine over nested
//! dynamic values.

#![cfg(feature = "merge")]

use imago::merge::{
    MergeError, MergePolicy, merge, merge_appending_sequences, merge_mappings, merge_uniting_sets,
};
use imago::value::{Mapping, Scalar, Set, Shape, Value};
use rstest::rstest;

fn mapping_of(entries: Vec<(&str, Value)>) -> Mapping {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn sequence_of(elements: Vec<i64>) -> Value {
    Value::Sequence(elements.into_iter().map(Value::from).collect())
}

fn set_of(elements: Vec<&str>) -> Set {
    elements.into_iter().map(Scalar::from).collect()
}

// =============================================================================
// Mapping merges
// =============================================================================

#[rstest]
fn merge_takes_single_sided_keys_and_appends_colliding_sequences() {
    // merge({"a":[1]}, {"a":[2], "b":[3]}) == {"a":[1,2], "b":[3]}
    let merged = merge_appending_sequences(
        Value::Mapping(mapping_of(vec![("a", sequence_of(vec![1]))])),
        Value::Mapping(mapping_of(vec![
            ("a", sequence_of(vec![2])),
            ("b", sequence_of(vec![3])),
        ])),
    )
    .unwrap();

    let Value::Mapping(entries) = merged else {
        panic!("mapping expected");
    };
    assert_eq!(entries["a"], sequence_of(vec![1, 2]));
    assert_eq!(entries["b"], sequence_of(vec![3]));
}

#[rstest]
fn merge_unequal_scalars_is_a_conflict() {
    // merge({"a":1}, {"a":2}) fails.
    let merged = merge_mappings(
        mapping_of(vec![("a", Value::from(1))]),
        mapping_of(vec![("a", Value::from(2))]),
    );
    assert_eq!(
        merged,
        Err(MergeError::UnequalScalars {
            lhs: Scalar::Int(1),
            rhs: Scalar::Int(2),
        })
    );
}

#[rstest]
fn merge_recurses_through_mapping_of_mapping_of_sequence() {
    let lhs = mapping_of(vec![(
        "config",
        Value::Mapping(mapping_of(vec![
            ("paths", sequence_of(vec![1, 2])),
            ("name", Value::from("shared")),
        ])),
    )]);
    let rhs = mapping_of(vec![(
        "config",
        Value::Mapping(mapping_of(vec![
            ("paths", sequence_of(vec![3])),
            ("name", Value::from("shared")),
            ("extra", Value::from(true)),
        ])),
    )]);

    let merged = merge_appending_sequences(Value::Mapping(lhs), Value::Mapping(rhs)).unwrap();

    let Value::Mapping(entries) = merged else {
        panic!("mapping expected");
    };
    let Value::Mapping(config) = &entries["config"] else {
        panic!("nested mapping expected");
    };
    assert_eq!(config["paths"], sequence_of(vec![1, 2, 3]));
    assert_eq!(config["name"], Value::from("shared"));
    assert_eq!(config["extra"], Value::from(true));
}

#[rstest]
fn merge_empty_mappings() {
    let merged = merge_mappings(Mapping::default(), Mapping::default()).unwrap();
    assert!(merged.is_empty());
}

// =============================================================================
// Shape dispatch
// =============================================================================

#[rstest]
#[case::sequence_vs_mapping(
    sequence_of(vec![1]),
    Value::Mapping(Mapping::default()),
    Shape::Sequence,
    Shape::Mapping
)]
#[case::scalar_vs_set(
    Value::from(1),
    Value::Set(Set::default()),
    Shape::Scalar,
    Shape::Set
)]
#[case::mapping_vs_scalar(
    Value::Mapping(Mapping::default()),
    Value::from("x"),
    Shape::Mapping,
    Shape::Scalar
)]
fn merge_mismatched_shapes_conflicts(
    #[case] lhs: Value,
    #[case] rhs: Value,
    #[case] lhs_shape: Shape,
    #[case] rhs_shape: Shape,
) {
    let merged = merge(lhs, rhs, MergePolicy::UniteSets);
    assert_eq!(
        merged,
        Err(MergeError::ShapeMismatch {
            lhs: lhs_shape,
            rhs: rhs_shape,
        })
    );
}

#[rstest]
fn sequence_concatenation_preserves_order_without_deduplication() {
    let merged = merge_appending_sequences(sequence_of(vec![1, 2]), sequence_of(vec![2, 1]));
    assert_eq!(merged, Ok(sequence_of(vec![1, 2, 2, 1])));
}

// =============================================================================
// Set union
// =============================================================================

#[rstest]
fn disjoint_sets_unite() {
    let merged = merge_uniting_sets(
        Value::Set(set_of(vec!["a", "b"])),
        Value::Set(set_of(vec!["c"])),
    );
    assert_eq!(merged, Ok(Value::Set(set_of(vec!["a", "b", "c"]))));
}

#[rstest]
fn overlapping_sets_conflict() {
    let merged = merge_uniting_sets(
        Value::Set(set_of(vec!["a", "b"])),
        Value::Set(set_of(vec!["b", "c"])),
    );
    assert_eq!(merged, Err(MergeError::OverlappingSets));
}

#[rstest]
fn sets_nested_under_colliding_keys_follow_the_policy() {
    let lhs = mapping_of(vec![("tags", Value::Set(set_of(vec!["x"])))]);
    let rhs = mapping_of(vec![("tags", Value::Set(set_of(vec!["y"])))]);

    let united = merge(
        Value::Mapping(lhs.clone()),
        Value::Mapping(rhs.clone()),
        MergePolicy::UniteSets,
    )
    .unwrap();
    let Value::Mapping(entries) = united else {
        panic!("mapping expected");
    };
    assert_eq!(entries["tags"], Value::Set(set_of(vec!["x", "y"])));

    // The narrower policy refuses the same input.
    let refused = merge(
        Value::Mapping(lhs),
        Value::Mapping(rhs),
        MergePolicy::AppendSequences,
    );
    assert_eq!(
        refused,
        Err(MergeError::UnsupportedShape { shape: Shape::Set })
    );
}
