//! The structural merge engine: recursive, shape-dispatched unification
//! of two dynamic values.
//!
//! [`merge`] is ad-hoc polymorphic over the runtime [`Shape`] of its two
//! operands. Dispatch is an exhaustive match on the variant pair, gated
//! by a [`MergePolicy`] that callers use to document which container
//! shapes they expect to reconcile:
//!
//! | lhs × rhs             | result                                          |
//! |-----------------------|-------------------------------------------------|
//! | mapping × mapping     | union of keys; colliding values merged recursively |
//! | sequence × sequence   | concatenation, lhs then rhs (policy permitting) |
//! | set × set             | disjoint union (policy permitting)              |
//! | scalar × scalar       | the scalar itself when equal, conflict otherwise |
//! | anything else         | conflict                                        |
//!
//! A mapping-of-mapping-of-sequence input recurses through every
//! applicable case until it bottoms out at scalars. There is no sensible
//! merge of two non-container leaves except by equality.
//!
//! # Examples
//!
//! ```rust
//! use imago::merge::{MergePolicy, merge};
//! use imago::value::{Mapping, Value};
//!
//! let mut lhs = Mapping::default();
//! lhs.insert("a".to_string(), Value::Sequence(vec![Value::from(1)]));
//! let mut rhs = Mapping::default();
//! rhs.insert("a".to_string(), Value::Sequence(vec![Value::from(2)]));
//! rhs.insert("b".to_string(), Value::Sequence(vec![Value::from(3)]));
//!
//! let merged = merge(
//!     Value::Mapping(lhs),
//!     Value::Mapping(rhs),
//!     MergePolicy::AppendSequences,
//! )
//! .unwrap();
//!
//! let Value::Mapping(entries) = merged else { panic!() };
//! assert_eq!(
//!     entries["a"],
//!     Value::Sequence(vec![Value::from(1), Value::from(2)])
//! );
//! assert_eq!(entries["b"], Value::Sequence(vec![Value::from(3)]));
//! ```

use thiserror::Error;

use crate::value::{Mapping, Scalar, Shape, Value};

// =============================================================================
// Policy
// =============================================================================

/// Which container shapes a merge is allowed to reconcile.
///
/// Mappings and equal scalars are always mergeable; each policy widens
/// the set of shapes beyond that. Callers should pick the narrowest
/// policy their data requires, since the merge recurses through every
/// shape the policy admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Mappings only: colliding values must themselves be mappings or
    /// equal scalars.
    Mappings,
    /// Mappings plus sequences: colliding sequences are concatenated,
    /// lhs elements first, no deduplication.
    AppendSequences,
    /// Mappings, sequences, and sets: colliding sets are united and must
    /// be disjoint.
    UniteSets,
}

impl MergePolicy {
    const fn admits_sequences(self) -> bool {
        matches!(self, Self::AppendSequences | Self::UniteSets)
    }

    const fn admits_sets(self) -> bool {
        matches!(self, Self::UniteSets)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Failure to reconcile two values.
///
/// All variants are of the same kind (a merge conflict) and are
/// reported synchronously for the whole call: a conflict anywhere in the
/// recursion discards all partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// The two operands have different runtime shapes.
    #[error("cannot merge {lhs} with {rhs}: shapes differ")]
    ShapeMismatch {
        /// Shape of the left operand.
        lhs: Shape,
        /// Shape of the right operand.
        rhs: Shape,
    },

    /// Two scalars collided and are not equal.
    #[error("cannot merge unequal scalars {lhs} and {rhs}")]
    UnequalScalars {
        /// The left scalar.
        lhs: Scalar,
        /// The right scalar.
        rhs: Scalar,
    },

    /// The operands' shape is not admitted by the chosen [`MergePolicy`].
    #[error("{shape} values are not mergeable under this policy")]
    UnsupportedShape {
        /// The shape both operands share.
        shape: Shape,
    },

    /// Two sets were united under a policy requiring disjoint operands.
    #[error("set union requires disjoint operands")]
    OverlappingSets,
}

// =============================================================================
// Merge
// =============================================================================

/// Recursively merges two values under the given policy.
///
/// See the [module documentation](self) for the dispatch table. Both
/// operands are consumed; the result is a fresh value owned by the
/// caller.
///
/// # Errors
///
/// Any [`MergeError`] variant, from any depth of the recursion.
pub fn merge(lhs: Value, rhs: Value, policy: MergePolicy) -> Result<Value, MergeError> {
    match (lhs, rhs) {
        (Value::Mapping(lhs), Value::Mapping(rhs)) => {
            Ok(Value::Mapping(merge_entries(lhs, rhs, policy)?))
        }
        (Value::Sequence(lhs), Value::Sequence(rhs)) => {
            if policy.admits_sequences() {
                let mut concatenated = lhs;
                concatenated.extend(rhs);
                Ok(Value::Sequence(concatenated))
            } else {
                Err(MergeError::UnsupportedShape {
                    shape: Shape::Sequence,
                })
            }
        }
        (Value::Set(lhs), Value::Set(rhs)) => {
            if !policy.admits_sets() {
                return Err(MergeError::UnsupportedShape { shape: Shape::Set });
            }
            if lhs.intersection(&rhs).next().is_some() {
                return Err(MergeError::OverlappingSets);
            }
            let mut united = lhs;
            united.extend(rhs);
            Ok(Value::Set(united))
        }
        (Value::Scalar(lhs), Value::Scalar(rhs)) => {
            if lhs == rhs {
                Ok(Value::Scalar(lhs))
            } else {
                Err(MergeError::UnequalScalars { lhs, rhs })
            }
        }
        (lhs, rhs) => Err(MergeError::ShapeMismatch {
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        }),
    }
}

/// Merges two mappings: keys present in one side are taken as-is, keys
/// present in both have their values merged recursively.
fn merge_entries(lhs: Mapping, rhs: Mapping, policy: MergePolicy) -> Result<Mapping, MergeError> {
    let mut merged = lhs;
    for (key, rhs_value) in rhs {
        let value = match merged.remove(&key) {
            Some(lhs_value) => merge(lhs_value, rhs_value, policy)?,
            None => rhs_value,
        };
        merged.insert(key, value);
    }
    Ok(merged)
}

// =============================================================================
// Named variants
// =============================================================================

/// Merges two mappings, requiring colliding values to be mappings or
/// equal scalars all the way down.
///
/// # Errors
///
/// Any [`MergeError`] variant; in particular
/// [`MergeError::UnsupportedShape`] when a collision reaches a sequence
/// or set.
pub fn merge_mappings(lhs: Mapping, rhs: Mapping) -> Result<Mapping, MergeError> {
    merge_entries(lhs, rhs, MergePolicy::Mappings)
}

/// Merges two mappings or concatenates two sequences.
///
/// Shorthand for [`merge`] with [`MergePolicy::AppendSequences`].
///
/// # Errors
///
/// Any [`MergeError`] variant.
pub fn merge_appending_sequences(lhs: Value, rhs: Value) -> Result<Value, MergeError> {
    merge(lhs, rhs, MergePolicy::AppendSequences)
}

/// Merges two mappings, concatenates two sequences, or disjointly unites
/// two sets.
///
/// Shorthand for [`merge`] with [`MergePolicy::UniteSets`].
///
/// # Errors
///
/// Any [`MergeError`] variant; [`MergeError::OverlappingSets`] when the
/// two sets intersect.
pub fn merge_uniting_sets(lhs: Value, rhs: Value) -> Result<Value, MergeError> {
    merge(lhs, rhs, MergePolicy::UniteSets)
}

// =============================================================================
// Tests
// =============================================================================
