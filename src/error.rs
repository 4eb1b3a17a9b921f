//! Error types shared by the sequence, grouping, and mapping combinators.
//!
//! All combinators in this crate are pure functions: a failure is reported
//! synchronously to the immediate caller as an `Err`, nothing is logged and
//! nothing is retried. The merge engine has its own error type
//! ([`MergeError`](crate::merge::MergeError)) because its failure modes are
//! about value shapes rather than element positions.

use thiserror::Error;

/// Failure of a sequence, grouping, or mapping combinator.
///
/// Length-preserving operations ([`map`](crate::sequence::map),
/// [`zip_with`](crate::sequence::zip_with),
/// [`inverse_image_by_projection`](crate::group::inverse_image_by_projection),
/// [`concurrent_map`](crate::concurrent::concurrent_map)) are all-or-nothing:
/// the first element whose image is absent fails the whole call and any
/// partial results are discarded.
///
/// # Examples
///
/// ```rust
/// use imago::error::TransformError;
/// use imago::sequence::map;
///
/// let result = map(|x: i32| if x == 2 { None } else { Some(x * 10) }, vec![1, 2, 3]);
/// assert_eq!(result, Err(TransformError::MissingImage { index: 1 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A per-element function produced no image for the element at `index`.
    ///
    /// For operations over unordered mappings the index is the iteration
    /// position at which the failure was observed and is informational only.
    #[error("no image for element at index {index}")]
    MissingImage {
        /// Position of the element whose image was absent.
        index: usize,
    },

    /// An operation that requires a non-empty sequence was given an empty one.
    ///
    /// Raised by [`foldl1`](crate::sequence::foldl1),
    /// [`foldr1`](crate::sequence::foldr1),
    /// [`maximum`](crate::sequence::maximum), and
    /// [`minimum`](crate::sequence::minimum), which have no zero to fall
    /// back on.
    #[error("operation requires a non-empty sequence")]
    EmptyInput,

    /// An element expected to be an ordered pair was not a two-element
    /// sequence.
    ///
    /// Only observable in the dynamic layer: see
    /// [`unzip_values`](crate::value::unzip_values).
    #[error("element at index {index} is not a two-element pair")]
    MalformedPair {
        /// Position of the malformed element.
        index: usize,
    },

    /// A tuple's length did not match the function row it is multiplied
    /// against in [`map_tuples`](crate::sequence::map_tuples).
    #[error("tuple at index {index} has {found} elements, expected {expected}")]
    ArityMismatch {
        /// Position of the offending tuple.
        index: usize,
        /// Length of the function row.
        expected: usize,
        /// Actual length of the tuple.
        found: usize,
    },

    /// No transformation is registered under the requested name.
    ///
    /// Raised by [`TransformRegistry::map_named`](crate::registry::TransformRegistry::map_named).
    #[error("no transform registered under name {name:?}")]
    UnknownTransform {
        /// The name that failed to resolve.
        name: String,
    },
}

// =============================================================================
// Tests
// =============================================================================
