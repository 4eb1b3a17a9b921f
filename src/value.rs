//! The dynamic value model driving the structural merge engine.
//!
//! Callers of the merge engine hand over values whose shape is only known
//! at run time. Rather than introspecting arbitrary types, the shape set
//! is a closed tagged variant: a [`Value`] is a [`Scalar`], an ordered
//! [`Value::Sequence`], a string-keyed [`Value::Mapping`], or a
//! [`Value::Set`] of scalars. An exhaustive match on the variant pair
//! drives merge dispatch (see [`merge`](crate::merge)), which makes the
//! dispatch set and its failure modes explicit and exhaustively testable.
//!
//! # Examples
//!
//! ```rust
//! use imago::value::{Scalar, Shape, Value};
//!
//! let value = Value::Sequence(vec![Value::from(1), Value::from("two")]);
//! assert_eq!(value.shape(), Shape::Sequence);
//! ```

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::TransformError;

/// A string-keyed associative container of dynamic values.
pub type Mapping = FxHashMap<String, Value>;

/// An unordered collection of unique scalars, used by the merge engine's
/// union case.
pub type Set = FxHashSet<Scalar>;

// =============================================================================
// Scalar
// =============================================================================

/// A leaf value with no container structure.
///
/// Scalars double as set elements and therefore carry `Eq` and `Hash`;
/// floating-point numbers are deliberately excluded so that both hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A text string.
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Text(value) => write!(formatter, "{value:?}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// =============================================================================
// Value
// =============================================================================

/// A dynamically shaped value: scalar, sequence, mapping, or set.
///
/// All variants are transient, owned data; no value outlives the call
/// that produced it and there is no interning or caching behind the
/// scenes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A leaf value.
    Scalar(Scalar),
    /// An ordered, finite sequence of values.
    Sequence(Vec<Value>),
    /// A string-keyed mapping of values.
    Mapping(Mapping),
    /// An unordered set of unique scalars.
    Set(Set),
}

impl Value {
    /// Returns the runtime shape of this value.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Sequence(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
            Self::Set(_) => Shape::Set,
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::Text(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::Text(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Self::Sequence(elements)
    }
}

impl From<Mapping> for Value {
    fn from(entries: Mapping) -> Self {
        Self::Mapping(entries)
    }
}

impl From<Set> for Value {
    fn from(elements: Set) -> Self {
        Self::Set(elements)
    }
}

// =============================================================================
// Shape
// =============================================================================

/// The runtime shape of a [`Value`], used for merge dispatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A leaf value.
    Scalar,
    /// An ordered sequence.
    Sequence,
    /// An associative mapping.
    Mapping,
    /// An unordered set.
    Set,
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Set => "set",
        };
        write!(formatter, "{name}")
    }
}

// =============================================================================
// Value-level combinators
// =============================================================================

/// Splits a sequence of dynamic pairs into a pair of sequences.
///
/// Each element of `pairs` must be a [`Value::Sequence`] of length
/// exactly two; this is where the typed
/// [`unzip`](crate::sequence::unzip) contract meets dynamically shaped
/// data and can actually observe a malformed pair.
///
/// # Errors
///
/// [`TransformError::MalformedPair`] with the index of the first element
/// that is not a two-element sequence.
///
/// # Examples
///
/// ```rust
/// use imago::value::{Value, unzip_values};
///
/// let pairs = vec![
///     Value::Sequence(vec![Value::from(1), Value::from("a")]),
///     Value::Sequence(vec![Value::from(2), Value::from("b")]),
/// ];
/// let (firsts, seconds) = unzip_values(pairs).unwrap();
/// assert_eq!(firsts, vec![Value::from(1), Value::from(2)]);
/// assert_eq!(seconds, vec![Value::from("a"), Value::from("b")]);
/// ```
pub fn unzip_values(pairs: Vec<Value>) -> Result<(Vec<Value>, Vec<Value>), TransformError> {
    let mut firsts = Vec::with_capacity(pairs.len());
    let mut seconds = Vec::with_capacity(pairs.len());
    for (index, pair) in pairs.into_iter().enumerate() {
        match pair {
            Value::Sequence(elements) if elements.len() == 2 => {
                let mut elements = elements.into_iter();
                if let (Some(first), Some(second)) = (elements.next(), elements.next()) {
                    firsts.push(first);
                    seconds.push(second);
                }
            }
            _ => return Err(TransformError::MalformedPair { index }),
        }
    }
    Ok((firsts, seconds))
}

/// Applies a function to every non-mapping value in a nested mapping.
///
/// Values that are themselves mappings are recursed into; every other
/// value is replaced by its image under `function`, keys unchanged. The
/// whole call fails if `function` produces no image anywhere in the
/// tree.
///
/// # Errors
///
/// [`TransformError::MissingImage`]; the reported index is the iteration
/// position within the mapping where the failure was observed.
///
/// # Examples
///
/// ```rust
/// use imago::value::{Mapping, Value, map_through_nested_mappings};
///
/// let mut inner = Mapping::default();
/// inner.insert("count".to_string(), Value::from(2));
/// let mut outer = Mapping::default();
/// outer.insert("stats".to_string(), Value::Mapping(inner));
///
/// let doubled = map_through_nested_mappings(
///     &|value| match value {
///         Value::Scalar(imago::value::Scalar::Int(n)) => Some(Value::from(n * 2)),
///         other => Some(other),
///     },
///     outer,
/// )
/// .unwrap();
///
/// let Value::Mapping(stats) = &doubled["stats"] else { panic!() };
/// assert_eq!(stats["count"], Value::from(4));
/// ```
pub fn map_through_nested_mappings<F>(
    function: &F,
    preimage: Mapping,
) -> Result<Mapping, TransformError>
where
    F: Fn(Value) -> Option<Value>,
{
    let mut image = Mapping::default();
    image.reserve(preimage.len());
    for (index, (key, value)) in preimage.into_iter().enumerate() {
        let transformed = match value {
            Value::Mapping(nested) => Value::Mapping(map_through_nested_mappings(function, nested)?),
            other => function(other).ok_or(TransformError::MissingImage { index })?,
        };
        image.insert(key, transformed);
    }
    Ok(image)
}

// =============================================================================
// Tests
// =============================================================================
