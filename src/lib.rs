//! # imago
//!
//! Prelude-style sequence combinators, structural merge, and concurrent
//! mapping over dynamically shaped values.
//!
//! ## Overview
//!
//! This library provides the classic higher-order operations over ordered
//! sequences and key-value mappings whose element types the library never
//! inspects: it only passes them to caller-supplied functions, tests
//! them for equality, or classifies their runtime shape for merge
//! dispatch. It includes:
//!
//! - **Sequence Combinators**: `map`, `filter`, the fold family,
//!   `zip`/`unzip`, `flatten`, extrema, and short-circuiting boolean
//!   images, with an all-or-nothing failure policy for length-preserving
//!   operations
//! - **Grouping and Reorder**: grouping by a projected key, and a sort
//!   that compares derived keys instead of full elements
//! - **Structural Merge**: recursive, shape-dispatched unification of
//!   mappings, sequences, sets, and scalars with conflict detection
//! - **Concurrent Mapper**: order-preserving parallel `map` over a
//!   bounded worker pool
//! - **Transform Registry**: named dispatch for callers that cannot
//!   construct closures
//!
//! ## Failure model
//!
//! A caller-supplied function declares "no usable output" for an element
//! by returning `None`. Length-preserving combinators propagate that
//! marker as failure of the entire call: they either produce a
//! fully-formed result for every input position or report an error,
//! never a sequence with holes. See
//! [`TransformError`](error::TransformError).
//!
//! ## Feature Flags
//!
//! - `merge`: the dynamic [`value`] model and the [`merge`] engine
//! - `concurrent`: the [`concurrent`] mapper (pulls in `num_cpus`)
//! - `registry`: the named-transform [`registry`] (implies `merge`)
//! - `serde`: `Serialize`/`Deserialize` for [`value::Value`]
//! - `full`: everything above
//!
//! ## Example
//!
//! ```rust
//! use imago::prelude::*;
//!
//! let doubled = map(|x: i32| Some(x * 2), vec![1, 2, 3]);
//! assert_eq!(doubled, Ok(vec![2, 4, 6]));
//!
//! let sorted = reorder(vec![3, 1, 2], |x| Some(*x), |lhs, rhs| lhs.cmp(rhs));
//! assert_eq!(sorted, Ok(vec![1, 2, 3]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the free combinator functions, the extension trait, and
/// the dynamic value and merge types.
///
/// # Usage
///
/// ```rust
/// use imago::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::TransformError;
    pub use crate::group::*;
    pub use crate::mapping::*;
    pub use crate::sequence::*;

    #[cfg(feature = "merge")]
    pub use crate::merge::*;

    #[cfg(feature = "merge")]
    pub use crate::value::*;

    #[cfg(feature = "concurrent")]
    pub use crate::concurrent::*;

    #[cfg(feature = "registry")]
    pub use crate::registry::*;
}

pub mod error;

pub mod sequence;

pub mod group;

pub mod mapping;

#[cfg(feature = "merge")]
pub mod value;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(feature = "concurrent")]
pub mod concurrent;

#[cfg(feature = "registry")]
pub mod registry;
