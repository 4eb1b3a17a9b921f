//! Prelude-style combinators over ordered sequences.
//!
//! This module provides the classic higher-order operations (`map`,
//! `filter`, the fold family, `zip`/`unzip`, `flatten`) as free functions
//! over `Vec` and slices, together with the structural accessors `head`,
//! `tail`, `init`, `last`, and `reverse`.
//!
//! # Failure model
//!
//! Per-element functions signal "no usable output" by returning `None`.
//! Length-preserving combinators propagate that marker as failure of the
//! whole call: [`map`] either produces an image for every input position or
//! returns an `Err`; it never returns a sequence with holes.
//!
//! # Laws
//!
//! The combinators satisfy the usual Prelude laws (verified in the
//! `sequence_laws` test suite):
//!
//! ```text
//! map(Some, s)                   == Ok(s)                      // identity
//! map(f, map(g, s)?)             == map(|x| g(x).and_then(f), s)  // composition
//! foldl(f, z, [])                == z
//! foldr(f, z, [])                == z
//! unzip(zip(a, b))               == (a, b)     // when len(a) == len(b)
//! ```

use std::cmp::Ordering;

use crate::error::TransformError;

mod ext;

pub use ext::SequenceExt;

// =============================================================================
// Map / Filter
// =============================================================================

/// Maps a function over a sequence, all-or-nothing.
///
/// Produces the image of every element of `preimage` under `function`, in
/// input order. If `function` returns `None` for any element, the whole
/// call fails with [`TransformError::MissingImage`] and any images computed
/// so far are discarded. An empty preimage trivially succeeds with an empty
/// image.
///
/// In Haskell:
///
/// ```text
/// map :: (a -> b) -> [a] -> [b]
/// map f []     = []
/// map f (x:xs) = f x : map f xs
/// ```
///
/// # Errors
///
/// [`TransformError::MissingImage`] with the index of the first element
/// whose image was absent.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::map;
///
/// let image = map(|x: i32| Some(x * 2), vec![1, 2, 3]);
/// assert_eq!(image, Ok(vec![2, 4, 6]));
/// ```
pub fn map<T, U, F>(mut function: F, preimage: Vec<T>) -> Result<Vec<U>, TransformError>
where
    F: FnMut(T) -> Option<U>,
{
    let mut image = Vec::with_capacity(preimage.len());
    for (index, element) in preimage.into_iter().enumerate() {
        match function(element) {
            Some(value) => image.push(value),
            None => return Err(TransformError::MissingImage { index }),
        }
    }
    Ok(image)
}

/// Keeps the elements of `feed` satisfying `predicate`, in original order.
///
/// Filtering never fails: a predicate returns a plain boolean, not the
/// failure marker.
///
/// In Haskell:
///
/// ```text
/// filter :: (a -> Bool) -> [a] -> [a]
/// filter p []                 = []
/// filter p (x:xs) | p x       = x : filter p xs
///                 | otherwise = filter p xs
/// ```
///
/// # Examples
///
/// ```rust
/// use imago::sequence::filter;
///
/// let even = filter(|x| x % 2 == 0, vec![1, 2, 3, 4]);
/// assert_eq!(even, vec![2, 4]);
/// ```
pub fn filter<T, P>(mut predicate: P, feed: Vec<T>) -> Vec<T>
where
    P: FnMut(&T) -> bool,
{
    feed.into_iter().filter(|element| predicate(element)).collect()
}

// =============================================================================
// Folds
// =============================================================================

/// Left-associative fold: `f(...f(f(zero, s[0]), s[1])..., s[n-1])`.
///
/// Returns `zero` on an empty sequence.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::foldl;
///
/// let difference = foldl(|accumulator, element| accumulator - element, 10, vec![1, 2, 3]);
/// assert_eq!(difference, 4);
/// ```
pub fn foldl<A, B, F>(mut function: F, zero: A, list: Vec<B>) -> A
where
    F: FnMut(A, B) -> A,
{
    let mut accumulator = zero;
    for element in list {
        accumulator = function(accumulator, element);
    }
    accumulator
}

/// Right-associative fold: `f(s[0], f(s[1], ... f(s[n-1], zero)))`.
///
/// Returns `zero` on an empty sequence.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::foldr;
///
/// let difference = foldr(|element, accumulator| element - accumulator, 0, vec![1, 2, 3]);
/// assert_eq!(difference, 2); // 1 - (2 - (3 - 0))
/// ```
pub fn foldr<A, B, F>(mut function: F, zero: A, list: Vec<B>) -> A
where
    F: FnMut(B, A) -> A,
{
    let mut accumulator = zero;
    for element in list.into_iter().rev() {
        accumulator = function(element, accumulator);
    }
    accumulator
}

/// Left fold seeded from the first element.
///
/// # Errors
///
/// [`TransformError::EmptyInput`] on an empty sequence: there is no zero
/// to fall back on.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::foldl1;
///
/// let sum = foldl1(|lhs, rhs| lhs + rhs, vec![1, 2, 3]);
/// assert_eq!(sum, Ok(6));
/// ```
pub fn foldl1<T, F>(function: F, nonempty_list: Vec<T>) -> Result<T, TransformError>
where
    F: FnMut(T, T) -> T,
{
    let mut elements = nonempty_list.into_iter();
    let seed = elements.next().ok_or(TransformError::EmptyInput)?;
    Ok(elements.fold(seed, function))
}

/// Right fold seeded from the last element.
///
/// # Errors
///
/// [`TransformError::EmptyInput`] on an empty sequence.
pub fn foldr1<T, F>(mut function: F, nonempty_list: Vec<T>) -> Result<T, TransformError>
where
    F: FnMut(T, T) -> T,
{
    let mut elements = nonempty_list.into_iter().rev();
    let seed = elements.next().ok_or(TransformError::EmptyInput)?;
    Ok(elements.fold(seed, |accumulator, element| function(element, accumulator)))
}

// =============================================================================
// Extrema
// =============================================================================

/// Returns the greatest element of a non-empty sequence under `less_than`.
///
/// The comparison is a strict ordering over pairs of elements; ties are
/// broken in favor of the first element encountered (a stable,
/// left-to-right fold).
///
/// # Errors
///
/// [`TransformError::EmptyInput`] on an empty sequence.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::maximum;
///
/// let greatest = maximum(|lhs: &i32, rhs: &i32| lhs.cmp(rhs), vec![3, 1, 4, 1]);
/// assert_eq!(greatest, Ok(4));
/// ```
pub fn maximum<T, C>(mut less_than: C, nonempty_list: Vec<T>) -> Result<T, TransformError>
where
    C: FnMut(&T, &T) -> Ordering,
{
    foldl1(
        |current, candidate| {
            if less_than(&current, &candidate) == Ordering::Less {
                candidate
            } else {
                current
            }
        },
        nonempty_list,
    )
}

/// Returns the least element of a non-empty sequence under `less_than`.
///
/// Ties are broken in favor of the first element encountered.
///
/// # Errors
///
/// [`TransformError::EmptyInput`] on an empty sequence.
pub fn minimum<T, C>(mut less_than: C, nonempty_list: Vec<T>) -> Result<T, TransformError>
where
    C: FnMut(&T, &T) -> Ordering,
{
    foldl1(
        |current, candidate| {
            if less_than(&candidate, &current) == Ordering::Less {
                candidate
            } else {
                current
            }
        },
        nonempty_list,
    )
}

// =============================================================================
// Boolean images
// =============================================================================

/// Short-circuiting AND over the image of `predicate`.
///
/// Evaluates strictly left to right and stops at the first `false`.
/// Returns `true` on an empty preimage (vacuous truth).
///
/// # Examples
///
/// ```rust
/// use imago::sequence::conjoin_image;
///
/// assert!(conjoin_image(|x| *x > 0, &[1, 2, 3]));
/// assert!(!conjoin_image(|x| *x > 1, &[1, 2, 3]));
/// ```
pub fn conjoin_image<T, P>(mut predicate: P, preimage: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    for element in preimage {
        if !predicate(element) {
            return false;
        }
    }
    true
}

/// Short-circuiting OR over the image of `predicate`.
///
/// Evaluates strictly left to right and stops at the first `true`.
/// Returns `false` on an empty preimage.
pub fn disjoin_image<T, P>(mut predicate: P, preimage: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    for element in preimage {
        if predicate(element) {
            return true;
        }
    }
    false
}

// =============================================================================
// Zip / Unzip
// =============================================================================

/// Pairs elements of two sequences by index.
///
/// Produces `min(len(lhs), len(rhs))` pairs; trailing elements of the
/// longer sequence are silently dropped.
///
/// In Haskell:
///
/// ```text
/// zip :: [a] -> [b] -> [(a,b)]
/// zip = zipWith (,)
/// ```
///
/// # Examples
///
/// ```rust
/// use imago::sequence::zip;
///
/// let pairs = zip(vec![1, 2, 3], vec!["a", "b"]);
/// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A, B>(lhs_list: Vec<A>, rhs_list: Vec<B>) -> Vec<(A, B)> {
    lhs_list.into_iter().zip(rhs_list).collect()
}

/// Zips two sequences through a binary function, all-or-nothing.
///
/// Truncates to the shorter input like [`zip`], then applies `zipper` to
/// each index-aligned pair under the same nil-propagation policy as
/// [`map`].
///
/// # Errors
///
/// [`TransformError::MissingImage`] if `zipper` produces no image for any
/// pair.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::zip_with;
///
/// let sums = zip_with(|lhs, rhs| Some(lhs + rhs), vec![1, 2], vec![10, 20, 30]);
/// assert_eq!(sums, Ok(vec![11, 22]));
/// ```
pub fn zip_with<A, B, C, F>(
    mut zipper: F,
    lhs_list: Vec<A>,
    rhs_list: Vec<B>,
) -> Result<Vec<C>, TransformError>
where
    F: FnMut(A, B) -> Option<C>,
{
    map(|(lhs, rhs)| zipper(lhs, rhs), zip(lhs_list, rhs_list))
}

/// Splits a sequence of pairs into a pair of sequences.
///
/// Inverse of [`zip`] up to truncation: `unzip(zip(a, b))` recovers the
/// common prefixes of `a` and `b`.
///
/// A dynamically shaped variant that can encounter malformed pairs lives
/// at [`unzip_values`](crate::value::unzip_values).
///
/// # Examples
///
/// ```rust
/// use imago::sequence::unzip;
///
/// let (numbers, letters) = unzip(vec![(1, 'a'), (2, 'b')]);
/// assert_eq!(numbers, vec![1, 2]);
/// assert_eq!(letters, vec!['a', 'b']);
/// ```
pub fn unzip<A, B>(pairs: Vec<(A, B)>) -> (Vec<A>, Vec<B>) {
    pairs.into_iter().unzip()
}

// =============================================================================
// Flatten
// =============================================================================

/// Concatenates one level of nesting, preserving order.
///
/// Sequence `i`'s elements precede sequence `i + 1`'s in the result.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::flatten;
///
/// assert_eq!(flatten(vec![vec![1, 2], vec![3], vec![]]), vec![1, 2, 3]);
/// ```
pub fn flatten<T>(nested: Vec<Vec<T>>) -> Vec<T> {
    nested.into_iter().flatten().collect()
}

// =============================================================================
// Structural accessors
// =============================================================================

/// Returns the first element, or `None` on an empty sequence.
pub fn head<T>(list: &[T]) -> Option<&T> {
    list.first()
}

/// Returns everything after the first element.
///
/// `None` on an empty sequence; an empty slice on a singleton.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), Some(&[2, 3][..]));
/// assert_eq!(tail::<i32>(&[]), None);
/// ```
pub fn tail<T>(list: &[T]) -> Option<&[T]> {
    match list {
        [] => None,
        [_, rest @ ..] => Some(rest),
    }
}

/// Returns everything before the last element.
///
/// `None` on an empty sequence; an empty slice on a singleton.
pub fn init<T>(list: &[T]) -> Option<&[T]> {
    match list {
        [] => None,
        [rest @ .., _] => Some(rest),
    }
}

/// Returns the last element, or `None` on an empty sequence.
pub fn last<T>(list: &[T]) -> Option<&T> {
    list.last()
}

/// Returns the sequence with its element order reversed.
pub fn reverse<T>(list: Vec<T>) -> Vec<T> {
    let mut reversed = list;
    reversed.reverse();
    reversed
}

// =============================================================================
// Tuple map
// =============================================================================

/// Applies a row of functions across a sequence of tuples.
///
/// Treats `functions` as a row vector and each element of `tuples` as a
/// column: `result[i][j] = functions[j](tuples[i][j])`. Every tuple must
/// have exactly as many elements as the function row, and each
/// application is subject to the same nil propagation as [`map`].
///
/// # Errors
///
/// - [`TransformError::ArityMismatch`] if a tuple's length differs from
///   the function row's length.
/// - [`TransformError::MissingImage`] (with the tuple's index) if any
///   application produces no image.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::map_tuples;
///
/// let double: &dyn Fn(i32) -> Option<i32> = &|x| Some(x * 2);
/// let negate: &dyn Fn(i32) -> Option<i32> = &|x| Some(-x);
///
/// let rows = map_tuples(&[double, negate], vec![vec![1, 2], vec![3, 4]]);
/// assert_eq!(rows, Ok(vec![vec![2, -2], vec![6, -4]]));
/// ```
pub fn map_tuples<T, U>(
    functions: &[&dyn Fn(T) -> Option<U>],
    tuples: Vec<Vec<T>>,
) -> Result<Vec<Vec<U>>, TransformError> {
    let expected = functions.len();
    let mut rows = Vec::with_capacity(tuples.len());
    for (index, tuple) in tuples.into_iter().enumerate() {
        if tuple.len() != expected {
            return Err(TransformError::ArityMismatch {
                index,
                expected,
                found: tuple.len(),
            });
        }
        let mut row = Vec::with_capacity(expected);
        for (function, element) in functions.iter().zip(tuple) {
            match function(element) {
                Some(value) => row.push(value),
                None => return Err(TransformError::MissingImage { index }),
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

// =============================================================================
// Tests
// =============================================================================
