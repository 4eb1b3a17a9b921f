//! Instance-style adapters for the free combinator functions.
//!
//! [`SequenceExt`] lets callers who prefer method syntax write
//! `sequence.image_under(f)` instead of `map(f, sequence)`. Every method
//! is a thin forwarder with the contract of the corresponding free
//! function; none adds behavior.

use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::TransformError;
use crate::group;

/// Method-call sugar over owned sequences.
///
/// # Examples
///
/// ```rust
/// use imago::sequence::SequenceExt;
///
/// let image = vec![1, 2, 3].image_under(|x| Some(x * 2));
/// assert_eq!(image, Ok(vec![2, 4, 6]));
///
/// let odd = vec![1, 2, 3].filtrate_under(|x| x % 2 == 1);
/// assert_eq!(odd, vec![1, 3]);
/// ```
pub trait SequenceExt<T>: Sized {
    /// Method form of [`map`](crate::sequence::map).
    ///
    /// # Errors
    ///
    /// [`TransformError::MissingImage`] if `function` produces no image
    /// for any element.
    fn image_under<U, F>(self, function: F) -> Result<Vec<U>, TransformError>
    where
        F: FnMut(T) -> Option<U>;

    /// Method form of [`filter`](crate::sequence::filter).
    fn filtrate_under<P>(self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool;

    /// Method form of [`foldl`](crate::sequence::foldl).
    fn fold_left_with<A, F>(self, zero: A, function: F) -> A
    where
        F: FnMut(A, T) -> A;

    /// Method form of [`foldr`](crate::sequence::foldr).
    fn fold_right_with<A, F>(self, zero: A, function: F) -> A
    where
        F: FnMut(T, A) -> A;

    /// Method form of [`foldl1`](crate::sequence::foldl1).
    ///
    /// # Errors
    ///
    /// [`TransformError::EmptyInput`] on an empty sequence.
    fn fold_left1_with<F>(self, function: F) -> Result<T, TransformError>
    where
        F: FnMut(T, T) -> T;

    /// Method form of [`foldr1`](crate::sequence::foldr1).
    ///
    /// # Errors
    ///
    /// [`TransformError::EmptyInput`] on an empty sequence.
    fn fold_right1_with<F>(self, function: F) -> Result<T, TransformError>
    where
        F: FnMut(T, T) -> T;

    /// Method form of [`group::inverse_image_by_projection`].
    ///
    /// # Errors
    ///
    /// [`TransformError::MissingImage`] if `projection` produces no key
    /// for any element.
    fn grouped_by<K, P>(self, projection: P) -> Result<FxHashMap<K, Vec<T>>, TransformError>
    where
        K: Eq + Hash,
        P: FnMut(&T) -> Option<K>;

    /// Method form of [`group::reorder`].
    ///
    /// # Errors
    ///
    /// [`TransformError::MissingImage`] if `projection` produces no key
    /// for any element.
    fn reordered_by<K, P, C>(self, projection: P, comparison: C) -> Result<Vec<T>, TransformError>
    where
        K: Eq + Hash,
        P: FnMut(&T) -> Option<K>,
        C: FnMut(&K, &K) -> Ordering;

    /// Method form of [`group::reorder_reverse`].
    ///
    /// # Errors
    ///
    /// [`TransformError::MissingImage`] if `projection` produces no key
    /// for any element.
    fn reordered_by_reverse<K, P, C>(
        self,
        projection: P,
        comparison: C,
    ) -> Result<Vec<T>, TransformError>
    where
        K: Eq + Hash,
        P: FnMut(&T) -> Option<K>,
        C: FnMut(&K, &K) -> Ordering;
}

impl<T> SequenceExt<T> for Vec<T> {
    fn image_under<U, F>(self, function: F) -> Result<Vec<U>, TransformError>
    where
        F: FnMut(T) -> Option<U>,
    {
        super::map(function, self)
    }

    fn filtrate_under<P>(self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        super::filter(predicate, self)
    }

    fn fold_left_with<A, F>(self, zero: A, function: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        super::foldl(function, zero, self)
    }

    fn fold_right_with<A, F>(self, zero: A, function: F) -> A
    where
        F: FnMut(T, A) -> A,
    {
        super::foldr(function, zero, self)
    }

    fn fold_left1_with<F>(self, function: F) -> Result<T, TransformError>
    where
        F: FnMut(T, T) -> T,
    {
        super::foldl1(function, self)
    }

    fn fold_right1_with<F>(self, function: F) -> Result<T, TransformError>
    where
        F: FnMut(T, T) -> T,
    {
        super::foldr1(function, self)
    }

    fn grouped_by<K, P>(self, projection: P) -> Result<FxHashMap<K, Vec<T>>, TransformError>
    where
        K: Eq + Hash,
        P: FnMut(&T) -> Option<K>,
    {
        group::inverse_image_by_projection(projection, self)
    }

    fn reordered_by<K, P, C>(self, projection: P, comparison: C) -> Result<Vec<T>, TransformError>
    where
        K: Eq + Hash,
        P: FnMut(&T) -> Option<K>,
        C: FnMut(&K, &K) -> Ordering,
    {
        group::reorder(self, projection, comparison)
    }

    fn reordered_by_reverse<K, P, C>(
        self,
        projection: P,
        comparison: C,
    ) -> Result<Vec<T>, TransformError>
    where
        K: Eq + Hash,
        P: FnMut(&T) -> Option<K>,
        C: FnMut(&K, &K) -> Ordering,
    {
        group::reorder_reverse(self, projection, comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_image_under_forwards_to_map() {
        let image = vec![1, 2].image_under(|x| Some(x + 1));
        assert_eq!(image, Ok(vec![2, 3]));
    }

    #[rstest]
    fn test_fold_left_with_matches_free_function() {
        let via_method = vec![1, 2, 3].fold_left_with(0, |a, b| a + b);
        assert_eq!(via_method, 6);
    }

    #[rstest]
    fn test_reordered_by_sorts_by_projection() {
        let reordered = vec![3, 1, 2].reordered_by(|x| Some(*x), |a, b| a.cmp(b));
        assert_eq!(reordered, Ok(vec![1, 2, 3]));
    }

    #[rstest]
    fn test_fold_right1_with_empty_fails() {
        let result = Vec::<i32>::new().fold_right1_with(|a, b| a + b);
        assert_eq!(result, Err(TransformError::EmptyInput));
    }
}
