//! Grouping by a derived key, and the projection-based reorder sort.
//!
//! [`inverse_image_by_projection`] partitions a sequence into the inverse
//! image of each distinct key under a projection function, preserving the
//! original relative order of elements inside every group.
//!
//! [`reorder`] builds on it to sort a sequence by a derived key without
//! ever comparing full elements: it groups, sorts only the distinct keys
//! with the caller's comparator, maps each sorted key back to its group,
//! and flattens. When many elements share a projection this runs one
//! comparison sort over the (possibly much smaller) set of distinct keys,
//! and it is stable with respect to original order among elements sharing
//! a key.

use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::TransformError;
use crate::sequence::flatten;

/// Groups elements by the value of `projection`, preserving order within
/// each group.
///
/// Returns a mapping from each distinct projected key to the ordered
/// sub-sequence of elements sharing that key. The mapping's own key order
/// carries no meaning; only the order inside each group does.
///
/// # Errors
///
/// [`TransformError::MissingImage`] for the whole call if `projection`
/// returns `None` for any element, the same all-or-nothing policy as
/// [`map`](crate::sequence::map).
///
/// # Examples
///
/// ```rust
/// use imago::group::inverse_image_by_projection;
///
/// let groups = inverse_image_by_projection(|word: &&str| Some(word.len()), vec!["to", "of", "the"]);
/// let groups = groups.unwrap();
/// assert_eq!(groups[&2], vec!["to", "of"]);
/// assert_eq!(groups[&3], vec!["the"]);
/// ```
pub fn inverse_image_by_projection<T, K, P>(
    mut projection: P,
    preimage: Vec<T>,
) -> Result<FxHashMap<K, Vec<T>>, TransformError>
where
    K: Eq + Hash,
    P: FnMut(&T) -> Option<K>,
{
    let mut groups: FxHashMap<K, Vec<T>> = FxHashMap::default();
    for (index, element) in preimage.into_iter().enumerate() {
        let Some(key) = projection(&element) else {
            return Err(TransformError::MissingImage { index });
        };
        groups.entry(key).or_default().push(element);
    }
    Ok(groups)
}

/// Sorts a sequence by a projected key, comparing keys rather than
/// elements.
///
/// `comparison` orders the distinct projected keys and may assume its two
/// arguments are never equal; tie-break behavior between equal keys is
/// the grouping's original order, which makes the sort stable among
/// elements sharing a key.
///
/// # Errors
///
/// [`TransformError::MissingImage`] if `projection` returns `None` for
/// any element.
///
/// # Examples
///
/// ```rust
/// use imago::group::reorder;
///
/// let sorted = reorder(vec![3, 1, 2], |x| Some(*x), |lhs, rhs| lhs.cmp(rhs));
/// assert_eq!(sorted, Ok(vec![1, 2, 3]));
/// ```
pub fn reorder<T, K, P, C>(
    preimage: Vec<T>,
    projection: P,
    comparison: C,
) -> Result<Vec<T>, TransformError>
where
    K: Eq + Hash,
    P: FnMut(&T) -> Option<K>,
    C: FnMut(&K, &K) -> Ordering,
{
    let keyed = sorted_groups(preimage, projection, comparison)?;
    Ok(flatten(keyed.into_iter().map(|(_, group)| group).collect()))
}

/// Same algorithm as [`reorder`] with the comparator's sense inverted.
///
/// The sorted key sequence is reversed after the sort; the order inside
/// each group is untouched, so stability among elements sharing a key is
/// preserved.
///
/// # Errors
///
/// [`TransformError::MissingImage`] if `projection` returns `None` for
/// any element.
pub fn reorder_reverse<T, K, P, C>(
    preimage: Vec<T>,
    projection: P,
    comparison: C,
) -> Result<Vec<T>, TransformError>
where
    K: Eq + Hash,
    P: FnMut(&T) -> Option<K>,
    C: FnMut(&K, &K) -> Ordering,
{
    let mut keyed = sorted_groups(preimage, projection, comparison)?;
    keyed.reverse();
    Ok(flatten(keyed.into_iter().map(|(_, group)| group).collect()))
}

/// Groups, then sorts the distinct keys. The comparator only ever sees
/// two distinct keys because the grouping's keys are unique.
fn sorted_groups<T, K, P, C>(
    preimage: Vec<T>,
    projection: P,
    mut comparison: C,
) -> Result<Vec<(K, Vec<T>)>, TransformError>
where
    K: Eq + Hash,
    P: FnMut(&T) -> Option<K>,
    C: FnMut(&K, &K) -> Ordering,
{
    let groups = inverse_image_by_projection(projection, preimage)?;
    let mut keyed: Vec<(K, Vec<T>)> = groups.into_iter().collect();
    keyed.sort_by(|lhs, rhs| comparison(&lhs.0, &rhs.0));
    Ok(keyed)
}

// =============================================================================
// Tests
// =============================================================================
