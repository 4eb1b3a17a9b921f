//! Combinators over associative containers.
//!
//! A mapping can be viewed as a morphism from its key set to its value
//! set; [`transform_mapping`] post-composes a function onto each side of
//! that morphism, under the same nil-propagation policy as
//! [`map`](crate::sequence::map).

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::TransformError;

/// Transforms every key and every value of a mapping, all-or-nothing.
///
/// Applies `key_function` to each key and `value_function` to each value,
/// producing a fresh mapping. If either function returns `None` for any
/// entry, the whole call fails and partial results are discarded.
///
/// If two transformed keys compare equal, exactly one of the entries
/// survives; which one is unspecified, since a mapping's iteration order
/// carries no meaning.
///
/// # Errors
///
/// [`TransformError::MissingImage`] if either function produces no image
/// for some entry. The reported index is the iteration position at which
/// the failure was observed and is informational only.
///
/// # Examples
///
/// ```rust
/// use rustc_hash::FxHashMap;
/// use imago::mapping::transform_mapping;
///
/// let mut ages: FxHashMap<&str, i64> = FxHashMap::default();
/// ages.insert("ada", 36);
///
/// let renamed = transform_mapping(
///     |name| Some(name.to_uppercase()),
///     |age| Some(age + 1),
///     ages,
/// )
/// .unwrap();
/// assert_eq!(renamed["ADA"], 37);
/// ```
pub fn transform_mapping<K, V, K2, V2, FK, FV>(
    mut key_function: FK,
    mut value_function: FV,
    mapping: FxHashMap<K, V>,
) -> Result<FxHashMap<K2, V2>, TransformError>
where
    K2: Eq + Hash,
    FK: FnMut(K) -> Option<K2>,
    FV: FnMut(V) -> Option<V2>,
{
    let mut transformed = FxHashMap::default();
    transformed.reserve(mapping.len());
    for (index, (key, value)) in mapping.into_iter().enumerate() {
        let Some(transformed_key) = key_function(key) else {
            return Err(TransformError::MissingImage { index });
        };
        let Some(transformed_value) = value_function(value) else {
            return Err(TransformError::MissingImage { index });
        };
        transformed.insert(transformed_key, transformed_value);
    }
    Ok(transformed)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mapping_of(entries: &[(&'static str, i64)]) -> FxHashMap<&'static str, i64> {
        entries.iter().copied().collect()
    }

    #[rstest]
    fn test_transform_mapping_transforms_both_sides() {
        let transformed = transform_mapping(
            |key: &str| Some(key.to_uppercase()),
            |value| Some(value * 2),
            mapping_of(&[("a", 1), ("b", 2)]),
        )
        .unwrap();
        assert_eq!(transformed.len(), 2);
        assert_eq!(transformed["A"], 2);
        assert_eq!(transformed["B"], 4);
    }

    #[rstest]
    fn test_transform_mapping_empty() {
        let transformed = transform_mapping(
            |key: &str| Some(key),
            |value: i64| Some(value),
            FxHashMap::default(),
        )
        .unwrap();
        assert!(transformed.is_empty());
    }

    #[rstest]
    fn test_transform_mapping_fails_on_absent_key_image() {
        let transformed = transform_mapping(
            |_: &str| None::<String>,
            |value: i64| Some(value),
            mapping_of(&[("a", 1)]),
        );
        assert!(matches!(
            transformed,
            Err(TransformError::MissingImage { .. })
        ));
    }

    #[rstest]
    fn test_transform_mapping_fails_on_absent_value_image() {
        let transformed = transform_mapping(
            |key: &str| Some(key),
            |_: i64| None::<i64>,
            mapping_of(&[("a", 1), ("b", 2)]),
        );
        assert!(matches!(
            transformed,
            Err(TransformError::MissingImage { .. })
        ));
    }
}
