//! Property-based tests for the sequence combinator laws.
//!
//! This suite verifies the Prelude laws the combinators promise:
//!
//! ## Map Laws
//! - **Identity**: `map(Some, s) == Ok(s)`
//! - **Length preservation**: `len(map(f, s)) == len(s)` whenever map succeeds
//! - **Composition**: `map(f, map(g, s)) == map(f . g, s)` when both succeed
//!
//! ## Fold Laws
//! - `foldl(f, z, []) == z` and `foldr(f, z, []) == z` for any `f, z`
//! - `foldl1` and `foldr1` agree with their seeded counterparts on
//!   non-empty input
//!
//! ## Zip Laws
//! - `zip` truncates to the shorter input
//! - `unzip(zip(a, b))` recovers the common prefixes of `a` and `b`
//!
//! Using proptest, random inputs exercise these laws across a wide range
//! of values.

use imago::error::TransformError;
use imago::sequence::{
    filter, flatten, foldl, foldl1, foldr, foldr1, map, maximum, minimum, reverse, unzip, zip,
};
use proptest::prelude::*;

// =============================================================================
// Map Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping the always-present identity returns the input.
    #[test]
    fn prop_map_identity(sequence in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(map(Some, sequence.clone()), Ok(sequence));
    }

    /// Length preservation: a successful map yields exactly one image per
    /// input position.
    #[test]
    fn prop_map_preserves_length(sequence in prop::collection::vec(any::<i32>(), 0..64)) {
        let length = sequence.len();
        let image = map(|x| Some(x.wrapping_mul(3)), sequence).unwrap();
        prop_assert_eq!(image.len(), length);
    }

    /// Composition Law: map(f, map(g, s)) == map(f . g, s).
    #[test]
    fn prop_map_composition(sequence in prop::collection::vec(any::<i32>(), 0..64)) {
        let g = |x: i32| Some(x.wrapping_add(1));
        let f = |x: i32| Some(x.wrapping_mul(2));

        let two_passes = map(f, map(g, sequence.clone()).unwrap());
        let composed = map(|x| g(x).and_then(f), sequence);

        prop_assert_eq!(two_passes, composed);
    }

    /// One absent image fails the whole call, whatever the input.
    #[test]
    fn prop_map_all_or_nothing(
        sequence in prop::collection::vec(any::<i32>(), 1..64),
        position in any::<prop::sample::Index>(),
    ) {
        let failing = position.index(sequence.len());
        let mut seen = 0usize;
        let image = map(
            |x: i32| {
                let index = seen;
                seen += 1;
                if index == failing { None } else { Some(x) }
            },
            sequence,
        );
        prop_assert_eq!(image, Err(TransformError::MissingImage { index: failing }));
    }
}

// =============================================================================
// Filter Laws
// =============================================================================

proptest! {
    /// Filtering returns a sub-sequence: every kept element satisfies the
    /// predicate and original order is preserved.
    #[test]
    fn prop_filter_subsequence(sequence in prop::collection::vec(any::<i32>(), 0..64)) {
        let kept = filter(|x| x % 2 == 0, sequence.clone());
        prop_assert!(kept.iter().all(|x| x % 2 == 0));

        let expected: Vec<i32> = sequence.into_iter().filter(|x| x % 2 == 0).collect();
        prop_assert_eq!(kept, expected);
    }
}

// =============================================================================
// Fold Laws
// =============================================================================

proptest! {
    /// Empty fold returns the zero, for arbitrary zero values.
    #[test]
    fn prop_fold_empty_returns_zero(zero in any::<i64>()) {
        prop_assert_eq!(foldl(|a, b: i64| a.wrapping_add(b), zero, Vec::new()), zero);
        prop_assert_eq!(foldr(|a: i64, b| a.wrapping_add(b), zero, Vec::new()), zero);
    }

    /// foldl1 agrees with foldl seeded from the head.
    #[test]
    fn prop_foldl1_agrees_with_seeded_foldl(
        head in any::<i64>(),
        rest in prop::collection::vec(any::<i64>(), 0..32),
    ) {
        let mut sequence = vec![head];
        sequence.extend(rest.clone());

        let via_foldl1 = foldl1(|a, b| a.wrapping_sub(b), sequence).unwrap();
        let via_foldl = foldl(|a, b| a.wrapping_sub(b), head, rest);
        prop_assert_eq!(via_foldl1, via_foldl);
    }

    /// foldr1 agrees with foldr seeded from the last element.
    #[test]
    fn prop_foldr1_agrees_with_seeded_foldr(
        init in prop::collection::vec(any::<i64>(), 0..32),
        last in any::<i64>(),
    ) {
        let mut sequence = init.clone();
        sequence.push(last);

        let via_foldr1 = foldr1(|a, b| a.wrapping_sub(b), sequence).unwrap();
        let via_foldr = foldr(|a, b| a.wrapping_sub(b), last, init);
        prop_assert_eq!(via_foldr1, via_foldr);
    }

    /// maximum/minimum agree with the standard library extrema.
    #[test]
    fn prop_extrema_agree_with_std(sequence in prop::collection::vec(any::<i32>(), 1..64)) {
        let greatest = maximum(|a, b| a.cmp(b), sequence.clone()).unwrap();
        let least = minimum(|a, b| a.cmp(b), sequence.clone()).unwrap();
        prop_assert_eq!(Some(&greatest), sequence.iter().max());
        prop_assert_eq!(Some(&least), sequence.iter().min());
    }
}

// =============================================================================
// Zip / Unzip Laws
// =============================================================================

proptest! {
    /// zip produces min(len(a), len(b)) pairs, pairing by index.
    #[test]
    fn prop_zip_truncates_to_shorter(
        lhs in prop::collection::vec(any::<i32>(), 0..64),
        rhs in prop::collection::vec(any::<i32>(), 0..64),
    ) {
        let common = lhs.len().min(rhs.len());
        let pairs = zip(lhs.clone(), rhs.clone());
        prop_assert_eq!(pairs.len(), common);
        for (index, (a, b)) in pairs.iter().enumerate() {
            prop_assert_eq!(*a, lhs[index]);
            prop_assert_eq!(*b, rhs[index]);
        }
    }

    /// unzip(zip(a, b)) recovers the common prefixes of a and b.
    #[test]
    fn prop_unzip_zip_round_trip(
        lhs in prop::collection::vec(any::<i32>(), 0..64),
        rhs in prop::collection::vec(any::<i32>(), 0..64),
    ) {
        let common = lhs.len().min(rhs.len());
        let (recovered_lhs, recovered_rhs) = unzip(zip(lhs.clone(), rhs.clone()));
        prop_assert_eq!(recovered_lhs, lhs[..common].to_vec());
        prop_assert_eq!(recovered_rhs, rhs[..common].to_vec());
    }
}

// =============================================================================
// Flatten / Reverse Laws
// =============================================================================

proptest! {
    /// Flattening preserves the order of elements across nesting.
    #[test]
    fn prop_flatten_preserves_order(
        nested in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..8), 0..16),
    ) {
        let expected: Vec<i32> = nested.iter().flatten().copied().collect();
        prop_assert_eq!(flatten(nested), expected);
    }

    /// Reversing twice is the identity.
    #[test]
    fn prop_reverse_involution(sequence in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(reverse(reverse(sequence.clone())), sequence);
    }
}
