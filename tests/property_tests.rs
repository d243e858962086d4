//! Property-based tests for the classifier
//!
//! Sides are drawn from the accepted range `1..=200` unless a test is about
//! rejected input.

use itertools::Itertools;
use proptest::prelude::*;
use triangle_classify::{classify, Classification};

fn side() -> impl Strategy<Value = i64> {
    1i64..=200
}

fn is_triangle(a: i64, b: i64, c: i64) -> bool {
    a + b > c && a + c > b && b + c > a
}

proptest! {
    #[test]
    fn valid_input_is_never_invalid(a in side(), b in side(), c in side()) {
        prop_assert_ne!(classify(a, b, c), Classification::InvalidInput);
    }

    #[test]
    fn permutation_invariant(a in side(), b in side(), c in side()) {
        let expected = classify(a, b, c);
        for p in [a, b, c].into_iter().permutations(3) {
            prop_assert_eq!(classify(p[0], p[1], p[2]), expected);
        }
    }

    #[test]
    fn not_a_triangle(a in side(), b in side(), c in side()) {
        prop_assume!(!is_triangle(a, b, c));
        prop_assert_eq!(classify(a, b, c), Classification::NotATriangle);
    }

    #[test]
    fn valid_triangle(a in side(), b in side(), c in side()) {
        prop_assume!(is_triangle(a, b, c));
        prop_assert_ne!(classify(a, b, c), Classification::NotATriangle);
        prop_assert!(classify(a, b, c).is_triangle());
    }

    #[test]
    fn equilateral(a in side()) {
        prop_assert_eq!(classify(a, a, a), Classification::Equilateral);
    }

    #[test]
    fn isoceles(a in side(), b in side()) {
        prop_assume!(a != b && 2 * a > b);
        prop_assert_eq!(classify(a, a, b), Classification::Isoceles);
        prop_assert_eq!(classify(a, b, a), Classification::Isoceles);
        prop_assert_eq!(classify(b, a, a), Classification::Isoceles);
    }

    #[test]
    fn scaled_pythagorean_triples(
        k in 1i64..=8,
        (x, y, z) in prop_oneof![Just((3i64, 4i64, 5i64)), Just((5, 12, 13)), Just((8, 15, 17)), Just((7, 24, 25))],
    ) {
        prop_assert_eq!(classify(k * x, k * y, k * z), Classification::Right);
    }

    #[test]
    fn right_means_pythagorean(a in side(), b in side(), c in side()) {
        let mut s = [a, b, c];
        s.sort_unstable();
        let pythagorean = s[0] * s[0] + s[1] * s[1] == s[2] * s[2];
        prop_assert_eq!(classify(a, b, c) == Classification::Right, pythagorean);
    }

    #[test]
    fn out_of_range_is_invalid(bad in prop_oneof![i64::MIN..=0, 201i64..=i64::MAX], b in side(), c in side()) {
        prop_assert_eq!(classify(bad, b, c), Classification::InvalidInput);
        prop_assert_eq!(classify(b, bad, c), Classification::InvalidInput);
        prop_assert_eq!(classify(b, c, bad), Classification::InvalidInput);
    }

    #[test]
    fn fractional_is_invalid(x in 0.0f64..=200.0, b in side(), c in side()) {
        prop_assume!(x.fract() != 0.0);
        prop_assert_eq!(classify(x, b, c), Classification::InvalidInput);
    }

    #[test]
    fn text_is_invalid(s in "\\PC*", b in side(), c in side()) {
        prop_assert_eq!(classify(s.as_str(), b, c), Classification::InvalidInput);
    }
}
