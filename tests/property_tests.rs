//! Property-based tests for the descriptor algebra.
//!
//! Every operation is checked against a straightforward bit-by-bit
//! reference, plus the metric laws for distance.

use bitvoc::{
    distance, expand_to_floats, from_text, majority_threshold, mean, to_text, BriskDescriptor,
    Descriptor, DescriptorError, BRISK_BYTES,
};
use proptest::prelude::*;

fn bit_reference(bytes: &[u8], bit: usize) -> bool {
    (bytes[bit / 8] >> (7 - bit % 8)) & 1 == 1
}

fn arb_brisk() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), BRISK_BYTES)
}

fn arb_collection(max: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(arb_brisk(), 0..max)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    // ─────────────────────────────────────────────────────────────────────────
    // Distance
    // ─────────────────────────────────────────────────────────────────────────

    /// distance(a, b) == distance(b, a)
    #[test]
    fn distance_symmetric(a in arb_brisk(), b in arb_brisk()) {
        prop_assert_eq!(
            distance::<BRISK_BYTES>(&a, &b).unwrap(),
            distance::<BRISK_BYTES>(&b, &a).unwrap()
        );
    }

    /// distance is zero exactly on identical descriptors.
    #[test]
    fn distance_identity(a in arb_brisk(), b in arb_brisk()) {
        prop_assert_eq!(distance::<BRISK_BYTES>(&a, &a).unwrap(), 0);
        let d = distance::<BRISK_BYTES>(&a, &b).unwrap();
        prop_assert_eq!(d == 0, a == b);
    }

    /// distance(a, b) + distance(b, c) >= distance(a, c)
    #[test]
    fn distance_triangle(a in arb_brisk(), b in arb_brisk(), c in arb_brisk()) {
        let ab = distance::<BRISK_BYTES>(&a, &b).unwrap();
        let bc = distance::<BRISK_BYTES>(&b, &c).unwrap();
        let ac = distance::<BRISK_BYTES>(&a, &c).unwrap();
        prop_assert!(ab + bc >= ac, "triangle violated: {} + {} < {}", ab, bc, ac);
    }

    /// distance matches a per-bit count.
    #[test]
    fn distance_matches_reference(a in arb_brisk(), b in arb_brisk()) {
        let expected = (0..BRISK_BYTES * 8)
            .filter(|&i| bit_reference(&a, i) != bit_reference(&b, i))
            .count() as u32;
        prop_assert_eq!(distance::<BRISK_BYTES>(&a, &b).unwrap(), expected);
    }

    /// Any other length is rejected, never truncated.
    #[test]
    fn distance_rejects_wrong_length(a in arb_brisk(), len in 0usize..130) {
        prop_assume!(len != BRISK_BYTES);
        let b = vec![0u8; len];
        let is_length_mismatch = matches!(
            distance::<BRISK_BYTES>(&a, &b),
            Err(DescriptorError::LengthMismatch { .. })
        );
        prop_assert!(is_length_mismatch);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mean
    // ─────────────────────────────────────────────────────────────────────────

    /// Result bit is 1 iff its vote count reaches ceil(N / 2).
    #[test]
    fn mean_majority_rule(descs in arb_collection(24)) {
        let result = mean::<BRISK_BYTES>(&descs).unwrap();
        if descs.is_empty() {
            prop_assert!(result.is_none());
            return Ok(());
        }
        let m = result.unwrap();
        let threshold = majority_threshold(descs.len());
        for bit in 0..BRISK_BYTES * 8 {
            let votes = descs.iter().filter(|d| bit_reference(d, bit)).count();
            prop_assert_eq!(m.bit(bit), votes >= threshold);
        }
    }

    /// The single-element centroid equals the element.
    #[test]
    fn mean_of_one_is_identity(a in arb_brisk()) {
        let m = mean::<BRISK_BYTES>(&[&a]).unwrap().unwrap();
        prop_assert_eq!(&m.as_bytes()[..], &a[..]);
    }

    /// The centroid of a pair never lies farther from either member than they
    /// lie from each other.
    #[test]
    fn mean_of_pair_is_between(a in arb_brisk(), b in arb_brisk()) {
        let m = mean::<BRISK_BYTES>(&[&a, &b]).unwrap().unwrap();
        let ab = distance::<BRISK_BYTES>(&a, &b).unwrap();
        prop_assert!(distance::<BRISK_BYTES>(m, &a).unwrap() <= ab);
        // With a threshold of 1 the pair centroid is the bitwise OR.
        let or: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x | y).collect();
        prop_assert_eq!(&m.as_bytes()[..], &or[..]);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Text
    // ─────────────────────────────────────────────────────────────────────────

    /// from_text(to_text(d)) == d
    #[test]
    fn text_round_trip(a in arb_brisk()) {
        let d = BriskDescriptor::from_slice(&a).unwrap();
        prop_assert_eq!(from_text::<BRISK_BYTES>(&to_text(&d)).unwrap(), d);
    }

    /// Dropping any token makes the text unparseable.
    #[test]
    fn text_missing_token_fails(a in arb_brisk(), drop in 0usize..BRISK_BYTES) {
        let d = BriskDescriptor::from_slice(&a).unwrap();
        let text = to_text(&d);
        let kept: Vec<&str> = text
            .split(' ')
            .enumerate()
            .filter(|&(i, _)| i != drop)
            .map(|(_, t)| t)
            .collect();
        prop_assert!(from_text::<BRISK_BYTES>(&kept.join(" ")).is_err());
    }

    /// Any token above 255 makes the text unparseable.
    #[test]
    fn text_out_of_range_fails(pos in 0usize..8, value in 256u32..100_000) {
        let mut tokens = vec!["0".to_string(); 8];
        tokens[pos] = value.to_string();
        prop_assert!(from_text::<8>(&tokens.join(" ")).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Float expansion
    // ─────────────────────────────────────────────────────────────────────────

    /// Row i, column j is 1.0 iff bit j of descriptor i is set.
    #[test]
    fn expansion_matches_bits(descs in arb_collection(12)) {
        let m = expand_to_floats::<BRISK_BYTES>(&descs).unwrap();
        prop_assert_eq!(m.rows(), descs.len());
        prop_assert_eq!(m.cols(), BRISK_BYTES * 8);
        for (i, d) in descs.iter().enumerate() {
            for j in 0..BRISK_BYTES * 8 {
                let expected = if bit_reference(d, j) { 1.0 } else { 0.0 };
                prop_assert_eq!(m.get(i, j), Some(expected));
            }
        }
    }

    /// Owned descriptors and raw views expand identically.
    #[test]
    fn expansion_view_agnostic(descs in arb_collection(8)) {
        let owned: Vec<BriskDescriptor> = descs
            .iter()
            .map(|d| Descriptor::from_slice(d).unwrap())
            .collect();
        prop_assert_eq!(
            expand_to_floats::<BRISK_BYTES>(&owned).unwrap(),
            expand_to_floats::<BRISK_BYTES>(&descs).unwrap()
        );
    }
}
