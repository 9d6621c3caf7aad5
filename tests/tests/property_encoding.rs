//! Property-based tests for the ring reduction and the canonical encoder

use lwekem_algorithms::{
    bits_to_i32_vector, bytes_to_bits, encode_vector, hash_vector, modulo, Error, Zq,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn modulo_lands_in_range(a in any::<i64>(), b in 1i64..=i64::from(u32::MAX)) {
        let r = modulo(a, b);
        prop_assert!((0..b).contains(&r));
        prop_assert_eq!((a - r).rem_euclid(b), 0);
    }

    #[test]
    fn modulo_of_negative_matches_shifted_positive(a in 1i64..1_000_000, b in 1i64..70_000) {
        prop_assert_eq!(modulo(-a, b), (b - a % b) % b);
    }

    #[test]
    fn zq_reduce_agrees_with_modulo(a in any::<i32>(), q in 2u32..=66536) {
        let zq = Zq::new(q).unwrap();
        prop_assert_eq!(i64::from(zq.reduce(i64::from(a))), modulo(i64::from(a), i64::from(q)));
        prop_assert_eq!(zq.lift(a), zq.reduce(i64::from(a)));
    }

    #[test]
    fn bits_and_bytes_are_inverse(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let bits = bytes_to_bits(&bytes);
        prop_assert_eq!(bits.len(), bytes.len() * 8);
        let back = bits_to_i32_vector(&bits).unwrap();
        let expected: Vec<i32> = bytes.iter().map(|&b| i32::from(b)).collect();
        prop_assert_eq!(back, expected);
    }

    #[test]
    fn ragged_bit_strings_are_rejected(bits in prop::collection::vec(any::<bool>(), 0..200)) {
        prop_assume!(bits.len() % 8 != 0);
        let is_encoding_error = matches!(bits_to_i32_vector(&bits), Err(Error::Encoding { .. }));
        prop_assert!(is_encoding_error);
    }

    #[test]
    fn encoder_is_injective(
        a in prop::collection::vec(any::<i32>(), 0..16),
        b in prop::collection::vec(any::<i32>(), 0..16),
    ) {
        prop_assert_eq!(a == b, encode_vector(&a) == encode_vector(&b));
    }

    #[test]
    fn hash_output_is_32_byte_values(v in prop::collection::vec(any::<u32>(), 0..32)) {
        let h = hash_vector(&v).unwrap();
        prop_assert_eq!(h.len(), 32);
        prop_assert!(h.iter().all(|&x| (0..256).contains(&x)));
    }
}
