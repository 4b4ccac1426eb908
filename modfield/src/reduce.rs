//! Modular reduction.

use num_bigint::BigInt;

/// Reduce `n` modulo `m` as `((n % m) + m) % m`.
///
/// Unlike the `%` operator, which truncates towards zero, the result lies in
/// `[0, m)` for every positive `m` regardless of the sign of `n`. A negative
/// modulus runs through the same formula and lands in `(m, 0]`.
///
/// # Panics
///
/// If `m` is zero.
pub fn reduce(n: &BigInt, m: &BigInt) -> BigInt {
    ((n % m) + m) % m
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn positive_numbers() {
        assert_eq!(reduce(&int(1747), &int(241)), int(60));
        assert_eq!(reduce(&int(482), &int(241)), int(0));
        assert_eq!(reduce(&int(12), &int(241)), int(12));
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(reduce(&int(-496), &int(23)), int(10));
        assert_eq!(reduce(&int(-23), &int(23)), int(0));
        assert_eq!(reduce(&int(243), &int(-23)), int(-10));
    }

    #[test]
    #[should_panic]
    fn zero_modulus() {
        reduce(&int(5), &int(0));
    }

    proptest! {
        #[test]
        fn lands_in_range(n in any::<i64>(), m in 1i64..=i64::MAX) {
            let r = reduce(&int(n), &int(m));
            prop_assert!(r >= int(0));
            prop_assert!(r < int(m));
        }

        #[test]
        fn idempotent(n in any::<i64>(), m in 1i64..=i64::MAX) {
            let once = reduce(&int(n), &int(m));
            prop_assert_eq!(reduce(&once, &int(m)), once);
        }

        #[test]
        fn congruent_to_input(n in any::<i64>(), m in 1i64..=i64::MAX) {
            let r = reduce(&int(n), &int(m));
            prop_assert_eq!((int(n) - r) % int(m), int(0));
        }
    }
}
