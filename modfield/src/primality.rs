//! Primality checks used to validate field orders.
//!
//! Miller-Rabin is run against a fixed set of witnesses: the primes below 50.
//! That is deterministic for every input below 3.3 * 10^24 (the first 13 of
//! those bases already suffice) and probabilistic above it, with an error
//! bound of 4^-15 for adversarially chosen composites.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};

/// Primes below 50, used both for trial division and as Miller-Rabin witnesses.
const SMALL_PRIMES: [u32; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Is `n` (probably) prime?
pub fn is_probable_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }

    for &p in &SMALL_PRIMES {
        if *n == BigUint::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    let two = BigUint::from(2u32);

    'witness: for &a in &SMALL_PRIMES {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Is `n` of the form `r^k` for a prime `r` and `k >= 1`?
pub fn is_prime_power(n: &BigInt) -> bool {
    let n = match n.to_biguint() {
        Some(n) if n > BigUint::one() => n,
        _ => return false,
    };

    // r >= 2 bounds the exponent by the bit length of n
    let max_exponent = n.bits().to_u32().unwrap_or(u32::MAX);

    (1..=max_exponent).any(|k| {
        let root = n.nth_root(k);
        root > BigUint::one() && root.pow(k) == n && is_probable_prime(&root)
    })
}
