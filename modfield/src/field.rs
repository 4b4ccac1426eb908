//! Finite field arithmetic.

use crate::{Error, Result, primality::is_prime_power, reduce};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Finite field `ℤ/pℤ` of a given prime order `p`.
///
/// Elements are plain [`BigInt`]s which must already lie in `[0, p)`; an
/// out-of-range operand is reported as [`Error::FieldMembership`] rather
/// than silently reduced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiniteField {
    order: BigInt,
}

impl FiniteField {
    /// Create a field of the given order.
    ///
    /// Returns [`Error::InvalidOrder`] unless `order` is a prime power.
    pub fn new(order: impl Into<BigInt>) -> Result<Self> {
        let order = order.into();

        if !is_prime_power(&order) {
            tracing::debug!(%order, "rejected field order: not a prime power");
            return Err(Error::InvalidOrder);
        }

        tracing::debug!(%order, "constructed finite field");
        Ok(Self { order })
    }

    /// Order of the field.
    pub fn order(&self) -> &BigInt {
        &self.order
    }

    /// Does `n` lie in `[0, order)`?
    pub fn contains(&self, n: &BigInt) -> bool {
        !n.is_negative() && *n < self.order
    }

    /// Add the elements together.
    pub fn add(&self, elements: &[BigInt]) -> Result<BigInt> {
        self.verify_operands(elements)?;

        Ok(elements
            .iter()
            .fold(BigInt::zero(), |acc, n| reduce(&(acc + n), &self.order)))
    }

    /// Subtract every following element from the first one, left to right.
    pub fn sub(&self, elements: &[BigInt]) -> Result<BigInt> {
        self.verify_operands(elements)?;

        let (head, tail) = elements
            .split_first()
            .ok_or(Error::Arity { supplied: 0 })?;

        Ok(tail
            .iter()
            .fold(head.clone(), |acc, n| reduce(&(acc - n), &self.order)))
    }

    /// Multiply the elements together.
    pub fn mult(&self, elements: &[BigInt]) -> Result<BigInt> {
        self.verify_operands(elements)?;

        Ok(elements
            .iter()
            .fold(BigInt::one(), |acc, n| reduce(&(acc * n), &self.order)))
    }

    /// Compute `a / b`, i.e. `a * b^-1`.
    pub fn div(&self, a: &BigInt, b: &BigInt) -> Result<BigInt> {
        self.verify_membership(a)?;
        self.verify_membership(b)?;

        if b.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let inverse = self.pow(b, &BigInt::from(-1))?;
        self.mult(&[a.clone(), inverse])
    }

    /// Raise `n` to the power `e`.
    ///
    /// The exponent is reduced modulo `order - 1` first, so by Fermat's little
    /// theorem a negative exponent raises the multiplicative inverse of `n` to
    /// `|e|`. This only holds when the order is prime.
    pub fn pow(&self, n: &BigInt, e: &BigInt) -> Result<BigInt> {
        self.verify_membership(n)?;

        let exponent = reduce(e, &(&self.order - 1));
        Ok(n.modpow(&exponent, &self.order))
    }

    fn verify_operands(&self, elements: &[BigInt]) -> Result<()> {
        if elements.len() < 2 {
            return Err(Error::Arity {
                supplied: elements.len(),
            });
        }

        elements.iter().try_for_each(|n| self.verify_membership(n))
    }

    fn verify_membership(&self, n: &BigInt) -> Result<()> {
        if self.contains(n) {
            Ok(())
        } else {
            Err(Error::FieldMembership)
        }
    }
}
