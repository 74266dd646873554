// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Windowed non-adjacent form.
//!
//! A width-`w` NAF of a positive integer `c` is an expression
//! `c = sum(d[j] * 2^j)` where each nonzero digit `d[j]` is odd and
//! bounded by `|d[j]| < 2^w`, and no two adjacent digits are both
//! nonzero.  Intuitively, this is a binary expansion that allows digits
//! to grow so that the nonzero ones are as sparse as possible: a random
//! scalar has nonzero density `1/(w+1)` instead of `1/2`, which directly
//! divides the addition count of a windowed exponentiation.

use crate::bigint::BigInteger;

/// Recode `scalar` into width-`window` non-adjacent form.
///
/// Digits come out least significant first; the output length is at most
/// `B::max_bits() + 1`.
///
/// The scalar must leave at least one bit of headroom at the top of its
/// representation: clearing the low bits of the working value can round
/// it up past the next power of two.  Canonical representatives of field
/// elements always satisfy this, since the modulus does not fill the top
/// limb exactly.
pub fn find_wnaf<B: BigInteger>(window: usize, scalar: &B) -> Vec<i64> {
    // Windows past ~20 bits are never worth their tables; the bound also
    // keeps the signed digit arithmetic comfortably inside i64.
    debug_assert!(window >= 1 && window <= 31);
    debug_assert!(scalar.num_bits() < B::max_bits());

    let mut digits = Vec::with_capacity(scalar.num_bits() + 1);
    let mut c = *scalar;

    while !c.is_zero() {
        let digit: i64;
        if c.test_bit(0) {
            // Take the residue of c mod 2^(w+1), interpreted as a signed
            // digit; subtracting it clears the low w+1 bits, so the next
            // w digits are forced to zero.
            let mut u = (c.low_u64() & ((1u64 << (window + 1)) - 1)) as i64;
            if u > (1 << window) {
                u -= 1 << (window + 1);
            }
            digit = u;

            if u > 0 {
                c.sub_with_borrow(&B::from_u64(u as u64));
            } else {
                c.add_with_carry(&B::from_u64((-u) as u64));
            }
        } else {
            digit = 0;
        }
        digits.push(digit);
        c.div2();
    }

    digits
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bigint::BigInt;

    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    // Recompose sum(d[j] * 2^j) in an integer two limbs wider than the
    // input, so the top digit and the doubling never overflow.
    fn recompose<const N: usize, const M: usize>(digits: &[i64]) -> BigInt<M> {
        assert!(M >= N + 1);
        let mut acc = BigInt::<M>::zero();
        for &digit in digits.iter().rev() {
            let doubled = acc;
            acc.add_with_carry(&doubled);
            if digit > 0 {
                acc.add_with_carry(&BigInt::from_u64(digit as u64));
            } else if digit < 0 {
                acc.sub_with_borrow(&BigInt::from_u64((-digit) as u64));
            }
        }
        acc
    }

    fn widen<const N: usize, const M: usize>(x: &BigInt<N>) -> BigInt<M> {
        let mut limbs = [0u64; M];
        limbs[..N].copy_from_slice(x.as_limbs());
        BigInt::new(limbs)
    }

    fn check_wnaf<const N: usize>(window: usize, scalar: &BigInt<N>) {
        let digits = find_wnaf(window, scalar);
        assert!(digits.len() <= BigInt::<N>::max_bits() + 1);

        for (j, &digit) in digits.iter().enumerate() {
            if digit == 0 {
                continue;
            }
            assert_eq!(digit.unsigned_abs() % 2, 1, "digit {} is even", j);
            assert!(digit.unsigned_abs() <= 1 << window);
            if j + 1 < digits.len() {
                assert_eq!(digits[j + 1], 0, "adjacent nonzero digits at {}", j);
            }
        }
    }

    fn random_bigint<const N: usize>(rng: &mut StdRng, bits: usize) -> BigInt<N> {
        let mut limbs = [0u64; N];
        for (i, limb) in limbs.iter_mut().enumerate() {
            if i * 64 < bits {
                *limb = rng.next_u64();
            }
        }
        let top = bits % 64;
        if top != 0 {
            limbs[(bits - 1) / 64] &= (1u64 << top) - 1;
        }
        BigInt::new(limbs)
    }

    #[test]
    fn digits_are_odd_sparse_and_bounded() {
        let mut rng = StdRng::seed_from_u64(0x77_4e_41_46);
        // Full-width values go in a representation one limb wider, per
        // the headroom requirement on find_wnaf.
        for window in 2..=7 {
            for _ in 0..20 {
                check_wnaf::<1>(window, &random_bigint(&mut rng, 1));
                check_wnaf::<2>(window, &random_bigint(&mut rng, 64));
                check_wnaf::<5>(window, &random_bigint(&mut rng, 256));
                check_wnaf::<13>(window, &random_bigint(&mut rng, 768));
            }
        }
    }

    #[test]
    fn recomposition_round_trips() {
        let mut rng = StdRng::seed_from_u64(0x77_4e_41_47);
        for window in 2..=5 {
            for _ in 0..20 {
                let s1: BigInt<2> = random_bigint(&mut rng, 64);
                assert_eq!(recompose::<2, 3>(&find_wnaf(window, &s1)), widen(&s1));

                let s4: BigInt<5> = random_bigint(&mut rng, 256);
                assert_eq!(recompose::<5, 7>(&find_wnaf(window, &s4)), widen(&s4));

                let s12: BigInt<13> = random_bigint(&mut rng, 768);
                assert_eq!(recompose::<13, 15>(&find_wnaf(window, &s12)), widen(&s12));
            }
        }
    }

    #[test]
    fn zero_has_no_digits() {
        assert!(find_wnaf(4, &BigInt::<4>::zero()).is_empty());
    }

    #[test]
    fn small_values() {
        assert_eq!(find_wnaf(2, &BigInt::<1>::from_u64(1)), vec![1]);
        // 7 = 8 - 1
        assert_eq!(find_wnaf(2, &BigInt::<1>::from_u64(7)), vec![-1, 0, 0, 1]);
    }
}
