// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Single-scalar exponentiation.
//!
//! Three routines, in increasing order of sophistication:
//!
//! * [`power`], plain square-and-multiply over a field;
//! * [`fixed_window_wnaf_exp`], windowed-NAF exponentiation in a group
//!   with a caller-chosen window;
//! * [`opt_window_wnaf_exp`], which picks the window from the group's
//!   tuned threshold table and falls back to double-and-add for scalars
//!   too short to amortize the table.

use crate::bigint::BigInteger;
use crate::traits::{Group, Identity, ScalarField};
use crate::wnaf::find_wnaf;

/// Compute `base^exponent` in the field `F` by square-and-multiply.
///
/// Scans the exponent from the top bit down, suppressing squarings until
/// the first set bit so that leading zeros cost nothing.  Returns one for
/// a zero exponent.
pub fn power<F: ScalarField, B: BigInteger>(base: &F, exponent: &B) -> F {
    let mut result = F::one();
    let mut found_one = false;

    for i in (0..exponent.num_bits()).rev() {
        if found_one {
            result = result * result;
        }
        if exponent.test_bit(i) {
            found_one = true;
            result = result * *base;
        }
    }

    result
}

/// Compute `scalar * base` with a fixed wNAF window size.
///
/// Precomputes the odd multiples `base, 3*base, ..., (2^window - 1) *
/// base`, then scans the signed digits from most significant to least,
/// doubling between digits and adding or subtracting a table entry at
/// each nonzero digit.
pub fn fixed_window_wnaf_exp<G: Group, B: BigInteger>(
    window: usize,
    base: &G,
    scalar: &B,
) -> G {
    let naf = find_wnaf(window, scalar);

    // table[i] = (2i + 1) * base
    let mut table = Vec::with_capacity(1 << (window - 1));
    let dbl = base.double();
    let mut tmp = *base;
    for _ in 0..(1 << (window - 1)) {
        table.push(tmp);
        tmp += dbl;
    }

    let mut result = G::identity();
    let mut found_nonzero = false;
    for &digit in naf.iter().rev() {
        if found_nonzero {
            result = result.double();
        }
        if digit > 0 {
            found_nonzero = true;
            result += table[(digit as usize) / 2];
        } else if digit < 0 {
            found_nonzero = true;
            result -= table[((-digit) as usize) / 2];
        }
    }

    result
}

/// Compute `scalar * base`, choosing the wNAF window from the group's
/// tuned thresholds.
///
/// `scalar_bits` is the bit length the caller expects of the scalar;
/// passing `scalar.num_bits()` is always correct.  Picks the largest
/// window whose threshold the bit length meets, or plain double-and-add
/// when even the smallest window is not worth its table.
pub fn opt_window_wnaf_exp<G: Group, B: BigInteger>(
    base: &G,
    scalar: &B,
    scalar_bits: usize,
) -> G {
    let mut best = 0;
    for (i, &threshold) in G::WNAF_WINDOW_TABLE.iter().enumerate().rev() {
        if scalar_bits >= threshold {
            best = i + 1;
            break;
        }
    }

    if best > 0 {
        fixed_window_wnaf_exp(best, base, scalar)
    } else {
        base.mul_bigint(scalar)
    }
}
