// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Naive multi-exponentiation backends.
//!
//! Both simply sum per-term exponentiations.  They exist as references
//! for the clever backends and as the fastest option for very short
//! inputs, where bucket bookkeeping costs more than it saves.

use crate::bigint::BigInteger;
use crate::traits::{Group, Identity, ScalarField};
use crate::variable_base::opt_window_wnaf_exp;

/// Sum of per-term windowed-NAF exponentiations.
pub(crate) fn multi_exp_naive<G: Group>(bases: &[G], scalars: &[G::Scalar]) -> G {
    let mut result = G::identity();
    for (base, scalar) in bases.iter().zip(scalars.iter()) {
        let exponent = scalar.as_bigint();
        result += opt_window_wnaf_exp(base, &exponent, exponent.num_bits());
    }
    result
}

/// Sum of per-term double-and-add exponentiations.
pub(crate) fn multi_exp_naive_plain<G: Group>(bases: &[G], scalars: &[G::Scalar]) -> G {
    let mut result = G::identity();
    for (base, scalar) in bases.iter().zip(scalars.iter()) {
        result += base.mul_scalar(scalar);
    }
    result
}
