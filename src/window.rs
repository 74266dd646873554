// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Code for fixed-base windowed exponentiation.
//!
//! When many scalars multiply the *same* base (a trusted setup
//! evaluating a polynomial's monomials at a secret point, say), it pays
//! to precompute a table of multiples once and reduce every
//! exponentiation to table lookups and additions.
//!
//! The table covers the scalar bit range in windows of `w` bits:
//! `table[outer][k]` holds `k * 2^(outer * w) * g`, so an exponentiation
//! reads one entry per window and never doubles.  Table construction
//! costs `outerc * 2^w` group elements of memory, which is why the window
//! size is chosen from a per-curve threshold table keyed on how many
//! exponentiations will share the table.

use crate::bigint::BigInteger;
use crate::traits::{Group, Identity, ScalarField};

/// A fixed-base table of multiples: `table[outer][k] = k * 2^(outer*w) * g`.
pub type WindowTable<G> = Vec<Vec<G>>;

/// Window size for exponentiating `num_scalars` scalars against one base.
///
/// Consults the group's tuned threshold table: the largest window whose
/// (nonzero) threshold `num_scalars` meets is selected.  Groups without a
/// table get a window of 17, a reasonable default for setup-sized
/// workloads.  With the `lowmem` feature the result is capped at 14.
pub fn get_exp_window_size<G: Group>(num_scalars: usize) -> usize {
    let table = G::FIXED_BASE_WINDOW_TABLE;
    if table.is_empty() {
        return if cfg!(feature = "lowmem") { 14 } else { 17 };
    }

    let mut window = 1;
    for (i, &threshold) in table.iter().enumerate().rev() {
        if threshold != 0 && num_scalars >= threshold {
            window = i + 1;
            break;
        }
    }

    if cfg!(feature = "lowmem") {
        window.min(14)
    } else {
        window
    }
}

/// Precompute the multiples of `g` covering `scalar_size` bits in windows
/// of `window` bits.
///
/// Rows all have `2^window` entries; the final row only needs
/// `2^(scalar_size - (outerc-1)*window)` of them filled, and leaves the
/// rest at the identity.  `table[0][0]` is the identity.
pub fn get_window_table<G: Group>(scalar_size: usize, window: usize, g: &G) -> WindowTable<G> {
    let in_window = 1usize << window;
    let outerc = scalar_size.div_ceil(window);
    let last_in_window = 1usize << (scalar_size - (outerc - 1) * window);

    let mut powers_of_g = vec![vec![G::identity(); in_window]; outerc];

    // gouter tracks 2^(outer*window) * g across rows; each row is filled
    // by repeated addition of it.
    let mut gouter = *g;
    for (outer, row) in powers_of_g.iter_mut().enumerate() {
        let cur_in_window = if outer == outerc - 1 {
            last_in_window
        } else {
            in_window
        };

        let mut ginner = G::identity();
        for entry in row.iter_mut().take(cur_in_window) {
            *entry = ginner;
            ginner += gouter;
        }

        for _ in 0..window {
            gouter = gouter.double();
        }
    }

    powers_of_g
}

/// Exponentiate `pow * g` by table lookup, one addition per window.
///
/// `powers_of_g` must come from [`get_window_table`] with the same
/// `scalar_size` and `window`, and the canonical representative of `pow`
/// must fit in `scalar_size` bits.
pub fn windowed_exp<G: Group>(
    scalar_size: usize,
    window: usize,
    powers_of_g: &WindowTable<G>,
    pow: &G::Scalar,
) -> G {
    let outerc = scalar_size.div_ceil(window);
    debug_assert!(powers_of_g.len() >= outerc);
    let pow_val = pow.as_bigint();

    let mut res = powers_of_g[0][0];
    for (outer, row) in powers_of_g.iter().enumerate().take(outerc) {
        let inner = pow_val.window(outer * window, window) as usize;
        res += row[inner];
    }

    res
}

/// Exponentiate every scalar in `v` against the shared table.
///
/// With the `multicore` feature the scalars shard over a rayon thread
/// pool; each output slot is written by exactly one worker.
pub fn batch_exp<G: Group>(
    scalar_size: usize,
    window: usize,
    table: &WindowTable<G>,
    v: &[G::Scalar],
) -> Vec<G> {
    #[cfg(feature = "multicore")]
    {
        use rayon::prelude::*;
        return v
            .par_iter()
            .map(|pow| windowed_exp(scalar_size, window, table, pow))
            .collect();
    }
    #[cfg(not(feature = "multicore"))]
    {
        v.iter()
            .map(|pow| windowed_exp(scalar_size, window, table, pow))
            .collect()
    }
}

/// [`batch_exp`] with every exponent premultiplied by `coeff`.
pub fn batch_exp_with_coeff<G: Group>(
    scalar_size: usize,
    window: usize,
    table: &WindowTable<G>,
    coeff: &G::Scalar,
    v: &[G::Scalar],
) -> Vec<G> {
    #[cfg(feature = "multicore")]
    {
        use rayon::prelude::*;
        return v
            .par_iter()
            .map(|pow| windowed_exp(scalar_size, window, table, &(*coeff * *pow)))
            .collect();
    }
    #[cfg(not(feature = "multicore"))]
    {
        v.iter()
            .map(|pow| windowed_exp(scalar_size, window, table, &(*coeff * *pow)))
            .collect()
    }
}
