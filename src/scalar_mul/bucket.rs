// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Pippenger-style bucket multi-exponentiation.
//!
//! The algorithm of Bernstein, Doumen, Lange, and Oosterwijk
//! (<https://eprint.iacr.org/2012/549.pdf>), section 4.
//!
//! Let `n` be the number of point-scalar pairs and `c` the window width
//! in bits.  Scalars are cut into `ceil(num_bits / c)` windows of `c`
//! bits each.  For each window, from the most significant down:
//!
//! 1. Shift the running result left by `c` bits using `c` doublings.
//! 2. Sort the bases into `2^c` buckets indexed by their scalar's value
//!    in the window; a base lands in bucket `id` when its window value
//!    is `id`, and value 0 contributes nothing.
//! 3. Add the buckets weighted by their index.  The efficient way is a
//!    single pass from the last bucket to the first with two running
//!    sums: an intermediate sum of the buckets seen so far, and the full
//!    sum of all intermediate sums.  For buckets 1*A, 2*B, 3*C:
//!
//!    ```ascii
//!    C
//!    C B
//!    C B A   Sum = C + (C+B) + (C+B+A)
//!    ```
//!
//! Per window this costs one addition per nonzero scalar plus `2^c`
//! additions for the buckets, so the window width grows with `n`: wider
//! windows amortize the bucket sweep over more points.

use crate::bigint::BigInteger;
use crate::traits::{Group, Identity, ScalarField};

use super::batch_to_special;

/// floor(log2(n)) for n >= 1.
#[inline]
fn log2_floor(n: usize) -> usize {
    debug_assert!(n > 0);
    (usize::BITS - 1 - n.leading_zeros()) as usize
}

/// Window width for an input of `length` pairs.
///
/// An empirically tuned approximation of Pippenger's optimum; for tiny
/// inputs the integer arithmetic bottoms out at two-bit windows.
#[inline]
fn window_size(length: usize) -> usize {
    let log2_length = log2_floor(length);
    // log2(n) - (log2(n)/3 - 2), rearranged so it cannot wrap.
    (log2_length - log2_length / 3 + 2).max(1)
}

pub(crate) fn multi_exp_bdlo12<G: Group>(
    bases: &[G],
    scalars: &[G::Scalar],
    use_mixed_addition: bool,
) -> G {
    debug_assert_eq!(bases.len(), scalars.len());
    if bases.is_empty() {
        return G::identity();
    }

    let c = window_size(bases.len());

    let exponents: Vec<_> = scalars.iter().map(|s| s.as_bigint()).collect();
    let num_bits = exponents.iter().map(|e| e.num_bits()).max().unwrap_or(0);
    // All scalars zero: no windows to process.
    let num_groups = num_bits.div_ceil(c);

    let mut result = G::identity();
    let mut result_nonzero = false;

    for k in (0..num_groups).rev() {
        if result_nonzero {
            for _ in 0..c {
                result = result.double();
            }
        }

        let mut buckets = vec![G::identity(); 1 << c];
        let mut bucket_nonzero = vec![false; 1 << c];

        for (base, exponent) in bases.iter().zip(exponents.iter()) {
            let id = exponent.window(k * c, c) as usize;
            if id == 0 {
                continue;
            }
            if !bucket_nonzero[id] {
                buckets[id] = *base;
                bucket_nonzero[id] = true;
            } else if use_mixed_addition {
                buckets[id] = buckets[id].mixed_add(base);
            } else {
                buckets[id] = buckets[id] + *base;
            }
        }

        if use_mixed_addition {
            batch_to_special(&mut buckets);
        }

        let mut running_sum = G::identity();
        let mut running_sum_nonzero = false;
        for id in (1..(1usize << c)).rev() {
            if bucket_nonzero[id] {
                running_sum = if use_mixed_addition {
                    running_sum.mixed_add(&buckets[id])
                } else {
                    running_sum + buckets[id]
                };
                running_sum_nonzero = true;
            }
            if running_sum_nonzero {
                result += running_sum;
                result_nonzero = true;
            }
        }
    }

    result
}
