// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Bos-Coster multi-exponentiation.
//!
//! Keeps the scalars in a max-heap and repeatedly rewrites the two
//! largest terms
//!
//! ```ascii
//! x A + y B  =>  (x - y) A + y (A + B)      (x >= y)
//! ```
//!
//! trading one group addition for a shrinking scalar.  When the largest
//! remaining scalar dwarfs the runner-up the subtraction chain stops
//! paying for itself, so the term is finished off with a direct
//! windowed-NAF exponentiation instead.  The method shines when scalar
//! bit lengths are skewed; for uniform scalars the bucket method is the
//! better choice.

use std::collections::BinaryHeap;

use core::cmp::Ordering;

use crate::bigint::BigInteger;
use crate::traits::{Group, Identity, ScalarField};
use crate::variable_base::opt_window_wnaf_exp;

/// A heap entry: a scalar and the index of the base it multiplies.
///
/// Ordered by the scalar alone, so the heap surfaces the largest
/// remaining scalar regardless of which base it has migrated to.
#[derive(Copy, Clone, Debug)]
pub(crate) struct OrderedExponent<B: BigInteger> {
    idx: usize,
    r: B,
}

impl<B: BigInteger> Ord for OrderedExponent<B> {
    fn cmp(&self, other: &OrderedExponent<B>) -> Ordering {
        self.r.cmp(&other.r)
    }
}

impl<B: BigInteger> PartialOrd for OrderedExponent<B> {
    fn partial_cmp(&self, other: &OrderedExponent<B>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: BigInteger> PartialEq for OrderedExponent<B> {
    fn eq(&self, other: &OrderedExponent<B>) -> bool {
        self.r == other.r
    }
}

impl<B: BigInteger> Eq for OrderedExponent<B> {}

/// Cap on the tolerated bit-length gap before falling back to a direct
/// exponentiation: past this many halvings the subtraction chain is
/// certainly slower than wNAF on the residue.
const REDUCTION_LIMIT: usize = 20;

pub(crate) fn multi_exp_bos_coster<G: Group>(bases: &[G], scalars: &[G::Scalar]) -> G {
    debug_assert_eq!(bases.len(), scalars.len());

    let mut bases: Vec<G> = bases.to_vec();
    let mut heap: BinaryHeap<OrderedExponent<<G::Scalar as ScalarField>::BigInt>> = scalars
        .iter()
        .enumerate()
        .map(|(idx, s)| OrderedExponent {
            idx,
            r: s.as_bigint(),
        })
        .collect();

    let mut result = G::identity();

    while let Some(mut a) = heap.pop() {
        let abits = a.r.num_bits();

        // The runner-up scalar decides whether reduction is worthwhile.
        let (b_idx, b_r) = match heap.peek() {
            Some(b) if !b.r.is_zero() => (b.idx, b.r),
            // Everything else is zero: finish the last live term.
            _ => {
                result += opt_window_wnaf_exp(&bases[a.idx], &a.r, abits);
                break;
            }
        };

        let bbits = b_r.num_bits();
        let limit = (abits - bbits).min(REDUCTION_LIMIT);
        if bbits < (1usize << limit) {
            // The gap is too wide: a would need ~2^limit subtractions of
            // b before shrinking to b's size.  Exponentiate directly and
            // retire the term; the zeroed entry sinks in the heap.
            result += opt_window_wnaf_exp(&bases[a.idx], &a.r, abits);
            a.r.clear();
        } else {
            // x A + y B  =>  (x - y) A + y (A + B)
            a.r.sub_with_borrow(&b_r);
            bases[b_idx] = bases[b_idx] + bases[a.idx];
        }
        heap.push(a);
    }

    result
}
