// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Multi-scalar multiplication.
//!
//! Computes `s_1 * g_1 + ... + s_n * g_n` for bases `g_i` and scalars
//! `s_i`.  Four backends are provided, selected at runtime by
//! [`MultiExpMethod`]:
//!
//! * [`MultiExpMethod::Naive`]: per-term windowed-NAF exponentiation,
//!   summed.  A reference implementation, and the right choice for tiny
//!   inputs.
//! * [`MultiExpMethod::NaivePlain`]: per-term double-and-add, summed.
//! * [`MultiExpMethod::Bdlo12`]: the Pippenger-style bucket method.  The
//!   workhorse for dense scalar vectors.
//! * [`MultiExpMethod::BosCoster`]: the max-heap reduction, which wins
//!   when scalar lengths are skewed.
//!
//! The dispatcher shards the input into chunks and sums the partial
//! results; with the `multicore` feature the chunks run on a rayon
//! thread pool.  The group operation is commutative and associative, so
//! the result does not depend on the shard count or schedule.

mod bos_coster;
mod bucket;
mod naive;

use crate::traits::{Group, Identity, IsIdentity, ScalarField};

/// Backend selector for [`multi_exp`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MultiExpMethod {
    /// Sum of per-term windowed-NAF exponentiations.
    Naive,
    /// Sum of per-term double-and-add exponentiations.
    NaivePlain,
    /// Pippenger-style bucket accumulation (BDLO12).
    Bdlo12,
    /// Bos-Coster max-heap reduction.
    BosCoster,
}

/// Tuning knobs for [`multi_exp_with_options`].
#[derive(Copy, Clone, Debug)]
pub struct MultiExpOptions {
    /// Number of contiguous shards to split the input into.
    pub chunks: usize,
    /// Prefer `mixed_add` on bases in special form inside the backends.
    ///
    /// Callers enabling this are promising that a cheap special-form
    /// addition is actually cheaper for their group; the bucket backend
    /// will batch-convert its buckets to special form to exploit it.
    pub use_mixed_addition: bool,
}

impl Default for MultiExpOptions {
    fn default() -> MultiExpOptions {
        MultiExpOptions {
            chunks: 1,
            use_mixed_addition: false,
        }
    }
}

/// Counters from the scalar scan of [`multi_exp_with_mixed_addition`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ScanCounters {
    /// Scalars equal to zero, contributing nothing.
    pub skipped: usize,
    /// Scalars equal to one, folded by a single addition.
    pub added: usize,
    /// Scalars forwarded to the full multi-exponentiation.
    pub remaining: usize,
}

/// Compute `s_1 * g_1 + ... + s_n * g_n` with the chosen backend.
///
/// `chunks` shards the input; each shard is evaluated independently (in
/// parallel with the `multicore` feature) and the partial results are
/// summed.
///
/// # Panics
///
/// Panics if `bases` and `scalars` differ in length.
pub fn multi_exp<G: Group>(
    bases: &[G],
    scalars: &[G::Scalar],
    method: MultiExpMethod,
    chunks: usize,
) -> G {
    multi_exp_with_options(
        bases,
        scalars,
        method,
        &MultiExpOptions {
            chunks,
            use_mixed_addition: false,
        },
    )
}

/// [`multi_exp`] with explicit [`MultiExpOptions`].
#[tracing::instrument(skip_all, fields(length = bases.len(), method = ?method, chunks = options.chunks))]
pub fn multi_exp_with_options<G: Group>(
    bases: &[G],
    scalars: &[G::Scalar],
    method: MultiExpMethod,
    options: &MultiExpOptions,
) -> G {
    assert_eq!(
        bases.len(),
        scalars.len(),
        "multi_exp: bases and scalars must have the same length"
    );

    let total = bases.len();
    if total == 0 {
        return G::identity();
    }

    let chunks = options.chunks.max(1);
    if total < chunks || chunks == 1 {
        return multi_exp_inner(bases, scalars, method, options.use_mixed_addition);
    }

    // Contiguous shards of total/chunks elements; the last shard absorbs
    // the remainder.
    let shard = total / chunks;
    let eval = |i: usize| -> G {
        let lo = i * shard;
        let hi = if i == chunks - 1 { total } else { lo + shard };
        multi_exp_inner(
            &bases[lo..hi],
            &scalars[lo..hi],
            method,
            options.use_mixed_addition,
        )
    };

    #[cfg(feature = "multicore")]
    let partial: Vec<G> = {
        use rayon::prelude::*;
        (0..chunks).into_par_iter().map(eval).collect()
    };
    #[cfg(not(feature = "multicore"))]
    let partial: Vec<G> = (0..chunks).map(eval).collect();

    let mut result = G::identity();
    for p in partial {
        result += p;
    }
    result
}

fn multi_exp_inner<G: Group>(
    bases: &[G],
    scalars: &[G::Scalar],
    method: MultiExpMethod,
    use_mixed_addition: bool,
) -> G {
    match method {
        MultiExpMethod::Naive => naive::multi_exp_naive(bases, scalars),
        MultiExpMethod::NaivePlain => naive::multi_exp_naive_plain(bases, scalars),
        MultiExpMethod::Bdlo12 => bucket::multi_exp_bdlo12(bases, scalars, use_mixed_addition),
        MultiExpMethod::BosCoster => bos_coster::multi_exp_bos_coster(bases, scalars),
    }
}

/// [`multi_exp`] behind a scan that absorbs trivial scalars.
///
/// Zero scalars are skipped outright and one scalars are folded into an
/// accumulator with a single (mixed, where possible) addition; only the
/// residue goes through the chosen backend, with mixed addition enabled
/// and the residual bases batch-converted to special form.  Worth it
/// whenever the scalar vector is sparse, as monomial evaluations in
/// proving systems usually are.
#[tracing::instrument(skip_all, fields(length = bases.len(), method = ?method))]
pub fn multi_exp_with_mixed_addition<G: Group>(
    bases: &[G],
    scalars: &[G::Scalar],
    method: MultiExpMethod,
    chunks: usize,
) -> G {
    multi_exp_with_mixed_addition_counted(bases, scalars, method, chunks).0
}

fn multi_exp_with_mixed_addition_counted<G: Group>(
    bases: &[G],
    scalars: &[G::Scalar],
    method: MultiExpMethod,
    chunks: usize,
) -> (G, ScanCounters) {
    assert_eq!(
        bases.len(),
        scalars.len(),
        "multi_exp_with_mixed_addition: bases and scalars must have the same length"
    );

    let zero = G::Scalar::zero();
    let one = G::Scalar::one();

    let mut residual_bases: Vec<G> = Vec::new();
    let mut residual_scalars: Vec<G::Scalar> = Vec::new();
    let mut acc = G::identity();
    let mut counters = ScanCounters::default();

    for (base, scalar) in bases.iter().zip(scalars.iter()) {
        if *scalar == zero {
            counters.skipped += 1;
        } else if *scalar == one {
            acc = if base.is_special() {
                acc.mixed_add(base)
            } else {
                acc + *base
            };
            counters.added += 1;
        } else {
            residual_bases.push(*base);
            residual_scalars.push(*scalar);
            counters.remaining += 1;
        }
    }

    tracing::debug!(
        skipped = counters.skipped,
        added = counters.added,
        remaining = counters.remaining,
        "absorbed trivial scalars"
    );

    batch_to_special(&mut residual_bases);

    let options = MultiExpOptions {
        chunks,
        use_mixed_addition: true,
    };
    let rest = multi_exp_with_options(&residual_bases, &residual_scalars, method, &options);
    (acc + rest, counters)
}

/// Compute the inner product `a_1 * b_1 + ... + a_n * b_n` in the field.
///
/// This is the scalar-valued analogue of the naive-plain backend, with
/// the group specialized to the field's own additive structure.
///
/// # Panics
///
/// Panics if `a` and `b` differ in length.
pub fn inner_product<F: ScalarField>(a: &[F], b: &[F]) -> F {
    assert_eq!(
        a.len(),
        b.len(),
        "inner_product: vectors must have the same length"
    );

    let mut result = F::zero();
    for (x, y) in a.iter().zip(b.iter()) {
        result = result + *x * *y;
    }
    result
}

/// Convert every element of `vec` into special form, identities included.
///
/// [`Group::batch_to_special_all_non_zeros`] requires its inputs to be
/// non-identity, so the identities are filtered out, converted once via a
/// single precomputed special identity, and written back in place.
pub fn batch_to_special<G: Group>(vec: &mut [G]) {
    let mut non_zero: Vec<G> = vec
        .iter()
        .copied()
        .filter(|el| !el.is_identity())
        .collect();
    G::batch_to_special_all_non_zeros(&mut non_zero);

    let mut zero_special = G::identity();
    zero_special.to_special();

    let mut converted = non_zero.iter();
    for el in vec.iter_mut() {
        *el = if el.is_identity() {
            zero_special
        } else {
            *converted
                .next()
                .expect("as many converted elements as non-identity inputs")
        };
    }
}
