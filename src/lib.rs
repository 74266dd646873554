// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

#![deny(missing_docs)]

//! # multiexp
//!
//! **Multi-scalar multiplication and fixed-base exponentiation kernels for
//! zero-knowledge proving.**
//!
//! Given bases \\(g_1, \ldots, g_n\\) in a commutative group of prime order
//! and scalars \\(s_1, \ldots, s_n\\) in its scalar field, this crate
//! computes the linear combination
//! $$
//! Q = s_1 g_1 + \cdots + s_n g_n.
//! $$
//! Multi-scalar multiplications dominate the cost of trusted setups and
//! proof generation, so several algorithms are provided and selected by
//! scalar count and density:
//!
//! * a naive sum of windowed-NAF exponentiations, used as a reference and
//!   for tiny inputs;
//! * the Pippenger-style bucket method of Bernstein, Doumen, Lange, and
//!   Oosterwijk (<https://eprint.iacr.org/2012/549.pdf>);
//! * the Bos-Coster max-heap reduction, which wins when scalars vary
//!   widely in bit length;
//! * fixed-base windowed tables for exponentiating many scalars against a
//!   single base.
//!
//! The crate is generic over the group: implement [`traits::Group`] (and
//! [`traits::ScalarField`] for its scalars) and every routine here becomes
//! available.  Curve arithmetic itself is out of scope; the [`mocks`]
//! module provides small prime-order groups used by the test suite and
//! benchmarks.
//!
//! All routines run in variable time.  This is a proving-time library:
//! scalars are witnesses and randomizers, not long-lived signing keys.
//!
//! # Features
//!
//! * `multicore` (default): shard [`scalar_mul::multi_exp`] and
//!   [`window::batch_exp`] over a rayon thread pool.  The group operation
//!   is commutative and associative, so the result is independent of the
//!   shard count.
//! * `lowmem`: cap fixed-base window sizes at 14 to bound table memory.

#[macro_use]
mod macros;

pub mod bigint;
pub mod mocks;
pub mod scalar_mul;
pub mod traits;
pub mod variable_base;
pub mod window;
pub mod wnaf;
