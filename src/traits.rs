// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Module for common traits.
//!
//! The exponentiation routines are generic over two abstractions: a
//! commutative [`Group`] of prime order written additively, and the
//! [`ScalarField`] acting on it.  A curve library implements these for
//! its point and field types; everything else in this crate follows.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::bigint::BigInteger;

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// Trait for getting the identity element of a group element type.
pub trait Identity {
    /// Returns the identity element of the group.
    /// Can be used as a constructor.
    fn identity() -> Self;
}

/// Trait for testing if a group element is equivalent to the identity.
pub trait IsIdentity {
    /// Return true if this element is the identity element of the group.
    fn is_identity(&self) -> bool;
}

/// Implement generic identity equality testing for any element type with
/// equality testing and a defined identity constructor.
impl<T> IsIdentity for T
where
    T: Eq + Identity,
{
    fn is_identity(&self) -> bool {
        *self == T::identity()
    }
}

/// An element of a prime-order scalar field.
///
/// The only structure the backends need beyond ring operations is the
/// projection [`as_bigint`](ScalarField::as_bigint) onto the canonical
/// integer representative in `[0, r)`, which the recoders and bucket
/// indexers consume limb by limb.
pub trait ScalarField:
    Copy
    + Clone
    + Debug
    + Eq
    + Send
    + Sync
    + Add<Output = Self>
    + Mul<Output = Self>
{
    /// Integer representation wide enough for a canonical representative.
    type BigInt: BigInteger;

    /// The additive identity of the field.
    fn zero() -> Self;

    /// The multiplicative identity of the field.
    fn one() -> Self;

    /// The canonical representative of this element in `[0, r)`.
    fn as_bigint(&self) -> Self::BigInt;

    /// Whether this element is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Whether this element is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }
}

/// An element of a commutative group of prime order, written additively.
///
/// Beyond the group operations themselves, implementations supply two
/// hooks the backends exploit:
///
/// * a *special* (typically affine) representation for which
///   [`mixed_add`](Group::mixed_add) beats the general addition formula,
///   together with an amortized batch conversion; and
/// * per-curve window tables, empirically tuned thresholds consulted when
///   choosing wNAF and fixed-base window sizes.
pub trait Group:
    Copy
    + Clone
    + Debug
    + Eq
    + Send
    + Sync
    + Identity
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    /// The scalar field acting on this group.
    type Scalar: ScalarField;

    /// Smallest scalar bit length at which each wNAF window size becomes
    /// preferable; entry `i` is the threshold for window size `i + 1`.
    /// The sequence is non-decreasing.
    const WNAF_WINDOW_TABLE: &'static [usize];

    /// Smallest scalar count at which each fixed-base window size becomes
    /// preferable; entry `i` is the threshold for window size `i + 1`.
    const FIXED_BASE_WINDOW_TABLE: &'static [usize];

    /// A distinguished generator of the group.
    fn generator() -> Self;

    /// Add this element to itself.
    fn double(&self) -> Self;

    /// Convert this element into its special form in place.
    ///
    /// The special form (affine coordinates, for a curve) is the
    /// representation [`mixed_add`](Group::mixed_add) expects of its
    /// argument.  The identity is always representable.
    fn to_special(&mut self);

    /// Whether this element is in special form.
    fn is_special(&self) -> bool;

    /// Add `other`, which must be in special form.
    ///
    /// Agrees with `self + other`; the point of the method is the cheaper
    /// formula available when one operand is special.
    fn mixed_add(&self, other: &Self) -> Self;

    /// Convert a batch of non-identity elements into special form.
    ///
    /// Callers filter out identity elements first and reinsert them
    /// afterwards; [`crate::scalar_mul::batch_to_special`] does exactly
    /// that.  Batching exists because the conversion typically shares one
    /// field inversion across the whole slice.
    fn batch_to_special_all_non_zeros(elements: &mut [Self]);

    /// Multiply by an integer scalar, double-and-add from the top bit.
    fn mul_bigint<B: BigInteger>(&self, scalar: &B) -> Self {
        let mut result = Self::identity();
        let mut found_one = false;
        for i in (0..scalar.num_bits()).rev() {
            if found_one {
                result = result.double();
            }
            if scalar.test_bit(i) {
                found_one = true;
                result += *self;
            }
        }
        result
    }

    /// Multiply by a scalar-field element.
    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        self.mul_bigint(&scalar.as_bigint())
    }
}
