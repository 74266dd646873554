// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Mock groups backing the test suite and benchmarks.
//!
//! Curve arithmetic is out of scope for this crate, but the generic
//! routines still need groups to run against.  These mocks are the
//! simplest commutative groups of large prime order there are: the
//! integers under addition modulo the Mersenne prime `r = 2^61 - 1`
//! ([`MockG1`]), and a pair of such coordinates ([`MockG2`], standing in
//! for a group over an extension field).  The matching scalar field
//! [`MockFr`] is arithmetic modulo the same prime, exact via `u128`
//! intermediates.
//!
//! The mocks track a *special form* flag the way a curve implementation
//! distinguishes affine from projective points: group operations clear
//! it, `to_special` sets it, and `mixed_add` debug-asserts it on its
//! argument.  Equality ignores the flag, which is a property of the
//! representation rather than of the group element.  This makes the
//! mocks strict enough to catch a backend that forgets to convert
//! before mixing.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use rand_core::RngCore;

use crate::bigint::BigInt;
use crate::traits::{Group, Identity, IsIdentity, ScalarField};

/// The order of the mock groups and modulus of [`MockFr`]: the Mersenne
/// prime `2^61 - 1`.
pub const MOCK_MODULUS: u64 = (1u64 << 61) - 1;

/// Bit size of the mock scalar field.
pub const MOCK_SCALAR_BITS: usize = 61;

// ------------------------------------------------------------------------
// Scalar field
// ------------------------------------------------------------------------

/// An element of the field of integers modulo [`MOCK_MODULUS`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct MockFr(u64);

impl MockFr {
    /// Construct from an integer, reducing modulo [`MOCK_MODULUS`].
    pub fn new(value: u64) -> MockFr {
        MockFr(value % MOCK_MODULUS)
    }

    /// The canonical representative in `[0, r)`.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Return a uniformly random field element.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> MockFr {
        // Rejection-free: the bias from reducing a u64 is ~2^-3 of the
        // range per residue, irrelevant for tests.
        MockFr(rng.next_u64() % MOCK_MODULUS)
    }
}

impl From<u64> for MockFr {
    fn from(value: u64) -> MockFr {
        MockFr::new(value)
    }
}

impl<'a, 'b> Add<&'b MockFr> for &'a MockFr {
    type Output = MockFr;
    fn add(self, rhs: &'b MockFr) -> MockFr {
        MockFr((((self.0 as u128) + (rhs.0 as u128)) % (MOCK_MODULUS as u128)) as u64)
    }
}

define_add_variants!(LHS = MockFr, RHS = MockFr, Output = MockFr);

impl<'b> AddAssign<&'b MockFr> for MockFr {
    fn add_assign(&mut self, rhs: &'b MockFr) {
        *self = (self as &MockFr) + rhs;
    }
}

define_add_assign_variants!(LHS = MockFr, RHS = MockFr);

impl<'a, 'b> Sub<&'b MockFr> for &'a MockFr {
    type Output = MockFr;
    fn sub(self, rhs: &'b MockFr) -> MockFr {
        MockFr(
            (((self.0 as u128) + (MOCK_MODULUS as u128) - (rhs.0 as u128))
                % (MOCK_MODULUS as u128)) as u64,
        )
    }
}

define_sub_variants!(LHS = MockFr, RHS = MockFr, Output = MockFr);

impl<'b> SubAssign<&'b MockFr> for MockFr {
    fn sub_assign(&mut self, rhs: &'b MockFr) {
        *self = (self as &MockFr) - rhs;
    }
}

define_sub_assign_variants!(LHS = MockFr, RHS = MockFr);

impl<'a, 'b> Mul<&'b MockFr> for &'a MockFr {
    type Output = MockFr;
    fn mul(self, rhs: &'b MockFr) -> MockFr {
        MockFr((((self.0 as u128) * (rhs.0 as u128)) % (MOCK_MODULUS as u128)) as u64)
    }
}

define_mul_variants!(LHS = MockFr, RHS = MockFr, Output = MockFr);

impl<'a> Neg for &'a MockFr {
    type Output = MockFr;
    fn neg(self) -> MockFr {
        MockFr((MOCK_MODULUS - self.0) % MOCK_MODULUS)
    }
}

impl Neg for MockFr {
    type Output = MockFr;
    fn neg(self) -> MockFr {
        -&self
    }
}

impl ScalarField for MockFr {
    type BigInt = BigInt<1>;

    fn zero() -> MockFr {
        MockFr(0)
    }

    fn one() -> MockFr {
        MockFr(1)
    }

    fn as_bigint(&self) -> BigInt<1> {
        BigInt::new([self.0])
    }
}

// ------------------------------------------------------------------------
// G1: the additive group of integers mod r
// ------------------------------------------------------------------------

/// An element of the additive group of integers modulo [`MOCK_MODULUS`].
#[derive(Copy, Clone, Debug)]
pub struct MockG1 {
    value: MockFr,
    special: bool,
}

impl MockG1 {
    /// Return a uniformly random group element, in general (non-special)
    /// form, as arithmetic would produce it.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> MockG1 {
        MockG1 {
            value: MockFr::random(rng),
            special: false,
        }
    }

    /// The canonical representative in `[0, r)`.
    pub fn value(&self) -> u64 {
        self.value.0
    }

    /// Serialize to little-endian bytes.
    pub fn to_bytes(&self) -> [u8; 8] {
        self.value.0.to_le_bytes()
    }

    /// Deserialize from little-endian bytes; `None` for non-canonical
    /// encodings.
    pub fn from_bytes(bytes: &[u8; 8]) -> Option<MockG1> {
        let value = u64::from_le_bytes(*bytes);
        if value < MOCK_MODULUS {
            Some(MockG1 {
                value: MockFr(value),
                special: true,
            })
        } else {
            None
        }
    }
}

impl From<u64> for MockG1 {
    fn from(value: u64) -> MockG1 {
        MockG1 {
            value: MockFr::new(value),
            special: true,
        }
    }
}

// Equality is on the group element; the special-form flag is a property
// of the representation.
impl PartialEq for MockG1 {
    fn eq(&self, other: &MockG1) -> bool {
        self.value == other.value
    }
}

impl Eq for MockG1 {}

impl Identity for MockG1 {
    fn identity() -> MockG1 {
        MockG1 {
            value: MockFr::zero(),
            special: true,
        }
    }
}

impl<'a, 'b> Add<&'b MockG1> for &'a MockG1 {
    type Output = MockG1;
    fn add(self, rhs: &'b MockG1) -> MockG1 {
        // Adding the identity is representation-preserving, as it is for
        // curve formulas that shortcut the point at infinity.
        if self.is_identity() {
            return *rhs;
        }
        if rhs.is_identity() {
            return *self;
        }
        MockG1 {
            value: self.value + rhs.value,
            special: false,
        }
    }
}

define_add_variants!(LHS = MockG1, RHS = MockG1, Output = MockG1);

impl<'b> AddAssign<&'b MockG1> for MockG1 {
    fn add_assign(&mut self, rhs: &'b MockG1) {
        *self = (self as &MockG1) + rhs;
    }
}

define_add_assign_variants!(LHS = MockG1, RHS = MockG1);

impl<'a, 'b> Sub<&'b MockG1> for &'a MockG1 {
    type Output = MockG1;
    fn sub(self, rhs: &'b MockG1) -> MockG1 {
        self + &(-rhs)
    }
}

define_sub_variants!(LHS = MockG1, RHS = MockG1, Output = MockG1);

impl<'b> SubAssign<&'b MockG1> for MockG1 {
    fn sub_assign(&mut self, rhs: &'b MockG1) {
        *self = (self as &MockG1) - rhs;
    }
}

define_sub_assign_variants!(LHS = MockG1, RHS = MockG1);

impl<'a> Neg for &'a MockG1 {
    type Output = MockG1;
    fn neg(self) -> MockG1 {
        MockG1 {
            value: -self.value,
            special: self.special,
        }
    }
}

impl Neg for MockG1 {
    type Output = MockG1;
    fn neg(self) -> MockG1 {
        -&self
    }
}

impl Group for MockG1 {
    type Scalar = MockFr;

    const WNAF_WINDOW_TABLE: &'static [usize] = &[11, 24, 60, 144];

    const FIXED_BASE_WINDOW_TABLE: &'static [usize] =
        &[1, 4, 12, 35, 103, 309, 1004, 3298, 10981, 36097];

    fn generator() -> MockG1 {
        MockG1 {
            value: MockFr::one(),
            special: true,
        }
    }

    fn double(&self) -> MockG1 {
        self + self
    }

    fn to_special(&mut self) {
        self.special = true;
    }

    fn is_special(&self) -> bool {
        self.special
    }

    fn mixed_add(&self, other: &MockG1) -> MockG1 {
        debug_assert!(other.is_special(), "mixed_add argument must be special");
        self + other
    }

    fn batch_to_special_all_non_zeros(elements: &mut [MockG1]) {
        for el in elements.iter_mut() {
            debug_assert!(!el.is_identity(), "batch conversion requires non-identity inputs");
            el.special = true;
        }
    }
}

// ------------------------------------------------------------------------
// G2: the pair group, standing in for a group over an extension field
// ------------------------------------------------------------------------

/// An element of the product group `(Z_r)^2` under componentwise
/// addition.
#[derive(Copy, Clone, Debug)]
pub struct MockG2 {
    c0: MockFr,
    c1: MockFr,
    special: bool,
}

impl MockG2 {
    /// Return a uniformly random group element in general form.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> MockG2 {
        MockG2 {
            c0: MockFr::random(rng),
            c1: MockFr::random(rng),
            special: false,
        }
    }

    /// Serialize to little-endian bytes, low coordinate first.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.c0.0.to_le_bytes());
        bytes[8..].copy_from_slice(&self.c1.0.to_le_bytes());
        bytes
    }

    /// Deserialize from little-endian bytes; `None` for non-canonical
    /// encodings.
    pub fn from_bytes(bytes: &[u8; 16]) -> Option<MockG2> {
        let c0 = u64::from_le_bytes(bytes[..8].try_into().expect("8 bytes"));
        let c1 = u64::from_le_bytes(bytes[8..].try_into().expect("8 bytes"));
        if c0 < MOCK_MODULUS && c1 < MOCK_MODULUS {
            Some(MockG2 {
                c0: MockFr(c0),
                c1: MockFr(c1),
                special: true,
            })
        } else {
            None
        }
    }
}

impl PartialEq for MockG2 {
    fn eq(&self, other: &MockG2) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl Eq for MockG2 {}

impl Identity for MockG2 {
    fn identity() -> MockG2 {
        MockG2 {
            c0: MockFr::zero(),
            c1: MockFr::zero(),
            special: true,
        }
    }
}

impl<'a, 'b> Add<&'b MockG2> for &'a MockG2 {
    type Output = MockG2;
    fn add(self, rhs: &'b MockG2) -> MockG2 {
        if self.is_identity() {
            return *rhs;
        }
        if rhs.is_identity() {
            return *self;
        }
        MockG2 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            special: false,
        }
    }
}

define_add_variants!(LHS = MockG2, RHS = MockG2, Output = MockG2);

impl<'b> AddAssign<&'b MockG2> for MockG2 {
    fn add_assign(&mut self, rhs: &'b MockG2) {
        *self = (self as &MockG2) + rhs;
    }
}

define_add_assign_variants!(LHS = MockG2, RHS = MockG2);

impl<'a, 'b> Sub<&'b MockG2> for &'a MockG2 {
    type Output = MockG2;
    fn sub(self, rhs: &'b MockG2) -> MockG2 {
        self + &(-rhs)
    }
}

define_sub_variants!(LHS = MockG2, RHS = MockG2, Output = MockG2);

impl<'b> SubAssign<&'b MockG2> for MockG2 {
    fn sub_assign(&mut self, rhs: &'b MockG2) {
        *self = (self as &MockG2) - rhs;
    }
}

define_sub_assign_variants!(LHS = MockG2, RHS = MockG2);

impl<'a> Neg for &'a MockG2 {
    type Output = MockG2;
    fn neg(self) -> MockG2 {
        MockG2 {
            c0: -self.c0,
            c1: -self.c1,
            special: self.special,
        }
    }
}

impl Neg for MockG2 {
    type Output = MockG2;
    fn neg(self) -> MockG2 {
        -&self
    }
}

impl Group for MockG2 {
    type Scalar = MockFr;

    const WNAF_WINDOW_TABLE: &'static [usize] = &[13, 29, 70, 160];

    const FIXED_BASE_WINDOW_TABLE: &'static [usize] =
        &[1, 5, 11, 35, 103, 309, 1004, 3298, 10981];

    fn generator() -> MockG2 {
        MockG2 {
            c0: MockFr::one(),
            c1: MockFr::one(),
            special: true,
        }
    }

    fn double(&self) -> MockG2 {
        self + self
    }

    fn to_special(&mut self) {
        self.special = true;
    }

    fn is_special(&self) -> bool {
        self.special
    }

    fn mixed_add(&self, other: &MockG2) -> MockG2 {
        debug_assert!(other.is_special(), "mixed_add argument must be special");
        self + other
    }

    fn batch_to_special_all_non_zeros(elements: &mut [MockG2]) {
        for el in elements.iter_mut() {
            debug_assert!(!el.is_identity(), "batch conversion requires non-identity inputs");
            el.special = true;
        }
    }
}
