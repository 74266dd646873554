// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! End-to-end tests of the public API, sized like real workloads.

use multiexp::bigint::{BigInt, BigInteger};
use multiexp::mocks::{MockFr, MockG1, MockG2, MOCK_MODULUS, MOCK_SCALAR_BITS};
use multiexp::scalar_mul::{
    batch_to_special, inner_product, multi_exp, multi_exp_with_mixed_addition, MultiExpMethod,
};
use multiexp::traits::{Group, Identity, ScalarField};
use multiexp::variable_base::{opt_window_wnaf_exp, power};
use multiexp::window::{batch_exp, batch_exp_with_coeff, get_exp_window_size, get_window_table};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const METHODS: [MultiExpMethod; 4] = [
    MultiExpMethod::Naive,
    MultiExpMethod::NaivePlain,
    MultiExpMethod::Bdlo12,
    MultiExpMethod::BosCoster,
];

// The mock group is arithmetic mod the group order, so expected values
// are one u128 away.
fn expected_combination(bases: &[MockG1], scalars: &[MockFr]) -> MockG1 {
    let mut acc: u128 = 0;
    for (base, scalar) in bases.iter().zip(scalars.iter()) {
        acc = (acc + (base.value() as u128) * (scalar.value() as u128) % (MOCK_MODULUS as u128))
            % (MOCK_MODULUS as u128);
    }
    MockG1::from(acc as u64)
}

#[test]
fn all_backends_agree_across_sizes() {
    let mut rng = StdRng::seed_from_u64(2012);
    for length in [1usize, 2, 8, 100, 10_000] {
        let bases: Vec<MockG1> = (0..length).map(|_| MockG1::random(&mut rng)).collect();
        let scalars: Vec<MockFr> = (0..length).map(|_| MockFr::random(&mut rng)).collect();

        let expected = expected_combination(&bases, &scalars);
        for method in METHODS {
            for chunks in [1usize, 2, 8] {
                assert_eq!(
                    multi_exp(&bases, &scalars, method, chunks),
                    expected,
                    "{:?} with {} chunks disagrees at length {}",
                    method,
                    chunks,
                    length
                );
            }
            assert_eq!(
                multi_exp_with_mixed_addition(&bases, &scalars, method, 2),
                expected,
                "mixed-addition wrapper disagrees for {:?} at length {}",
                method,
                length
            );
        }
    }
}

#[test]
fn wrapper_absorbs_sparse_scalar_vectors() {
    let mut rng = StdRng::seed_from_u64(2013);
    let length = 500;
    let bases: Vec<MockG1> = (0..length).map(|_| MockG1::random(&mut rng)).collect();
    let scalars: Vec<MockFr> = (0..length)
        .map(|_| match rng.gen_range(0u32..4) {
            0 => MockFr::zero(),
            1 => MockFr::one(),
            _ => MockFr::random(&mut rng),
        })
        .collect();

    let expected = expected_combination(&bases, &scalars);
    for method in METHODS {
        assert_eq!(
            multi_exp_with_mixed_addition(&bases, &scalars, method, 4),
            expected
        );
    }
}

#[test]
fn generator_scenario() {
    // Four copies of the generator with scalars 1, 2, 3, 4 sum to
    // 10 * generator under every backend.
    let bases = vec![MockG1::generator(); 4];
    let scalars: Vec<MockFr> = (1u64..=4).map(MockFr::from).collect();
    let expected = MockG1::generator().mul_scalar(&MockFr::from(10u64));

    for method in METHODS {
        assert_eq!(multi_exp(&bases, &scalars, method, 1), expected);
        assert_eq!(
            multi_exp_with_mixed_addition(&bases, &scalars, method, 1),
            expected
        );
    }
}

#[test]
fn fixed_base_pipeline_matches_multi_exp() {
    let mut rng = StdRng::seed_from_u64(2014);
    let g = MockG2::random(&mut rng);
    let scalars: Vec<MockFr> = (0..200).map(|_| MockFr::random(&mut rng)).collect();

    let window = get_exp_window_size::<MockG2>(scalars.len());
    assert!(window >= 1);
    let table = get_window_table(MOCK_SCALAR_BITS, window, &g);

    let batch = batch_exp(MOCK_SCALAR_BITS, window, &table, &scalars);
    for (result, scalar) in batch.iter().zip(scalars.iter()) {
        assert_eq!(*result, g.mul_scalar(scalar));
    }

    let coeff = MockFr::random(&mut rng);
    let with_coeff = batch_exp_with_coeff(MOCK_SCALAR_BITS, window, &table, &coeff, &scalars);
    for (result, scalar) in with_coeff.iter().zip(scalars.iter()) {
        assert_eq!(*result, g.mul_scalar(&(coeff * *scalar)));
    }
}

#[test]
fn wnaf_exponentiation_with_wide_scalars() {
    let mut rng = StdRng::seed_from_u64(2015);
    let base = MockG1::random(&mut rng);

    // A scalar wider than the group order acts as its residue mod the
    // order; the generic exponentiation must agree with the reduced one.
    let wide = BigInt::<4>::new([rng.gen(), rng.gen(), rng.gen(), rng.gen::<u64>() >> 1]);
    let mut residue: u128 = 0;
    for &limb in wide.as_limbs().iter().rev() {
        residue = ((residue << 64) + limb as u128) % (MOCK_MODULUS as u128);
    }

    assert_eq!(
        opt_window_wnaf_exp(&base, &wide, wide.num_bits()),
        base.mul_bigint(&BigInt::<1>::from_u64(residue as u64)),
    );
}

#[test]
fn power_and_inner_product() {
    let mut rng = StdRng::seed_from_u64(2016);

    // Fermat: a^(r-1) = 1 in the scalar field.
    let a = MockFr::random(&mut rng);
    let exp = BigInt::<1>::from_u64(MOCK_MODULUS - 1);
    if !a.is_zero() {
        assert_eq!(power(&a, &exp), MockFr::one());
    }

    let u: Vec<MockFr> = (0..64).map(|_| MockFr::random(&mut rng)).collect();
    let v: Vec<MockFr> = (0..64).map(|_| MockFr::random(&mut rng)).collect();
    let mut expected = MockFr::zero();
    for (x, y) in u.iter().zip(v.iter()) {
        expected = expected + *x * *y;
    }
    assert_eq!(inner_product(&u, &v), expected);
}

#[test]
fn batch_to_special_round_trip() {
    let mut rng = StdRng::seed_from_u64(2017);
    let mut elements: Vec<MockG1> = (0..32).map(|_| MockG1::random(&mut rng)).collect();
    elements[3] = MockG1::identity();
    elements[17] = MockG1::identity();
    let original = elements.clone();

    batch_to_special(&mut elements);

    for (after, before) in elements.iter().zip(original.iter()) {
        assert!(after.is_special());
        assert_eq!(after, before);
    }
}
