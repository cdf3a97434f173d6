/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use ga_core::linalg::qr::householder_qr;
use ga_core::{derived, ga, Blade, GaParams, Multivector};

const EPS: f64 = 1e-9;

fn standard_basis(dim: usize) -> Vec<Multivector<f64>> {
    (0..dim).map(|i| Multivector::from_blade(Blade::new(1u64 << i, 1.0))).collect()
}

fn is_upper_triangular(v: &Multivector<f64>, d: usize) -> bool {
    v.blades().iter().all(|b| (b.bitmap().trailing_zeros() as usize) >= d)
}

fn coeff(mv: &Multivector<f64>, bitmap: u64) -> f64 {
    mv.blades().iter().find(|b| b.bitmap() == bitmap).map(|b| b.scale()).unwrap_or(0.0)
}

#[test]
fn test_qr_of_orthonormal_basis_negates_every_non_last_column() {
    // QR on the already-orthonormal standard basis of G(3,0,0). The
    // Householder reflector picks e = -sign(v[d]) * basis[d], so a
    // positive pivot is driven negative rather than left alone: columns
    // 0 and 1 come back negated and only the last column (never reduced
    // by a reflection of its own) survives unchanged. Q == R == the
    // input up to that sign flip, not the identity/input pair outright
    // (see DESIGN.md Open Question on the Householder sign convention).
    let algebra = ga(GaParams::<f64>::new(3, 0, 0)).unwrap();
    let columns = standard_basis(3);
    let result = householder_qr(&algebra, &columns).expect("orthonormal columns are never singular");

    assert_eq!(result.r.len(), 3);
    assert_eq!(result.q.len(), 3);

    let expected_sign = [-1.0, -1.0, 1.0];
    for (d, (column, q_vector)) in result.r.iter().zip(&result.q).enumerate() {
        assert!(is_upper_triangular(column, d), "column {d} has an entry below the diagonal");
        assert_eq!(coeff(column, 1 << d), expected_sign[d]);
        assert_eq!(coeff(q_vector, 1 << d), expected_sign[d]);
        assert_eq!(column.max_grade(), 1);
        assert_eq!(q_vector.max_grade(), 1);
    }
}

#[test]
fn test_qr_of_single_vector_is_itself() {
    let algebra = ga(GaParams::<f64>::new(2, 0, 0)).unwrap();
    let columns = vec![Multivector::from_blade(Blade::new(0b01, 1.0))];
    let result = householder_qr(&algebra, &columns).unwrap();
    assert_eq!(result.r.len(), 1);
    assert_eq!(result.q.len(), 2);
    assert!((derived::length(&algebra, &result.r[0]) - 1.0).abs() < EPS);
}

#[test]
fn test_qr_handles_a_scaled_column() {
    let algebra = ga(GaParams::<f64>::new(2, 0, 0)).unwrap();
    let columns = vec![Multivector::from_blade(Blade::new(0b01, 2.0)), Multivector::from_blade(Blade::new(0b10, 1.0))];
    let result = householder_qr(&algebra, &columns).unwrap();
    assert!(is_upper_triangular(&result.r[0], 0));
    assert!((derived::length(&algebra, &result.r[0]) - 2.0).abs() < EPS);
}
