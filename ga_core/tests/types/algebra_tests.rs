/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use ga_core::{ga, multivector, products, GaParams, MetricBlock};

fn euclidean_3d() -> ga_core::Ga<f64> {
    ga(GaParams::<f64>::new(3, 0, 0)).expect("euclidean construction should succeed")
}

// =============================================================================
// construction tests
// =============================================================================

#[test]
fn test_dimension_is_sum_of_pqr() {
    let algebra = ga(GaParams::<f64>::new(2, 1, 1)).unwrap();
    assert_eq!(algebra.dim(), 4);
}

#[test]
fn test_default_signs_are_euclidean_minkowski_degenerate() {
    let algebra = ga(GaParams::<f64>::new(1, 1, 1)).unwrap();
    assert_eq!(algebra.metric_diagonal(), &[1.0, -1.0, 0.0]);
}

#[test]
fn test_explicit_metric_diagonal_overrides_pqr() {
    let params = GaParams::<f64>::new(2, 0, 0).metric_diagonal(vec![1.0, 1.0, -1.0]);
    let algebra = ga(params).unwrap();
    assert_eq!(algebra.dim(), 3);
    assert_eq!(algebra.metric_diagonal(), &[1.0, 1.0, -1.0]);
}

#[test]
fn test_block_order_controls_diagonal_layout() {
    // 2D projective algebra where the null direction e0 leads the diagonal.
    let params = GaParams::<f64>::new(2, 0, 1).block_order([MetricBlock::R, MetricBlock::P, MetricBlock::Q]);
    let algebra = ga(params).unwrap();
    assert_eq!(algebra.metric_diagonal(), &[0.0, 1.0, 1.0]);
}

#[test]
fn test_empty_signature_is_a_build_error() {
    let result = ga(GaParams::<f64>::new(0, 0, 0));
    assert!(result.is_err());
}

#[test]
fn test_zero_vector_labels() {
    let params = GaParams::<f64>::new(2, 0, 1);
    let algebra = ga(params).unwrap();
    assert_eq!(algebra.zero_vector_labels(), vec!["e2"]);
}

// =============================================================================
// pseudoscalar / specials
// =============================================================================

#[test]
fn test_pseudoscalar_is_top_grade() {
    let algebra = euclidean_3d();
    assert_eq!(algebra.pseudoscalar().max_grade(), 3);
    assert_eq!(algebra.pseudoscalar_bitmap(), 0b111);
}

#[test]
fn test_pseudoscalar_square_is_minus_one_in_euclidean_3d() {
    // G(3,0,0) pseudoscalar squares to the scalar -1.
    let algebra = euclidean_3d();
    let i = algebra.pseudoscalar();
    let i_squared = products::geometric_product(&algebra, &i, &i);
    assert_eq!(i_squared.scalar_part(), -1.0);
    assert!(i_squared.max_grade() == 0);
}

#[test]
fn test_unit_scalar_is_multiplicative_identity() {
    let algebra = euclidean_3d();
    let v = multivector(&algebra, &[(1.0, "e1"), (2.0, "e2")]).unwrap();
    let product = products::geometric_product(&algebra, &algebra.unit_scalar(), &v);
    assert_eq!(product, v);
}

// =============================================================================
// dual law: b ∧ ~b == I for every basis blade b
// =============================================================================

#[test]
fn test_dual_law_holds_for_every_basis_blade() {
    let algebra = euclidean_3d();
    for blade in algebra.basis_in_order() {
        let b_mv = ga_core::Multivector::from_blade(*blade);
        let dual_mv = ga_core::derived::dual(&algebra, &b_mv);
        let wedge = products::wedge(&algebra, &b_mv, &dual_mv);
        assert_eq!(wedge, algebra.pseudoscalar(), "dual law failed for bitmap {}", blade.bitmap());
    }
}

// =============================================================================
// multivector() literal builder
// =============================================================================

#[test]
fn test_multivector_literal_resolves_labels() {
    let algebra = euclidean_3d();
    let v = multivector(&algebra, &[(2.0, "e1"), (3.0, "e2")]).unwrap();
    assert_eq!(v.blades().len(), 2);
}

#[test]
fn test_multivector_literal_rejects_unknown_label() {
    let algebra = euclidean_3d();
    assert!(multivector(&algebra, &[(1.0, "nope")]).is_err());
}

#[test]
fn test_null_vector_in_lorentzian_1_1_signature() {
    // G(1,1,0) null vector: orthogonal-complement coordinates cancel.
    let algebra = ga(GaParams::<f64>::new(1, 1, 0)).unwrap();
    let n = multivector(&algebra, &[(1.0, "e0"), (1.0, "e1")]).unwrap();
    let n_squared = products::geometric_product(&algebra, &n, &n);
    assert_eq!(n_squared.scalar_part(), 0.0);
    assert!(n_squared.is_empty());

    let inverse = ga_core::derived::inverse(&algebra, &n);
    assert!(inverse.is_err());
}
