/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use ga_core::{Blade, Multivector};

fn mv(pairs: &[(u64, f64)]) -> Multivector<f64> {
    Multivector::new(pairs.iter().map(|&(bitmap, scale)| Blade::new(bitmap, scale)).collect())
}

// =============================================================================
// construction tests
// =============================================================================

#[test]
fn test_empty_is_additive_identity() {
    let e = Multivector::<f64>::empty();
    assert!(e.is_empty());
    assert_eq!(e.scalar_part(), 0.0);
}

#[test]
fn test_scalar_zero_collapses_to_empty() {
    let s = Multivector::scalar(0.0_f64);
    assert!(s.is_empty());
}

#[test]
fn test_from_blade_zero_collapses_to_empty() {
    let b = Blade::new(0b01, 0.0_f64);
    assert!(Multivector::from_blade(b).is_empty());
}

// =============================================================================
// simplify() / simplify0() tests
// =============================================================================

#[test]
fn test_simplify_sorts_and_merges_equal_bitmaps() {
    let m = mv(&[(0b10, 1.0), (0b01, 2.0), (0b10, 3.0)]).simplify();
    let bitmaps: Vec<u64> = m.blades().iter().map(|b| b.bitmap()).collect();
    assert_eq!(bitmaps, vec![0b01, 0b10]);
    assert_eq!(m.blades()[1].scale(), 4.0);
}

#[test]
fn test_simplify_drops_zero_scale_terms() {
    let m = mv(&[(0b01, 1.0), (0b01, -1.0), (0b10, 5.0)]).simplify();
    assert_eq!(m.blades().len(), 1);
    assert_eq!(m.blades()[0].bitmap(), 0b10);
}

#[test]
fn test_simplify0_keeps_zero_scale_terms() {
    let m = mv(&[(0b01, 1.0), (0b01, -1.0), (0b10, 5.0)]).simplify0();
    assert_eq!(m.blades().len(), 2);
    assert_eq!(m.blades()[0].scale(), 0.0);
}

// =============================================================================
// grade_projection() / scalar_part() / max_grade() tests
// =============================================================================

#[test]
fn test_grade_projection_filters_by_grade() {
    let m = mv(&[(0b000, 1.0), (0b001, 2.0), (0b011, 3.0)]);
    let vectors = m.grade_projection(1);
    assert_eq!(vectors.blades().len(), 1);
    assert_eq!(vectors.blades()[0].bitmap(), 0b001);
}

#[test]
fn test_scalar_part_absent_is_zero() {
    let m = mv(&[(0b001, 2.0)]);
    assert_eq!(m.scalar_part(), 0.0);
}

#[test]
fn test_max_grade_of_empty_is_zero() {
    assert_eq!(Multivector::<f64>::empty().max_grade(), 0);
}

#[test]
fn test_max_grade_picks_highest_present() {
    let m = mv(&[(0b001, 1.0), (0b111, 1.0), (0b011, 1.0)]);
    assert_eq!(m.max_grade(), 3);
}

// =============================================================================
// arithmetic tests
// =============================================================================

#[test]
fn test_add_merges_like_terms() {
    let a = mv(&[(0b01, 1.0)]);
    let b = mv(&[(0b01, 2.0), (0b10, 3.0)]);
    let sum = a + b;
    assert_eq!(sum.scalar_part(), 0.0);
    let coeff = |m: &Multivector<f64>, bitmap: u64| m.blades().iter().find(|x| x.bitmap() == bitmap).map(|x| x.scale()).unwrap_or(0.0);
    assert_eq!(coeff(&sum, 0b01), 3.0);
    assert_eq!(coeff(&sum, 0b10), 3.0);
}

#[test]
fn test_sub_negates_and_adds() {
    let a = mv(&[(0b01, 5.0)]);
    let b = mv(&[(0b01, 2.0)]);
    let diff = a - b;
    assert_eq!(diff.blades()[0].scale(), 3.0);
}

#[test]
fn test_neg_flips_all_scales() {
    let a = mv(&[(0b01, 1.0), (0b10, -2.0)]);
    let negated = -a;
    let scales: Vec<f64> = negated.blades().iter().map(|b| b.scale()).collect();
    assert_eq!(scales, vec![-1.0, 2.0]);
}

#[test]
fn test_mul_and_div_by_scalar() {
    let a = mv(&[(0b01, 2.0)]);
    let scaled = a.clone() * 3.0;
    assert_eq!(scaled.blades()[0].scale(), 6.0);
    let divided = a / 2.0;
    assert_eq!(divided.blades()[0].scale(), 1.0);
}

#[test]
fn test_partial_eq_compares_canonical_forms() {
    let a = mv(&[(0b10, 1.0), (0b01, 2.0)]);
    let b = mv(&[(0b01, 2.0), (0b10, 1.0)]);
    assert_eq!(a, b);
}

#[test]
fn test_display_of_empty_is_zero() {
    assert_eq!(format!("{}", Multivector::<f64>::empty()), "0");
}

#[test]
fn test_display_joins_blades_with_plus() {
    let m = mv(&[(0b01, 1.0), (0b10, 2.0)]);
    assert_eq!(format!("{m}"), "1*e1 + 2*e10");
}
