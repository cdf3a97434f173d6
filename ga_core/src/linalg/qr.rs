/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::errors::GaError;
use crate::ops::derived;
use crate::ops::products::geometric_product;
use crate::types::algebra::Ga;
use crate::types::blade::Blade;
use crate::types::multivector::Multivector;
use ga_num::Scalar;

/// `Q`, `R` from [`householder_qr`]: `Q·R` reconstructs the input
/// column-wise, `R` upper-triangular in the algebra's basis.
#[derive(Debug, Clone)]
pub struct QrResult<S: Scalar> {
    pub q: Vec<Multivector<S>>,
    pub r: Vec<Multivector<S>>,
}

fn zero_below<S: Scalar>(v: &Multivector<S>, d: usize) -> Multivector<S> {
    let blades: Vec<Blade<S>> = v
        .blades()
        .iter()
        .filter(|b| (b.bitmap().trailing_zeros() as usize) >= d)
        .copied()
        .collect();
    Multivector::new(blades)
}

fn coefficient<S: Scalar>(v: &Multivector<S>, index: usize) -> S {
    v.blades()
        .iter()
        .find(|b| b.bitmap() == (1u64 << index))
        .map(|b| b.scale())
        .unwrap_or_else(S::zero)
}

/// `qd(x) = (-hy) · x · hy⁻¹`, the Householder reflection expressed as a
/// sandwich product rather than a matrix operation.
fn reflect<S: Scalar>(ga: &Ga<S>, hy: &Multivector<S>, x: &Multivector<S>) -> Result<Multivector<S>, GaError> {
    let hy_inv = derived::inverse(ga, hy)?;
    let neg_hy = -(hy.clone());
    let step = geometric_product(ga, &neg_hy, x);
    Ok(geometric_product(ga, &step, &hy_inv))
}

fn standard_basis_reflected<S: Scalar>(ga: &Ga<S>, hyperplanes: &[Multivector<S>]) -> Result<Vec<Multivector<S>>, GaError> {
    let mut q = Vec::with_capacity(ga.dim());
    for i in 0..ga.dim() {
        let mut x = Multivector::from_blade(Blade::new(1u64 << i, S::one()));
        for hy in hyperplanes {
            x = reflect(ga, hy, &x)?;
        }
        q.push(x.grade_projection(1));
    }
    Ok(q)
}

/// Householder QR over `vectors` (grade-1 multivectors), one column at a
/// time:
/// 1. `v` = column `d`, zeroed below index `d`.
/// 2. `e` = basis vector `d` scaled by `-sign(v[d])` (`sign(0) = +1`).
/// 3. `bi = normalize(v) + e`, falling back to `e` if that sum is empty.
/// 4. `hy = ~bi`.
/// 5. `qd(x) = (-hy)·x·hy⁻¹`, applied to columns `d..n` and composed
///    into `Q`.
pub fn householder_qr<S: Scalar>(ga: &Ga<S>, vectors: &[Multivector<S>]) -> Result<QrResult<S>, GaError> {
    let n = vectors.len();
    let mut r: Vec<Multivector<S>> = vectors.to_vec();
    let mut hyperplanes: Vec<Multivector<S>> = Vec::new();

    for d in 0..n.saturating_sub(1) {
        let v = zero_below(&r[d], d);
        let vd = coefficient(&v, d);
        let neg_sign_vd = if vd.is_negative() { S::one() } else { -S::one() };
        let e = Multivector::from_blade(Blade::new(1u64 << d, neg_sign_vd));

        let len = derived::length(ga, &v);
        let normalized_v = if len.is_zero() { v.clone() } else { v.clone() / len };
        let mut bi = normalized_v + e.clone();
        if bi.is_empty() {
            bi = e;
        }
        let hy = derived::dual(ga, &bi);

        for col in r.iter_mut().skip(d) {
            *col = reflect(ga, &hy, col)?;
        }
        hyperplanes.push(hy);
    }

    let q = standard_basis_reflected(ga, &hyperplanes)?;
    let r_trimmed: Vec<Multivector<S>> = r.into_iter().map(|mv| mv.grade_projection(1)).collect();
    Ok(QrResult { q, r: r_trimmed })
}
