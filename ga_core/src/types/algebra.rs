/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::errors::GaBuildError;
use crate::ops::dispatch::OpTable;
use crate::types::basis::{basis_by_grade, basis_label, generate_basis};
use crate::types::blade::{canonical_sign, Blade};
use crate::types::multivector::Multivector;
use ga_metric::Metric;
use ga_num::Scalar;

/// Which block of the diagonal a `pqr` permutation entry selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricBlock {
    P,
    Q,
    R,
}

/// Construction parameters for [`ga`]. Every field carries its own
/// sensible default.
#[derive(Debug, Clone)]
pub struct GaParams<S: Scalar> {
    pub prefix: String,
    pub base: usize,
    pub p: usize,
    pub q: usize,
    pub r: usize,
    pub pm: S,
    pub qm: S,
    pub rm: S,
    pub md: Option<Vec<S>>,
    pub pqr: [MetricBlock; 3],
    pub mm: Option<Vec<Multivector<S>>>,
    pub mmga: Option<Box<Ga<S>>>,
}

impl<S: Scalar> GaParams<S> {
    pub fn new(p: usize, q: usize, r: usize) -> Self {
        GaParams {
            prefix: "e".to_string(),
            base: 0,
            p,
            q,
            r,
            pm: S::one(),
            qm: -S::one(),
            rm: S::zero(),
            md: None,
            pqr: [MetricBlock::P, MetricBlock::Q, MetricBlock::R],
            mm: None,
            mmga: None,
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn base(mut self, base: usize) -> Self {
        self.base = base;
        self
    }

    pub fn signs(mut self, pm: S, qm: S, rm: S) -> Self {
        self.pm = pm;
        self.qm = qm;
        self.rm = rm;
        self
    }

    pub fn metric_diagonal(mut self, md: Vec<S>) -> Self {
        self.md = Some(md);
        self
    }

    pub fn block_order(mut self, pqr: [MetricBlock; 3]) -> Self {
        self.pqr = pqr;
        self
    }

    pub fn metric_multivectors(mut self, mm: Vec<Multivector<S>>, mmga: Ga<S>) -> Self {
        self.mm = Some(mm);
        self.mmga = Some(Box::new(mmga));
        self
    }
}

fn build_diagonal<S: Scalar>(params: &GaParams<S>) -> Result<Vec<S>, GaBuildError> {
    if let Some(md) = &params.md {
        return Ok(md.clone());
    }
    let mut diag = Vec::with_capacity(params.p + params.q + params.r);
    for block in params.pqr {
        match block {
            MetricBlock::P => diag.extend(std::iter::repeat(params.pm).take(params.p)),
            MetricBlock::Q => diag.extend(std::iter::repeat(params.qm).take(params.q)),
            MetricBlock::R => diag.extend(std::iter::repeat(params.rm).take(params.r)),
        }
    }
    if diag.is_empty() {
        return Err(GaBuildError::new("a Ga algebra needs at least one basis vector (p+q+r == 0 and no md given)"));
    }
    Ok(diag)
}

fn diagonal_to_metric<S: Scalar>(diag: &[S]) -> Metric {
    let signs: Vec<i32> = diag
        .iter()
        .map(|v| if v.is_zero() { 0 } else if v.is_negative() { -1 } else { 1 })
        .collect();
    Metric::from_signs(&signs).unwrap_or(Metric::Custom {
        dim: diag.len(),
        neg_mask: 0,
        zero_mask: 0,
    })
}

/// Immutable record built once per signature: basis tables, duals,
/// specials, and the precomputed operator table.
#[derive(Clone)]
pub struct Ga<S: Scalar> {
    dim: usize,
    metric: Metric,
    metric_diagonal: Vec<S>,
    prefix: String,
    base: usize,
    basis_labels: Vec<String>,
    basis_in_order: Vec<Blade<S>>,
    basis_by_grade: Vec<Blade<S>>,
    dual_bitmaps: Vec<u64>,
    dual_signs: Vec<S>,
    pseudoscalar_bitmap: u64,
    zero_indices: Vec<usize>,
    eigenvalues: Option<Vec<S>>,
    eigenvectors: Option<Vec<Multivector<S>>>,
    metric_mvs: Option<Vec<Multivector<S>>>,
    ops: OpTable<S>,
}

impl<S: Scalar> Ga<S> {
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    pub fn metric_diagonal(&self) -> &[S] {
        &self.metric_diagonal
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn basis_label(&self, bitmap: u64) -> &str {
        &self.basis_labels[bitmap as usize]
    }

    pub fn basis_in_order(&self) -> &[Blade<S>] {
        &self.basis_in_order
    }

    pub fn basis_by_grade(&self) -> &[Blade<S>] {
        &self.basis_by_grade
    }

    pub fn basis_vector(&self, bitmap: u64) -> Blade<S> {
        self.basis_in_order[bitmap as usize]
    }

    pub fn ops(&self) -> &OpTable<S> {
        &self.ops
    }

    pub fn pseudoscalar_bitmap(&self) -> u64 {
        self.pseudoscalar_bitmap
    }

    /// `I`: the unique grade-`dim` basis blade.
    pub fn pseudoscalar(&self) -> Multivector<S> {
        Multivector::from_blade(Blade::new(self.pseudoscalar_bitmap, S::one()))
    }

    /// `S`: the scalar unit blade `1`.
    pub fn unit_scalar(&self) -> Multivector<S> {
        Multivector::scalar(S::one())
    }

    /// `z_j` labels: the basis vectors whose metric entry is `0`.
    pub fn zero_vector_labels(&self) -> Vec<&str> {
        self.zero_indices.iter().map(|&i| self.basis_label(1 << i)).collect()
    }

    pub fn dual_bitmap(&self, bitmap: u64) -> u64 {
        self.dual_bitmaps[bitmap as usize]
    }

    pub fn dual_sign(&self, bitmap: u64) -> S {
        self.dual_signs[bitmap as usize]
    }

    pub fn eigenvalues(&self) -> Option<&[S]> {
        self.eigenvalues.as_deref()
    }

    pub fn eigenvectors(&self) -> Option<&[Multivector<S>]> {
        self.eigenvectors.as_deref()
    }

    pub fn metric_multivectors(&self) -> Option<&[Multivector<S>]> {
        self.metric_mvs.as_deref()
    }

    pub fn metric_entry(&self, index: usize) -> S {
        self.metric_diagonal[index]
    }

    pub fn label_of(&self, indices: &[usize]) -> String {
        basis_label(&self.prefix, self.base, indices)
    }

    pub fn bitmap_for_label(&self, label: &str) -> Option<u64> {
        self.basis_labels.iter().position(|l| l == label).map(|i| i as u64)
    }
}

/// `multivector(ga, [c1 b1 c2 b2 ...])`: a paired scale/basis-
/// label sequence, resolved against `ga`'s basis table and returned in
/// canonical (simplified) form.
pub fn multivector<S: Scalar>(ga: &Ga<S>, pairs: &[(S, &str)]) -> Result<Multivector<S>, GaBuildError> {
    let mut blades = Vec::with_capacity(pairs.len());
    for &(scale, label) in pairs {
        let bitmap = ga
            .bitmap_for_label(label)
            .ok_or_else(|| GaBuildError::new(format!("unknown basis label `{label}`")))?;
        blades.push(Blade::new(bitmap, scale));
    }
    Ok(Multivector::new(blades).simplify())
}

/// Builds an algebra from `params` (`ga(params)`). Runs
/// eigendecomposition against `mmga` when non-orthonormal `mm` metric
/// multivectors are supplied.
pub fn ga<S: Scalar>(params: GaParams<S>) -> Result<Ga<S>, GaBuildError> {
    let metric_diagonal = build_diagonal(&params)?;
    let dim = metric_diagonal.len();
    if dim > 63 {
        return Err(GaBuildError::new(format!("dimension {dim} exceeds the 63-bit bitmap budget")));
    }
    let metric = diagonal_to_metric(&metric_diagonal);

    let basis_in_order: Vec<Blade<S>> = generate_basis(dim);
    let basis_by_grade = basis_by_grade(&basis_in_order);
    let basis_labels = crate::types::basis::basis_labels(&params.prefix, params.base, dim);

    let pseudoscalar_bitmap = (1u64 << dim) - 1;
    let n = basis_in_order.len();
    let mut dual_bitmaps = Vec::with_capacity(n);
    let mut dual_signs = Vec::with_capacity(n);
    for bitmap in 0..n as u64 {
        let dual_bitmap = bitmap ^ pseudoscalar_bitmap;
        dual_bitmaps.push(dual_bitmap);
        dual_signs.push(S::from_i64(canonical_sign(bitmap, dual_bitmap) as i64));
    }

    let zero_indices: Vec<usize> = (0..dim).filter(|&i| metric_diagonal[i].is_zero()).collect();

    let ops = OpTable::build();

    let mut algebra = Ga {
        dim,
        metric,
        metric_diagonal,
        prefix: params.prefix,
        base: params.base,
        basis_labels,
        basis_in_order,
        basis_by_grade,
        dual_bitmaps,
        dual_signs,
        pseudoscalar_bitmap,
        zero_indices,
        eigenvalues: None,
        eigenvectors: None,
        metric_mvs: None,
        ops,
    };

    if let (Some(mm), Some(mmga)) = (params.mm, params.mmga) {
        let (values, vectors) = crate::linalg::eigen::eigendecompose(&mmga, &mm)
            .map_err(|e| GaBuildError::new(format!("eigendecomposition failed: {e}")))?;
        algebra.metric_mvs = Some(mm);
        algebra.eigenvalues = Some(values);
        algebra.eigenvectors = Some(vectors);
    }

    Ok(algebra)
}
