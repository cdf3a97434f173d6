/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::errors::GaError;
use crate::linalg::qr::householder_qr;
use crate::types::algebra::Ga;
use crate::types::multivector::Multivector;
use ga_num::Scalar;

/// Single-shot QR eigendecomposition: eigenvalues are the
/// diagonal entries of `R` (entry `i` is the `i`-th blade of the `i`-th
/// column), eigenvectors are `Q`. Correct for metric multivectors that
/// triangularize after one Householder pass; this is a deliberate
/// implementation choice, not a general iterative eigensolver (see
/// `DESIGN.md` for the reasoning).
pub fn eigendecompose<S: Scalar>(mmga: &Ga<S>, metric_mvs: &[Multivector<S>]) -> Result<(Vec<S>, Vec<Multivector<S>>), GaError> {
    let qr = householder_qr(mmga, metric_mvs)?;
    let eigenvalues: Vec<S> = qr
        .r
        .iter()
        .enumerate()
        .map(|(i, column)| {
            column
                .blades()
                .iter()
                .find(|b| b.bitmap() == (1u64 << i))
                .map(|b| b.scale())
                .unwrap_or_else(S::zero)
        })
        .collect();
    Ok((eigenvalues, qr.q))
}
