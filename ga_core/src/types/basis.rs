/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::types::blade::Blade;
use ga_num::Scalar;

/// Label for the basis blade spanning `indices` (ascending, 0-based
/// within the algebra, offset by `base` for display). The scalar blade
/// is labeled `{prefix}_`.
pub fn basis_label(prefix: &str, base: usize, indices: &[usize]) -> String {
    if indices.is_empty() {
        return format!("{prefix}_");
    }
    let mut label = prefix.to_string();
    for &i in indices {
        label.push_str(&(i + base).to_string());
    }
    label
}

fn bitmap_indices(bitmap: u64, dim: usize) -> Vec<usize> {
    (0..dim).filter(|&i| bitmap & (1 << i) != 0).collect()
}

/// All `2^dim` basis blades in bitmap order (`basis-in-order`),
/// each carrying a unit scale.
pub fn generate_basis<S: Scalar>(dim: usize) -> Vec<Blade<S>> {
    (0..(1u64 << dim)).map(|bitmap| Blade::new(bitmap, S::one())).collect()
}

/// `basis-by-bitmap`: dense array of length `2^dim` mapping bitmap to
/// display label.
pub fn basis_labels(prefix: &str, base: usize, dim: usize) -> Vec<String> {
    (0..(1u64 << dim))
        .map(|bitmap| basis_label(prefix, base, &bitmap_indices(bitmap, dim)))
        .collect()
}

/// `basis-by-grade`: the basis blades stable-sorted by `(grade, bitmap)`.
pub fn basis_by_grade<S: Scalar>(blades: &[Blade<S>]) -> Vec<Blade<S>> {
    let mut out = blades.to_vec();
    out.sort_by_key(|b| (b.grade(), b.bitmap()));
    out
}
