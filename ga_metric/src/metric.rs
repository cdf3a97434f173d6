/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::error::MetricError;
use std::fmt;

/// A Clifford algebra signature: a diagonal metric of length `dimension()`
/// with entries in `{+1, -1, 0}`.
///
/// The named variants (`Euclidean`, `Minkowski`, `PGA`, ...) are the
/// common cases callers reach for by name; `Generic`/`Custom` cover
/// everything else, including metrics whose signs don't fall into a
/// contiguous `(p, q, r)` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// All `dim` basis vectors square to `+1`.
    Euclidean(usize),
    /// All `dim` basis vectors square to `-1`.
    NonEuclidean(usize),
    /// West Coast Minkowski: `e0^2 = +1`, the rest square to `-1`.
    Minkowski(usize),
    /// Projective (degenerate) geometric algebra: `e0^2 = 0`, the rest `+1`.
    PGA(usize),
    /// `p` positive, `q` negative, `r` zero basis vectors, in that block order.
    Generic { p: usize, q: usize, r: usize },
    /// Explicit per-bit sign assignment over `dim` basis vectors.
    Custom {
        dim: usize,
        neg_mask: u64,
        zero_mask: u64,
    },
}

impl Metric {
    pub fn dimension(&self) -> usize {
        match self {
            Metric::Euclidean(d) | Metric::NonEuclidean(d) | Metric::Minkowski(d) | Metric::PGA(d) => *d,
            Metric::Generic { p, q, r } => p + q + r,
            Metric::Custom { dim, .. } => *dim,
        }
    }

    /// The sign of `e_i . e_i` for basis vector index `i`.
    pub fn sign_of_sq(&self, i: usize) -> i32 {
        match self {
            Metric::Euclidean(_) => 1,
            Metric::NonEuclidean(_) => -1,
            Metric::Minkowski(_) => {
                if i == 0 {
                    1
                } else {
                    -1
                }
            }
            Metric::PGA(_) => {
                if i == 0 {
                    0
                } else {
                    1
                }
            }
            Metric::Generic { p, q, .. } => {
                if i < *p {
                    1
                } else if i < p + q {
                    -1
                } else {
                    0
                }
            }
            Metric::Custom {
                neg_mask, zero_mask, ..
            } => {
                let bit = 1u64 << i;
                if zero_mask & bit != 0 {
                    0
                } else if neg_mask & bit != 0 {
                    -1
                } else {
                    1
                }
            }
        }
    }

    /// Counts of positive, negative, and zero diagonal entries.
    pub fn signature(&self) -> (usize, usize, usize) {
        let mut sig = (0, 0, 0);
        for i in 0..self.dimension() {
            match self.sign_of_sq(i) {
                1 => sig.0 += 1,
                -1 => sig.1 += 1,
                _ => sig.2 += 1,
            }
        }
        sig
    }

    /// Negates every diagonal entry (zeros stay zero).
    pub fn flip_time_space(&self) -> Metric {
        let signs: Vec<i32> = (0..self.dimension()).map(|i| -self.sign_of_sq(i)).collect();
        Metric::from_signs(&signs).expect("flipping a valid metric's signs stays valid")
    }

    /// Concatenates two metrics' diagonals. Same-kind Euclidean/NonEuclidean
    /// pairs stay that kind; everything else collapses to `Generic`.
    pub fn tensor_product(&self, other: &Metric) -> Metric {
        match (self, other) {
            (Metric::Euclidean(a), Metric::Euclidean(b)) => Metric::Euclidean(a + b),
            (Metric::NonEuclidean(a), Metric::NonEuclidean(b)) => Metric::NonEuclidean(a + b),
            _ => {
                let (p1, q1, r1) = self.signature();
                let (p2, q2, r2) = other.signature();
                Metric::Generic {
                    p: p1 + p2,
                    q: q1 + q2,
                    r: r1 + r2,
                }
            }
        }
    }

    /// Two metrics describe the same algebra up to relabeling when their
    /// signatures match.
    pub fn is_compatible(&self, other: &Metric) -> bool {
        self.signature() == other.signature()
    }

    pub fn to_generic(&self) -> Metric {
        let (p, q, r) = self.signature();
        Metric::Generic { p, q, r }
    }

    /// Picks the most specific named variant for signature `(p, q, r)`,
    /// falling back to `Generic`.
    pub fn from_signature(p: usize, q: usize, r: usize) -> Metric {
        if q == 0 && r == 0 {
            Metric::Euclidean(p)
        } else if p == 0 && r == 0 {
            Metric::NonEuclidean(q)
        } else if p == 1 && r == 0 {
            Metric::Minkowski(p + q)
        } else if r == 1 && q == 0 {
            Metric::PGA(p + r)
        } else {
            Metric::Generic { p, q, r }
        }
    }

    /// Builds a `Custom` metric preserving the exact order of `signs`.
    pub fn from_signs(signs: &[i32]) -> Result<Metric, MetricError> {
        if signs.is_empty() {
            return Err(MetricError::invalid_dimension("signs must be non-empty"));
        }
        if signs.len() > 64 {
            return Err(MetricError::invalid_dimension("dimension exceeds 64-bit mask capacity"));
        }
        let mut neg_mask = 0u64;
        let mut zero_mask = 0u64;
        for (i, &s) in signs.iter().enumerate() {
            match s {
                1 => {}
                -1 => neg_mask |= 1 << i,
                0 => zero_mask |= 1 << i,
                other => {
                    return Err(MetricError::validation_failed(format!(
                        "sign must be +1, -1, or 0, found {other}"
                    )))
                }
            }
        }
        Ok(Metric::Custom {
            dim: signs.len(),
            neg_mask,
            zero_mask,
        })
    }

    pub fn to_signs(&self) -> Vec<i32> {
        (0..self.dimension()).map(|i| self.sign_of_sq(i)).collect()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Euclidean(d) => write!(f, "Euclidean({d})"),
            Metric::NonEuclidean(d) => write!(f, "NonEuclidean({d})"),
            Metric::Minkowski(d) => write!(f, "Minkowski({d})"),
            Metric::PGA(d) => write!(f, "PGA({d})"),
            Metric::Generic { p, q, r } => write!(f, "Cl({p}, {q}, {r})"),
            Metric::Custom { dim, .. } => write!(f, "Custom({dim})"),
        }
    }
}
