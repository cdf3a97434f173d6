/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::types::blade::Blade;
use ga_num::Scalar;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A sum of blades. Canonical form (after [`Multivector::simplify`]) has
/// bitmaps strictly increasing, at most one blade per bitmap, and no
/// zero-scale blade; intermediate products may be non-canonical.
#[derive(Debug, Clone)]
pub struct Multivector<S: Scalar>(Vec<Blade<S>>);

impl<S: Scalar> Multivector<S> {
    pub fn new(blades: Vec<Blade<S>>) -> Self {
        Multivector(blades)
    }

    pub fn empty() -> Self {
        Multivector(Vec::new())
    }

    pub fn scalar(value: S) -> Self {
        if value.is_zero() {
            Multivector(Vec::new())
        } else {
            Multivector(vec![Blade::scalar(value)])
        }
    }

    pub fn from_blade(blade: Blade<S>) -> Self {
        if blade.is_zero() {
            Multivector(Vec::new())
        } else {
            Multivector(vec![blade])
        }
    }

    pub fn blades(&self) -> &[Blade<S>] {
        &self.0
    }

    pub fn into_blades(self) -> Vec<Blade<S>> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scalar (grade-0) component, `zero` if none is present.
    pub fn scalar_part(&self) -> S {
        self.0
            .iter()
            .find(|b| b.bitmap() == 0)
            .map(|b| b.scale())
            .unwrap_or_else(S::zero)
    }

    pub fn grade_projection(&self, k: u32) -> Self {
        Multivector(self.0.iter().filter(|b| b.grade() == k).copied().collect())
    }

    /// Highest grade present among this multivector's blades, `0` for an
    /// empty (additive-identity) multivector.
    pub fn max_grade(&self) -> u32 {
        self.0.iter().map(|b| b.grade()).max().unwrap_or(0)
    }

    /// Sort by bitmap and merge equal-bitmap runs, keeping zero-scale
    /// results (used where callers rely on positional grade
    /// slots, e.g. eigenvalue extraction).
    pub fn simplify0(self) -> Self {
        let mut blades = self.0;
        blades.sort_by_key(|b| b.bitmap());
        let mut out: Vec<Blade<S>> = Vec::with_capacity(blades.len());
        for b in blades {
            match out.last_mut() {
                Some(last) if last.bitmap() == b.bitmap() => {
                    *last = last.with_scale(last.scale() + b.scale());
                }
                _ => out.push(b),
            }
        }
        Multivector(out)
    }

    /// [`Multivector::simplify0`] followed by dropping zero-scale blades.
    pub fn simplify(self) -> Self {
        let Multivector(blades) = self.simplify0();
        Multivector(blades.into_iter().filter(|b| !b.is_zero()).collect())
    }
}

impl<S: Scalar> PartialEq for Multivector<S> {
    fn eq(&self, other: &Self) -> bool {
        self.clone().simplify().0 == other.clone().simplify().0
    }
}

impl<S: Scalar> Add for Multivector<S> {
    type Output = Multivector<S>;
    fn add(self, rhs: Self) -> Self::Output {
        let mut blades = self.0;
        blades.extend(rhs.0);
        Multivector(blades).simplify()
    }
}

impl<S: Scalar> Sub for Multivector<S> {
    type Output = Multivector<S>;
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<S: Scalar> Neg for Multivector<S> {
    type Output = Multivector<S>;
    fn neg(self) -> Self::Output {
        Multivector(self.0.into_iter().map(|b| b.negate()).collect())
    }
}

impl<S: Scalar> Mul<S> for Multivector<S> {
    type Output = Multivector<S>;
    fn mul(self, rhs: S) -> Self::Output {
        Multivector(self.0.into_iter().map(|b| b.with_scale(b.scale() * rhs)).collect()).simplify()
    }
}

impl<S: Scalar> Div<S> for Multivector<S> {
    type Output = Multivector<S>;
    fn div(self, rhs: S) -> Self::Output {
        Multivector(self.0.into_iter().map(|b| b.with_scale(b.scale() / rhs)).collect()).simplify()
    }
}

impl<S: Scalar> fmt::Display for Multivector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "0");
        }
        let parts: Vec<String> = self.0.iter().map(|b| b.to_string()).collect();
        write!(f, "{}", parts.join(" + "))
    }
}
