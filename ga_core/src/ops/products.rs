/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::types::algebra::Ga;
use crate::types::blade::{canonical_sign, Blade};
use crate::types::multivector::Multivector;
use ga_num::Scalar;

/// Geometric product of two basis blades, metric-independent case:
/// operand bitmaps are disjoint, so the result carries only the
/// canonical-order sign.
fn blade_product_independent<S: Scalar>(a: Blade<S>, b: Blade<S>) -> Blade<S> {
    let sign = canonical_sign(a.bitmap(), b.bitmap());
    Blade::new(a.bitmap() ^ b.bitmap(), a.scale() * b.scale() * S::from_i64(sign as i64))
}

/// Geometric product of two basis blades sharing basis vectors: the
/// canonical-order sign is additionally weighted by the metric entry of
/// every shared bit; a zero metric entry annihilates the whole term.
fn blade_product_dependent<S: Scalar>(ga: &Ga<S>, a: Blade<S>, b: Blade<S>) -> Blade<S> {
    let sign = canonical_sign(a.bitmap(), b.bitmap());
    let mut scale = a.scale() * b.scale() * S::from_i64(sign as i64);
    let shared = a.bitmap() & b.bitmap();
    for i in 0..ga.dim() {
        if shared & (1 << i) != 0 {
            scale = scale * ga.metric_entry(i);
        }
    }
    Blade::new(a.bitmap() ^ b.bitmap(), scale)
}

/// Geometric product of two blades, routing to the independent or
/// dependent case by whether their bitmaps overlap.
pub fn blade_product<S: Scalar>(ga: &Ga<S>, a: Blade<S>, b: Blade<S>) -> Blade<S> {
    if a.bitmap() & b.bitmap() == 0 {
        blade_product_independent(a, b)
    } else {
        blade_product_dependent(ga, a, b)
    }
}

/// The full cartesian product of blade pairs from `a` and `b`, each run
/// through [`blade_product`], unsimplified.
fn raw_product<S: Scalar>(ga: &Ga<S>, a: &Multivector<S>, b: &Multivector<S>) -> Vec<Blade<S>> {
    let mut terms = Vec::with_capacity(a.blades().len() * b.blades().len());
    for &ba in a.blades() {
        for &bb in b.blades() {
            terms.push(blade_product(ga, ba, bb));
        }
    }
    terms
}

/// Geometric product `*`: cartesian product of blade pairs, simplified.
pub fn geometric_product<S: Scalar>(ga: &Ga<S>, a: &Multivector<S>, b: &Multivector<S>) -> Multivector<S> {
    Multivector::new(raw_product(ga, a, b)).simplify()
}

fn grade_diff(a: u32, b: u32) -> i64 {
    a as i64 - b as i64
}

/// Exterior (wedge) component of the interior/exterior split: terms
/// where the product grade equals the sum of operand grades.
pub fn wedge<S: Scalar>(ga: &Ga<S>, a: &Multivector<S>, b: &Multivector<S>) -> Multivector<S> {
    let mut terms = Vec::new();
    for &ba in a.blades() {
        for &bb in b.blades() {
            let prod = blade_product(ga, ba, bb);
            if prod.grade() == ba.grade() + bb.grade() {
                terms.push(prod);
            }
        }
    }
    Multivector::new(terms).simplify()
}

/// Interior component of the interior/exterior split: left-contraction
/// grade law, `grade(ab) == grade(b) - grade(a)`.
pub fn interior<S: Scalar>(ga: &Ga<S>, a: &Multivector<S>, b: &Multivector<S>) -> Multivector<S> {
    left_contraction(ga, a, b)
}

/// Left contraction `⌋`: keep triples with `grade(ab) == grade(b) - grade(a)`.
pub fn left_contraction<S: Scalar>(ga: &Ga<S>, a: &Multivector<S>, b: &Multivector<S>) -> Multivector<S> {
    let mut terms = Vec::new();
    for &ba in a.blades() {
        for &bb in b.blades() {
            let prod = blade_product(ga, ba, bb);
            if prod.grade() as i64 == grade_diff(bb.grade(), ba.grade()) {
                terms.push(prod);
            }
        }
    }
    Multivector::new(terms).simplify()
}

/// Right contraction `⌊`: keep triples with `grade(ab) == grade(a) - grade(b)`.
pub fn right_contraction<S: Scalar>(ga: &Ga<S>, a: &Multivector<S>, b: &Multivector<S>) -> Multivector<S> {
    let mut terms = Vec::new();
    for &ba in a.blades() {
        for &bb in b.blades() {
            let prod = blade_product(ga, ba, bb);
            if prod.grade() as i64 == grade_diff(ba.grade(), bb.grade()) {
                terms.push(prod);
            }
        }
    }
    Multivector::new(terms).simplify()
}

/// Symmetric inner product `⌋•`: keep triples with
/// `grade(ab) == |grade(b) - grade(a)|`, restricted to non-scalar
/// factors on both sides.
pub fn symmetric_inner<S: Scalar>(ga: &Ga<S>, a: &Multivector<S>, b: &Multivector<S>) -> Multivector<S> {
    let mut terms = Vec::new();
    for &ba in a.blades() {
        if ba.grade() == 0 {
            continue;
        }
        for &bb in b.blades() {
            if bb.grade() == 0 {
                continue;
            }
            let prod = blade_product(ga, ba, bb);
            let want = grade_diff(bb.grade(), ba.grade()).unsigned_abs() as u32;
            if prod.grade() == want {
                terms.push(prod);
            }
        }
    }
    Multivector::new(terms).simplify()
}
