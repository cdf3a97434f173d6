/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::errors::NonInvertibleError;
use crate::ops::products::{geometric_product, wedge};
use crate::types::algebra::Ga;
use crate::types::blade::Blade;
use crate::types::multivector::Multivector;
use ga_num::{rsqrt, Scalar};

const TAYLOR_TERMS: u64 = 16;
const RSQRT_STEPS: u32 = 16;

/// `<-mv`: reverses the wedge order of every blade, sign `(-1)^{k(k-1)/2}`.
pub fn reverse<S: Scalar>(mv: &Multivector<S>) -> Multivector<S> {
    let blades: Vec<Blade<S>> = mv
        .blades()
        .iter()
        .map(|b| b.with_scale(b.scale() * S::from_i64(Blade::<S>::reverse_sign(b.grade()) as i64)))
        .collect();
    Multivector::new(blades)
}

/// Grade involution `_`: each blade's scale multiplied by `(-1)^k`.
pub fn grade_involution<S: Scalar>(mv: &Multivector<S>) -> Multivector<S> {
    let blades: Vec<Blade<S>> = mv
        .blades()
        .iter()
        .map(|b| {
            let sign = if b.grade() % 2 == 0 { 1 } else { -1 };
            b.with_scale(b.scale() * S::from_i64(sign))
        })
        .collect();
    Multivector::new(blades)
}

/// Dual `~`: maps each blade to `duals[b]`, signed so `b ∧ ~b == I`.
pub fn dual<S: Scalar>(ga: &Ga<S>, mv: &Multivector<S>) -> Multivector<S> {
    let blades: Vec<Blade<S>> = mv
        .blades()
        .iter()
        .map(|b| Blade::new(ga.dual_bitmap(b.bitmap()), b.scale() * ga.dual_sign(b.bitmap())))
        .collect();
    Multivector::new(blades).simplify()
}

/// Hodge dual `★`: `<-mv · I`.
pub fn hodge_dual<S: Scalar>(ga: &Ga<S>, mv: &Multivector<S>) -> Multivector<S> {
    geometric_product(ga, &reverse(mv), &ga.pseudoscalar())
}

/// Meet: the exterior component of the interior/exterior split,
/// equivalent to [`wedge`].
pub fn meet<S: Scalar>(ga: &Ga<S>, a: &Multivector<S>, b: &Multivector<S>) -> Multivector<S> {
    wedge(ga, a, b)
}

/// Join `∨(a,b) = ~( ~b ∧ ~a )`.
pub fn join<S: Scalar>(ga: &Ga<S>, a: &Multivector<S>, b: &Multivector<S>) -> Multivector<S> {
    let dual_b = dual(ga, b);
    let dual_a = dual(ga, a);
    dual(ga, &wedge(ga, &dual_b, &dual_a))
}

/// `n`-ary join fold, left to right; sign is inverted when `n` is even
/// (orientation convention decided in DESIGN.md).
pub fn join_n<S: Scalar>(ga: &Ga<S>, mvs: &[Multivector<S>]) -> Multivector<S> {
    let mut result = mvs[0].clone();
    for mv in &mvs[1..] {
        result = join(ga, &result, mv);
    }
    if mvs.len() % 2 == 0 {
        result = -result;
    }
    result
}

/// Sandwich product `⍣(r, x) = <-r · x · r`.
pub fn sandwich<S: Scalar>(ga: &Ga<S>, r: &Multivector<S>, x: &Multivector<S>) -> Multivector<S> {
    let step = geometric_product(ga, &reverse(r), x);
    geometric_product(ga, &step, r)
}

/// `(mv · mv).scalar`.
pub fn norm_squared<S: Scalar>(ga: &Ga<S>, mv: &Multivector<S>) -> S {
    geometric_product(ga, mv, mv).scalar_part()
}

/// `sqrt(norm_squared(mv))` via [`rsqrt`] truncated at 16 steps; `0` for
/// an empty multivector.
pub fn length<S: Scalar>(ga: &Ga<S>, mv: &Multivector<S>) -> S {
    if mv.is_empty() {
        return S::zero();
    }
    rsqrt(norm_squared(ga, mv), RSQRT_STEPS)
}

/// Scales by `1/length`; an empty multivector passes through unchanged.
pub fn normalize<S: Scalar>(ga: &Ga<S>, mv: &Multivector<S>) -> Multivector<S> {
    if mv.is_empty() {
        return mv.clone();
    }
    mv.clone() / length(ga, mv)
}

/// `<-mv / (mv · <-mv).scalar`; fails with [`NonInvertibleError`] when
/// that scalar is zero.
pub fn inverse<S: Scalar>(ga: &Ga<S>, mv: &Multivector<S>) -> Result<Multivector<S>, NonInvertibleError> {
    let rev = reverse(mv);
    let denom = geometric_product(ga, mv, &rev).scalar_part();
    if denom.is_zero() {
        return Err(NonInvertibleError::new(mv));
    }
    Ok(rev / denom)
}

/// Exponential via rescale-and-repeated-squaring:
/// 1. `max = (mv · <-mv).scalar`.
/// 2. pick `scale = 2^k` so `|max| / scale <= 1`.
/// 3. sum the first 16 Taylor terms of `exp(mv / scale)`.
/// 4. square the partial result `k` times to undo the rescale.
pub fn exponential<S: Scalar>(ga: &Ga<S>, mv: &Multivector<S>) -> Multivector<S> {
    let max = geometric_product(ga, mv, &reverse(mv)).scalar_part();
    let amax = max.abs().to_f64();
    let k = if amax <= 1.0 { 0u32 } else { amax.log2().ceil() as u32 };
    let rescale = S::from_f64(2f64.powi(k as i32));
    let scaled = mv.clone() / rescale;

    let mut sum = Multivector::scalar(S::one());
    let mut power = Multivector::scalar(S::one());
    let mut factorial = S::one();
    for i in 1..TAYLOR_TERMS {
        power = geometric_product(ga, &power, &scaled);
        factorial = factorial * S::from_i64(i as i64);
        sum = sum + (power.clone() / factorial);
    }

    let mut result = sum;
    for _ in 0..k {
        result = geometric_product(ga, &result, &result);
    }
    result
}
