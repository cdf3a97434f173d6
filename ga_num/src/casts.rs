/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */

/// Lossy conversion to `f64`, used wherever an eigenroutine or `exp`
/// needs to fall back to floating point regardless of the exact scalar
/// type the algebra was built over.
pub trait ToF64 {
    fn to_f64(&self) -> f64;
}

/// Conversion from `f64`, used to seed exact scalar types from a literal.
pub trait FromF64 {
    fn from_f64(v: f64) -> Self;
}

/// Conversion from a small signed integer, used by the basis generator
/// and Taylor-series term counters.
pub trait FromI64 {
    fn from_i64(v: i64) -> Self;
}

macro_rules! impl_casts_float {
    ($($t:ty),*) => {
        $(
            impl ToF64 for $t {
                fn to_f64(&self) -> f64 { *self as f64 }
            }
            impl FromF64 for $t {
                fn from_f64(v: f64) -> Self { v as $t }
            }
            impl FromI64 for $t {
                fn from_i64(v: i64) -> Self { v as $t }
            }
        )*
    };
}

impl_casts_float!(f32, f64);
