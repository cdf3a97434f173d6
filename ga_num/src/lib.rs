/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
//! Scalar number traits for `ga_core`.
//!
//! `ga_core` never hard-codes `f64`: every blade and multivector carries
//! a coefficient type bounded by [`Scalar`], so the same algebra engine
//! runs over exact [`Rational`] arithmetic or native floats.

mod casts;
mod complex;
mod float;
mod identity;
mod num;
mod ops;
mod rational;

pub use casts::{FromF64, FromI64, ToF64};
pub use complex::Complex;
pub use float::{rsqrt, FloatLike};
pub use identity::{One, Zero};
pub use num::{Num, Scalar};
pub use ops::{NumOps, Signed};
pub use rational::Rational;
