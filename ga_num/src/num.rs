/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::casts::{FromF64, FromI64, ToF64};
use crate::float::FloatLike;
use crate::identity::{One, Zero};
use crate::ops::{NumOps, Signed};
use std::fmt;

/// The arithmetic bundle every blade/multivector coefficient type needs.
pub trait Num: Zero + One + NumOps + Copy + Clone + PartialEq + fmt::Debug {}
impl<T> Num for T where T: Zero + One + NumOps + Copy + Clone + PartialEq + fmt::Debug {}

/// The scalar type `ga_core` is generic over: exact rationals for
/// symbolic work, `f32`/`f64` where `length`, `exp` and the eigenroutines
/// need floating point (DESIGN NOTES 9).
pub trait Scalar: Num + FloatLike + Signed + ToF64 + FromF64 + FromI64 + fmt::Display {}
impl<T> Scalar for T where T: Num + FloatLike + Signed + ToF64 + FromF64 + FromI64 + fmt::Display {}
