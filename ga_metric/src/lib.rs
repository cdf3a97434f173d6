/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */

//! Metric signature types and sign conventions for Clifford algebras.
//!
//! [`Metric`] is the diagonal-metric building block `ga_core` builds an
//! algebra's bilinear form from; [`conventions`] carries the
//! East/West-Coast spacetime sign-convention machinery used when the
//! signature is explicitly Lorentzian.

mod conventions;
mod error;
mod metric;

pub use conventions::{detect_convention, east_to_west, is_lorentzian, west_to_east, EastCoastMetric, LorentzianMetric, WestCoastMetric};
pub use error::MetricError;
pub use metric::Metric;
