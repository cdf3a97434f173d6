/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */

//! A bitmap-blade Clifford/Geometric Algebra engine.
//!
//! An [`algebra::Ga`] is built once from a signature via [`algebra::ga`]
//! and carries its basis tables, duals, and a precomputed operator
//! table; [`types::multivector::Multivector`] values flow through the
//! dispatcher in [`ops::dispatch`] to the primitive products
//! ([`ops::products`]) and derived operators ([`ops::derived`]).
//! [`linalg`] builds Householder QR and a single-shot eigendecomposition
//! directly out of sandwich products in the algebra itself.

pub mod errors;
pub mod linalg;
pub mod ops;
pub mod types;

pub use errors::{GaBuildError, GaError, NoSuchOpError, NonInvertibleError};
pub use ops::derived;
pub use ops::dispatch::{dispatch, Dependency, DispatchKey, GradeClass, Kind, OpKind, Operand};
pub use ops::products;
pub use types::algebra::{ga, Ga, GaParams, MetricBlock};
pub use types::basis;
pub use types::blade::{canonical_sign, flips, Blade};
pub use types::multivector::Multivector;
