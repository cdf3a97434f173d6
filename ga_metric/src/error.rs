/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use std::error::Error;
use std::fmt;

/// Errors raised while constructing or converting between [`crate::Metric`]
/// representations.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricError {
    SignConventionMismatch(String),
    InvalidDimension(String),
    ValidationFailed(String),
    ConversionError(String),
}

impl MetricError {
    pub fn sign_convention_mismatch(msg: impl Into<String>) -> Self {
        MetricError::SignConventionMismatch(msg.into())
    }

    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        MetricError::InvalidDimension(msg.into())
    }

    pub fn validation_failed(msg: impl Into<String>) -> Self {
        MetricError::ValidationFailed(msg.into())
    }

    pub fn conversion_error(msg: impl Into<String>) -> Self {
        MetricError::ConversionError(msg.into())
    }
}

impl Error for MetricError {}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricError::SignConventionMismatch(m) => write!(f, "Sign convention mismatch: {m}"),
            MetricError::InvalidDimension(m) => write!(f, "Invalid dimension: {m}"),
            MetricError::ValidationFailed(m) => write!(f, "validation failed: {m}"),
            MetricError::ConversionError(m) => write!(f, "Conversion error: {m}"),
        }
    }
}
