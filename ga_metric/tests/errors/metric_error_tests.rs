/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use ga_metric::MetricError;

#[test]
fn test_sign_convention_mismatch_display() {
    let e = MetricError::sign_convention_mismatch("expected time_sign 1, found -1");
    assert_eq!(
        format!("{e}"),
        "Sign convention mismatch: expected time_sign 1, found -1"
    );
}

#[test]
fn test_invalid_dimension_display() {
    let e = MetricError::invalid_dimension("dimension must be in 2..=64, found 0");
    assert_eq!(
        format!("{e}"),
        "Invalid dimension: dimension must be in 2..=64, found 0"
    );
}

#[test]
fn test_validation_failed_display() {
    let e = MetricError::validation_failed("signature mismatch");
    assert_eq!(format!("{e}"), "validation failed: signature mismatch");
}

#[test]
fn test_conversion_error_display() {
    let e = MetricError::conversion_error("cannot convert degenerate metric");
    assert_eq!(
        format!("{e}"),
        "Conversion error: cannot convert degenerate metric"
    );
}

#[test]
fn test_metric_error_eq() {
    let a = MetricError::invalid_dimension("x");
    let b = MetricError::invalid_dimension("x");
    let c = MetricError::invalid_dimension("y");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_metric_error_is_std_error() {
    fn assert_std_error<E: std::error::Error>(_: &E) {}
    let e = MetricError::validation_failed("boom");
    assert_std_error(&e);
}
