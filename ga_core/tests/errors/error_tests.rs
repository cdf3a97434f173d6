/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use ga_core::{GaBuildError, GaError, NoSuchOpError, NonInvertibleError};

#[test]
fn test_ga_build_error_display() {
    let err = GaBuildError::new("needs at least one basis vector");
    assert_eq!(err.to_string(), "GaBuildError: needs at least one basis vector");
}

#[test]
fn test_no_such_op_error_display() {
    let err = NoSuchOpError::new("Geometric", "1 operand(s)");
    assert_eq!(err.to_string(), "NoSuchOp: no handler for `Geometric` over 1 operand(s)");
}

#[test]
fn test_non_invertible_error_display() {
    let err = NonInvertibleError::new("null vector");
    assert_eq!(err.to_string(), "NonInvertible: \"null vector\"");
}

#[test]
fn test_ga_error_from_conversions_preserve_display() {
    let build: GaError = GaBuildError::new("bad params").into();
    assert_eq!(build.to_string(), "GaBuildError: bad params");

    let no_such_op: GaError = NoSuchOpError::new("Wedge", "0 operand(s)").into();
    assert_eq!(no_such_op.to_string(), "NoSuchOp: no handler for `Wedge` over 0 operand(s)");

    let non_invertible: GaError = NonInvertibleError::new("zero norm").into();
    assert_eq!(non_invertible.to_string(), "NonInvertible: \"zero norm\"");
}

#[test]
fn test_ga_error_variants_are_distinguishable() {
    let a: GaError = GaBuildError::new("x").into();
    let b: GaError = NoSuchOpError::new("x", "y").into();
    assert_ne!(a, b);
}

#[test]
fn test_errors_implement_clone_and_equality() {
    let a = GaBuildError::new("same message");
    let b = a.clone();
    assert_eq!(a, b);
}
