/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use ga_core::linalg::qr::householder_qr;
use ga_core::{ga, multivector, GaParams};

pub fn main() {
    let algebra = ga(GaParams::<f64>::new(3, 0, 0)).expect("a Euclidean 3D algebra is always well-formed");

    let columns = vec![
        multivector(&algebra, &[(1.0, "e0"), (1.0, "e1")]).unwrap(),
        multivector(&algebra, &[(1.0, "e1"), (1.0, "e2")]).unwrap(),
        multivector(&algebra, &[(1.0, "e0"), (1.0, "e2")]).unwrap(),
    ];

    let result = householder_qr(&algebra, &columns).expect("these three columns span the algebra");

    println!("Q:");
    for (i, q) in result.q.iter().enumerate() {
        println!("  q{i} = {q}");
    }
    println!("R:");
    for (i, r) in result.r.iter().enumerate() {
        println!("  r{i} = {r}");
    }
}
