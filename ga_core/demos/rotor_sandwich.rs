/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use ga_core::{derived, ga, multivector, GaParams};
use std::f64::consts::PI;

pub fn main() {
    let algebra = ga(GaParams::<f64>::new(3, 0, 0)).expect("a Euclidean 3D algebra is always well-formed");

    // A rotor that turns the e1 axis a quarter-turn towards e2.
    let generator = multivector(&algebra, &[(-(PI / 4.0), "e12")]).unwrap();
    let rotor = derived::exponential(&algebra, &generator);

    let v = multivector(&algebra, &[(1.0, "e1")]).unwrap();
    let rotated = derived::sandwich(&algebra, &rotor, &v);

    println!("rotor:   {rotor}");
    println!("v:       {v}");
    println!("R~ v R:  {rotated}");
    println!("|v|:     {:.6}", derived::length(&algebra, &v));
    println!("|RvR~|:  {:.6}", derived::length(&algebra, &rotated));
}
