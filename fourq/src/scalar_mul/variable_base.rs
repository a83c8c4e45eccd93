// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! Constant-time variable-base scalar multiplication.

#![allow(non_snake_case)]

use subtle::Choice;
use subtle::ConditionallyNegatable;

use crate::curve_models::ProjectiveNielsPoint;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::scalar_mul::recode;
use crate::traits::Identity;
use crate::window::LookupTable;

/// Perform constant-time, variable-base scalar multiplication.
pub(crate) fn mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    // entry u of the table is P + u0 psi(P) + u1 phi(P) + u2 psi(phi(P))
    let lookup_table = LookupTable::<ProjectiveNielsPoint>::from(point);

    let a = scalar.decompose();
    let (signs, digits) = recode(&a);

    let mut t = lookup_table.select(digits[64]);
    t.conditional_negate(Choice::from(signs[64]));
    let mut Q = (&EdwardsPoint::identity() + &t).as_extended();

    for i in (0..64).rev() {
        let mut t = lookup_table.select(digits[i]);
        t.conditional_negate(Choice::from(signs[i]));
        Q = (&Q.double() + &t).as_extended();
    }
    Q
}
