// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! Constant-time fixed-base scalar multiplication using the
//! precomputed generator table.

#![allow(non_snake_case)]

use subtle::Choice;
use subtle::ConditionallyNegatable;

use crate::constants;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::scalar_mul::recode;
use crate::traits::Identity;

/// Compute \\(sG\\) for the subgroup generator \\(G\\).
pub(crate) fn mul(scalar: &Scalar) -> EdwardsPoint {
    let lookup_table = &constants::BASEPOINT_TABLE;

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
