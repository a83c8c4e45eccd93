// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! Constant-time lookup tables for scalar multiplication.

#![allow(non_snake_case)]

use core::fmt::Debug;

use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::curve_models::ProjectiveNielsPoint;
use crate::edwards::EdwardsPoint;

/// An eight-entry lookup table holding the combinations
/// \\(P + u\_0\psi(P) + u\_1\phi(P) + u\_2\psi\phi(P)\\) for
/// \\(u = u\_0 + 2u\_1 + 4u\_2 \in \\{0, \dots, 7\\}\\).
///
/// Lookups by `select` run in constant time; the recoded digit sign is
/// applied by the caller via `conditional_negate`.
#[derive(Copy, Clone)]
pub(crate) struct LookupTable<T>(pub(crate) [T; 8]);

impl<T: ConditionallySelectable> LookupTable<T> {
    /// Given \\(u \in \\{0, \dots, 7\\}\\), return the table entry for
    /// \\(u\\) in constant time.
    pub(crate) fn select(&self, index: u8) -> T {
        debug_assert!(index < 8);

        let mut t = self.0[0];
        for j in 1..8 {
            let c = (j as u8).ct_eq(&index);
            t = T::conditional_select(&t, &self.0[j], c);
        }
        t
    }
}

impl<T: Debug> Debug for LookupTable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LookupTable({:?})", &self.0)
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable<ProjectiveNielsPoint> {
    fn from(P: &'a EdwardsPoint) -> Self {
        let psi_P = P.psi();
        let phi_P = P.phi();
        let psi_phi_P = phi_P.psi();

        let mut points = [*P; 8];
        points[1] = (&points[0] + &psi_P.to_projective_niels()).as_extended();
        points[2] = (&points[0] + &phi_P.to_projective_niels()).as_extended();
        points[3] = (&points[1] + &phi_P.to_projective_niels()).as_extended();
        let psi_phi_cached = psi_phi_P.to_projective_niels();
        points[4] = (&points[0] + &psi_phi_cached).as_extended();
        points[5] = (&points[1] + &psi_phi_cached).as_extended();
        points[6] = (&points[2] + &psi_phi_cached).as_extended();
        points[7] = (&points[3] + &psi_phi_cached).as_extended();

        LookupTable(points.map(|P| P.to_projective_niels()))
    }
}
