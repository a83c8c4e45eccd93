// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! The two efficiently computable endomorphisms \\(\psi\\) and
//! \\(\phi\\) of the curve.
//!
//! Both act on the conjugated affine coordinates as odd rational maps
//! $$ (x, y) \mapsto \left( \bar x \frac{F(\bar y)}{G(\bar y)},
//!                          \frac{H(\bar y)}{K(\bar y)} \right), $$
//! with fixed coefficient tables over \\(\mathbb{F}\_{p^2}\\).  On the
//! prime-order subgroup they act as multiplication by the eigenvalues
//! \\(\lambda\_\psi\\) and \\(\lambda\_\phi\\), which is what makes the
//! four-dimensional scalar decomposition work.
//!
//! The evaluation is projective: numerators and denominators are
//! homogenized with \\(\bar Z\\) and assembled directly into extended
//! coordinates, so no field inversion is performed.

#![allow(non_snake_case)]

use crate::constants;
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;

/// Evaluate the homogenization \\(\sum\_j c\_j Y^j Z^{n-1-j}\\) of a
/// degree-\\(n-1\\) coefficient table.
fn eval_homogeneous(coeffs: &[FieldElement], Y: &FieldElement, Z: &FieldElement) -> FieldElement {
    let n = coeffs.len();
    let mut acc = coeffs[n - 1];
    let mut z_power = FieldElement::ONE;
    for j in (0..n - 1).rev() {
        z_power = &z_power * Z;
        acc = &(&acc * Y) + &(&coeffs[j] * &z_power);
    }
    acc
}

impl EdwardsPoint {
    /// Apply the degree-8 endomorphism \\(\psi\\), with
    /// \\(\lambda\_\psi^2 \equiv 8 \pmod N\\).
    pub(crate) fn psi(&self) -> EdwardsPoint {
        self.twisted_map(
            &constants::PSI_X_NUM,
            &constants::PSI_X_DEN,
            &constants::PSI_Y_NUM,
            &constants::PSI_Y_DEN,
        )
    }

    /// Apply the degree-7 endomorphism \\(\phi\\), with
    /// \\(\lambda\_\phi^2 \equiv -3 + 2\sqrt{-10} \pmod N\\).
    pub(crate) fn phi(&self) -> EdwardsPoint {
        self.twisted_map(
            &constants::PHI_X_NUM,
            &constants::PHI_X_DEN,
            &constants::PHI_Y_NUM,
            &constants::PHI_Y_DEN,
        )
    }

    /// Evaluate a twisted endomorphism given as rational maps on the
    /// conjugated coordinates, producing extended coordinates without
    /// an inversion.
    fn twisted_map(
        &self,
        x_num: &[FieldElement],
        x_den: &[FieldElement],
        y_num: &[FieldElement],
        y_den: &[FieldElement],
    ) -> EdwardsPoint {
        let X = self.X.conjugate();
        let Y = self.Y.conjugate();
        let Z = self.Z.conjugate();

        // x' = (X/Z) F(Y,Z)/G(Y,Z), y' = H(Y,Z)/K(Y,Z)
        let U = &X * &eval_homogeneous(x_num, &Y, &Z);
        let V = &Z * &eval_homogeneous(x_den, &Y, &Z);
        let S = eval_homogeneous(y_num, &Y, &Z);
        let W = eval_homogeneous(y_den, &Y, &Z);

        EdwardsPoint {
            X: &U * &W,
            Y: &S * &V,
            Z: &V * &W,
            T: &U * &S,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::GENERATOR;
    use crate::field::BaseFieldElement;
    use crate::traits::ValidityCheck;

    /// psi(G), computed with an independent implementation.
    fn psi_g() -> (FieldElement, FieldElement) {
        (
            FieldElement {
                a: BaseFieldElement([0x6e67ac610e23cdc9, 0x645da662e07c1665]),
                b: BaseFieldElement([0x1f07d76af3a4f0e4, 0x0ee5cfde2595d9e4]),
            },
            FieldElement {
                a: BaseFieldElement([0x5d66e27feb68a46e, 0x3a5c962bbfd60cf4]),
                b: BaseFieldElement([0xd77da01246c08d80, 0x05545dfcf2d05eed]),
            },
        )
    }

    /// phi(G), computed with an independent implementation.
    fn phi_g() -> (FieldElement, FieldElement) {
        (
            FieldElement {
                a: BaseFieldElement([0xaca8b8ca318aa4d2, 0x75722941399baa0f]),
                b: BaseFieldElement([0x610d5ae2ad9f6bd1, 0x072ea43d9a670335]),
            },
            FieldElement {
                a: BaseFieldElement([0x902a352a7f9cd2cd, 0x13a7e2ed4d9fbc81]),
                b: BaseFieldElement([0xed7c5a9f275d4c09, 0x17a69bc5335d9baf]),
            },
        )
    }

    /// psi(phi(G)), computed with an independent implementation.
    fn psi_phi_g() -> (FieldElement, FieldElement) {
        (
            FieldElement {
                a: BaseFieldElement([0x5b0e02eabaa1a062, 0x4bd884d081f27ab0]),
                b: BaseFieldElement([0x07c92a309d0487cc, 0x010279ad16b34a74]),
            },
            FieldElement {
                a: BaseFieldElement([0xfb1e7bc141a90271, 0x544e0d5bf6545f30]),
                b: BaseFieldElement([0xf2c7e8e81b6d020b, 0x4eb465d4281430bb]),
            },
        )
    }

    #[test]
    fn psi_of_generator_matches() {
        let q = GENERATOR.psi();
        assert!(q.is_valid());
        let (x, y) = psi_g();
        assert_eq!(q.to_affine(), (x, y));
    }

    #[test]
    fn phi_of_generator_matches() {
        let q = GENERATOR.phi();
        assert!(q.is_valid());
        let (x, y) = phi_g();
        assert_eq!(q.to_affine(), (x, y));
    }

    #[test]
    fn composition_matches() {
        let q = GENERATOR.phi().psi();
        assert!(q.is_valid());
        let (x, y) = psi_phi_g();
        assert_eq!(q.to_affine(), (x, y));
    }

    #[test]
    fn endomorphisms_act_as_their_eigenvalues() {
        use crate::scalar::UnpackedScalar;

        let lambda_psi = UnpackedScalar(constants::LAMBDA_PSI).pack();
        let lambda_phi = UnpackedScalar(constants::LAMBDA_PHI).pack();
        let lambda_psi_phi = UnpackedScalar(constants::LAMBDA_PSI_PHI).pack();

        assert_eq!(GENERATOR.psi(), &GENERATOR * &lambda_psi);
        assert_eq!(GENERATOR.phi(), &GENERATOR * &lambda_phi);
        assert_eq!(GENERATOR.phi().psi(), &GENERATOR * &lambda_psi_phi);
    }

    #[test]
    fn endomorphisms_are_homomorphic() {
        let g2 = GENERATOR.double();
        let g3 = &g2 + &GENERATOR;
        assert_eq!((&g2 + &GENERATOR).psi(), &g2.psi() + &GENERATOR.psi());
        assert_eq!(g3.phi(), &g2.phi() + &GENERATOR.phi());
    }
}
