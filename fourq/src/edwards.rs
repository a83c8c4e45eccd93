// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! Group operations for the FourQ twisted Edwards curve
//! $$ -x^2 + y^2 = 1 + d x^2 y^2 $$
//! over \\(\mathbb{F}\_{p^2}\\), \\(p = 2^{127} - 1\\).
//!
//! ## Encoding and decoding
//!
//! A point is encoded in 32 bytes: the \\(y\\) coordinate as two
//! 16-byte little-endian field components, with the "sign" of the
//! \\(x\\) coordinate (the parity of its real part, or of its
//! imaginary part when the real part is zero) packed into the top bit
//! of the final byte.  Decoding rejects non-canonical field components
//! and encodings of points not on the curve.
//!
//! ## Scalar multiplication
//!
//! Scalar multiplication uses the curve's two endomorphisms to split a
//! scalar into four 64-bit sub-scalars, cutting the main loop to 65
//! iterations.  The decomposition is correct on the prime-order
//! subgroup; points decoded from untrusted data can be moved into the
//! subgroup with [`EdwardsPoint::mul_by_cofactor`] or checked with
//! [`EdwardsPoint::is_torsion_free`].

#![allow(non_snake_case)]

use core::array::TryFromSliceError;
use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use cfg_if::cfg_if;

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::curve_models::CompletedPoint;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::scalar_mul;
use crate::traits::{Identity, IsIdentity, ValidityCheck};

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// In "compressed" form, a curve point is the \\(y\\) coordinate with
/// the sign of \\(x\\) in the top bit of byte 31.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CompressedEdwardsY(pub [u8; 32]);

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &CompressedEdwardsY) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl Debug for CompressedEdwardsY {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedEdwardsY: {:?}", self.as_bytes())
    }
}

impl CompressedEdwardsY {
    /// View this `CompressedEdwardsY` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy this `CompressedEdwardsY` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Construct a `CompressedEdwardsY` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TryFromSliceError`] if the input `bytes` slice does
    /// not have a length of 32.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        bytes.try_into().map(CompressedEdwardsY)
    }

    /// Attempt to decompress to an `EdwardsPoint`.
    ///
    /// Returns `None` if either field component of \\(y\\) is
    /// non-canonical, if \\(y\\) is not the \\(y\\) coordinate of a
    /// curve point, or if the sign bit requests the negative of a zero
    /// \\(x\\) coordinate.
    pub fn decompress(&self) -> Option<EdwardsPoint> {
        let sign = Choice::from(self.0[31] >> 7);
        let mut y_bytes = self.0;
        y_bytes[31] &= 0x7f;

        let point = FieldElement::from_bytes(&y_bytes).and_then(|Y| {
            let YY = Y.square();
            // x^2 = (y^2 - 1) / (d y^2 + 1)
            let u = &YY - &FieldElement::ONE;
            let v = &(&YY * &constants::EDWARDS_D) + &FieldElement::ONE;
            (&u * &v.invert()).sqrt().and_then(|mut X| {
                X.conditional_negate(X.is_negative() ^ sign);
                // a zero x cannot carry a set sign bit
                let sign_ok = !(X.is_negative() ^ sign);
                let point = EdwardsPoint {
                    T: &X * &Y,
                    X,
                    Y,
                    Z: FieldElement::ONE,
                };
                CtOption::new(point, sign_ok)
            })
        });

        // the division above is only exact for valid encodings
        Option::<EdwardsPoint>::from(point).filter(|P| P.is_valid())
    }
}

impl Identity for CompressedEdwardsY {
    fn identity() -> CompressedEdwardsY {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        CompressedEdwardsY(bytes)
    }
}

impl Default for CompressedEdwardsY {
    fn default() -> CompressedEdwardsY {
        CompressedEdwardsY::identity()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for CompressedEdwardsY {
    /// Reset this `CompressedEdwardsY` to the compressed form of the
    /// identity element.
    fn zeroize(&mut self) {
        self.0.zeroize();
        self.0[0] = 1;
    }
}

// ------------------------------------------------------------------------
// Extended points
// ------------------------------------------------------------------------

/// An `EdwardsPoint` represents a point on the FourQ curve in extended
/// twisted Edwards coordinates.
#[derive(Copy, Clone)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    /// Reset this `EdwardsPoint` to the identity element.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y.zeroize();
        self.Z.zeroize();
        self.T.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // compare x/z and y/z by cross-multiplication
        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        // -x^2 + y^2 = 1 + d x^2 y^2, homogenized by Z^2, plus the
        // extended-coordinate constraint T = XY/Z
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let TT = self.T.square();
        let on_curve = (&YY - &XX).ct_eq(&(&ZZ + &(&TT * &constants::EDWARDS_D)));
        let on_segre_image = (&self.X * &self.Y).ct_eq(&(&self.Z * &self.T));
        (on_curve & on_segre_image).into()
    }
}

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "EdwardsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

// ------------------------------------------------------------------------
// Constructors and conversions
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Compress this point to the 32-byte encoding.
    pub fn compress(&self) -> CompressedEdwardsY {
        let recip = self.Z.invert();
        let x = &self.X * &recip;
        let y = &self.Y * &recip;
        let mut s = y.to_bytes();
        s[31] ^= x.is_negative().unwrap_u8() << 7;
        CompressedEdwardsY(s)
    }

    /// Construct a point from affine coordinates given as 32-byte
    /// little-endian field encodings.
    ///
    /// Returns `None` if either coordinate is non-canonical or the
    /// pair does not satisfy the curve equation.
    pub fn from_affine_bytes(x: &[u8; 32], y: &[u8; 32]) -> Option<EdwardsPoint> {
        let point = FieldElement::from_bytes(x).and_then(|x| {
            FieldElement::from_bytes(y).map(|y| EdwardsPoint {
                X: x,
                Y: y,
                Z: FieldElement::ONE,
                T: &x * &y,
            })
        });
        Option::<EdwardsPoint>::from(point).filter(|P| P.is_valid())
    }

    /// Return the affine coordinates of this point as 32-byte
    /// little-endian field encodings.
    pub fn to_affine_bytes(&self) -> ([u8; 32], [u8; 32]) {
        let (x, y) = self.to_affine();
        (x.to_bytes(), y.to_bytes())
    }

    /// Normalize to affine coordinates.
    pub(crate) fn to_affine(&self) -> (FieldElement, FieldElement) {
        let recip = self.Z.invert();
        (&self.X * &recip, &self.Y * &recip)
    }

    /// Add this point to itself.
    pub(crate) fn double(&self) -> EdwardsPoint {
        self.to_projective().double().as_extended()
    }
}

// ------------------------------------------------------------------------
// Doubling and cofactor handling
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Multiply by the cofactor: return \\(\[392\]P\\).
    pub fn mul_by_cofactor(&self) -> EdwardsPoint {
        // 392 = 2^3 * 49
        let q = self.mul_by_pow_2(3);
        let q3 = &q.double() + &q;
        &q3.mul_by_pow_2(4) + &q
    }

    /// Compute \\(\[2^k\]P\\) by successive doublings.  Requires \\(k > 0\\).
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        debug_assert!(k > 0);
        let mut r: CompletedPoint;
        let mut s = self.to_projective();
        for _ in 0..(k - 1) {
            r = s.double();
            s = r.as_projective();
        }
        // unroll the last doubling so we can go directly as_extended()
        s.double().as_extended()
    }

    /// Determine if this point is of small order (annihilated by the
    /// cofactor).
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }

    /// Determine if this point is "torsion-free", i.e., is contained in
    /// the prime-order subgroup.
    ///
    /// The scalar-multiplication contract only holds on the prime-order
    /// subgroup, so points decoded from untrusted encodings should be
    /// checked with this (or cleared with `mul_by_cofactor`) first.
    pub fn is_torsion_free(&self) -> bool {
        // multiply by the 246-bit group order with a plain
        // double-and-add; the order is public and the endomorphism
        // decomposition cannot be used outside the subgroup
        let mut q = EdwardsPoint::identity();
        for i in (0..246).rev() {
            q = q.double();
            if (constants::L[i / 64] >> (i % 64)) & 1 == 1 {
                q = &q + self;
            }
        }
        q.is_identity()
    }
}

// ------------------------------------------------------------------------
// Addition and subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &other.to_projective_niels()).as_extended()
    }
}

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self - &other.to_projective_niels()).as_extended()
    }
}

impl<'b> AddAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn add_assign(&mut self, other: &'b EdwardsPoint) {
        *self = &*self + other;
    }
}

impl<'b> SubAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn sub_assign(&mut self, other: &'b EdwardsPoint) {
        *self = &*self - other;
    }
}

define_add_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);
define_sub_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);
define_add_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);
define_sub_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<T> Sum<T> for EdwardsPoint
where
    T: Borrow<EdwardsPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(EdwardsPoint::identity(), |acc, item| &acc + item.borrow())
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    /// Scalar multiplication: compute `scalar * self`.
    ///
    /// Correct on the prime-order subgroup; see
    /// [`EdwardsPoint::is_torsion_free`].
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        scalar_mul::variable_base::mul(self, scalar)
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar {
    type Output = EdwardsPoint;
    /// Scalar multiplication: compute `self * point`.
    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

impl<'b> MulAssign<&'b Scalar> for EdwardsPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        *self = &*self * scalar;
    }
}

define_mul_assign_variants!(LHS = EdwardsPoint, RHS = Scalar);
define_mul_variants!(LHS = EdwardsPoint, RHS = Scalar, Output = EdwardsPoint);
define_mul_variants!(LHS = Scalar, RHS = EdwardsPoint, Output = EdwardsPoint);

impl EdwardsPoint {
    /// Fixed-base scalar multiplication by the subgroup generator.
    ///
    /// Uses a precomputed table when the `precomputed-tables` feature
    /// is enabled, and falls back to the variable-base path otherwise.
    pub fn mul_base(scalar: &Scalar) -> Self {
        cfg_if! {
            if #[cfg(feature = "precomputed-tables")] {
                scalar_mul::fixed_base::mul(scalar)
            } else {
                scalar * constants::GENERATOR
            }
        }
    }
}

// ------------------------------------------------------------------------
// Serde
// ------------------------------------------------------------------------

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for EdwardsPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.compress().as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedEdwardsY {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EdwardsPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EdwardsPointVisitor;

        impl<'de> Visitor<'de> for EdwardsPointVisitor {
            type Value = EdwardsPoint;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a valid point in Edwards y + sign format")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<EdwardsPoint, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                #[allow(clippy::needless_range_loop)]
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                CompressedEdwardsY(bytes)
                    .decompress()
                    .ok_or_else(|| serde::de::Error::custom("decompression failed"))
            }
        }

        deserializer.deserialize_tuple(32, EdwardsPointVisitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedEdwardsY {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CompressedEdwardsYVisitor;

        impl<'de> Visitor<'de> for CompressedEdwardsYVisitor {
            type Value = CompressedEdwardsY;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("32 bytes of data")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CompressedEdwardsY, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                #[allow(clippy::needless_range_loop)]
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                Ok(CompressedEdwardsY(bytes))
            }
        }

        deserializer.deserialize_tuple(32, CompressedEdwardsYVisitor)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::GENERATOR;
    use crate::field::BaseFieldElement;
    use crate::scalar::test::scalar_from_hex;

    /// The compressed generator.
    const GENERATOR_COMPRESSED_HEX: &str =
        "87b2cb2b46a224b95a7820a19bee3f0e5c8b4c8444c3a74942020e63f84a1c6e";

    /// 2G in affine coordinates, from an independent implementation.
    fn two_g() -> (FieldElement, FieldElement) {
        (
            FieldElement {
                a: BaseFieldElement([0xdffd6556d311ce43, 0x210a7d9f9782a38c]),
                b: BaseFieldElement([0x023c5e59afc61df4, 0x58d4179cfc261e7b]),
            },
            FieldElement {
                a: BaseFieldElement([0x35a2323d01cb626c, 0x2db3fc78c3d93dfe]),
                b: BaseFieldElement([0xee7c9525e2919bf8, 0x44c04cb98a015452]),
            },
        )
    }

    /// 3G in affine coordinates, from an independent implementation.
    fn three_g() -> (FieldElement, FieldElement) {
        (
            FieldElement {
                a: BaseFieldElement([0x821ff2e80dc5e252, 0x6a9819b5c0f0f512]),
                b: BaseFieldElement([0x7f29641b85d56f5c, 0x1dd2c4814e7439e7]),
            },
            FieldElement {
                a: BaseFieldElement([0x070763c94e098671, 0x6caaddc6d7b431a8]),
                b: BaseFieldElement([0xb4e0f6026423303e, 0x771ca389a001970f]),
            },
        )
    }

    fn compressed_from_hex(s: &str) -> CompressedEdwardsY {
        CompressedEdwardsY::from_slice(&hex::decode(s).unwrap()).unwrap()
    }

    #[test]
    fn generator_compresses_to_known_bytes() {
        assert_eq!(
            GENERATOR.compress(),
            compressed_from_hex(GENERATOR_COMPRESSED_HEX)
        );
    }

    #[test]
    fn generator_decompression_roundtrips() {
        let g = compressed_from_hex(GENERATOR_COMPRESSED_HEX)
            .decompress()
            .unwrap();
        assert_eq!(g, GENERATOR);
        assert!(g.is_valid());
    }

    #[test]
    fn doubling_and_addition_match_known_answers() {
        let g2 = GENERATOR.double();
        assert_eq!(g2.to_affine(), two_g());
        assert_eq!(&GENERATOR + &GENERATOR, g2);

        let g3 = &g2 + &GENERATOR;
        assert_eq!(g3.to_affine(), three_g());
        assert_eq!(&g3 - &GENERATOR, g2);
    }

    #[test]
    fn identity_roundtrips() {
        let id = EdwardsPoint::identity();
        assert!(id.is_valid());
        assert_eq!(id.compress(), CompressedEdwardsY::identity());
        assert_eq!(CompressedEdwardsY::identity().decompress().unwrap(), id);
        assert_eq!(&GENERATOR + &id, GENERATOR);
    }

    #[test]
    fn negation_flips_the_sign_bit() {
        let c = GENERATOR.compress();
        let c_neg = (-&GENERATOR).compress();
        assert_eq!(c.as_bytes()[31] >> 7, 0);
        assert_eq!(c_neg.as_bytes()[31] >> 7, 1);
        assert_eq!(&c.as_bytes()[..31], &c_neg.as_bytes()[..31]);
        assert_eq!(&GENERATOR + &(-&GENERATOR), EdwardsPoint::identity());
    }

    #[test]
    fn decompress_rejects_invalid_encodings() {
        // a canonical y that is not on the curve
        assert!(CompressedEdwardsY([0x02; 32]).decompress().is_none());
        // a non-canonical field component: p in the real half
        let mut bytes = [0u8; 32];
        bytes[0..15].copy_from_slice(&[0xff; 15]);
        bytes[15] = 0x7f;
        assert!(CompressedEdwardsY(bytes).decompress().is_none());
        // the identity with the sign bit set requests -0
        let mut bytes = CompressedEdwardsY::identity().to_bytes();
        bytes[31] |= 0x80;
        assert!(CompressedEdwardsY(bytes).decompress().is_none());
    }

    #[test]
    fn order_two_point_roundtrips_but_is_not_torsion_free() {
        // (0, -1) has order two
        let mut bytes = [0u8; 32];
        bytes[0..15].copy_from_slice(&[0xff; 15]);
        bytes[15] = 0x7f;
        bytes[0] = 0xfe;
        let p = CompressedEdwardsY(bytes).decompress().unwrap();
        assert!(p.is_valid());
        assert_eq!(p.double(), EdwardsPoint::identity());
        assert_eq!(p.compress(), CompressedEdwardsY(bytes));
        assert!(p.is_small_order());
        assert!(!p.is_torsion_free());
        assert!(p.mul_by_cofactor().is_identity());
    }

    #[test]
    fn generator_is_torsion_free() {
        assert!(GENERATOR.is_torsion_free());
        assert!(!GENERATOR.is_small_order());
        assert!(!GENERATOR.mul_by_cofactor().is_identity());
    }

    #[test]
    fn scalar_mul_known_answers() {
        let vectors: [(&str, &str); 4] = [
            (
                "0000000000000000000000000000000000000000000000000000000000000001",
                "87b2cb2b46a224b95a7820a19bee3f0e5c8b4c8444c3a74942020e63f84a1c6e",
            ),
            (
                "0000000000000000000000000000000000000000000000000000000000000002",
                "6c62cb013d32a235fe3dd9c378fcb32df89b91e225957cee5254018ab94cc0c4",
            ),
            (
                "2d85ae1aab17105c49e1cb8e5f1d3fa4cb2e10dbe9630ec135a1f1ea52f79f31",
                "1c23419550f9e9a4ecb9f78ea5d0ea5b7b1b278296e764877ad9d7ffc10f6937",
            ),
            (
                "0029cbc14e5e0a72f05397829cbc14e5dfbd004dfe0f79992fb2540ec7768ce6",
                "87b2cb2b46a224b95a7820a19bee3f0e5c8b4c8444c3a74942020e63f84a1cee",
            ),
        ];
        for (k_hex, expected_hex) in vectors.iter() {
            let k = scalar_from_hex(k_hex);
            assert_eq!((&GENERATOR * &k).compress(), compressed_from_hex(expected_hex));
        }
    }

    #[test]
    fn scalar_mul_edge_scalars() {
        assert_eq!(&GENERATOR * &Scalar::ZERO, EdwardsPoint::identity());
        assert_eq!(&GENERATOR * &Scalar::ONE, GENERATOR);
        assert_eq!(&Scalar::from(3u8) * &GENERATOR, &GENERATOR.double() + &GENERATOR);
    }

    #[test]
    fn mul_base_matches_variable_base() {
        let k = scalar_from_hex("2d85ae1aab17105c49e1cb8e5f1d3fa4cb2e10dbe9630ec135a1f1ea52f79f31");
        assert_eq!(EdwardsPoint::mul_base(&k), &GENERATOR * &k);
        assert_eq!(EdwardsPoint::mul_base(&Scalar::ZERO), EdwardsPoint::identity());
        assert_eq!(EdwardsPoint::mul_base(&Scalar::ONE), GENERATOR);
    }

    #[test]
    fn scalar_mul_distributes_over_addition() {
        let k = scalar_from_hex("2d85ae1aab17105c49e1cb8e5f1d3fa4cb2e10dbe9630ec135a1f1ea52f79f31");
        let l = &k + &Scalar::from(7u8);
        let sum = &(&GENERATOR * &k) + &(&GENERATOR * &Scalar::from(7u8));
        assert_eq!(&GENERATOR * &l, sum);
    }

    #[test]
    fn affine_bytes_roundtrip() {
        let (x, y) = GENERATOR.to_affine_bytes();
        let p = EdwardsPoint::from_affine_bytes(&x, &y).unwrap();
        assert_eq!(p, GENERATOR);

        // x and y swapped is not on the curve
        assert!(EdwardsPoint::from_affine_bytes(&y, &x).is_none());
    }

    #[test]
    fn sum_of_points() {
        let g2 = GENERATOR.double();
        let points = [GENERATOR, g2, GENERATOR];
        let sum: EdwardsPoint = points.iter().sum();
        assert_eq!(sum, &g2 + &g2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_point_roundtrip() {
        let encoded = bincode::serialize(&GENERATOR).unwrap();
        let decoded: EdwardsPoint = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, GENERATOR);
        assert_eq!(encoded.len(), 32);

        let compressed: CompressedEdwardsY =
            bincode::deserialize(&bincode::serialize(&GENERATOR.compress()).unwrap()).unwrap();
        assert_eq!(compressed, GENERATOR.compress());

        // an off-curve encoding fails to deserialize as a point
        assert!(bincode::deserialize::<EdwardsPoint>(&[0x02; 32]).is_err());
    }
}
