// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! Arithmetic on scalars (integers mod the group order \\(N\\)).
//!
//! The [`Scalar`] type holds an integer \\(s < N\\), where \\(N\\) is
//! the 246-bit prime order of the prime-order subgroup, as 32
//! little-endian bytes.  All constructors reduce or reject their
//! input, so a `Scalar` is always canonical.
//!
//! Internally, arithmetic is performed on [`UnpackedScalar`]s of four
//! 64-bit limbs in Montgomery form, and scalars destined for scalar
//! multiplication are split into four 64-bit sub-scalars by the
//! lattice decomposition in [`Scalar::decompose`].

use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[cfg(feature = "rand_core")]
use rand_core::{CryptoRng, RngCore};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;

/// The group order minus two, the exponent used for inversion.
const L_MINUS_TWO: [u64; 4] = [
    0x2fb2540ec7768ce5,
    0xdfbd004dfe0f7999,
    0xf05397829cbc14e5,
    0x0029cbc14e5e0a72,
];

/// Compute `a + b * c + carry`, returning the result and the new carry.
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Compute `a + b + carry`, returning the result and the new carry.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Compute `a - b - borrow`, returning the result and the new borrow
/// (all ones on underflow).
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (t as u64, (t >> 64) as u64)
}

/// The `Scalar` struct holds an integer \\(s < N\\).
#[derive(Copy, Clone, Default)]
pub struct Scalar {
    /// The scalar value as 32 little-endian bytes.  Invariant: these
    /// always encode a value below the group order.
    pub(crate) bytes: [u8; 32],
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Scalar) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Scalar, b: &Scalar, choice: Choice) -> Scalar {
        let mut bytes = [0u8; 32];
        for i in 0..32 {
            bytes[i] = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
        }
        Scalar { bytes }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Scalar {
    /// The scalar \\(0\\).
    pub const ZERO: Scalar = Scalar { bytes: [0u8; 32] };

    /// The scalar \\(1\\).
    pub const ONE: Scalar = Scalar {
        bytes: [
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0,
        ],
    };

    /// Construct a `Scalar` by reducing a 256-bit little-endian integer
    /// modulo the group order \\(N\\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        UnpackedScalar::from_bytes(&bytes).reduce().pack()
    }

    /// Construct a `Scalar` by reducing a 512-bit little-endian integer
    /// modulo the group order \\(N\\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        let lo = UnpackedScalar::from_bytes(input[0..32].try_into().expect("length 32"));
        let hi = UnpackedScalar::from_bytes(input[32..64].try_into().expect("length 32"));
        // lo + hi * 2^256 = lo + hi * R mod N
        let lo = lo.reduce();
        let hi_r = UnpackedScalar::montgomery_mul(&hi, &UnpackedScalar(constants::RR));
        UnpackedScalar::add(&lo, &hi_r).pack()
    }

    /// Attempt to construct a `Scalar` from a canonical byte
    /// representation.
    ///
    /// # Return
    ///
    /// - `Some(s)`, where `s` is the `Scalar` corresponding to `bytes`,
    ///   if `bytes` is a canonical byte representation below \\(N\\);
    /// - `None` if `bytes` is not a canonical byte representation.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> CtOption<Scalar> {
        let candidate = Scalar { bytes };
        let in_range = candidate.unpack().is_below_order();
        CtOption::new(candidate, in_range)
    }

    /// Return a `Scalar` chosen uniformly at random using a
    /// user-provided RNG.
    #[cfg(feature = "rand_core")]
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut scalar_bytes = [0u8; 64];
        rng.fill_bytes(&mut scalar_bytes);
        Scalar::from_bytes_mod_order_wide(&scalar_bytes)
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the little-endian byte encoding of this `Scalar`.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Compute the multiplicative inverse of this scalar.  The inverse
    /// of zero is zero.
    pub fn invert(&self) -> Scalar {
        let x = self.unpack().as_montgomery();
        // fixed-exponent ladder over N - 2; the exponent is public and
        // its leading set bit is bit 245
        let mut acc = x;
        for i in (0..245).rev() {
            acc = UnpackedScalar::montgomery_mul(&acc, &acc);
            if (L_MINUS_TWO[i / 64] >> (i % 64)) & 1 == 1 {
                acc = UnpackedScalar::montgomery_mul(&acc, &x);
            }
        }
        acc.from_montgomery().pack()
    }

    /// Unpack this `Scalar` to four 64-bit limbs.
    pub(crate) fn unpack(&self) -> UnpackedScalar {
        UnpackedScalar::from_bytes(&self.bytes)
    }

    /// Split this scalar into four positive 64-bit sub-scalars
    /// \\((a\_1, a\_2, a\_3, a\_4)\\) with
    /// $$ a\_1 + a\_2 \lambda\_\psi + a\_3 \lambda\_\phi
    ///        + a\_4 \lambda\_\psi \lambda\_\phi \equiv s \pmod N $$
    /// and \\(a\_1\\) odd.
    ///
    /// The sub-scalars are a truncated Babai rounding of the scalar
    /// against a fixed reduced lattice basis, shifted by one of two
    /// fixed offset vectors (differing by a lattice vector with odd
    /// first coordinate) to force every \\(a\_i\\) into \\((0, 2^{64})\\)
    /// and fix the parity of \\(a\_1\\).  All arithmetic is wrapping
    /// arithmetic mod \\(2^{64}\\), which the range bounds make exact.
    pub(crate) fn decompose(&self) -> [u64; 4] {
        let k = self.unpack().0;

        // t_i = floor(k * ell_i / 2^256) mod 2^64, limb 4 of the product
        let t = [
            mul_truncate(&k, &constants::ELL[0]),
            mul_truncate(&k, &constants::ELL[1]),
            mul_truncate(&k, &constants::ELL[2]),
            mul_truncate(&k, &constants::ELL[3]),
        ];

        let mut a = [k[0], 0u64, 0u64, 0u64];
        for i in 0..4 {
            for j in 0..4 {
                a[j] = a[j].wrapping_sub(t[i].wrapping_mul(constants::BASIS[i][j]));
            }
        }

        // pick the offset which makes a_1 odd
        let odd = Choice::from((a[0].wrapping_add(constants::OFFSET[0]) & 1) as u8);
        for j in 0..4 {
            let c = u64::conditional_select(&constants::OFFSET_ALT[j], &constants::OFFSET[j], odd);
            a[j] = a[j].wrapping_add(c);
        }

        debug_assert!(a[0] & 1 == 1);
        a
    }
}

/// Compute limb 4 (bits 256..320) of the 512-bit product `a * b`.
fn mul_truncate(a: &[u64; 4], b: &[u64; 4]) -> u64 {
    let mut r = [0u64; 8];
    for i in 0..4 {
        let mut carry = 0u64;
        for j in 0..4 {
            let (lo, hi) = mac(r[i + j], a[i], b[j], carry);
            r[i + j] = lo;
            carry = hi;
        }
        r[i + 4] = carry;
    }
    r[4]
}

// ------------------------------------------------------------------------
// Arithmetic on unpacked limbs
// ------------------------------------------------------------------------

/// A scalar unpacked to four 64-bit limbs, little-endian.
#[derive(Copy, Clone, Debug)]
pub(crate) struct UnpackedScalar(pub(crate) [u64; 4]);

impl UnpackedScalar {
    /// Unpack 32 little-endian bytes into four limbs.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> UnpackedScalar {
        let mut limbs = [0u64; 4];
        for i in 0..4 {
            limbs[i] = u64::from_le_bytes(bytes[i * 8..(i + 1) * 8].try_into().expect("length 8"));
        }
        UnpackedScalar(limbs)
    }

    /// Pack the limbs into a `Scalar`.  The value must already be
    /// reduced below the group order.
    pub(crate) fn pack(&self) -> Scalar {
        let mut bytes = [0u8; 32];
        for i in 0..4 {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&self.0[i].to_le_bytes());
        }
        Scalar { bytes }
    }

    /// Test whether the limbs encode a value below the group order.
    fn is_below_order(&self) -> Choice {
        let mut borrow = 0u64;
        for i in 0..4 {
            let (_, b) = sbb(self.0[i], constants::L[i], borrow);
            borrow = b;
        }
        Choice::from((borrow & 1) as u8)
    }

    /// Reduce an arbitrary 256-bit value mod the group order.
    pub(crate) fn reduce(&self) -> UnpackedScalar {
        // x * R^{-1} * R^2 * R^{-1} = x mod N
        self.as_montgomery().from_montgomery()
    }

    /// Compute `a + b` mod the group order.  Both inputs must be
    /// reduced.
    pub(crate) fn add(a: &UnpackedScalar, b: &UnpackedScalar) -> UnpackedScalar {
        let mut sum = [0u64; 4];
        let mut carry = 0u64;
        for i in 0..4 {
            let (s, c) = adc(a.0[i], b.0[i], carry);
            sum[i] = s;
            carry = c;
        }
        // the order is 246 bits, so the sum cannot overflow limb 3
        UnpackedScalar::sub(&UnpackedScalar(sum), &UnpackedScalar(constants::L))
    }

    /// Compute `a - b` mod the group order, adding back the order on
    /// underflow.
    pub(crate) fn sub(a: &UnpackedScalar, b: &UnpackedScalar) -> UnpackedScalar {
        let mut diff = [0u64; 4];
        let mut borrow = 0u64;
        for i in 0..4 {
            let (d, bw) = sbb(a.0[i], b.0[i], borrow);
            diff[i] = d;
            borrow = bw;
        }

        let mut carry = 0u64;
        for i in 0..4 {
            let (d, c) = adc(diff[i], constants::L[i] & borrow, carry);
            diff[i] = d;
            carry = c;
        }
        UnpackedScalar(diff)
    }

    /// Compute the full 512-bit product `a * b`.
    fn mul_wide(a: &UnpackedScalar, b: &UnpackedScalar) -> [u64; 8] {
        let mut r = [0u64; 8];
        for i in 0..4 {
            let mut carry = 0u64;
            for j in 0..4 {
                let (lo, hi) = mac(r[i + j], a.0[i], b.0[j], carry);
                r[i + j] = lo;
                carry = hi;
            }
            r[i + 4] = carry;
        }
        r
    }

    /// Montgomery reduction: given `t < N * 2^256`, compute
    /// `t * R^{-1} mod N` where `R = 2^256`.
    #[rustfmt::skip]
    pub(crate) fn montgomery_reduce(t: &[u64; 8]) -> UnpackedScalar {
        let l = &constants::L;

        let k = t[0].wrapping_mul(constants::LFACTOR);
        let (_,  carry) = mac(t[0], k, l[0], 0);
        let (r1, carry) = mac(t[1], k, l[1], carry);
        let (r2, carry) = mac(t[2], k, l[2], carry);
        let (r3, carry) = mac(t[3], k, l[3], carry);
        let (r4, carry2) = adc(t[4], 0, carry);

        let k = r1.wrapping_mul(constants::LFACTOR);
        let (_,  carry) = mac(r1, k, l[0], 0);
        let (r2, carry) = mac(r2, k, l[1], carry);
        let (r3, carry) = mac(r3, k, l[2], carry);
        let (r4, carry) = mac(r4, k, l[3], carry);
        let (r5, carry2) = adc(t[5], carry2, carry);

        let k = r2.wrapping_mul(constants::LFACTOR);
        let (_,  carry) = mac(r2, k, l[0], 0);
        let (r3, carry) = mac(r3, k, l[1], carry);
        let (r4, carry) = mac(r4, k, l[2], carry);
        let (r5, carry) = mac(r5, k, l[3], carry);
        let (r6, carry2) = adc(t[6], carry2, carry);

        let k = r3.wrapping_mul(constants::LFACTOR);
        let (_,  carry) = mac(r3, k, l[0], 0);
        let (r4, carry) = mac(r4, k, l[1], carry);
        let (r5, carry) = mac(r5, k, l[2], carry);
        let (r6, carry) = mac(r6, k, l[3], carry);
        let (r7, _) = adc(t[7], carry2, carry);

        // the result is below 2N; a single conditional subtraction
        // makes it canonical
        UnpackedScalar::sub(&UnpackedScalar([r4, r5, r6, r7]), &UnpackedScalar(*l))
    }

    /// Compute `a * b * R^{-1} mod N`.
    pub(crate) fn montgomery_mul(a: &UnpackedScalar, b: &UnpackedScalar) -> UnpackedScalar {
        UnpackedScalar::montgomery_reduce(&UnpackedScalar::mul_wide(a, b))
    }

    /// Put this scalar into Montgomery form.
    pub(crate) fn as_montgomery(&self) -> UnpackedScalar {
        UnpackedScalar::montgomery_mul(self, &UnpackedScalar(constants::RR))
    }

    /// Take this scalar out of Montgomery form.
    pub(crate) fn from_montgomery(&self) -> UnpackedScalar {
        let mut limbs = [0u64; 8];
        limbs[0..4].copy_from_slice(&self.0);
        UnpackedScalar::montgomery_reduce(&limbs)
    }

    /// Compute `a * b` mod the group order.
    pub(crate) fn mul(a: &UnpackedScalar, b: &UnpackedScalar) -> UnpackedScalar {
        let ab = UnpackedScalar::montgomery_mul(a, b);
        UnpackedScalar::montgomery_mul(&ab, &UnpackedScalar(constants::RR))
    }
}

// ------------------------------------------------------------------------
// Operator impls
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn add(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::add(&self.unpack(), &rhs.unpack()).pack()
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::sub(&self.unpack(), &rhs.unpack()).pack()
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::mul(&self.unpack(), &rhs.unpack()).pack()
    }
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        UnpackedScalar::sub(&UnpackedScalar([0u64; 4]), &self.unpack()).pack()
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}

impl<'b> AddAssign<&'b Scalar> for Scalar {
    fn add_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self + rhs;
    }
}

impl<'b> SubAssign<&'b Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self - rhs;
    }
}

impl<'b> MulAssign<&'b Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self * rhs;
    }
}

define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);
define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);
define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);
define_add_assign_variants!(LHS = Scalar, RHS = Scalar);
define_sub_assign_variants!(LHS = Scalar, RHS = Scalar);
define_mul_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<T> Sum<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::ZERO, |acc, item| &acc + item.borrow())
    }
}

impl<T> Product<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::ONE, |acc, item| &acc * item.borrow())
    }
}

macro_rules! impl_scalar_from_uint {
    ($t:ty) => {
        impl From<$t> for Scalar {
            fn from(x: $t) -> Scalar {
                let mut bytes = [0u8; 32];
                let x_bytes = x.to_le_bytes();
                bytes[0..x_bytes.len()].copy_from_slice(&x_bytes);
                // every value of this type is below the 246-bit order
                Scalar { bytes }
            }
        }
    };
}

impl_scalar_from_uint!(u8);
impl_scalar_from_uint!(u16);
impl_scalar_from_uint!(u32);
impl_scalar_from_uint!(u64);
impl_scalar_from_uint!(u128);

// ------------------------------------------------------------------------
// Serde
// ------------------------------------------------------------------------

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for Scalar {
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
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a sequence of 32 bytes whose little-endian value is below the group order")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
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
                Option::from(Scalar::from_canonical_bytes(bytes))
                    .ok_or_else(|| serde::de::Error::custom("scalar was not canonically encoded"))
            }
        }

        deserializer.deserialize_tuple(32, ScalarVisitor)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// Build a scalar from a big-endian hex string (test convenience).
    pub(crate) fn scalar_from_hex(s: &str) -> Scalar {
        let mut padded = [b'0'; 64];
        padded[64 - s.len()..].copy_from_slice(s.as_bytes());
        let mut bytes: [u8; 32] = hex::decode(core::str::from_utf8(&padded).unwrap())
            .unwrap()
            .try_into()
            .unwrap();
        bytes.reverse();
        Scalar::from_bytes_mod_order(bytes)
    }

    fn lambda_psi() -> Scalar {
        UnpackedScalar(constants::LAMBDA_PSI).pack()
    }

    fn lambda_phi() -> Scalar {
        UnpackedScalar(constants::LAMBDA_PHI).pack()
    }

    fn lambda_psi_phi() -> Scalar {
        UnpackedScalar(constants::LAMBDA_PSI_PHI).pack()
    }

    #[test]
    fn eigenvalue_products() {
        // the composed eigenvalue is the product of the two
        assert_eq!(&lambda_psi() * &lambda_phi(), lambda_psi_phi());
        // lambda_psi^2 = 8 mod N
        assert_eq!(&lambda_psi() * &lambda_psi(), Scalar::from(8u8));
    }

    #[test]
    fn from_bytes_mod_order_reduces_the_order_to_zero() {
        let n_bytes = UnpackedScalar(constants::L).pack().bytes;
        assert_eq!(Scalar::from_bytes_mod_order(n_bytes), Scalar::ZERO);
    }

    #[test]
    fn from_canonical_bytes_rejects_the_order() {
        let n_bytes = UnpackedScalar(constants::L).pack().bytes;
        assert!(bool::from(Scalar::from_canonical_bytes(n_bytes).is_none()));

        let mut n_minus_one = n_bytes;
        n_minus_one[0] -= 1;
        let s = Scalar::from_canonical_bytes(n_minus_one).unwrap();
        assert_eq!(&s + &Scalar::ONE, Scalar::ZERO);
    }

    #[test]
    fn wide_reduction_matches_narrow() {
        // x < N placed in the low half must reduce to itself
        let x = scalar_from_hex("226a2f90f7b78b4f1b43b82ade8e03d3efbc2a0495026769faa9ddb83a9c57");
        let mut wide = [0u8; 64];
        wide[0..32].copy_from_slice(&x.bytes);
        assert_eq!(Scalar::from_bytes_mod_order_wide(&wide), x);

        // 2^256 mod N equals RR * R^{-1} mod N
        let mut wide = [0u8; 64];
        wide[32] = 1;
        let expected = UnpackedScalar(constants::RR).from_montgomery().pack();
        assert_eq!(Scalar::from_bytes_mod_order_wide(&wide), expected);
    }

    #[test]
    fn invert_roundtrips() {
        let x = scalar_from_hex("226a2f90f7b78b4f1b43b82ade8e03d3efbc2a0495026769faa9ddb83a9c57");
        assert_eq!(&x * &x.invert(), Scalar::ONE);
        assert_eq!(Scalar::ZERO.invert(), Scalar::ZERO);

        // small values exercise the full length of the exponent ladder
        assert_eq!(Scalar::ONE.invert(), Scalar::ONE);
        for v in [2u64, 3, 7, 392] {
            let x = Scalar::from(v);
            assert_eq!(&x * &x.invert(), Scalar::ONE);
        }
    }

    #[test]
    fn add_sub_roundtrip() {
        let x = lambda_psi();
        let y = lambda_phi();
        assert_eq!(&(&x + &y) - &y, x);
        assert_eq!(&x - &x, Scalar::ZERO);
        assert_eq!(&x + &(-&x), Scalar::ZERO);
    }

    #[test]
    fn decompose_known_answer() {
        // produced by an independent implementation of the truncated
        // Babai rounding
        let k = scalar_from_hex(
            "2d85ae1aab17105c49e1cb8e5f1d3fa4cb2e10dbe9630ec135a1f1ea52f79f31",
        );
        assert_eq!(
            k.decompose(),
            [
                0x7a5512d013d21591,
                0x87fb745fe1103380,
                0x7363dde0a4d64467,
                0x90cb0f7c276341ee,
            ]
        );
    }

    #[test]
    fn decompose_congruence_and_range() {
        use rand::RngCore;

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut wide = [0u8; 64];
            rng.fill_bytes(&mut wide);
            let k = Scalar::from_bytes_mod_order_wide(&wide);
            let a = k.decompose();
            assert_eq!(a[0] & 1, 1);
            // every sub-scalar is strictly positive
            for ai in a.iter() {
                assert_ne!(*ai, 0);
            }
            let sum = Scalar::from(a[0])
                + Scalar::from(a[1]) * lambda_psi()
                + Scalar::from(a[2]) * lambda_phi()
                + Scalar::from(a[3]) * lambda_psi_phi();
            assert_eq!(sum, k);
        }
    }

    #[test]
    fn from_uint_impls_agree() {
        assert_eq!(Scalar::from(42u8), Scalar::from(42u128));
        assert_eq!(Scalar::from(1u64), Scalar::ONE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_scalar_roundtrip() {
        let s = lambda_psi();
        let encoded = bincode::serialize(&s).unwrap();
        let decoded: Scalar = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, s);
        assert_eq!(encoded.len(), 32);

        // non-canonical encodings are rejected
        let n_bytes = UnpackedScalar(constants::L).pack().bytes;
        assert!(bincode::deserialize::<Scalar>(&n_bytes).is_err());
    }
}
