// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! Field arithmetic for the FourQ base field \\(\mathbb{F}\_{p}\\) with
//! \\(p = 2^{127} - 1\\), and its quadratic extension
//! \\(\mathbb{F}\_{p^2} = \mathbb{F}\_p(i)\\), \\(i^2 = -1\\).
//!
//! Elements of \\(\mathbb{F}\_p\\) are held in two 64-bit limbs in the
//! range \\([0, 2^{127})\\).  Since \\(p\\) is a Mersenne prime, both
//! \\(0\\) and \\(p\\) represent zero; encodings are canonicalized on
//! the way out.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;

/// Mask of the low 127 bits of a `u128`.
const LOW_127_BITS: u128 = (1u128 << 127) - 1;

/// An element of \\(\mathbb{F}\_{p}\\), \\(p = 2^{127} - 1\\).
#[derive(Copy, Clone, Default)]
pub(crate) struct BaseFieldElement(pub(crate) [u64; 2]);

impl Debug for BaseFieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BaseFieldElement({:?})", &self.0)
    }
}

impl ConstantTimeEq for BaseFieldElement {
    fn ct_eq(&self, other: &BaseFieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl PartialEq for BaseFieldElement {
    fn eq(&self, other: &BaseFieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for BaseFieldElement {}

impl ConditionallySelectable for BaseFieldElement {
    fn conditional_select(
        a: &BaseFieldElement,
        b: &BaseFieldElement,
        choice: Choice,
    ) -> BaseFieldElement {
        BaseFieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
        ])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for BaseFieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<'a, 'b> Add<&'b BaseFieldElement> for &'a BaseFieldElement {
    type Output = BaseFieldElement;
    fn add(self, rhs: &'b BaseFieldElement) -> BaseFieldElement {
        BaseFieldElement::weak_reduce(self.as_u128() + rhs.as_u128())
    }
}

impl<'a, 'b> Sub<&'b BaseFieldElement> for &'a BaseFieldElement {
    type Output = BaseFieldElement;
    fn sub(self, rhs: &'b BaseFieldElement) -> BaseFieldElement {
        // rhs <= p, so p - rhs does not underflow
        BaseFieldElement::weak_reduce(self.as_u128() + (LOW_127_BITS - rhs.as_u128()))
    }
}

impl<'a, 'b> Mul<&'b BaseFieldElement> for &'a BaseFieldElement {
    type Output = BaseFieldElement;
    fn mul(self, rhs: &'b BaseFieldElement) -> BaseFieldElement {
        let (a0, a1) = (self.0[0] as u128, self.0[1] as u128);
        let (b0, b1) = (rhs.0[0] as u128, rhs.0[1] as u128);

        // schoolbook 128x128 -> 256, the cross terms cannot overflow
        // since the high limbs are below 2^63
        let ll = a0 * b0;
        let mid = a0 * b1 + a1 * b0;
        let hh = a1 * b1;

        let (lo, carry) = ll.overflowing_add(mid << 64);
        let hi = hh + (mid >> 64) + (carry as u128);

        BaseFieldElement::reduce_wide(lo, hi)
    }
}

impl<'a> Neg for &'a BaseFieldElement {
    type Output = BaseFieldElement;
    fn neg(self) -> BaseFieldElement {
        BaseFieldElement::weak_reduce(LOW_127_BITS - self.as_u128())
    }
}

define_add_variants!(
    LHS = BaseFieldElement,
    RHS = BaseFieldElement,
    Output = BaseFieldElement
);
define_sub_variants!(
    LHS = BaseFieldElement,
    RHS = BaseFieldElement,
    Output = BaseFieldElement
);
define_mul_variants!(
    LHS = BaseFieldElement,
    RHS = BaseFieldElement,
    Output = BaseFieldElement
);

impl Neg for BaseFieldElement {
    type Output = BaseFieldElement;
    fn neg(self) -> BaseFieldElement {
        -&self
    }
}

impl BaseFieldElement {
    pub(crate) const ZERO: BaseFieldElement = BaseFieldElement([0, 0]);
    pub(crate) const ONE: BaseFieldElement = BaseFieldElement([1, 0]);

    #[inline(always)]
    fn as_u128(&self) -> u128 {
        (self.0[0] as u128) | ((self.0[1] as u128) << 64)
    }

    #[inline(always)]
    fn from_u128(x: u128) -> BaseFieldElement {
        BaseFieldElement([x as u64, (x >> 64) as u64])
    }

    /// Fold a value of up to 128 bits below \\(2^{127}\\) using
    /// \\(2^{127} \equiv 1 \pmod p\\).
    #[inline(always)]
    fn weak_reduce(x: u128) -> BaseFieldElement {
        let t = (x & LOW_127_BITS) + (x >> 127);
        let t = (t & LOW_127_BITS) + (t >> 127);
        BaseFieldElement::from_u128(t)
    }

    /// Reduce a 256-bit product held as two `u128` halves.
    #[inline(always)]
    fn reduce_wide(lo: u128, hi: u128) -> BaseFieldElement {
        // hi < 2^127, so 2*hi fits in 128 bits
        let s = (lo & LOW_127_BITS) + ((hi << 1) & LOW_127_BITS);
        let t = (s & LOW_127_BITS) + (s >> 127) + (lo >> 127) + (hi >> 126);
        let t = (t & LOW_127_BITS) + (t >> 127);
        BaseFieldElement::from_u128(t)
    }

    /// Map the redundant representation \\(p\\) of zero to all-zero limbs.
    fn canonicalize(&self) -> BaseFieldElement {
        // incrementing p sets bit 127; no other in-range value does
        let t = self.as_u128() + 1;
        let mask = 0u64.wrapping_sub((t >> 127) as u64);
        BaseFieldElement([self.0[0] & !mask, self.0[1] & !mask])
    }

    /// Encode as 16 little-endian bytes, fully reduced.
    pub(crate) fn to_bytes(self) -> [u8; 16] {
        let c = self.canonicalize();
        let mut bytes = [0u8; 16];
        bytes[0..8].copy_from_slice(&c.0[0].to_le_bytes());
        bytes[8..16].copy_from_slice(&c.0[1].to_le_bytes());
        bytes
    }

    /// Decode 16 little-endian bytes, rejecting values not below \\(p\\).
    pub(crate) fn from_bytes(bytes: &[u8; 16]) -> CtOption<BaseFieldElement> {
        let lo = u64::from_le_bytes(bytes[0..8].try_into().expect("length 8"));
        let hi = u64::from_le_bytes(bytes[8..16].try_into().expect("length 8"));

        let top_clear = Choice::from(((hi >> 63) ^ 1) as u8);
        let is_p = lo.ct_eq(&u64::MAX) & hi.ct_eq(&(u64::MAX >> 1));
        let fe = BaseFieldElement([lo, hi & (u64::MAX >> 1)]);
        CtOption::new(fe, top_clear & !is_p)
    }

    pub(crate) fn is_zero(&self) -> Choice {
        self.ct_eq(&BaseFieldElement::ZERO)
    }

    /// Parity of the fully reduced value.
    pub(crate) fn is_odd(&self) -> Choice {
        Choice::from((self.canonicalize().0[0] & 1) as u8)
    }

    pub(crate) fn square(&self) -> BaseFieldElement {
        self * self
    }

    /// Compute `self^(2^k)` by `k` successive squarings.
    pub(crate) fn pow2k(&self, k: u32) -> BaseFieldElement {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Compute the inverse as \\(x^{p-2} = x^{2^{127} - 3}\\).
    ///
    /// The inverse of zero is zero.
    pub(crate) fn invert(&self) -> BaseFieldElement {
        // 2^127 - 3 = 4*(2^125 - 1) + 1; build x^(2^125 - 1) by a
        // doubling chain on the run length 125 = 64+32+16+8+4+1
        let t1 = *self;
        let t2 = &t1.pow2k(1) * &t1;
        let t4 = &t2.pow2k(2) * &t2;
        let t8 = &t4.pow2k(4) * &t4;
        let t16 = &t8.pow2k(8) * &t8;
        let t32 = &t16.pow2k(16) * &t16;
        let t64 = &t32.pow2k(32) * &t32;
        let t96 = &t64.pow2k(32) * &t32;
        let t112 = &t96.pow2k(16) * &t16;
        let t120 = &t112.pow2k(8) * &t8;
        let t124 = &t120.pow2k(4) * &t4;
        let t125 = &t124.pow2k(1) * &t1;
        &t125.pow2k(2) * &t1
    }
}

/// An element of \\(\mathbb{F}\_{p^2}\\), represented as \\(a + b i\\).
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct FieldElement {
    pub(crate) a: BaseFieldElement,
    pub(crate) b: BaseFieldElement,
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.a.ct_eq(&other.a) & self.b.ct_eq(&other.b)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        FieldElement {
            a: BaseFieldElement::conditional_select(&a.a, &b.a, choice),
            b: BaseFieldElement::conditional_select(&a.b, &b.b, choice),
        }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.a.zeroize();
        self.b.zeroize();
    }
}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement {
            a: &self.a + &rhs.a,
            b: &self.b + &rhs.b,
        }
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement {
            a: &self.a - &rhs.a,
            b: &self.b - &rhs.b,
        }
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        // Karatsuba-style complex product: three base-field
        // multiplications, with the cross term as
        // (a + b)(c + d) - ac - bd
        let aa = &self.a * &rhs.a;
        let bb = &self.b * &rhs.b;
        let cross = &(&self.a + &self.b) * &(&rhs.a + &rhs.b);
        FieldElement {
            a: &aa - &bb,
            b: &(&cross - &aa) - &bb,
        }
    }
}

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        FieldElement {
            a: -&self.a,
            b: -&self.b,
        }
    }
}

define_add_variants!(
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);
define_sub_variants!(
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);
define_mul_variants!(
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);

impl Neg for FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        -&self
    }
}

impl FieldElement {
    pub(crate) const ZERO: FieldElement = FieldElement {
        a: BaseFieldElement::ZERO,
        b: BaseFieldElement::ZERO,
    };
    pub(crate) const ONE: FieldElement = FieldElement {
        a: BaseFieldElement::ONE,
        b: BaseFieldElement::ZERO,
    };

    /// The conjugate \\(a - b i\\).
    pub(crate) fn conjugate(&self) -> FieldElement {
        FieldElement {
            a: self.a,
            b: -&self.b,
        }
    }

    pub(crate) fn square(&self) -> FieldElement {
        // (a + bi)^2 = (a+b)(a-b) + 2ab i
        let apb = &self.a + &self.b;
        let amb = &self.a - &self.b;
        let ab = &self.a * &self.b;
        FieldElement {
            a: &apb * &amb,
            b: &ab + &ab,
        }
    }

    /// Compute the inverse via the norm map; the inverse of zero is zero.
    pub(crate) fn invert(&self) -> FieldElement {
        let norm = &self.a.square() + &self.b.square();
        let ninv = norm.invert();
        FieldElement {
            a: &self.a * &ninv,
            b: &(-&self.b) * &ninv,
        }
    }

    pub(crate) fn is_zero(&self) -> Choice {
        self.a.is_zero() & self.b.is_zero()
    }

    /// The "sign" of a field element used by point compression: the
    /// parity of the real part, or of the imaginary part when the real
    /// part is zero.
    pub(crate) fn is_negative(&self) -> Choice {
        let a_zero = self.a.is_zero();
        (self.a.is_odd() & !a_zero) | (self.b.is_odd() & a_zero)
    }

    /// Encode as 32 little-endian bytes: the real part, then the
    /// imaginary part.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[0..16].copy_from_slice(&self.a.to_bytes());
        bytes[16..32].copy_from_slice(&self.b.to_bytes());
        bytes
    }

    /// Decode 32 little-endian bytes, rejecting non-canonical halves.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> CtOption<FieldElement> {
        let a = BaseFieldElement::from_bytes(bytes[0..16].try_into().expect("length 16"));
        let b = BaseFieldElement::from_bytes(bytes[16..32].try_into().expect("length 16"));
        let ok = a.is_some() & b.is_some();
        CtOption::new(
            FieldElement {
                a: a.unwrap_or(BaseFieldElement::ZERO),
                b: b.unwrap_or(BaseFieldElement::ZERO),
            },
            ok,
        )
    }

    /// Compute a square root, if one exists.
    ///
    /// Uses the norm map: for \\(z = a + bi\\) with \\(x^2 = (a + s)/2\\)
    /// where \\(s^2 = a^2 + b^2\\), the root is \\(x + (b/2x) i\\).  Both
    /// signs of \\(s\\) are tried, plus the purely imaginary case
    /// \\(z = (a, 0)\\) with \\(a\\) a nonresidue.  The chosen root is
    /// whichever candidate squares back to the input.
    pub(crate) fn sqrt(&self) -> CtOption<FieldElement> {
        let norm = &self.a.square() + &self.b.square();
        let s = norm.pow2k(125);

        let c1 = self.sqrt_candidate(&s);
        let c2 = self.sqrt_candidate(&(-&s));
        let c3 = FieldElement {
            a: BaseFieldElement::ZERO,
            b: (-&self.a).pow2k(125),
        };

        let mut r = c3;
        r.conditional_assign(&c2, c2.square().ct_eq(self));
        r.conditional_assign(&c1, c1.square().ct_eq(self));
        CtOption::new(r, r.square().ct_eq(self))
    }

    fn sqrt_candidate(&self, s: &BaseFieldElement) -> FieldElement {
        // p = 3 mod 4, so t^((p+1)/4) = t^(2^125) is a root of t when
        // one exists
        let t = &(&self.a + s) * &constants::INV_TWO;
        let x = t.pow2k(125);
        let x2 = &x + &x;
        FieldElement {
            a: x,
            b: &self.b * &x2.invert(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{EDWARDS_D, GENERATOR_X, GENERATOR_Y};

    #[test]
    fn one_is_multiplicative_identity() {
        assert_eq!(&FieldElement::ONE * &GENERATOR_X, GENERATOR_X);
        assert_eq!(&GENERATOR_Y * &FieldElement::ONE, GENERATOR_Y);
    }

    #[test]
    fn half_plus_half_is_one() {
        assert_eq!(&constants::INV_TWO + &constants::INV_TWO, BaseFieldElement::ONE);
    }

    #[test]
    fn invert_roundtrips() {
        let xinv = GENERATOR_X.invert();
        assert_eq!(&GENERATOR_X * &xinv, FieldElement::ONE);
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn base_invert_roundtrips() {
        let x = GENERATOR_X.a;
        assert_eq!(&x * &x.invert(), BaseFieldElement::ONE);
    }

    #[test]
    fn mul_is_associative_with_constants() {
        let dx = &EDWARDS_D * &GENERATOR_X;
        let xy = &GENERATOR_X * &GENERATOR_Y;
        assert_eq!(&dx * &GENERATOR_Y, &EDWARDS_D * &xy);
    }

    #[test]
    fn mul_handles_components_near_p() {
        // both components p - 1, so the cross-term sums land on the
        // reduction boundary; (-1 - i)^2 = 2i
        let pm1 = BaseFieldElement([0xfffffffffffffffe, 0x7fffffffffffffff]);
        let z = FieldElement { a: pm1, b: pm1 };
        let sq = &z * &z;
        assert_eq!(sq, z.square());
        assert_eq!(sq.a, BaseFieldElement::ZERO);
        assert_eq!(sq.b, &BaseFieldElement::ONE + &BaseFieldElement::ONE);
    }

    #[test]
    fn conjugate_norm_is_real() {
        let n = &GENERATOR_X * &GENERATOR_X.conjugate();
        assert_eq!(n.b, BaseFieldElement::ZERO);
        assert!(bool::from(!n.a.is_zero()));
    }

    #[test]
    fn sqrt_of_square_squares_back() {
        let z = GENERATOR_Y.square();
        let r = z.sqrt().unwrap();
        assert_eq!(r.square(), z);

        assert_eq!(FieldElement::ZERO.sqrt().unwrap(), FieldElement::ZERO);
        let r = FieldElement::ONE.sqrt().unwrap();
        assert_eq!(r.square(), FieldElement::ONE);
    }

    #[test]
    fn sqrt_rejects_nonresidue() {
        // 2 + i is not a square
        let z = FieldElement {
            a: BaseFieldElement([2, 0]),
            b: BaseFieldElement([1, 0]),
        };
        assert!(bool::from(z.sqrt().is_none()));
    }

    #[test]
    fn bytes_roundtrip() {
        let bytes = GENERATOR_X.to_bytes();
        let x = FieldElement::from_bytes(&bytes).unwrap();
        assert_eq!(x, GENERATOR_X);
    }

    #[test]
    fn from_bytes_rejects_noncanonical() {
        // 2^127 - 1 in the real half
        let mut bytes = [0u8; 16];
        bytes[0..15].copy_from_slice(&[0xff; 15]);
        bytes[15] = 0x7f;
        assert!(bool::from(BaseFieldElement::from_bytes(&bytes).is_none()));

        // p - 1 is accepted
        bytes[0] = 0xfe;
        assert!(bool::from(BaseFieldElement::from_bytes(&bytes).is_some()));
    }

    #[test]
    fn p_and_zero_encode_identically() {
        let p = BaseFieldElement([u64::MAX, u64::MAX >> 1]);
        assert_eq!(p.to_bytes(), BaseFieldElement::ZERO.to_bytes());
        assert!(bool::from(p.is_zero()));
        assert!(bool::from(!p.is_odd()));
    }

    #[test]
    fn negation_and_sub_agree() {
        let z = &FieldElement::ZERO - &GENERATOR_X;
        assert_eq!(z, -&GENERATOR_X);
        assert_eq!(&z + &GENERATOR_X, FieldElement::ZERO);
    }
}
