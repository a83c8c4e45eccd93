// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! Implementations of constant-time scalar multiplication.
//!
//! Both the variable-base and fixed-base paths share the same shape:
//! the scalar is split into four positive 64-bit sub-scalars by
//! [`Scalar::decompose`](crate::scalar::Scalar::decompose), the
//! sub-scalars are recoded into 65 signed digits, and the main loop
//! performs one doubling and one table addition per digit.

pub mod variable_base;

#[cfg(feature = "precomputed-tables")]
pub mod fixed_base;

/// Recode four positive sub-scalars, the first odd, into 65 signed
/// digits.
///
/// Digit \\(i\\) selects table entry `digits[i]` \\(\in \\{0,\dots,7\\}\\)
/// and negates it when `signs[i]` is 1.  The sign pattern is taken from
/// the bits of the first sub-scalar (the top digit is always positive),
/// and the remaining sub-scalars absorb a carry whenever the digit is
/// negative, so that
/// $$ a\_j = \sum\_i (-1)^{\mathtt{signs}\[i\]} \mathtt{bit}\_j(\mathtt{digits}\[i\]) 2^i. $$
pub(crate) fn recode(a: &[u64; 4]) -> ([u8; 65], [u8; 65]) {
    debug_assert!(a[0] & 1 == 1);

    let mut a = *a;
    let mut signs = [0u8; 65];
    let mut digits = [0u8; 65];

    for i in 0..65 {
        // the sign of digit i is bit i+1 of the first sub-scalar; bits
        // past the top are zero and the final digit is always positive
        a[0] >>= 1;
        let s = if i == 64 { 1u64 } else { a[0] & 1 };
        signs[i] = (s ^ 1) as u8;
        // all ones when this digit is negative
        let carry_mask = s.wrapping_sub(1);

        let mut u = 0u64;
        for j in 1..4 {
            let v = a[j] & 1;
            a[j] = (a[j] >> 1) + (v & carry_mask);
            u |= v << (j - 1);
        }
        digits[i] = u as u8;
    }

    (signs, digits)
}

#[cfg(test)]
mod test {
    use super::*;

    /// Reconstruct the sub-scalars from a recoding, in wide arithmetic.
    fn reconstruct(signs: &[u8; 65], digits: &[u8; 65]) -> [i128; 4] {
        let mut r = [0i128; 4];
        for i in 0..65 {
            let s: i128 = if signs[i] == 1 { -1 } else { 1 };
            r[0] += s << i;
            for j in 1..4 {
                if (digits[i] >> (j - 1)) & 1 == 1 {
                    r[j] += s << i;
                }
            }
        }
        r
    }

    #[test]
    fn recoding_reconstructs_sub_scalars() {
        let cases: [[u64; 4]; 4] = [
            [1, 0, 0, 0],
            [
                0x7a5512d013d21591,
                0x87fb745fe1103380,
                0x7363dde0a4d64467,
                0x90cb0f7c276341ee,
            ],
            [u64::MAX, u64::MAX, 1, u64::MAX - 1],
            [0x8000000000000001, 0x8000000000000000, u64::MAX, 1],
        ];
        for a in cases.iter() {
            let (signs, digits) = recode(a);
            assert_eq!(signs[64], 0);
            let r = reconstruct(&signs, &digits);
            for j in 0..4 {
                assert_eq!(r[j], a[j] as i128);
            }
        }
    }
}
