// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

//! Integration tests against externally generated test vectors.

use fourq::constants::GENERATOR;
use fourq::edwards::{CompressedEdwardsY, EdwardsPoint};
use fourq::scalar::Scalar;

fn scalar_from_limbs(limbs: [u64; 4]) -> Scalar {
    let mut bytes = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        bytes[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
    }
    Scalar::from_bytes_mod_order(bytes)
}

/// A thousand chained scalar multiplications with pseudo-random
/// scalars, checked against an independent implementation.
#[test]
fn thousand_iteration_scalar_mul_chain() {
    let expected = CompressedEdwardsY(
        hex::decode("44336f9967501c286c930e7c81b3010945125f9129c4e84f10e2acac8e940bd7")
            .unwrap()
            .try_into()
            .unwrap(),
    );

    let mut s: [u64; 4] = [
        0x3AD457AB55456230,
        0x3A8B3C2C6FD86E0C,
        0x7E38F7C9CFBB9166,
        0x0028FD6CBDA458F0,
    ];
    let mut pt = GENERATOR;
    for _ in 0..1000 {
        s[1] = s[2];
        s[2] = s[2].wrapping_add(s[0]);
        pt = &pt * &scalar_from_limbs(s);
    }
    assert_eq!(pt.compress(), expected);

    // the affine coordinates, as little-endian component bytes; the
    // x real part is odd, so the compressed sign bit above is set
    let (x, y) = pt.to_affine_bytes();
    assert_eq!(
        hex::decode("ef4b49bd77b4d2df1b4ac9bf2b127c2559c4377254939576011fb1b50cf89b46")
            .unwrap(),
        x
    );
    assert_eq!(
        hex::decode("44336f9967501c286c930e7c81b3010945125f9129c4e84f10e2acac8e940b57")
            .unwrap(),
        y
    );
}

#[test]
fn compress_decompress_chain() {
    // walk a few multiples of the generator through the wire format
    let mut p = GENERATOR;
    for _ in 0..32 {
        let compressed = p.compress();
        let q = compressed.decompress().unwrap();
        assert_eq!(p, q);
        assert_eq!(q.compress(), compressed);
        p = &p + &GENERATOR;
    }
}

#[test]
fn scalar_mul_is_a_group_homomorphism() {
    let k = scalar_from_limbs([0x123456789abcdef0, 0xfedcba9876543210, 1, 2]);
    let l = scalar_from_limbs([0xdeadbeefcafef00d, 7, 0, 0x1234]);

    let kl_g = &GENERATOR * &(&k * &l);
    assert_eq!(kl_g, &(&GENERATOR * &k) * &l);
    assert_eq!(kl_g, &(&GENERATOR * &l) * &k);

    let k_plus_l_g = &GENERATOR * &(&k + &l);
    assert_eq!(k_plus_l_g, &(&GENERATOR * &k) + &(&GENERATOR * &l));
    assert_eq!(EdwardsPoint::mul_base(&(&k + &l)), k_plus_l_g);
}

#[test]
fn unreduced_scalar_encodings_are_accepted() {
    // 2^256 - 1 reduces mod the group order
    let k = Scalar::from_bytes_mod_order([0xff; 32]);
    let l = scalar_from_limbs([0xffffffffffffffff; 4]);
    assert_eq!(k, l);
    assert_eq!(&GENERATOR * &k, &GENERATOR * &l);
}
