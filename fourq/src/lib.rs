// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/fourq/0.1.0")]

//! A pure-Rust implementation of group operations on the FourQ curve,
//! a twisted Edwards curve
//! $$ -x^2 + y^2 = 1 + d x^2 y^2 $$
//! defined over the quadratic extension field
//! \\(\mathbb{F}\_{p^2} = \mathbb{F}\_p(i)\\) with \\(p = 2^{127} - 1\\)
//! and \\(i^2 = -1\\).
//!
//! The curve has a prime-order subgroup of 246-bit order \\(N\\) and
//! cofactor 392, and is equipped with two efficiently computable
//! endomorphisms \\(\psi\\) and \\(\phi\\).  Scalar multiplication uses
//! the endomorphisms to split a scalar into four 64-bit sub-scalars,
//! so the constant-time main loop runs in 65 iterations instead of 246.
//!
//! # Overview
//!
//! * [`scalar::Scalar`]: integers modulo the subgroup order \\(N\\).
//! * [`edwards::EdwardsPoint`]: points on the curve in extended twisted
//!   Edwards coordinates.
//! * [`edwards::CompressedEdwardsY`]: the 32-byte point encoding.
//! * [`constants`]: the subgroup generator and the curve constant
//!   \\(d\\).
//!
//! # Example
//!
//! ```
//! use fourq::constants::GENERATOR;
//! use fourq::edwards::EdwardsPoint;
//! use fourq::scalar::Scalar;
//!
//! let k = Scalar::from(86u64);
//! let P = EdwardsPoint::mul_base(&k);
//! assert_eq!(P, &GENERATOR * &k);
//!
//! let bytes = P.compress().to_bytes();
//! let Q = fourq::edwards::CompressedEdwardsY(bytes).decompress().unwrap();
//! assert_eq!(P, Q);
//! ```
//!
//! # Features
//!
//! * `alloc` (default): enables allocating code paths in dependencies.
//! * `precomputed-tables` (default): a precomputed table for the
//!   generator, speeding up [`edwards::EdwardsPoint::mul_base`].
//! * `zeroize` (default): `Zeroize` impls for scalars and points.
//! * `rand_core`: `Scalar::random`.
//! * `serde`: serialization for scalars and points.
//!
//! # A note on constant-time code
//!
//! Scalar decomposition, recoding, table lookups, and the group
//! operations used during scalar multiplication are implemented without
//! secret-dependent branches or memory accesses, using the [`subtle`]
//! crate's constant-time machinery.

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub mod constants;
pub mod edwards;
pub mod scalar;
pub mod traits;

pub(crate) mod curve_models;
pub(crate) mod endo;
pub(crate) mod field;
pub(crate) mod scalar_mul;
pub(crate) mod window;

pub use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
pub use crate::scalar::Scalar;
