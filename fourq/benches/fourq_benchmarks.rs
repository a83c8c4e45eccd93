// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2025 The fourq developers
// See LICENSE for licensing information.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::thread_rng;

use fourq::constants::GENERATOR;
use fourq::edwards::EdwardsPoint;
use fourq::scalar::Scalar;

fn scalar_benches(c: &mut Criterion) {
    let mut g = c.benchmark_group("scalar");
    let mut rng = thread_rng();
    let x = Scalar::random(&mut rng);
    let y = Scalar::random(&mut rng);

    g.bench_function("mul", |b| b.iter(|| &x * &y));
    g.bench_function("invert", |b| b.iter(|| x.invert()));
    g.bench_function("from_bytes_mod_order", |b| {
        b.iter(|| Scalar::from_bytes_mod_order(x.to_bytes()))
    });
    g.finish();
}

fn point_benches(c: &mut Criterion) {
    let mut g = c.benchmark_group("edwards");
    let mut rng = thread_rng();
    let k = Scalar::random(&mut rng);
    let p = &GENERATOR * &Scalar::random(&mut rng);
    let compressed = p.compress();

    g.bench_function("variable-base scalar mul", |b| b.iter(|| &p * &k));
    g.bench_function("fixed-base scalar mul", |b| b.iter(|| EdwardsPoint::mul_base(&k)));
    g.bench_function("add", |b| b.iter(|| &p + &GENERATOR));
    g.bench_function("compress", |b| b.iter(|| p.compress()));
    g.bench_function("decompress", |b| b.iter(|| compressed.decompress()));
    g.finish();
}

criterion_group!(benches, scalar_benches, point_benches);
criterion_main!(benches);
