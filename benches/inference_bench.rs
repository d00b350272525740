// ABOUTME: Criterion benchmark for the inference engine forward pass
// ABOUTME: Measures single-call latency of the fixed 5-32-1 network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fitclass_server::intelligence::engine::{Network, EXPECTED_WEIGHT_COUNT};
use fitclass_server::intelligence::{normalizer, predict_with_network};
use fitclass_server::models::PredictionInput;

fn bench_forward_pass(c: &mut Criterion) {
    let weights: Vec<f32> = (0..EXPECTED_WEIGHT_COUNT)
        .map(|i| ((i % 17) as f32 - 8.0) / 16.0)
        .collect();
    let network = Network::from_flat_weights(&weights).expect("valid weights");
    let features = [0.3f32, -0.2, 0.1, 0.0, 0.5];

    c.bench_function("forward_pass", |b| {
        b.iter(|| network.infer(black_box(&features)).expect("finite output"));
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let network = Network::from_flat_weights(&vec![0.05; EXPECTED_WEIGHT_COUNT]).expect("valid");
    let input = PredictionInput {
        name: "Bench".into(),
        age: 30,
        height_cm: 175.0,
        weight_kg: 70.0,
        situps_count: 40,
        broad_jump_cm: 220.0,
    };

    c.bench_function("normalize", |b| {
        b.iter(|| normalizer::normalize(black_box(&input)));
    });

    c.bench_function("predict_and_recommend", |b| {
        b.iter(|| predict_with_network(black_box(&network), black_box(&input)));
    });
}

criterion_group!(benches, bench_forward_pass, bench_full_pipeline);
criterion_main!(benches);
