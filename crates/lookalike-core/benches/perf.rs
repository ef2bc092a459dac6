//! Performance benchmarks for lookalike-core.
//!
//! The engine sits on identifier-validation hot paths, so the interesting
//! numbers are the clean-input fast case and the fully-confusable worst
//! case, both per-call.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lookalike_core::{contains_confusables, rectify, skeleton};

fn bench_skeleton_clean(c: &mut Criterion) {
    let inputs = [
        "dave",
        "example.com",
        "a perfectly ordinary sentence with no lookalikes",
        "user_name_1234",
    ];

    c.bench_function("skeleton_clean", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(skeleton(input));
            }
        })
    });
}

fn bench_skeleton_confusable(c: &mut Criterion) {
    let inputs = [
        "egre\u{A731}\u{A731}",
        "t\u{0435}st",
        "\u{1D42B}\u{FF45}\u{A731}\u{1D601}",
        "\u{0440}\u{0430}ypal.com",
    ];

    c.bench_function("skeleton_confusable", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(skeleton(input));
            }
        })
    });
}

fn bench_containment(c: &mut Criterion) {
    c.bench_function("contains_confusables_clean", |b| {
        b.iter(|| black_box(contains_confusables("a perfectly ordinary sentence")))
    });
    c.bench_function("contains_confusables_hit", |b| {
        b.iter(|| black_box(contains_confusables("t\u{0435}st")))
    });
}

fn bench_rectify(c: &mut Criterion) {
    c.bench_function("rectify_mixed", |b| {
        b.iter(|| black_box(rectify("ze\u{200B}ro \u{0440}\u{0430}ypal \u{FB01}le")))
    });
}

criterion_group!(
    benches,
    bench_skeleton_clean,
    bench_skeleton_confusable,
    bench_containment,
    bench_rectify
);
criterion_main!(benches);
