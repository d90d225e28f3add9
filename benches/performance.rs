// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for keyspell
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Chromatic scale spelling across all roots
//! - Major scale and chord derivation
//! - Selection model updates

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use keyspell::music::{Chord, ChordQuality, ChromaticScale, MajorScale, CONVENTIONAL_ROOTS};
use keyspell::selection::ScaleSelector;

/// Benchmark chromatic spelling (core lookup)
fn bench_chromatic(c: &mut Criterion) {
    c.bench_function("chromatic_all_roots", |b| {
        b.iter(|| {
            for root in CONVENTIONAL_ROOTS {
                black_box(ChromaticScale::new(black_box(root)).ok());
            }
        })
    });
}

/// Benchmark major scale derivation
fn bench_major_scale(c: &mut Criterion) {
    c.bench_function("major_scale_all_roots", |b| {
        b.iter(|| {
            for root in CONVENTIONAL_ROOTS {
                black_box(MajorScale::new(black_box(root)).ok());
            }
        })
    });
}

/// Benchmark chord derivation per quality
fn bench_chords(c: &mut Criterion) {
    let mut group = c.benchmark_group("chord");

    for quality in ChordQuality::ALL {
        group.bench_with_input(
            BenchmarkId::new("all_roots", quality.name()),
            &quality,
            |b, &quality| {
                b.iter(|| {
                    for root in CONVENTIONAL_ROOTS {
                        black_box(Chord::new(root, black_box(quality)).ok());
                    }
                })
            },
        );
    }

    group.finish();
}

/// Benchmark a full pass over the root picker, as a front end would trigger
fn bench_selector(c: &mut Criterion) {
    c.bench_function("selector_cycle_roots", |b| {
        let mut selector = ScaleSelector::default();
        let rows = selector.roots().len();
        b.iter(|| {
            for row in 0..rows {
                black_box(selector.select_root_row(row).ok());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_chromatic,
    bench_major_scale,
    bench_chords,
    bench_selector
);
criterion_main!(benches);
