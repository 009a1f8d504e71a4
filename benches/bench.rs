//! Criterion benchmarks for every engine over the shared input patterns.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use sort_test_tools::patterns;

type Engine<T> = fn(&mut [T]);

const PATTERNS: [(&str, fn(usize) -> Vec<i32>); 6] = [
    ("random", patterns::random),
    ("random_binary", patterns::random_binary),
    ("ascending", patterns::ascending),
    ("descending", patterns::descending),
    ("all_equal", patterns::all_equal),
    ("pipe_organ", patterns::pipe_organ),
];

const SIZES: [usize; 5] = [16, 256, 4_096, 65_536, 1_048_576];

// Quadratic engines stop here.
const MAX_QUADRATIC_LEN: usize = 4_096;

fn bench_engines<T: Copy>(
    c: &mut Criterion,
    type_name: &str,
    engines: &[(&str, Engine<T>, bool)],
    convert: fn(i32) -> T,
) {
    for (pattern_name, pattern_fn) in PATTERNS {
        let mut group = c.benchmark_group(format!("{type_name}_{pattern_name}"));

        for size in SIZES {
            group.throughput(Throughput::Elements(size as u64));
            let input: Vec<T> = pattern_fn(size).into_iter().map(convert).collect();

            for &(engine_name, engine, quadratic) in engines {
                if quadratic && size > MAX_QUADRATIC_LEN {
                    continue;
                }

                group.bench_with_input(
                    BenchmarkId::new(engine_name, size),
                    &input,
                    |b, input| {
                        b.iter_batched_ref(
                            || input.clone(),
                            |data| engine(black_box(data.as_mut_slice())),
                            BatchSize::LargeInput,
                        )
                    },
                );
            }
        }

        group.finish();
    }
}

fn bench_i32(c: &mut Criterion) {
    use sorting::stable::{insertion, powersort};
    use sorting::unstable::{quicksort, selection};

    let engines: [(&str, Engine<i32>, bool); 5] = [
        ("powersort", powersort::sort, false),
        ("quicksort", quicksort::sort, false),
        ("insertion", insertion::sort, true),
        ("selection", selection::sort, true),
        ("std_stable", <[i32]>::sort, false),
    ];

    bench_engines(c, "i32", &engines, |v| v);
}

fn bench_u64(c: &mut Criterion) {
    use sorting::stable::{insertion, powersort};
    use sorting::unstable::{quicksort, selection};

    let engines: [(&str, Engine<u64>, bool); 5] = [
        ("powersort", powersort::sort, false),
        ("quicksort", quicksort::sort, false),
        ("insertion", insertion::sort, true),
        ("selection", selection::sort, true),
        ("std_unstable", <[u64]>::sort_unstable, false),
    ];

    bench_engines(c, "u64", &engines, |v| v as u64);
}

fn bench_f64(c: &mut Criterion) {
    use sorting::stable::insertion;
    use sorting::unstable::{quicksort, selection};

    let engines: [(&str, Engine<f64>, bool); 4] = [
        ("quicksort", quicksort::sort, false),
        ("insertion", insertion::sort, true),
        ("selection", selection::sort, true),
        ("std_total_cmp", |v: &mut [f64]| v.sort_unstable_by(f64::total_cmp), false),
    ];

    bench_engines(c, "f64", &engines, |v| v as f64);
}

criterion_group!(benches, bench_i32, bench_u64, bench_f64);
criterion_main!(benches);
