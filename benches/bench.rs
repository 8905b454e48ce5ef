use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::patterns;

fn bench_sort<T>(
    c: &mut Criterion,
    test_size: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [T]),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{bench_name}-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || transform(pattern_provider(test_size)),
            |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn bench_comparison_sorts(c: &mut Criterion) {
    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 4] = [
        ("random", patterns::random),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("pipe_organ", patterns::pipe_organ),
    ];

    let identity: fn(Vec<i32>) -> Vec<i32> = |v| v;

    for test_size in [20, 200, 2_000] {
        for &(pattern_name, pattern_provider) in &pattern_providers {
            let sort_funcs: [(&str, fn(&mut [i32])); 10] = [
                ("shell_unstable", sort_classics::unstable::shell::sort),
                ("selection_unstable", sort_classics::unstable::selection::sort),
                ("heap_unstable", sort_classics::unstable::heap::sort),
                ("quick_unstable", sort_classics::unstable::quick::sort),
                ("bubble_unstable", sort_classics::unstable::bubble::sort),
                ("cocktail_unstable", sort_classics::unstable::cocktail::sort),
                ("gnome_unstable", sort_classics::unstable::gnome::sort),
                (
                    "binary_tree_unstable",
                    sort_classics::unstable::binary_tree::sort,
                ),
                ("insertion_stable", sort_classics::stable::insertion::sort),
                ("merge_stable", sort_classics::stable::merge::sort),
            ];

            for &(bench_name, sort_func) in &sort_funcs {
                bench_sort(
                    c,
                    test_size,
                    &identity,
                    pattern_name,
                    &pattern_provider,
                    bench_name,
                    sort_func,
                );
            }
        }
    }
}

fn bench_keyed_sorts(c: &mut Criterion) {
    let uniform: fn(usize) -> Vec<i32> = |size| patterns::random_uniform(size, 0..1_000);
    let identity: fn(Vec<i32>) -> Vec<i32> = |v| v;

    // Bucket wants keys in [0, 1).
    let to_unit_interval: fn(Vec<i32>) -> Vec<f64> = |v| {
        v.into_iter()
            .map(|val| (val as f64) / 1_000.0)
            .collect()
    };

    for test_size in [20, 200, 2_000] {
        bench_sort(
            c,
            test_size,
            &identity,
            "uniform_1k",
            &uniform,
            "counting_stable",
            |v| sort_classics::keyed::counting::sort(v).unwrap(),
        );

        bench_sort(
            c,
            test_size,
            &identity,
            "uniform_1k",
            &uniform,
            "radix_stable",
            |v| sort_classics::keyed::radix::sort(v).unwrap(),
        );

        bench_sort(
            c,
            test_size,
            &to_unit_interval,
            "uniform_1k",
            &uniform,
            "bucket",
            |v| {
                sort_classics::keyed::bucket::sort_by(v, |a, b| a.total_cmp(b)).unwrap();
            },
        );
    }
}

fn all_benches(c: &mut Criterion) {
    bench_comparison_sorts(c);
    bench_keyed_sorts(c);
}

criterion_group!(benches, all_benches);
criterion_main!(benches);
