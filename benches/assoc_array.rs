use criterion::{Criterion, black_box, criterion_group, criterion_main};

use assoc_array::{AssocArray, DEFAULT_CAPACITY};
use std::collections::HashMap;

fn bench_set(c: &mut Criterion) {
    {
        let n = DEFAULT_CAPACITY;
        let mut group = c.benchmark_group("HashMap vs AssocArray (Set 16)");
        group.bench_function("std::collections::HashMap", |b| {
            b.iter(|| {
                let mut m = HashMap::with_capacity(n);
                for i in 0..n {
                    m.insert(black_box(i as i32), black_box(i as i32));
                }
                m
            })
        });

        group.bench_function("AssocArray<i32, i32>", |b| {
            b.iter(|| {
                let mut m = AssocArray::new();
                for i in 0..n {
                    m.set(black_box(i as i32), black_box(i as i32));
                }
                m
            })
        });
        group.finish();
    }

    {
        let n = 4 * DEFAULT_CAPACITY;
        let mut group = c.benchmark_group("HashMap vs AssocArray (Set 64)");
        group.bench_function("std::collections::HashMap", |b| {
            b.iter(|| {
                let mut m = HashMap::with_capacity(n);
                for i in 0..n {
                    m.insert(black_box(i as i32), black_box(i as i32));
                }
                m
            })
        });

        group.bench_function("AssocArray<i32, i32>", |b| {
            b.iter(|| {
                let mut m = AssocArray::new();
                for i in 0..n {
                    m.set(black_box(i as i32), black_box(i as i32));
                }
                m
            })
        });
        group.finish();
    }
}

fn bench_get(c: &mut Criterion) {
    let n = DEFAULT_CAPACITY;
    let mut group = c.benchmark_group("HashMap vs AssocArray (Get 16)");

    let mut m_std = HashMap::new();
    let mut m_assoc = AssocArray::new();
    for i in 0..n {
        m_std.insert(i as i32, i as i32);
        m_assoc.set(i as i32, i as i32);
    }

    group.bench_function("std::collections::HashMap", |b| {
        b.iter(|| {
            for i in 0..n {
                black_box(m_std.get(&black_box(i as i32)));
            }
        })
    });

    group.bench_function("AssocArray<i32, i32>", |b| {
        b.iter(|| {
            for i in 0..n {
                black_box(m_assoc.get(&black_box(i as i32)));
            }
        })
    });
    group.finish();
}

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("Growth Overhead (N=16 -> 17)");
    let n_total = DEFAULT_CAPACITY + 1;

    group.bench_function("AssocArray Expansion", |b| {
        b.iter(|| {
            let mut m = AssocArray::new();
            for i in 0..n_total {
                m.set(black_box(i as i32), black_box(i as i32));
            }
            m
        })
    });
    group.finish();
}

criterion_group!(benches, bench_set, bench_get, bench_growth);
criterion_main!(benches);
