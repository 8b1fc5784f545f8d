use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::prelude::SliceRandom;
use rand::rng;
use singly_list::linked_list::LinkedList;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn filled(len: usize) -> LinkedList<usize> {
    let mut list = LinkedList::new();
    for i in 0..len {
        list.add_front(i);
    }
    list
}

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("add_front", len), |b| {
            b.iter(|| black_box(filled(len)))
        });

        // add_back walks the whole chain, so keep it to the smaller sizes.
        if len <= 1_000 {
            group.bench_function(BenchmarkId::new("add_back", len), |b| {
                b.iter(|| {
                    let mut list = LinkedList::new();
                    for i in 0..len {
                        list.add_back(i);
                    }
                    black_box(list)
                })
            });
        }
    }

    group.finish();
}

fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for len in SIZES {
        let list = filled(len);
        let mut targets: Vec<usize> = (0..len).collect();
        targets.shuffle(&mut rng());
        targets.truncate(64);

        group.throughput(Throughput::Elements(targets.len() as u64));

        group.bench_function(BenchmarkId::new("find", len), |b| {
            b.iter(|| {
                for target in &targets {
                    black_box(list.find(target));
                }
            })
        });

        group.bench_function(BenchmarkId::new("remove", len), |b| {
            b.iter_with_setup(
                || filled(len),
                |mut list| {
                    for target in &targets {
                        let value = list.remove(target).ok();
                        black_box(value);
                    }
                    list
                },
            )
        });
    }

    group.finish();
}

criterion_group!(benches, insert_benchmark, search_benchmark);
criterion_main!(benches);
