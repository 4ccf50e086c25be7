//! Data Holder Benchmarks
//!
//! Measures the cost of routing items through a holder compared with using
//! the memory queue directly.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dataholder::{DataHolder, MemoryQueue, Queue};

fn bench_direct_vs_holder(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_then_get");

    for count in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("direct", count), &count, |b, &count| {
            let queue = MemoryQueue::new(count);
            b.iter(|| {
                for i in 0..count as i64 {
                    queue.enqueue(black_box(i)).unwrap();
                }
                for _ in 0..count {
                    black_box(queue.dequeue().unwrap());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("holder", count), &count, |b, &count| {
            let queue = MemoryQueue::new(count);
            let holder = DataHolder::new(&queue);
            b.iter(|| {
                for i in 0..count as i64 {
                    holder.add_data(black_box(i)).unwrap();
                }
                for _ in 0..count {
                    black_box(holder.get_data().unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_direct_vs_holder);
criterion_main!(benches);
