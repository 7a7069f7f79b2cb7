use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poolkeep::{
    host::{InMemoryHost, Prototype},
    loader::TemplateCatalog,
    pools::Pool,
    registry::PoolRegistry,
};
use std::rc::Rc;

fn benchmark_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pool");

    for batch in [8, 32, 128].iter() {
        group.bench_with_input(
            BenchmarkId::new("obtain_free_tracked", batch),
            batch,
            |b, &batch| {
                let host = Rc::new(InMemoryHost::new());
                let mut pool = Pool::new("bench", host, Prototype::new("bench"), batch, true);

                b.iter(|| {
                    let mut out = Vec::with_capacity(batch);
                    for _ in 0..batch {
                        out.push(pool.obtain());
                    }
                    // Reverse order keeps the active-set search short.
                    while let Some(instance) = out.pop() {
                        let _ = pool.free(instance);
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("obtain_free_all", batch),
            batch,
            |b, &batch| {
                let host = Rc::new(InMemoryHost::new());
                let mut pool = Pool::new("bench", host, Prototype::new("bench"), batch, true);

                b.iter(|| {
                    for _ in 0..batch {
                        pool.obtain();
                    }
                    pool.free_all();
                });
            },
        );
    }

    group.finish();
}

fn benchmark_cold_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("ColdGrowth");

    for batch in [8, 64].iter() {
        group.bench_with_input(BenchmarkId::new("grow_release", batch), batch, |b, &batch| {
            let host = Rc::new(InMemoryHost::new());
            let mut pool = Pool::new("bench", host, Prototype::new("bench"), 0, true);

            b.iter(|| {
                for _ in 0..batch {
                    pool.obtain();
                }
                pool.free_all();
                pool.release(false);
            });
        });
    }

    group.finish();
}

fn benchmark_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("PoolRegistry");

    group.bench_function("obtain_free_by_key", |b| {
        let host = Rc::new(InMemoryHost::new());
        let catalog = TemplateCatalog::new()
            .with("bench", Prototype::new("a"))
            .with("bench", Prototype::new("b"))
            .with("bench", Prototype::new("c"));
        let mut registry = PoolRegistry::new(host, catalog, "bench");
        registry.preload(16, true).unwrap();

        b.iter(|| {
            for key in ["a", "b", "c"] {
                if let Ok(instance) = registry.obtain(key) {
                    let _ = registry.free_instance(instance);
                }
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pool,
    benchmark_cold_growth,
    benchmark_registry
);
criterion_main!(benches);
