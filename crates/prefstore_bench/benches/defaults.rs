//! Store-level benchmarks: selection and namespaced accessors.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prefstore_bench::random_value;
use prefstore_core::{BackendKind, Config, Namespace, UserDefaults};
use tempfile::TempDir;

/// Benchmark opening a store, probe included.
fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("open");
    group.sample_size(20);

    group.bench_function("persistent", |b| {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new()
            .persistent_path(temp_dir.path().join("prefs.json"))
            .session_path(temp_dir.path().join("session.json"));

        b.iter(|| {
            black_box(UserDefaults::open(black_box(&config)).unwrap());
        });
    });

    group.bench_function("memory", |b| {
        let config = Config::new().preferred(BackendKind::Memory);
        b.iter(|| {
            black_box(UserDefaults::open(black_box(&config)).unwrap());
        });
    });

    group.finish();
}

/// Benchmark the string accessors on the memory tier.
fn bench_accessors(c: &mut Criterion) {
    let mut group = c.benchmark_group("accessors");
    let value = random_value(32);

    group.bench_function("set", |b| {
        let mut store = UserDefaults::in_memory(Namespace::default());
        b.iter(|| store.set(black_box("volume"), black_box(&value)));
    });

    group.bench_function("get_hit", |b| {
        let mut store = UserDefaults::in_memory(Namespace::default());
        store.set("volume", &value);
        b.iter(|| black_box(store.get(black_box("volume"))));
    });

    group.bench_function("get_miss", |b| {
        let store = UserDefaults::in_memory(Namespace::default());
        b.iter(|| black_box(store.get(black_box("missing"))));
    });

    group.bench_function("set_integer", |b| {
        let mut store = UserDefaults::in_memory(Namespace::default());
        b.iter(|| store.set_integer(black_box("level"), black_box(42)));
    });

    group.bench_function("get_double", |b| {
        let mut store = UserDefaults::in_memory(Namespace::default());
        store.set_double("gamma", 2.2);
        b.iter(|| black_box(store.get_double(black_box("gamma"), 1.0)));
    });

    group.finish();
}

criterion_group!(benches, bench_open, bench_accessors);
criterion_main!(benches);
