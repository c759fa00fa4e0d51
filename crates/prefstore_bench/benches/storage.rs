//! Storage backend benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prefstore_bench::{prefixed_entries, random_value};
use prefstore_storage::{FileBackend, InMemoryBackend, KeyValueBackend};
use tempfile::TempDir;

/// Benchmark InMemoryBackend writes of varying value size.
fn bench_inmemory_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("inmemory_set");

    for size in [16, 256, 4096].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut backend = InMemoryBackend::new();
            let value = random_value(size);

            b.iter(|| {
                backend.set(black_box("CCUserDefault::k"), black_box(&value)).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark InMemoryBackend reads against a populated map.
fn bench_inmemory_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("inmemory_get");

    for count in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let mut backend = InMemoryBackend::new();
            let entries = prefixed_entries(count, 32);
            for (key, value) in &entries {
                backend.set(key, value).unwrap();
            }

            let mut idx = 0;
            b.iter(|| {
                let (key, _) = &entries[(idx * 7) % count];
                black_box(backend.get(black_box(key)).unwrap());
                idx += 1;
            });
        });
    }

    group.finish();
}

/// Benchmark FileBackend writes; each one rewrites the whole file.
fn bench_file_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_set");
    group.sample_size(20);

    for count in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let temp_dir = TempDir::new().unwrap();
            let mut backend = FileBackend::open(&temp_dir.path().join("prefs.json")).unwrap();
            for (key, value) in prefixed_entries(count, 32) {
                backend.set(&key, &value).unwrap();
            }
            // Unchanged values are not rewritten, so alternate two.
            let values = [random_value(32), random_value(32)];
            let mut idx = 0;

            b.iter(|| {
                let value = &values[idx % 2];
                backend.set(black_box("CCUserDefault::hot"), black_box(value)).unwrap();
                idx += 1;
            });
        });
    }

    group.finish();
}

/// Benchmark FileBackend reads; served from the loaded map.
fn bench_file_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_get");

    let temp_dir = TempDir::new().unwrap();
    let mut backend = FileBackend::open(&temp_dir.path().join("prefs.json")).unwrap();
    let entries = prefixed_entries(100, 32);
    for (key, value) in &entries {
        backend.set(key, value).unwrap();
    }

    group.bench_function("100_entries", |b| {
        let mut idx = 0;
        b.iter(|| {
            let (key, _) = &entries[(idx * 7) % entries.len()];
            black_box(backend.get(black_box(key)).unwrap());
            idx += 1;
        });
    });

    group.finish();
}

/// Benchmark loading an existing file.
fn bench_file_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_open");
    group.sample_size(20);

    for count in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("prefs.json");
            let mut backend = FileBackend::open(&path).unwrap();
            for (key, value) in prefixed_entries(count, 32) {
                backend.set(&key, &value).unwrap();
            }
            drop(backend);

            b.iter(|| {
                black_box(FileBackend::open(black_box(&path)).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_inmemory_set,
    bench_inmemory_get,
    bench_file_set,
    bench_file_get,
    bench_file_open,
);

criterion_main!(benches);
