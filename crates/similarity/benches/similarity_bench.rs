use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use similarity::{levenshtein, similarity};

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    for size in [8, 32, 128, 512].iter() {
        let a = "ab".repeat(*size / 2);
        let b = "ba".repeat(*size / 2);
        group.throughput(Throughput::Bytes(a.len() as u64));
        group.bench_function(format!("chars_{size}"), |bench| {
            bench.iter(|| similarity(black_box(&a), black_box(&b)))
        });
    }

    group.bench_function("typical_name_pair", |bench| {
        bench.iter(|| similarity(black_box("Jon Smyth"), black_box("John Smith")))
    });

    group.finish();
}

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    for size in [8, 32, 128, 512].iter() {
        let a = "ab".repeat(*size / 2);
        let b = "ba".repeat(*size / 2);
        group.throughput(Throughput::Bytes(a.len() as u64));
        group.bench_function(format!("chars_{size}"), |bench| {
            bench.iter(|| levenshtein(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_similarity, bench_levenshtein);
criterion_main!(benches);
