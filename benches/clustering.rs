use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dominance::{collect_samples, KmeansClusterer};
use rand::{rngs::StdRng, SeedableRng};

fn synthetic_samples(count: usize) -> Vec<(u8, u8, u8)> {
    (0..count)
        .map(|i| {
            (
                ((i * 37) % 256) as u8,
                ((i * 101) % 256) as u8,
                ((i * 13) % 256) as u8,
            )
        })
        .collect()
}

fn benchmark_clustering(c: &mut Criterion) {
    let samples = synthetic_samples(25_600);

    c.bench_function("cluster_25k_samples_5_clusters", |b| {
        b.iter(|| {
            let clusterer = KmeansClusterer::new(5, 10, StdRng::seed_from_u64(0));
            black_box(clusterer.cluster(black_box(&samples)))
        })
    });
}

fn benchmark_sampling(c: &mut Criterion) {
    // a fully opaque 320x320 RGBA buffer, the largest the builder feeds in
    // with the default resize dimension
    let rgba: Vec<u8> = (0..320usize * 320 * 4)
        .map(|i| if i % 4 == 3 { 255 } else { (i % 256) as u8 })
        .collect();

    c.bench_function("collect_samples_320x320_step_4", |b| {
        b.iter(|| black_box(collect_samples(black_box(&rgba), 4)))
    });
}

criterion_group!(benches, benchmark_clustering, benchmark_sampling);
criterion_main!(benches);
