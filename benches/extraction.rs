use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use ravine::{ClusterExtraction, GradientExtractor, Reachability};

/// Synthetic reachability profile: `valleys` flat valleys separated by high
/// ridges, with small noise on every value.
fn synthetic_profile(valleys: usize, valley_width: usize, rng: &mut StdRng) -> Vec<Reachability> {
    let mut profile = Vec::new();
    for _ in 0..valleys {
        for _ in 0..4 {
            profile.push(Reachability::Finite(8.0 + rng.random::<f64>() * 0.2));
        }
        for _ in 0..valley_width {
            profile.push(Reachability::Finite(1.0 + rng.random::<f64>() * 0.2));
        }
    }
    for _ in 0..4 {
        profile.push(Reachability::Finite(8.0 + rng.random::<f64>() * 0.2));
    }
    profile
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    let mut rng = StdRng::seed_from_u64(42);
    let profile = synthetic_profile(50, 40, &mut rng);

    let extractor = GradientExtractor::new(10);

    group.bench_function("track_50_valleys", |b| {
        b.iter(|| extractor.track(black_box(&profile)).unwrap())
    });

    group.bench_function("extract_50_valleys", |b| {
        b.iter(|| extractor.extract(black_box(&profile)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
