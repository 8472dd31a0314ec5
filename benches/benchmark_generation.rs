use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fortresscore::locator::ChunkPos;
use fortresscore::{generator, locator};
use rand::{rngs::SmallRng, Rng, SeedableRng};

pub fn benchmark_layout_generation(c: &mut Criterion) {
    let mut rng: SmallRng = SeedableRng::seed_from_u64(0x12345678);

    c.bench_function("fortress layout generation (reference)", |b| {
        b.iter(|| {
            let seed: i64 = rng.gen();
            let chunk = ChunkPos::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
            black_box(generator::generate(seed, chunk));
        })
    });
}

pub fn benchmark_window_search(c: &mut Criterion) {
    c.bench_function("fortress window search (radius 500 chunks)", |b| {
        b.iter(|| {
            black_box(locator::fortresses_in_window(0x12345678, ChunkPos::new(0, 0), 500));
        })
    });
}

criterion_group!(benches, benchmark_layout_generation, benchmark_window_search);
criterion_main!(benches);
