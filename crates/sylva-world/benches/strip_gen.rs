use criterion::{Criterion, black_box, criterion_group, criterion_main};

use sylva_geom::Viewport;
use sylva_world::{WorldGen, WorldGenParams, WorldSeed};

fn bench_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_gen");
    let wg = WorldGen::new(
        WorldSeed(0xC0FFEE),
        WorldGenParams::default(),
        Viewport::new(1024.0, 600.0),
    );
    group.bench_function("terrain_one_tile", |b| {
        let mut x = 0;
        b.iter(|| {
            let out = wg.terrain.create_in_range(x, x + 30);
            x += 30;
            black_box(out);
        })
    });
    group.bench_function("terrain_full_viewport", |b| {
        b.iter(|| black_box(wg.terrain.create_in_range(-512, 512)))
    });
    group.bench_function("flora_full_viewport", |b| {
        b.iter(|| black_box(wg.flora.create_in_range(-512, 512)))
    });
    group.finish();
}

criterion_group!(benches, bench_strip);
criterion_main!(benches);
