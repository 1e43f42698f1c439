// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tessera_grid::{ContentDimensions, Grid};
use tessera_render::{RecordingSurface, render};
use tessera_view::CanvasMatrix;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/generate");
    for &(w, h) in &[(300.0, 150.0), (1280.0, 720.0), (3840.0, 2160.0)] {
        let dims = ContentDimensions::new(w, h).unwrap();
        group.bench_function(BenchmarkId::from_parameter(dims.box_count().total()), |b| {
            let mut rng = SmallRng::seed_from_u64(1);
            b.iter(|| black_box(Grid::generate(dims, &mut rng)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/full_repaint");
    for &(w, h) in &[(300.0, 150.0), (1280.0, 720.0)] {
        let dims = ContentDimensions::new(w, h).unwrap();
        let grid = Grid::generate(dims, &mut SmallRng::seed_from_u64(2));
        let matrix = CanvasMatrix::from_scale(2.0, 2.0);
        group.bench_function(BenchmarkId::from_parameter(grid.len()), |b| {
            b.iter_batched(
                || RecordingSurface::new(Size::new(w, h)),
                |mut surface| {
                    render(&mut surface, grid.cells(), &matrix);
                    surface
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_render);
criterion_main!(benches);
