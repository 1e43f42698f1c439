// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tessera_grid::{ContentDimensions, Grid};
use tessera_render::{HoverState, find_hovered_cell};
use tessera_view::{CanvasMatrix, Navigator};

fn grid(width: f64, height: f64) -> Grid {
    let dims = ContentDimensions::new(width, height).unwrap();
    Grid::generate(dims, &mut SmallRng::seed_from_u64(0x7e55))
}

fn bench_find_hovered(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/find_hovered_cell");
    for &(w, h) in &[(300.0, 150.0), (1280.0, 720.0), (3840.0, 2160.0)] {
        let grid = grid(w, h);
        let mut rng = SmallRng::seed_from_u64(11);
        let pointers: Vec<Point> = (0..256)
            .map(|_| Point::new(rng.random_range(0.0..w), rng.random_range(0.0..h)))
            .collect();
        let matrix = CanvasMatrix::IDENTITY;
        group.bench_function(BenchmarkId::from_parameter(grid.len()), |b| {
            let mut i = 0;
            b.iter(|| {
                let p = pointers[i % pointers.len()];
                i += 1;
                black_box(find_hovered_cell(p, grid.cells(), &matrix, 1.0, 1.0))
            });
        });
    }
    group.finish();
}

fn bench_hover_sweep(c: &mut Criterion) {
    // Pointer sweeping across a zoomed-in grid, as during a slow drag.
    let mut grid = grid(1280.0, 720.0);
    let mut nav = Navigator::new(grid.dimensions(), 1.0);
    for _ in 0..20 {
        nav.zoom_in();
    }
    let matrix = nav.matrix();
    let zoom = nav.zoom();
    c.bench_function("hit/hover_sweep", |b| {
        let mut hover = HoverState::new();
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 3.0) % 1280.0;
            let hit = find_hovered_cell(Point::new(x, 360.0), grid.cells(), &matrix, zoom, 1.0);
            black_box(hover.update(grid.cells_mut(), hit))
        });
    });
}

criterion_group!(benches, bench_find_hovered, bench_hover_sweep);
criterion_main!(benches);
