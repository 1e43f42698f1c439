// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless grid navigation.
//!
//! Drives a `GridCanvas` over a recording surface the way a browser host
//! would: hover, wheel zoom, a drag, and a click-to-zoom animation.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p tessera_demos --example headless_navigation`

use kurbo::{Point, Size};
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tessera::{CanvasApi, CanvasGeometry, GridCanvas};
use tessera_render::RecordingSurface;

fn main() {
    env_logger::init();

    // A 600x300 backing store shown at 300x150 CSS pixels on a 2x display.
    let client = Size::new(300.0, 150.0);
    let native = Size::new(600.0, 300.0);
    let geometry = CanvasGeometry::new(client, native, 2.0);

    let mut canvas: GridCanvas<RecordingSurface, SmallRng> =
        match GridCanvas::new(geometry, SmallRng::from_os_rng()) {
            Ok(canvas) => canvas,
            Err(err) => {
                eprintln!("cannot build canvas: {err}");
                return;
            }
        };
    canvas.mount(RecordingSurface::new(native));
    println!("{} cells", canvas.grid().len());

    let cursor = canvas.pointer_move(Point::new(20.0, 20.0));
    println!("hover at (20, 20): {:?}, cursor {cursor:?}", canvas.hovered());

    for _ in 0..5 {
        canvas.wheel(Point::new(150.0, 75.0), 100.0);
    }
    println!("after wheel: zoom {:.1}", canvas.navigator().zoom());

    canvas.pointer_down(Point::new(150.0, 75.0));
    canvas.pointer_move(Point::new(120.0, 60.0));
    canvas.pointer_up(Point::new(120.0, 60.0));
    println!(
        "after drag: translate {:?}",
        canvas.navigator().matrix().translation()
    );

    canvas.reset();
    if let Some(index) = canvas.click(Point::new(50.0, 50.0)) {
        let mut frames = 1;
        while canvas.on_frame() {
            frames += 1;
        }
        info!("zoomed to cell {} in {frames} frames", index + 1);
    }

    let info = canvas.debug_info();
    let repaints = canvas
        .surface()
        .map_or(0, RecordingSurface::repaint_count);
    println!(
        "zoom {:.1}, revision {}, {repaints} repaints",
        info.navigator.zoom, info.navigator.revision
    );
}
