// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joystick panning.
//!
//! Feeds joystick knob deflections into `CanvasApi::pan`, with the
//! toolbar's zoom and step buttons around it.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p tessera_demos --example joystick_pan`

use kurbo::{Point, Size, Vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tessera::{CanvasApi, CanvasGeometry, GridCanvas};
use tessera_input::joystick::JoyStick;
use tessera_render::RecordingSurface;

fn main() {
    env_logger::init();

    let size = Size::new(400.0, 300.0);
    let Ok(mut canvas) = GridCanvas::<RecordingSurface, SmallRng>::new(
        CanvasGeometry::new(size, size, 1.0),
        SmallRng::seed_from_u64(42),
    ) else {
        eprintln!("cannot build canvas");
        return;
    };
    canvas.mount(RecordingSurface::new(size));

    // Panning is rejected until the content is larger than the view.
    for _ in 0..20 {
        canvas.zoom_in();
    }

    let mut stick = JoyStick::new(Vec2::new(40.0, 40.0));
    stick.press(Point::new(60.0, 60.0));
    for step in 1..=10 {
        let pos = Point::new(60.0 + f64::from(step) * 4.0, 60.0 + f64::from(step) * 2.0);
        if let Some(delta) = stick.move_to(pos) {
            canvas.pan(delta);
            println!(
                "knob {:?} -> translate {:?}",
                stick.knob_offset(),
                canvas.navigator().matrix().translation()
            );
        }
    }
    stick.release();

    canvas.move_left();
    canvas.move_right();
    canvas.zoom_out();
    println!("final {:?}", canvas.debug_info());
}
