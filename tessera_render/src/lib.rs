// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Render: draws the cell grid and maps pointers back onto it.
//!
//! - [`Surface`]: the immediate-mode drawing calls the renderer needs
//!   (transform, clear, fill/stroke rect, stroke/measure text).
//! - [`render`]: applies a [`tessera_view::CanvasMatrix`] and repaints
//!   every cell. There is no dirty-rect tracking; each call is a full repaint.
//! - [`find_hovered_cell`] and [`HoverState`]: screen-space hit testing and
//!   the hover highlight that feeds back into the next repaint.
//! - [`RecordingSurface`]: records calls instead of rasterizing, for tests
//!   and debugging.
//! - `WebCanvasSurface` (on `wasm32` only): a [`Surface`] over a DOM canvas.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use tessera_grid::generate_cells;
//! use tessera_render::{HoverState, RecordingSurface, find_hovered_cell, render};
//! use tessera_view::CanvasMatrix;
//!
//! let mut cells = generate_cells(3, 3, &mut SmallRng::seed_from_u64(1));
//! let matrix = CanvasMatrix::IDENTITY;
//! let mut hover = HoverState::new();
//!
//! let hit = find_hovered_cell(Point::new(45.0, 15.0), &cells, &matrix, 1.0, 1.0);
//! assert_eq!(hit, Some(1));
//! if hover.update(&mut cells, hit).is_change() {
//!     let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
//!     render(&mut surface, &cells, &matrix);
//!     assert_eq!(surface.repaint_count(), 1);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod paint;
mod record;
mod surface;
#[cfg(target_arch = "wasm32")]
mod web_canvas;

pub use hit::{HoverState, HoverTransition, cell_screen_rect, find_hovered_cell};
pub use paint::render;
pub use record::{RecordingSurface, SurfaceOp};
pub use surface::{Surface, TextMetrics};
#[cfg(target_arch = "wasm32")]
pub use web_canvas::WebCanvasSurface;
