// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera: a zoomable, pannable grid of cells on a 2D canvas.
//!
//! [`GridCanvas`] ties the workspace crates together:
//! - [`tessera_grid`] generates the cells for the fitted content box.
//! - [`tessera_view`] owns the affine matrix and the zoom, pan, and
//!   pan-to-cell navigation.
//! - [`tessera_render`] repaints through a [`Surface`] and tracks the hover
//!   highlight.
//! - [`tessera_input`] turns wheel and drag input into navigation.
//!
//! Hosts feed pointer and wheel events in CSS pixels, call
//! [`GridCanvas::on_frame`] once per display frame while it returns `true`,
//! and drive the toolbar through [`CanvasApi`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use tessera::{CanvasApi, CanvasGeometry, CursorHint, GridCanvas};
//! use tessera_render::RecordingSurface;
//!
//! let geometry = CanvasGeometry::new(Size::new(300.0, 150.0), Size::new(300.0, 150.0), 1.0);
//! let mut canvas = GridCanvas::new(geometry, SmallRng::seed_from_u64(3)).unwrap();
//! canvas.mount(RecordingSurface::new(Size::new(300.0, 150.0)));
//!
//! assert_eq!(canvas.pointer_move(Point::new(20.0, 20.0)), CursorHint::Pointer);
//! canvas.zoom_in();
//!
//! canvas.click(Point::new(20.0, 20.0));
//! while canvas.on_frame() {}
//! assert_eq!(canvas.navigator().zoom(), 15.0);
//! ```
//!
//! Diagnostics go through the [`log`] facade: `debug` for lifecycle events
//! (mount, resize, click-to-zoom), `trace` for every present.
//!
//! This crate is `no_std`.

#![no_std]

mod api;
mod canvas;
mod geometry;

pub use api::{CanvasApi, CursorHint};
pub use canvas::{CanvasDebugInfo, GridCanvas};
pub use geometry::CanvasGeometry;

pub use tessera_grid::{Cell, ContentDimensions, Grid, InvalidDimensions};
pub use tessera_render::{RecordingSurface, Surface};
pub use tessera_view::{FitMode, Navigator, NavigatorConfig};
