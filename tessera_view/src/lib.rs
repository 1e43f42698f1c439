// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera View: transform state, viewport fitting, and navigation.
//!
//! This crate holds the 2D affine transform engine behind a Tessera canvas.
//! It is headless: it never draws, and only describes the matrix a drawing
//! surface should use. It provides:
//! - [`CanvasMatrix`] and [`TransformState`]: the affine matrix and its closed
//!   set of update kinds ([`TransformOp`]), with a pending flag that ties
//!   each update to exactly one present (apply matrix, then repaint).
//! - [`fit_size`] and [`device_ratio`]: object-fit sizing of the content box
//!   and the backing-store correction factor.
//! - [`Navigator`]: bounded zoom, pan clamped to the content extents, reset,
//!   and the frame-stepped [`PanToCell`] animation.
//!
//! Callers are expected to:
//! - Own a drawing surface and present the matrix whenever
//!   [`Navigator::take_pending`] yields one.
//! - Translate raw input (wheel, drag, joystick) into navigator calls.
//! - Call [`Navigator::tick`] once per display frame while
//!   [`Navigator::is_animating`] is `true`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use tessera_view::{FitMode, Navigator, fit_size};
//!
//! // Fit an 800x400 canvas into a 400x200 container on a 2x display.
//! let fit = fit_size(FitMode::Contain, Size::new(400.0, 200.0), Size::new(800.0, 400.0));
//! let content = fit.content_dimensions(2.0).unwrap();
//! let mut nav = Navigator::new(content, 2.0);
//!
//! nav.zoom_in_at(Point::new(120.0, 80.0));
//! nav.pan(Vec2::new(4.0, 4.0));
//!
//! if let Some(matrix) = nav.take_pending() {
//!     // surface.set_transform(matrix.to_affine()); then repaint.
//!     assert!(matrix.scale_x > 2.0);
//! }
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform; skew is representable but never produced by navigation.
//! - Translation is stored in device pixels. Screen positions (CSS pixels)
//!   divide it by the device pixel ratio on both axes.
//! - Nothing here returns an error: zoom saturates and out-of-bounds pans
//!   are dropped per axis.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod fit;
mod matrix;
mod modes;
mod navigator;

pub use animation::{AnimationFrame, PanToCell};
pub use fit::{FitBox, device_ratio, fit_size, sanitize_dp_ratio};
pub use matrix::{CanvasMatrix, TransformOp, TransformState};
pub use modes::{ClampMode, FitMode};
pub use navigator::{Navigator, NavigatorConfig, NavigatorDebugInfo};
