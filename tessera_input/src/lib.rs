// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Input: small state machines that turn raw pointer events into
//! navigation requests.
//!
//! - [`drag`]: press/move/release on the canvas, yielding per-move deltas and
//!   telling a click apart from a drag.
//! - [`joystick`]: a spring-back knob whose deflection from the press point
//!   drives panning.
//! - [`wheel`]: maps wheel deltas to a zoom direction.
//!
//! None of these know about the transform; they only produce vectors and
//! decisions that the host forwards to `tessera_view::Navigator`.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use tessera_input::joystick::JoyStick;
//!
//! let mut stick = JoyStick::new(Vec2::new(40.0, 40.0));
//! stick.press(Point::new(100.0, 100.0));
//! let pan = stick.move_to(Point::new(130.0, 90.0)).unwrap();
//! assert_eq!(pan, Vec2::new(3.0, -1.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod joystick;
pub mod wheel;
