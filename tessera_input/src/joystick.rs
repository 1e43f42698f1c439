// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joystick knob state: deflection from the press point drives panning.
//!
//! ## Usage
//!
//! 1) Call [`JoyStick::press`] on pointer down over the knob.
//! 2) On every pointer move call [`JoyStick::move_to`]; while pressed it
//!    returns the pan delta (deflection divided by [`JoyStick::divisor`]).
//!    Deflection is measured from the press point, not the previous move,
//!    so holding the knob away from center keeps panning on each move.
//! 3) Call [`JoyStick::release`] on pointer up or leave; the knob snaps back.
//!
//! [`JoyStick::knob_offset`] is where the host should draw the knob,
//! relative to the center of its track.

use kurbo::{Point, Vec2};

/// Deflection is divided by this before being used as a pan delta.
pub const DEFAULT_DIVISOR: f64 = 10.0;

/// A drag-driven joystick knob.
#[derive(Clone, Copy, Debug)]
pub struct JoyStick {
    half_knob: Vec2,
    divisor: f64,
    origin: Option<Point>,
    knob: Vec2,
}

impl JoyStick {
    /// Creates an idle joystick for a knob of the given size.
    #[must_use]
    pub fn new(knob_size: Vec2) -> Self {
        let half_knob = knob_size / 2.0;
        Self {
            half_knob,
            divisor: DEFAULT_DIVISOR,
            origin: None,
            knob: -half_knob,
        }
    }

    /// Replaces the deflection divisor. Non-positive values are ignored.
    #[must_use]
    pub fn with_divisor(mut self, divisor: f64) -> Self {
        if divisor.is_finite() && divisor > 0.0 {
            self.divisor = divisor;
        }
        self
    }

    /// The deflection divisor.
    #[must_use]
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Starts tracking from `pos`.
    pub fn press(&mut self, pos: Point) {
        self.origin = Some(pos);
    }

    /// Updates the knob and returns the pan delta, or `None` when not pressed.
    pub fn move_to(&mut self, pos: Point) -> Option<Vec2> {
        let origin = self.origin?;
        let deflection = pos - origin;
        self.knob = -self.half_knob + deflection;
        Some(deflection / self.divisor)
    }

    /// Stops tracking and recenters the knob.
    pub fn release(&mut self) {
        self.origin = None;
        self.knob = -self.half_knob;
    }

    /// Returns `true` while the knob is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.origin.is_some()
    }

    /// Knob translation relative to the track center.
    #[must_use]
    pub fn knob_offset(&self) -> Vec2 {
        self.knob
    }
}
