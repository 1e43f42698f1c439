// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Zoom level and translation produced by one animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    /// Zoom level for this frame.
    pub zoom: f64,
    /// Translation (device pixels) for this frame.
    pub translate: Vec2,
}

/// Linear zoom-in toward a cell, advanced once per display frame.
///
/// The zoom grows by a fixed step each frame and the translation moves by
/// an equal share of the remaining distance to the target, so both arrive
/// together on the final frame, which lands exactly on `max_zoom` and the
/// target. There is no easing. After the final frame
/// [`PanToCell::next_frame`] returns `None` forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanToCell {
    target: Vec2,
    max_zoom: f64,
    zoom_step: f64,
    translate_step: Vec2,
    steps_left: u32,
}

impl PanToCell {
    /// Plans an animation from the current zoom and translation.
    ///
    /// The target translation for a cell whose top-left corner is
    /// `cell_origin` is `-cell_origin * (max_zoom - 1)`.
    #[must_use]
    pub fn new(
        cell_origin: Point,
        start_zoom: f64,
        start_translate: Vec2,
        max_zoom: f64,
        zoom_step: f64,
    ) -> Self {
        let target = -cell_origin.to_vec2() * (max_zoom - 1.0);
        let steps_left = step_count(max_zoom - start_zoom, zoom_step);
        let translate_step = if steps_left > 0 {
            (target - start_translate) / f64::from(steps_left)
        } else {
            Vec2::ZERO
        };
        Self {
            target,
            max_zoom,
            zoom_step,
            translate_step,
            steps_left,
        }
    }

    /// Translation reached on the final frame.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Frames still to run.
    #[must_use]
    pub fn steps_left(&self) -> u32 {
        self.steps_left
    }

    /// Returns `true` once no further frames will be produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps_left == 0
    }

    /// Computes the next frame from the current zoom and translation.
    pub fn next_frame(&mut self, zoom: f64, translate: Vec2) -> Option<AnimationFrame> {
        if self.steps_left == 0 {
            return None;
        }
        self.steps_left -= 1;
        if self.steps_left == 0 {
            return Some(AnimationFrame {
                zoom: self.max_zoom,
                translate: self.target,
            });
        }
        Some(AnimationFrame {
            zoom: (zoom + self.zoom_step).min(self.max_zoom),
            translate: translate + self.translate_step,
        })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Zoom ranges are small; the step count is far below u32::MAX."
)]
fn step_count(distance: f64, step: f64) -> u32 {
    if !(step.is_finite() && step > 0.0 && distance.is_finite() && distance > 0.0) {
        return 0;
    }
    (distance / step).ceil() as u32
}
