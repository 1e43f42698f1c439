// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

use crate::surface::{Surface, TextMetrics};

/// A surface call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// [`Surface::set_transform`].
    SetTransform(Affine),
    /// [`Surface::clear_rect`].
    ClearRect(Rect),
    /// [`Surface::set_fill_color`].
    SetFillColor(Color),
    /// [`Surface::set_stroke_color`].
    SetStrokeColor(Color),
    /// [`Surface::fill_rect`].
    FillRect(Rect),
    /// [`Surface::stroke_rect`].
    StrokeRect(Rect),
    /// [`Surface::stroke_text`].
    StrokeText {
        /// Text that was drawn.
        text: String,
        /// Baseline origin.
        origin: Point,
    },
}

/// Surface that records calls instead of rasterizing.
///
/// Intended for tests and debugging that assert on the emitted calls and
/// the transform in effect. Text is measured with a fixed per-character
/// advance and a fixed ascent, so results are deterministic.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    char_advance: f64,
    ascent: f64,
    transform: Affine,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates a recording surface with a backing store of `size`.
    ///
    /// Text metrics default to a 6 px advance and a 7.2 px ascent.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            char_advance: 6.0,
            ascent: 7.2,
            transform: Affine::IDENTITY,
            ops: Vec::new(),
        }
    }

    /// Overrides the text metrics used by [`Surface::measure_text`].
    #[must_use]
    pub fn with_text_metrics(mut self, char_advance: f64, ascent: f64) -> Self {
        self.char_advance = char_advance;
        self.ascent = ascent;
        self
    }

    /// Changes the backing store size, as a canvas resize would.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// The transform currently in effect.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Calls recorded so far, in order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Returns and forgets the recorded calls.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.ops)
    }

    /// Forgets the recorded calls but keeps the current transform.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Number of recorded clears, i.e. repaints.
    #[must_use]
    pub fn repaint_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::ClearRect(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.ops.push(SurfaceOp::SetTransform(transform));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::ClearRect(rect));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetStrokeColor(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::StrokeRect(rect));
    }

    fn stroke_text(&mut self, text: &str, origin: Point) {
        self.ops.push(SurfaceOp::StrokeText {
            text: text.to_string(),
            origin,
        });
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f64 * self.char_advance,
            ascent: self.ascent,
        }
    }
}
