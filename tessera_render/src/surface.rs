// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

/// Text measurements reported by a [`Surface`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the text.
    pub width: f64,
    /// Distance from the baseline to the top of the text's bounding box.
    pub ascent: f64,
}

/// Minimal immediate-mode 2D drawing surface.
///
/// This mirrors the subset of a canvas 2D context the renderer needs. The
/// current transform applies to every geometry call, including
/// [`Surface::clear_rect`].
pub trait Surface {
    /// Size of the backing store in device pixels.
    fn size(&self) -> Size;

    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Clear a rectangle to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Set the color used by [`Surface::fill_rect`].
    fn set_fill_color(&mut self, color: Color);

    /// Set the color used by [`Surface::stroke_rect`] and [`Surface::stroke_text`].
    fn set_stroke_color(&mut self, color: Color);

    /// Fill a rectangle with the current fill color.
    fn fill_rect(&mut self, rect: Rect);

    /// Outline a rectangle with the current stroke color.
    fn stroke_rect(&mut self, rect: Rect);

    /// Outline `text` with its alphabetic baseline starting at `origin`.
    fn stroke_text(&mut self, text: &str, origin: Point);

    /// Measure `text` in the current font.
    fn measure_text(&mut self, text: &str) -> TextMetrics;
}
