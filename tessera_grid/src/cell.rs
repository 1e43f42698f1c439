// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use peniko::Color;

/// Stroke colors assigned to generated cells.
pub const PALETTE: [Color; 4] = [
    Color::from_rgb8(0x35, 0xA2, 0x9F),
    Color::from_rgb8(0x7A, 0x9D, 0x54),
    Color::from_rgb8(0x46, 0x82, 0xA9),
    Color::from_rgb8(0x4F, 0xC0, 0xD0),
];

/// A single grid cell in untransformed content-space coordinates.
///
/// Geometry is fixed once the cell is generated. The fill is the only
/// mutable part: it is set while the cell is hovered and cleared otherwise.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    /// Left edge in content space.
    pub x: f64,
    /// Top edge in content space.
    pub y: f64,
    /// Width in content space.
    pub width: f64,
    /// Height in content space.
    pub height: f64,
    /// Fill color; `None` draws the cell as an outline.
    pub fill: Option<Color>,
    /// Outline color, also used as the highlight fill.
    pub stroke: Color,
}

impl Cell {
    /// Creates an unhighlighted cell.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, stroke: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
            stroke,
        }
    }

    /// Returns the cell bounds in content space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Returns `true` if the cell currently carries a highlight fill.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.fill.is_some()
    }

    /// Fills the cell with its own stroke color.
    pub fn highlight(&mut self) {
        self.fill = Some(self.stroke);
    }

    /// Removes the highlight fill.
    pub fn clear_highlight(&mut self) {
        self.fill = None;
    }
}
