// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state: per-move deltas, plus click-versus-drag recognition.
//!
//! ## Usage
//!
//! 1) Call [`DragGesture::press`] on pointer down.
//! 2) On each move call [`DragGesture::move_to`] to get the delta since the
//!    previous position.
//! 3) On pointer up call [`DragGesture::release`]. It reports a
//!    [`Release::Click`] if the pointer never strayed further than the slop
//!    distance from the press point, else [`Release::DragEnd`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use tessera_input::drag::{DragGesture, Release};
//!
//! let mut drag = DragGesture::default();
//! drag.press(Point::new(10.0, 20.0));
//! assert_eq!(drag.move_to(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.release(Point::new(15.0, 25.0)), Some(Release::DragEnd));
//! ```

use kurbo::{Point, Vec2};

/// Movement (in pointer units) under which a press-release still counts as
/// a click.
pub const DEFAULT_SLOP: f64 = 4.0;

/// Outcome of releasing a pressed pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// The pointer stayed within the slop; a click at the release point.
    Click(Point),
    /// The pointer moved beyond the slop at some point during the press.
    DragEnd,
}

/// Tracks one pointer press for drag panning.
#[derive(Clone, Copy, Debug)]
pub struct DragGesture {
    slop: f64,
    origin: Option<Point>,
    last: Option<Point>,
    dragged: bool,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::with_slop(DEFAULT_SLOP)
    }
}

impl DragGesture {
    /// Creates an idle gesture with a custom click slop.
    #[must_use]
    pub fn with_slop(slop: f64) -> Self {
        Self {
            slop: slop.max(0.0),
            origin: None,
            last: None,
            dragged: false,
        }
    }

    /// Starts tracking from `pos`, discarding any previous press.
    pub fn press(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
        self.dragged = false;
    }

    /// Returns the movement since the previous position, or `None` when no
    /// press is active.
    pub fn move_to(&mut self, pos: Point) -> Option<Vec2> {
        let origin = self.origin?;
        let last = self.last.replace(pos).unwrap_or(origin);
        if (pos - origin).hypot() > self.slop {
            self.dragged = true;
        }
        Some(pos - last)
    }

    /// Total offset from the press point, or `None` when no press is active.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.origin.map(|origin| pos - origin)
    }

    /// Ends the press. Returns `None` if no press was active.
    pub fn release(&mut self, pos: Point) -> Option<Release> {
        let origin = self.origin.take()?;
        self.last = None;
        let dragged = core::mem::take(&mut self.dragged) || (pos - origin).hypot() > self.slop;
        Some(if dragged {
            Release::DragEnd
        } else {
            Release::Click(pos)
        })
    }

    /// Abandons the press without producing a release outcome.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.last = None;
        self.dragged = false;
    }

    /// Returns `true` while a press is active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.origin.is_some()
    }

    /// Returns `true` once the active press has moved beyond the slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some() && self.dragged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_gesture_ignores_moves() {
        let mut drag = DragGesture::default();
        assert_eq!(drag.move_to(Point::new(3.0, 3.0)), None);
        assert_eq!(drag.release(Point::new(3.0, 3.0)), None);
        assert!(!drag.is_pressed());
    }

    #[test]
    fn deltas_are_incremental() {
        let mut drag = DragGesture::default();
        drag.press(Point::new(0.0, 0.0));
        assert_eq!(drag.move_to(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.move_to(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.move_to(Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
        assert_eq!(
            drag.total_offset(Point::new(6.0, 7.0)),
            Some(Vec2::new(6.0, 7.0))
        );
    }

    #[test]
    fn small_wobble_is_a_click() {
        let mut drag = DragGesture::default();
        drag.press(Point::new(100.0, 100.0));
        drag.move_to(Point::new(101.0, 102.0));
        assert!(!drag.is_dragging());
        assert_eq!(
            drag.release(Point::new(101.0, 101.0)),
            Some(Release::Click(Point::new(101.0, 101.0)))
        );
    }

    #[test]
    fn excursion_beyond_slop_is_a_drag_even_if_it_returns() {
        let mut drag = DragGesture::default();
        drag.press(Point::new(100.0, 100.0));
        drag.move_to(Point::new(120.0, 100.0));
        assert!(drag.is_dragging());
        drag.move_to(Point::new(100.0, 100.0));
        assert_eq!(drag.release(Point::new(100.0, 100.0)), Some(Release::DragEnd));
        assert!(!drag.is_pressed());
    }

    #[test]
    fn press_restarts_and_cancel_clears() {
        let mut drag = DragGesture::default();
        drag.press(Point::new(0.0, 0.0));
        drag.move_to(Point::new(50.0, 0.0));
        drag.press(Point::new(10.0, 10.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.move_to(Point::new(11.0, 10.0)), Some(Vec2::new(1.0, 0.0)));

        drag.cancel();
        assert!(!drag.is_pressed());
        assert_eq!(drag.move_to(Point::new(12.0, 10.0)), None);
    }
}
