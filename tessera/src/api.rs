// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Imperative navigation commands exposed to the hosting UI shell.
///
/// The shell (zoom buttons, joystick, arrow buttons) holds a reference to
/// an implementor and calls these directly. Every command that changes the
/// transform is followed by exactly one repaint before it returns.
pub trait CanvasApi {
    /// Zoom in one step around the content origin.
    fn zoom_in(&mut self);

    /// Zoom out one step around the content origin.
    fn zoom_out(&mut self);

    /// Pan by `delta` device pixels, clamped to the content extents.
    fn pan(&mut self, delta: Vec2);

    /// Return to the minimum zoom with no translation.
    fn reset(&mut self);

    /// Shift left by the configured step, without clamping.
    fn move_left(&mut self);

    /// Shift right by the configured step, without clamping.
    fn move_right(&mut self);
}

/// Cursor the host should show over the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorHint {
    /// Not over a cell.
    #[default]
    Default,
    /// Over a cell; clicking zooms toward it.
    Pointer,
}
