// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel direction to zoom direction.

/// Zoom direction requested by a wheel event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WheelZoom {
    /// Zoom in one step.
    In,
    /// Zoom out one step.
    Out,
}

impl WheelZoom {
    /// A positive vertical delta zooms in; anything else zooms out.
    #[must_use]
    pub fn from_delta_y(delta_y: f64) -> Self {
        if delta_y > 0.0 { Self::In } else { Self::Out }
    }
}
