// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use tessera_grid::{ContentDimensions, InvalidDimensions};
use tessera_view::{FitBox, FitMode, device_ratio, fit_size, sanitize_dp_ratio};

/// Sizes of the host canvas, as reported by the environment on mount and
/// on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    /// Display size of the canvas in CSS pixels.
    pub client: Size,
    /// Backing-store size of the canvas in pixels.
    pub native: Size,
    /// Device pixel ratio of the display.
    pub dp_ratio: f64,
}

impl CanvasGeometry {
    /// Bundles the host sizes; a missing device pixel ratio becomes `1.0`.
    #[must_use]
    pub fn new(client: Size, native: Size, dp_ratio: f64) -> Self {
        Self {
            client,
            native,
            dp_ratio: sanitize_dp_ratio(dp_ratio),
        }
    }

    /// The displayed content box: the backing store fitted into the client
    /// area.
    #[must_use]
    pub fn fit(&self, mode: FitMode) -> FitBox {
        fit_size(mode, self.client, self.native)
    }

    /// Backing-store correction factor; see [`tessera_view::device_ratio`].
    #[must_use]
    pub fn ratio(&self) -> f64 {
        device_ratio(self.client, self.native, self.dp_ratio)
    }

    /// Content dimensions in whole device pixels.
    pub fn content_dimensions(&self, mode: FitMode) -> Result<ContentDimensions, InvalidDimensions> {
        self.fit(mode).content_dimensions(self.dp_ratio)
    }
}
