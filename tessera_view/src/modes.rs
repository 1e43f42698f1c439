// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Aspect-preserving sizing strategy used by [`crate::fit_size`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Shrink to fit: the fitted box lies entirely inside the container.
    #[default]
    Contain,
    /// Grow to fill: the fitted box covers the whole container and may
    /// overflow it on one axis.
    Cover,
}

impl FitMode {
    /// Maps the `contain` flag of the host API onto a mode.
    #[must_use]
    pub fn from_contain(contain: bool) -> Self {
        if contain { Self::Contain } else { Self::Cover }
    }
}

/// Clamp behavior for translate updates relative to the content extents.
///
/// This is consulted by [`crate::Navigator::pan_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Apply the translate unconditionally.
    None,
    /// Reject, per axis, any translate that would let the scaled content
    /// stop covering the viewport.
    #[default]
    KeepCovered,
}
