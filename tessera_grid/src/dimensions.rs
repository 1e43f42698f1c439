// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

use crate::layout::{BoxCount, box_count};

/// Content-space size of the drawable area.
///
/// Both sides are finite and strictly positive; [`ContentDimensions::new`]
/// is the only way to build one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentDimensions {
    width: f64,
    height: f64,
}

impl ContentDimensions {
    /// Validates and wraps a content size.
    pub fn new(width: f64, height: f64) -> Result<Self, InvalidDimensions> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(InvalidDimensions { width, height })
        }
    }

    /// Content width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Content height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the dimensions as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Number of cells that fit into these dimensions.
    #[must_use]
    pub fn box_count(&self) -> BoxCount {
        box_count(self.width, self.height)
    }
}

impl TryFrom<Size> for ContentDimensions {
    type Error = InvalidDimensions;

    fn try_from(size: Size) -> Result<Self, Self::Error> {
        Self::new(size.width, size.height)
    }
}

/// Error returned when content dimensions are zero, negative, or not finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidDimensions {
    /// The rejected width.
    pub width: f64,
    /// The rejected height.
    pub height: f64,
}

impl fmt::Display for InvalidDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "content dimensions {}x{} must be finite and positive",
            self.width, self.height
        )
    }
}

impl core::error::Error for InvalidDimensions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(ContentDimensions::new(0.0, 10.0).is_err());
        assert!(ContentDimensions::new(10.0, -1.0).is_err());
        assert!(ContentDimensions::new(f64::NAN, 10.0).is_err());
        assert!(ContentDimensions::new(f64::INFINITY, 10.0).is_err());
    }

    #[test]
    fn accepts_positive_sizes() {
        let dims = ContentDimensions::try_from(Size::new(800.0, 400.0)).unwrap();
        assert_eq!(dims.width(), 800.0);
        assert_eq!(dims.height(), 400.0);
        assert_eq!(dims.size(), Size::new(800.0, 400.0));
    }

    #[test]
    fn error_reports_rejected_values() {
        let err = ContentDimensions::new(0.0, 5.0).unwrap_err();
        assert_eq!(err, InvalidDimensions { width: 0.0, height: 5.0 });
    }
}
