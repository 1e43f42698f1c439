// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Size};
use tessera_grid::{ContentDimensions, InvalidDimensions};

use crate::modes::FitMode;

/// Result of [`fit_size`]: the displayed content box inside a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitBox {
    /// Fitted width.
    pub width: f64,
    /// Fitted height.
    pub height: f64,
    /// Horizontal offset of the box inside the container.
    pub x: f64,
    /// Vertical offset of the box inside the container.
    pub y: f64,
}

impl FitBox {
    /// The fitted box as a rectangle in container coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Content dimensions for this box on a display with `dp_ratio`,
    /// rounded to whole device pixels.
    pub fn content_dimensions(&self, dp_ratio: f64) -> Result<ContentDimensions, InvalidDimensions> {
        let dp_ratio = sanitize_dp_ratio(dp_ratio);
        ContentDimensions::new(
            (self.width * dp_ratio).round(),
            (self.height * dp_ratio).round(),
        )
    }
}

/// Sizes `content` into `container` preserving the content aspect ratio.
///
/// With [`FitMode::Contain`] the result fits inside the container; with
/// [`FitMode::Cover`] it fills it. Either way the box is centered. A wide
/// content (relative to the container) fits width-first under `Contain`,
/// a narrow one fits width-first under `Cover`; otherwise height-first.
///
/// Degenerate sizes (any side non-positive or non-finite) yield an empty
/// box at the container center.
#[must_use]
pub fn fit_size(mode: FitMode, container: Size, content: Size) -> FitBox {
    let valid = |s: Size| s.width > 0.0 && s.height > 0.0 && s.is_finite();
    if !valid(container) || !valid(content) {
        return FitBox {
            width: 0.0,
            height: 0.0,
            x: container.width / 2.0,
            y: container.height / 2.0,
        };
    }

    let content_ratio = content.width / content.height;
    let container_ratio = container.width / container.height;
    let width_first = match mode {
        FitMode::Contain => content_ratio > container_ratio,
        FitMode::Cover => content_ratio < container_ratio,
    };

    let (width, height) = if width_first {
        (container.width, container.width / content_ratio)
    } else {
        (container.height * content_ratio, container.height)
    };

    FitBox {
        width,
        height,
        x: (container.width - width) / 2.0,
        y: (container.height - height) / 2.0,
    }
}

/// Correction between a canvas' display size and its backing store.
///
/// `client` is the CSS display size, `native` the backing-store size in
/// pixels. The result is the smaller of the per-axis ratios
/// `native / (client * dp_ratio)`, so `ratio * dp_ratio` is the number of
/// backing pixels per CSS pixel. It is `1.0` when the backing store is
/// exactly `client * dp_ratio`, and also when any size is degenerate.
#[must_use]
pub fn device_ratio(client: Size, native: Size, dp_ratio: f64) -> f64 {
    let dp_ratio = sanitize_dp_ratio(dp_ratio);
    let rx = native.width / (client.width * dp_ratio);
    let ry = native.height / (client.height * dp_ratio);
    let ratio = rx.min(ry);
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Replaces a missing or nonsensical device pixel ratio with `1.0`.
#[must_use]
pub fn sanitize_dp_ratio(dp_ratio: f64) -> f64 {
    if dp_ratio.is_finite() && dp_ratio > 0.0 {
        dp_ratio
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;

    #[test]
    fn contain_same_aspect_fills_container() {
        let fit = fit_size(
            FitMode::Contain,
            Size::new(400.0, 200.0),
            Size::new(800.0, 400.0),
        );
        assert_eq!(
            fit,
            FitBox {
                width: 400.0,
                height: 200.0,
                x: 0.0,
                y: 0.0
            }
        );
    }

    #[test]
    fn contain_letterboxes_wide_content() {
        let fit = fit_size(
            FitMode::Contain,
            Size::new(400.0, 400.0),
            Size::new(800.0, 400.0),
        );
        assert_eq!((fit.width, fit.height), (400.0, 200.0));
        assert_eq!((fit.x, fit.y), (0.0, 100.0));
        let r = fit.rect();
        assert!(r.x0 >= 0.0 && r.y0 >= 0.0 && r.x1 <= 400.0 && r.y1 <= 400.0);
    }

    #[test]
    fn contain_pillarboxes_tall_content() {
        let fit = fit_size(
            FitMode::Contain,
            Size::new(400.0, 400.0),
            Size::new(100.0, 200.0),
        );
        assert_eq!((fit.width, fit.height), (200.0, 400.0));
        assert_eq!((fit.x, fit.y), (100.0, 0.0));
    }

    #[test]
    fn cover_overflows_one_axis() {
        let fit = fit_size(
            FitMode::Cover,
            Size::new(400.0, 400.0),
            Size::new(800.0, 400.0),
        );
        assert_eq!((fit.width, fit.height), (800.0, 400.0));
        assert_eq!((fit.x, fit.y), (-200.0, 0.0));
    }

    #[test]
    fn degenerate_sizes_yield_empty_box() {
        let fit = fit_size(FitMode::Contain, Size::new(400.0, 200.0), Size::ZERO);
        assert_eq!((fit.width, fit.height), (0.0, 0.0));
        assert_eq!((fit.x, fit.y), (200.0, 100.0));
        assert!(fit.content_dimensions(1.0).is_err());
    }

    #[test]
    fn content_dimensions_snap_to_device_pixels() {
        let fit = FitBox {
            width: 100.3,
            height: 50.6,
            x: 0.0,
            y: 0.0,
        };
        let dims = fit.content_dimensions(2.0).unwrap();
        assert_eq!((dims.width(), dims.height()), (201.0, 101.0));
    }

    #[test]
    fn device_ratio_takes_smaller_axis() {
        let client = Size::new(100.0, 100.0);
        assert_eq!(device_ratio(client, Size::new(200.0, 200.0), 2.0), 1.0);
        assert_eq!(device_ratio(client, Size::new(100.0, 100.0), 2.0), 0.5);
        assert_eq!(device_ratio(client, Size::new(200.0, 100.0), 1.0), 1.0);
        assert_eq!(device_ratio(Size::ZERO, client, 1.0), 1.0);
    }

    #[test]
    fn dp_ratio_falls_back_to_one() {
        assert_eq!(sanitize_dp_ratio(0.0), 1.0);
        assert_eq!(sanitize_dp_ratio(f64::NAN), 1.0);
        assert_eq!(sanitize_dp_ratio(1.5), 1.5);
    }
}
