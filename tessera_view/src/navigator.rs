// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use tessera_grid::{Cell, ContentDimensions};

use crate::animation::PanToCell;
use crate::fit::sanitize_dp_ratio;
use crate::matrix::{CanvasMatrix, TransformOp, TransformState};
use crate::modes::ClampMode;

/// Smallest accepted minimum zoom; keeps every scale factor positive.
const ZOOM_FLOOR: f64 = 1e-3;

/// Zoom and step parameters for a [`Navigator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigatorConfig {
    /// Lowest zoom level, also the level [`Navigator::reset`] returns to.
    pub min_zoom: f64,
    /// Highest zoom level, also the level [`Navigator::pan_to_cell`] ends at.
    pub max_zoom: f64,
    /// Zoom change per [`Navigator::zoom_in`] / [`Navigator::zoom_out`].
    pub zoom_step: f64,
    /// Zoom change per animation frame.
    pub animation_step: f64,
    /// Translation per [`Navigator::move_left`] / [`Navigator::move_right`],
    /// in device pixels.
    pub translate_step: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 15.0,
            zoom_step: 0.1,
            animation_step: 0.5,
            translate_step: 10.0,
        }
    }
}

impl NavigatorConfig {
    /// Orders the zoom range, keeps it positive, and replaces unusable steps
    /// with the defaults.
    #[must_use]
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let (min_zoom, max_zoom) = if self.min_zoom <= self.max_zoom {
            (self.min_zoom, self.max_zoom)
        } else {
            (self.max_zoom, self.min_zoom)
        };
        let min_zoom = if min_zoom.is_finite() {
            min_zoom.max(ZOOM_FLOOR)
        } else {
            defaults.min_zoom
        };
        let max_zoom = if max_zoom.is_finite() {
            max_zoom.max(min_zoom)
        } else {
            defaults.max_zoom.max(min_zoom)
        };
        let step = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            min_zoom,
            max_zoom,
            zoom_step: step(self.zoom_step, defaults.zoom_step),
            animation_step: step(self.animation_step, defaults.animation_step),
            translate_step: step(self.translate_step, defaults.translate_step),
        }
    }
}

/// Zoom and pan controller over a [`TransformState`].
///
/// `Navigator` owns the zoom level and is the only writer of the transform.
/// Scale is always `ratio * dp_ratio * zoom`, where `dp_ratio` is the
/// display's device pixel ratio and `ratio` the backing-store correction
/// from [`crate::device_ratio`]. Translation is kept in device pixels.
///
/// Every operation returns whether it dispatched a transform update. All
/// out-of-range requests saturate or are ignored; nothing here fails.
/// Callers present the result through [`Navigator::take_pending`].
#[derive(Clone, Debug)]
pub struct Navigator {
    config: NavigatorConfig,
    content: ContentDimensions,
    dp_ratio: f64,
    ratio: f64,
    zoom: f64,
    transform: TransformState,
    animation: Option<PanToCell>,
}

impl Navigator {
    /// Creates a navigator with the default configuration and no
    /// backing-store correction.
    #[must_use]
    pub fn new(content: ContentDimensions, dp_ratio: f64) -> Self {
        Self::with_config(content, dp_ratio, 1.0, NavigatorConfig::default())
    }

    /// Creates a navigator at the minimum zoom with an untranslated matrix.
    #[must_use]
    pub fn with_config(
        content: ContentDimensions,
        dp_ratio: f64,
        ratio: f64,
        config: NavigatorConfig,
    ) -> Self {
        let config = config.normalized();
        let dp_ratio = sanitize_dp_ratio(dp_ratio);
        let ratio = sanitize_dp_ratio(ratio);
        let baseline = ratio * dp_ratio;
        Self {
            config,
            content,
            dp_ratio,
            ratio,
            zoom: config.min_zoom,
            transform: TransformState::new(CanvasMatrix::from_scale(baseline, baseline)),
            animation: None,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> NavigatorConfig {
        self.config
    }

    /// Current zoom level.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Device pixel ratio.
    #[must_use]
    pub fn dp_ratio(&self) -> f64 {
        self.dp_ratio
    }

    /// Backing-store correction factor.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Scale at the minimum zoom, `ratio * dp_ratio`.
    #[must_use]
    pub fn baseline_scale(&self) -> f64 {
        self.ratio * self.dp_ratio
    }

    /// Content dimensions used for pan clamping.
    #[must_use]
    pub fn content(&self) -> ContentDimensions {
        self.content
    }

    /// Current matrix.
    #[must_use]
    pub fn matrix(&self) -> CanvasMatrix {
        self.transform.matrix()
    }

    /// Read-only view of the transform state.
    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    /// Drains the pending flag; see [`TransformState::take_pending`].
    pub fn take_pending(&mut self) -> Option<CanvasMatrix> {
        self.transform.take_pending()
    }

    /// Replaces the zoom range, normalizing it, and re-clamps the zoom.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.config = NavigatorConfig {
            min_zoom,
            max_zoom,
            ..self.config
        }
        .normalized();
        let clamped = self.zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        if clamped != self.zoom {
            self.zoom = clamped;
            self.apply_zoom_scale();
        }
    }

    /// Replaces the content dimensions after a resize and rescales.
    pub fn set_content(&mut self, content: ContentDimensions) {
        self.content = content;
        self.apply_zoom_scale();
    }

    /// Replaces the device pixel ratio and backing-store correction.
    pub fn set_device_ratios(&mut self, dp_ratio: f64, ratio: f64) {
        self.dp_ratio = sanitize_dp_ratio(dp_ratio);
        self.ratio = sanitize_dp_ratio(ratio);
        self.apply_zoom_scale();
    }

    /// Zooms in by one step, saturating at the maximum.
    pub fn zoom_in(&mut self) -> bool {
        self.step_zoom(self.config.zoom_step, None)
    }

    /// Zooms out by one step, saturating at the minimum.
    pub fn zoom_out(&mut self) -> bool {
        self.step_zoom(-self.config.zoom_step, None)
    }

    /// Zooms in by one step, anchored at a pointer offset in CSS pixels.
    ///
    /// Besides the scale, the translation is set to
    /// `-anchor * dp_ratio * (zoom - min_zoom)` so the content under the
    /// pointer stays put.
    pub fn zoom_in_at(&mut self, anchor: Point) -> bool {
        self.step_zoom(self.config.zoom_step, Some(anchor))
    }

    /// Zooms out by one step, anchored at a pointer offset in CSS pixels.
    pub fn zoom_out_at(&mut self, anchor: Point) -> bool {
        self.step_zoom(-self.config.zoom_step, Some(anchor))
    }

    fn step_zoom(&mut self, delta: f64, anchor: Option<Point>) -> bool {
        let (min, max) = (self.config.min_zoom, self.config.max_zoom);
        let mut new_zoom = (self.zoom + delta).clamp(min, max);
        // Absorb accumulated rounding so repeated steps land on the bounds.
        let snap = self.config.zoom_step * 1e-6;
        if (max - new_zoom).abs() < snap {
            new_zoom = max;
        } else if (new_zoom - min).abs() < snap {
            new_zoom = min;
        }
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        self.zoom = new_zoom;
        self.apply_zoom_scale();
        if let Some(anchor) = anchor {
            let k = self.dp_ratio * (new_zoom - self.config.min_zoom);
            self.transform
                .dispatch(TransformOp::translate(-anchor.to_vec2() * k));
        }
        true
    }

    fn apply_zoom_scale(&mut self) {
        self.transform
            .dispatch(TransformOp::scale(self.baseline_scale() * self.zoom));
    }

    /// Pans by `delta` device pixels, rejecting out-of-bounds axes.
    ///
    /// Equivalent to [`Navigator::pan_with`] with [`ClampMode::KeepCovered`].
    pub fn pan(&mut self, delta: Vec2) -> bool {
        self.pan_with(delta, ClampMode::KeepCovered)
    }

    /// Pans by `delta` device pixels under the given clamp mode.
    ///
    /// The proposed translation on each axis is `current - delta`. Under
    /// [`ClampMode::KeepCovered`] an axis only moves if the proposal is
    /// negative and the scaled content still reaches past the content
    /// extent, i.e. `proposal < 0 && extent * scale + proposal > extent`;
    /// otherwise that axis keeps its translation. Axes are independent.
    ///
    /// Note that when the scaled content is no larger than the content
    /// extent (at or below the baseline zoom with `ratio * dp_ratio <= 1`)
    /// no pan passes the check.
    pub fn pan_with(&mut self, delta: Vec2, mode: ClampMode) -> bool {
        let m = self.transform.matrix();
        let axis = |current: f64, d: f64, extent: f64, scale: f64| {
            let proposed = current - d;
            let accept = match mode {
                ClampMode::None => proposed.is_finite(),
                ClampMode::KeepCovered => proposed < 0.0 && extent * scale + proposed > extent,
            };
            if accept { proposed } else { current }
        };
        let x = axis(m.translate_x, delta.x, self.content.width(), m.scale_x);
        let y = axis(m.translate_y, delta.y, self.content.height(), m.scale_y);
        if x == m.translate_x && y == m.translate_y {
            return false;
        }
        self.transform
            .dispatch(TransformOp::translate(Vec2::new(x, y)));
        true
    }

    /// Shifts the translation left by the configured step, without clamping.
    pub fn move_left(&mut self) -> bool {
        self.pan_with(Vec2::new(self.config.translate_step, 0.0), ClampMode::None)
    }

    /// Shifts the translation right by the configured step, without clamping.
    pub fn move_right(&mut self) -> bool {
        self.pan_with(Vec2::new(-self.config.translate_step, 0.0), ClampMode::None)
    }

    /// Returns to the minimum zoom with the baseline scale and no
    /// translation. Any running animation is dropped.
    pub fn reset(&mut self) {
        self.animation = None;
        self.zoom = self.config.min_zoom;
        self.transform
            .dispatch(TransformOp::reset(self.baseline_scale()));
    }

    /// Starts an animated zoom toward `cell`, replacing any running one.
    ///
    /// Returns `false`, and starts nothing, when already at the maximum zoom.
    pub fn pan_to_cell(&mut self, cell: &Cell) -> bool {
        let anim = PanToCell::new(
            cell.rect().origin(),
            self.zoom,
            self.transform.matrix().translation(),
            self.config.max_zoom,
            self.config.animation_step,
        );
        self.animation = (!anim.is_finished()).then_some(anim);
        self.animation.is_some()
    }

    /// Returns `true` while a [`Navigator::pan_to_cell`] animation runs.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Stops a running animation where it is. Returns whether one was running.
    pub fn cancel_animation(&mut self) -> bool {
        self.animation.take().is_some()
    }

    /// Advances the running animation by one display frame.
    ///
    /// Returns `false` when no animation is running; the animation ends by
    /// itself after its final frame.
    pub fn tick(&mut self) -> bool {
        let Some(anim) = self.animation.as_mut() else {
            return false;
        };
        let Some(frame) = anim.next_frame(self.zoom, self.transform.matrix().translation()) else {
            self.animation = None;
            return false;
        };
        if anim.is_finished() {
            self.animation = None;
        }
        self.zoom = frame.zoom;
        self.apply_zoom_scale();
        self.transform.dispatch(TransformOp::translate(frame.translate));
        true
    }

    /// Maps a content-space point to screen (CSS pixel) space:
    /// `p * zoom + translate / dp_ratio` on both axes.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Point {
        let t = self.transform.matrix().translation() / self.dp_ratio;
        Point::new(pt.x * self.zoom + t.x, pt.y * self.zoom + t.y)
    }

    /// Maps a screen (CSS pixel) point back into content space.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        let t = self.transform.matrix().translation() / self.dp_ratio;
        Point::new((pt.x - t.x) / self.zoom, (pt.y - t.y) / self.zoom)
    }

    /// Maps a content-space rectangle to screen space.
    #[must_use]
    pub fn content_rect_to_screen(&self, rect: Rect) -> Rect {
        let p0 = self.content_to_screen(rect.origin());
        let p1 = self.content_to_screen(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current navigation state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> NavigatorDebugInfo {
        NavigatorDebugInfo {
            content: self.content,
            zoom: self.zoom,
            min_zoom: self.config.min_zoom,
            max_zoom: self.config.max_zoom,
            dp_ratio: self.dp_ratio,
            ratio: self.ratio,
            matrix: self.transform.matrix(),
            revision: self.transform.revision(),
            animating: self.animation.is_some(),
        }
    }
}

/// Debug snapshot of a [`Navigator`] state.
#[derive(Clone, Copy, Debug)]
pub struct NavigatorDebugInfo {
    /// Content dimensions used for clamping.
    pub content: ContentDimensions,
    /// Current zoom level.
    pub zoom: f64,
    /// Minimum zoom level.
    pub min_zoom: f64,
    /// Maximum zoom level.
    pub max_zoom: f64,
    /// Device pixel ratio.
    pub dp_ratio: f64,
    /// Backing-store correction factor.
    pub ratio: f64,
    /// Current matrix.
    pub matrix: CanvasMatrix,
    /// Transform revision counter.
    pub revision: u64,
    /// Whether a pan-to-cell animation is running.
    pub animating: bool,
}
