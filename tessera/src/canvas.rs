// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Vec2};
use log::{debug, trace, warn};
use rand::Rng;
use tessera_grid::{Grid, InvalidDimensions};
use tessera_input::drag::{DragGesture, Release};
use tessera_input::wheel::WheelZoom;
use tessera_render::{HoverState, Surface, find_hovered_cell, render};
use tessera_view::{FitMode, Navigator, NavigatorConfig, NavigatorDebugInfo};

use crate::api::{CanvasApi, CursorHint};
use crate::geometry::CanvasGeometry;

/// A zoomable, pannable grid of cells bound to a drawing surface.
///
/// `GridCanvas` owns the [`Navigator`], the generated [`Grid`], and the
/// pointer state. Every change to the transform is presented exactly once:
/// the new matrix is applied to the surface and the grid repainted in the
/// same call.
///
/// While no surface is mounted, navigation still updates the transform but
/// nothing is drawn; mounting paints the current state.
pub struct GridCanvas<S, R> {
    navigator: Navigator,
    grid: Grid,
    hover: HoverState,
    drag: DragGesture,
    surface: Option<S>,
    geometry: CanvasGeometry,
    fit_mode: FitMode,
    rng: R,
}

impl<S, R> fmt::Debug for GridCanvas<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridCanvas")
            .field("navigator", &self.navigator)
            .field("cells", &self.grid.len())
            .field("hover", &self.hover)
            .field("drag", &self.drag)
            .field("mounted", &self.surface.is_some())
            .field("geometry", &self.geometry)
            .field("fit_mode", &self.fit_mode)
            .finish_non_exhaustive()
    }
}

impl<S: Surface, R: Rng> GridCanvas<S, R> {
    /// Creates an unmounted canvas with the default navigation config.
    pub fn new(geometry: CanvasGeometry, rng: R) -> Result<Self, InvalidDimensions> {
        Self::with_config(geometry, NavigatorConfig::default(), FitMode::default(), rng)
    }

    /// Creates an unmounted canvas, generating the grid for the fitted
    /// content box.
    pub fn with_config(
        geometry: CanvasGeometry,
        config: NavigatorConfig,
        fit_mode: FitMode,
        mut rng: R,
    ) -> Result<Self, InvalidDimensions> {
        let content = geometry.content_dimensions(fit_mode)?;
        let navigator = Navigator::with_config(content, geometry.dp_ratio, geometry.ratio(), config);
        let grid = Grid::generate(content, &mut rng);
        debug!(
            "grid canvas created: content {}x{}, {} cells",
            content.width(),
            content.height(),
            grid.len()
        );
        Ok(Self {
            navigator,
            grid,
            hover: HoverState::new(),
            drag: DragGesture::default(),
            surface: None,
            geometry,
            fit_mode,
            rng,
        })
    }

    /// Attaches a surface and paints the current state.
    pub fn mount(&mut self, surface: S) {
        debug!("surface mounted");
        self.surface = Some(surface);
        self.present();
    }

    /// Detaches and returns the surface, if any.
    pub fn unmount(&mut self) -> Option<S> {
        self.drag.cancel();
        self.surface.take()
    }

    /// Returns `true` if a surface is attached.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Adopts new host sizes: refits the content box, regenerates the grid,
    /// and repaints.
    ///
    /// On invalid dimensions the previous state is kept and the error
    /// returned.
    pub fn resize(&mut self, geometry: CanvasGeometry) -> Result<(), InvalidDimensions> {
        let content = match geometry.content_dimensions(self.fit_mode) {
            Ok(content) => content,
            Err(err) => {
                warn!("ignoring resize: {err}");
                return Err(err);
            }
        };
        self.geometry = geometry;
        self.navigator
            .set_device_ratios(geometry.dp_ratio, geometry.ratio());
        self.navigator.set_content(content);
        self.grid = Grid::generate(content, &mut self.rng);
        self.hover.forget();
        debug!(
            "resized: content {}x{}, {} cells",
            content.width(),
            content.height(),
            self.grid.len()
        );
        self.present();
        Ok(())
    }

    /// Presents a pending transform, if any. Returns whether a repaint ran.
    pub fn flush(&mut self) -> bool {
        if self.surface.is_none() || !self.navigator.transform().is_pending() {
            return false;
        }
        self.present()
    }

    /// Applies the current matrix and repaints unconditionally.
    pub fn repaint(&mut self) -> bool {
        self.present()
    }

    fn present(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        self.navigator.take_pending();
        let matrix = self.navigator.matrix();
        trace!(
            "present: revision {}, matrix {:?}",
            self.navigator.transform().revision(),
            matrix.as_coeffs()
        );
        render(surface, self.grid.cells(), &matrix);
        true
    }

    /// Pointer pressed on the canvas, at an offset in CSS pixels.
    ///
    /// Interrupts a running pan-to-cell animation.
    pub fn pointer_down(&mut self, pos: Point) {
        if self.navigator.cancel_animation() {
            debug!("animation interrupted by pointer");
        }
        self.drag.press(pos);
    }

    /// Pointer moved over the canvas.
    ///
    /// Drags pan the view; the hover highlight follows the pointer. At most
    /// one repaint runs per call.
    pub fn pointer_move(&mut self, pos: Point) -> CursorHint {
        let panned = self
            .drag
            .move_to(pos)
            .is_some_and(|delta| self.navigator.pan(-delta * self.navigator.dp_ratio()));
        let hovered = self.hover_at(Some(pos));
        if panned || hovered {
            self.present();
        }
        self.cursor()
    }

    /// Pointer released. A release without dragging counts as a click.
    ///
    /// Returns the index of the cell a zoom animation started toward.
    pub fn pointer_up(&mut self, pos: Point) -> Option<usize> {
        match self.drag.release(pos)? {
            Release::Click(at) => self.click(at),
            Release::DragEnd => None,
        }
    }

    /// Pointer left the canvas: ends any drag and clears the highlight.
    pub fn pointer_leave(&mut self) -> CursorHint {
        self.drag.cancel();
        if self.hover_at(None) {
            self.present();
        }
        self.cursor()
    }

    /// Wheel over the canvas: zooms one step anchored at `pos`.
    ///
    /// Returns whether the zoom changed.
    pub fn wheel(&mut self, pos: Point, delta_y: f64) -> bool {
        let changed = match WheelZoom::from_delta_y(delta_y) {
            WheelZoom::In => self.navigator.zoom_in_at(pos),
            WheelZoom::Out => self.navigator.zoom_out_at(pos),
        };
        if changed {
            self.navigator.cancel_animation();
            self.flush();
        }
        changed
    }

    /// Starts a zoom animation toward the cell under `pos`.
    ///
    /// Returns the cell index, or `None` if no surface is mounted, nothing
    /// is under the pointer, or the view is already fully zoomed in.
    pub fn click(&mut self, pos: Point) -> Option<usize> {
        if self.surface.is_none() {
            return None;
        }
        let index = self.hit(pos)?;
        let cell = self.grid.get(index)?;
        if !self.navigator.pan_to_cell(cell) {
            return None;
        }
        debug!("zooming toward cell {}", index + 1);
        Some(index)
    }

    /// Advances a running animation by one display frame and presents it.
    ///
    /// Returns `true` while more frames are needed.
    pub fn on_frame(&mut self) -> bool {
        if !self.navigator.tick() {
            return false;
        }
        self.flush();
        let animating = self.navigator.is_animating();
        if !animating {
            debug!("zoom animation finished at {}", self.navigator.zoom());
        }
        animating
    }

    fn hit(&self, pos: Point) -> Option<usize> {
        find_hovered_cell(
            pos,
            self.grid.cells(),
            &self.navigator.matrix(),
            self.navigator.zoom(),
            self.navigator.dp_ratio(),
        )
    }

    /// Updates the highlight; returns whether it changed.
    fn hover_at(&mut self, pos: Option<Point>) -> bool {
        if self.surface.is_none() || self.grid.is_empty() {
            return false;
        }
        let hit = pos.and_then(|p| self.hit(p));
        let transition = self.hover.update(self.grid.cells_mut(), hit);
        if transition.is_change() {
            trace!("hover {:?} -> {:?}", transition.left, transition.entered);
        }
        transition.is_change()
    }

    fn cursor(&self) -> CursorHint {
        if self.hover.current().is_some() {
            CursorHint::Pointer
        } else {
            CursorHint::Default
        }
    }

    /// Index of the highlighted cell, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hover.current()
    }

    /// The generated grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The navigation state.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Host sizes last adopted.
    #[must_use]
    pub fn geometry(&self) -> CanvasGeometry {
        self.geometry
    }

    /// The mounted surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the mounted surface, e.g. to resize its backing
    /// store before [`GridCanvas::resize`].
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Snapshot of the canvas state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CanvasDebugInfo {
        CanvasDebugInfo {
            navigator: self.navigator.debug_info(),
            cells: self.grid.len(),
            hovered: self.hover.current(),
            dragging: self.drag.is_dragging(),
            mounted: self.surface.is_some(),
        }
    }
}

impl<S: Surface, R: Rng> CanvasApi for GridCanvas<S, R> {
    fn zoom_in(&mut self) {
        self.navigator.cancel_animation();
        if self.navigator.zoom_in() {
            self.flush();
        }
    }

    fn zoom_out(&mut self) {
        self.navigator.cancel_animation();
        if self.navigator.zoom_out() {
            self.flush();
        }
    }

    fn pan(&mut self, delta: Vec2) {
        self.navigator.cancel_animation();
        if self.navigator.pan(delta) {
            self.flush();
        }
    }

    fn reset(&mut self) {
        debug!("reset to zoom {}", self.navigator.config().min_zoom);
        self.navigator.reset();
        self.flush();
    }

    fn move_left(&mut self) {
        self.navigator.cancel_animation();
        if self.navigator.move_left() {
            self.flush();
        }
    }

    fn move_right(&mut self) {
        self.navigator.cancel_animation();
        if self.navigator.move_right() {
            self.flush();
        }
    }
}

/// Debug snapshot of a [`GridCanvas`].
#[derive(Clone, Copy, Debug)]
pub struct CanvasDebugInfo {
    /// Navigation state.
    pub navigator: NavigatorDebugInfo,
    /// Number of generated cells.
    pub cells: usize,
    /// Highlighted cell.
    pub hovered: Option<usize>,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Whether a surface is attached.
    pub mounted: bool,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use tessera_render::RecordingSurface;

    use super::GridCanvas;
    use crate::{CanvasApi, CanvasGeometry, CursorHint};

    fn canvas() -> GridCanvas<RecordingSurface, SmallRng> {
        let geometry = CanvasGeometry::new(Size::new(300.0, 150.0), Size::new(300.0, 150.0), 1.0);
        GridCanvas::new(geometry, SmallRng::seed_from_u64(7)).unwrap()
    }

    fn mounted() -> GridCanvas<RecordingSurface, SmallRng> {
        let mut canvas = canvas();
        canvas.mount(RecordingSurface::new(Size::new(300.0, 150.0)));
        canvas
    }

    fn repaints(canvas: &GridCanvas<RecordingSurface, SmallRng>) -> usize {
        canvas.surface().map_or(0, RecordingSurface::repaint_count)
    }

    #[test]
    fn mount_paints_once() {
        let canvas = mounted();
        assert_eq!(repaints(&canvas), 1);
        assert!(!canvas.navigator().transform().is_pending());
    }

    #[test]
    fn unmounted_canvas_keeps_transform_pending() {
        let mut canvas = canvas();
        canvas.zoom_in();
        assert!(canvas.navigator().transform().is_pending());
        assert!(!canvas.flush());
        canvas.mount(RecordingSurface::new(Size::new(300.0, 150.0)));
        assert_eq!(repaints(&canvas), 1);
    }

    #[test]
    fn saturated_zoom_does_not_repaint() {
        let mut canvas = mounted();
        canvas.zoom_out();
        assert_eq!(repaints(&canvas), 1);
        canvas.zoom_in();
        assert_eq!(repaints(&canvas), 2);
    }

    #[test]
    fn hover_sets_pointer_cursor() {
        let mut canvas = mounted();
        assert_eq!(canvas.pointer_move(Point::new(20.0, 20.0)), CursorHint::Pointer);
        assert_eq!(canvas.hovered(), Some(0));
        assert_eq!(repaints(&canvas), 2);
        // Same cell: no repaint.
        canvas.pointer_move(Point::new(21.0, 21.0));
        assert_eq!(repaints(&canvas), 2);
        assert_eq!(canvas.pointer_move(Point::new(35.0, 20.0)), CursorHint::Default);
        assert_eq!(canvas.hovered(), None);
        assert_eq!(repaints(&canvas), 3);
    }

    #[test]
    fn hover_without_surface_is_ignored() {
        let mut canvas = canvas();
        assert_eq!(canvas.pointer_move(Point::new(20.0, 20.0)), CursorHint::Default);
        assert!(canvas.grid().cells().iter().all(|c| !c.is_highlighted()));
    }

    #[test]
    fn click_without_surface_is_ignored() {
        let mut canvas = canvas();
        assert_eq!(canvas.click(Point::new(20.0, 20.0)), None);
        canvas.pointer_down(Point::new(20.0, 20.0));
        assert_eq!(canvas.pointer_up(Point::new(20.0, 20.0)), None);
        assert!(!canvas.navigator().is_animating());
    }

    #[test]
    fn click_runs_animation_to_max_zoom() {
        let mut canvas = mounted();
        assert_eq!(canvas.click(Point::new(50.0, 20.0)), Some(1));
        let mut frames = 0;
        while canvas.on_frame() {
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(canvas.navigator().zoom(), 15.0);
        assert!(!canvas.navigator().is_animating());
        // A second click at max zoom starts nothing.
        assert_eq!(canvas.click(Point::new(50.0, 20.0)), None);
    }

    #[test]
    fn pointer_down_interrupts_animation() {
        let mut canvas = mounted();
        canvas.click(Point::new(20.0, 20.0));
        canvas.on_frame();
        canvas.pointer_down(Point::new(5.0, 5.0));
        assert!(!canvas.navigator().is_animating());
    }

    #[test]
    fn drag_pans_after_zooming_in() {
        let mut canvas = mounted();
        for _ in 0..10 {
            canvas.zoom_in();
        }
        let before = canvas.navigator().matrix().translation();
        canvas.pointer_down(Point::new(100.0, 100.0));
        canvas.pointer_move(Point::new(90.0, 95.0));
        let after = canvas.navigator().matrix().translation();
        assert_eq!(after - before, Vec2::new(-10.0, -5.0));
        assert_eq!(canvas.pointer_up(Point::new(90.0, 95.0)), None);
    }

    #[test]
    fn debug_info_reports_mount_and_cells() {
        let canvas = mounted();
        let info = canvas.debug_info();
        assert!(info.mounted);
        assert_eq!(info.cells, canvas.grid().len());
        assert_eq!(info.navigator.zoom, 1.0);
    }
}
