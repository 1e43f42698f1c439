// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space hit testing and hover highlight tracking.
//!
//! ## Usage
//!
//! 1) On pointer move, call [`find_hovered_cell`] with the pointer offset in
//!    CSS pixels and the current matrix and zoom.
//! 2) Feed the result to [`HoverState::update`], which moves the highlight
//!    fill between cells and reports what changed.
//! 3) Repaint if the returned [`HoverTransition`] is a change.
//! 4) When the cells are regenerated, call [`HoverState::forget`].

use kurbo::{Point, Rect};
use tessera_grid::Cell;
use tessera_view::CanvasMatrix;

/// Screen-space box of `cell` under the given zoom and translation.
///
/// `x = cell.x * zoom + translate_x / dp_ratio`, likewise for `y`; the size
/// is the cell size times `zoom`.
#[must_use]
pub fn cell_screen_rect(cell: &Cell, matrix: &CanvasMatrix, zoom: f64, dp_ratio: f64) -> Rect {
    let x = cell.x * zoom + matrix.translate_x / dp_ratio;
    let y = cell.y * zoom + matrix.translate_y / dp_ratio;
    Rect::new(x, y, x + cell.width * zoom, y + cell.height * zoom)
}

/// Returns the index of the first cell whose screen box strictly contains
/// `pointer`.
///
/// Edges are excluded, so a pointer on a cell border or in a gap hits
/// nothing. Cells are tested in generation order.
#[must_use]
pub fn find_hovered_cell(
    pointer: Point,
    cells: &[Cell],
    matrix: &CanvasMatrix,
    zoom: f64,
    dp_ratio: f64,
) -> Option<usize> {
    cells.iter().position(|cell| {
        let r = cell_screen_rect(cell, matrix, zoom, dp_ratio);
        pointer.x > r.x0 && pointer.x < r.x1 && pointer.y > r.y0 && pointer.y < r.y1
    })
}

/// Highlight change produced by [`HoverState::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTransition {
    /// Cell whose highlight was cleared.
    pub left: Option<usize>,
    /// Cell that became highlighted.
    pub entered: Option<usize>,
}

impl HoverTransition {
    /// Returns `true` if any highlight changed.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.left.is_some() || self.entered.is_some()
    }
}

/// Tracks which cell carries the hover highlight.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverState {
    current: Option<usize>,
}

impl HoverState {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted cell, if any.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Moves the highlight to `hit`.
    ///
    /// `None` clears the previous highlight. A hit on the already
    /// highlighted cell changes nothing. Indices outside `cells` are
    /// treated as no hit.
    pub fn update(&mut self, cells: &mut [Cell], hit: Option<usize>) -> HoverTransition {
        let hit = hit.filter(|&i| i < cells.len());
        if hit == self.current {
            return HoverTransition::default();
        }
        let left = self.current.take();
        if let Some(cell) = left.and_then(|i| cells.get_mut(i)) {
            cell.clear_highlight();
        }
        if let Some(cell) = hit.and_then(|i| cells.get_mut(i)) {
            cell.highlight();
        }
        self.current = hit;
        HoverTransition { left, entered: hit }
    }

    /// Drops the tracked index without touching any cell, for use after the
    /// cells were replaced.
    pub fn forget(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use tessera_grid::generate_cells;
    use tessera_view::CanvasMatrix;

    use super::*;

    #[test]
    fn hit_inside_single_cell() {
        let cells = generate_cells(3, 3, &mut SmallRng::seed_from_u64(3));
        let m = CanvasMatrix::IDENTITY;
        assert_eq!(find_hovered_cell(Point::new(15.0, 15.0), &cells, &m, 1.0, 1.0), Some(0));
        assert_eq!(find_hovered_cell(Point::new(45.0, 15.0), &cells, &m, 1.0, 1.0), Some(1));
        assert_eq!(find_hovered_cell(Point::new(15.0, 45.0), &cells, &m, 1.0, 1.0), Some(3));
    }

    #[test]
    fn edges_and_gaps_miss() {
        let cells = generate_cells(3, 3, &mut SmallRng::seed_from_u64(3));
        let m = CanvasMatrix::IDENTITY;
        for p in [
            Point::new(10.0, 15.0),
            Point::new(30.0, 15.0),
            Point::new(35.0, 15.0),
            Point::new(15.0, 30.0),
            Point::new(5.0, 5.0),
        ] {
            assert_eq!(find_hovered_cell(p, &cells, &m, 1.0, 1.0), None, "{p:?}");
        }
    }

    #[test]
    fn hit_respects_zoom_and_translate() {
        let cells = generate_cells(3, 3, &mut SmallRng::seed_from_u64(3));
        let m = CanvasMatrix {
            translate_x: -40.0,
            translate_y: -20.0,
            ..CanvasMatrix::from_scale(4.0, 4.0)
        };
        // dp 2: cell 1 spans x in (40*2 - 20, 60*2 - 20) = (60, 100),
        // y in (10*2 - 10, 30*2 - 10) = (10, 50).
        assert_eq!(find_hovered_cell(Point::new(61.0, 11.0), &cells, &m, 2.0, 2.0), Some(1));
        assert_eq!(find_hovered_cell(Point::new(60.0, 11.0), &cells, &m, 2.0, 2.0), None);
    }

    #[test]
    fn no_cells_means_no_hit() {
        assert_eq!(
            find_hovered_cell(Point::new(1.0, 1.0), &[], &CanvasMatrix::IDENTITY, 1.0, 1.0),
            None
        );
    }

    #[test]
    fn hover_moves_highlight() {
        let mut cells = generate_cells(2, 1, &mut SmallRng::seed_from_u64(5));
        let mut hover = HoverState::new();

        let t = hover.update(&mut cells, Some(0));
        assert_eq!(t, HoverTransition { left: None, entered: Some(0) });
        assert!(cells[0].is_highlighted());

        assert!(!hover.update(&mut cells, Some(0)).is_change());

        let t = hover.update(&mut cells, Some(1));
        assert_eq!(t, HoverTransition { left: Some(0), entered: Some(1) });
        assert!(!cells[0].is_highlighted());
        assert!(cells[1].is_highlighted());

        let t = hover.update(&mut cells, None);
        assert_eq!(t, HoverTransition { left: Some(1), entered: None });
        assert!(cells.iter().all(|c| !c.is_highlighted()));

        assert!(!hover.update(&mut cells, None).is_change());
    }

    #[test]
    fn out_of_range_hit_is_ignored() {
        let mut cells = generate_cells(1, 1, &mut SmallRng::seed_from_u64(5));
        let mut hover = HoverState::new();
        assert!(!hover.update(&mut cells, Some(7)).is_change());
        assert_eq!(hover.current(), None);
    }
}
