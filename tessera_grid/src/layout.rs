// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use rand::Rng;

use crate::cell::{Cell, PALETTE};
use crate::dimensions::ContentDimensions;

/// Width of every cell in content space.
pub const CELL_WIDTH: f64 = 20.0;
/// Height of every cell in content space.
pub const CELL_HEIGHT: f64 = 20.0;
/// Spacing between neighbouring cells, and around the grid edge.
pub const GAP: f64 = 10.0;
/// Content-space position of the first cell.
pub const GRID_ORIGIN: Point = Point::new(10.0, 10.0);

/// Columns and rows of cells that fit into a content area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxCount {
    /// Cells per row.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
}

impl BoxCount {
    /// Total number of cells.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }
}

/// Computes how many cells fit in `content_width` x `content_height`.
///
/// Each axis holds `floor((extent - GAP) / (CELL + GAP))` cells. Extents
/// smaller than one cell (including negative or NaN extents) yield zero.
#[must_use]
pub fn box_count(content_width: f64, content_height: f64) -> BoxCount {
    BoxCount {
        cols: fit_along(content_width, CELL_WIDTH),
        rows: fit_along(content_height, CELL_HEIGHT),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "The value is floored and `as` saturates negatives and NaN to zero."
)]
fn fit_along(extent: f64, cell: f64) -> usize {
    ((extent - GAP) / (cell + GAP)).floor() as usize
}

/// Lays out `cols` x `rows` cells row-major from [`GRID_ORIGIN`].
///
/// Cells advance by `CELL_WIDTH + GAP` horizontally and `CELL_HEIGHT + GAP`
/// vertically. Each cell gets a stroke color drawn uniformly from
/// [`PALETTE`] and starts without a fill.
pub fn generate_cells<R: Rng + ?Sized>(cols: usize, rows: usize, rng: &mut R) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(cols.saturating_mul(rows));
    let mut y = GRID_ORIGIN.y;
    for _ in 0..rows {
        let mut x = GRID_ORIGIN.x;
        for _ in 0..cols {
            let stroke = PALETTE[rng.random_range(0..PALETTE.len())];
            cells.push(Cell::new(x, y, CELL_WIDTH, CELL_HEIGHT, stroke));
            x += CELL_WIDTH + GAP;
        }
        y += CELL_HEIGHT + GAP;
    }
    cells
}

/// A generated batch of cells for one set of content dimensions.
///
/// The batch is never edited cell by cell; a resize builds a new `Grid`.
#[derive(Clone, Debug)]
pub struct Grid {
    dimensions: ContentDimensions,
    count: BoxCount,
    cells: Vec<Cell>,
}

impl Grid {
    /// Generates the grid that fits `dimensions`.
    pub fn generate<R: Rng + ?Sized>(dimensions: ContentDimensions, rng: &mut R) -> Self {
        let count = dimensions.box_count();
        let cells = generate_cells(count.cols, count.rows, rng);
        Self {
            dimensions,
            count,
            cells,
        }
    }

    /// The content dimensions this grid was generated for.
    #[must_use]
    pub fn dimensions(&self) -> ContentDimensions {
        self.dimensions
    }

    /// Columns and rows in this grid.
    #[must_use]
    pub fn count(&self) -> BoxCount {
        self.count
    }

    /// Cells in generation (row-major) order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the cells, for toggling highlight fills.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Returns the cell at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell fits the content area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
