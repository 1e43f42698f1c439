// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Grid: the cell grid drawn and navigated by Tessera.
//!
//! This crate is the content model only. It knows how many fixed-size cells
//! fit into a content area and lays them out row-major; it has no notion of
//! zoom, pan, or drawing. Those live in `tessera_view` and `tessera_render`.
//!
//! - [`ContentDimensions`]: validated content-space size of the drawable area.
//! - [`box_count`]: how many columns and rows of cells fit.
//! - [`generate_cells`]: row-major cell geometry starting at [`GRID_ORIGIN`].
//! - [`Grid`]: a generated batch of cells, replaced wholesale on resize.
//!
//! ## Minimal example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use tessera_grid::{ContentDimensions, Grid};
//!
//! let dims = ContentDimensions::new(100.0, 100.0).unwrap();
//! let mut rng = SmallRng::seed_from_u64(7);
//! let grid = Grid::generate(dims, &mut rng);
//!
//! assert_eq!(grid.len(), 9);
//! assert_eq!(grid.cells()[1].x, 40.0);
//! ```
//!
//! Cell stroke colors are drawn from [`PALETTE`] using a caller-supplied
//! random number generator, so generation is reproducible under a seeded RNG.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod dimensions;
mod layout;

pub use cell::{Cell, PALETTE};
pub use dimensions::{ContentDimensions, InvalidDimensions};
pub use layout::{
    BoxCount, CELL_HEIGHT, CELL_WIDTH, GAP, GRID_ORIGIN, Grid, box_count, generate_cells,
};
