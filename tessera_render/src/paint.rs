// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};
use tessera_grid::Cell;
use tessera_view::CanvasMatrix;

use crate::surface::Surface;

/// Applies `matrix` to `surface` and repaints every cell.
///
/// The surface is cleared over its full backing-store size, then each cell
/// is drawn in order: a filled rectangle when it has a fill, otherwise an
/// outline in its stroke color, followed by its 1-based sequence number
/// with the baseline placed `round(ascent)` below the cell's top edge.
///
/// Always a full repaint; the output depends only on the arguments, so two
/// calls with the same matrix and cells emit identical drawing.
pub fn render<S: Surface + ?Sized>(surface: &mut S, cells: &[Cell], matrix: &CanvasMatrix) {
    surface.set_transform(matrix.to_affine());
    let size = surface.size();
    surface.clear_rect(Rect::new(0.0, 0.0, size.width, size.height));

    for (index, cell) in cells.iter().enumerate() {
        surface.set_stroke_color(cell.stroke);
        match cell.fill {
            Some(fill) => {
                surface.set_fill_color(fill);
                surface.fill_rect(cell.rect());
            }
            None => surface.stroke_rect(cell.rect()),
        }

        let label = (index + 1).to_string();
        let metrics = surface.measure_text(&label);
        surface.stroke_text(&label, Point::new(cell.x, cell.y + metrics.ascent.round()));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Size};
    use tessera_grid::{Cell, PALETTE};
    use tessera_view::CanvasMatrix;

    use super::render;
    use crate::record::{RecordingSurface, SurfaceOp};

    fn cells() -> [Cell; 2] {
        let mut hovered = Cell::new(40.0, 10.0, 20.0, 20.0, PALETTE[1]);
        hovered.highlight();
        [Cell::new(10.0, 10.0, 20.0, 20.0, PALETTE[0]), hovered]
    }

    #[test]
    fn emits_transform_clear_then_cells() {
        let mut surface = RecordingSurface::new(Size::new(100.0, 50.0));
        let matrix = CanvasMatrix {
            translate_x: -4.0,
            ..CanvasMatrix::from_scale(2.0, 2.0)
        };
        render(&mut surface, &cells(), &matrix);

        let ops = surface.ops();
        assert_eq!(
            ops[0],
            SurfaceOp::SetTransform(Affine::new([2.0, 0.0, 0.0, 2.0, -4.0, 0.0]))
        );
        assert_eq!(ops[1], SurfaceOp::ClearRect(Rect::new(0.0, 0.0, 100.0, 50.0)));
        assert!(matches!(ops[2], SurfaceOp::SetStrokeColor(_)));
        assert_eq!(ops[3], SurfaceOp::StrokeRect(Rect::new(10.0, 10.0, 30.0, 30.0)));
        assert_eq!(
            ops[4],
            SurfaceOp::StrokeText {
                text: "1".into(),
                origin: Point::new(10.0, 17.0),
            }
        );
        assert!(matches!(ops[5], SurfaceOp::SetStrokeColor(_)));
        assert!(matches!(ops[6], SurfaceOp::SetFillColor(c) if c.to_rgba8() == PALETTE[1].to_rgba8()));
        assert_eq!(ops[7], SurfaceOp::FillRect(Rect::new(40.0, 10.0, 60.0, 30.0)));
        assert_eq!(ops.len(), 9);
        assert_eq!(surface.transform(), matrix.to_affine());
    }

    #[test]
    fn repaint_is_idempotent() {
        let mut surface = RecordingSurface::new(Size::new(100.0, 50.0));
        let matrix = CanvasMatrix::from_scale(1.5, 1.5);
        let cells = cells();

        render(&mut surface, &cells, &matrix);
        let first = surface.take_ops();
        render(&mut surface, &cells, &matrix);
        let second = surface.take_ops();

        assert_eq!(first, second);
    }

    #[test]
    fn baseline_uses_rounded_ascent() {
        let mut surface = RecordingSurface::new(Size::new(10.0, 10.0)).with_text_metrics(5.0, 8.6);
        render(&mut surface, &cells()[..1], &CanvasMatrix::IDENTITY);
        let text = surface
            .ops()
            .iter()
            .find_map(|op| match op {
                SurfaceOp::StrokeText { origin, .. } => Some(*origin),
                _ => None,
            })
            .unwrap();
        assert_eq!(text, Point::new(10.0, 19.0));
    }
}
