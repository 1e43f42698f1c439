// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};

/// 2D affine matrix in canvas `setTransform` terms.
///
/// Maps content space to device pixels as
/// `x' = scale_x * x + skew_y * y + translate_x` and
/// `y' = skew_x * x + scale_y * y + translate_y`, i.e. the coefficient
/// order `[scale_x, skew_x, skew_y, scale_y, translate_x, translate_y]`.
///
/// Scale factors are always strictly positive. Navigation never touches
/// the skew fields; they are kept for generality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasMatrix {
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Horizontal skew (canvas `b` coefficient).
    pub skew_x: f64,
    /// Vertical skew (canvas `c` coefficient).
    pub skew_y: f64,
    /// Horizontal translation in device pixels.
    pub translate_x: f64,
    /// Vertical translation in device pixels.
    pub translate_y: f64,
}

impl CanvasMatrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_scale(1.0, 1.0);

    /// A pure scale with no skew and no translation.
    #[must_use]
    pub const fn from_scale(scale_x: f64, scale_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            skew_x: 0.0,
            skew_y: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    /// The canvas coefficients `[a, b, c, d, e, f]`.
    #[must_use]
    pub fn as_coeffs(&self) -> [f64; 6] {
        [
            self.scale_x,
            self.skew_x,
            self.skew_y,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ]
    }

    /// Converts to a Kurbo [`Affine`] with the same coefficients.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::new(self.as_coeffs())
    }

    /// The translation part as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }
}

impl Default for CanvasMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<CanvasMatrix> for Affine {
    fn from(m: CanvasMatrix) -> Self {
        m.to_affine()
    }
}

/// The closed set of transitions over a [`CanvasMatrix`].
///
/// Every kind only writes the fields it names; a `None` component leaves
/// that field as it was.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Set the scale factors.
    UpdateScale {
        /// New horizontal scale, if any.
        scale_x: Option<f64>,
        /// New vertical scale, if any.
        scale_y: Option<f64>,
    },
    /// Set the skew factors.
    UpdateSkew {
        /// New horizontal skew, if any.
        skew_x: Option<f64>,
        /// New vertical skew, if any.
        skew_y: Option<f64>,
    },
    /// Set the translation.
    UpdateTranslate {
        /// New horizontal translation, if any.
        translate_x: Option<f64>,
        /// New vertical translation, if any.
        translate_y: Option<f64>,
    },
    /// Reset to a pure scale (default `1.0`) with zero skew and translation.
    ResetMatrix {
        /// Horizontal scale after the reset; `None` means `1.0`.
        scale_x: Option<f64>,
        /// Vertical scale after the reset; `None` means `1.0`.
        scale_y: Option<f64>,
    },
}

impl TransformOp {
    /// Uniform [`TransformOp::UpdateScale`].
    #[must_use]
    pub fn scale(scale: f64) -> Self {
        Self::UpdateScale {
            scale_x: Some(scale),
            scale_y: Some(scale),
        }
    }

    /// [`TransformOp::UpdateTranslate`] setting both axes.
    #[must_use]
    pub fn translate(translation: Vec2) -> Self {
        Self::UpdateTranslate {
            translate_x: Some(translation.x),
            translate_y: Some(translation.y),
        }
    }

    /// Uniform [`TransformOp::ResetMatrix`].
    #[must_use]
    pub fn reset(scale: f64) -> Self {
        Self::ResetMatrix {
            scale_x: Some(scale),
            scale_y: Some(scale),
        }
    }

    /// Returns the matrix that results from applying this op to `m`.
    ///
    /// Non-positive or non-finite scale values are ignored (the previous
    /// scale is kept, or `1.0` for a reset) so the positive-scale invariant
    /// always holds.
    #[must_use]
    pub fn apply(self, m: CanvasMatrix) -> CanvasMatrix {
        match self {
            Self::UpdateScale { scale_x, scale_y } => CanvasMatrix {
                scale_x: valid_scale(scale_x).unwrap_or(m.scale_x),
                scale_y: valid_scale(scale_y).unwrap_or(m.scale_y),
                ..m
            },
            Self::UpdateSkew { skew_x, skew_y } => CanvasMatrix {
                skew_x: finite(skew_x).unwrap_or(m.skew_x),
                skew_y: finite(skew_y).unwrap_or(m.skew_y),
                ..m
            },
            Self::UpdateTranslate {
                translate_x,
                translate_y,
            } => CanvasMatrix {
                translate_x: finite(translate_x).unwrap_or(m.translate_x),
                translate_y: finite(translate_y).unwrap_or(m.translate_y),
                ..m
            },
            Self::ResetMatrix { scale_x, scale_y } => CanvasMatrix::from_scale(
                valid_scale(scale_x).unwrap_or(1.0),
                valid_scale(scale_y).unwrap_or(1.0),
            ),
        }
    }
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite())
}

fn valid_scale(v: Option<f64>) -> Option<f64> {
    finite(v).filter(|v| *v > 0.0)
}

/// Owned transform state with a pending-present flag.
///
/// Each [`TransformState::dispatch`] replaces the matrix and marks it
/// pending. The owner of the drawing surface drains the flag with
/// [`TransformState::take_pending`] and must then both apply the matrix to
/// the surface and repaint, so a repaint never sees a stale matrix.
#[derive(Clone, Copy, Debug)]
pub struct TransformState {
    matrix: CanvasMatrix,
    revision: u64,
    pending: bool,
}

impl TransformState {
    /// Creates a state holding `matrix`, pending its first present.
    #[must_use]
    pub fn new(matrix: CanvasMatrix) -> Self {
        Self {
            matrix,
            revision: 0,
            pending: true,
        }
    }

    /// The current matrix.
    #[must_use]
    pub fn matrix(&self) -> CanvasMatrix {
        self.matrix
    }

    /// Number of ops dispatched so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the matrix changed since the last present.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Applies `op`, discarding the previous matrix.
    pub fn dispatch(&mut self, op: TransformOp) {
        self.matrix = op.apply(self.matrix);
        self.revision = self.revision.wrapping_add(1);
        self.pending = true;
    }

    /// Clears the pending flag, returning the matrix to present if it was set.
    pub fn take_pending(&mut self) -> Option<CanvasMatrix> {
        if core::mem::take(&mut self.pending) {
            Some(self.matrix)
        } else {
            None
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new(CanvasMatrix::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Vec2};

    use super::{CanvasMatrix, TransformOp, TransformState};

    fn sample() -> CanvasMatrix {
        CanvasMatrix {
            scale_x: 2.0,
            scale_y: 3.0,
            skew_x: 0.25,
            skew_y: 0.5,
            translate_x: -10.0,
            translate_y: -20.0,
        }
    }

    #[test]
    fn update_kinds_only_touch_their_fields() {
        let m = sample();

        let s = TransformOp::UpdateScale {
            scale_x: Some(4.0),
            scale_y: None,
        }
        .apply(m);
        assert_eq!(s, CanvasMatrix { scale_x: 4.0, ..m });

        let k = TransformOp::UpdateSkew {
            skew_x: None,
            skew_y: Some(1.0),
        }
        .apply(m);
        assert_eq!(k, CanvasMatrix { skew_y: 1.0, ..m });

        let t = TransformOp::translate(Vec2::new(5.0, 6.0)).apply(m);
        assert_eq!(
            t,
            CanvasMatrix {
                translate_x: 5.0,
                translate_y: 6.0,
                ..m
            }
        );
    }

    #[test]
    fn reset_zeroes_skew_and_translate() {
        let m = TransformOp::reset(2.0).apply(sample());
        assert_eq!(m, CanvasMatrix::from_scale(2.0, 2.0));

        let defaulted = TransformOp::ResetMatrix {
            scale_x: None,
            scale_y: None,
        }
        .apply(sample());
        assert_eq!(defaulted, CanvasMatrix::IDENTITY);
    }

    #[test]
    fn invalid_scales_are_ignored() {
        let m = sample();
        let s = TransformOp::UpdateScale {
            scale_x: Some(0.0),
            scale_y: Some(f64::NAN),
        }
        .apply(m);
        assert_eq!(s, m);

        let r = TransformOp::reset(-1.0).apply(m);
        assert_eq!(r, CanvasMatrix::IDENTITY);
    }

    #[test]
    fn affine_uses_canvas_coefficient_order() {
        let m = CanvasMatrix {
            skew_x: 0.0,
            skew_y: 0.0,
            ..sample()
        };
        let p = m.to_affine() * Point::new(1.0, 1.0);
        assert_eq!(p, Point::new(-8.0, -17.0));
        assert_eq!(
            Affine::from(sample()).as_coeffs(),
            [2.0, 0.25, 0.5, 3.0, -10.0, -20.0]
        );
    }

    #[test]
    fn dispatch_marks_pending_until_taken() {
        let mut state = TransformState::new(CanvasMatrix::IDENTITY);
        assert_eq!(state.take_pending(), Some(CanvasMatrix::IDENTITY));
        assert_eq!(state.take_pending(), None);

        state.dispatch(TransformOp::scale(3.0));
        state.dispatch(TransformOp::translate(Vec2::new(-1.0, -2.0)));
        assert!(state.is_pending());
        assert_eq!(state.revision(), 2);

        let presented = state.take_pending().unwrap();
        assert_eq!(presented.scale_x, 3.0);
        assert_eq!(presented.translation(), Vec2::new(-1.0, -2.0));
        assert!(!state.is_pending());
    }
}
