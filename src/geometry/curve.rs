use crate::math::Point2r;

use super::arc::CircularArc;

/// A straight segment with exact endpoints, directed from `source` to
/// `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment2r {
    pub source: Point2r,
    pub target: Point2r,
}

impl Segment2r {
    /// Creates a new directed segment.
    #[must_use]
    pub fn new(source: Point2r, target: Point2r) -> Self {
        Self { source, target }
    }
}

/// One piece of a convolution cycle: a straight segment or an x-monotone
/// circular-arc piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurvePiece {
    Segment(Segment2r),
    Arc(CircularArc),
}

impl CurvePiece {
    /// Start point of the piece's traversal.
    #[must_use]
    pub fn source(&self) -> &Point2r {
        match self {
            CurvePiece::Segment(segment) => &segment.source,
            CurvePiece::Arc(arc) => arc.source(),
        }
    }

    /// End point of the piece's traversal.
    #[must_use]
    pub fn target(&self) -> &Point2r {
        match self {
            CurvePiece::Segment(segment) => &segment.target,
            CurvePiece::Arc(arc) => arc.target(),
        }
    }
}

/// Label attached to every emitted curve, letting an arrangement layer
/// reconstruct cycle adjacency without re-deriving geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveLabel {
    /// The curve's traversal runs left-to-right in x.
    pub directed_right: bool,
    /// Which polygon contour the curve came from.
    pub cycle_id: u32,
    /// Sequential position within the cycle, starting at 0.
    pub index: u32,
    /// Marks the final curve closing the cycle.
    pub is_last: bool,
}

/// A curve piece together with its cycle label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledCurve {
    pub piece: CurvePiece,
    pub label: CurveLabel,
}

impl LabeledCurve {
    /// Start point of the underlying piece.
    #[must_use]
    pub fn source(&self) -> &Point2r {
        self.piece.source()
    }

    /// End point of the underlying piece.
    #[must_use]
    pub fn target(&self) -> &Point2r {
        self.piece.target()
    }
}
