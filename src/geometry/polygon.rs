use num_traits::{Signed, Zero};

use crate::error::{PreconditionError, Result};
use crate::math::{Point2r, Rational};

/// Winding direction of a polygon's vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// A polygon with exact rational vertices.
///
/// Vertices form one closed contour; the last vertex connects back to the
/// first. Simplicity (no self-intersection) is a caller contract and is not
/// checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point2r>,
}

impl Polygon {
    /// Creates a polygon from a vertex list.
    ///
    /// # Errors
    ///
    /// - `PreconditionError::TooFewVertices` for fewer than 3 vertices.
    /// - `PreconditionError::ZeroLengthEdge` if consecutive vertices
    ///   (cyclically) coincide.
    /// - `PreconditionError::DegeneratePolygon` if the signed area is zero.
    pub fn new(vertices: Vec<Point2r>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PreconditionError::TooFewVertices(vertices.len()).into());
        }
        let n = vertices.len();
        for i in 0..n {
            if vertices[i] == vertices[(i + 1) % n] {
                return Err(PreconditionError::ZeroLengthEdge(i).into());
            }
        }
        let polygon = Self { vertices };
        if polygon.signed_area2().is_zero() {
            return Err(PreconditionError::DegeneratePolygon.into());
        }
        Ok(polygon)
    }

    /// Returns the vertices in stored order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2r] {
        &self.vertices
    }

    /// Twice the exact signed area (shoelace formula).
    ///
    /// Positive for counter-clockwise, negative for clockwise.
    #[must_use]
    pub fn signed_area2(&self) -> Rational {
        let n = self.vertices.len();
        let mut sum = Rational::zero();
        for i in 0..n {
            let p = &self.vertices[i];
            let q = &self.vertices[(i + 1) % n];
            sum = sum + (&p.x * &q.y - &q.x * &p.y);
        }
        sum
    }

    /// Winding direction of the stored vertex order.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.signed_area2().is_positive() {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
}
