mod arc_stitch;
mod edge_offset;
mod emitter;

pub use emitter::CurveSink;

use num_traits::Signed;

use crate::error::{PreconditionError, Result};
use crate::geometry::curve::CurvePiece;
use crate::geometry::polygon::{Orientation, Polygon};
use crate::math::{Point2r, Rational};

use arc_stitch::stitch_corner;
use edge_offset::offset_edge;
use emitter::CycleEmitter;

/// Approximates the offset of a simple polygon — its Minkowski sum with a
/// disc of radius r — as one closed convolution cycle of labeled curves.
///
/// Every approximated offset point is an exact rational point within `eps`
/// of the true, generally irrational offset point. Axis-aligned and
/// rational-length edges offset exactly; the corners are rounded with
/// counter-clockwise circular arcs about the polygon vertices.
///
/// # Output
///
/// Curves stream through a [`CurveSink`] as soon as they are final, each
/// labeled with `{directed_right, cycle_id, index, is_last}` so an
/// arrangement layer can reconstruct the cycle without re-deriving
/// geometry. Indices are contiguous from 0, consecutive curves chain
/// head-to-tail exactly, and exactly the final curve carries `is_last`.
#[derive(Debug, Clone)]
pub struct ApproxOffset2D {
    eps: f64,
    /// `⌊1/√eps⌋`, the seed denominator granularity for length
    /// approximation.
    inv_sqrt_eps: i64,
}

impl ApproxOffset2D {
    /// Creates an offset operation with the given approximation error
    /// bound.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError::ErrorBoundNotPositive` unless
    /// `eps > 0`.
    pub fn new(eps: f64) -> Result<Self> {
        if eps.is_nan() || eps <= 0.0 {
            return Err(PreconditionError::ErrorBoundNotPositive(eps).into());
        }
        let inv = (1.0 / eps.sqrt()) as i64;
        Ok(Self {
            eps,
            inv_sqrt_eps: inv.max(1),
        })
    }

    /// Returns the approximation error bound this operation was built
    /// with.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Computes the convolution cycle for `polygon` offset by `radius`.
    ///
    /// The polygon is traversed counter-clockwise regardless of its stored
    /// orientation, starting at its first vertex. Each edge contributes
    /// its offset segment(s), consecutive edges are bridged by arcs about
    /// the shared vertex, and a final arc about the start vertex closes
    /// the loop.
    ///
    /// Distinct cycles (say, the contours of a polygon with holes) carry
    /// distinct caller-chosen `cycle_id`s; within one cycle the curve
    /// order is fixed by the traversal.
    ///
    /// # Errors
    ///
    /// - `PreconditionError::RadiusNotPositive` if `radius ≤ 0`.
    /// - `ConsistencyError` for numeric faults (non-convergent length
    ///   refinement, parallel tangent lines). These are deterministic and
    ///   unrecoverable; curves already pushed to `sink` for this cycle are
    ///   invalid and must be discarded by the caller.
    pub fn offset_polygon<S: CurveSink>(
        &self,
        polygon: &Polygon,
        radius: &Rational,
        cycle_id: u32,
        sink: &mut S,
    ) -> Result<()> {
        if !radius.is_positive() {
            return Err(PreconditionError::RadiusNotPositive.into());
        }

        let vertices = polygon.vertices();
        let n = vertices.len();
        // Visit order that makes the traversal counter-clockwise while
        // keeping the stored first vertex as the cycle start.
        let order: Vec<usize> = if polygon.orientation() == Orientation::CounterClockwise {
            (0..n).collect()
        } else {
            std::iter::once(0).chain((1..n).rev()).collect()
        };

        let mut emitter = CycleEmitter::new(sink, cycle_id);
        let mut first_op: Option<Point2r> = None;
        let mut prev_op: Option<Point2r> = None;

        for k in 0..n {
            let curr = &vertices[order[k]];
            let next = &vertices[order[(k + 1) % n]];

            let edge = offset_edge(curr, next, radius, self.eps, self.inv_sqrt_eps)?;

            match &prev_op {
                // First edge: remember where the cycle starts.
                None => first_op = Some(edge.first.clone()),
                // Bridge the previous edge's end to this edge's start.
                Some(prev) => stitch_corner(curr, radius, prev, &edge.first, &mut emitter),
            }

            for (segment, directed_right) in edge.segments {
                emitter.emit(CurvePiece::Segment(segment), directed_right);
            }
            prev_op = Some(edge.second);
        }

        // Close the cycle: the final arc is centered at the start vertex.
        if let (Some(prev), Some(first)) = (&prev_op, &first_op) {
            stitch_corner(&vertices[order[0]], radius, prev, first, &mut emitter);
        }
        emitter.finish()
    }
}
