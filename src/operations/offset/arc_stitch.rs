use crate::geometry::arc::CircularArc;
use crate::geometry::curve::CurvePiece;
use crate::math::{Point2r, Rational};

use super::emitter::{CurveSink, CycleEmitter};

/// Rounds the corner at `vertex`: emits the counter-clockwise radius-`r`
/// arc from `from` to `to`, split into x-monotone pieces.
///
/// Consecutive offset edges that already meet (collinear polygon edges)
/// produce a degenerate arc, which decomposes into nothing; emitting zero
/// pieces is the correct outcome there, not a fault.
pub(super) fn stitch_corner<S: CurveSink>(
    vertex: &Point2r,
    radius: &Rational,
    from: &Point2r,
    to: &Point2r,
    emitter: &mut CycleEmitter<'_, S>,
) {
    let arc = CircularArc::new(vertex.clone(), radius.clone(), from.clone(), to.clone());
    for piece in arc.make_x_monotone() {
        let directed_right = piece.is_directed_right();
        emitter.emit(CurvePiece::Arc(piece), directed_right);
    }
}
