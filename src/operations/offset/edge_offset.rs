use std::cmp::Ordering;

use num_traits::{One, Signed, Zero};

use crate::error::{ConsistencyError, Result};
use crate::geometry::curve::Segment2r;
use crate::math::line_2d::Line2r;
use crate::math::sqrt_approx::certified_sqrt;
use crate::math::{Point2r, Rational};

/// Offset geometry of a single polygon edge.
pub(super) struct EdgeOffset {
    /// Offset of the edge's source vertex.
    pub first: Point2r,
    /// Offset of the edge's target vertex.
    pub second: Point2r,
    /// One or two segments with their left-to-right flags.
    pub segments: Vec<(Segment2r, bool)>,
}

/// Offsets the edge `source → target` by `radius`, to the outside of a
/// counter-clockwise traversal.
///
/// Axis-aligned edges and edges of rational length offset exactly with a
/// single segment. A general edge has irrational length; its two offset
/// points are approximated on the vertex circles with a bias that keeps
/// them outside the true offset line, and the gap between them is bridged
/// through the intersection of the two circle tangents, yielding two
/// segments.
///
/// # Errors
///
/// Propagates approximation faults, and reports
/// `ConsistencyError::ParallelTangents` if the tangent lines fail to meet
/// (impossible for a genuinely approximated length).
pub(super) fn offset_edge(
    source: &Point2r,
    target: &Point2r,
    radius: &Rational,
    eps: f64,
    seed_denom: i64,
) -> Result<EdgeOffset> {
    let delta_x = &target.x - &source.x;
    let delta_y = &target.y - &source.y;

    if delta_x.is_zero() {
        // Vertical edge: the offset lies at distance r to the right when
        // the edge ascends, to the left when it descends.
        let shift = if delta_y.is_positive() {
            radius.clone()
        } else {
            -radius.clone()
        };
        let first = Point2r::new(&source.x + &shift, source.y.clone());
        let second = Point2r::new(&target.x + &shift, target.y.clone());
        let segment = Segment2r::new(first.clone(), second.clone());
        return Ok(EdgeOffset {
            first,
            second,
            segments: vec![(segment, delta_y.is_positive())],
        });
    }

    if delta_y.is_zero() {
        // Horizontal edge: below when heading right, above when heading left.
        let shift = if delta_x.is_positive() {
            -radius.clone()
        } else {
            radius.clone()
        };
        let first = Point2r::new(source.x.clone(), &source.y + &shift);
        let second = Point2r::new(target.x.clone(), &target.y + &shift);
        let segment = Segment2r::new(first.clone(), second.clone());
        return Ok(EdgeOffset {
            first,
            second,
            segments: vec![(segment, delta_x.is_positive())],
        });
    }

    let sqr_d = &delta_x * &delta_x + &delta_y * &delta_y;
    let sqrt = certified_sqrt(&sqr_d, &delta_x, &delta_y, eps, seed_denom)?;
    let mut app_d = sqrt.value;

    if sqrt.residual.is_zero() {
        // The length is rational and was hit exactly: shift both endpoints
        // along the exact perpendicular unit vector.
        let trans_x = radius * &delta_y / &app_d;
        let trans_y = -(radius * &delta_x) / &app_d;
        let first = Point2r::new(&source.x + &trans_x, &source.y + &trans_y);
        let second = Point2r::new(&target.x + &trans_x, &target.y + &trans_y);
        let segment = Segment2r::new(first.clone(), second.clone());
        return Ok(EdgeOffset {
            first,
            second,
            segments: vec![(segment, delta_x.is_positive())],
        });
    }

    // Pick the approximation from the correct side. A negative residual
    // means the value overshoots the true length, and its dual
    // sqr_d/app_d undershoots; which side is safe depends on the
    // traversal direction.
    if delta_x.is_negative() {
        if sqrt.residual.is_negative() {
            app_d = &sqr_d / &app_d;
        }
    } else if sqrt.residual.is_positive() {
        app_d = &sqr_d / &app_d;
    }

    // φ is the angle of the outward perpendicular; tan(φ/2) is bracketed
    // from below and from above by substituting app_d for the length.
    let lower_tan = (&app_d - &delta_y) / (-&delta_x);
    let upper_tan = (-&delta_x) / (&app_d + &delta_y);

    let first = circle_point(source, radius, &lower_tan);
    let second = circle_point(target, radius, &upper_tan);

    // Tangents to the two vertex circles at the offset points; their
    // intersection is the shared endpoint of the two bridging segments.
    let tangent1 = Line2r::through(source, &first).perpendicular_at(&first);
    let tangent2 = Line2r::through(target, &second).perpendicular_at(&second);
    let mid = tangent1
        .intersect(&tangent2)
        .ok_or(ConsistencyError::ParallelTangents)?;

    let dir1 = first.cmp_xy(&mid) == Ordering::Less;
    let dir2 = mid.cmp_xy(&second) == Ordering::Less;
    let seg1 = Segment2r::new(first.clone(), mid.clone());
    let seg2 = Segment2r::new(mid, second.clone());

    Ok(EdgeOffset {
        first,
        second,
        segments: vec![(seg1, dir1), (seg2, dir2)],
    })
}

/// Translates `vertex` by `r·(cos φ, sin φ)` where `tan(φ/2) = tan_half`.
///
/// With rational t, `sin φ = 2t/(1+t²)` and `cos φ = (1−t²)/(1+t²)` are
/// both rational and satisfy `cos² + sin² = 1` exactly, so the result lies
/// exactly on the radius-r circle about `vertex`.
fn circle_point(vertex: &Point2r, radius: &Rational, tan_half: &Rational) -> Point2r {
    let sqr = tan_half * tan_half;
    let denom = Rational::one() + &sqr;
    let sin_phi = Rational::from_integer(2.into()) * tan_half / &denom;
    let cos_phi = (Rational::one() - &sqr) / &denom;
    Point2r::new(
        &vertex.x + radius * &cos_phi,
        &vertex.y + radius * &sin_phi,
    )
}
