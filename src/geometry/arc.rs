use std::cmp::Ordering;

use num_traits::Signed;

use crate::math::{Point2r, Rational};

/// A circular arc with exact rational center, radius, and endpoints,
/// traversed counter-clockwise from `source` to `target`.
///
/// Both endpoints must lie exactly on the supporting circle. The offset
/// construction guarantees this algebraically (the half-angle substitution
/// keeps `cos² + sin² = 1` exact), and the constructor debug-asserts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularArc {
    center: Point2r,
    radius: Rational,
    source: Point2r,
    target: Point2r,
}

impl CircularArc {
    /// Creates a counter-clockwise arc from `source` to `target` on the
    /// circle of the given center and radius.
    #[must_use]
    pub fn new(center: Point2r, radius: Rational, source: Point2r, target: Point2r) -> Self {
        debug_assert_eq!(source.sqr_distance(&center), &radius * &radius);
        debug_assert_eq!(target.sqr_distance(&center), &radius * &radius);
        Self {
            center,
            radius,
            source,
            target,
        }
    }

    /// Returns the center of the supporting circle.
    #[must_use]
    pub fn center(&self) -> &Point2r {
        &self.center
    }

    /// Returns the radius of the supporting circle.
    #[must_use]
    pub fn radius(&self) -> &Rational {
        &self.radius
    }

    /// Returns the start point of the counter-clockwise traversal.
    #[must_use]
    pub fn source(&self) -> &Point2r {
        &self.source
    }

    /// Returns the end point of the counter-clockwise traversal.
    #[must_use]
    pub fn target(&self) -> &Point2r {
        &self.target
    }

    /// True when the traversal runs left-to-right (lexicographic on x,
    /// then y). Meaningful for x-monotone pieces.
    #[must_use]
    pub fn is_directed_right(&self) -> bool {
        self.source.cmp_xy(&self.target) == Ordering::Less
    }

    /// Splits the arc into x-monotone pieces.
    ///
    /// An arc fails x-monotonicity exactly where its tangent turns
    /// vertical, i.e. at the east/west poles of the supporting circle —
    /// both rational points, so the split never leaves exact arithmetic.
    /// A degenerate arc (coincident endpoints) decomposes into nothing.
    #[must_use]
    pub fn make_x_monotone(&self) -> Vec<CircularArc> {
        if self.source == self.target {
            return Vec::new();
        }

        let east = Point2r::new(&self.center.x + &self.radius, self.center.y.clone());
        let west = Point2r::new(&self.center.x - &self.radius, self.center.y.clone());
        let mut splits: Vec<Point2r> = [east, west]
            .into_iter()
            .filter(|pole| self.contains_in_interior(pole))
            .collect();

        if splits.len() == 2 {
            // Order the two poles along the traversal.
            let from = self.dir_to(&self.source);
            if sweep_precedes(&from, &self.dir_to(&splits[1]), &self.dir_to(&splits[0])) {
                splits.swap(0, 1);
            }
        }

        let mut pieces = Vec::with_capacity(splits.len() + 1);
        let mut start = self.source.clone();
        for split in splits {
            pieces.push(Self::new(
                self.center.clone(),
                self.radius.clone(),
                start,
                split.clone(),
            ));
            start = split;
        }
        pieces.push(Self::new(
            self.center.clone(),
            self.radius.clone(),
            start,
            self.target.clone(),
        ));
        pieces
    }

    /// Direction vector from the center to `p`.
    fn dir_to(&self, p: &Point2r) -> Dir {
        (&p.x - &self.center.x, &p.y - &self.center.y)
    }

    /// True when `probe` lies strictly between the endpoints along the
    /// counter-clockwise traversal (endpoints excluded).
    fn contains_in_interior(&self, probe: &Point2r) -> bool {
        let from = self.dir_to(&self.source);
        let p = self.dir_to(probe);
        let t = self.dir_to(&self.target);
        sweep_rank(&from, &p) != 0 && sweep_precedes(&from, &p, &t)
    }
}

type Dir = (Rational, Rational);

fn cross(u: &Dir, v: &Dir) -> Rational {
    &u.0 * &v.1 - &u.1 * &v.0
}

fn dot(u: &Dir, v: &Dir) -> Rational {
    &u.0 * &v.0 + &u.1 * &v.1
}

/// Rank of `dir` in the counter-clockwise sweep starting at `from`:
/// 0 aligned with `from`, 1 strictly within the first half-turn, 2 at the
/// antipode, 3 strictly within the second half-turn.
fn sweep_rank(from: &Dir, dir: &Dir) -> u8 {
    let c = cross(from, dir);
    if c.is_positive() {
        1
    } else if c.is_negative() {
        3
    } else if dot(from, dir).is_positive() {
        0
    } else {
        2
    }
}

/// True when `u` comes strictly before `v` in the counter-clockwise sweep
/// starting at `from`.
fn sweep_precedes(from: &Dir, u: &Dir, v: &Dir) -> bool {
    let ru = sweep_rank(from, u);
    let rv = sweep_rank(from, v);
    if ru != rv {
        return ru < rv;
    }
    (ru == 1 || ru == 3) && cross(u, v).is_positive()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn int(n: i64) -> Rational {
        Rational::from_integer(BigInt::from(n))
    }

    /// Radius-5 arc around the origin between two Pythagorean points.
    fn arc(sx: i64, sy: i64, tx: i64, ty: i64) -> CircularArc {
        CircularArc::new(
            Point2r::from_ints(0, 0),
            int(5),
            Point2r::from_ints(sx, sy),
            Point2r::from_ints(tx, ty),
        )
    }

    #[test]
    fn quarter_arc_is_already_monotone() {
        // South → east: stays in the lower half, one increasing piece.
        let pieces = arc(0, -5, 5, 0).make_x_monotone();
        assert_eq!(pieces.len(), 1);
        assert!(pieces[0].is_directed_right());
        assert_eq!(pieces[0].source(), &Point2r::from_ints(0, -5));
        assert_eq!(pieces[0].target(), &Point2r::from_ints(5, 0));
    }

    #[test]
    fn half_arc_through_east_splits_once() {
        // South → north passes the east pole.
        let pieces = arc(0, -5, 0, 5).make_x_monotone();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].target(), &Point2r::from_ints(5, 0));
        assert_eq!(pieces[1].source(), &Point2r::from_ints(5, 0));
        assert!(pieces[0].is_directed_right());
        assert!(!pieces[1].is_directed_right());
    }

    #[test]
    fn three_quarter_arc_through_west_splits_once() {
        // East → south the long way (through north and west).
        let pieces = arc(5, 0, 0, -5).make_x_monotone();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].target(), &Point2r::from_ints(-5, 0));
        assert!(!pieces[0].is_directed_right());
        assert!(pieces[1].is_directed_right());
    }

    #[test]
    fn long_arc_crossing_east_then_west() {
        // (3,-4) → (-4,-3) counter-clockwise crosses east, then west.
        let pieces = arc(3, -4, -4, -3).make_x_monotone();
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].target(), &Point2r::from_ints(5, 0));
        assert_eq!(pieces[1].target(), &Point2r::from_ints(-5, 0));
        assert_eq!(pieces[2].target(), &Point2r::from_ints(-4, -3));
        assert!(pieces[0].is_directed_right());
        assert!(!pieces[1].is_directed_right());
        assert!(!pieces[2].is_directed_right());
    }

    #[test]
    fn long_arc_crossing_west_then_east() {
        // (-4,3) → (4,3) counter-clockwise crosses west first, then east,
        // exercising the split-ordering swap.
        let pieces = arc(-4, 3, 4, 3).make_x_monotone();
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].target(), &Point2r::from_ints(-5, 0));
        assert_eq!(pieces[1].target(), &Point2r::from_ints(5, 0));
        assert!(!pieces[0].is_directed_right());
        assert!(pieces[1].is_directed_right());
        assert!(!pieces[2].is_directed_right());
    }

    #[test]
    fn pole_endpoints_do_not_split() {
        // East → west through the north half: poles are endpoints, not
        // interior split points.
        let pieces = arc(5, 0, -5, 0).make_x_monotone();
        assert_eq!(pieces.len(), 1);
        assert!(!pieces[0].is_directed_right());
    }

    #[test]
    fn degenerate_arc_decomposes_to_nothing() {
        let pieces = arc(3, 4, 3, 4).make_x_monotone();
        assert!(pieces.is_empty());
    }

    #[test]
    fn pieces_chain_source_to_target() {
        let pieces = arc(3, -4, -4, -3).make_x_monotone();
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].target(), pair[1].source());
        }
        assert_eq!(pieces[0].source(), &Point2r::from_ints(3, -4));
    }
}
