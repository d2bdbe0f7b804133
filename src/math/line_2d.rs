use num_traits::Zero;

use super::{Point2r, Rational};

/// Exact 2D line in implicit form `a·x + b·y + c = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line2r {
    a: Rational,
    b: Rational,
    c: Rational,
}

impl Line2r {
    /// Constructs the line through two distinct points.
    #[must_use]
    pub fn through(p: &Point2r, q: &Point2r) -> Self {
        let a = &q.y - &p.y;
        let b = &p.x - &q.x;
        let c = -(&a * &p.x) - &b * &p.y;
        Self { a, b, c }
    }

    /// Constructs the line through `p` perpendicular to this line.
    #[must_use]
    pub fn perpendicular_at(&self, p: &Point2r) -> Self {
        // The perpendicular runs along this line's normal (a, b):
        // b·(x − px) − a·(y − py) = 0.
        Self {
            a: self.b.clone(),
            b: -self.a.clone(),
            c: &self.a * &p.y - &self.b * &p.x,
        }
    }

    /// Intersects two lines.
    ///
    /// Returns `None` for parallel (or identical) lines.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Point2r> {
        let det = &self.a * &other.b - &other.a * &self.b;
        if det.is_zero() {
            return None;
        }
        let x = (&self.b * &other.c - &other.b * &self.c) / &det;
        let y = (&other.a * &self.c - &self.a * &other.c) / &det;
        Some(Point2r::new(x, y))
    }

    /// Evaluates `a·x + b·y + c` at `p`; zero exactly when `p` lies on the line.
    #[must_use]
    pub fn eval(&self, p: &Point2r) -> Rational {
        &self.a * &p.x + &self.b * &p.y + &self.c
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn through_contains_both_points() {
        let p = Point2r::from_ints(1, 2);
        let r = Point2r::from_ints(4, -3);
        let line = Line2r::through(&p, &r);
        assert!(line.eval(&p).is_zero());
        assert!(line.eval(&r).is_zero());
    }

    #[test]
    fn intersect_axes_at_origin() {
        let x_axis = Line2r::through(&Point2r::from_ints(0, 0), &Point2r::from_ints(1, 0));
        let y_axis = Line2r::through(&Point2r::from_ints(0, 0), &Point2r::from_ints(0, 1));
        let p = x_axis.intersect(&y_axis).unwrap();
        assert_eq!(p, Point2r::from_ints(0, 0));
    }

    #[test]
    fn intersect_diagonals_exactly() {
        // y = x and y = -x + 1 meet at (1/2, 1/2).
        let d1 = Line2r::through(&Point2r::from_ints(0, 0), &Point2r::from_ints(2, 2));
        let d2 = Line2r::through(&Point2r::from_ints(0, 1), &Point2r::from_ints(1, 0));
        let p = d1.intersect(&d2).unwrap();
        assert_eq!(p, Point2r::new(q(1, 2), q(1, 2)));
    }

    #[test]
    fn intersect_parallel_is_none() {
        let l1 = Line2r::through(&Point2r::from_ints(0, 0), &Point2r::from_ints(1, 1));
        let l2 = Line2r::through(&Point2r::from_ints(0, 1), &Point2r::from_ints(1, 2));
        assert!(l1.intersect(&l2).is_none());
    }

    #[test]
    fn perpendicular_passes_through_point() {
        let base = Line2r::through(&Point2r::from_ints(0, 0), &Point2r::from_ints(3, 1));
        let at = Point2r::from_ints(3, 1);
        let perp = base.perpendicular_at(&at);
        assert!(perp.eval(&at).is_zero());
        // Normals of perpendicular lines are orthogonal.
        assert!((&base.a * &perp.a + &base.b * &perp.b).is_zero());
    }

    #[test]
    fn perpendicular_meets_base_at_foot() {
        let base = Line2r::through(&Point2r::from_ints(0, 0), &Point2r::from_ints(1, 0));
        let foot = Point2r::from_ints(5, 0);
        let perp = base.perpendicular_at(&foot);
        assert_eq!(base.intersect(&perp).unwrap(), foot);
    }
}
