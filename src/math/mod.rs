use std::cmp::Ordering;

use num_traits::ToPrimitive;

pub mod line_2d;
pub mod sqrt_approx;

/// Exact rational scalar used throughout the offset kernel.
pub type Rational = num_rational::BigRational;

/// 2D point with f64 coordinates, for seeding and numeric verification.
pub type Point2 = nalgebra::Point2<f64>;

/// Converts an exact rational to the nearest f64.
#[must_use]
pub fn to_f64(value: &Rational) -> f64 {
    // Conversion out of a big-integer ratio is total; the fallback is unreachable.
    value.to_f64().unwrap_or(f64::NAN)
}

/// 2D point with exact rational coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point2r {
    pub x: Rational,
    pub y: Rational,
}

impl Point2r {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    /// Creates a point with integer coordinates.
    #[must_use]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self {
            x: Rational::from_integer(x.into()),
            y: Rational::from_integer(y.into()),
        }
    }

    /// Returns the nearest-f64 mirror of this point.
    #[must_use]
    pub fn approx(&self) -> Point2 {
        Point2::new(to_f64(&self.x), to_f64(&self.y))
    }

    /// Exact squared distance to `other`.
    #[must_use]
    pub fn sqr_distance(&self, other: &Self) -> Rational {
        let dx = &self.x - &other.x;
        let dy = &self.y - &other.y;
        &dx * &dx + &dy * &dy
    }

    /// Lexicographic comparison, x first.
    #[must_use]
    pub fn cmp_xy(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then_with(|| self.y.cmp(&other.y))
    }
}
