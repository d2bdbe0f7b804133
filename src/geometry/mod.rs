pub mod arc;
pub mod curve;
pub mod polygon;

pub use arc::CircularArc;
pub use curve::{CurveLabel, CurvePiece, LabeledCurve, Segment2r};
pub use polygon::{Orientation, Polygon};
