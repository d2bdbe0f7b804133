pub mod offset;

pub use offset::{ApproxOffset2D, CurveSink};
