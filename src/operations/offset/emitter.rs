use crate::error::{ConsistencyError, Result};
use crate::geometry::curve::{CurveLabel, CurvePiece, LabeledCurve};

/// Consumer of labeled offset curves.
///
/// Any sink works: an in-memory vector, a channel adapter, a direct
/// arrangement inserter. Curves arrive in cycle order, one at a time, as
/// soon as they are final.
pub trait CurveSink {
    fn push(&mut self, curve: LabeledCurve);
}

impl CurveSink for Vec<LabeledCurve> {
    fn push(&mut self, curve: LabeledCurve) {
        Vec::push(self, curve);
    }
}

/// Streams labeled curves for one convolution cycle.
///
/// Indices are assigned strictly increasing from 0. Emission is delayed by
/// one curve so the final curve — whichever it turns out to be — can carry
/// the closing mark before it reaches the sink. This keeps the
/// exactly-one-`is_last` invariant even when the closing arc degenerates
/// and contributes no curves of its own.
pub(super) struct CycleEmitter<'a, S: CurveSink> {
    sink: &'a mut S,
    cycle_id: u32,
    next_index: u32,
    pending: Option<LabeledCurve>,
}

impl<'a, S: CurveSink> CycleEmitter<'a, S> {
    pub(super) fn new(sink: &'a mut S, cycle_id: u32) -> Self {
        Self {
            sink,
            cycle_id,
            next_index: 0,
            pending: None,
        }
    }

    /// Labels `piece` with the next index and forwards the previously held
    /// curve to the sink.
    pub(super) fn emit(&mut self, piece: CurvePiece, directed_right: bool) {
        let label = CurveLabel {
            directed_right,
            cycle_id: self.cycle_id,
            index: self.next_index,
            is_last: false,
        };
        self.next_index += 1;
        if let Some(ready) = self.pending.replace(LabeledCurve { piece, label }) {
            self.sink.push(ready);
        }
    }

    /// Flushes the held-back curve with the closing mark set.
    ///
    /// # Errors
    ///
    /// Returns `ConsistencyError::EmptyCycle` if nothing was emitted, which
    /// a valid polygon cannot cause.
    pub(super) fn finish(self) -> Result<()> {
        let Some(mut last) = self.pending else {
            return Err(ConsistencyError::EmptyCycle.into());
        };
        last.label.is_last = true;
        self.sink.push(last);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::Segment2r;
    use crate::math::Point2r;

    fn segment(x: i64) -> CurvePiece {
        CurvePiece::Segment(Segment2r::new(
            Point2r::from_ints(x, 0),
            Point2r::from_ints(x + 1, 0),
        ))
    }

    #[test]
    fn indices_are_contiguous_and_last_is_marked() {
        let mut out: Vec<LabeledCurve> = Vec::new();
        let mut emitter = CycleEmitter::new(&mut out, 7);
        emitter.emit(segment(0), true);
        emitter.emit(segment(1), false);
        emitter.emit(segment(2), true);
        emitter.finish().unwrap();

        assert_eq!(out.len(), 3);
        for (i, curve) in out.iter().enumerate() {
            assert_eq!(curve.label.cycle_id, 7);
            assert_eq!(curve.label.index, u32::try_from(i).unwrap());
            assert_eq!(curve.label.is_last, i == 2);
        }
        assert!(!out[1].label.directed_right);
    }

    #[test]
    fn single_curve_cycle_is_its_own_closer() {
        let mut out: Vec<LabeledCurve> = Vec::new();
        let mut emitter = CycleEmitter::new(&mut out, 0);
        emitter.emit(segment(0), true);
        emitter.finish().unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0].label.is_last);
    }

    #[test]
    fn empty_cycle_is_a_fault() {
        let mut out: Vec<LabeledCurve> = Vec::new();
        let emitter = CycleEmitter::new(&mut out, 0);
        assert!(emitter.finish().is_err());
        assert!(out.is_empty());
    }
}
