//! Bounding of adjusted probabilities, so that no single week can zero out a sequence or mark
//! a pick as a certainty.

use std::ops::RangeInclusive;

pub const PROBABILITY_BOUNDS: RangeInclusive<f64> = 0.05..=0.95;

#[inline]
pub fn clamp(prob: f64) -> f64 {
    if prob < *PROBABILITY_BOUNDS.start() {
        *PROBABILITY_BOUNDS.start()
    } else if prob > *PROBABILITY_BOUNDS.end() {
        *PROBABILITY_BOUNDS.end()
    } else {
        prob
    }
}
