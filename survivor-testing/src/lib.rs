//! Testing helpers shared across the workspace.

use assert_float_eq::*;

pub const EPSILON: f64 = 1e-9;

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that the given probabilities form a complete book, i.e., that they sum to 1.
pub fn assert_fair_book(probs: &[f64]) {
    for &prob in probs {
        assert!(
            (0.0..=1.0).contains(&prob),
            "probability {prob} outside [0, 1] in {probs:?}"
        );
    }
    let sum: f64 = probs.iter().sum();
    assert_float_absolute_eq!(1.0, sum, EPSILON);
}

pub fn assert_non_increasing(values: &[f64]) {
    for window in values.windows(2) {
        assert!(
            window[0] >= window[1],
            "{} followed by {} in {values:?}",
            window[0],
            window[1]
        );
    }
}
