//! Scoring Core
//!
//! Building blocks shared by the body-language, eye-contact and vocal engines:
//! per-metric series with mean reduction, table-driven metric bands and
//! verdict classification, and threshold-based advisory rules.

mod advice;
mod bands;
pub mod details_map;
mod series;

pub use advice::{advise, AdvisoryRule};
pub use bands::{classify, step_score, Step, StepTable, Verdict};
pub use series::MetricSeries;

/// Status carried by every result record
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnalysisStatus {
    #[serde(rename = "Analysis Complete")]
    Complete,
    #[serde(rename = "No body detected")]
    NoBodyDetected,
    #[serde(rename = "No face detected")]
    NoFaceDetected,
}

/// Round to 3 decimal places for reporting
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// Round to `places` decimals on the exact binary value, ties to even
///
/// Formatting with a precision is correctly rounded, so `0.8125` becomes
/// `0.812` rather than the `0.813` that scaling and `f64::round` give.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Clamp a metric score into [0, 1]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round3(0.70549), 0.705);
        assert_eq!(round3(0.1236), 0.124);
        assert_eq!(round_to(33.333, 1), 33.3);
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        assert_eq!(round3(0.8125), 0.812);
        assert_eq!(round3(0.0625), 0.062);
        assert_eq!(round3(0.4375), 0.438);
        assert_eq!(round_to(12.25, 1), 12.2);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(-0.8125, 3), -0.812);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.3), 0.0);
        assert_eq!(clamp_unit(1.4), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }
}
