//! Fixed penalty ramps, verdicts and canned advice for vocal confidence

use crate::analysis::VocalAssessment;
use scoring_core::Verdict;

/// Which side of `edge` a ramp penalizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

/// Linear penalty past an edge: `min(cap, distance * slope)`
#[derive(Debug, Clone, Copy)]
pub struct Ramp {
    pub side: Side,
    pub edge: f64,
    pub slope: f64,
    pub cap: f64,
}

impl Ramp {
    pub const fn above(edge: f64, slope: f64, cap: f64) -> Self {
        Self { side: Side::Above, edge, slope, cap }
    }

    pub const fn below(edge: f64, slope: f64, cap: f64) -> Self {
        Self { side: Side::Below, edge, slope, cap }
    }

    /// Penalty if `value` is strictly past the edge
    pub fn penalty(&self, value: f64) -> Option<f64> {
        let distance = match self.side {
            Side::Above if value > self.edge => value - self.edge,
            Side::Below if value < self.edge => self.edge - value,
            _ => return None,
        };
        Some((distance * self.slope).min(self.cap))
    }
}

/// First matching ramp's penalty, 0 when none applies
pub fn ramp_penalty(value: f64, ramps: &[Ramp]) -> f64 {
    ramps.iter().find_map(|r| r.penalty(value)).unwrap_or(0.0)
}

/// Fraction of the recording spent in pauses
pub const PAUSE_RATIO_RAMPS: [Ramp; 3] = [
    Ramp::above(0.50, 1.5, 0.4),
    Ramp::above(0.40, 0.8, f64::INFINITY),
    Ramp::above(0.30, 0.5, f64::INFINITY),
];

/// Long pauses per 30 seconds
pub const LONG_PAUSE_RAMPS: [Ramp; 2] = [Ramp::above(5.0, 0.05, 0.25), Ramp::above(3.0, 0.07, 0.15)];

/// Filler sounds per 100 words
pub const FILLER_RAMPS: [Ramp; 2] = [Ramp::above(8.0, 0.04, 0.3), Ramp::above(5.0, 0.06, 0.2)];

/// Words per second; 1.67..3.67 (100-220 WPM) is unpenalized
pub const SPEECH_RATE_RAMPS: [Ramp; 4] = [
    Ramp::below(1.0, 0.15, 0.25),
    Ramp::below(1.67, 0.2, 0.15),
    Ramp::above(5.0, 0.08, 0.2),
    Ramp::above(3.67, 0.1, 0.15),
];

/// Pauses per 10 words
pub const PAUSE_RATE_RAMPS: [Ramp; 2] = [Ramp::above(3.0, 0.15, 0.25), Ramp::above(2.0, 0.15, 0.15)];

/// Long pause rate is normalized to this window (seconds)
pub const LONG_PAUSE_WINDOW_SECONDS: f64 = 30.0;

pub const VERDICTS: [Verdict<VocalAssessment>; 3] = [
    Verdict {
        min_score: 0.75,
        assessment: VocalAssessment::Confident,
        interpretation:
            "High vocal confidence - speaks with clarity, steady pace, and minimal hesitation",
    },
    Verdict {
        min_score: 0.55,
        assessment: VocalAssessment::ModeratelyConfident,
        interpretation:
            "Moderate vocal confidence - generally clear speech with occasional hesitation or pauses",
    },
    Verdict {
        min_score: 0.35,
        assessment: VocalAssessment::SomewhatUncertain,
        interpretation:
            "Lower vocal confidence - shows hesitation through pauses, filler sounds, or uneven speech",
    },
];

pub const VERDICT_FLOOR: Verdict<VocalAssessment> = Verdict {
    min_score: f64::NEG_INFINITY,
    assessment: VocalAssessment::Uncertain,
    interpretation:
        "Low vocal confidence - frequent pauses, hesitations, and disfluency indicate uncertainty in speech",
};
