//! Vocal confidence score from speech features

use crate::fillers::{count_fillers, word_count};
use crate::pauses::PauseStats;
use crate::thresholds::*;
use scoring_core::clamp_unit;

/// Everything the confidence score is computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechFeatures {
    /// Recording length in seconds, always positive
    pub duration: f64,
    pub word_count: usize,
    pub filler_count: usize,
    pub pauses: PauseStats,
}

impl SpeechFeatures {
    pub fn new(duration: f64, transcript: &str, pauses: PauseStats) -> Self {
        Self {
            duration,
            word_count: word_count(transcript),
            filler_count: count_fillers(transcript),
            pauses,
        }
    }

    pub fn pause_ratio(&self) -> f64 {
        self.pauses.total_pause_time / self.duration
    }

    pub fn long_pause_rate(&self) -> f64 {
        self.pauses.long_pause_count as f64 / (self.duration / LONG_PAUSE_WINDOW_SECONDS)
    }

    /// Filler sounds per 100 words
    pub fn filler_rate(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.filler_count as f64 / self.word_count as f64 * 100.0
    }

    pub fn words_per_second(&self) -> f64 {
        self.word_count as f64 / self.duration
    }

    /// Pauses per 10 words
    pub fn pause_rate(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.pauses.pause_count as f64 / self.word_count as f64 * 10.0
    }

    /// Start from 1.0, subtract every applicable penalty, clamp to [0, 1]
    pub fn confidence_score(&self) -> f64 {
        let penalty = ramp_penalty(self.pause_ratio(), &PAUSE_RATIO_RAMPS)
            + ramp_penalty(self.long_pause_rate(), &LONG_PAUSE_RAMPS)
            + ramp_penalty(self.filler_rate(), &FILLER_RAMPS)
            + ramp_penalty(self.words_per_second(), &SPEECH_RATE_RAMPS)
            + ramp_penalty(self.pause_rate(), &PAUSE_RATE_RAMPS);
        clamp_unit(1.0 - penalty)
    }
}
