//! Vocal confidence result record and recommendations

use crate::scoring::SpeechFeatures;
use crate::thresholds::{VERDICTS, VERDICT_FLOOR};
use scoring_core::{classify, round3, round_to};
use serde::{Deserialize, Serialize};

/// Vocal confidence assessment band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VocalAssessment {
    Confident,
    ModeratelyConfident,
    SomewhatUncertain,
    Uncertain,
    UnableToAnalyze,
}

/// Reported speech features, rounded for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocalDetails {
    pub pause_count: usize,
    pub long_pause_count: usize,
    pub avg_pause_duration: f64,
    /// Percent of the recording, 1 decimal
    pub pause_ratio: f64,
    pub filler_sounds_count: usize,
    pub filler_rate_per_100_words: f64,
    pub speech_rate_wpm: f64,
    pub words_per_second: f64,
}

impl VocalDetails {
    pub fn from_features(features: &SpeechFeatures) -> Self {
        Self {
            pause_count: features.pauses.pause_count,
            long_pause_count: features.pauses.long_pause_count,
            avg_pause_duration: round_to(features.pauses.avg_pause_duration, 2),
            pause_ratio: round_to(features.pause_ratio() * 100.0, 1),
            filler_sounds_count: features.filler_count,
            filler_rate_per_100_words: round_to(features.filler_rate(), 1),
            speech_rate_wpm: round_to(features.words_per_second() * 60.0, 1),
            words_per_second: round_to(features.words_per_second(), 2),
        }
    }
}

/// Complete vocal confidence analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocalReport {
    pub confidence_score: f64,
    pub assessment: VocalAssessment,
    pub interpretation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<VocalDetails>,
    pub recommendations: Vec<String>,
}

impl VocalReport {
    pub fn from_features(features: &SpeechFeatures) -> Self {
        let score = features.confidence_score();
        let verdict = classify(score, &VERDICTS, &VERDICT_FLOOR);
        let details = VocalDetails::from_features(features);
        let recommendations = recommendations(&details, features.pause_rate(), verdict.assessment);

        Self {
            confidence_score: round3(score),
            assessment: verdict.assessment,
            interpretation: verdict.interpretation.to_string(),
            details: Some(details),
            recommendations,
        }
    }

    fn unable(interpretation: &str, advice: &str) -> Self {
        Self {
            confidence_score: 0.0,
            assessment: VocalAssessment::UnableToAnalyze,
            interpretation: interpretation.to_string(),
            details: None,
            recommendations: vec![advice.to_string()],
        }
    }

    /// Transcript was empty or whitespace
    pub fn no_speech() -> Self {
        Self::unable("No speech detected in audio file", "Ensure audio contains clear speech")
    }

    /// Transcriber could not make out any words
    pub fn unintelligible() -> Self {
        Self::unable(
            "Audio could not be transcribed - speech may be unclear or file may be corrupted",
            "Ensure audio is clear and contains speech",
        )
    }

    /// Recording length unknown or zero, so no rates can be computed
    pub fn unknown_duration() -> Self {
        Self::unable(
            "Audio duration could not be determined",
            "Check that the audio file is complete and has a valid sample rate",
        )
    }

    pub fn is_complete(&self) -> bool {
        self.assessment != VocalAssessment::UnableToAnalyze
    }
}

/// Render like a rounded decimal: always at least one fractional digit
fn decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Rule-based advice on the reported features, never empty
pub fn recommendations(
    details: &VocalDetails,
    pause_rate: f64,
    assessment: VocalAssessment,
) -> Vec<String> {
    let mut advice = Vec::new();

    if details.pause_ratio > 50.0 {
        advice.push(format!(
            "Consider reducing frequent pausing - {}% of speech time is pauses. Aim for 20-40% pause time.",
            decimal(details.pause_ratio)
        ));
    } else if details.pause_ratio > 40.0 {
        advice.push(
            "You could reduce pause frequency slightly - this would make speech sound more fluid"
                .to_string(),
        );
    }

    if details.long_pause_count > 5 {
        advice.push(format!(
            "Try to reduce some long pauses - {} pause(s) longer than 1 second detected. A few long pauses are fine, but many can reduce flow.",
            details.long_pause_count
        ));
    } else if details.long_pause_count > 3 {
        advice.push("Consider slightly reducing long pauses for smoother speech flow".to_string());
    }

    let filler_rate = details.filler_rate_per_100_words;
    if filler_rate > 8.0 {
        advice.push(format!(
            "Practice reducing filler sounds (um, uh) - {} filler sounds detected ({} per 100 words). Try pausing silently instead.",
            details.filler_sounds_count,
            decimal(filler_rate)
        ));
    } else if filler_rate > 5.0 {
        advice.push(
            "You could reduce filler sounds slightly - practice replacing some 'um' and 'uh' with natural pauses"
                .to_string(),
        );
    } else if details.filler_sounds_count > 0 {
        advice.push(
            "Good speech - you could continue to minimize filler sounds for even more polished speech"
                .to_string(),
        );
    }

    let wpm = decimal(details.speech_rate_wpm);
    let wps = details.words_per_second;
    if wps < 1.0 {
        advice.push(format!(
            "Try speaking at a slightly faster pace - current rate is {wpm} WPM. A rate of 100-220 WPM sounds more natural."
        ));
    } else if wps < 1.67 {
        advice.push(format!(
            "Consider speaking slightly faster - {wpm} WPM is a bit slow. A comfortable pace is 100-220 WPM."
        ));
    } else if wps > 5.0 {
        advice.push(format!(
            "Consider slowing down slightly - {wpm} WPM is quite fast. A comfortable pace is 100-220 WPM."
        ));
    } else if wps > 3.67 {
        advice.push(format!(
            "Your pace is good - {wpm} WPM. You could slow down slightly (100-220 WPM target) for easier comprehension."
        ));
    }

    if details.pause_count > 0 {
        if pause_rate > 3.0 {
            advice.push(format!(
                "Try to improve speech fluency - {} pauses detected makes speech somewhat choppy. Practice speaking more smoothly.",
                details.pause_count
            ));
        } else if pause_rate > 2.0 {
            advice.push(
                "You could improve speech fluency slightly - practice speaking more smoothly between thoughts"
                    .to_string(),
            );
        }
    }

    if advice.is_empty() {
        advice.push(
            match assessment {
                VocalAssessment::SomewhatUncertain | VocalAssessment::Uncertain => {
                    "Continue practicing to improve vocal confidence - focus on speaking with steady pace and minimal hesitation"
                }
                VocalAssessment::ModeratelyConfident => {
                    "Good vocal confidence - continue practicing to reduce hesitation and improve fluency"
                }
                _ => "Excellent vocal confidence! Maintain steady pace and clear speech.",
            }
            .to_string(),
        );
    }

    advice
}
