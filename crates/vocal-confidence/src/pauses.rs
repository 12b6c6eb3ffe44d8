//! Pause detection on the 100 ms RMS energy envelope

use clip_capture::AudioBuffer;
use scoring_core::round_to;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Energy window length in seconds
pub const CHUNK_SECONDS: f64 = 0.1;

/// Chunks quieter than this fraction of the signal's standard deviation are silent
pub const SILENCE_RATIO: f64 = 0.1;

/// Silent runs must be longer than this to count as a pause
pub const MIN_PAUSE_SECONDS: f64 = 0.2;

/// Pauses longer than this are long pauses
pub const LONG_PAUSE_SECONDS: f64 = 1.0;

/// Pause statistics over the speech span of a recording
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PauseStats {
    pub pause_count: usize,
    pub long_pause_count: usize,
    /// Seconds, rounded to 2 decimals
    pub total_pause_time: f64,
    /// Seconds, 0 when there are no pauses
    pub avg_pause_duration: f64,
}

impl PauseStats {
    fn from_durations(durations: &[f64]) -> Self {
        let total: f64 = durations.iter().sum();
        Self {
            pause_count: durations.len(),
            long_pause_count: durations.iter().filter(|&&d| d > LONG_PAUSE_SECONDS).count(),
            total_pause_time: round_to(total, 2),
            avg_pause_duration: if durations.is_empty() {
                0.0
            } else {
                total / durations.len() as f64
            },
        }
    }
}

/// Samples per energy chunk (100 ms, truncated)
pub fn chunk_size(sample_rate: u32) -> usize {
    (sample_rate as f64 * CHUNK_SECONDS) as usize
}

/// Population standard deviation of the samples
pub fn std_dev(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let n = samples.len() as f64;
    let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// RMS energy per chunk, trailing partial chunk included
pub fn chunk_energies(samples: &[f32], chunk_size: usize) -> Vec<f64> {
    if chunk_size == 0 {
        return Vec::new();
    }
    samples
        .chunks(chunk_size)
        .map(|chunk| {
            let power = chunk.iter().map(|&s| (s as f64) * (s as f64)).sum::<f64>() / chunk.len() as f64;
            power.sqrt()
        })
        .collect()
}

/// Durations of the pauses inside the speech span.
///
/// Leading and trailing silence is ignored; a silent run only becomes a
/// pause once a non-silent chunk closes it.
pub fn pause_durations(silent: &[bool]) -> Vec<f64> {
    let (Some(start), Some(end)) = (
        silent.iter().position(|s| !s),
        silent.iter().rposition(|s| !s),
    ) else {
        return Vec::new();
    };

    let mut durations = Vec::new();
    let mut run = 0usize;
    for &is_silent in &silent[start..=end] {
        if is_silent {
            run += 1;
        } else if run > 0 {
            let duration = run as f64 * CHUNK_SECONDS;
            if duration > MIN_PAUSE_SECONDS {
                durations.push(duration);
            }
            run = 0;
        }
    }
    durations
}

/// Detect pauses in a mono recording
pub fn analyze_pauses(audio: &AudioBuffer) -> PauseStats {
    let size = chunk_size(audio.sample_rate);
    if size == 0 || audio.is_empty() {
        return PauseStats::default();
    }

    let threshold = std_dev(&audio.samples) * SILENCE_RATIO;
    let silent: Vec<bool> = chunk_energies(&audio.samples, size)
        .into_iter()
        .map(|energy| energy < threshold)
        .collect();

    let stats = PauseStats::from_durations(&pause_durations(&silent));
    debug!(
        "Pauses: {} ({} long) over {} chunks, silence threshold {:.5}",
        stats.pause_count,
        stats.long_pause_count,
        silent.len(),
        threshold
    );
    stats
}
