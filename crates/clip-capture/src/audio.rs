//! Mono PCM audio buffers handed over by the audio provider

use serde::{Deserialize, Serialize};

/// Clip duration as far as it could be determined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AudioDuration {
    /// Duration in seconds
    Known(f64),
    /// Sample rate or length could not be established
    Unknown,
}

impl AudioDuration {
    /// Seconds, if known and non-zero
    pub fn seconds(&self) -> Option<f64> {
        match *self {
            AudioDuration::Known(secs) if secs > 0.0 => Some(secs),
            _ => None,
        }
    }
}

/// Mono audio samples scaled to roughly [-1, 1]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioBuffer {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Build from interleaved signed 16-bit PCM, averaging channels to mono
    pub fn from_interleaved_i16(pcm: &[i16], channels: u16, sample_rate: u32) -> Self {
        let channels = channels.max(1) as usize;
        let samples = pcm
            .chunks(channels)
            .map(|frame| {
                let sum: f32 = frame.iter().map(|&s| s as f32 / 32768.0).sum();
                sum / frame.len() as f32
            })
            .collect();
        Self::new(samples, sample_rate)
    }

    /// Build from unsigned 8-bit PCM (mono, 128 = silence)
    pub fn from_u8(pcm: &[u8], sample_rate: u32) -> Self {
        let samples = pcm.iter().map(|&s| (s as f32 - 128.0) / 128.0).collect();
        Self::new(samples, sample_rate)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds
    pub fn duration(&self) -> AudioDuration {
        if self.sample_rate == 0 || self.samples.is_empty() {
            return AudioDuration::Unknown;
        }
        AudioDuration::Known(self.samples.len() as f64 / self.sample_rate as f64)
    }
}
