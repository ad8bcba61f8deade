//! In-memory Sound Model
//!
//! Sounds hold normalized `f32` samples (roughly -1.0 to 1.0) together with
//! their sample rate. A sound is either mono or stereo; stereo sounds keep
//! separate left/right vectors that always share a length.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WavemixError};

/// Single-channel sound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonoSound {
    /// Sample rate in Hz
    pub rate: u32,
    /// Normalized samples
    pub samples: Vec<f32>,
}

impl MonoSound {
    /// Create a new mono sound
    pub fn new(rate: u32, samples: Vec<f32>) -> Self {
        Self { rate, samples }
    }

    /// Number of samples (frames)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the sound holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Two-channel sound
///
/// Left and right are private so the equal-length invariant can only be
/// established through [`StereoSound::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StereoParts")]
pub struct StereoSound {
    rate: u32,
    left: Vec<f32>,
    right: Vec<f32>,
}

impl StereoSound {
    /// Create a new stereo sound
    ///
    /// # Errors
    /// * `ChannelLengthMismatch` - If `left` and `right` differ in length
    pub fn new(rate: u32, left: Vec<f32>, right: Vec<f32>) -> Result<Self> {
        if left.len() != right.len() {
            return Err(WavemixError::ChannelLengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Self { rate, left, right })
    }

    /// Sample rate in Hz
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Left channel samples
    pub fn left(&self) -> &[f32] {
        &self.left
    }

    /// Right channel samples
    pub fn right(&self) -> &[f32] {
        &self.right
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Check if the sound holds no frames
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Build a new sound of the same length by mapping each frame
    ///
    /// The closure receives the frame index and its left/right samples and
    /// returns the new pair.
    pub fn map_frames<F>(&self, mut f: F) -> StereoSound
    where
        F: FnMut(usize, f32, f32) -> (f32, f32),
    {
        let (left, right) = self
            .left
            .iter()
            .zip(&self.right)
            .enumerate()
            .map(|(i, (&l, &r))| f(i, l, r))
            .unzip();
        StereoSound {
            rate: self.rate,
            left,
            right,
        }
    }

    /// Consume the sound, returning `(left, right)`
    pub fn into_channels(self) -> (Vec<f32>, Vec<f32>) {
        (self.left, self.right)
    }
}

#[derive(Deserialize)]
struct StereoParts {
    rate: u32,
    left: Vec<f32>,
    right: Vec<f32>,
}

impl TryFrom<StereoParts> for StereoSound {
    type Error = WavemixError;

    fn try_from(parts: StereoParts) -> Result<Self> {
        StereoSound::new(parts.rate, parts.left, parts.right)
    }
}

/// A mono or stereo sound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Sound {
    Mono(MonoSound),
    Stereo(StereoSound),
}

impl Sound {
    /// Sample rate in Hz
    pub fn rate(&self) -> u32 {
        match self {
            Sound::Mono(m) => m.rate,
            Sound::Stereo(s) => s.rate,
        }
    }

    /// Number of channels (1 or 2)
    pub fn num_channels(&self) -> u16 {
        match self {
            Sound::Mono(_) => 1,
            Sound::Stereo(_) => 2,
        }
    }

    /// Number of frames (samples per channel)
    pub fn num_frames(&self) -> usize {
        match self {
            Sound::Mono(m) => m.len(),
            Sound::Stereo(s) => s.len(),
        }
    }

    /// Check if the sound holds no frames
    pub fn is_empty(&self) -> bool {
        self.num_frames() == 0
    }

    /// Duration in seconds. Zero for a zero sample rate.
    pub fn duration_secs(&self) -> f64 {
        match self.rate() {
            0 => 0.0,
            rate => self.num_frames() as f64 / rate as f64,
        }
    }

    /// Largest absolute sample value across all channels
    pub fn peak(&self) -> f32 {
        let peak_of = |samples: &[f32]| samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        match self {
            Sound::Mono(m) => peak_of(&m.samples),
            Sound::Stereo(s) => peak_of(&s.left).max(peak_of(&s.right)),
        }
    }

    /// Convert to mono, averaging left and right for stereo input
    pub fn into_mono(self) -> MonoSound {
        match self {
            Sound::Mono(m) => m,
            Sound::Stereo(s) => {
                let rate = s.rate;
                let (left, right) = s.into_channels();
                let samples = left
                    .iter()
                    .zip(&right)
                    .map(|(l, r)| (l + r) / 2.0)
                    .collect();
                MonoSound::new(rate, samples)
            }
        }
    }

    /// Convert to stereo, duplicating the channel of mono input
    pub fn into_stereo(self) -> StereoSound {
        match self {
            Sound::Mono(m) => StereoSound {
                rate: m.rate,
                left: m.samples.clone(),
                right: m.samples,
            },
            Sound::Stereo(s) => s,
        }
    }
}

impl From<MonoSound> for Sound {
    fn from(sound: MonoSound) -> Self {
        Sound::Mono(sound)
    }
}

impl From<StereoSound> for Sound {
    fn from(sound: StereoSound) -> Self {
        Sound::Stereo(sound)
    }
}
