//! Reverse, Mix, Pan and Vocal Removal
//!
//! Simple per-sample transforms. None of them mutate their input; the
//! sample rate of the output always matches the input.

use log::debug;

use crate::engine::{MonoSound, StereoSound};
use crate::error::{Result, WavemixError};

/// Reverse a mono sound
///
/// # Example
/// ```
/// use wavemix::{backwards, MonoSound};
///
/// let sound = MonoSound::new(8000, vec![0.5, -0.5, 0.0]);
/// assert_eq!(backwards(&sound).samples, vec![0.0, -0.5, 0.5]);
/// ```
pub fn backwards(sound: &MonoSound) -> MonoSound {
    debug!("Reversing {} samples", sound.len());
    let samples = sound.samples.iter().rev().copied().collect();
    MonoSound::new(sound.rate, samples)
}

/// Cross-fade two mono sounds
///
/// Each output sample is `first * p + second * (1 - p)`. The output is as
/// long as the shorter input; trailing samples of the longer one are dropped.
///
/// # Arguments
/// * `first` - Sound weighted by `p`
/// * `second` - Sound weighted by `1 - p`
/// * `p` - Mix proportion in [0.0, 1.0]
///
/// # Errors
/// * `SampleRateMismatch` - If the two sounds have different rates
/// * `InvalidParameter` - If `p` is not a finite value in [0.0, 1.0]
pub fn mix(first: &MonoSound, second: &MonoSound, p: f32) -> Result<MonoSound> {
    if first.rate != second.rate {
        return Err(WavemixError::SampleRateMismatch {
            left: first.rate,
            right: second.rate,
        });
    }
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(WavemixError::InvalidParameter {
            name: "p",
            reason: format!("{} is outside [0.0, 1.0]", p),
        });
    }

    debug!(
        "Mixing {} and {} samples at p = {}",
        first.len(),
        second.len(),
        p
    );
    let samples = first
        .samples
        .iter()
        .zip(&second.samples)
        .map(|(a, b)| a * p + b * (1.0 - p))
        .collect();
    Ok(MonoSound::new(first.rate, samples))
}

/// Sweep a stereo sound from the left channel to the right
///
/// Frame `i` of `n` has its left channel scaled by `1 - i/(n-1)` and its
/// right channel by `i/(n-1)`. With a single frame the ratio is taken as 0,
/// leaving the frame fully on the left.
pub fn pan(sound: &StereoSound) -> StereoSound {
    let n = sound.len();
    debug!("Panning {} frames", n);

    let ratio = |i: usize| {
        if n <= 1 {
            0.0
        } else {
            i as f32 / (n - 1) as f32
        }
    };

    sound.map_frames(|i, l, r| (l * (1.0 - ratio(i)), r * ratio(i)))
}

/// Cancel content common to both channels by subtracting right from left
pub fn remove_vocals(sound: &StereoSound) -> MonoSound {
    debug!("Removing center channel from {} frames", sound.len());
    let samples = sound
        .left()
        .iter()
        .zip(sound.right())
        .map(|(l, r)| l - r)
        .collect();
    MonoSound::new(sound.rate(), samples)
}
