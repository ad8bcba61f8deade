//! CLI Command Implementations
//!
//! Each command loads its inputs, runs one transform and writes the result.

use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::dsp::{backwards, mix, pan, remove_vocals};
use crate::engine::{load_mono, load_native, load_stereo, write_wav, Sound};
use crate::error::Result;

/// Proportion used by the demo's synth/water mix
const DEMO_MIX_PROPORTION: f32 = 0.2;

/// Summary printed by the `info` command
#[derive(Debug, Clone, Serialize)]
pub struct SoundInfo {
    pub path: String,
    pub rate: u32,
    pub channels: u16,
    pub frames: usize,
    pub duration_secs: f64,
    pub peak: f32,
}

impl SoundInfo {
    pub fn from_sound(path: &Path, sound: &Sound) -> Self {
        Self {
            path: path.display().to_string(),
            rate: sound.rate(),
            channels: sound.num_channels(),
            frames: sound.num_frames(),
            duration_secs: sound.duration_secs(),
            peak: sound.peak(),
        }
    }
}

/// Reverse a sound.
pub fn reverse(input: &Path, output: &Path) -> Result<()> {
    info!("Reversing {} -> {}", input.display(), output.display());

    let sound = load_mono(input)?;
    write_wav(&backwards(&sound).into(), output)?;

    println!("Reversed: {}", output.display());
    Ok(())
}

/// Cross-fade two sounds.
pub fn mix_files(first: &Path, second: &Path, output: &Path, p: f32) -> Result<()> {
    info!(
        "Mixing {} and {} at p = {} -> {}",
        first.display(),
        second.display(),
        p,
        output.display()
    );

    let a = load_mono(first)?;
    let b = load_mono(second)?;
    write_wav(&mix(&a, &b, p)?.into(), output)?;

    println!("Mixed: {}", output.display());
    Ok(())
}

/// Pan a sound from left to right.
pub fn pan_file(input: &Path, output: &Path) -> Result<()> {
    info!("Panning {} -> {}", input.display(), output.display());

    let sound = load_stereo(input)?;
    write_wav(&pan(&sound).into(), output)?;

    println!("Panned: {}", output.display());
    Ok(())
}

/// Remove center-channel content.
pub fn remove_vocals_file(input: &Path, output: &Path) -> Result<()> {
    info!("Removing vocals {} -> {}", input.display(), output.display());

    let sound = load_stereo(input)?;
    write_wav(&remove_vocals(&sound).into(), output)?;

    println!("Vocals removed: {}", output.display());
    Ok(())
}

/// Summarize a file in its stored layout.
pub fn sound_info(input: &Path) -> Result<SoundInfo> {
    let sound = load_native(input)?;
    Ok(SoundInfo::from_sound(input, &sound))
}

/// Print a JSON summary of a file.
pub fn show_info(input: &Path) -> Result<()> {
    let summary = sound_info(input)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Run the demonstration: reverse `mystery.wav` and mix `synth.wav` with
/// `water.wav`. Inputs that are missing are skipped.
pub fn demo(sounds_dir: &Path, out_dir: &Path) -> Result<()> {
    info!(
        "Running demo from {} into {}",
        sounds_dir.display(),
        out_dir.display()
    );
    std::fs::create_dir_all(out_dir)?;

    let mystery = sounds_dir.join("mystery.wav");
    if mystery.exists() {
        reverse(&mystery, &out_dir.join("adamreverse.wav"))?;
    } else {
        warn!("Skipping reverse: {} not found", mystery.display());
    }

    let synth = sounds_dir.join("synth.wav");
    let water = sounds_dir.join("water.wav");
    if synth.exists() && water.exists() {
        mix_files(
            &synth,
            &water,
            &out_dir.join("synthwater.wav"),
            DEMO_MIX_PROPORTION,
        )?;
    } else {
        warn!(
            "Skipping mix: {} or {} not found",
            synth.display(),
            water.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{channel_count, MonoSound, StereoSound};
    use tempfile::tempdir;

    fn write_mono(path: &Path, rate: u32, samples: Vec<f32>) {
        write_wav(&MonoSound::new(rate, samples).into(), path).unwrap();
    }

    #[test]
    fn test_reverse_writes_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.wav");
        let output = dir.path().join("out.wav");
        write_mono(&input, 8000, vec![0.5, 0.0, -0.5]);

        reverse(&input, &output).unwrap();

        let reversed = load_mono(&output).unwrap();
        assert_eq!(reversed.len(), 3);
        assert!(reversed.samples[0] < 0.0);
        assert!(reversed.samples[2] > 0.0);
    }

    #[test]
    fn test_mix_files_rate_mismatch_writes_nothing() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.wav");
        let second = dir.path().join("b.wav");
        let output = dir.path().join("out.wav");
        write_mono(&first, 8000, vec![0.1; 4]);
        write_mono(&second, 16000, vec![0.1; 4]);

        let err = mix_files(&first, &second, &output, 0.5).unwrap_err();
        assert_eq!(err.error_code(), "SAMPLE_RATE_MISMATCH");
        assert!(!output.exists());
    }

    #[test]
    fn test_remove_vocals_file_outputs_mono() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("song.wav");
        let output = dir.path().join("karaoke.wav");
        let sound = StereoSound::new(8000, vec![0.5, 0.25], vec![0.5, 0.0]).unwrap();
        write_wav(&sound.into(), &input).unwrap();

        remove_vocals_file(&input, &output).unwrap();

        assert_eq!(channel_count(&output).unwrap(), 1);
    }

    #[test]
    fn test_pan_file_sweeps_left_to_right() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("car.wav");
        let output = dir.path().join("car_pan.wav");
        let sound = StereoSound::new(8000, vec![0.5; 5], vec![0.5; 5]).unwrap();
        write_wav(&sound.into(), &input).unwrap();

        pan_file(&input, &output).unwrap();

        assert_eq!(channel_count(&output).unwrap(), 2);
        let panned = load_stereo(&output).unwrap();
        assert_eq!(panned.len(), 5);
        assert!(panned.left()[0] > 0.49);
        assert_eq!(panned.right()[0], 0.0);
        assert_eq!(panned.left()[4], 0.0);
        assert!(panned.right()[4] > 0.49);
    }

    #[test]
    fn test_sound_info_keeps_stereo_file_stereo() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("wide.wav");
        // Opposite channels would cancel to silence if downmixed
        let sound = StereoSound::new(22050, vec![0.5; 4], vec![-0.5; 4]).unwrap();
        write_wav(&sound.into(), &input).unwrap();

        let summary = sound_info(&input).unwrap();

        assert_eq!(summary.channels, 2);
        assert_eq!(summary.rate, 22050);
        assert_eq!(summary.frames, 4);
        assert!(summary.peak > 0.49);
        show_info(&input).unwrap();
    }

    #[test]
    fn test_sound_info_mono_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("mono.wav");
        write_mono(&input, 8000, vec![0.25; 8]);

        let summary = sound_info(&input).unwrap();
        assert_eq!(summary.channels, 1);
        assert_eq!(summary.frames, 8);
    }

    #[test]
    fn test_sound_info_from_sound() {
        let sound: Sound = MonoSound::new(100, vec![0.5, -0.75]).into();
        let summary = SoundInfo::from_sound(Path::new("x.wav"), &sound);

        assert_eq!(summary.rate, 100);
        assert_eq!(summary.channels, 1);
        assert_eq!(summary.frames, 2);
        assert_eq!(summary.peak, 0.75);
    }

    #[test]
    fn test_demo_skips_missing_inputs() {
        let sounds = tempdir().unwrap();
        let out = tempdir().unwrap();
        let out_dir = out.path().join("results");
        write_mono(&sounds.path().join("mystery.wav"), 8000, vec![0.1, 0.2]);

        demo(sounds.path(), &out_dir).unwrap();

        assert!(out_dir.join("adamreverse.wav").exists());
        assert!(!out_dir.join("synthwater.wav").exists());
    }
}
