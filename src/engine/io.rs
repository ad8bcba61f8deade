//! Audio file I/O for Wavemix
//!
//! Handles decoding and encoding 16-bit PCM WAV data. Mono and stereo
//! containers are supported; any other bit depth is rejected on decode.
//!
//! Samples are normalized by 2^15 on decode and scaled by 2^15 - 1 on
//! encode, so the round trip is lossy by at most one quantization step.

use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;

use crate::engine::sound::{MonoSound, Sound, StereoSound};
use crate::error::{Result, WavemixError};

/// The only supported bit depth
pub const BITS_PER_SAMPLE: u16 = 16;

/// Divisor used when normalizing raw samples (2^15)
const DECODE_SCALE: f32 = 32768.0;

/// Multiplier used when quantizing normalized samples (2^15 - 1)
const ENCODE_SCALE: f32 = 32767.0;

/// Decode a WAV stream into a sound
///
/// Stereo containers are averaged down to mono unless `stereo` is set; mono
/// containers are duplicated into both channels when `stereo` is set.
///
/// # Arguments
/// * `source` - Reader positioned at the start of the RIFF header
/// * `stereo` - Whether to return a stereo sound
///
/// # Errors
/// * `InvalidAudio` - If the header or sample data cannot be parsed, or the
///   samples are not integer PCM
/// * `UnsupportedBitDepth` - If the file is not 16-bit
/// * `Io` - If reading from `source` fails
/// * `UnsupportedChannels` - If the file is neither mono nor stereo
pub fn decode<R: Read>(source: R, stereo: bool) -> Result<Sound> {
    let reader =
        WavReader::new(source).map_err(|e| map_read_error("Failed to read WAV header", e))?;
    decode_reader(reader, stereo)
}

/// Encode a sound as a 16-bit PCM WAV stream
///
/// Mono sounds produce a one-channel file, stereo sounds a two-channel file
/// with left/right interleaved per frame.
///
/// # Errors
/// * `InvalidAudio` - If the sound has a zero sample rate
/// * `Io` - If writing to `destination` fails
pub fn encode<W: Write + Seek>(sound: &Sound, destination: W) -> Result<()> {
    let spec = wav_spec(sound)?;
    let writer = WavWriter::new(destination, spec).map_err(map_write_error)?;
    write_frames(writer, sound).map_err(map_write_error)
}

/// Load a WAV file from disk
///
/// The file handle is released before returning, on success or error.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * plus everything [`decode`] can return
pub fn load_wav<P: AsRef<Path>>(path: P, stereo: bool) -> Result<Sound> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(WavemixError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let reader = open_reader(path)?;
    debug!("Loading {}", path.display());
    decode_reader(reader, stereo)
}

/// Read the channel count from a WAV file's header without decoding samples
pub fn channel_count<P: AsRef<Path>>(path: P) -> Result<u16> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(WavemixError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let reader = open_reader(path)?;
    Ok(reader.spec().channels)
}

/// Load a WAV file keeping its stored layout: mono files decode as mono,
/// stereo files as stereo
pub fn load_native<P: AsRef<Path>>(path: P) -> Result<Sound> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(WavemixError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let reader = open_reader(path)?;
    let stereo = reader.spec().channels == 2;
    debug!("Loading {} as stored", path.display());
    decode_reader(reader, stereo)
}

/// Load a WAV file as mono, averaging stereo files
pub fn load_mono<P: AsRef<Path>>(path: P) -> Result<MonoSound> {
    load_wav(path, false).map(Sound::into_mono)
}

/// Load a WAV file as stereo, duplicating mono files
pub fn load_stereo<P: AsRef<Path>>(path: P) -> Result<StereoSound> {
    load_wav(path, true).map(Sound::into_stereo)
}

/// Write a sound to a WAV file on disk
///
/// # Errors
/// * `InvalidAudio` - If the sound has a zero sample rate
/// * `AudioWriteError` - If the file cannot be created or written
pub fn write_wav<P: AsRef<Path>>(sound: &Sound, path: P) -> Result<()> {
    let path = path.as_ref();
    let spec = wav_spec(sound)?;
    let to_write_error = |source: hound::Error| WavemixError::AudioWriteError {
        path: path.display().to_string(),
        source,
    };

    let writer = WavWriter::create(path, spec).map_err(to_write_error)?;
    write_frames(writer, sound).map_err(to_write_error)?;
    debug!(
        "Wrote {} frames ({} ch) to {}",
        sound.num_frames(),
        spec.channels,
        path.display()
    );
    Ok(())
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn decode_reader<R: Read>(reader: WavReader<R>, stereo: bool) -> Result<Sound> {
    let spec = reader.spec();
    debug!(
        "WAV header: {} ch, {}-bit, {} Hz, {} frames",
        spec.channels,
        spec.bits_per_sample,
        spec.sample_rate,
        reader.duration()
    );

    if spec.bits_per_sample != BITS_PER_SAMPLE {
        return Err(WavemixError::UnsupportedBitDepth {
            bits: spec.bits_per_sample,
        });
    }
    if spec.sample_format != SampleFormat::Int {
        return Err(WavemixError::InvalidAudio {
            reason: "float samples are not supported, only integer PCM".to_string(),
            source: None,
        });
    }
    if spec.channels != 1 && spec.channels != 2 {
        return Err(WavemixError::UnsupportedChannels {
            channels: spec.channels,
        });
    }

    let raw = read_raw_samples(reader)?;
    let rate = spec.sample_rate;

    let sound = match (spec.channels, stereo) {
        (1, false) => Sound::Mono(MonoSound::new(rate, normalize(raw.iter().copied()))),
        (1, true) => {
            let channel = normalize(raw.iter().copied());
            Sound::Stereo(StereoSound::new(rate, channel.clone(), channel)?)
        }
        (_, false) => {
            // Average in the integer domain before normalizing
            let samples = raw
                .chunks_exact(2)
                .map(|frame| (frame[0] as i32 + frame[1] as i32) as f32 / 2.0 / DECODE_SCALE)
                .collect();
            Sound::Mono(MonoSound::new(rate, samples))
        }
        (_, true) => {
            let left = normalize(raw.chunks_exact(2).map(|frame| frame[0]));
            let right = normalize(raw.chunks_exact(2).map(|frame| frame[1]));
            Sound::Stereo(StereoSound::new(rate, left, right)?)
        }
    };

    Ok(sound)
}

fn read_raw_samples<R: Read>(mut reader: WavReader<R>) -> Result<Vec<i16>> {
    let expected = reader.duration() as usize * reader.spec().channels as usize;
    let mut raw = Vec::with_capacity(expected);
    for sample in reader.samples::<i16>() {
        raw.push(sample.map_err(|e| map_read_error("Failed to read 16-bit samples", e))?);
    }
    Ok(raw)
}

fn normalize(raw: impl Iterator<Item = i16>) -> Vec<f32> {
    raw.map(|v| v as f32 / DECODE_SCALE).collect()
}

/// Clamp to [-1, 1], scale and truncate toward zero. NaN maps to 0.
fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * ENCODE_SCALE) as i16
}

fn wav_spec(sound: &Sound) -> Result<WavSpec> {
    if sound.rate() == 0 {
        return Err(WavemixError::InvalidAudio {
            reason: "sample rate must be positive".to_string(),
            source: None,
        });
    }

    Ok(WavSpec {
        channels: sound.num_channels(),
        sample_rate: sound.rate(),
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    })
}

fn write_frames<W: Write + Seek>(
    mut writer: WavWriter<W>,
    sound: &Sound,
) -> std::result::Result<(), hound::Error> {
    match sound {
        Sound::Mono(mono) => {
            for &sample in &mono.samples {
                writer.write_sample(quantize(sample))?;
            }
        }
        Sound::Stereo(stereo) => {
            for (&l, &r) in stereo.left().iter().zip(stereo.right()) {
                writer.write_sample(quantize(l))?;
                writer.write_sample(quantize(r))?;
            }
        }
    }
    writer.finalize()
}

fn invalid_audio(context: &str, e: hound::Error) -> WavemixError {
    WavemixError::InvalidAudio {
        reason: format!("{}: {}", context, e),
        source: Some(e),
    }
}

fn open_reader(path: &Path) -> Result<WavReader<BufReader<File>>> {
    WavReader::open(path)
        .map_err(|e| map_read_error(&format!("Failed to open {}", path.display()), e))
}

/// Underlying read failures stay I/O errors; anything else is a bad container
fn map_read_error(context: &str, e: hound::Error) -> WavemixError {
    match e {
        hound::Error::IoError(io) => WavemixError::Io(io),
        other => invalid_audio(context, other),
    }
}

fn map_write_error(e: hound::Error) -> WavemixError {
    match e {
        hound::Error::IoError(io) => WavemixError::Io(io),
        other => invalid_audio("Failed to encode WAV", other),
    }
}
