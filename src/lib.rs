//! Wavemix - 16-bit PCM Sample Toolkit
//!
//! Wavemix loads uncompressed WAV audio into memory, applies simple
//! per-sample transforms and writes the result back out.
//!
//! # Architecture
//!
//! Two leaf modules used in sequence by a thin driver:
//! - `engine`: the in-memory `Sound` model and the WAV codec
//! - `dsp`: pure transforms (reverse, mix, pan, vocal removal)
//!
//! The `cli` module wires them together for the `wavemix-cli` binary.

pub mod cli;
pub mod dsp;
pub mod engine;
pub mod error;

pub use dsp::{backwards, mix, pan, remove_vocals};
pub use engine::{
    channel_count, decode, encode, load_mono, load_native, load_stereo, load_wav, write_wav,
};
pub use engine::{MonoSound, Sound, StereoSound};
pub use error::{Result, WavemixError};
