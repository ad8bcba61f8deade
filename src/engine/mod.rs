//! Audio Engine Module
//!
//! Core sound handling:
//! - In-memory sound model (mono/stereo)
//! - 16-bit PCM WAV encode/decode

pub mod io;
pub mod sound;

pub use io::{
    channel_count, decode, encode, load_mono, load_native, load_stereo, load_wav, write_wav,
};
pub use sound::{MonoSound, Sound, StereoSound};
