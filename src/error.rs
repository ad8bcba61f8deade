//! Error handling for Wavemix
//!
//! Every failure carries a stable error code and, where it helps, a list of
//! recovery suggestions for the CLI to print.

use thiserror::Error;

/// Result type alias for Wavemix operations
pub type Result<T> = std::result::Result<T, WavemixError>;

/// Main error type for Wavemix operations
#[derive(Error, Debug)]
pub enum WavemixError {
    // Format Errors
    #[error("Unsupported bit depth: {bits}-bit (only 16-bit PCM is supported)")]
    UnsupportedBitDepth { bits: u16 },

    #[error("Unsupported channel count: {channels} (only mono/stereo supported)")]
    UnsupportedChannels { channels: u16 },

    #[error("Invalid audio file: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<hound::Error>,
    },

    // Input Errors
    #[error("Sample rate mismatch: {left} Hz vs {right} Hz")]
    SampleRateMismatch { left: u32, right: u32 },

    #[error("Channel length mismatch: left has {left} samples, right has {right}")]
    ChannelLengthMismatch { left: usize, right: usize },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to write audio file: {path}")]
    AudioWriteError {
        path: String,
        #[source]
        source: hound::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WavemixError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WavemixError::UnsupportedBitDepth { .. } => "UNSUPPORTED_BIT_DEPTH",
            WavemixError::UnsupportedChannels { .. } => "UNSUPPORTED_CHANNELS",
            WavemixError::InvalidAudio { .. } => "INVALID_AUDIO",
            WavemixError::SampleRateMismatch { .. } => "SAMPLE_RATE_MISMATCH",
            WavemixError::ChannelLengthMismatch { .. } => "CHANNEL_LENGTH_MISMATCH",
            WavemixError::InvalidParameter { .. } => "INVALID_PARAMETER",
            WavemixError::FileNotFound { .. } => "FILE_NOT_FOUND",
            WavemixError::AudioWriteError { .. } => "AUDIO_WRITE_ERROR",
            WavemixError::Io(_) => "IO_ERROR",
            WavemixError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the caller can fix this error by changing its input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WavemixError::UnsupportedBitDepth { .. }
                | WavemixError::UnsupportedChannels { .. }
                | WavemixError::SampleRateMismatch { .. }
                | WavemixError::InvalidParameter { .. }
                | WavemixError::FileNotFound { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            WavemixError::UnsupportedBitDepth { .. } => vec![
                "Convert the file to 16-bit PCM WAV first",
                "8, 24 and 32-bit files are not supported",
            ],
            WavemixError::UnsupportedChannels { .. } => {
                vec!["Downmix the file to mono or stereo first"]
            }
            WavemixError::InvalidAudio { .. } => vec![
                "Check if the file plays in another application",
                "The file may be corrupted - try re-exporting from source",
            ],
            WavemixError::SampleRateMismatch { .. } => vec![
                "Resample one of the inputs so both share a sample rate",
            ],
            WavemixError::InvalidParameter { .. } => {
                vec!["The mix proportion must be between 0.0 and 1.0"]
            }
            WavemixError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            WavemixError::AudioWriteError { .. } => vec![
                "Check the output directory exists and is writable",
                "Free up disk space",
            ],
            _ => vec![],
        }
    }
}
