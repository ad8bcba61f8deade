//! CLI Module
//!
//! Command-line interface for the Wavemix toolkit.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wavemix - load, transform and write 16-bit WAV samples
#[derive(Parser, Debug)]
#[command(name = "wavemix")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reverse a sound (loaded as mono)
    #[command(name = "reverse")]
    Reverse {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        output: PathBuf,
    },

    /// Cross-fade two sounds (loaded as mono)
    #[command(name = "mix")]
    Mix {
        /// First input, weighted by p
        first: PathBuf,

        /// Second input, weighted by 1 - p
        second: PathBuf,

        /// Output WAV file
        output: PathBuf,

        /// Mix proportion in [0.0, 1.0]
        #[arg(short, long, default_value_t = 0.5)]
        p: f32,
    },

    /// Sweep a stereo sound from left to right
    #[command(name = "pan")]
    Pan {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        output: PathBuf,
    },

    /// Remove center-panned content (usually vocals)
    #[command(name = "remove-vocals")]
    RemoveVocals {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        output: PathBuf,
    },

    /// Print a JSON summary of a WAV file
    #[command(name = "info")]
    Info {
        /// Input WAV file
        input: PathBuf,
    },

    /// Run the bundled demonstration over a directory of sounds
    #[command(name = "demo")]
    Demo {
        /// Directory holding the demo sounds
        sounds_dir: PathBuf,

        /// Directory to write results into
        out_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mix_with_proportion() {
        let cli = Cli::parse_from(["wavemix", "mix", "a.wav", "b.wav", "out.wav", "-p", "0.2"]);
        match cli.command {
            Some(Commands::Mix { first, p, .. }) => {
                assert_eq!(first, PathBuf::from("a.wav"));
                assert_eq!(p, 0.2);
            }
            other => panic!("Expected mix command, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_mix_default_proportion() {
        let cli = Cli::parse_from(["wavemix", "mix", "a.wav", "b.wav", "out.wav"]);
        assert!(matches!(cli.command, Some(Commands::Mix { p, .. }) if p == 0.5));
    }

    #[test]
    fn test_parse_verbose_global() {
        let cli = Cli::parse_from(["wavemix", "remove-vocals", "in.wav", "out.wav", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::RemoveVocals { .. })));
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
