//! Wavemix CLI - 16-bit WAV Sample Toolkit
//!
//! Command-line interface for the Wavemix transforms.

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use wavemix::cli::{commands, Cli, Commands};
use wavemix::Result;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Wavemix v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(cli) {
        error!("{} [{}]", err, err.error_code());
        for suggestion in err.recovery_suggestions() {
            eprintln!("  - {}", suggestion);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Wavemix v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Reverse { input, output } => commands::reverse(&input, &output),
        Commands::Mix {
            first,
            second,
            output,
            p,
        } => commands::mix_files(&first, &second, &output, p),
        Commands::Pan { input, output } => commands::pan_file(&input, &output),
        Commands::RemoveVocals { input, output } => commands::remove_vocals_file(&input, &output),
        Commands::Info { input } => commands::show_info(&input),
        Commands::Demo {
            sounds_dir,
            out_dir,
        } => commands::demo(&sounds_dir, &out_dir),
    }
}
