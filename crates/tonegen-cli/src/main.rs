//! tonegen CLI - Command-line interface for deterministic tone generation
//!
//! This binary provides commands for rendering render specs and single
//! waveforms to WAV, validating specs and inspecting WAV files.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use tonegen_cli::commands;
use tonegen_cli::commands::tone::ToneArgs;
use tonegen_cli::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate { spec, output, json } => {
            commands::generate::run(&spec, output.as_deref(), json)
        }
        Commands::Tone {
            waveform,
            output,
            frequency,
            amplitude,
            duration,
            sample_rate,
            bytes_per_sample,
            starting_freq,
            ending_freq,
            pulse_freq,
            json,
        } => {
            let args = ToneArgs {
                waveform: waveform.into(),
                output,
                frequency,
                amplitude,
                duration,
                sample_rate,
                bytes_per_sample,
                starting_freq,
                ending_freq,
                pulse_freq,
            };
            commands::tone::run(&args, json)
        }
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::EXIT_INVALID)
        }
    }
}
