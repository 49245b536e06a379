//! CLI argument definitions for the tonegen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand, ValueEnum};

use tonegen_cli::commands::tone::Waveform;

/// tonegen - Deterministic waveform synthesis to PCM WAV
#[derive(Parser)]
#[command(name = "tonegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a spec file to a WAV file
    Generate {
        /// Path to the JSON render spec
        #[arg(short, long)]
        spec: String,

        /// Output WAV path (overrides the spec's "output")
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a single waveform without a spec file
    Tone {
        /// Waveform to render
        #[arg(value_enum)]
        waveform: WaveformArg,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Frequency in Hz (sine and triangle)
        #[arg(short, long, default_value_t = 440.0)]
        frequency: f64,

        /// Peak amplitude
        #[arg(short, long, default_value_t = 0.5)]
        amplitude: f64,

        /// Duration in seconds
        #[arg(short, long, default_value_t = 1.0)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Bytes per sample (1 or 2)
        #[arg(long, default_value_t = 2)]
        bytes_per_sample: u16,

        /// Starting frequency in Hz (fluctuating-sine)
        #[arg(long)]
        starting_freq: Option<f64>,

        /// Ending frequency in Hz (fluctuating-sine)
        #[arg(long)]
        ending_freq: Option<f64>,

        /// Pulse frequency in Hz (fluctuating-sine)
        #[arg(long)]
        pulse_freq: Option<f64>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a spec file without rendering
    Validate {
        /// Path to the JSON render spec
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the header fields and levels of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum WaveformArg {
    Sine,
    Triangle,
    FluctuatingSine,
}

impl From<WaveformArg> for Waveform {
    fn from(arg: WaveformArg) -> Self {
        match arg {
            WaveformArg::Sine => Waveform::Sine,
            WaveformArg::Triangle => Waveform::Triangle,
            WaveformArg::FluctuatingSine => Waveform::FluctuatingSine,
        }
    }
}
