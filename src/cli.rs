use clap::{Parser, ValueEnum};
use log::LevelFilter;
use crate::integrator::Strategy;

/// Verbosity accepted by `--debug-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Verbosity {
    Error,
    Warn,
    Info,
    Debug,
    /// Also logs every sample whose light ray missed the medium.
    Trace,
}

impl From<Verbosity> for LevelFilter {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Error => LevelFilter::Error,
            Verbosity::Warn => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// `--strategy` values; `1` and `2` match the interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    #[value(alias = "1")]
    Backward,
    #[value(alias = "2")]
    Forward,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Backward => Strategy::Backward,
            StrategyArg::Forward => Strategy::Forward,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "volmarch")]
#[command(about = "Raymarches a single-scattering medium inside a sphere")]
pub struct Args {
    /// Marching direction; asked on stdin when omitted
    #[arg(long, short = 'a')]
    pub strategy: Option<StrategyArg>,

    /// JSON scene description; the built-in reference scene is used when omitted
    #[arg(long, short = 's')]
    pub scene: Option<String>,

    /// Output file path (.ppm, .png or .jpg)
    #[arg(short, long, default_value = "image.ppm")]
    pub output: String,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Log verbosity; RUST_LOG directives are applied as well
    #[arg(long, value_enum, default_value_t = Verbosity::Info)]
    pub debug_level: Verbosity,
}
