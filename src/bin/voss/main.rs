//! voss - Terminal scope for Voss 1/f noise
//!
//! Run with: cargo run -- --octaves 6 --mode stateful

mod app;
mod source;
mod ui;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use app::Scope;

/// Which generator variant drives the scope
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Slots hold their value until refreshed
    Stateful,
    /// Only the slots that fire contribute
    Stateless,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Stateful => "stateful",
            Mode::Stateless => "stateless",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "voss", about = "Watch Voss 1/f noise and its spectrum")]
pub struct Args {
    /// Number of octave-spaced random sources
    #[arg(long, default_value_t = 6)]
    pub octaves: u32,

    /// Seed for the random sources
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Generator variant
    #[arg(long, value_enum, default_value_t = Mode::Stateful)]
    pub mode: Mode,

    /// Clamp outputs from below with this floor
    #[arg(long, allow_negative_numbers = true)]
    pub floor: Option<f64>,

    /// Steps generated per UI frame
    #[arg(long, default_value_t = 16)]
    pub rate: usize,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    Scope::new(args).run()
}
