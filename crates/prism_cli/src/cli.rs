use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "Render a scene file with a recursive reflection ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(2..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(2..))]
    pub height: u32,

    /// Scene file to read (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output image; the format follows the extension (defaults to PPM on stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Primary rays per pixel; more than one enables jittered anti-aliasing
    #[arg(long, short = 's', default_value_t = 1)]
    pub samples: u32,

    /// Seed for sample jitter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum reflection bounce depth
    #[arg(long, default_value_t = 64)]
    pub max_depth: u32,

    /// Write the loaded scene as JSON to this file
    #[arg(long)]
    pub dump_json: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "warn")]
    pub debug_level: LogLevel,
}
