//! Configuration and CLI argument handling

use clap::{Parser, ValueEnum};

/// How the display surface is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// A single self-rewriting line on the terminal
    Text,
    /// One JSON object per render
    Json,
}

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "stopwatch-widget")]
#[command(about = "A terminal stopwatch controlled with start, pause and reset commands")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Display output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputMode,

    /// Do not colour the display while paused
    #[arg(long)]
    pub no_color: bool,

    /// Start counting immediately instead of waiting for a start command
    #[arg(short, long)]
    pub autostart: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
