//! Command-line argument definitions for the Visdoc CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the documentation
//! profile, configuration file selection, and logging verbosity.

use clap::Parser;

use visdoc::DiagramKind;

/// Transform technical guides into visual documentation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input markdown file
    pub input: String,

    /// Output markdown file
    pub output: String,

    /// Type of documentation to generate
    #[arg(long, default_value = "iot", value_parser = ["iot", "api", "tutorial"])]
    pub format: String,

    /// Path to configuration file (JSON, or TOML with a `.toml` extension)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Treat the input as a JSON element list and emit a single diagram of this kind
    #[arg(long, value_name = "KIND")]
    pub diagram: Option<DiagramKind>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
