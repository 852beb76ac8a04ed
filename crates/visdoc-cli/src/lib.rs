//! CLI logic for the Visdoc documentation tool.
//!
//! This module wires argument parsing, configuration loading, and file I/O
//! around the [`visdoc::DocumentBuilder`] pipeline.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use visdoc::{DocumentBuilder, VisdocError, profile::Profile};

/// Run the Visdoc CLI application
///
/// Without `--diagram` the input is read as a markdown guide and the
/// generated document is written to the output path. With `--diagram` the
/// input is read as a JSON element list and a single Mermaid block is
/// written instead.
///
/// # Errors
///
/// Returns `VisdocError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed element lists in diagram mode
pub fn run(args: &Args) -> Result<(), VisdocError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        format = args.format;
        "Processing guide"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DocumentBuilder::new(app_config);
    let output = match args.diagram {
        Some(kind) => builder.render_diagram_json(kind, &source)?,
        None => builder.transform(&source, &Profile::from(args.format.as_str())),
    };

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Documentation written");

    Ok(())
}
