//! CLI logic for the phasemine tool.
//!
//! This module contains the core CLI logic: it loads the configuration,
//! reads the diagram records and writes the requested result as JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
};

use log::info;
use serde::Serialize;

use phasemine::{Miner, PhasemineError, export, records};

/// Run the phasemine CLI application
///
/// This function reads the input records, runs the selected command and
/// writes its JSON result to the output file or standard output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PhasemineError` for:
/// - File I/O errors
/// - Configuration loading or validation errors
/// - Records that are not valid JSON
/// - Entry errors, unless the configuration skips them
pub fn run(args: &Args) -> Result<(), PhasemineError> {
    let command = &args.command;
    info!(
        input_path = command.input(),
        output_path = command.output().unwrap_or("-");
        "Processing records"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let miner = Miner::new(app_config)?;

    // Read input file
    let entries = records::read_entries(BufReader::new(File::open(command.input())?))?;

    match command {
        Command::Nonformers { .. } => {
            let classification = miner.classify(&entries)?;
            info!(
                seen = classification.records_seen(),
                considered = classification.records_considered(),
                skipped = classification.records_skipped();
                "Records processed"
            );
            write_output(command.output(), classification.nonformers())?;
            info!(nonformers = classification.nonformers().len(); "Nonformers exported");
        }
        Command::Points { .. } => {
            let shapes = miner.shape_points(&entries)?;
            write_output(command.output(), &shapes)?;
            info!(shapes = shapes.len(); "Region boundaries exported");
        }
        Command::Liquidus {
            element_a,
            element_b,
            ..
        } => {
            let report = miner.liquidus(&entries, element_a, element_b)?;
            write_output(command.output(), &report)?;
            info!(lines = report.lines().len(); "Liquidus lines exported");
        }
    }

    Ok(())
}

/// Write `value` as JSON to `path`, or to standard output without a path.
fn write_output<T: Serialize + ?Sized>(
    path: Option<&str>,
    value: &T,
) -> Result<(), PhasemineError> {
    match path {
        Some(path) => export::write_json(BufWriter::new(File::create(path)?), value),
        None => export::write_json(io::stdout().lock(), value),
    }
}
