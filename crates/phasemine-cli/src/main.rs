//! phasemine CLI entry point.

use std::{fmt::Write as _, process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};
use miette::GraphicalReportHandler;

use phasemine::PhasemineError;
use phasemine_cli::{Args, error_adapter::to_reportables};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match phasemine_cli::run(&args) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Install env_logger at `level`; unknown levels fall back to `warn`.
fn init_logger(level: &str) {
    let (filter, known) = match LevelFilter::from_str(level) {
        Ok(filter) => (filter, true),
        Err(_) => (LevelFilter::Warn, false),
    };

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();

    if !known {
        warn!(requested = level; "Unknown log level, using warn");
    }
    info!(log_level:? = filter; "Starting phasemine");
}

/// Log every diagnostic of `err` as a rendered miette report.
fn report(err: &PhasemineError) {
    let handler = GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        if handler.render_report(&mut rendered, &reportable).is_err() {
            // Rendering into a String only fails inside a Display impl.
            let _ = write!(rendered, "{reportable}");
        }
        error!("{rendered}");
    }
}
