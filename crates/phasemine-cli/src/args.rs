//! Command-line argument definitions for the phasemine CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global options select the configuration file and logging
//! verbosity; the [`Command`] picks what to extract from the input records.

use clap::{Parser, Subcommand};

/// Command-line arguments for the phasemine tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// What to extract from the diagram records.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the element pairs that form no compounds
    Nonformers {
        /// Path to the input records (JSON array or one record per line)
        input: String,

        /// Path to the output JSON file; standard output if omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Dump the flattened boundary of every labeled region
    Points {
        /// Path to the input records (JSON array or one record per line)
        input: String,

        /// Path to the output JSON file; standard output if omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Extract the liquidus lines reported for one element pair
    Liquidus {
        /// Path to the input records (JSON array or one record per line)
        input: String,

        /// First element symbol
        element_a: String,

        /// Second element symbol
        element_b: String,

        /// Path to the output JSON file; standard output if omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Command {
    /// Path to the input records.
    pub fn input(&self) -> &str {
        match self {
            Command::Nonformers { input, .. }
            | Command::Points { input, .. }
            | Command::Liquidus { input, .. } => input,
        }
    }

    /// Path to the output file, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Command::Nonformers { output, .. }
            | Command::Points { output, .. }
            | Command::Liquidus { output, .. } => output.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nonformers() {
        let args = Args::parse_from(["phasemine", "nonformers", "records.json", "-o", "out.json"]);

        assert_eq!(args.command.input(), "records.json");
        assert_eq!(args.command.output(), Some("out.json"));
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_liquidus_with_global_options() {
        let args = Args::parse_from([
            "phasemine",
            "liquidus",
            "records.json",
            "Cu",
            "Ag",
            "--config",
            "phasemine.toml",
            "--log-level",
            "debug",
        ]);

        match &args.command {
            Command::Liquidus {
                element_a,
                element_b,
                output,
                ..
            } => {
                assert_eq!(element_a, "Cu");
                assert_eq!(element_b, "Ag");
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(args.config.as_deref(), Some("phasemine.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_missing_command_is_rejected() {
        assert!(Args::try_parse_from(["phasemine"]).is_err());
    }
}
