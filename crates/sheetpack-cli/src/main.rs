//! sheetpack CLI - generate, validate and open xlsx packages

mod demo;
mod logger;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use sheetpack_xlsx::{
    open_in_viewer, validate_file, Compression, PackageOptions, ViewerCommand, XlsxWriter,
};

use crate::logger::StderrLogger;

#[derive(Parser)]
#[command(name = "sheetpack")]
#[command(author, version, about = "Spreadsheet package writer and checker")]
struct Cli {
    /// Log debug output from the writer
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the demo report
    Demo {
        /// Output xlsx file
        output: PathBuf,

        /// Open the report in a viewer once written
        #[arg(long)]
        open: bool,

        /// Validate the report once written; exits non-zero on issues
        #[arg(long)]
        validate: bool,

        /// Store parts without compression
        #[arg(long)]
        stored: bool,
    },

    /// Check the structure of an xlsx package
    Validate {
        /// Input xlsx file
        input: PathBuf,
    },

    /// Open an xlsx package in a viewer
    Open {
        /// Input xlsx file
        input: PathBuf,

        /// Viewer program (default: the system opener)
        #[arg(short, long)]
        program: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // SetLoggerError only implements std::error::Error with log's `std` feature
    let logger = StderrLogger::install(level)
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    match cli.command {
        Commands::Demo {
            output,
            open,
            validate,
            stored,
        } => Ok(exit_code(write_demo(&output, open, validate, stored, logger)?)),
        Commands::Validate { input } => Ok(exit_code(validate_file(&input, logger) == 0)),
        Commands::Open { input, program } => {
            let viewer = program.map_or(ViewerCommand::SystemDefault, ViewerCommand::program);
            Ok(exit_code(open_in_viewer(&input, &viewer, logger)))
        }
    }
}

/// Write the demo report; `false` when validation found issues
fn write_demo(
    output: &Path,
    open: bool,
    validate: bool,
    stored: bool,
    logger: &StderrLogger,
) -> Result<bool> {
    log::info!("Creating spreadsheet...");
    let workbook = demo::build_report(chrono::Local::now().naive_local())
        .context("Failed to build demo report")?;

    let writer = XlsxWriter::with_options(PackageOptions {
        compression: if stored {
            Compression::Stored
        } else {
            Compression::Deflated
        },
        ..PackageOptions::default()
    });
    writer
        .write_file(&workbook, output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    log::info!("Wrote '{}'", output.display());

    if validate && validate_file(output, logger) > 0 {
        return Ok(false);
    }
    if open {
        // A viewer that fails to start has already been logged
        open_in_viewer(output, &ViewerCommand::SystemDefault, logger);
    }
    Ok(true)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_demo_flags() {
        let cli = Cli::parse_from([
            "sheetpack",
            "-v",
            "demo",
            "out.xlsx",
            "--validate",
            "--stored",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Demo {
                output,
                open,
                validate,
                stored,
            } => {
                assert_eq!(output, PathBuf::from("out.xlsx"));
                assert!(!open);
                assert!(validate);
                assert!(stored);
            }
            _ => panic!("expected demo command"),
        }
    }

    #[test]
    fn test_write_and_validate_demo() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("MySheet.xlsx");
        let logger = StderrLogger::new(LevelFilter::Error);

        assert!(write_demo(&path, false, true, false, &logger).unwrap());
        assert!(path.exists());
        assert_eq!(validate_file(&path, &logger), 0);
    }
}
