//! Configuration for the gituml CLI
//!
//! This module provides the command-line configuration for the converter,
//! including the repository location, output path, date window, and
//! logging options.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use gituml_log::ParseOptions;

/// gituml - render git commit history as a PlantUML graph
#[derive(Parser, Debug, Clone)]
#[command(name = "gituml")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Repository to visualize: a local path or a clone URL
    pub repository: String,

    /// Output file for the PlantUML document
    ///
    /// An existing file is overwritten. A relative path resolves against
    /// the current working directory.
    pub output: PathBuf,

    /// Only include commits since this date (inclusive), YYYY-MM-DD
    pub since: NaiveDate,

    /// Enable verbose logging (debug level)
    ///
    /// When enabled, logs per-stage details such as parsed commit counts.
    /// Logs are written to stderr so the document pipeline stays clean.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Discard file entries that precede any commit header
    ///
    /// By default such lines abort the run as malformed collaborator
    /// output.
    #[arg(long, default_value = "false")]
    pub lenient: bool,
}

impl Config {
    /// Get the output path, resolving a relative path against the
    /// current working directory
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&self.output))
                .unwrap_or_else(|_| self.output.clone())
        }
    }

    /// Parser options derived from the CLI flags
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        if self.lenient {
            ParseOptions::strict().lenient_orphans()
        } else {
            ParseOptions::strict()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the output parent directory does not exist and
    /// cannot be created.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let output = self.output_path();
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::OutputDirectoryCreateFailed(parent.to_path_buf(), e)
                })?;
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to create the output parent directory
    #[error("Failed to create output directory {0}: {1}")]
    OutputDirectoryCreateFailed(PathBuf, std::io::Error),
}
