//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

use crate::error::CliError;

/// Decide which optional build stages run for a build invocation
#[derive(Parser, Debug)]
#[command(
    name = "quark_build_gates",
    version,
    about = "Decide which optional build stages run and where releases are published",
    long_about = "Resolve coverage, packaging, signing and publishing decisions for one build invocation.

The current process environment is captured once and combined with the given
build properties and task names.

Usage:
  quark_build_gates test coverage
  quark_build_gates -P publish publishToSonatype
  quark_build_gates --json -P coverage=false coverage"
)]
pub struct Args {
    /// Build property, as `KEY` or `KEY=VALUE` (repeatable)
    #[arg(short = 'P', long = "property", value_name = "KEY[=VALUE]")]
    pub properties: Vec<String>,

    /// Print the resolved plan as JSON
    #[arg(long)]
    pub json: bool,

    /// TOML file with publish settings and publication metadata
    #[arg(long, value_name = "FILE", env = "QUARK_BUILD_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Requested task names
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.json && self.quiet {
            return Err("--json and --quiet cannot be combined".to_string());
        }
        if let Some(task) = self.tasks.iter().find(|t| t.trim().is_empty()) {
            return Err(format!("Task name must not be blank: '{task}'"));
        }
        Ok(())
    }

    /// Build properties as key/value pairs; a bare `KEY` maps to an empty value
    pub fn parsed_properties(&self) -> Result<Vec<(String, String)>, CliError> {
        self.properties
            .iter()
            .map(|raw| {
                let (key, value) = raw.split_once('=').unwrap_or((raw.as_str(), ""));
                let key = key.trim();
                if key.is_empty() {
                    return Err(CliError::InvalidArguments {
                        reason: format!("Property '{raw}' has no name. Expected KEY or KEY=VALUE"),
                    });
                }
                Ok((key.to_string(), value.to_string()))
            })
            .collect()
    }
}
