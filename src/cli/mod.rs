//! Command line interface for quark_build_gates.
//!
//! Captures the invocation once, resolves the build plan and prints it.

mod args;
mod output;
mod report;

pub use args::Args;
pub use output::OutputManager;

use crate::context::InvocationContext;
use crate::error::{CliError, Result};
use crate::plan::BuildPlan;
use crate::settings::SettingsFile;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args)
}

/// Resolve and print the plan for parsed arguments
pub fn execute(args: &Args) -> Result<i32> {
    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    let context = InvocationContext::from_process(args.parsed_properties()?, args.tasks.clone());
    let file = match &args.settings {
        Some(path) => SettingsFile::load(path)?,
        None => SettingsFile::default(),
    };

    let plan = BuildPlan::resolve_with(&context, file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        let output = OutputManager::new(args.quiet);
        report::print_plan(&output, &plan)?;
    }
    Ok(0)
}
