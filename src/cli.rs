//! Entry point wiring: configuration, lookup, scenarios, report.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::HarnessError;
use crate::locate;
use crate::process::SubjectTool;
use crate::report;
use crate::scenario::{run_all, scenarios};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CLOC_INTEGRATION_GIT_HASH"),
    ", ",
    env!("CLOC_INTEGRATION_GIT_DIRTY"),
    ", built ",
    env!("CLOC_INTEGRATION_BUILD_UNIX"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "cloc-integration")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Integration tests for go-cloc against GitHub, Azure DevOps, GitLab and Bitbucket")]
pub struct Cli {
    /// Also write the outcomes as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

/// Diagnostics go to stderr so the subject tool's output on stdout is untouched.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Run every scenario and return the process exit code.
///
/// Faults (unsupported OS, missing binary, subject tool crash) come back as
/// errors; see [`exit_code_for`].
pub fn run(cli: &Cli) -> Result<i32> {
    let config = Config::from_env();
    let path = locate::locate(std::env::consts::OS)?;
    let mut tool = SubjectTool::new(path);

    let outcomes = run_all(&scenarios(&config), &mut tool)?;

    let stdout = io::stdout();
    let passed = report::render(&outcomes, &mut stdout.lock())?;
    if let Some(path) = &cli.report_json {
        report::write_json(&outcomes, path)?;
    }
    Ok(report::exit_code(passed))
}

/// Exit code for a fault returned by [`run`].
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<HarnessError>()
        .map(HarnessError::exit_code)
        .unwrap_or(1)
}
