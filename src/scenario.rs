//! Scenario definitions and the per-scenario runner.

use std::ffi::OsString;

use serde::Serialize;
use tracing::info;

use crate::config::{Config, Platform};
use crate::count::parse_total;
use crate::error::Result;
use crate::process::Execute;

/// One named invocation of the subject tool with the count it should report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    pub name: String,
    pub arguments: Vec<OsString>,
    pub expected_count: u64,
}

/// Verdict for one scenario. `actual` is `None` when no numeric summary
/// line was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    pub name: String,
    pub expected: u64,
    pub actual: Option<u64>,
    pub passed: bool,
}

fn expected_count(platform: Platform) -> u64 {
    match platform {
        Platform::GitHub => 143933,
        Platform::AzureDevOps => 57888,
        Platform::GitLab => 162,
        Platform::Bitbucket => 4317,
    }
}

/// Subject tool arguments for one platform.
///
/// Credentials are passed through as raw OS strings, unvalidated.
pub fn arguments(platform: Platform, config: &Config) -> Vec<OsString> {
    let creds = config.credentials(platform);
    vec![
        "--devops".into(),
        platform.devops_name().into(),
        "--organization".into(),
        creds.organization.clone(),
        "--accessToken".into(),
        creds.access_token.clone(),
        "--log-level".into(),
        "DEBUG".into(),
        "--dump-csvs=false".into(),
    ]
}

/// The four fixed scenarios, in run order.
pub fn scenarios(config: &Config) -> Vec<InvocationSpec> {
    Platform::ALL
        .iter()
        .map(|&platform| InvocationSpec {
            name: platform.devops_name().to_string(),
            arguments: arguments(platform, config),
            expected_count: expected_count(platform),
        })
        .collect()
}

/// Run one scenario. Infrastructure faults from the executor propagate;
/// a missing or malformed summary line is just a failed outcome.
pub fn run_test<E: Execute + ?Sized>(spec: &InvocationSpec, tool: &mut E) -> Result<TestOutcome> {
    println!("--------Running test: {}---------", spec.name);
    info!(scenario = %spec.name, expected = spec.expected_count, "running scenario");
    let result = tool.execute(&spec.arguments)?;
    let actual = parse_total(&result.last_line);
    Ok(TestOutcome {
        name: spec.name.clone(),
        expected: spec.expected_count,
        actual,
        passed: actual == Some(spec.expected_count),
    })
}

/// Run scenarios in order, stopping at the first fault.
pub fn run_all<E: Execute + ?Sized>(specs: &[InvocationSpec], tool: &mut E) -> Result<Vec<TestOutcome>> {
    specs.iter().map(|spec| run_test(spec, &mut *tool)).collect()
}
