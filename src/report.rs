//! Summary printing and the overall verdict.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::scenario::TestOutcome;

/// Exit status when at least one scenario failed.
pub const FAILURE_EXIT_CODE: i32 = -1;

pub fn all_passed(outcomes: &[TestOutcome]) -> bool {
    outcomes.iter().all(|o| o.passed)
}

/// Process exit status for the overall verdict returned by [`render`].
pub fn exit_code(passed: bool) -> i32 {
    if passed {
        0
    } else {
        FAILURE_EXIT_CODE
    }
}

/// Write every outcome followed by the overall verdict, returning it.
pub fn render<W: Write>(outcomes: &[TestOutcome], out: &mut W) -> io::Result<bool> {
    for o in outcomes {
        writeln!(out, "Test: {}", o.name)?;
        writeln!(out, "Expected: {}", o.expected)?;
        match o.actual {
            Some(n) => writeln!(out, "Actual: {}", n)?,
            None => writeln!(out, "Actual: absent")?,
        }
        writeln!(out, "Pass: {}", o.passed)?;
        writeln!(out)?;
    }
    let ok = all_passed(outcomes);
    if ok {
        writeln!(out, "All tests passed!")?;
    } else {
        writeln!(out, "Some tests failed. See above for details")?;
    }
    Ok(ok)
}

pub fn write_json(outcomes: &[TestOutcome], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(outcomes)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}
