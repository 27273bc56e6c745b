use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Trimmed stdout of a successful `git` call.
fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

fn main() {
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    let tree = match Command::new("git").args(["diff", "--quiet"]).status() {
        Ok(s) if s.success() => "clean",
        Ok(_) => "dirty",
        Err(_) => "unknown",
    };
    let built = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    for (key, value) in [
        ("CLOC_INTEGRATION_GIT_HASH", hash),
        ("CLOC_INTEGRATION_GIT_DIRTY", tree.to_string()),
        ("CLOC_INTEGRATION_BUILD_UNIX", built.to_string()),
    ] {
        println!("cargo:rustc-env={}={}", key, value);
    }
    // Re-stamp when HEAD moves; the path is resolved relative to the package root.
    if let Some(head) = git(&["rev-parse", "--git-path", "HEAD"]) {
        println!("cargo:rerun-if-changed={}", head);
    }
}
