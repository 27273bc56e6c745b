//! Integration test driver for the `go-cloc` line counter.
//!
//! Runs the tool once per hosting platform, reads the total from its last
//! output line and compares it with a known count.

pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod locate;
pub mod process;
pub mod report;
pub mod scenario;
