use tracing::warn;

/// Parse the subject tool's summary line as the total line count.
///
/// The line must be nothing but ASCII digits. Anything else, including an
/// empty line, yields `None`; that is a failed scenario, not a fault.
pub fn parse_total(line: &str) -> Option<u64> {
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        warn!(last_line = %line, "Expected output not found in the last line");
        return None;
    }
    match line.parse::<u64>() {
        Ok(n) => Some(n),
        Err(_) => {
            // all digits, so only overflow lands here
            warn!(last_line = %line, "line count does not fit in u64");
            None
        }
    }
}
