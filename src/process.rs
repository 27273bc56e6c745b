//! Runs the subject tool, forwarding its merged output and keeping the last line.

use std::ffi::OsString;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{HarnessError, Result};

/// What one invocation leaves behind. Consumed immediately by the scenario
/// runner and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub last_line: String,
}

/// Something that can run the subject tool with an argument list.
pub trait Execute {
    fn execute(&mut self, args: &[OsString]) -> Result<ExecutionResult>;
}

/// The real subject tool at a resolved path, forwarding to our stdout.
#[derive(Debug, Clone)]
pub struct SubjectTool {
    path: PathBuf,
}

impl SubjectTool {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Execute for SubjectTool {
    fn execute(&mut self, args: &[OsString]) -> Result<ExecutionResult> {
        let stdout = io::stdout();
        let mut sink = stdout.lock();
        run(&self.path, args, &mut sink)
    }
}

/// Launch `program`, stream stdout+stderr into `sink` as they arrive, then
/// wait for exit. A non-zero exit is returned as `ChildProcessFailed`.
pub fn run<W: Write>(program: &Path, args: &[OsString], sink: &mut W) -> Result<ExecutionResult> {
    let (reader, writer) = io::pipe()?;
    // Both streams share one pipe so the child's write order survives.
    // The Command owns our copies of the write end; it must be dropped
    // before reading or the stream never reaches EOF.
    let mut child = {
        let mut cmd = Command::new(program);
        cmd.args(args).stdout(writer.try_clone()?).stderr(writer);
        debug!(program = %program.display(), argc = args.len(), "spawning subject tool");
        cmd.spawn().map_err(|source| HarnessError::Spawn {
            path: program.to_path_buf(),
            source,
        })?
    };

    let last_line = match forward_lines(BufReader::new(reader), sink) {
        Ok(line) => line,
        Err(e) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e.into());
        }
    };

    let status = child.wait()?;
    // No code means the child was killed by a signal.
    let exit_code = status.code().unwrap_or(-1);
    if exit_code != 0 {
        return Err(HarnessError::ChildProcessFailed { code: exit_code });
    }
    Ok(ExecutionResult {
        exit_code,
        last_line,
    })
}

/// Copy every line of `reader` to `sink` unchanged and return the last
/// non-blank line, trimmed. Only that one line is held at a time.
pub fn forward_lines<R: BufRead, W: Write>(mut reader: R, sink: &mut W) -> io::Result<String> {
    std::iter::from_fn(|| {
        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(buf)),
            Err(e) => Some(Err(e)),
        }
    })
    .try_fold(String::new(), |last, chunk| -> io::Result<String> {
        let chunk = chunk?;
        sink.write_all(&chunk)?;
        sink.flush()?;
        let line = String::from_utf8_lossy(&chunk);
        let line = line.trim();
        // Trailing blank lines must not clobber the summary line.
        Ok(if line.is_empty() { last } else { line.to_string() })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_bytes_verbatim_and_keeps_last_line() {
        let input = b"cloning repo a\nscanning\r\n143933";
        let mut out = Vec::new();
        let last = forward_lines(&input[..], &mut out).unwrap();
        assert_eq!(out, input);
        assert_eq!(last, "143933");
    }

    #[test]
    fn trailing_blank_lines_are_skipped() {
        let mut out = Vec::new();
        let last = forward_lines(&b"progress\n162\n\n   \n"[..], &mut out).unwrap();
        assert_eq!(last, "162");
    }

    #[test]
    fn empty_stream_yields_empty_line() {
        let mut out = Vec::new();
        assert_eq!(forward_lines(&b""[..], &mut out).unwrap(), "");
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_utf8_is_forwarded_untouched() {
        let input = b"\xff\xfe noise\n4317\n";
        let mut out = Vec::new();
        let last = forward_lines(&input[..], &mut out).unwrap();
        assert_eq!(out, input);
        assert_eq!(last, "4317");
    }

    #[cfg(unix)]
    fn sh(script: &str, sink: &mut Vec<u8>) -> Result<ExecutionResult> {
        run(
            Path::new("/bin/sh"),
            &[OsString::from("-c"), OsString::from(script)],
            sink,
        )
    }

    #[cfg(unix)]
    #[test]
    fn merges_stdout_and_stderr_in_order() {
        let mut out = Vec::new();
        let result = sh("echo one; echo two >&2; echo 57888", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "one\ntwo\n57888\n");
        assert_eq!(
            result,
            ExecutionResult {
                exit_code: 0,
                last_line: "57888".to_string()
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_fatal() {
        let mut out = Vec::new();
        let err = sh("echo partial; exit 7", &mut out).unwrap_err();
        assert!(matches!(err, HarnessError::ChildProcessFailed { code: 7 }));
        assert_eq!(err.exit_code(), 7);
        assert_eq!(out, b"partial\n");
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-tool");
        let err = run(&missing, &[], &mut Vec::new()).unwrap_err();
        assert!(matches!(err, HarnessError::Spawn { .. }));
    }
}
