//! Async command execution with timeout support
//!
//! Provides a unified interface for running gulp with:
//! - Optional timeouts
//! - Output capture (stdout/stderr) with a size cap
//! - Working directory control

use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::time::timeout;

use crate::error::{suggest_fix, ProviderError};

/// Maximum captured size per stream (in bytes)
pub const MAX_OUTPUT_SIZE: usize = 100_000; // 100KB

/// Truncation marker for large outputs
const TRUNCATION_MARKER: &str = "\n... [output truncated] ...\n";

/// Options for async command execution
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Working directory for the command
    pub working_dir: Option<PathBuf>,
    /// Timeout duration (None = no timeout)
    pub timeout: Option<Duration>,
}

impl ExecOptions {
    /// Create options with a working directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// Set an optional timeout
    pub fn with_timeout_opt(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Result of async command execution
#[derive(Debug)]
pub struct ExecResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code if available
    pub exit_code: Option<i32>,
    /// Standard output, cut at `MAX_OUTPUT_SIZE`
    pub stdout: String,
    /// Whether stdout went past the cap
    pub stdout_truncated: bool,
    /// Standard error
    pub stderr: String,
}

impl ExecResult {
    /// Turn a non-zero exit into an `InvocationFailed` error
    pub fn into_success(self, command: &str) -> Result<Self, ProviderError> {
        if self.success {
            Ok(self)
        } else {
            Err(command_error(command, self.exit_code, &self.stderr))
        }
    }
}

/// Render a program and its arguments for display/logging
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Execute a command asynchronously with optional timeout
///
/// # Errors
/// * `ProviderError::ExecutableNotFound` - If the command couldn't be spawned
/// * `ProviderError::Timeout` - If the command timed out (when timeout is set)
pub async fn exec_command(
    program: &str,
    args: &[&str],
    options: &ExecOptions,
) -> Result<ExecResult, ProviderError> {
    let start = Instant::now();
    let command_str = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.kill_on_drop(true); // Kill process if future is dropped

    if let Some(ref dir) = options.working_dir {
        cmd.current_dir(dir);
    }

    tracing::debug!("Executing async: {}", command_str);

    let child = cmd.spawn().map_err(|e| ProviderError::ExecutableNotFound {
        command: command_str.clone(),
        error: e.to_string(),
    })?;

    let result = if let Some(timeout_duration) = options.timeout {
        match timeout(timeout_duration, wait_for_output(child)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(ProviderError::Timeout {
                    command: command_str,
                    timeout_secs: timeout_duration.as_secs(),
                });
            }
        }
    } else {
        wait_for_output(child).await?
    };

    tracing::debug!(
        "{} exited with {:?} after {}ms",
        command_str,
        result.exit_code,
        start.elapsed().as_millis()
    );

    Ok(ExecResult {
        success: result.exit_code == Some(0),
        exit_code: result.exit_code,
        stdout: result.stdout,
        stdout_truncated: result.stdout_truncated,
        stderr: result.stderr,
    })
}

/// Internal result from waiting for process output
struct WaitResult {
    exit_code: Option<i32>,
    stdout: String,
    stderr: String,
    stdout_truncated: bool,
}

/// Wait for a child process and capture its output
async fn wait_for_output(mut child: tokio::process::Child) -> Result<WaitResult, ProviderError> {
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Read stdout and stderr concurrently so neither pipe fills up
    let stdout_handle = tokio::spawn(async move {
        match stdout {
            Some(stdout) => read_and_truncate(stdout, MAX_OUTPUT_SIZE).await,
            None => (String::new(), false),
        }
    });

    let stderr_handle = tokio::spawn(async move {
        match stderr {
            Some(stderr) => read_and_truncate(stderr, MAX_OUTPUT_SIZE).await,
            None => (String::new(), false),
        }
    });

    let status = child.wait().await.map_err(ProviderError::Io)?;

    let (stdout, stdout_truncated) = stdout_handle.await.map_err(|e| {
        ProviderError::Io(std::io::Error::other(format!("stdout task failed: {}", e)))
    })?;

    let (stderr, _) = stderr_handle.await.map_err(|e| {
        ProviderError::Io(std::io::Error::other(format!("stderr task failed: {}", e)))
    })?;

    Ok(WaitResult {
        exit_code: status.code(),
        stdout,
        stderr,
        stdout_truncated,
    })
}

/// Read a stream to EOF, keeping at most `max_size` bytes
///
/// Reading continues past the cap so the child never sees a closed pipe.
/// Bytes that are not valid UTF-8 are replaced rather than failing the read.
async fn read_and_truncate<R: tokio::io::AsyncRead + Unpin>(
    reader: R,
    max_size: usize,
) -> (String, bool) {
    let mut buf_reader = BufReader::new(reader);
    let mut output = String::with_capacity(max_size.min(64 * 1024));
    let mut line = Vec::with_capacity(4096);
    let mut truncated = false;

    loop {
        line.clear();
        match buf_reader.read_until(b'\n', &mut line).await {
            Ok(0) => break, // EOF
            Ok(_) if truncated => {}
            Ok(_) => {
                let text = String::from_utf8_lossy(&line);
                if output.len() + text.len() > max_size {
                    let remaining = max_size.saturating_sub(output.len());
                    let cut = floor_char_boundary(&text, remaining);
                    output.push_str(&text[..cut]);
                    output.push_str(TRUNCATION_MARKER);
                    truncated = true;
                } else {
                    output.push_str(&text);
                }
            }
            Err(e) => {
                tracing::warn!("Error reading output: {}", e);
                break;
            }
        }
    }

    (output, truncated)
}

/// Largest index <= `index` that falls on a char boundary
fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Helper to create an invocation error with suggestion
pub fn command_error(command: &str, exit_code: Option<i32>, stderr: &str) -> ProviderError {
    ProviderError::InvocationFailed {
        command: command.to_string(),
        exit_code,
        stderr: stderr.to_string(),
        suggestion: suggest_fix(command, stderr),
    }
}
