//! Clipboard access through a platform helper process

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Error types for clipboard writes
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard helper found for this platform")]
    Unsupported,

    #[error("Failed to run clipboard helper '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard helper '{program}' exited with code {code}: {stderr}")]
    Exit {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("Clipboard helper timed out after {0} seconds")]
    Timeout(u64),
}

/// Something that can receive text for the system clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by a helper command reading from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    /// Program to run
    program: String,

    /// Arguments passed to the program
    args: Vec<String>,

    /// Timeout for the helper in seconds
    timeout_secs: u64,
}

impl CommandClipboard {
    /// Create a clipboard that runs `program args...`
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout_secs: u64) -> Self {
        Self {
            program: program.into(),
            args,
            timeout_secs,
        }
    }

    /// Build from a command line, program first
    pub fn from_command(command: &[String], timeout_secs: u64) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.to_vec(), timeout_secs))
    }

    /// Pick the helper for the current platform
    pub fn detect(timeout_secs: u64) -> Result<Self, ClipboardError> {
        let command: &[&str] = if cfg!(target_os = "macos") {
            &["pbcopy"]
        } else if cfg!(target_os = "windows") {
            &["clip"]
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            &["wl-copy"]
        } else if std::env::var_os("DISPLAY").is_some() {
            &["xclip", "-selection", "clipboard"]
        } else {
            return Err(ClipboardError::Unsupported);
        };

        let command: Vec<String> = command.iter().map(|part| part.to_string()).collect();
        Self::from_command(&command, timeout_secs).ok_or(ClipboardError::Unsupported)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    async fn pipe_text(&self, text: &str) -> Result<std::process::Output, ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| self.spawn_error(source))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A helper that exits early closes the pipe; its exit status says why
            if let Err(source) = stdin.write_all(text.as_bytes()).await {
                if source.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(self.spawn_error(source));
                }
            }
        }

        child
            .wait_with_output()
            .await
            .map_err(|source| self.spawn_error(source))
    }

    fn spawn_error(&self, source: std::io::Error) -> ClipboardError {
        ClipboardError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        debug!(
            "Piping {} bytes to clipboard helper {}",
            text.len(),
            self.program
        );

        let output = timeout(Duration::from_secs(self.timeout_secs), self.pipe_text(text))
            .await
            .map_err(|_| ClipboardError::Timeout(self.timeout_secs))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output.status.code().unwrap_or(-1);
            warn!("{} exited with code {}: {}", self.program, code, stderr);
            return Err(ClipboardError::Exit {
                program: self.program.clone(),
                code,
                stderr,
            });
        }

        Ok(())
    }
}
