//! Output sink - holds the last rendered document and offers copy, download and reset

pub mod clipboard;

pub use clipboard::{Clipboard, ClipboardError, CommandClipboard};

use crate::core::config::{Settings, DEFAULT_FILENAME};
use crate::template::RenderedDocument;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Error types for the output sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a copy request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text is on the clipboard
    Copied,
    /// The clipboard rejected the text; details went to the log
    Failed,
    /// No clipboard is configured, so copying is disabled
    Unavailable,
}

/// Holds the current document
///
/// Each `show` overwrites the slot and `reset` empties it. Copy and download
/// always act on the slot's current content, which is empty after a reset.
pub struct OutputSink {
    current: Option<RenderedDocument>,
    clipboard: Option<Arc<dyn Clipboard>>,
    filename: String,
}

impl OutputSink {
    /// Create a sink; without a clipboard the copy action is disabled
    pub fn new(clipboard: Option<Arc<dyn Clipboard>>) -> Self {
        Self {
            current: None,
            clipboard,
            filename: DEFAULT_FILENAME.to_string(),
        }
    }

    /// Create a sink from settings, detecting a clipboard helper when enabled
    pub fn from_settings(settings: &Settings) -> Self {
        let clipboard_settings = &settings.clipboard;
        let clipboard: Option<Arc<dyn Clipboard>> = if !clipboard_settings.enabled {
            None
        } else if let Some(command) = &clipboard_settings.command {
            CommandClipboard::from_command(command, clipboard_settings.timeout_secs)
                .map(|clipboard| Arc::new(clipboard) as Arc<dyn Clipboard>)
        } else {
            match CommandClipboard::detect(clipboard_settings.timeout_secs) {
                Ok(clipboard) => Some(Arc::new(clipboard)),
                Err(e) => {
                    debug!("Clipboard disabled: {}", e);
                    None
                }
            }
        };

        Self::new(clipboard).with_filename(settings.filename.clone())
    }

    /// Use a different download file name
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Whether the copy action is available
    pub fn can_copy(&self) -> bool {
        self.clipboard.is_some()
    }

    /// Display a freshly rendered document, replacing any previous one
    pub fn show(&mut self, document: RenderedDocument) -> &RenderedDocument {
        debug!(
            "Showing document ({} bytes, {} lines)",
            document.len(),
            document.line_count()
        );
        self.current.insert(document)
    }

    /// The current document, if any
    pub fn current(&self) -> Option<&RenderedDocument> {
        self.current.as_ref()
    }

    /// Text of the current document; empty when nothing is shown
    pub fn text(&self) -> &str {
        self.current.as_ref().map(RenderedDocument::as_str).unwrap_or_default()
    }

    /// Discard the current document
    pub fn reset(&mut self) {
        if self.current.take().is_some() {
            debug!("Output cleared");
        }
    }

    /// Put the current text on the clipboard
    ///
    /// Failures are logged and never propagated.
    pub async fn copy_to_clipboard(&self) -> CopyOutcome {
        let Some(clipboard) = &self.clipboard else {
            return CopyOutcome::Unavailable;
        };

        match clipboard.write_text(self.text()).await {
            Ok(()) => {
                debug!("Copied {} bytes to the clipboard", self.text().len());
                CopyOutcome::Copied
            }
            Err(e) => {
                error!("Clipboard write failed: {}", e);
                CopyOutcome::Failed
            }
        }
    }

    /// Save the current text as `dir/<filename>`
    pub async fn download_as_file(&self, dir: &Path) -> Result<PathBuf, SinkError> {
        if self.current.is_none() {
            warn!("Nothing rendered; writing an empty {}", self.filename);
        }

        let path = dir.join(&self.filename);
        let write_error = |source: std::io::Error| SinkError::Write {
            path: path.clone(),
            source,
        };

        tokio::fs::create_dir_all(dir).await.map_err(write_error)?;
        tokio::fs::write(&path, self.text().as_bytes())
            .await
            .map_err(write_error)?;

        debug!("Saved {}", path.display());
        Ok(path)
    }
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink")
            .field("current_len", &self.current.as_ref().map(RenderedDocument::len))
            .field("can_copy", &self.can_copy())
            .field("filename", &self.filename)
            .finish()
    }
}
