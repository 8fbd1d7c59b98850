//! Copy buttons on code samples

use crate::sink::Clipboard;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// How long a button shows its copied state before reverting
pub const COPIED_DISPLAY: Duration = Duration::from_millis(2000);

/// What a copy button currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyButtonState {
    Idle,
    Copied,
}

impl CopyButtonState {
    pub fn label(&self) -> &'static str {
        match self {
            CopyButtonState::Idle => "Copy",
            CopyButtonState::Copied => "Copied!",
        }
    }
}

/// Copy button attached to a single code block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeCopyButton {
    copied_at: Option<Instant>,
}

impl CodeCopyButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// State as of `now`
    pub fn state(&self, now: Instant) -> CopyButtonState {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) < COPIED_DISPLAY => {
                CopyButtonState::Copied
            }
            _ => CopyButtonState::Idle,
        }
    }

    /// When the copied state is due to revert
    pub fn revert_at(&self) -> Option<Instant> {
        self.copied_at.map(|at| at + COPIED_DISPLAY)
    }

    /// Drop an expired copied state; true when the button went back to idle
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at() {
            Some(due) if now >= due => {
                self.copied_at = None;
                true
            }
            _ => false,
        }
    }

    /// Put `code` on the clipboard
    ///
    /// A repeated click while already showing the copied state keeps the
    /// first revert time. A failed write is logged and leaves the button as it was.
    pub async fn click(&mut self, clipboard: &dyn Clipboard, code: &str, now: Instant) -> bool {
        match clipboard.write_text(code).await {
            Ok(()) => {
                if self.state(now) == CopyButtonState::Idle {
                    self.copied_at = Some(now);
                }
                debug!("Copied {} bytes of sample code", code.len());
                true
            }
            Err(e) => {
                error!("Code sample copy failed: {}", e);
                false
            }
        }
    }
}

/// Every code sample on a page with its copy button
#[derive(Debug, Clone, Default)]
pub struct CodeBlocks {
    blocks: Vec<(String, CodeCopyButton)>,
}

impl CodeBlocks {
    /// One button per sample, in document order
    pub fn new<I, S>(samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocks: samples
                .into_iter()
                .map(|code| (code.into(), CodeCopyButton::new()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn button(&self, index: usize) -> Option<&CodeCopyButton> {
        self.blocks.get(index).map(|(_, button)| button)
    }

    /// Copy the sample at `index`; false for an unknown index or a failed write
    pub async fn click(&mut self, index: usize, clipboard: &dyn Clipboard, now: Instant) -> bool {
        match self.blocks.get_mut(index) {
            Some((code, button)) => button.click(clipboard, code, now).await,
            None => false,
        }
    }

    /// Revert expired buttons; returns how many changed
    pub fn tick(&mut self, now: Instant) -> usize {
        self.blocks
            .iter_mut()
            .filter_map(|(_, button)| button.tick(now).then_some(()))
            .count()
    }
}
