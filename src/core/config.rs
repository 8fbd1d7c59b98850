//! Tool settings from YAML

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Canonical entry-point file name for Jenkins pipelines
pub const DEFAULT_FILENAME: &str = "Jenkinsfile";

/// Default timeout for the clipboard helper process
pub const DEFAULT_CLIPBOARD_TIMEOUT_SECS: u64 = 5;

/// Top-level settings loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory downloads are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name used for downloads
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Clipboard helper configuration
    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

/// Clipboard helper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardSettings {
    /// Whether copying is available at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Helper command and arguments; detected from the platform when unset
    #[serde(default)]
    pub command: Option<Vec<String>>,

    /// Timeout for the helper process (in seconds)
    #[serde(default = "default_clipboard_timeout")]
    pub timeout_secs: u64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_clipboard_timeout() -> u64 {
    DEFAULT_CLIPBOARD_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            filename: default_filename(),
            clipboard: ClipboardSettings::default(),
        }
    }
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            timeout_secs: DEFAULT_CLIPBOARD_TIMEOUT_SECS,
        }
    }
}

/// Download file names are a single path component
pub fn validate_filename(filename: &str) -> Result<()> {
    if filename.trim().is_empty() {
        anyhow::bail!("Download filename must not be empty");
    }
    if filename.contains('/') || filename.contains('\\') || filename == ".." || filename == "." {
        anyhow::bail!(
            "Download filename must not contain path separators: {}",
            filename
        );
    }
    Ok(())
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        validate_filename(&self.filename)?;
        if let Some(command) = &self.clipboard.command {
            if command.is_empty() {
                anyhow::bail!("Clipboard command must name a program");
            }
        }
        if self.clipboard.timeout_secs == 0 {
            anyhow::bail!("Clipboard timeout must be at least one second");
        }
        Ok(())
    }

    /// Default settings location, `<config_dir>/pipegen/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pipegen").join("config.yaml"))
    }

    /// Load from an explicit path, or from the default location when it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!("Loading settings from {}", path.display());
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }
}
