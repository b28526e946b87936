//! Studio configuration.
//!
//! Loaded from `config.toml` in the data directory; every field has a
//! default so a missing file or a partial file both work.

use std::path::PathBuf;

use atelier_revenue::routing::DEFAULT_PLATFORM_PAYEE;
use serde::{Deserialize, Serialize};

/// Complete studio configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Platform-operator settings.
    #[serde(default)]
    pub platform: PlatformConfig,
    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,
    /// Root of the media-type-scoped artifact layout.
    #[serde(default)]
    pub media: MediaConfig,
}

/// Platform-operator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Payee identifier receiving the platform's revenue share.
    #[serde(default = "default_payee")]
    pub payee: String,
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Container format for exported artifacts.
    #[serde(default = "default_format")]
    pub format: String,
    /// Apply a watermark on export.
    #[serde(default = "default_true")]
    pub watermark: bool,
    /// Watermark text, used when `watermark` is on.
    #[serde(default = "default_watermark_text")]
    pub watermark_text: String,
    /// Seal exported artifacts against further modification.
    #[serde(default = "default_true")]
    pub seal: bool,
}

/// Media layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Root directory for organized artifacts.
    #[serde(default = "default_media_root")]
    pub root: String,
}

// Default value functions

fn default_payee() -> String {
    DEFAULT_PLATFORM_PAYEE.to_string()
}

fn default_format() -> String {
    "mp4".to_string()
}

fn default_true() -> bool {
    true
}

fn default_watermark_text() -> String {
    "atelier".to_string()
}

fn default_media_root() -> String {
    "media".to_string()
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            payee: default_payee(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            watermark: true,
            watermark_text: default_watermark_text(),
            seal: true,
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: default_media_root(),
        }
    }
}

impl StudioConfig {
    /// Load configuration from the default config file location.
    ///
    /// Falls back to defaults if the file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: StudioConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the config file path.
    fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Data directory: `$ATELIER_DATA_DIR`, else `$HOME/.atelier`.
    fn data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("ATELIER_DATA_DIR") {
            return PathBuf::from(dir);
        }
        std::env::var("HOME")
            .map(|home| PathBuf::from(home).join(".atelier"))
            .unwrap_or_else(|_| PathBuf::from("/tmp/atelier"))
    }
}
