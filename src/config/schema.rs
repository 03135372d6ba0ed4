use std::path::PathBuf;

use serde::Deserialize;

use crate::storage::STORAGE_KEY;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/folio/config.toml` or `~/.config/folio/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `FOLIO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub ui: UiSettings,
    pub content: ContentSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the portfolio slot.
    /// Defaults to `$XDG_DATA_HOME/folio` or `~/.local/share/folio`.
    pub dir: Option<PathBuf>,
    /// Key (file stem) the portfolio is stored under.
    pub key: String,
    /// Quiet period after the last edit before it is written (milliseconds).
    pub autosave_delay_ms: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            dir: None,
            key: STORAGE_KEY.to_string(),
            autosave_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether mouse clicks turn pages and select fields.
    pub mouse: bool,
    /// Heading of the portrait album.
    pub portrait_title: String,
    /// Heading of the landscape album.
    pub landscape_title: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Light, shadow & the moments between ~ ".to_string(),
            mouse: true,
            portrait_title: " 01 · Portrait Series ".to_string(),
            landscape_title: " 02 · Landscape Series ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Optional TOML file replacing the built-in default portfolio.
    pub defaults_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file. Defaults to `folio.log` inside the storage directory.
    pub path: Option<PathBuf>,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            path: None,
            filter: "info".to_string(),
        }
    }
}
