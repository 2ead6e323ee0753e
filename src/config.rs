//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`OPEN_TILIX_TERMINAL`, `OPEN_TILIX_SHORTCUT`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./open-tilix.toml in the current directory
//! 4. $XDG_CONFIG_HOME/open-tilix/open-tilix.toml
//!    (or ~/.config/open-tilix/open-tilix.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("templates/open-tilix.toml");
const DEFAULT_TERMINAL_PROGRAM: &str = "tilix";
const DEFAULT_ACCELERATOR: &str = "<Ctrl>z";

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub terminal: TerminalConfig,
    pub shortcut: ShortcutConfig,
}

/// Terminal emulator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Emulator binary name or path.
    pub program: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_TERMINAL_PROGRAM.into(),
        }
    }
}

/// Host-adapter shortcut settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Accelerator in GTK notation; consumed by the host integration layer,
    /// never by the resolver.
    pub accelerator: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            accelerator: DEFAULT_ACCELERATOR.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from the --config flag);
/// unlike the search locations, an explicit path must exist.
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    let config_text = if let Some(p) = path_override {
        std::fs::read_to_string(p)?
    } else if let Ok(text) = std::fs::read_to_string("open-tilix.toml") {
        text
    } else if let Some(path) = default_global_config_path() {
        std::fs::read_to_string(path).unwrap_or_default()
    } else {
        String::new()
    };

    let mut config: Config = toml::from_str(&config_text)?;

    // Environment variable overrides.
    if let Ok(program) = std::env::var("OPEN_TILIX_TERMINAL") {
        config.terminal.program = program;
    }
    if let Ok(accelerator) = std::env::var("OPEN_TILIX_SHORTCUT") {
        config.shortcut.accelerator = accelerator;
    }

    if config.terminal.program.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "terminal.program must not be empty".to_string(),
        ));
    }

    Ok(config)
}

/// Return the default per-user config path
/// (`~/.config/open-tilix/open-tilix.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join("open-tilix").join("open-tilix.toml"))
}

/// Ensure the default global config file exists.
///
/// Returns the global config path when available on this platform.
pub fn ensure_default_global_config() -> Result<Option<PathBuf>, ConfigError> {
    let Some(path) = default_global_config_path() else {
        return Ok(None);
    };
    if path.exists() {
        return Ok(Some(path));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // create_new avoids clobbering if another process wins a race to create.
    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;
            Ok(Some(path))
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(Some(path)),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
