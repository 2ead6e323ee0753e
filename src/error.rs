//! Unified error types for the launcher.
//!
//! The resolver itself is infallible by contract — degenerate URIs degrade
//! to a default local plan instead of erroring. Failures only exist at the
//! edges: loading configuration and starting the emulator process.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// LaunchError
// ---------------------------------------------------------------------------

/// Errors from starting the terminal emulator process.
#[derive(Debug)]
pub enum LaunchError {
    /// The configured emulator binary is not available on this system.
    NotInstalled(String),
    /// The spawn itself failed; carries `program: cause` detail.
    Spawn(String),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInstalled(program) => {
                write!(f, "terminal emulator `{program}` is not installed")
            }
            Self::Spawn(msg) => write!(f, "failed to launch terminal: {msg}"),
        }
    }
}

impl std::error::Error for LaunchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn config_error_invalid_message() {
        let e = ConfigError::Invalid("empty terminal program".into());
        assert_eq!(e.to_string(), "invalid config: empty terminal program");
    }

    #[test]
    fn launch_error_display_variants() {
        assert_eq!(
            LaunchError::NotInstalled("tilix".into()).to_string(),
            "terminal emulator `tilix` is not installed"
        );
        assert_eq!(
            LaunchError::Spawn("tilix: no such file".into()).to_string(),
            "failed to launch terminal: tilix: no such file"
        );
    }
}
