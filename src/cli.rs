//! CLI argument parsing via clap.

use clap::Parser;

/// Open a terminal emulator for a file-manager URI: locally in the URI's
/// directory, or over ssh for ftp/sftp targets.
#[derive(Debug, Parser)]
#[command(name = "open-tilix", version)]
pub struct Args {
    /// Target URI (file://…, sftp://…, ftp://…, or a plain path). Omitted
    /// means "open the terminal at its default location".
    pub uri: Option<String>,

    /// Treat the target as a directory (skips the filesystem check).
    #[arg(long = "directory", conflicts_with = "file")]
    pub directory: bool,

    /// Treat the target as a file; the terminal opens in its parent.
    #[arg(long = "file", conflicts_with = "directory")]
    pub file: bool,

    /// Path to config file (default: ./open-tilix.toml or
    /// ~/.config/open-tilix/open-tilix.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the terminal emulator binary.
    #[arg(short = 't', long = "terminal")]
    pub terminal: Option<String>,

    /// Print the launch command instead of spawning the emulator.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Print the context-menu entries for the target instead of launching.
    #[arg(long = "menu")]
    pub menu: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn parses_uri_with_overrides() {
        let args = Args::parse_from([
            "open-tilix",
            "--terminal",
            "terminix",
            "--dry-run",
            "sftp://host/pub",
        ]);
        assert_eq!(args.uri.as_deref(), Some("sftp://host/pub"));
        assert_eq!(args.terminal.as_deref(), Some("terminix"));
        assert!(args.dry_run);
        assert!(!args.menu);
    }

    #[test]
    fn uri_is_optional() {
        let args = Args::parse_from(["open-tilix"]);
        assert_eq!(args.uri, None);
        assert!(!args.directory);
        assert!(!args.file);
    }

    #[test]
    fn directory_and_file_flags_conflict() {
        let result = Args::try_parse_from(["open-tilix", "--directory", "--file", "/tmp"]);
        assert!(result.is_err());
    }

    #[test]
    fn file_flag_parses() {
        let args = Args::parse_from(["open-tilix", "--file", "file:///home/a/notes.txt"]);
        assert!(args.file);
        assert!(!args.directory);
    }
}
