//! URI-to-terminal-command resolution.
//!
//! The single operation here, [`resolve`], turns a file-manager URI into a
//! [`LaunchPlan`]: either "open a terminal in this local directory" or "open
//! a terminal running an ssh session to this host". It is a pure function —
//! no I/O, no process spawns, no shared state — and it never fails: every
//! degenerate input maps to a well-formed (if degraded) plan, because a
//! context-menu action must not be able to crash its host.

use crate::uri::{is_remote_uri, parent_directory, percent_decode_utf8, Uri};
use std::path::{Path, PathBuf};
use url::Url;

/// How to start the terminal for a resolved URI.
///
/// Exactly one payload exists per mode, so the "working directory XOR shell
/// command" invariant holds by construction. Plans are single-use values:
/// produced here, consumed by the launch adapter, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Open the terminal locally, in `working_dir` when present, otherwise
    /// wherever the emulator defaults to.
    Local { working_dir: Option<PathBuf> },
    /// Open the terminal running `shell_command` (an assembled ssh
    /// invocation) as its initial command.
    RemoteShell { shell_command: String },
}

/// Resolve a file-manager URI into a launch plan.
///
/// `is_directory` marks whether the target is a directory; file targets
/// resolve to their containing directory (locally via the path parent,
/// remotely via the parent of the URI path). The flag exists so callers that
/// already know the answer can skip a filesystem stat.
///
/// Remote schemes (`ftp`, `sftp`, matched case-sensitively against the raw
/// URI text) produce an ssh command; everything else, including unparseable
/// input, resolves locally.
pub fn resolve(uri: &str, is_directory: bool) -> LaunchPlan {
    if is_remote_uri(uri) {
        resolve_remote(uri, is_directory)
    } else {
        LaunchPlan::Local {
            working_dir: local_working_dir(uri, is_directory),
        }
    }
}

fn resolve_remote(uri: &str, is_directory: bool) -> LaunchPlan {
    let parsed = Uri::parse(uri).filter(|parsed| {
        parsed
            .host
            .as_deref()
            .is_some_and(|host| !host.is_empty())
    });
    let Some(parsed) = parsed else {
        // Remote scheme but no usable authority; fall back to a default
        // local terminal rather than failing the action.
        return LaunchPlan::Local { working_dir: None };
    };

    let host = parsed.host.as_deref().unwrap_or_default();
    let mut command = match parsed.username.as_deref() {
        Some(user) => format!("ssh -t {user}@{host}"),
        None => format!("ssh -t {host}"),
    };
    if let Some(port) = parsed.port {
        command.push_str(&format!(" -p {port}"));
    }

    let decoded = percent_decode_utf8(&parsed.path);
    let target_dir = if is_directory {
        (!decoded.is_empty()).then_some(decoded)
    } else {
        parent_directory(&decoded)
    };
    if let Some(dir) = target_dir {
        command.push_str(&format!(" cd {} ; $SHELL", quote_remote_dir(&dir)));
    }

    LaunchPlan::RemoteShell {
        shell_command: command,
    }
}

/// Double-quote a remote directory so paths with spaces stay a single token
/// in the assembled command. Backslashes and embedded quotes are escaped;
/// everything else is left for the remote shell to see literally.
fn quote_remote_dir(dir: &str) -> String {
    let escaped = dir.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Resolve a URI to a local working directory, or `None` when the input
/// cannot be mapped to a real filesystem location.
fn local_working_dir(uri: &str, is_directory: bool) -> Option<PathBuf> {
    let path = local_path(uri)?;
    if is_directory {
        return Some(path);
    }
    match path.parent() {
        Some(parent) if parent != Path::new("") => Some(parent.to_path_buf()),
        _ => None,
    }
}

/// Local filesystem path for a URI: `file` URIs decode through their path,
/// bare absolute paths pass through as-is, anything else has no local
/// location.
pub fn local_path(uri: &str) -> Option<PathBuf> {
    match crate::uri::raw_scheme(uri) {
        Some("file") => Url::parse(uri).ok()?.to_file_path().ok(),
        Some(_) => None,
        None => uri.starts_with('/').then(|| PathBuf::from(uri)),
    }
}
