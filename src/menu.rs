//! Context-menu entries as plain data.
//!
//! The host file manager decides where and how entries are shown; this
//! module only answers *which* entries a selection gets. Remote targets grow
//! an extra "Open Remote …" entry that resolves to an ssh session instead of
//! a local working directory.

use crate::uri::{is_remote_uri, percent_decode_utf8, raw_scheme, Uri};

/// Narrow capability surface a host integration must provide per target.
pub trait Selection {
    fn uri(&self) -> &str;
    fn is_directory(&self) -> bool;
}

/// Owned selection target; what the CLI (and tests) hand to the providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub uri: String,
    pub is_directory: bool,
}

impl Target {
    pub fn new(uri: impl Into<String>, is_directory: bool) -> Self {
        Self {
            uri: uri.into(),
            is_directory,
        }
    }
}

impl Selection for Target {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn is_directory(&self) -> bool {
        self.is_directory
    }
}

/// One context-menu entry the host should register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Stable identifier for the host-side registration.
    pub id: &'static str,
    pub label: String,
    pub tip: String,
}

/// Entries for an explicit file-manager selection.
///
/// Only a single selected directory gets entries; multi-selections and
/// plain files get none. Remote directories additionally get the remote
/// entry, listed first.
pub fn file_entries<S: Selection>(selection: &[S], terminal: &str) -> Vec<MenuEntry> {
    let [target] = selection else {
        return Vec::new();
    };
    if !target.is_directory() {
        return Vec::new();
    }

    let mut entries = Vec::new();
    if is_remote_uri(target.uri()) {
        entries.push(MenuEntry {
            id: "openterminal_remote_item",
            label: format!("Open Remote {terminal}"),
            tip: format!("Open Remote {terminal} In {}", target.uri()),
        });
    }
    entries.push(MenuEntry {
        id: "openterminal_file_item",
        label: format!("Open In {terminal}"),
        tip: format!("Open {terminal} In {}", display_basename(target.uri())),
    });
    entries
}

/// Entries for the current folder background (no explicit selection).
pub fn background_entries<S: Selection>(current: &S, terminal: &str) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    if is_remote_uri(current.uri()) {
        entries.push(MenuEntry {
            id: "openterminal_bg_remote_item",
            label: format!("Open Remote {terminal} Here"),
            tip: format!("Open Remote {terminal} In This Directory"),
        });
    }
    entries.push(MenuEntry {
        id: "openterminal_bg_file_item",
        label: format!("Open {terminal} Here"),
        tip: format!("Open {terminal} In This Directory"),
    });
    entries
}

/// Decoded final path segment of a URI, for menu tips. Falls back to the
/// whole input when there is no usable path.
fn display_basename(uri: &str) -> String {
    let path = match raw_scheme(uri) {
        Some(_) => match Uri::parse(uri) {
            Some(parsed) => parsed.path,
            None => return uri.to_string(),
        },
        None => uri.to_string(),
    };
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => percent_decode_utf8(segment),
        _ => percent_decode_utf8(&path),
    }
}
