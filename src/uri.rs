//! Structured view of file-manager URIs.
//!
//! File managers hand over percent-encoded URI strings (`file:///…`,
//! `sftp://user@host:port/…`). This module extracts the pieces the resolver
//! needs and centralizes percent-decoding. Decoding never fails hard: an
//! invalid UTF-8 sequence degrades to the raw encoded text.

use percent_encoding::percent_decode_str;
use url::Url;

/// Schemes treated as remote (reachable via ssh). Matching is
/// case-sensitive against the raw URI text; `url` normalizes scheme case
/// during parsing, so callers must check before structured parsing.
pub const REMOTE_SCHEMES: [&str; 2] = ["ftp", "sftp"];

/// Immutable structured view of a URI string.
///
/// Constructed once per resolution; fields keep the encoded form as
/// delivered, decoding happens at the point of use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    /// Raw scheme text with its original case.
    pub scheme: String,
    pub username: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Path component, still percent-encoded.
    pub path: String,
}

impl Uri {
    /// Parse a URI string into its structured view.
    ///
    /// Returns `None` for anything `url` cannot parse (bare paths, empty
    /// strings, junk) — callers degrade rather than error.
    pub fn parse(raw: &str) -> Option<Self> {
        let scheme = raw_scheme(raw)?.to_string();
        let parsed = Url::parse(raw).ok()?;
        let username = match parsed.username() {
            "" => None,
            user => Some(user.to_string()),
        };
        Some(Self {
            scheme,
            username,
            host: parsed.host_str().map(str::to_string),
            port: parsed.port(),
            path: parsed.path().to_string(),
        })
    }

    /// Whether this URI's scheme is one of the recognized remote schemes.
    pub fn is_remote(&self) -> bool {
        REMOTE_SCHEMES.contains(&self.scheme.as_str())
    }
}

/// Extract the scheme text preceding the first `:`, case preserved.
///
/// Returns `None` when the candidate is not a syntactically valid scheme
/// (empty, leading non-letter, or invalid characters), which covers bare
/// absolute paths like `/a/b:c` whose first `:` sits inside a segment.
pub fn raw_scheme(uri: &str) -> Option<&str> {
    let (candidate, _) = uri.split_once(':')?;
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(candidate)
}

/// True when the raw URI text carries a remote scheme (case-sensitive).
pub fn is_remote_uri(uri: &str) -> bool {
    raw_scheme(uri).is_some_and(|scheme| REMOTE_SCHEMES.contains(&scheme))
}

/// Percent-decode to UTF-8, falling back to the raw encoded text when the
/// decoded bytes are not valid UTF-8.
pub fn percent_decode_utf8(input: &str) -> String {
    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => input.to_string(),
    }
}

/// Parent directory of a slash-separated remote path.
///
/// `/a/b/c` → `/a/b`, `/a` → `/`, `/` → `/`. Trailing slashes are ignored.
/// Returns `None` for empty or relative single-segment paths, where no
/// meaningful parent exists.
pub fn parent_directory(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        // The path was "/" (or only slashes); its parent is the root itself.
        return (!path.is_empty()).then(|| "/".to_string());
    }
    match trimmed.rfind('/') {
        Some(0) => Some("/".to_string()),
        Some(idx) => Some(trimmed[..idx].to_string()),
        None => None,
    }
}
