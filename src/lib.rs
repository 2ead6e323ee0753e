//! open-tilix — launch a terminal emulator for a file-manager URI.
//!
//! The core is a single pure decision procedure, [`resolve::resolve`]: a URI
//! string (local `file`, remote `ftp`/`sftp`, or anything else) maps to a
//! [`resolve::LaunchPlan`] that either opens a terminal in a local working
//! directory or runs an ssh session to the target host. Adapter layers — a
//! CLI here, a file-manager extension elsewhere — hand the plan to
//! [`terminal::Emulator`] to actually start Tilix or Terminix.
//!
//! # Quick start
//!
//! ```
//! use open_tilix::resolve::{resolve, LaunchPlan};
//!
//! let plan = resolve("sftp://alice@host:2222/home/alice/docs", true);
//! match plan {
//!     LaunchPlan::RemoteShell { shell_command } => {
//!         assert!(shell_command.starts_with("ssh -t alice@host"));
//!     }
//!     LaunchPlan::Local { .. } => unreachable!(),
//! }
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod resolve;
pub mod shortcut;
pub mod terminal;
pub mod uri;
