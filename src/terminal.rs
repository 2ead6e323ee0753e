//! Terminal emulator launch adapter.
//!
//! Turns a [`LaunchPlan`] into a concrete emulator invocation and starts it
//! fire-and-forget. Tilix and Terminix share the same flag vocabulary:
//! `-w <dir>` sets the working directory, `-e <command>` runs an initial
//! command. Arguments are passed as argv, so paths with spaces need no shell
//! quoting here.

use crate::error::LaunchError;
use crate::resolve::LaunchPlan;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// A launchable terminal emulator, identified by its binary name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emulator {
    program: String,
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new("tilix")
    }
}

impl Emulator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Human-facing emulator name for menu labels ("tilix" → "Tilix").
    pub fn display_name(&self) -> String {
        let mut chars = self.program.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Full argv (program first) for launching this emulator with `plan`.
    pub fn command_for(&self, plan: &LaunchPlan) -> Vec<String> {
        let mut argv = vec![self.program.clone()];
        match plan {
            LaunchPlan::Local { working_dir: None } => {}
            LaunchPlan::Local {
                working_dir: Some(dir),
            } => {
                argv.push("-w".to_string());
                argv.push(dir.display().to_string());
            }
            LaunchPlan::RemoteShell { shell_command } => {
                argv.push("-e".to_string());
                argv.push(shell_command.clone());
            }
        }
        argv
    }

    /// Whether the emulator binary is available, probed by running
    /// `<program> --version`. Probe failure means "not installed".
    pub fn is_installed(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Start the emulator for `plan` and return without waiting.
    ///
    /// The child is detached from our stdio and never supervised; exit
    /// status and lifetime are the emulator's own business.
    pub fn spawn(&self, plan: &LaunchPlan) -> Result<(), LaunchError> {
        let argv = self.command_for(plan);
        debug!(command = %render_command(&argv), "launching terminal");
        let child = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LaunchError::Spawn(format!("{}: {e}", self.program)))?;
        drop(child);
        Ok(())
    }

    /// Like [`Emulator::spawn`], but fails early with a clearer error when
    /// the binary is missing.
    pub fn launch(&self, plan: &LaunchPlan) -> Result<(), LaunchError> {
        if !self.is_installed() {
            warn!(program = %self.program, "emulator probe failed");
            return Err(LaunchError::NotInstalled(self.program.clone()));
        }
        self.spawn(plan)
    }
}

/// Render an argv as a single display line, quoting arguments that would
/// not survive as one shell token. Display only — spawning uses the argv.
pub fn render_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| shell_quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shell-safe single-quote escaping for display purposes.
fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".into();
    }
    let safe = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '@' | '='));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn local_plan_with_directory_uses_w_flag() {
        let emulator = Emulator::default();
        let plan = LaunchPlan::Local {
            working_dir: Some(PathBuf::from("/var/log")),
        };
        assert_eq!(emulator.command_for(&plan), vec!["tilix", "-w", "/var/log"]);
    }

    #[test]
    fn local_plan_without_directory_is_bare() {
        let emulator = Emulator::new("terminix");
        let plan = LaunchPlan::Local { working_dir: None };
        assert_eq!(emulator.command_for(&plan), vec!["terminix"]);
    }

    #[test]
    fn remote_plan_uses_e_flag_with_whole_command() {
        let emulator = Emulator::default();
        let plan = LaunchPlan::RemoteShell {
            shell_command: "ssh -t host cd \"/pub\" ; $SHELL".to_string(),
        };
        assert_eq!(
            emulator.command_for(&plan),
            vec!["tilix", "-e", "ssh -t host cd \"/pub\" ; $SHELL"]
        );
    }

    #[test]
    fn display_name_capitalizes_program() {
        assert_eq!(Emulator::new("tilix").display_name(), "Tilix");
        assert_eq!(Emulator::new("terminix").display_name(), "Terminix");
    }

    #[test]
    fn quote_passes_plain_tokens_through() {
        assert_eq!(shell_quote("/var/log"), "/var/log");
        assert_eq!(shell_quote("-w"), "-w");
    }

    #[test]
    fn quote_wraps_tokens_with_spaces() {
        assert_eq!(shell_quote("My Docs"), "'My Docs'");
        assert_eq!(shell_quote("a'b"), "'a'\\''b'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn render_command_joins_quoted_argv() {
        let argv = vec![
            "tilix".to_string(),
            "-w".to_string(),
            "/home/alice/My Docs".to_string(),
        ];
        assert_eq!(render_command(&argv), "tilix -w '/home/alice/My Docs'");
    }

    #[test]
    fn probe_for_missing_binary_is_false_not_an_error() {
        let emulator = Emulator::new("definitely-not-a-real-terminal-emulator");
        assert!(!emulator.is_installed());
    }
}
