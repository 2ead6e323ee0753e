//! End-to-end resolution flow through the public library API: URI in,
//! emulator argv out. Mirrors what the CLI and a file-manager adapter do,
//! without spawning anything.

use open_tilix::menu::{background_entries, file_entries, Target};
use open_tilix::resolve::{resolve, LaunchPlan};
use open_tilix::terminal::Emulator;
use std::path::PathBuf;

#[test]
fn local_directory_launches_with_working_directory() {
    let plan = resolve("file:///home/alice/src", true);
    let argv = Emulator::default().command_for(&plan);
    assert_eq!(argv, vec!["tilix", "-w", "/home/alice/src"]);
}

#[test]
fn local_file_launches_in_containing_directory() {
    let plan = resolve("file:///home/alice/src/main.rs", false);
    let argv = Emulator::default().command_for(&plan);
    assert_eq!(argv, vec!["tilix", "-w", "/home/alice/src"]);
}

#[test]
fn missing_uri_launches_bare_emulator() {
    let plan = resolve("", true);
    assert_eq!(plan, LaunchPlan::Local { working_dir: None });
    assert_eq!(Emulator::default().command_for(&plan), vec!["tilix"]);
}

#[test]
fn remote_directory_launches_ssh_session() {
    let plan = resolve("sftp://alice@host:2222/home/alice/docs", true);
    let argv = Emulator::default().command_for(&plan);
    assert_eq!(
        argv,
        vec![
            "tilix",
            "-e",
            "ssh -t alice@host -p 2222 cd \"/home/alice/docs\" ; $SHELL",
        ]
    );
}

#[test]
fn remote_host_without_user_or_port_gets_minimal_ssh() {
    let plan = resolve("ftp://host/pub", true);
    let argv = Emulator::default().command_for(&plan);
    assert_eq!(argv, vec!["tilix", "-e", "ssh -t host cd \"/pub\" ; $SHELL"]);
}

#[test]
fn alternate_emulator_is_respected_end_to_end() {
    let emulator = Emulator::new("terminix");
    let plan = resolve("file:///var/log", true);
    assert_eq!(
        emulator.command_for(&plan),
        vec!["terminix", "-w", "/var/log"]
    );
}

#[test]
fn percent_encoding_round_trips_through_resolution() {
    let encoded = resolve("file:///home/alice/My%20Docs", true);
    let plain = resolve("/home/alice/My Docs", true);
    assert_eq!(encoded, plain);
    assert_eq!(
        encoded,
        LaunchPlan::Local {
            working_dir: Some(PathBuf::from("/home/alice/My Docs")),
        }
    );
}

#[test]
fn menu_entries_line_up_with_resolution_modes() {
    // A remote directory selection offers the remote entry, and resolving
    // the same URI produces the ssh plan that entry triggers.
    let uri = "sftp://host/srv/www";
    let entries = file_entries(&[Target::new(uri, true)], "Tilix");
    assert_eq!(entries[0].id, "openterminal_remote_item");
    assert!(matches!(
        resolve(uri, true),
        LaunchPlan::RemoteShell { .. }
    ));

    // The background "here" entry on a local folder resolves locally.
    let here = "file:///home/alice";
    let entries = background_entries(&Target::new(here, true), "Tilix");
    assert_eq!(entries.last().unwrap().id, "openterminal_bg_file_item");
    assert!(matches!(resolve(here, true), LaunchPlan::Local { .. }));
}
