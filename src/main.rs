//! CLI entry point for open-tilix.

mod cli;

use clap::Parser;
use open_tilix::config::{ensure_default_global_config, load_config};
use open_tilix::menu::{self, Target};
use open_tilix::resolve::{local_path, resolve};
use open_tilix::shortcut::ShortcutBinding;
use open_tilix::terminal::{render_command, Emulator};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("OPEN_TILIX_LOG"))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = ensure_default_global_config() {
        eprintln!("warning: failed to initialize ~/.config/open-tilix/open-tilix.toml: {e}");
    }

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(terminal) = &args.terminal {
        config.terminal.program = terminal.clone();
    }

    let emulator = Emulator::new(config.terminal.program.as_str());
    let shortcut = ShortcutBinding::new(config.shortcut.accelerator.as_str());
    debug!(accelerator = shortcut.accelerator(), "shortcut binding ready");

    let uri = args.uri.as_deref().unwrap_or("");
    let is_directory = target_is_directory(&args, uri);

    if args.menu {
        render_menu(&emulator, uri, is_directory);
        return;
    }

    let plan = resolve(uri, is_directory);
    debug!(?plan, %uri, is_directory, "resolved launch plan");

    if args.dry_run {
        println!("{}", render_command(&emulator.command_for(&plan)));
        return;
    }

    if let Err(e) = emulator.launch(&plan) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Decide the target kind: explicit flags win; local paths are checked on
/// the filesystem; anything unknowable (remote targets, vanished paths) is
/// treated as a directory so the terminal opens there rather than one level
/// up.
fn target_is_directory(args: &cli::Args, uri: &str) -> bool {
    if args.directory {
        return true;
    }
    if args.file {
        return false;
    }
    match local_path(uri) {
        Some(path) => std::fs::metadata(&path)
            .map(|meta| meta.is_dir())
            .unwrap_or(true),
        None => true,
    }
}

/// Print the context-menu entries a file manager would show for this
/// target: the selection entries when a URI is given, the background
/// entries otherwise.
fn render_menu(emulator: &Emulator, uri: &str, is_directory: bool) {
    if !emulator.is_installed() {
        return;
    }
    let name = emulator.display_name();
    let entries = if uri.is_empty() {
        menu::background_entries(&Target::new("", true), &name)
    } else {
        menu::file_entries(&[Target::new(uri, is_directory)], &name)
    };
    for entry in entries {
        println!("{}\t{}\t{}", entry.id, entry.label, entry.tip);
    }
}
