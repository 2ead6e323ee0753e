//! Keyboard-shortcut binding for the host adapter.
//!
//! The original extension wires a GTK accelerator read from the settings
//! key `nautilus-open` and rebinds whenever that key changes. Re-architected
//! here as an explicit value: the host layer holds a [`ShortcutBinding`],
//! forwards settings-change notifications to it, and reads the current
//! accelerator back whenever it needs to (re)register the shortcut. No GUI
//! state lives in this crate.

/// Settings key whose value is the accelerator string.
pub const SETTINGS_KEY: &str = "nautilus-open";

/// Current accelerator for the "open terminal" shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding {
    accelerator: String,
}

impl ShortcutBinding {
    pub fn new(accelerator: impl Into<String>) -> Self {
        Self {
            accelerator: accelerator.into(),
        }
    }

    /// Accelerator in GTK notation, e.g. `<Ctrl>z`.
    pub fn accelerator(&self) -> &str {
        &self.accelerator
    }

    /// Apply a settings-change notification. Only the watched key rebinds;
    /// returns whether the binding changed so the host knows to re-register.
    pub fn settings_changed(&mut self, key: &str, value: &str) -> bool {
        if key != SETTINGS_KEY || self.accelerator == value {
            return false;
        }
        self.accelerator = value.to_string();
        true
    }
}
