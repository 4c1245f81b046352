//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifiers that turn `s` into the submit shortcut (any one of them)
/// - macOS: Cmd+S and Ctrl+S
/// - Linux/Windows: Ctrl+S
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::SUPER.union(KeyModifiers::CONTROL);

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_submits_on_every_platform() {
        assert!(SUBMIT_MODIFIERS.contains(KeyModifiers::CONTROL));
        assert!(!SUBMIT_MODIFIERS.contains(KeyModifiers::ALT));
    }
}
