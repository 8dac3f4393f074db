//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts. Terminals rarely forward Cmd, so Ctrl is used
/// everywhere.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password visibility shortcut display
pub const REVEAL_SHORTCUT: &str = "Ctrl+P";

/// Glyph used to mask password characters
pub const PASSWORD_MASK: char = '•';
