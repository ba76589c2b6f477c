// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use area_view::PanDirection;
use ui_events::keyboard::{Key, NamedKey};

/// A view or display-mode change requested by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Pan one step in the given directions.
    Pan(PanDirection),
    /// Increase the scale by one step.
    ZoomIn,
    /// Decrease the scale by one step.
    ZoomOut,
    /// Flip the overlay text flag.
    ToggleOverlay,
    /// Flip the boundary box flag.
    ToggleBoundaryBox,
    /// Reset both scale and origin.
    Reset,
}

/// Key side of a binding table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyBinding {
    /// A named (non-printing) key such as an arrow or `PageUp`.
    Named(NamedKey),
    /// A printable key, compared ASCII case-insensitively.
    Character(&'static str),
}

impl KeyBinding {
    /// Returns `true` if `key` triggers this binding.
    #[must_use]
    pub fn matches(&self, key: &Key) -> bool {
        match (self, key) {
            (Self::Named(bound), Key::Named(named)) => bound == named,
            (Self::Character(bound), Key::Character(text)) => {
                bound.eq_ignore_ascii_case(text.as_str())
            }
            _ => false,
        }
    }
}

/// Default key table of the viewer.
pub const DEFAULT_BINDINGS: &[(KeyBinding, Action)] = &[
    (
        KeyBinding::Named(NamedKey::ArrowRight),
        Action::Pan(PanDirection::RIGHT),
    ),
    (
        KeyBinding::Named(NamedKey::ArrowLeft),
        Action::Pan(PanDirection::LEFT),
    ),
    (
        KeyBinding::Named(NamedKey::ArrowUp),
        Action::Pan(PanDirection::TOP),
    ),
    (
        KeyBinding::Named(NamedKey::ArrowDown),
        Action::Pan(PanDirection::DOWN),
    ),
    (KeyBinding::Character("+"), Action::ZoomIn),
    (KeyBinding::Named(NamedKey::PageUp), Action::ZoomIn),
    (KeyBinding::Character("-"), Action::ZoomOut),
    (KeyBinding::Named(NamedKey::PageDown), Action::ZoomOut),
    (KeyBinding::Character("o"), Action::ToggleOverlay),
    (KeyBinding::Character("b"), Action::ToggleBoundaryBox),
    (KeyBinding::Character("r"), Action::Reset),
];

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use ui_events::keyboard::{Key, NamedKey};

    use super::{DEFAULT_BINDINGS, KeyBinding};

    #[test]
    fn character_bindings_ignore_ascii_case() {
        let binding = KeyBinding::Character("o");
        assert!(binding.matches(&Key::Character("o".to_string())));
        assert!(binding.matches(&Key::Character("O".to_string())));
        assert!(!binding.matches(&Key::Character("p".to_string())));
    }

    #[test]
    fn named_and_character_bindings_do_not_cross_match() {
        let binding = KeyBinding::Named(NamedKey::Enter);
        assert!(binding.matches(&Key::Named(NamedKey::Enter)));
        assert!(!binding.matches(&Key::Character("\r".to_string())));
    }

    #[test]
    fn default_table_has_no_duplicate_keys() {
        for (i, (a, _)) in DEFAULT_BINDINGS.iter().enumerate() {
            for (b, _) in &DEFAULT_BINDINGS[i + 1..] {
                assert_ne!(a, b, "duplicate binding {a:?}");
            }
        }
    }
}
