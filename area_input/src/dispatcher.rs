// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use area_view::{DisplayFlags, ViewState};
use ui_events::keyboard::{Key, KeyState, KeyboardEvent};

use crate::action::{Action, DEFAULT_BINDINGS, KeyBinding};

/// Distance moved by one pan step, in screen units.
pub const DEFAULT_PAN_STEP: f64 = 10.0;

/// Scale change applied by one zoom step.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Maps key presses to [`Action`]s and applies them.
///
/// The dispatcher owns no view state; it mutates whatever [`ViewState`] and
/// [`DisplayFlags`] it is handed.
#[derive(Clone, Copy, Debug)]
pub struct InputDispatcher {
    pan_step: f64,
    zoom_step: f64,
    bindings: &'static [(KeyBinding, Action)],
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self {
            pan_step: DEFAULT_PAN_STEP,
            zoom_step: DEFAULT_ZOOM_STEP,
            bindings: DEFAULT_BINDINGS,
        }
    }
}

impl InputDispatcher {
    /// Returns a copy with a different pan step.
    #[must_use]
    pub fn with_pan_step(mut self, step: f64) -> Self {
        self.pan_step = step;
        self
    }

    /// Returns a copy with a different zoom step.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = step;
        self
    }

    /// Returns a copy using `bindings` instead of [`DEFAULT_BINDINGS`].
    ///
    /// The first matching entry wins.
    #[must_use]
    pub fn with_bindings(mut self, bindings: &'static [(KeyBinding, Action)]) -> Self {
        self.bindings = bindings;
        self
    }

    /// Current pan step.
    #[must_use]
    pub fn pan_step(&self) -> f64 {
        self.pan_step
    }

    /// Current zoom step.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Looks `key` up in the binding table.
    #[must_use]
    pub fn action_for(&self, key: &Key) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|&(_, action)| action)
    }

    /// Applies `action` to the view and display flags.
    pub fn apply(&self, action: Action, view: &mut ViewState, flags: &mut DisplayFlags) {
        match action {
            Action::Pan(directions) => {
                view.pan(directions, self.pan_step);
                let origin = view.origin();
                tracing::debug!(x = origin.x, y = origin.y, "origin");
            }
            Action::ZoomIn => {
                view.zoom(self.zoom_step);
                tracing::debug!(scale = view.scale(), "scale");
            }
            Action::ZoomOut => {
                view.zoom(-self.zoom_step);
                tracing::debug!(scale = view.scale(), "scale");
            }
            Action::ToggleOverlay => {
                let shown = flags.toggle_overlay();
                tracing::debug!(shown, "overlay");
            }
            Action::ToggleBoundaryBox => {
                let shown = flags.toggle_boundary_box();
                tracing::debug!(shown, "boundary box");
            }
            Action::Reset => view.reset(true, true),
        }
    }

    /// Handles one key transition.
    ///
    /// Releases and unbound keys are ignored. Returns the applied action.
    pub fn dispatch_key(
        &self,
        state: KeyState,
        key: &Key,
        view: &mut ViewState,
        flags: &mut DisplayFlags,
    ) -> Option<Action> {
        if state != KeyState::Down {
            return None;
        }
        let action = self.action_for(key)?;
        self.apply(action, view, flags);
        Some(action)
    }

    /// Handles one keyboard event.
    ///
    /// Auto-repeat presses are treated like fresh presses, so holding an
    /// arrow key keeps panning at the platform repeat rate.
    pub fn dispatch(
        &self,
        event: &KeyboardEvent,
        view: &mut ViewState,
        flags: &mut DisplayFlags,
    ) -> Option<Action> {
        self.dispatch_key(event.state, &event.key, view, flags)
    }
}
