// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Directions a single [`crate::ViewState::pan`] call applies to.
    ///
    /// Bits may be combined for diagonal pans; each axis is handled
    /// independently.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PanDirection: u8 {
        /// Increase `origin.x`, revealing content further into the canvas.
        const LEFT  = 0b0000_0001;
        /// Increase `origin.y`.
        const TOP   = 0b0000_0010;
        /// Decrease `origin.x` toward zero.
        const RIGHT = 0b0000_0100;
        /// Decrease `origin.y` toward zero.
        const DOWN  = 0b0000_1000;
    }
}

/// Display-mode toggles read by the renderer each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFlags {
    /// Draw the diagnostic text overlay (origin, scale, pointer).
    pub show_overlay: bool,
    /// Draw the viewport rectangle through the view transform.
    pub show_boundary_box: bool,
}

impl Default for DisplayFlags {
    /// Startup flags: overlay on, boundary box off.
    fn default() -> Self {
        Self {
            show_overlay: true,
            show_boundary_box: false,
        }
    }
}

impl DisplayFlags {
    /// Flips [`DisplayFlags::show_overlay`] and returns the new value.
    pub fn toggle_overlay(&mut self) -> bool {
        self.show_overlay = !self.show_overlay;
        self.show_overlay
    }

    /// Flips [`DisplayFlags::show_boundary_box`] and returns the new value.
    pub fn toggle_boundary_box(&mut self) -> bool {
        self.show_boundary_box = !self.show_boundary_box;
        self.show_boundary_box
    }
}
