// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area View: the single pan/zoom view over a fixed-size canvas.
//!
//! This crate is the headless core of the Area viewer. It provides:
//! - [`ViewState`]: origin offset, uniform scale, canvas and viewport extents,
//!   with clamped mutators.
//! - [`PanDirection`]: the set of directions a single pan step applies to.
//! - [`DisplayFlags`]: the two display-mode toggles (overlay text and the
//!   boundary box).
//!
//! It does **not** own a window, a font, or a renderer. Callers translate
//! input into [`ViewState`] mutations and read [`ViewState::transform`] when
//! drawing canvas-space content.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use area_view::{PanDirection, ViewState};
//!
//! let mut view = ViewState::new(Size::new(5000.0, 5000.0), Size::new(800.0, 600.0));
//!
//! // Diagonal pan: both axes move in the same call.
//! view.pan(PanDirection::LEFT | PanDirection::TOP, 10.0);
//! assert_eq!(view.origin().x, 10.0);
//! assert_eq!(view.origin().y, 10.0);
//!
//! view.zoom(0.5);
//! assert_eq!(view.scale(), 1.5);
//!
//! // Canvas-space point `p` lands at `p * scale + origin` on screen.
//! let on_screen = view.canvas_to_screen(Point::new(2.0, 2.0));
//! assert_eq!(on_screen, Point::new(13.0, 13.0));
//! ```
//!
//! ## Clamping
//!
//! - Scale stays within `[0.1, 4.0]` by default (see
//!   [`ViewState::set_scale_limits`]).
//! - Panning is gated per direction: a positive step only moves while the
//!   origin is below `canvas - viewport` on that axis, a negative step only
//!   while it is above zero. Steps never overshoot either end.
//! - [`ViewState::resize`] leaves the origin untouched; call
//!   [`ViewState::clamp_origin`] to pull it back into range.
//!
//! This crate is `no_std`.

#![no_std]

mod flags;
mod view_state;

pub use flags::{DisplayFlags, PanDirection};
pub use view_state::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ViewState};
