// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area Input: maps discrete key presses onto view mutations.
//!
//! The mapping is an explicit table of [`KeyBinding`] → [`Action`] pairs
//! ([`DEFAULT_BINDINGS`]) consumed by [`InputDispatcher`]. Keys are
//! `ui-events` keyboard types, so the table can be exercised without a
//! window; a host translates its native events (for example through
//! `ui-events-winit`) and hands them to [`InputDispatcher::dispatch`].
//!
//! | Key | Action |
//! |---|---|
//! | `ArrowRight` / `ArrowLeft` / `ArrowUp` / `ArrowDown` | pan one step |
//! | `+` / `PageUp` | zoom in one step |
//! | `-` / `PageDown` | zoom out one step |
//! | `O` | toggle the overlay |
//! | `B` | toggle the boundary box |
//! | `R` | reset scale and origin |
//!
//! Only presses are dispatched; releases are ignored and every other key is a
//! no-op.
//!
//! ```rust
//! use area_input::{Action, InputDispatcher};
//! use area_view::{DisplayFlags, PanDirection, ViewState};
//! use kurbo::Size;
//! use ui_events::keyboard::{Key, KeyState, NamedKey};
//!
//! let dispatcher = InputDispatcher::default();
//! let mut view = ViewState::new(Size::new(5000.0, 5000.0), Size::new(800.0, 600.0));
//! let mut flags = DisplayFlags::default();
//!
//! let key = Key::Named(NamedKey::ArrowLeft);
//! let action = dispatcher.dispatch_key(KeyState::Down, &key, &mut view, &mut flags);
//! assert_eq!(action, Some(Action::Pan(PanDirection::LEFT)));
//! assert_eq!(view.origin().x, 10.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod action;
mod dispatcher;

pub use action::{Action, DEFAULT_BINDINGS, KeyBinding};
pub use dispatcher::{DEFAULT_PAN_STEP, DEFAULT_ZOOM_STEP, InputDispatcher};
