// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area Render: the viewer's frame as a list of draw commands.
//!
//! Each frame is a short, strictly ordered list of [`DrawCmd`]s, painted
//! back to front:
//!
//! 1. The background, a filled rectangle covering the viewport in screen
//!    space.
//! 2. Optionally, the boundary box: a closed five-vertex line strip tracing
//!    the viewport rectangle, drawn through the view transform.
//! 3. The foreground content (a circular marker at the canvas origin), drawn
//!    through the view transform.
//! 4. Optionally, three lines of overlay text in screen space.
//!
//! [`Renderer`] builds that list from a [`ViewState`](area_view::ViewState)
//! and [`DisplayFlags`](area_view::DisplayFlags). Backends implement
//! [`DrawSurface`] to turn commands into pixels; [`RecordingSurface`] keeps
//! them for inspection instead.
//!
//! ```rust
//! use area_render::{DrawCmd, RecordingSurface, RenderConfig, Renderer};
//! use area_view::{DisplayFlags, ViewState};
//! use kurbo::{Point, Size};
//!
//! let renderer = Renderer::new(RenderConfig::default());
//! let view = ViewState::new(Size::new(5000.0, 5000.0), Size::new(800.0, 600.0));
//! let flags = DisplayFlags::default();
//!
//! let mut surface = RecordingSurface::default();
//! renderer.render(&view, &flags, Point::ZERO, &mut surface);
//!
//! let frame = surface.draws();
//! assert!(matches!(frame[0], DrawCmd::FillRect { .. }));
//! assert!(matches!(frame[1], DrawCmd::FillCircle { .. }));
//! assert_eq!(frame.len(), 5);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod command;
mod renderer;
mod surface;

pub use command::{DrawCmd, Vertex};
pub use renderer::{RenderConfig, Renderer, format_number};
pub use surface::{DrawSurface, RecordingSurface, SurfaceCall};
