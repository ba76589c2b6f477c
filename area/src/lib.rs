// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area: a window onto a fixed 5000×5000 canvas with keyboard pan and zoom.
//!
//! - [`Viewer`] is the frame loop: it drains [`ViewerEvent`]s into the view
//!   state and paints one frame onto any
//!   [`DrawSurface`](area_render::DrawSurface).
//! - [`run`] hosts a [`Viewer`] in a winit window, rasterizing with
//!   `vello_cpu` and presenting through softbuffer.
//! - [`AreaConfig`] gathers every startup setting.
//!
//! Keys: arrows pan, `+`/`PageUp` and `-`/`PageDown` zoom, `O` toggles the
//! overlay, `B` toggles the boundary box, `R` resets the view.

mod config;
mod host;
mod viewer;

pub use config::AreaConfig;
pub use host::run;
pub use viewer::{LoopState, Viewer, ViewerEvent};
