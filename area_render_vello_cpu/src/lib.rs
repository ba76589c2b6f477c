// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello CPU–backed [`DrawSurface`](area_render::DrawSurface) for Area.
//!
//! [`VelloCpuSurface`] rasterizes [`DrawCmd`](area_render::DrawCmd)s with
//! the sparse-strips [`vello_cpu::RenderContext`] into a
//! [`vello_cpu::Pixmap`]. A window host copies the pixmap to the screen after
//! each [`present`](area_render::DrawSurface::present).
//!
//! Text is drawn from glyph outlines of a single [`Font`] loaded at startup.
//! Glyphs are laid out left to right by their advance widths; there is no
//! shaping, kerning, or fallback. A surface without a font skips text.
//!
//! ```rust
//! use area_render::{DrawCmd, DrawSurface};
//! use area_render_vello_cpu::VelloCpuSurface;
//! use kurbo::{Affine, Rect, Size};
//! use peniko::Color;
//!
//! let mut surface = VelloCpuSurface::new(Size::new(16.0, 16.0), None);
//! surface.clear();
//! surface.draw(&DrawCmd::FillRect {
//!     rect: Rect::new(0.0, 0.0, 16.0, 16.0),
//!     color: Color::from_rgb8(0, 0, 255),
//!     transform: Affine::IDENTITY,
//! });
//! surface.present();
//! assert_eq!(surface.pixel(8, 8), Some([0, 0, 255, 255]));
//! ```

#![deny(unsafe_code)]

mod font;
mod surface;

pub use font::{Font, FontError};
pub use surface::VelloCpuSurface;
