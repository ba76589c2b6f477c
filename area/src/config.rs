// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;
use std::time::Duration;

use area_input::{DEFAULT_PAN_STEP, DEFAULT_ZOOM_STEP};
use area_render::RenderConfig;
use area_view::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DisplayFlags};
use kurbo::Size;

/// Startup settings for the viewer. Fixed for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct AreaConfig {
    /// Window title.
    pub title: String,
    /// Initial inner size of the window, in physical pixels.
    pub window_size: Size,
    /// Extent of the canvas in canvas units.
    pub canvas_size: Size,
    /// Origin offset per pan key press.
    pub pan_step: f64,
    /// Scale change per zoom key press.
    pub zoom_step: f64,
    /// Lower and upper scale bounds.
    pub scale_limits: (f64, f64),
    /// Frame rate cap. `0` redraws as fast as events allow.
    pub max_fps: u32,
    /// Requested vertical sync.
    pub vsync: bool,
    /// Overlay font candidates, tried in order.
    pub font_paths: Vec<PathBuf>,
    /// Display toggles at startup.
    pub initial_flags: DisplayFlags,
    /// Re-clamp the origin when the viewport grows past it.
    pub clamp_on_resize: bool,
    /// Colors and text metrics.
    pub render: RenderConfig,
}

impl AreaConfig {
    /// Target time between frames, or `None` when uncapped.
    #[must_use]
    pub fn frame_interval(&self) -> Option<Duration> {
        (self.max_fps > 0).then(|| Duration::from_secs(1) / self.max_fps)
    }
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            title: String::from("Area"),
            window_size: Size::new(800.0, 600.0),
            canvas_size: Size::new(5000.0, 5000.0),
            pan_step: DEFAULT_PAN_STEP,
            zoom_step: DEFAULT_ZOOM_STEP,
            scale_limits: (DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE),
            max_fps: 60,
            vsync: true,
            font_paths: default_font_paths(),
            initial_flags: DisplayFlags::default(),
            clamp_on_resize: false,
            render: RenderConfig::default(),
        }
    }
}

/// DejaVu Sans, shipped with the crate.
const BUNDLED_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSans.ttf");

fn default_font_paths() -> Vec<PathBuf> {
    [
        BUNDLED_FONT,
        "/usr/share/fonts/truetype/ubuntu/Ubuntu-R.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}
