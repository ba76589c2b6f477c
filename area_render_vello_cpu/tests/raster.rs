// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel checks of full frames rendered through `VelloCpuSurface`.

use area_render::{DrawSurface, RenderConfig, Renderer};
use area_render_vello_cpu::{Font, VelloCpuSurface};
use area_view::{DisplayFlags, PanDirection, ViewState};
use kurbo::{Point, Size};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn render(view: &ViewState, flags: &DisplayFlags) -> VelloCpuSurface {
    let renderer = Renderer::new(RenderConfig::default());
    let mut surface = VelloCpuSurface::new(view.viewport_size(), None);
    surface.clear();
    renderer.render(view, flags, Point::ZERO, &mut surface);
    surface.present();
    surface
}

fn small_view() -> ViewState {
    ViewState::new(Size::new(5000.0, 5000.0), Size::new(200.0, 160.0))
}

fn no_overlay() -> DisplayFlags {
    DisplayFlags {
        show_overlay: false,
        show_boundary_box: false,
    }
}

#[test]
fn background_and_marker_at_identity() {
    let surface = render(&small_view(), &no_overlay());
    assert_eq!(surface.pixel(20, 20), Some(RED));
    assert_eq!(surface.pixel(150, 120), Some(BLACK));
    // Outside the marker's circle but inside its bounding box.
    assert_eq!(surface.pixel(1, 1), Some(BLACK));
}

#[test]
fn marker_follows_pan() {
    let mut view = small_view();
    for _ in 0..10 {
        view.pan(PanDirection::LEFT, 10.0);
    }
    let surface = render(&view, &no_overlay());
    assert_eq!(surface.pixel(120, 20), Some(RED));
    assert_eq!(surface.pixel(20, 20), Some(BLACK));
}

#[test]
fn marker_follows_zoom() {
    let mut view = small_view();
    view.zoom(1.0);
    let surface = render(&view, &no_overlay());
    assert_eq!(surface.pixel(40, 40), Some(RED));
    assert_eq!(surface.pixel(75, 40), Some(RED));
    assert_eq!(surface.pixel(85, 40), Some(BLACK));
}

#[test]
fn boundary_box_is_scaled_with_the_view() {
    let mut view = small_view();
    for _ in 0..5 {
        view.zoom(-0.1);
    }
    assert_eq!(view.scale(), 0.5);
    let flags = DisplayFlags {
        show_overlay: false,
        show_boundary_box: true,
    };
    let surface = render(&view, &flags);

    // Bottom edge of the box lands on y = 80 at half scale.
    let [r, g, b, _] = surface.pixel(50, 80).unwrap();
    assert_eq!((r, b), (0, 0));
    assert!(g > 0, "expected green hairline at the scaled bottom edge");

    // The unscaled bottom edge would be at y = 160, off this surface; the
    // region between stays background.
    assert_eq!(surface.pixel(50, 120), Some(BLACK));
}

#[test]
fn text_without_font_is_skipped() {
    let flags = DisplayFlags {
        show_overlay: true,
        show_boundary_box: false,
    };
    let with_text = render(&small_view(), &flags);
    let without = render(&small_view(), &no_overlay());
    assert!(!with_text.has_font());

    let (mut a, mut b) = (Vec::new(), Vec::new());
    with_text.copy_0rgb(&mut a);
    without.copy_0rgb(&mut b);
    assert_eq!(a, b);
}

const BUNDLED_FONT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../area/assets/DejaVuSans.ttf"
);

#[test]
fn overlay_text_stays_in_its_three_lines() {
    let view = ViewState::new(Size::new(5000.0, 5000.0), Size::new(200.0, 60.0));
    let renderer = Renderer::new(RenderConfig::default());
    let font = Font::load(BUNDLED_FONT).unwrap();
    let mut surface = VelloCpuSurface::new(view.viewport_size(), Some(font));
    assert!(surface.has_font());
    surface.clear();
    renderer.render(&view, &DisplayFlags::default(), Point::ZERO, &mut surface);
    surface.present();

    // Light pixels: text, alone or blended over the red marker.
    let mut pixels_per_line = [0_u32; 3];
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let [_, g, b, _] = surface.pixel(x, y).unwrap();
            if g < 160 || b < 160 {
                continue;
            }
            assert!(y < 36, "text below the third overlay line at ({x}, {y})");
            assert!(x < 180, "overlay line too wide at ({x}, {y})");
            pixels_per_line[usize::from(y / 12)] += 1;
        }
    }
    assert!(
        pixels_per_line.iter().all(|&n| n > 0),
        "every overlay line should leave text pixels: {pixels_per_line:?}"
    );
}

#[test]
fn resize_reallocates_and_copies_as_0rgb() {
    let mut view = small_view();
    let renderer = Renderer::new(RenderConfig::default());
    let mut surface = VelloCpuSurface::new(view.viewport_size(), None);

    view.resize(Size::new(64.0, 48.0));
    surface.resize(view.viewport_size());
    assert_eq!((surface.width(), surface.height()), (64, 48));

    surface.clear();
    renderer.render(&view, &no_overlay(), Point::ZERO, &mut surface);
    surface.present();

    let mut words = Vec::new();
    surface.copy_0rgb(&mut words);
    assert_eq!(words.len(), 64 * 48);
    assert_eq!(words[20 * 64 + 20], 0x00FF_0000);
    assert_eq!(words[47 * 64 + 63], 0);
}
