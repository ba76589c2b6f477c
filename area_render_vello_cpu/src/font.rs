// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::OutlinePen;
use skrifa::raw::ReadError;
use skrifa::{FontRef, MetadataProvider};
use vello_cpu::kurbo::BezPath;

/// Errors produced while loading a [`Font`].
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// No file exists at the given path.
    #[error("font file not found: {}", .path.display())]
    NotFound {
        /// Path that was tried.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    #[error("failed to read font file {}", .path.display())]
    Io {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The bytes are not a font Skrifa can read.
    #[error("failed to parse font data: {0}")]
    Parse(#[from] ReadError),
    /// [`Font::load_first`] was given no paths.
    #[error("no font paths configured")]
    NoCandidates,
}

/// An outline font held in memory.
#[derive(Clone)]
pub struct Font {
    data: Arc<[u8]>,
    index: u32,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("len", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

impl Font {
    /// Reads and validates the first font of the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => FontError::NotFound {
                path: path.to_path_buf(),
            },
            _ => FontError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::from_bytes(bytes, 0)
    }

    /// Tries each path in order and returns the first font that loads.
    ///
    /// On failure the error of the last path tried is returned.
    pub fn load_first<I, P>(paths: I) -> Result<Self, FontError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut last = FontError::NoCandidates;
        for path in paths {
            match Self::load(&path) {
                Ok(font) => return Ok(font),
                Err(err) => {
                    tracing::debug!(
                        path = %path.as_ref().display(),
                        error = %err,
                        "font candidate rejected"
                    );
                    last = err;
                }
            }
        }
        Err(last)
    }

    /// Validates `data` as a font (or collection member `index`).
    pub fn from_bytes(data: impl Into<Arc<[u8]>>, index: u32) -> Result<Self, FontError> {
        let data = data.into();
        FontRef::from_index(&data, index)?;
        Ok(Self { data, index })
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.index).ok()
    }

    /// Outlines of `text` laid out on one line at `size_px`.
    ///
    /// The path's origin is the top-left of the line: the baseline sits at
    /// the font's ascent and y grows downward. Characters missing from the
    /// font leave a gap.
    #[must_use]
    pub fn line_path(&self, text: &str, size_px: f32) -> BezPath {
        let mut pen = LinePen {
            path: BezPath::new(),
            x: 0.0,
            baseline: 0.0,
        };
        let Some(font) = self.font_ref() else {
            return pen.path;
        };

        let size = Size::new(size_px);
        let location = LocationRef::default();
        let charmap = font.charmap();
        let metrics = font.glyph_metrics(size, location);
        let outlines = font.outline_glyphs();
        pen.baseline = font.metrics(size, location).ascent;

        let fallback_advance = size_px * 0.5;
        for ch in text.chars() {
            let Some(gid) = charmap.map(ch) else {
                pen.x += fallback_advance;
                continue;
            };
            if let Some(glyph) = outlines.get(gid) {
                if let Err(err) = glyph.draw(size, &mut pen) {
                    tracing::trace!(%ch, error = %err, "glyph left blank");
                }
            }
            pen.x += metrics.advance_width(gid).unwrap_or(fallback_advance);
        }
        pen.path
    }
}

/// Records glyph outlines into one path, flipping Y so glyphs are upright in
/// screen coordinates.
struct LinePen {
    path: BezPath,
    x: f32,
    baseline: f32,
}

impl LinePen {
    fn map(&self, x: f32, y: f32) -> (f64, f64) {
        (f64::from(self.x + x), f64::from(self.baseline - y))
    }
}

impl OutlinePen for LinePen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(self.map(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(self.map(x, y));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path.quad_to(self.map(cx0, cy0), self.map(x, y));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path
            .curve_to(self.map(cx0, cy0), self.map(cx1, cy1), self.map(x, y));
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use vello_cpu::kurbo::Shape as _;

    use super::{Font, FontError};

    const DEJAVU_SANS: &[u8] = include_bytes!("../../area/assets/DejaVuSans.ttf");

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("area-font-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = scratch_path("missing.ttf");
        let err = Font::load(&path).unwrap_err();
        assert!(matches!(err, FontError::NotFound { path: p } if p == path));
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = Font::from_bytes(vec![0_u8; 16], 0).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn garbage_file_fails_to_parse() {
        let path = scratch_path("garbage.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        let result = Font::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(FontError::Parse(_))));
    }

    #[test]
    fn load_first_reports_last_failure() {
        let err = Font::load_first([scratch_path("a.ttf"), scratch_path("b.ttf")]).unwrap_err();
        match err {
            FontError::NotFound { path } => assert_eq!(path, scratch_path("b.ttf")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn load_first_without_paths() {
        let paths: [PathBuf; 0] = [];
        assert!(matches!(
            Font::load_first(paths),
            Err(FontError::NoCandidates)
        ));
    }

    #[test]
    fn line_path_sits_below_the_line_top() {
        let font = Font::from_bytes(DEJAVU_SANS.to_vec(), 0).unwrap();
        let bbox = font.line_path("Ag", 12.0).bounding_box();
        assert!(bbox.x0 >= 0.0 && bbox.y0 >= 0.0, "{bbox:?}");
        // Cap height sits above the baseline, the descender of `g` below it.
        assert!(bbox.height() > 9.0 && bbox.height() < 15.0, "{bbox:?}");
        assert!(bbox.width() > 10.0 && bbox.width() < 20.0, "{bbox:?}");
    }

    #[test]
    fn line_path_advances_per_glyph() {
        let font = Font::from_bytes(DEJAVU_SANS.to_vec(), 0).unwrap();
        let one = font.line_path("0", 12.0).bounding_box();
        let three = font.line_path("000", 12.0).bounding_box();
        assert!(three.x1 > one.x1 + 2.0 * 6.0, "{one:?} vs {three:?}");
        assert!(font.line_path("", 12.0).elements().is_empty());
    }
}
