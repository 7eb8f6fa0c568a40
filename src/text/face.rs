//! Font faces.
//!
//! Two implementations sit behind [`GlyphSource`]:
//!
//! * [`BuiltinFace`] – the embedded 8×8 bitmap font (`font8x8`), scaled by an
//!   integer factor derived from the point size. Always available.
//! * [`TrueTypeFace`] – a TTF/OTF file rasterized with `fontdue`.
//!
//! No font files ship with the game, so out of the box every locale uses
//! the bitmap face. Hangul and CJK ideographs are not in its tables and are
//! drawn as hollow boxes at the normal advance, which keeps every layout
//! identical to the one a real font of the same size would give.
//!
//! All measurements are whole pixels. Glyph boxes are expressed relative to
//! the pen position on the baseline, with `top` negative above it.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use font8x8::{
    BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, HIRAGANA_FONTS, LATIN_FONTS, MISC_FONTS,
    UnicodeFonts,
};
use fontdue::{Font, FontSettings};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("cannot read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("font {family} is not a usable TrueType/OpenType file: {reason}")]
    Parse { family: String, reason: String },

    #[error("font {family} carries no horizontal line metrics")]
    NoLineMetrics { family: String },
}

/// One rasterized character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Pen advance after this glyph.
    pub advance: i32,
    /// Offset of the coverage box from the pen x.
    pub left: i32,
    /// Offset of the coverage box from the baseline (negative is up).
    pub top: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major `width × height` coverage, 0 (empty) to 255 (solid).
    pub coverage: Vec<u8>,
}

/// A face at a fixed size: metrics plus on-demand glyph rasterization.
pub trait GlyphSource: fmt::Debug + Send + Sync {
    fn family(&self) -> &str;

    fn size(&self) -> f32;

    fn advance(&self, ch: char) -> i32;

    /// Pixels from the baseline up to the top of the tallest glyph.
    fn ascent(&self) -> i32;

    /// Pixels from the baseline down to the lowest descender.
    fn descent(&self) -> i32;

    /// Extra gap between consecutive lines.
    fn leading(&self) -> i32;

    fn glyph(&self, ch: char) -> Glyph;
}

/*──────────────────────────── builtin bitmap face ───────────────────────────*/

/// Drawn for characters the bitmap tables do not cover.
const TOFU: [u8; 8] = [0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

/// The embedded 8×8 font, magnified by `max(1, round(size / 12))`.
///
/// Every character advances 8 scaled pixels; rows 0–6 sit above the baseline
/// and row 7 is the descender, so a line is `10 × scale` pixels tall with
/// leading included.
#[derive(Clone, Debug)]
pub struct BuiltinFace {
    size: f32,
    scale: i32,
}

impl BuiltinFace {
    pub fn new(size: f32) -> Self {
        let scale = ((size / 12.0).round() as i32).max(1);
        Self { size, scale }
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Raw rows for `ch`, least significant bit leftmost.
    fn rows(ch: char) -> [u8; 8] {
        BASIC_FONTS
            .get(ch)
            .or_else(|| LATIN_FONTS.get(ch))
            .or_else(|| GREEK_FONTS.get(ch))
            .or_else(|| HIRAGANA_FONTS.get(ch))
            .or_else(|| BOX_FONTS.get(ch))
            .or_else(|| BLOCK_FONTS.get(ch))
            .or_else(|| MISC_FONTS.get(ch))
            .unwrap_or(TOFU)
    }
}

impl GlyphSource for BuiltinFace {
    fn family(&self) -> &str {
        "font8x8"
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn advance(&self, _ch: char) -> i32 {
        8 * self.scale
    }

    fn ascent(&self) -> i32 {
        7 * self.scale
    }

    fn descent(&self) -> i32 {
        self.scale
    }

    fn leading(&self) -> i32 {
        2 * self.scale
    }

    fn glyph(&self, ch: char) -> Glyph {
        let s = self.scale as usize;
        let side = 8 * s;
        let mut coverage = vec![0u8; side * side];
        for (row, bits) in Self::rows(ch).iter().enumerate() {
            for col in 0..8 {
                if (bits >> col) & 1 == 0 {
                    continue;
                }
                for dy in 0..s {
                    let start = (row * s + dy) * side + col * s;
                    coverage[start..start + s].fill(255);
                }
            }
        }
        Glyph {
            advance: self.advance(ch),
            left: 0,
            top: -self.ascent(),
            width: side,
            height: side,
            coverage,
        }
    }
}

/*────────────────────────────── TrueType face ──────────────────────────────*/

/// A TTF/OTF face rasterized by `fontdue` at a fixed pixel size.
pub struct TrueTypeFace {
    family: String,
    size: f32,
    font: Font,
    ascent: i32,
    descent: i32,
    leading: i32,
}

impl TrueTypeFace {
    pub fn from_file<P: AsRef<Path>>(path: P, size: f32) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let family = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(family, bytes, size)
    }

    pub fn from_bytes(family: impl Into<String>, bytes: Vec<u8>, size: f32) -> Result<Self, FontError> {
        let family = family.into();
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| {
            FontError::Parse {
                family: family.clone(),
                reason: reason.to_string(),
            }
        })?;
        let line = font
            .horizontal_line_metrics(size)
            .ok_or_else(|| FontError::NoLineMetrics {
                family: family.clone(),
            })?;
        Ok(Self {
            family,
            size,
            ascent: line.ascent.round() as i32,
            // fontdue reports descent as a negative offset
            descent: (-line.descent).round() as i32,
            leading: line.line_gap.round() as i32,
            font,
        })
    }
}

impl fmt::Debug for TrueTypeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFace")
            .field("family", &self.family)
            .field("size", &self.size)
            .field("ascent", &self.ascent)
            .field("descent", &self.descent)
            .field("leading", &self.leading)
            .finish()
    }
}

impl GlyphSource for TrueTypeFace {
    fn family(&self) -> &str {
        &self.family
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn advance(&self, ch: char) -> i32 {
        self.font.metrics(ch, self.size).advance_width.round() as i32
    }

    fn ascent(&self) -> i32 {
        self.ascent
    }

    fn descent(&self) -> i32 {
        self.descent
    }

    fn leading(&self) -> i32 {
        self.leading
    }

    fn glyph(&self, ch: char) -> Glyph {
        let (m, coverage) = self.font.rasterize(ch, self.size);
        Glyph {
            advance: m.advance_width.round() as i32,
            left: m.xmin,
            top: -(m.height as i32 + m.ymin),
            width: m.width,
            height: m.height,
            coverage,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// DejaVu Sans Mono, see `tests/fixtures/DejaVu-LICENSE.txt`.
    const MONO: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/DejaVuSansMono.ttf"
    ));

    pub(crate) fn mono_face(size: f32) -> TrueTypeFace {
        TrueTypeFace::from_bytes("DejaVuSansMono", MONO.to_vec(), size).unwrap()
    }

    #[test]
    fn builtin_scale_follows_point_size() {
        assert_eq!(BuiltinFace::new(14.0).scale(), 1);
        assert_eq!(BuiltinFace::new(16.0).scale(), 1);
        assert_eq!(BuiltinFace::new(24.0).scale(), 2);
        assert_eq!(BuiltinFace::new(28.0).scale(), 2);
        assert_eq!(BuiltinFace::new(4.0).scale(), 1);
    }

    #[test]
    fn builtin_line_height_is_ten_rows() {
        let face = BuiltinFace::new(24.0);
        assert_eq!(face.ascent() + face.descent() + face.leading(), 20);
        assert_eq!(face.advance('W'), 16);
        assert_eq!(face.advance('한'), 16);
    }

    #[test]
    fn builtin_glyph_sits_on_baseline() {
        let face = BuiltinFace::new(14.0);
        let g = face.glyph('I');
        assert_eq!((g.width, g.height, g.top), (8, 8, -7));
        assert!(g.coverage.iter().any(|&c| c == 255));
        assert!(face.glyph(' ').coverage.iter().all(|&c| c == 0));
    }

    #[test]
    fn uncovered_characters_draw_a_box() {
        let face = BuiltinFace::new(14.0);
        let g = face.glyph('侵');
        let lit = g.coverage.iter().filter(|&&c| c == 255).count();
        // 6×7 outline
        assert_eq!(lit, 6 * 2 + 5 * 2);
    }

    #[test]
    fn builtin_scaling_multiplies_cells() {
        let small = BuiltinFace::new(14.0).glyph('A');
        let big = BuiltinFace::new(24.0).glyph('A');
        let lit = |g: &Glyph| g.coverage.iter().filter(|&&c| c > 0).count();
        assert_eq!(lit(&big), lit(&small) * 4);
    }

    #[test]
    fn truetype_metrics_come_from_the_font() {
        let face = mono_face(20.0);
        assert_eq!(face.family(), "DejaVuSansMono");
        let a = face.advance('A');
        assert!(a > 0);
        // monospaced
        assert_eq!(face.advance('W'), a);
        assert_eq!(face.advance('i'), a);
        assert!(face.ascent() > face.descent());
        assert!(face.descent() > 0);
        assert!(mono_face(40.0).advance('A') > a);
    }

    #[test]
    fn truetype_glyphs_sit_on_the_baseline() {
        let face = mono_face(20.0);
        let a = face.glyph('A');
        assert_eq!(a.advance, face.advance('A'));
        assert!(a.width > 0 && a.height > 0);
        assert_eq!(a.coverage.len(), a.width * a.height);
        assert!(a.coverage.iter().any(|&c| c >= 128));
        assert!(a.top < 0);
        assert!((a.top + a.height as i32).abs() <= 1);

        // descender reaches below the baseline
        let g = face.glyph('g');
        assert!(g.top + g.height as i32 > 1);
        assert!(face.glyph(' ').coverage.iter().all(|&c| c == 0));
    }

    #[test]
    fn truetype_face_loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font_kr.ttf");
        std::fs::write(&path, MONO).unwrap();
        let face = TrueTypeFace::from_file(&path, 14.0).unwrap();
        assert_eq!(face.family(), "font_kr");
        assert_eq!(face.advance('x'), mono_face(14.0).advance('x'));
    }

    #[test]
    fn bad_font_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.ttf");
        assert!(matches!(
            TrueTypeFace::from_file(&missing, 14.0),
            Err(FontError::Io { .. })
        ));

        let junk = dir.path().join("junk.ttf");
        std::fs::write(&junk, b"not a font").unwrap();
        assert!(matches!(
            TrueTypeFace::from_file(&junk, 14.0),
            Err(FontError::Parse { family, .. }) if family == "junk"
        ));
    }
}
