//! Surface-bound font metrics.
//!
//! A [`FontMetrics`] snapshot is taken for one surface generation. When the
//! frame-buffer is reopened its generation moves on and every snapshot taken
//! earlier is refused with [`MetricsError::Stale`] until `bind` runs again.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::{BuiltinFace, FontRole, GlyphSource, Locale};
use crate::renderer::FrameBuffer;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    #[error("no metrics bound for locale {0}")]
    Unbound(Locale),

    #[error("metrics for locale {locale} belong to surface {bound}, current surface is {current}")]
    Stale {
        locale: Locale,
        bound: u64,
        current: u64,
    },
}

/// Measurement view of one face on one surface.
#[derive(Clone, Debug)]
pub struct FontMetrics {
    face: Arc<dyn GlyphSource>,
    generation: u64,
}

impl FontMetrics {
    fn new(face: Arc<dyn GlyphSource>, generation: u64) -> Self {
        Self { face, generation }
    }

    pub fn face(&self) -> &Arc<dyn GlyphSource> {
        &self.face
    }

    /// Surface generation this snapshot was taken for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn char_width(&self, ch: char) -> i32 {
        self.face.advance(ch)
    }

    /// Sum of advances.
    pub fn string_width(&self, text: &str) -> i32 {
        text.chars().map(|c| self.face.advance(c)).sum()
    }

    pub fn ascent(&self) -> i32 {
        self.face.ascent()
    }

    pub fn descent(&self) -> i32 {
        self.face.descent()
    }

    pub fn leading(&self) -> i32 {
        self.face.leading()
    }

    /// Line height: ascent + descent + leading.
    pub fn height(&self) -> i32 {
        self.ascent() + self.descent() + self.leading()
    }
}

/// The regular/big pair bound for one locale.
#[derive(Clone, Debug)]
pub struct LocaleMetrics {
    pub regular: FontMetrics,
    pub big: FontMetrics,
}

impl LocaleMetrics {
    pub fn get(&self, role: FontRole) -> &FontMetrics {
        match role {
            FontRole::Regular => &self.regular,
            FontRole::Big => &self.big,
        }
    }
}

/// Faces for every (locale, role) pair.
#[derive(Clone, Debug)]
pub struct FontSet {
    faces: [[Arc<dyn GlyphSource>; 2]; 3],
}

impl FontSet {
    /// Bitmap faces at each locale's point sizes.
    pub fn builtin() -> Self {
        let pair = |locale: Locale| -> [Arc<dyn GlyphSource>; 2] {
            FontRole::ALL.map(|role| Arc::new(BuiltinFace::new(locale.font_size(role))) as _)
        };
        Self {
            faces: Locale::ALL.map(pair),
        }
    }

    pub fn set(&mut self, locale: Locale, role: FontRole, face: Arc<dyn GlyphSource>) {
        self.faces[locale.index()][role.index()] = face;
    }

    pub fn face(&self, locale: Locale, role: FontRole) -> &Arc<dyn GlyphSource> {
        &self.faces[locale.index()][role.index()]
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Hands out metrics for the surface currently being drawn.
#[derive(Clone, Debug)]
pub struct TextMetricsProvider {
    fonts: FontSet,
    bound: [Option<LocaleMetrics>; 3],
}

impl TextMetricsProvider {
    pub fn new(fonts: FontSet) -> Self {
        Self {
            fonts,
            bound: [None, None, None],
        }
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Snapshot `locale`'s faces for `surface`.
    pub fn bind(&mut self, locale: Locale, surface: &FrameBuffer) -> &LocaleMetrics {
        let generation = surface.generation();
        let snapshot = LocaleMetrics {
            regular: FontMetrics::new(
                Arc::clone(self.fonts.face(locale, FontRole::Regular)),
                generation,
            ),
            big: FontMetrics::new(Arc::clone(self.fonts.face(locale, FontRole::Big)), generation),
        };
        self.bound[locale.index()].insert(snapshot)
    }

    pub fn bind_all(&mut self, surface: &FrameBuffer) {
        for locale in Locale::ALL {
            self.bind(locale, surface);
        }
        debug!(generation = surface.generation(), "text metrics bound");
    }

    /// Metrics for `locale`/`role`, provided they were bound to `surface`.
    pub fn metrics_for(
        &self,
        locale: Locale,
        role: FontRole,
        surface: &FrameBuffer,
    ) -> Result<&FontMetrics, MetricsError> {
        let bound = self.bound[locale.index()]
            .as_ref()
            .ok_or(MetricsError::Unbound(locale))?;
        let metrics = bound.get(role);
        if metrics.generation() != surface.generation() {
            return Err(MetricsError::Stale {
                locale,
                bound: metrics.generation(),
                current: surface.generation(),
            });
        }
        Ok(metrics)
    }

    pub fn measure(
        &self,
        locale: Locale,
        role: FontRole,
        text: &str,
        surface: &FrameBuffer,
    ) -> Result<i32, MetricsError> {
        Ok(self.metrics_for(locale, role, surface)?.string_width(text))
    }

    pub fn line_height(
        &self,
        locale: Locale,
        role: FontRole,
        surface: &FrameBuffer,
    ) -> Result<i32, MetricsError> {
        Ok(self.metrics_for(locale, role, surface)?.height())
    }
}

impl Default for TextMetricsProvider {
    fn default() -> Self {
        Self::new(FontSet::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::palette::BLACK;

    fn surface() -> FrameBuffer {
        let mut fb = FrameBuffer::default();
        fb.open(64, 32, 8, BLACK);
        fb
    }

    #[test]
    fn unbound_locale_is_refused() {
        let provider = TextMetricsProvider::default();
        let fb = surface();
        assert_eq!(
            provider.measure(Locale::Korean, FontRole::Regular, "a", &fb),
            Err(MetricsError::Unbound(Locale::Korean))
        );
    }

    #[test]
    fn metrics_go_stale_when_surface_reopens() {
        let mut provider = TextMetricsProvider::default();
        let mut fb = surface();
        provider.bind_all(&fb);
        assert_eq!(provider.measure(Locale::Default, FontRole::Regular, "abc", &fb), Ok(24));

        fb.open(64, 32, 8, BLACK);
        assert!(matches!(
            provider.line_height(Locale::Default, FontRole::Big, &fb),
            Err(MetricsError::Stale { .. })
        ));

        provider.bind(Locale::Default, &fb);
        assert_eq!(provider.line_height(Locale::Default, FontRole::Big, &fb), Ok(20));
        // other locales stay stale until bound
        assert!(provider.line_height(Locale::Chinese, FontRole::Big, &fb).is_err());
    }

    #[test]
    fn line_height_adds_leading() {
        let mut provider = TextMetricsProvider::default();
        let fb = surface();
        let m = provider.bind(Locale::Korean, &fb);
        assert_eq!(m.regular.height(), m.regular.ascent() + m.regular.descent() + m.regular.leading());
        assert_eq!(m.regular.height(), 10);
        assert_eq!(m.big.string_width("한국어"), 48);
    }

    #[test]
    fn truetype_face_measures_through_provider() {
        let face = crate::text::face::tests::mono_face(14.0);
        let advance = face.advance('x');
        let height = face.ascent() + face.descent() + face.leading();
        let mut fonts = FontSet::builtin();
        fonts.set(Locale::Korean, FontRole::Regular, Arc::new(face));
        let mut provider = TextMetricsProvider::new(fonts);
        let fb = surface();
        provider.bind_all(&fb);
        assert_eq!(provider.measure(Locale::Korean, FontRole::Regular, "xyz", &fb), Ok(advance * 3));
        assert_eq!(provider.line_height(Locale::Korean, FontRole::Regular, &fb), Ok(height));
        // the big slot keeps its bitmap face
        assert_eq!(provider.line_height(Locale::Korean, FontRole::Big, &fb), Ok(20));
    }

    #[test]
    fn replacing_a_face_only_affects_its_slot() {
        let mut fonts = FontSet::builtin();
        fonts.set(Locale::Chinese, FontRole::Regular, Arc::new(BuiltinFace::new(36.0)));
        let mut provider = TextMetricsProvider::new(fonts);
        let fb = surface();
        provider.bind_all(&fb);
        assert_eq!(provider.measure(Locale::Chinese, FontRole::Regular, "x", &fb), Ok(24));
        assert_eq!(provider.measure(Locale::Korean, FontRole::Regular, "x", &fb), Ok(8));
    }
}
