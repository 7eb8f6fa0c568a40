//! Locale-aware text: font faces, surface-bound metrics, horizontal anchors
//! and the label table.

pub mod face;
pub mod layout;
pub mod metrics;
pub mod strings;

use std::fmt;

pub use face::{BuiltinFace, FontError, Glyph, GlyphSource, TrueTypeFace};
pub use layout::Anchor;
pub use metrics::{FontMetrics, FontSet, LocaleMetrics, MetricsError, TextMetricsProvider};
pub use strings::Label;

/// Display language. Selects both the face pair and the label text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English.
    #[default]
    Default,
    Korean,
    Chinese,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Default, Locale::Korean, Locale::Chinese];

    /// Position in [`Locale::ALL`]; also the column of the label table.
    pub fn index(self) -> usize {
        match self {
            Locale::Default => 0,
            Locale::Korean => 1,
            Locale::Chinese => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Next locale in menu order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Point size of this locale's face for `role`.
    pub fn font_size(self, role: FontRole) -> f32 {
        match (self, role) {
            (Locale::Default, FontRole::Regular) => 14.0,
            (Locale::Default, FontRole::Big) => 24.0,
            (_, FontRole::Regular) => 16.0,
            (_, FontRole::Big) => 28.0,
        }
    }

    /// Short code used on the command line and in logs.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Default => "en",
            Locale::Korean => "ko",
            Locale::Chinese => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which of a locale's two faces to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    Regular,
    Big,
}

impl FontRole {
    pub const ALL: [FontRole; 2] = [FontRole::Regular, FontRole::Big];

    pub fn index(self) -> usize {
        match self {
            FontRole::Regular => 0,
            FontRole::Big => 1,
        }
    }
}
