//! Window geometry, frame rate and where assets live.

use std::path::PathBuf;

use crate::draw::Screen;
use crate::renderer::Insets;
use crate::text::Locale;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Play-field width in pixels.
    pub width: usize,
    /// Play-field height in pixels, HUD band excluded.
    pub height: usize,
    /// Height of the band under the play-field holding ammo and items.
    pub hud_height: usize,
    pub fps: usize,
    /// Window decoration around the content area.
    pub insets: Insets,
    pub asset_dir: PathBuf,
    /// Sprite sheet file inside `asset_dir`.
    pub sprite_sheet: String,
    /// One font file per locale, inside `asset_dir`. Regular and big faces
    /// are rasterized from the same file.
    pub fonts: [String; 3],
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 448,
            height: 520,
            hud_height: 40,
            fps: 60,
            insets: Insets::default(),
            asset_dir: PathBuf::from("assets"),
            sprite_sheet: "sprites.txt".into(),
            fonts: [
                "font.ttf".into(),
                "font_kr.ttf".into(),
                "font_cn.ttf".into(),
            ],
            locale: Locale::Default,
        }
    }
}

impl Config {
    pub fn screen(&self) -> Screen {
        Screen::new(self.width as i32, self.height as i32)
    }

    pub fn sprite_sheet_path(&self) -> PathBuf {
        self.asset_dir.join(&self.sprite_sheet)
    }

    pub fn font_path(&self, locale: Locale) -> PathBuf {
        self.asset_dir.join(&self.fonts[locale.index()])
    }

    /// Full surface size: play-field plus HUD band.
    pub fn surface_size(&self) -> (usize, usize) {
        (self.width, self.height + self.hud_height)
    }
}
