// ──────────────────────────────────────────────────────────────────────────
// assets.rs
//
//  *   sprites.txt                    ──╮
//  *   font.ttf / font_kr / font_cn     │   --->  SpriteStore + FontSet
//                                       ╯
//
//  Startup loading. A missing or broken file never stops the game: it is
//  logged and the embedded sheet / bitmap faces stand in for it.
// ──────────────────────────────────────────────────────────────────────────

use std::{path::Path, sync::Arc};

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    config::Config,
    sprite::{SheetError, SpriteSheet, SpriteStore},
    text::{FontError, FontRole, FontSet, Locale, TrueTypeFace},
};

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error(transparent)]
    Font(#[from] FontError),
}

/*====================================================================*/
/*                       Public API                                   */
/*====================================================================*/

/// Everything the draw façade needs from disk.
#[derive(Debug)]
pub struct Assets {
    pub sprites: SpriteStore,
    pub fonts: FontSet,
    /// Failures that were logged and replaced by embedded fallbacks.
    pub degraded: Vec<LoadError>,
}

/// Load the sprite sheet and every locale's fonts named by `cfg`.
pub fn load_assets(cfg: &Config) -> Assets {
    info!(dir = %cfg.asset_dir.display(), "started loading resources");
    let mut degraded = Vec::new();

    let sheet = match load_sheet(&cfg.sprite_sheet_path()) {
        Ok(sheet) => sheet,
        Err(e) => {
            warn!(error = %e, "sprite sheet unavailable, using embedded sheet");
            degraded.push(e);
            embedded_sheet()
        }
    };
    let sprites = SpriteStore::standard(sheet);
    info!("finished loading the sprites");

    let mut fonts = FontSet::builtin();
    for locale in Locale::ALL {
        let path = cfg.font_path(locale);
        match load_locale_faces(&path, locale, &mut fonts) {
            Ok(()) => info!(%locale, path = %path.display(), "font loaded"),
            Err(e) => {
                warn!(%locale, error = %e, "font unavailable, using bitmap face");
                degraded.push(e);
            }
        }
    }
    info!(degraded = degraded.len(), "finished loading the fonts");

    Assets {
        sprites,
        fonts,
        degraded,
    }
}

pub fn load_sheet(path: &Path) -> Result<SpriteSheet, LoadError> {
    Ok(SpriteSheet::from_file(path)?)
}

/// Install TTF faces for both roles of `locale`. `fonts` is left untouched
/// unless both faces load.
pub fn load_locale_faces(path: &Path, locale: Locale, fonts: &mut FontSet) -> Result<(), LoadError> {
    let regular = TrueTypeFace::from_file(path, locale.font_size(FontRole::Regular))?;
    let big = TrueTypeFace::from_file(path, locale.font_size(FontRole::Big))?;
    fonts.set(locale, FontRole::Regular, Arc::new(regular));
    fonts.set(locale, FontRole::Big, Arc::new(big));
    Ok(())
}

/// The sheet compiled into the binary. It is checked by the test suite, so
/// failure here only leaves every sprite blank.
fn embedded_sheet() -> SpriteSheet {
    SpriteSheet::builtin().unwrap_or_else(|e| {
        warn!(error = %e, "embedded sprite sheet rejected");
        SpriteSheet::default()
    })
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::SpriteKind;

    #[test]
    fn missing_files_degrade_to_embedded_assets() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config {
            asset_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let assets = load_assets(&cfg);

        // sheet + three fonts
        assert_eq!(assets.degraded.len(), 4);
        assert!(matches!(assets.degraded[0], LoadError::Sheet(SheetError::Io { .. })));
        assert!(assets.sprites.bitmap(SpriteKind::Ship).unwrap().lit_count() > 0);
        assert_eq!(assets.fonts.face(Locale::Korean, FontRole::Big).family(), "font8x8");
    }

    #[test]
    fn sheet_on_disk_wins_over_embedded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sprites.txt"), "[Item]\n#.#\n.#.\n#.#\n").unwrap();
        let cfg = Config {
            asset_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let assets = load_assets(&cfg);

        assert_eq!(assets.sprites.bitmap(SpriteKind::Item).unwrap().lit_count(), 5);
        // kinds the file lacks stay blank rather than falling back
        assert_eq!(assets.sprites.bitmap(SpriteKind::Life).unwrap().lit_count(), 0);
        assert_eq!(assets.degraded.len(), 3);
    }

    #[test]
    fn broken_font_keeps_bitmap_face() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font_cn.ttf");
        std::fs::write(&path, b"\0\0\0\0").unwrap();
        let mut fonts = FontSet::builtin();
        let err = load_locale_faces(&path, Locale::Chinese, &mut fonts).unwrap_err();
        assert!(matches!(err, LoadError::Font(FontError::Parse { .. })));
        assert_eq!(fonts.face(Locale::Chinese, FontRole::Regular).family(), "font8x8");
    }
}
