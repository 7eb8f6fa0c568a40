//! The draw façade.
//!
//! [`DrawManager`] owns the sprite store, the text metrics and the off-screen
//! surface. A frame is bracketed by [`DrawManager::init_drawing`] and
//! [`DrawManager::complete_drawing`]; every draw call in between paints the
//! surface in call order and appends a [`DrawRecord`]. Calls outside the
//! bracket are refused with [`DrawError::NoOpenFrame`].
//!
//! Screen operations live in the submodules, grouped by where they appear:
//!
//! * [`hud`] – score, lives, items and ammo around the play-field.
//! * [`menu`] – language, title, main, pause, mode, skin and level menus
//!   plus the countdown and clear banners.
//! * [`results`] – end-of-game summaries and name entry.
//! * [`scores`] – high-score lists, achievements and the item shop.
//! * [`settings`] – settings, key bindings and the manual.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    assets::Assets,
    renderer::{FrameBuffer, PresentError, Presenter, Rgba, palette},
    sprite::{SheetError, SpriteError, SpriteKind, SpriteSheet, SpriteStore},
    text::{Anchor, FontRole, FontSet, GlyphSource, Locale, MetricsError, TextMetricsProvider},
};

pub mod hud;
pub mod menu;
pub mod results;
pub mod scores;
pub mod settings;

/// Glyph coverage at or above this is painted; text is not anti-aliased.
const COVERAGE_THRESHOLD: u8 = 128;

/// Each sprite cell is drawn as a `CELL × CELL` block.
pub const CELL: i32 = 2;

/// Play-field size of the screen being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub width: i32,
    /// Play-field height; the HUD band lies below it.
    pub height: i32,
}

impl Screen {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("draw call issued with no open frame")]
    NoOpenFrame,

    #[error("init_drawing called while a frame is already open")]
    FrameAlreadyOpen,

    #[error("skin changes are only allowed between frames")]
    VariantSwapInFrame,

    #[error(transparent)]
    Sprite(#[from] SpriteError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error(transparent)]
    Present(#[from] PresentError),
}

/// One primitive issued during the current frame.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawRecord {
    /// Baseline-anchored string; `x` is the left edge after anchoring.
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Rgba,
        locale: Locale,
        role: FontRole,
    },
    Sprite {
        kind: SpriteKind,
        variant: usize,
        x: i32,
        y: i32,
        color: Rgba,
    },
    ClearSprite {
        kind: SpriteKind,
        x: i32,
        y: i32,
    },
    StrokeRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgba,
    },
    FillRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgba,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgba,
    },
}

/// Accent if `selected`, neutral otherwise.
pub(crate) fn highlight(selected: bool, accent: Rgba, neutral: Rgba) -> Rgba {
    if selected { accent } else { neutral }
}

pub struct DrawManager {
    sprites: SpriteStore,
    text: TextMetricsProvider,
    surface: FrameBuffer,
    hud_height: usize,
    /* Some(screen) between init_drawing and complete_drawing */
    frame: Option<Screen>,
    records: Vec<DrawRecord>,
}

impl DrawManager {
    pub fn new(sprites: SpriteStore, fonts: FontSet, hud_height: usize) -> Self {
        Self {
            sprites,
            text: TextMetricsProvider::new(fonts),
            surface: FrameBuffer::default(),
            hud_height,
            frame: None,
            records: Vec::new(),
        }
    }

    pub fn from_assets(assets: Assets, hud_height: usize) -> Self {
        Self::new(assets.sprites, assets.fonts, hud_height)
    }

    /// Embedded sprite sheet and bitmap faces; no file access.
    pub fn builtin(hud_height: usize) -> Result<Self, SheetError> {
        let sprites = SpriteStore::standard(SpriteSheet::builtin()?);
        Ok(Self::new(sprites, FontSet::builtin(), hud_height))
    }

    pub fn sprites(&self) -> &SpriteStore {
        &self.sprites
    }

    pub fn text(&self) -> &TextMetricsProvider {
        &self.text
    }

    pub fn surface(&self) -> &FrameBuffer {
        &self.surface
    }

    /// Primitives issued since the last `init_drawing`.
    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn is_frame_open(&self) -> bool {
        self.frame.is_some()
    }

    /*──────────────────────────── frame bracket ───────────────────────────*/

    /// Open a frame: clear the surface to the background, then rebind the
    /// metrics of every locale to it.
    pub fn init_drawing(&mut self, screen: Screen) -> Result<(), DrawError> {
        if self.frame.is_some() {
            return Err(DrawError::FrameAlreadyOpen);
        }
        self.surface.open(
            screen.width.max(0) as usize,
            screen.height.max(0) as usize,
            self.hud_height,
            palette::BACKGROUND,
        );
        self.text.bind_all(&self.surface);
        self.records.clear();
        self.frame = Some(screen);
        debug!(
            width = screen.width,
            height = screen.height,
            generation = self.surface.generation(),
            "frame opened"
        );
        Ok(())
    }

    /// Hand the finished surface to `presenter` and close the frame. The
    /// frame is closed even if presenting fails.
    pub fn complete_drawing<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Result<(), DrawError> {
        self.frame.take().ok_or(DrawError::NoOpenFrame)?;
        presenter.present(&self.surface)?;
        Ok(())
    }

    /// Screen of the open frame.
    pub fn screen(&self) -> Result<Screen, DrawError> {
        self.frame.ok_or(DrawError::NoOpenFrame)
    }

    /*────────────────────────────── sprites ───────────────────────────────*/

    /// Paint every lit cell of `kind`'s current bitmap as a 2×2 block.
    pub fn draw_entity(&mut self, kind: SpriteKind, color: Rgba, x: i32, y: i32) -> Result<(), DrawError> {
        self.screen()?;
        let bitmap = self.sprites.bitmap(kind)?;
        for (i, j) in bitmap.lit_cells() {
            // a unit outline covers exactly the 2×2 block
            self.surface
                .stroke_rect(x + i as i32 * CELL, y + j as i32 * CELL, 1, 1, color);
        }
        let variant = self.sprites.variant(kind)?;
        self.records.push(DrawRecord::Sprite {
            kind,
            variant,
            x,
            y,
            color,
        });
        Ok(())
    }

    /// Erase what `draw_entity(kind, _, x, y)` painted.
    pub fn clear_entity(&mut self, kind: SpriteKind, x: i32, y: i32) -> Result<(), DrawError> {
        self.screen()?;
        let bitmap = self.sprites.bitmap(kind)?;
        for (i, j) in bitmap.lit_cells() {
            self.surface.fill_rect(
                x + i as i32 * CELL,
                y + j as i32 * CELL,
                CELL,
                CELL,
                palette::BACKGROUND,
            );
        }
        self.records.push(DrawRecord::ClearSprite { kind, x, y });
        Ok(())
    }

    /// Like `draw_entity` but with a specific skin. The store is not changed.
    pub fn draw_sprite_variant(
        &mut self,
        kind: SpriteKind,
        variant: usize,
        color: Rgba,
        x: i32,
        y: i32,
    ) -> Result<(), DrawError> {
        self.screen()?;
        let bitmap = self.sprites.variant_bitmap(kind, variant)?;
        for (i, j) in bitmap.lit_cells() {
            self.surface
                .stroke_rect(x + i as i32 * CELL, y + j as i32 * CELL, 1, 1, color);
        }
        self.records.push(DrawRecord::Sprite {
            kind,
            variant,
            x,
            y,
            color,
        });
        Ok(())
    }

    /// Install skin `index` for `kind`. Out-of-range indices are logged and
    /// leave the current skin in place.
    pub fn select_skin(&mut self, kind: SpriteKind, index: usize) -> Result<(), DrawError> {
        if self.frame.is_some() {
            return Err(DrawError::VariantSwapInFrame);
        }
        match self.sprites.set_variant(kind, index) {
            Ok(()) => {
                info!(%kind, index, "skin selected");
                Ok(())
            }
            Err(e @ SpriteError::InvalidVariant { .. }) => {
                warn!(error = %e, "skin request ignored");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /*──────────────────────────── primitives ──────────────────────────────*/

    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) -> Result<(), DrawError> {
        self.screen()?;
        self.surface.stroke_rect(x, y, w, h, color);
        self.records.push(DrawRecord::StrokeRect { x, y, w, h, color });
        Ok(())
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) -> Result<(), DrawError> {
        self.screen()?;
        self.surface.fill_rect(x, y, w, h, color);
        self.records.push(DrawRecord::FillRect { x, y, w, h, color });
        Ok(())
    }

    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) -> Result<(), DrawError> {
        self.screen()?;
        self.surface.draw_line(x0, y0, x1, y1, color);
        self.records.push(DrawRecord::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
        Ok(())
    }

    /*─────────────────────────────── text ─────────────────────────────────*/

    /// Pixel width of `text` in `locale`'s `role` face.
    pub fn measure(&self, locale: Locale, role: FontRole, text: &str) -> Result<i32, DrawError> {
        self.screen()?;
        Ok(self.text.measure(locale, role, text, &self.surface)?)
    }

    pub fn line_height(&self, locale: Locale, role: FontRole) -> Result<i32, DrawError> {
        self.screen()?;
        Ok(self.text.line_height(locale, role, &self.surface)?)
    }

    /// Draw `text` with its baseline at `y`, horizontally placed by `anchor`.
    pub fn draw_text(
        &mut self,
        locale: Locale,
        role: FontRole,
        anchor: Anchor,
        text: &str,
        y: i32,
        color: Rgba,
    ) -> Result<(), DrawError> {
        let screen = self.screen()?;
        let metrics = self.text.metrics_for(locale, role, &self.surface)?;
        let width = metrics.string_width(text);
        let face: Arc<dyn GlyphSource> = Arc::clone(metrics.face());

        let x = anchor.x(screen.width, width);
        let mut pen = x;
        for ch in text.chars() {
            let g = face.glyph(ch);
            if g.width > 0 && g.height > 0 {
                self.surface.blit_mask(
                    pen + g.left,
                    y + g.top,
                    g.width,
                    g.height,
                    &g.coverage,
                    COVERAGE_THRESHOLD,
                    color,
                );
            }
            pen += g.advance;
        }

        self.records.push(DrawRecord::Text {
            text: text.to_owned(),
            x,
            y,
            color,
            locale,
            role,
        });
        Ok(())
    }

    /*─────────────────────────── debug overlays ───────────────────────────*/

    /// One-pixel green outline around the play-field.
    pub fn draw_borders(&mut self) -> Result<(), DrawError> {
        let s = self.screen()?;
        self.stroke_rect(0, 0, s.width - 1, s.height - 1, palette::GREEN)
    }

    /// Dark-gray grid with a 2-pixel pitch, matching the sprite cell size.
    pub fn draw_grid(&mut self) -> Result<(), DrawError> {
        let s = self.screen()?;
        // the far edge never gets its own line
        for y in (0..s.height - 1).step_by(CELL as usize) {
            self.draw_line(0, y, s.width - 1, y, palette::DARK_GRAY)?;
        }
        for x in (0..s.width - 1).step_by(CELL as usize) {
            self.draw_line(x, 0, x, s.height - 1, palette::DARK_GRAY)?;
        }
        Ok(())
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::renderer::{Insets, MemoryPresenter};

    pub const SCREEN: Screen = Screen::new(448, 520);
    pub const HUD: usize = 40;

    /// Manager with an open 448×520 frame.
    pub fn open_manager() -> DrawManager {
        let mut dm = DrawManager::builtin(HUD).unwrap();
        dm.init_drawing(SCREEN).unwrap();
        dm
    }

    /// Every text record as `(text, x, y, color)`.
    pub fn texts(dm: &DrawManager) -> Vec<(String, i32, i32, Rgba)> {
        dm.records()
            .iter()
            .filter_map(|r| match r {
                DrawRecord::Text {
                    text, x, y, color, ..
                } => Some((text.clone(), *x, *y, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn text_record(dm: &DrawManager, wanted: &str) -> (i32, i32, Rgba) {
        texts(dm)
            .into_iter()
            .find(|(t, ..)| t == wanted)
            .map(|(_, x, y, c)| (x, y, c))
            .unwrap_or_else(|| panic!("no text record {wanted:?} in {:?}", texts(dm)))
    }

    #[test]
    fn draw_calls_need_an_open_frame() {
        let mut dm = DrawManager::builtin(HUD).unwrap();
        assert!(matches!(
            dm.draw_entity(SpriteKind::Ship, palette::GREEN, 0, 0),
            Err(DrawError::NoOpenFrame)
        ));
        assert!(matches!(
            dm.draw_text(Locale::Default, FontRole::Regular, Anchor::Center, "x", 10, palette::WHITE),
            Err(DrawError::NoOpenFrame)
        ));
        assert!(matches!(dm.draw_score(1), Err(DrawError::NoOpenFrame)));

        let mut window = MemoryPresenter::new(448, 560, Insets::default());
        assert!(matches!(
            dm.complete_drawing(&mut window),
            Err(DrawError::NoOpenFrame)
        ));
        assert!(dm.records().is_empty());
    }

    #[test]
    fn frames_do_not_nest() {
        let mut dm = open_manager();
        assert!(matches!(dm.init_drawing(SCREEN), Err(DrawError::FrameAlreadyOpen)));

        let mut window = MemoryPresenter::new(448, 560, Insets::default());
        dm.complete_drawing(&mut window).unwrap();
        assert!(!dm.is_frame_open());
        assert!(matches!(dm.draw_score(5), Err(DrawError::NoOpenFrame)));
        dm.init_drawing(SCREEN).unwrap();
    }

    #[test]
    fn surface_includes_hud_band() {
        let dm = open_manager();
        assert_eq!(dm.surface().width(), 448);
        assert_eq!(dm.surface().height(), 560);
        assert_eq!(dm.surface().play_height(), 520);
    }

    #[test]
    fn entity_cells_are_two_by_two_blocks() {
        let mut dm = open_manager();
        dm.draw_entity(SpriteKind::Item, palette::RED, 10, 20).unwrap();
        // 3×3 solid item → 6×6 pixels
        let lit = dm
            .surface()
            .pixels()
            .iter()
            .filter(|&&p| p == palette::RED)
            .count();
        assert_eq!(lit, 36);
        assert_eq!(dm.surface().pixel(10, 20), Some(palette::RED));
        assert_eq!(dm.surface().pixel(15, 25), Some(palette::RED));
        assert_eq!(dm.surface().pixel(16, 26), Some(palette::BLACK));
    }

    #[test]
    fn draw_then_clear_restores_background() {
        let mut dm = open_manager();
        for kind in [SpriteKind::Ship, SpriteKind::EnemyShipSpecial, SpriteKind::Explosion] {
            dm.draw_entity(kind, palette::GREEN, 101, 57).unwrap();
            dm.clear_entity(kind, 101, 57).unwrap();
            assert!(
                dm.surface().pixels().iter().all(|&p| p == palette::BACKGROUND),
                "{kind} left pixels behind"
            );
        }
    }

    #[test]
    fn drawing_is_idempotent() {
        let mut dm = open_manager();
        dm.draw_entity(SpriteKind::EnemyShipA1, palette::WHITE, 30, 30).unwrap();
        let once = dm.surface().pixels().to_vec();
        dm.draw_entity(SpriteKind::EnemyShipA1, palette::WHITE, 30, 30).unwrap();
        assert_eq!(dm.surface().pixels(), &once[..]);
    }

    #[test]
    fn skin_swaps_only_between_frames() {
        let mut dm = open_manager();
        assert!(matches!(
            dm.select_skin(SpriteKind::Ship, 2),
            Err(DrawError::VariantSwapInFrame)
        ));
        let mut window = MemoryPresenter::new(448, 560, Insets::default());
        dm.complete_drawing(&mut window).unwrap();

        dm.select_skin(SpriteKind::Ship, 2).unwrap();
        assert_eq!(dm.sprites().variant(SpriteKind::Ship), Ok(2));

        // out of range: logged, skin unchanged
        dm.select_skin(SpriteKind::Ship, 9).unwrap();
        assert_eq!(dm.sprites().variant(SpriteKind::Ship), Ok(2));
    }

    #[test]
    fn variant_draw_leaves_store_alone() {
        let mut dm = open_manager();
        dm.draw_sprite_variant(SpriteKind::Ship, 4, palette::GREEN, 0, 0).unwrap();
        assert_eq!(dm.sprites().variant(SpriteKind::Ship), Ok(0));
        assert!(matches!(
            dm.draw_sprite_variant(SpriteKind::Ship, 6, palette::GREEN, 0, 0),
            Err(DrawError::Sprite(SpriteError::InvalidVariant { .. }))
        ));
    }

    #[test]
    fn unregistered_sprite_is_an_error() {
        let mut dm = DrawManager::new(
            SpriteStore::new(SpriteSheet::default()),
            FontSet::builtin(),
            HUD,
        );
        dm.init_drawing(SCREEN).unwrap();
        assert!(matches!(
            dm.draw_entity(SpriteKind::Life, palette::RED, 0, 0),
            Err(DrawError::Sprite(SpriteError::Unregistered(SpriteKind::Life)))
        ));
    }

    #[test]
    fn text_lands_on_the_baseline() {
        let mut dm = open_manager();
        dm.draw_text(Locale::Default, FontRole::Regular, Anchor::At(10), "I", 30, palette::WHITE)
            .unwrap();
        let fb = dm.surface();
        let rows: Vec<i32> = (0..fb.height() as i32)
            .filter(|&y| (10..18).any(|x| fb.pixel(x, y) == Some(palette::WHITE)))
            .collect();
        // glyph rows 0..7 sit on baseline - 7 .. baseline - 1
        assert_eq!(rows.first(), Some(&23));
        assert!(rows.iter().all(|&y| y < 30));
    }

    #[test]
    fn completed_frame_reaches_window_at_insets() {
        let mut dm = open_manager();
        dm.fill_rect(0, 0, 1, 1, palette::CYAN).unwrap();
        let mut window = MemoryPresenter::new(448, 560, Insets::new(20, 4, 0, 0));
        dm.complete_drawing(&mut window).unwrap();
        assert_eq!(window.pixel(4, 20), Some(palette::CYAN));
        assert_eq!(window.pixel(3, 20), Some(palette::BACKGROUND));
        assert_eq!(window.frames(), 1);
    }

    #[test]
    fn reopening_resets_the_record_log() {
        let mut dm = open_manager();
        dm.draw_line(0, 0, 5, 0, palette::WHITE).unwrap();
        assert_eq!(dm.records().len(), 1);
        let mut window = MemoryPresenter::new(448, 560, Insets::default());
        dm.complete_drawing(&mut window).unwrap();
        dm.init_drawing(SCREEN).unwrap();
        assert!(dm.records().is_empty());
    }

    #[test]
    fn debug_overlays_stay_inside_play_field() {
        let mut dm = open_manager();
        dm.draw_borders().unwrap();
        assert_eq!(dm.surface().pixel(447, 519), Some(palette::GREEN));
        assert_eq!(dm.surface().pixel(447, 520), Some(palette::BLACK));
        dm.draw_grid().unwrap();
        assert_eq!(dm.surface().pixel(2, 2), Some(palette::DARK_GRAY));
    }

    #[test]
    fn hangul_without_a_font_draws_boxes() {
        let mut dm = open_manager();
        dm.draw_text(Locale::Korean, FontRole::Regular, Anchor::At(10), "음량", 100, palette::WHITE)
            .unwrap();
        // first box: rows 93..=99, columns 11..=16
        for (x, y) in [(11, 93), (16, 93), (11, 99), (16, 99), (11, 96)] {
            assert_eq!(dm.surface().pixel(x, y), Some(palette::WHITE), "({x}, {y})");
        }
        assert_eq!(dm.surface().pixel(13, 96), Some(palette::BACKGROUND));
        // second box one advance further
        assert_eq!(dm.surface().pixel(19, 93), Some(palette::WHITE));
        assert_eq!(dm.measure(Locale::Korean, FontRole::Regular, "음량").unwrap(), 16);
    }

    #[test]
    fn truetype_text_is_drawn_above_the_baseline() {
        let mut fonts = FontSet::builtin();
        fonts.set(Locale::Default, FontRole::Regular, Arc::new(crate::text::face::tests::mono_face(20.0)));
        let sprites = SpriteStore::standard(SpriteSheet::builtin().unwrap());
        let mut dm = DrawManager::new(sprites, fonts, HUD);
        dm.init_drawing(SCREEN).unwrap();
        dm.draw_text(Locale::Default, FontRole::Regular, Anchor::At(40), "H", 100, palette::WHITE)
            .unwrap();
        let lit: Vec<(i32, i32)> = (0..SCREEN.height)
            .flat_map(|y| (0..SCREEN.width).map(move |x| (x, y)))
            .filter(|&(x, y)| dm.surface().pixel(x, y) == Some(palette::WHITE))
            .collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&(x, y)| (40..60).contains(&x) && (80..=100).contains(&y)));
    }

    #[test]
    fn grid_skips_the_far_edge_on_odd_sizes() {
        let mut dm = DrawManager::builtin(HUD).unwrap();
        dm.init_drawing(Screen::new(7, 5)).unwrap();
        dm.draw_grid().unwrap();
        let lines: Vec<(i32, i32, i32, i32)> = dm
            .records()
            .iter()
            .filter_map(|r| match *r {
                DrawRecord::Line { x0, y0, x1, y1, .. } => Some((x0, y0, x1, y1)),
                _ => None,
            })
            .collect();
        assert_eq!(
            lines,
            vec![
                (0, 0, 6, 0),
                (0, 2, 6, 2),
                (0, 0, 0, 4),
                (2, 0, 2, 4),
                (4, 0, 4, 4),
            ]
        );
    }
}
