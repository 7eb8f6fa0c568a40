//! Status line above the play-field and the item/ammo band below it.
//!
//! The HUD always uses the default locale's regular face: it shows digits
//! and a fixed `BUL:` prefix only.

use super::{DrawError, DrawManager};
use crate::{
    renderer::{Rgba, palette},
    sprite::SpriteKind,
    state::InventoryItem,
    text::{
        Anchor, FontRole, Locale,
        strings::{ammo_text, score_text},
    },
};

/// Baseline of the status line.
const STATUS_Y: i32 = 25;
/// Top edge of life icons.
const LIFE_ICON_Y: i32 = 13;
const LIFE_STRIDE: i32 = 30;
const ITEM_STRIDE: i32 = 35;

impl DrawManager {
    fn hud_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DrawError> {
        self.draw_text(
            Locale::Default,
            FontRole::Regular,
            Anchor::At(x),
            text,
            y,
            palette::WHITE,
        )
    }

    pub fn draw_score(&mut self, score: u32) -> Result<(), DrawError> {
        let w = self.screen()?.width;
        self.hud_text(&score_text(score), w - 60, STATUS_Y)
    }

    pub fn draw_high_score(&mut self, high_score: u32) -> Result<(), DrawError> {
        let w = self.screen()?.width;
        self.hud_text(&score_text(high_score), w - 120, STATUS_Y)
    }

    /// Player 1 lives: the count, then one green life icon per life.
    pub fn draw_lives(&mut self, lives: u32) -> Result<(), DrawError> {
        self.lives_row(lives, 20, 40, palette::GREEN)
    }

    /// Player 2 lives, in red.
    pub fn draw_lives2(&mut self, lives: u32) -> Result<(), DrawError> {
        self.lives_row(lives, 160, 180, palette::RED)
    }

    fn lives_row(&mut self, lives: u32, text_x: i32, icon_x: i32, color: Rgba) -> Result<(), DrawError> {
        self.hud_text(&lives.to_string(), text_x, STATUS_Y)?;
        for i in 0..lives as i32 {
            self.draw_entity(SpriteKind::Life, color, icon_x + LIFE_STRIDE * i, LIFE_ICON_Y)?;
        }
        Ok(())
    }

    /// Player 1 inventory: the first `count` items as icons plus the count.
    pub fn draw_items(&mut self, items: &[InventoryItem], count: usize) -> Result<(), DrawError> {
        self.items_row(items, count, 205, 100)
    }

    pub fn draw_items2(&mut self, items: &[InventoryItem], count: usize) -> Result<(), DrawError> {
        self.items_row(items, count, 415, 310)
    }

    fn items_row(
        &mut self,
        items: &[InventoryItem],
        count: usize,
        text_x: i32,
        icon_x: i32,
    ) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        self.hud_text(&count.to_string(), text_x, h + 25)?;
        for (i, item) in items.iter().take(count).enumerate() {
            let (kind, color) = item.category.icon();
            self.draw_entity(kind, color, icon_x + ITEM_STRIDE * i as i32, h + 15)?;
        }
        Ok(())
    }

    /// `BUL: {10 - fired}/{magazine}` for player 1.
    pub fn draw_ammo(&mut self, magazine: i32, fired: i32) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        self.hud_text(&ammo_text(magazine, fired), 10, h + 25)
    }

    pub fn draw_ammo2(&mut self, magazine: i32, fired: i32) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        self.hud_text(&ammo_text(magazine, fired), 224, h + 25)
    }

    /// Two-pixel rule across the full width with its top row at `y`.
    pub fn draw_horizontal_line(&mut self, y: i32, color: Rgba) -> Result<(), DrawError> {
        let w = self.screen()?.width;
        self.draw_line(0, y, w, y, color)?;
        self.draw_line(0, y + 1, w, y + 1, color)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{open_manager, text_record};
    use super::super::DrawRecord;
    use super::*;
    use crate::state::ItemCategory;

    fn sprites(dm: &DrawManager) -> Vec<(SpriteKind, i32, i32, Rgba)> {
        dm.records()
            .iter()
            .filter_map(|r| match *r {
                DrawRecord::Sprite {
                    kind, x, y, color, ..
                } => Some((kind, x, y, color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn scores_are_padded_and_right_aligned() {
        let mut dm = open_manager();
        dm.draw_score(1).unwrap();
        dm.draw_high_score(42).unwrap();
        assert_eq!(text_record(&dm, "0001"), (388, 25, palette::WHITE));
        assert_eq!(text_record(&dm, "0042"), (328, 25, palette::WHITE));
    }

    #[test]
    fn ammo_string_and_anchor() {
        let mut dm = open_manager();
        dm.draw_ammo(5, 0).unwrap();
        assert_eq!(text_record(&dm, "BUL: 10/5"), (10, 545, palette::WHITE));
        dm.draw_ammo2(3, 4).unwrap();
        assert_eq!(text_record(&dm, "BUL: 6/3"), (224, 545, palette::WHITE));
    }

    #[test]
    fn lives_draw_one_icon_per_life() {
        let mut dm = open_manager();
        dm.draw_lives(3).unwrap();
        dm.draw_lives2(2).unwrap();
        assert_eq!(text_record(&dm, "3").0, 20);
        assert_eq!(text_record(&dm, "2").0, 160);
        assert_eq!(
            sprites(&dm),
            vec![
                (SpriteKind::Life, 40, 13, palette::GREEN),
                (SpriteKind::Life, 70, 13, palette::GREEN),
                (SpriteKind::Life, 100, 13, palette::GREEN),
                (SpriteKind::Life, 180, 13, palette::RED),
                (SpriteKind::Life, 210, 13, palette::RED),
            ]
        );
    }

    #[test]
    fn items_map_categories_to_icons() {
        let mut dm = open_manager();
        let items = [
            InventoryItem::new(ItemCategory::Bomb),
            InventoryItem::new(ItemCategory::SubPlane),
            InventoryItem::new(ItemCategory::SpeedUp),
        ];
        dm.draw_items(&items, 2).unwrap();
        assert_eq!(text_record(&dm, "2"), (205, 545, palette::WHITE));
        assert_eq!(
            sprites(&dm),
            vec![
                (SpriteKind::BombShape, 100, 535, palette::RED),
                (SpriteKind::AuxiliaryShape, 135, 535, palette::GREEN),
            ]
        );
    }

    #[test]
    fn item_count_beyond_inventory_is_clamped() {
        let mut dm = open_manager();
        let items = [InventoryItem::new(ItemCategory::Invincible)];
        dm.draw_items2(&items, 4).unwrap();
        assert_eq!(
            sprites(&dm),
            vec![(SpriteKind::InvincibleShape, 310, 535, palette::YELLOW)]
        );
    }

    #[test]
    fn horizontal_line_is_two_pixels_thick() {
        let mut dm = open_manager();
        dm.draw_horizontal_line(40, palette::GREEN).unwrap();
        let fb = dm.surface();
        for x in [0, 200, 447] {
            assert_eq!(fb.pixel(x, 40), Some(palette::GREEN));
            assert_eq!(fb.pixel(x, 41), Some(palette::GREEN));
            assert_eq!(fb.pixel(x, 42), Some(palette::BLACK));
        }
    }
}
