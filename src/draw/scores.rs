//! High-score tables, achievements and the item shop.

use super::{DrawError, DrawManager, highlight};
use crate::{
    renderer::{
        Rgba,
        palette::{GRAY, GREEN, LIGHT_GRAY, ORANGE, RED, WHITE, YELLOW},
    },
    sprite::SpriteKind,
    state::{Achievement, HighScore},
    text::{Anchor, FontRole, Label, Locale},
};

/// Shop selection codes of the three upgrades, left to right.
pub const SHOP_ITEM_CODES: [i32; 3] = [70, 71, 72];

/// One upgrade box: name, price and the icon drawn inside it with its
/// horizontal offset from the box edge.
struct ShopItem {
    name: Label,
    price: u32,
    icon: SpriteKind,
    color: Rgba,
    icon_dx: i32,
}

const SHOP_ITEMS: [ShopItem; 3] = [
    ShopItem {
        name: Label::ShopSpeed,
        price: 10,
        icon: SpriteKind::SpeedUpShape,
        color: ORANGE,
        icon_dx: 45,
    },
    ShopItem {
        name: Label::ShopHealth,
        price: 15,
        icon: SpriteKind::Life,
        color: RED,
        icon_dx: 45,
    },
    ShopItem {
        name: Label::ShopFireRate,
        price: 20,
        icon: SpriteKind::Bullet,
        color: ORANGE,
        icon_dx: 48,
    },
];

const SHOP_BOX: i32 = 100;
const SHOP_SPACING: i32 = 20;

/// Vertical pitch of the achievement list.
const ACHIEVEMENT_STEP: i32 = 40;

impl DrawManager {
    pub fn draw_high_score_menu(&mut self, locale: Locale) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        self.centered_big(locale, Label::HighScoreTitle.text(locale), h / 8, GREEN)?;
        self.centered(locale, Label::HighScoreInstructions.text(locale), h / 5, GRAY)?;
        let mode_y = h * 4 / 15;
        self.draw_text(
            locale,
            FontRole::Regular,
            Anchor::LeftColumn,
            Label::HighScoreMode1p.text(locale),
            mode_y,
            GRAY,
        )?;
        self.draw_text(
            locale,
            FontRole::Regular,
            Anchor::RightColumn,
            Label::HighScoreMode2p.text(locale),
            mode_y,
            GRAY,
        )
    }

    /// Single-player table in the left column.
    pub fn draw_high_scores_1p(&mut self, scores: &[HighScore]) -> Result<(), DrawError> {
        self.score_column(scores, Anchor::LeftColumn)
    }

    /// Two-player table in the right column.
    pub fn draw_high_scores_2p(&mut self, scores: &[HighScore]) -> Result<(), DrawError> {
        self.score_column(scores, Anchor::RightColumn)
    }

    fn score_column(&mut self, scores: &[HighScore], anchor: Anchor) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(Locale::Default, FontRole::Regular)?;
        for (i, entry) in scores.iter().enumerate() {
            let text = format!("{}        {:04}", entry.name, entry.score);
            let y = h / 4 + lh * (i as i32 + 1) * 2;
            self.draw_text(Locale::Default, FontRole::Regular, anchor, &text, y, WHITE)?;
        }
        Ok(())
    }

    /// Achievement list: yellow title, then its status ten pixels to the
    /// right of it.
    pub fn draw_achievements(&mut self, achievements: &[Achievement]) -> Result<(), DrawError> {
        self.screen()?;
        let (x, mut y) = (20, 50);
        let face = (Locale::Default, FontRole::Regular);
        for achievement in achievements {
            let title = achievement.title();
            self.draw_text(face.0, face.1, Anchor::At(x), &title, y, YELLOW)?;

            let (status, color) = if achievement.completed {
                (Label::AchievementCompleted, GREEN)
            } else {
                (Label::AchievementIncomplete, RED)
            };
            let status_x = x + self.measure(face.0, face.1, &title)? + 10;
            self.draw_text(
                face.0,
                face.1,
                Anchor::At(status_x),
                status.text(Locale::Default),
                y,
                color,
            )?;
            y += ACHIEVEMENT_STEP;
        }
        Ok(())
    }

    /// Three upgrade boxes with their icons, names and prices, plus the
    /// shop's headings. `selected_item` is one of [`SHOP_ITEM_CODES`].
    pub fn draw_item_shop_menu(
        &mut self,
        locale: Locale,
        selected_item: i32,
        credits: u32,
    ) -> Result<(), DrawError> {
        let s = self.screen()?;
        let (w, h) = (s.width, s.height);
        let start_x = w / 10;

        for (k, item) in SHOP_ITEMS.iter().enumerate() {
            let box_x = start_x + k as i32 * (SHOP_BOX + SHOP_SPACING);
            self.draw_entity(item.icon, item.color, box_x + item.icon_dx, h / 2 - 5)?;
            self.stroke_rect(
                box_x,
                h / 2 - 50,
                SHOP_BOX,
                SHOP_BOX,
                highlight(selected_item == SHOP_ITEM_CODES[k], GREEN, LIGHT_GRAY),
            )?;

            let price = format!("{}{}", Label::ShopPrice.text(locale), item.price);
            for (text, y) in [(item.name.text(locale), h / 2 + 70), (price.as_str(), h / 2 + 90)] {
                let tw = self.measure(locale, FontRole::Regular, text)?;
                let x = box_x + (SHOP_BOX - tw) / 2;
                self.draw_text(locale, FontRole::Regular, Anchor::At(x), text, y, GRAY)?;
            }
        }

        self.centered_big(locale, Label::ShopTitle.text(locale), h / 10, GREEN)?;
        self.centered(locale, Label::ShopSubtitle.text(locale), h / 6, GRAY)?;
        self.centered(locale, Label::ShopBuyHint.text(locale), h / 4, GRAY)?;
        self.centered(locale, Label::ShopOwnedHint.text(locale), h / 5, GRAY)?;
        self.centered(locale, Label::ShopExitHint.text(locale), h, GRAY)?;
        self.centered(
            locale,
            &format!("{} {credits}", Label::ShopCredits.text(locale)),
            h / 3,
            GRAY,
        )
    }
}
