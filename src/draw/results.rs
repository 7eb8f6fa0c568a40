//! End-of-game summaries and three-letter name entry.

use super::{DrawError, DrawManager, highlight};
use crate::{
    renderer::palette::{GREEN, WHITE},
    state::{ResultsSummary, TwoPlayerResults},
    text::{
        Anchor, FontRole, Label, Locale,
        strings::{percent_text, score_text},
    },
};

impl DrawManager {
    /// Single-player summary. The block starts at `H/4` after a new record
    /// (to leave room for name entry) and at `H/2` otherwise.
    pub fn draw_results(&mut self, locale: Locale, results: &ResultsSummary) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(locale, FontRole::Regular)?;
        let top = h / if results.new_record { 4 } else { 2 };

        let rows = [
            (format!("{} {}", Label::ResultScore.text(locale), score_text(results.score)), 0),
            (format!("{} {}", Label::ResultBonusCoins.text(locale), results.score / 10), 3),
            (format!("{} {}", Label::ResultLives.text(locale), results.lives), 4),
            (format!("{} {}", Label::ResultEnemies.text(locale), results.ships_destroyed), 5),
            (
                format!("{} {}", Label::ResultAccuracy.text(locale), percent_text(results.accuracy)),
                6,
            ),
        ];
        for (text, k) in rows {
            self.centered(locale, &text, top + lh * k, WHITE)?;
        }
        Ok(())
    }

    /// Two-player summary. The coin line sits at the bottom of the
    /// play-field and shows `score % 10`.
    pub fn draw_results_2p(&mut self, locale: Locale, results: &TwoPlayerResults) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(locale, FontRole::Regular)?;
        let top = h / if results.new_record { 4 } else { 3 };

        self.centered(
            locale,
            &format!("{} {}", Label::ResultScore.text(locale), score_text(results.score)),
            top,
            WHITE,
        )?;
        self.centered(
            locale,
            &format!("{} {:04}", Label::ResultBonusCoins.text(locale), results.score % 10),
            h,
            WHITE,
        )?;

        let rows = [
            (format!("{} {}", Label::ResultLives1p.text(locale), results.lives_1p), 2),
            (format!("{} {}", Label::ResultLives2p.text(locale), results.lives_2p), 4),
            (format!("{} {}", Label::ResultEnemies.text(locale), results.ships_destroyed), 6),
            (
                format!("{} {}", Label::ResultAccuracy1p.text(locale), percent_text(results.accuracy_1p)),
                8,
            ),
            (
                format!("{} {}", Label::ResultAccuracy2p.text(locale), percent_text(results.accuracy_2p)),
                10,
            ),
        ];
        for (text, k) in rows {
            self.centered(locale, &text, top + lh * k, WHITE)?;
        }
        Ok(())
    }

    pub fn draw_name_input(
        &mut self,
        locale: Locale,
        name: [char; 3],
        selected: usize,
    ) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(locale, FontRole::Regular)?;
        self.centered(locale, Label::NewRecord.text(locale), h * 11 / 60, GREEN)?;
        self.centered(locale, Label::IntroduceName.text(locale), h / 4 + lh * 12, WHITE)?;

        let default_lh = self.line_height(Locale::Default, FontRole::Regular)?;
        self.name_letters(name, selected, h / 4 + default_lh * 14)
    }

    pub fn draw_username_input(
        &mut self,
        locale: Locale,
        name: [char; 3],
        selected: usize,
    ) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(locale, FontRole::Regular)?;
        self.centered(locale, Label::Username.text(locale), h / 4 + lh * 3, WHITE)?;

        let default_lh = self.line_height(Locale::Default, FontRole::Regular)?;
        self.name_letters(name, selected, h / 4 + default_lh * 6)
    }

    /// The three letters of a name, each drawn separately so the selected
    /// one can be highlighted. Spacing is derived from the default face's
    /// per-character widths.
    fn name_letters(&mut self, name: [char; 3], selected: usize, y: i32) -> Result<(), DrawError> {
        let w = self.screen()?.width;
        let mut letters = Vec::with_capacity(name.len());
        for ch in name {
            let s = ch.to_string();
            let width = self.measure(Locale::Default, FontRole::Regular, &s)?;
            letters.push((s, width));
        }
        let space = self.measure(Locale::Default, FontRole::Regular, " ")?;

        let total: i32 = letters.iter().map(|(_, width)| width).sum::<i32>() + space;
        let mut x = w / 2 - total / 2;
        for i in 0..letters.len() {
            x += letters[i].1 / 2;
            if i > 0 {
                x += (letters[i - 1].1 + space) / 2;
            }
            self.draw_text(
                Locale::Default,
                FontRole::Regular,
                Anchor::At(x),
                &letters[i].0,
                y,
                highlight(i == selected, GREEN, WHITE),
            )?;
        }
        Ok(())
    }
}
