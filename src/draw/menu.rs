//! Menu-like screens and in-game banners.
//!
//! Vertical positions are `H*a/b ± lh*c` with `H` the play-field height and
//! `lh` the line height of the locale's regular face unless noted. Each
//! option is drawn exactly once, in the accent color when selected.

use super::{DrawError, DrawManager, highlight};
use crate::{
    renderer::{
        Rgba,
        palette::{BLACK, GRAY, GREEN, RED, WHITE, YELLOW},
    },
    sprite::{SKIN_COUNT, SpriteKind},
    text::{
        Anchor, FontRole, Label, Locale,
        strings::{clear_title, level_banner},
    },
};

/// Main menu rows: label, option code and line offset from `H/3*2`.
const MAIN_MENU: [(Label, i32, i32); 6] = [
    (Label::MenuPlay, 2, -5),
    (Label::MenuHighScores, 3, -3),
    (Label::MenuShop, 4, -1),
    (Label::MenuSetting, 5, 1),
    (Label::MenuAchievements, 6, 3),
    (Label::MenuExit, 0, 5),
];

/// Language menu rows: option code and line offset from `H/3*2`.
const LANGUAGE_MENU: [(Locale, i32); 3] = [
    (Locale::Default, -5),
    (Locale::Korean, -3),
    (Locale::Chinese, -1),
];

impl DrawManager {
    /// Regular-face text centered on the screen.
    pub(crate) fn centered(
        &mut self,
        locale: Locale,
        label: &str,
        y: i32,
        color: Rgba,
    ) -> Result<(), DrawError> {
        self.draw_text(locale, FontRole::Regular, Anchor::Center, label, y, color)
    }

    /// Big-face text centered on the screen.
    pub(crate) fn centered_big(
        &mut self,
        locale: Locale,
        label: &str,
        y: i32,
        color: Rgba,
    ) -> Result<(), DrawError> {
        self.draw_text(locale, FontRole::Big, Anchor::Center, label, y, color)
    }

    pub fn draw_lang_desc(&mut self) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(Locale::Default, FontRole::Regular)?;
        self.centered(
            Locale::Default,
            Label::LanguageHeading.text(Locale::Default),
            h / 2 - lh * 3 / 2 - lh * 2,
            GRAY,
        )
    }

    /// Every language's name in its own face; `option` is the locale index.
    pub fn draw_lang_menu(&mut self, option: usize) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        for (locale, k) in LANGUAGE_MENU {
            let lh = self.line_height(locale, FontRole::Regular)?;
            let color = highlight(option == locale.index(), GREEN, WHITE);
            self.centered(locale, Label::LanguageName.text(locale), h / 3 * 2 + lh * k, color)?;
        }
        Ok(())
    }

    pub fn draw_title(&mut self, locale: Locale) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(locale, FontRole::Regular)?;
        self.centered(
            locale,
            Label::TitleInstructions.text(locale),
            h / 2 - lh * 3 / 2 - lh * 2,
            GRAY,
        )?;
        self.centered_big(locale, Label::Title.text(locale), h / 3 - lh * 2, GREEN)
    }

    /// Main menu. `option` is the code of the selected row (play 2,
    /// high scores 3, shop 4, settings 5, achievements 6, exit 0).
    pub fn draw_menu(&mut self, locale: Locale, option: i32) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(locale, FontRole::Regular)?;
        for (label, code, k) in MAIN_MENU {
            let color = highlight(option == code, GREEN, WHITE);
            self.centered(locale, label.text(locale), h / 3 * 2 + lh * k, color)?;
        }
        Ok(())
    }

    pub fn draw_game_over(
        &mut self,
        locale: Locale,
        accepts_input: bool,
        new_record: bool,
    ) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(locale, FontRole::Regular)?;
        let big_lh = self.line_height(locale, FontRole::Big)?;
        let d = if new_record { 4 } else { 3 };

        self.centered_big(locale, Label::GameOver.text(locale), h / d - big_lh * 2, GREEN)?;
        self.centered(
            locale,
            Label::ContinueOrExit.text(locale),
            h / 2 + lh * 10,
            highlight(accepts_input, GREEN, GRAY),
        )
    }

    /// Banner over a black strip: level name while `number >= 4`, then the
    /// count, then "GO!" at zero.
    pub fn draw_countdown(
        &mut self,
        locale: Locale,
        level: u32,
        number: i32,
        bonus_life: bool,
    ) -> Result<(), DrawError> {
        let s = self.screen()?;
        let strip = s.height / 6;
        self.fill_rect(0, s.height / 2 - strip / 2, s.width, strip, BLACK)?;

        let big_lh = self.line_height(locale, FontRole::Big)?;
        let text = if number >= 4 {
            level_banner(locale, level, bonus_life)
        } else if number != 0 {
            number.to_string()
        } else {
            Label::Go.text(locale).to_owned()
        };
        self.centered_big(locale, &text, s.height / 2 + big_lh / 3, GREEN)
    }

    /// Level-clear screen. Options: continue 2, exit 1.
    pub fn draw_clear(&mut self, locale: Locale, option: i32, level: u32) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(locale, FontRole::Regular)?;
        self.centered_big(locale, &clear_title(locale, level), h / 3 + lh * 2, GREEN)?;
        self.centered(
            locale,
            Label::ClearContinue.text(locale),
            h / 4 * 3,
            highlight(option == 2, GREEN, WHITE),
        )?;
        self.centered(
            locale,
            Label::ClearExit.text(locale),
            h / 4 * 3 + lh * 2,
            highlight(option == 1, GREEN, WHITE),
        )
    }

    /// Black panel as wide as the screen and `H/6 + extra` tall.
    pub fn draw_window(&mut self, x: i32, y: i32, extra: i32) -> Result<(), DrawError> {
        let s = self.screen()?;
        self.fill_rect(x, y, s.width, s.height / 6 + extra, BLACK)
    }

    /// Pause overlay. Options: resume 0, quit 1. Accent is yellow.
    pub fn draw_pause_menu(&mut self, locale: Locale, option: i32) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        self.centered(
            locale,
            Label::PauseQuit.text(locale),
            h / 2 - 10,
            highlight(option == 1, YELLOW, WHITE),
        )?;
        self.centered(
            locale,
            Label::PauseResume.text(locale),
            h / 2 + 20,
            highlight(option == 0, YELLOW, WHITE),
        )?;
        self.centered(locale, Label::PauseHelp.text(locale), h / 2 - h / 12 - 15, YELLOW)
    }

    /// Player-count and skill-mode chooser.
    ///
    /// `game_mode` is 1 or 2. The skill-mode toggle is highlighted only once
    /// the cursor has moved to it (`next_item`).
    pub fn draw_mode_select(
        &mut self,
        locale: Locale,
        game_mode: i32,
        skill_mode_on: bool,
        next_item: bool,
    ) -> Result<(), DrawError> {
        let s = self.screen()?;
        let (w, h) = (s.width, s.height);
        let lh = self.line_height(locale, FontRole::Regular)?;

        self.centered(locale, Label::ModeInstructions.text(locale), h / 5, GRAY)?;
        self.centered_big(locale, Label::ModeTitle.text(locale), h / 8, GREEN)?;

        // both row headings share the x of the "Player" heading
        let player = Label::ModePlayer.text(locale);
        let head_x = Anchor::ONE_FIFTH.x(w, self.measure(locale, FontRole::Regular, player)?);
        let regular = FontRole::Regular;
        self.draw_text(locale, regular, Anchor::At(head_x), player, h / 8 * 3, GREEN)?;
        self.draw_text(
            locale,
            regular,
            Anchor::At(head_x),
            Label::ModeSkill.text(locale),
            h / 8 * 5,
            GREEN,
        )?;

        let left = Anchor::Stepped { num: 6, den: 10 };
        let right = Anchor::Stepped { num: 8, den: 10 };
        let players_y = h / 8 * 3 + lh * 2;
        self.draw_text(locale, regular, left, "1P", players_y, highlight(game_mode == 1, GREEN, WHITE))?;
        self.draw_text(locale, regular, right, "2P", players_y, highlight(game_mode == 2, GREEN, WHITE))?;

        let skill_y = h / 8 * 5 + lh * 2;
        let on = highlight(next_item && skill_mode_on, GREEN, WHITE);
        let off = highlight(next_item && !skill_mode_on, GREEN, WHITE);
        self.draw_text(locale, regular, left, "ON", skill_y, on)?;
        self.draw_text(locale, regular, right, "OFF", skill_y, off)
    }

    /// Ship skin picker. Skins are drawn straight from the sheet; the
    /// installed skin is not touched.
    pub fn draw_skin_selection_menu(
        &mut self,
        locale: Locale,
        skin_1p: usize,
        skin_2p: usize,
        two_player: bool,
    ) -> Result<(), DrawError> {
        let s = self.screen()?;
        let (w, h) = (s.width, s.height);
        let tag_w = self.measure(Locale::Default, FontRole::Regular, "1P")?;

        if two_player {
            self.draw_line(w / 2, h / 5, w / 2, 450, WHITE)?;
            self.skin_column(w / 4, SpriteKind::Ship, GREEN, skin_1p)?;
            self.skin_column(3 * w / 4, SpriteKind::Ship2, RED, skin_2p)?;
            self.draw_text(
                Locale::Default,
                FontRole::Big,
                Anchor::At(w / 4 - tag_w / 2 - 1),
                "1P",
                130,
                WHITE,
            )?;
            self.draw_text(
                Locale::Default,
                FontRole::Big,
                Anchor::At(3 * w / 4 - tag_w / 2 - 2),
                "2P",
                130,
                WHITE,
            )?;
        } else {
            self.skin_column(w / 2, SpriteKind::Ship, GREEN, skin_1p)?;
            self.draw_text(
                Locale::Default,
                FontRole::Big,
                Anchor::At(w / 2 - tag_w / 2 - 1),
                "1P",
                130,
                WHITE,
            )?;
        }
        self.centered_big(locale, Label::SkinTitle.text(locale), h / 8, GREEN)
    }

    /// Every skin of `kind` stacked under `center_x`, each in a box that is
    /// green for `selected`.
    fn skin_column(
        &mut self,
        center_x: i32,
        kind: SpriteKind,
        color: Rgba,
        selected: usize,
    ) -> Result<(), DrawError> {
        for i in 0..SKIN_COUNT {
            let row = 50 * i as i32;
            self.draw_sprite_variant(kind, i, color, center_x - 13, 172 + row)?;
            self.stroke_rect(
                center_x - 15,
                165 + row,
                30,
                30,
                highlight(i == selected, GREEN, WHITE),
            )?;
        }
        Ok(())
    }

    /// Level list, `selected` being an index into `levels`.
    pub fn draw_level_selection_menu(
        &mut self,
        locale: Locale,
        selected: usize,
        levels: &[u32],
    ) -> Result<(), DrawError> {
        let h = self.screen()?.height;
        let lh = self.line_height(locale, FontRole::Regular)?;
        self.centered_big(locale, Label::LevelSelectTitle.text(locale), h / 8, GREEN)?;
        self.centered(locale, Label::LevelSelectInstructions.text(locale), h / 5, GRAY)?;
        for (i, &level) in levels.iter().enumerate() {
            let y = h / 4 + lh * 2 * (i as i32 + 1);
            let color = highlight(i == selected, GREEN, WHITE);
            self.centered(locale, &level_banner(locale, level, false), y, color)?;
        }
        Ok(())
    }
}
