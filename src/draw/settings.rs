//! Settings list, its detail panel and the in-game manual.

use super::{DrawError, DrawManager, highlight};
use crate::{
    renderer::palette::{CYAN, GRAY, GREEN, WHITE},
    state::{KeyAction, KeyTable},
    text::{Anchor, FontRole, Label, Locale},
};

/// Settings rows: label, option code and line offset from `H/4`.
const SETTING_ROWS: [(Label, i32, i32); 4] = [
    (Label::SettingVolume, 0, 2),
    (Label::SettingBgm, 1, 4),
    (Label::SettingKeys1p, 2, 6),
    (Label::SettingKeys2p, 3, 8),
];

const KEY_LABEL_COLUMN: Anchor = Anchor::Stepped { num: 6, den: 10 };
const KEY_VALUE_COLUMN: Anchor = Anchor::Stepped { num: 8, den: 10 };

impl DrawManager {
    /// Settings list in the left fifth, separated from the detail panel by
    /// a two-pixel green rule. A star marks the row being edited.
    pub fn draw_setting(&mut self, locale: Locale, option: i32, selected: bool) -> Result<(), DrawError> {
        let s = self.screen()?;
        let (w, h) = (s.width, s.height);
        let lh = self.line_height(locale, FontRole::Regular)?;

        self.centered_big(locale, Label::SettingTitle.text(locale), h / 8, GREEN)?;
        self.centered(locale, Label::SettingHelpMove.text(locale), h / 5 - lh / 2, GRAY)?;
        self.centered(locale, Label::SettingHelpBack.text(locale), h / 5 + lh / 2, GRAY)?;

        for (label, code, k) in SETTING_ROWS {
            let text = label.text(locale);
            let y = h / 4 + lh * k;
            if option == code && selected {
                let star_x = w / 5 - self.measure(locale, FontRole::Regular, text)? / 2 - 16;
                self.draw_text(Locale::Default, FontRole::Regular, Anchor::At(star_x), "*", y, GREEN)?;
            }
            self.draw_text(
                locale,
                FontRole::Regular,
                Anchor::ONE_FIFTH,
                text,
                y,
                highlight(option == code, GREEN, WHITE),
            )?;
        }

        let rule_x = w / 5 * 2;
        self.draw_line(rule_x - 1, h / 4, rule_x - 1, h / 10 * 9, GREEN)?;
        self.draw_line(rule_x, h / 4, rule_x, h / 10 * 9, GREEN)
    }

    /// Right-hand panel for the settings row `option`: a volume bar and the
    /// BGM toggle for rows 0 and 1, a player's key bindings for rows 2 and
    /// 3. While a binding is being edited (`selected`), the action
    /// `key_num` is drawn green.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_setting_detail(
        &mut self,
        locale: Locale,
        option: i32,
        selected: bool,
        volume: i32,
        bgm_on: bool,
        key_num: usize,
        keys: &KeyTable,
    ) -> Result<(), DrawError> {
        let s = self.screen()?;
        let (w, h) = (s.width, s.height);
        // rows line up with the list drawn by `draw_setting` in the default face
        let lh = self.line_height(Locale::Default, FontRole::Regular)?;
        let regular = FontRole::Regular;

        match option {
            0 | 1 => {
                let color = highlight(option == 0 && selected, GREEN, WHITE);
                let bar_y = h / 4 + lh / 8 * 12;
                self.stroke_rect(w / 2, bar_y, w / 4, lh, color)?;
                self.fill_rect(w / 2, bar_y, w / 4 * volume / 100, lh, color)?;
                let number_x = w / 4 * 3 + self.measure(Locale::Default, regular, "A")? * 2;
                self.draw_text(
                    locale,
                    regular,
                    Anchor::At(number_x),
                    &volume.to_string(),
                    h / 4 + lh * 2,
                    color,
                )?;

                let bgm = if bgm_on { "ON" } else { "OFF" };
                let color = highlight(option == 1 && selected, GREEN, WHITE);
                self.draw_text(locale, regular, Anchor::SEVEN_TENTHS, bgm, h / 4 + lh * 4, color)
            }
            2 | 3 => {
                let player = (option - 2) as usize;
                for (i, action) in KeyAction::ALL.into_iter().enumerate() {
                    let y = h / 4 + lh * (2 * i as i32 + 1);
                    let label_color = highlight(selected && i == key_num, GREEN, WHITE);
                    self.draw_text(locale, regular, KEY_LABEL_COLUMN, action.label(), y, label_color)?;
                    let key = keys.key(player, action);
                    self.draw_text(locale, regular, KEY_VALUE_COLUMN, key, y, WHITE)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Both players' bindings side by side, each name and key centered on
    /// its own column.
    pub fn draw_manual_menu(&mut self, keys: &KeyTable) -> Result<(), DrawError> {
        let s = self.screen()?;
        let (w, h) = (s.width, s.height);
        let face = (Locale::Default, FontRole::Regular);

        self.centered(face.0, "Play manual", h / 2 - 105, CYAN)?;
        self.draw_text(face.0, face.1, Anchor::At(w / 2 - 140), "Player1", h / 2 - 60, CYAN)?;
        self.draw_text(face.0, face.1, Anchor::At(w / 2 + 65), "Player2", h / 2 - 60, CYAN)?;

        let columns = [w / 2 - 150, w / 2 - 50, w / 2 + 50, w / 2 + 150];
        for (i, action) in KeyAction::ALL.into_iter().enumerate() {
            let y = h / 2 - 30 + 20 * i as i32;
            let cells = [
                action.manual_name(),
                keys.get(i),
                action.manual_name(),
                keys.get(i + KeyTable::PER_PLAYER),
            ];
            for (center, text) in columns.into_iter().zip(cells) {
                let x = center - self.measure(face.0, face.1, text)? / 2;
                self.draw_text(face.0, face.1, Anchor::At(x), text, y, WHITE)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{open_manager, text_record, texts};
    use super::super::DrawRecord;
    use super::*;

    fn green_texts(dm: &DrawManager) -> Vec<String> {
        texts(dm)
            .into_iter()
            .filter(|(.., c)| *c == GREEN)
            .map(|(t, ..)| t)
            .collect()
    }

    #[test]
    fn star_marks_only_the_edited_row() {
        let mut dm = open_manager();
        dm.draw_setting(Locale::Default, 2, true).unwrap();
        assert_eq!(green_texts(&dm), vec!["Setting", "*", "1P Keys"]);
        // "1P Keys" is 56 px: 89 - 28 - 16
        assert_eq!(text_record(&dm, "*"), (45, 190, GREEN));
        assert_eq!(text_record(&dm, "Volume").2, WHITE);

        let mut dm = open_manager();
        dm.draw_setting(Locale::Default, 2, false).unwrap();
        assert!(texts(&dm).iter().all(|(t, ..)| t != "*"));
        assert_eq!(text_record(&dm, "1P Keys").2, GREEN);
    }

    #[test]
    fn setting_rule_is_two_pixels_wide() {
        let mut dm = open_manager();
        dm.draw_setting(Locale::Korean, 0, false).unwrap();
        let lines: Vec<(i32, i32, i32)> = dm
            .records()
            .iter()
            .filter_map(|r| match *r {
                DrawRecord::Line { x0, y0, y1, .. } => Some((x0, y0, y1)),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![(177, 130, 468), (178, 130, 468)]);
        assert_eq!(text_record(&dm, "음량").2, GREEN);
    }

    #[test]
    fn volume_bar_scales_with_volume() {
        let mut dm = open_manager();
        dm.draw_setting_detail(Locale::Default, 0, true, 50, true, 0, &KeyTable::default())
            .unwrap();
        assert_eq!(
            &dm.records()[..2],
            &[
                DrawRecord::StrokeRect {
                    x: 224,
                    y: 142,
                    w: 112,
                    h: 10,
                    color: GREEN
                },
                DrawRecord::FillRect {
                    x: 224,
                    y: 142,
                    w: 56,
                    h: 10,
                    color: GREEN
                },
            ]
        );
        assert_eq!(text_record(&dm, "50"), (352, 150, GREEN));
        assert_eq!(text_record(&dm, "ON"), (300, 170, WHITE));
    }

    #[test]
    fn bgm_toggle_highlights_when_edited() {
        let mut dm = open_manager();
        dm.draw_setting_detail(Locale::Default, 1, true, 0, false, 0, &KeyTable::default())
            .unwrap();
        assert_eq!(text_record(&dm, "OFF").2, GREEN);
        assert_eq!(text_record(&dm, "0").2, WHITE);
    }

    #[test]
    fn awaited_binding_is_drawn_once_in_green() {
        let mut dm = open_manager();
        dm.draw_setting_detail(Locale::Default, 3, true, 0, false, 2, &KeyTable::default())
            .unwrap();
        assert_eq!(green_texts(&dm), vec!["ATTACK"]);
        assert_eq!(texts(&dm).iter().filter(|(t, ..)| t == "ATTACK").count(), 1);
        // player 2 column
        assert_eq!(text_record(&dm, "ENTER"), (352 - 20, 180, WHITE));

        let mut dm = open_manager();
        dm.draw_setting_detail(Locale::Default, 2, false, 0, false, 2, &KeyTable::default())
            .unwrap();
        assert!(green_texts(&dm).is_empty());
        assert_eq!(text_record(&dm, "SPACE").1, 180);
    }

    #[test]
    fn manual_lists_both_players() {
        let mut dm = open_manager();
        let mut keys = KeyTable::default();
        keys.set(8, "J");
        dm.draw_manual_menu(&keys).unwrap();
        assert_eq!(text_record(&dm, "Play manual"), (224 - 44, 155, CYAN));
        assert_eq!(text_record(&dm, "Player1"), (84, 200, CYAN));
        assert_eq!(text_record(&dm, "A"), (170, 230, WHITE));
        assert_eq!(text_record(&dm, "J"), (370, 230, WHITE));
        let left: Vec<i32> = texts(&dm)
            .into_iter()
            .filter(|(t, ..)| t == "left")
            .map(|(_, x, ..)| x)
            .collect();
        assert_eq!(left, vec![58, 258]);
        // 4 cells × 8 rows + 3 headings
        assert_eq!(texts(&dm).len(), 35);
    }
}
