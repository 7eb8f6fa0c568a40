//! Plain values the game hands to the draw façade each frame.
//!
//! Nothing here knows about pixels; screens read these and decide layout.

use crate::renderer::{Rgba, palette};
use crate::sprite::SpriteKind;

/// Kind of a collected power-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Bomb,
    Invincible,
    SpeedUp,
    SubPlane,
}

impl ItemCategory {
    /// Inventory icon and the color it is drawn in.
    pub fn icon(self) -> (SpriteKind, Rgba) {
        match self {
            ItemCategory::Bomb => (SpriteKind::BombShape, palette::RED),
            ItemCategory::Invincible => (SpriteKind::InvincibleShape, palette::YELLOW),
            ItemCategory::SpeedUp => (SpriteKind::SpeedUpShape, palette::ORANGE),
            ItemCategory::SubPlane => (SpriteKind::AuxiliaryShape, palette::GREEN),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    pub category: ItemCategory,
}

impl InventoryItem {
    pub fn new(category: ItemCategory) -> Self {
        Self { category }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
}

impl HighScore {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// The eight bindable actions, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Left,
    Right,
    Attack,
    Burst1,
    Burst2,
    Reload,
    Booster,
    Item,
}

impl KeyAction {
    pub const ALL: [KeyAction; 8] = [
        KeyAction::Left,
        KeyAction::Right,
        KeyAction::Attack,
        KeyAction::Burst1,
        KeyAction::Burst2,
        KeyAction::Reload,
        KeyAction::Booster,
        KeyAction::Item,
    ];

    /// Name on the settings screen.
    pub fn label(self) -> &'static str {
        match self {
            KeyAction::Left => "LEFT",
            KeyAction::Right => "RIGHT",
            KeyAction::Attack => "ATTACK",
            KeyAction::Burst1 => "BURST 1",
            KeyAction::Burst2 => "BURST 2",
            KeyAction::Reload => "RELOAD",
            KeyAction::Booster => "BOOSTER",
            KeyAction::Item => "ITEM",
        }
    }

    /// Name on the in-game manual.
    pub fn manual_name(self) -> &'static str {
        match self {
            KeyAction::Left => "left",
            KeyAction::Right => "right",
            KeyAction::Attack => "attack",
            KeyAction::Burst1 => "burst1",
            KeyAction::Burst2 => "burst2",
            KeyAction::Reload => "reload",
            KeyAction::Booster => "booster",
            KeyAction::Item => "item",
        }
    }
}

/// Key names for both players: entries `0..8` are player 1, `8..16` player 2,
/// each in [`KeyAction::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyTable {
    keys: [String; KeyTable::LEN],
}

impl KeyTable {
    pub const LEN: usize = 16;
    pub const PER_PLAYER: usize = 8;

    pub fn new(keys: [String; Self::LEN]) -> Self {
        Self { keys }
    }

    pub fn get(&self, index: usize) -> &str {
        self.keys.get(index).map_or("", String::as_str)
    }

    /// Key bound to `action` for `player` (0 or 1).
    pub fn key(&self, player: usize, action: KeyAction) -> &str {
        let slot = KeyAction::ALL.iter().position(|&a| a == action).unwrap_or(0);
        self.get(player * Self::PER_PLAYER + slot)
    }

    pub fn set(&mut self, index: usize, key: impl Into<String>) {
        if let Some(slot) = self.keys.get_mut(index) {
            *slot = key.into();
        }
    }

    /// The eight entries of `player` (0 or 1).
    pub fn player(&self, player: usize) -> &[String] {
        let start = (player * Self::PER_PLAYER).min(Self::LEN);
        let end = (start + Self::PER_PLAYER).min(Self::LEN);
        &self.keys[start..end]
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new(
            [
                "A", "D", "SPACE", "Q", "E", "R", "SHIFT", "F", //
                "LEFT", "RIGHT", "ENTER", "K", "L", "P", "CTRL", "O",
            ]
            .map(String::from),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    /// Identifier as stored, words joined by `_`.
    pub name: String,
    pub completed: bool,
}

impl Achievement {
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
        }
    }

    /// Name with underscores shown as spaces.
    pub fn title(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// End-of-game numbers for a single player.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResultsSummary {
    pub score: u32,
    pub lives: u32,
    pub ships_destroyed: u32,
    /// Hit ratio in `0.0..=1.0`.
    pub accuracy: f32,
    pub new_record: bool,
}

/// End-of-game numbers for a two-player game.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TwoPlayerResults {
    pub score: u32,
    pub lives_1p: u32,
    pub lives_2p: u32,
    pub ships_destroyed: u32,
    pub accuracy_1p: f32,
    pub accuracy_2p: f32,
    pub new_record: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_table_splits_by_player() {
        let keys = KeyTable::default();
        assert_eq!(keys.player(0).len(), 8);
        assert_eq!(keys.key(0, KeyAction::Attack), "SPACE");
        assert_eq!(keys.key(1, KeyAction::Left), "LEFT");
        assert_eq!(keys.get(99), "");
    }

    #[test]
    fn achievement_title_uses_spaces() {
        assert_eq!(Achievement::new("FIRST_BLOOD", true).title(), "FIRST BLOOD");
    }

    #[test]
    fn item_icons_are_distinct() {
        let cats = [
            ItemCategory::Bomb,
            ItemCategory::Invincible,
            ItemCategory::SpeedUp,
            ItemCategory::SubPlane,
        ];
        for (i, a) in cats.iter().enumerate() {
            for b in &cats[i + 1..] {
                assert_ne!(a.icon().0, b.icon().0);
            }
        }
    }
}
