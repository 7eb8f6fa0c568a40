//! Sprite identifiers and bitmaps.
//!
//! A sprite is a rectangular grid of on/off cells. Color is never part of the
//! bitmap: callers pass it at draw time.

mod sheet;
mod store;

use std::fmt;

pub use sheet::{SheetError, SpriteSheet};
pub use store::{SpriteError, SpriteStore};

/// Number of selectable ship skins.
pub const SKIN_COUNT: usize = 6;

/// Every distinct bitmap shape the engine can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpriteKind {
    /// Player 1 ship.
    Ship,
    /// Player 2 ship.
    Ship2,
    ShipDestroyed,
    Bullet,
    EnemyBullet,
    BiggerBullet,
    BiggerEnemyBullet,
    /// First enemy form, two animation phases.
    EnemyShipA1,
    EnemyShipA2,
    EnemyShipB1,
    EnemyShipB2,
    EnemyShipC1,
    EnemyShipC2,
    /// Bonus ship crossing the top of the screen.
    EnemyShipSpecial,
    Explosion,
    Item,
    Life,
    AuxiliaryShips,
    BombShape,
    InvincibleShape,
    SpeedUpShape,
    AuxiliaryShape,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 22] = [
        SpriteKind::Ship,
        SpriteKind::Ship2,
        SpriteKind::ShipDestroyed,
        SpriteKind::Bullet,
        SpriteKind::EnemyBullet,
        SpriteKind::BiggerBullet,
        SpriteKind::BiggerEnemyBullet,
        SpriteKind::EnemyShipA1,
        SpriteKind::EnemyShipA2,
        SpriteKind::EnemyShipB1,
        SpriteKind::EnemyShipB2,
        SpriteKind::EnemyShipC1,
        SpriteKind::EnemyShipC2,
        SpriteKind::EnemyShipSpecial,
        SpriteKind::Explosion,
        SpriteKind::Item,
        SpriteKind::Life,
        SpriteKind::AuxiliaryShips,
        SpriteKind::BombShape,
        SpriteKind::InvincibleShape,
        SpriteKind::SpeedUpShape,
        SpriteKind::AuxiliaryShape,
    ];

    /// Name used by sprite sheets.
    pub fn name(self) -> &'static str {
        match self {
            SpriteKind::Ship => "Ship",
            SpriteKind::Ship2 => "Ship2",
            SpriteKind::ShipDestroyed => "ShipDestroyed",
            SpriteKind::Bullet => "Bullet",
            SpriteKind::EnemyBullet => "EnemyBullet",
            SpriteKind::BiggerBullet => "BiggerBullet",
            SpriteKind::BiggerEnemyBullet => "BiggerEnemyBullet",
            SpriteKind::EnemyShipA1 => "EnemyShipA1",
            SpriteKind::EnemyShipA2 => "EnemyShipA2",
            SpriteKind::EnemyShipB1 => "EnemyShipB1",
            SpriteKind::EnemyShipB2 => "EnemyShipB2",
            SpriteKind::EnemyShipC1 => "EnemyShipC1",
            SpriteKind::EnemyShipC2 => "EnemyShipC2",
            SpriteKind::EnemyShipSpecial => "EnemyShipSpecial",
            SpriteKind::Explosion => "Explosion",
            SpriteKind::Item => "Item",
            SpriteKind::Life => "Life",
            SpriteKind::AuxiliaryShips => "AuxiliaryShips",
            SpriteKind::BombShape => "BombShape",
            SpriteKind::InvincibleShape => "InvincibleShape",
            SpriteKind::SpeedUpShape => "SpeedUpShape",
            SpriteKind::AuxiliaryShape => "AuxiliaryShape",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Cell dimensions the standard store registers this kind with.
    pub fn default_footprint(self) -> Footprint {
        use SpriteKind::*;
        match self {
            Ship | Ship2 | ShipDestroyed => Footprint::new(13, 8),
            Bullet | EnemyBullet => Footprint::new(3, 5),
            BiggerBullet | BiggerEnemyBullet => Footprint::new(5, 7),
            EnemyShipA1 | EnemyShipA2 | EnemyShipB1 | EnemyShipB2 | EnemyShipC1 | EnemyShipC2 => {
                Footprint::new(12, 8)
            }
            EnemyShipSpecial => Footprint::new(16, 7),
            Explosion => Footprint::new(13, 7),
            Item => Footprint::new(3, 3),
            Life => Footprint::new(7, 7),
            AuxiliaryShips => Footprint::new(12, 8),
            BombShape => Footprint::new(4, 6),
            InvincibleShape => Footprint::new(5, 5),
            SpeedUpShape | AuxiliaryShape => Footprint::new(5, 4),
        }
    }

    /// How many interchangeable bitmaps (skins) this kind has.
    pub fn variant_count(self) -> usize {
        match self {
            SpriteKind::Ship | SpriteKind::Ship2 => SKIN_COUNT,
            _ => 1,
        }
    }
}

impl fmt::Display for SpriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width × height in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub width: usize,
    pub height: usize,
}

impl Footprint {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Boolean cell grid for one sprite. `(i, j)` is column `i`, row `j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteBitmap {
    footprint: Footprint,
    cells: Vec<bool>,
}

impl SpriteBitmap {
    /// All cells off.
    pub fn empty(footprint: Footprint) -> Self {
        Self {
            footprint,
            cells: vec![false; footprint.width * footprint.height],
        }
    }

    /// Build from row-major cells; `None` if the length does not match.
    pub fn from_cells(footprint: Footprint, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == footprint.width * footprint.height).then_some(Self { footprint, cells })
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.footprint.width && j < self.footprint.height && self.cells[j * self.footprint.width + i]
    }

    /// `(i, j)` of every lit cell, column by column.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let Footprint { width, height } = self.footprint;
        (0..width).flat_map(move |i| (0..height).filter(move |&j| self.get(i, j)).map(move |j| (i, j)))
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
