use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use super::{Footprint, SpriteBitmap, SpriteKind, SpriteSheet};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpriteError {
    #[error("sprite {0} was never registered")]
    Unregistered(SpriteKind),

    #[error("sprite {0} is already registered")]
    AlreadyRegistered(SpriteKind),

    #[error("sprite sheet has no bitmap for {kind}:{variant}")]
    MissingAsset { kind: SpriteKind, variant: usize },

    #[error("{kind}:{variant} is {found} in the sheet, registered as {expected}")]
    FootprintMismatch {
        kind: SpriteKind,
        variant: usize,
        expected: Footprint,
        found: Footprint,
    },

    #[error("{kind} has {count} variant(s), {index} requested")]
    InvalidVariant {
        kind: SpriteKind,
        index: usize,
        count: usize,
    },
}

/// What the store knows about one registered kind.
#[derive(Clone, Debug)]
struct Slot {
    footprint: Footprint,
    bitmap: SpriteBitmap,
    variant: usize,
}

/// Registered sprites and their current bitmaps.
///
/// Registration fixes a kind's footprint. Loading and variant swaps replace
/// the bitmap only when the sheet holds one with that same footprint, so a
/// failed request never leaves a slot half-updated.
#[derive(Clone, Debug)]
pub struct SpriteStore {
    sheet: SpriteSheet,
    slots: BTreeMap<SpriteKind, Slot>,
}

impl SpriteStore {
    /// Empty store reading bitmaps from `sheet`.
    pub fn new(sheet: SpriteSheet) -> Self {
        Self {
            sheet,
            slots: BTreeMap::new(),
        }
    }

    /// Every kind registered with its default footprint, variant 0 loaded.
    pub fn standard(sheet: SpriteSheet) -> Self {
        let mut store = Self::new(sheet);
        for kind in SpriteKind::ALL {
            store.insert_slot(kind, kind.default_footprint());
        }
        store.load_all();
        store
    }

    pub fn register(&mut self, kind: SpriteKind, footprint: Footprint) -> Result<(), SpriteError> {
        if self.slots.contains_key(&kind) {
            return Err(SpriteError::AlreadyRegistered(kind));
        }
        self.insert_slot(kind, footprint);
        Ok(())
    }

    /// Blank slot at variant 0, replacing whatever `kind` held.
    fn insert_slot(&mut self, kind: SpriteKind, footprint: Footprint) {
        self.slots.insert(
            kind,
            Slot {
                footprint,
                bitmap: SpriteBitmap::empty(footprint),
                variant: 0,
            },
        );
    }

    pub fn is_registered(&self, kind: SpriteKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Fill `kind`'s slot from the sheet using its current variant.
    pub fn load(&mut self, kind: SpriteKind) -> Result<(), SpriteError> {
        let variant = self.slot(kind)?.variant;
        let bitmap = self.sheet_bitmap(kind, variant)?.clone();
        if let Some(slot) = self.slots.get_mut(&kind) {
            slot.bitmap = bitmap;
        }
        Ok(())
    }

    /// Load every registered kind. Failures are logged and skipped; the
    /// number of kinds that loaded is returned.
    pub fn load_all(&mut self) -> usize {
        let kinds: Vec<_> = self.slots.keys().copied().collect();
        let mut loaded = 0;
        for kind in kinds {
            match self.load(kind) {
                Ok(()) => loaded += 1,
                Err(e) => warn!(%kind, error = %e, "sprite not loaded"),
            }
        }
        debug!(loaded, registered = self.slots.len(), "sprites loaded");
        loaded
    }

    /// Swap `kind` to skin `index`.
    pub fn set_variant(&mut self, kind: SpriteKind, index: usize) -> Result<(), SpriteError> {
        self.slot(kind)?;
        let count = kind.variant_count();
        if index >= count {
            return Err(SpriteError::InvalidVariant { kind, index, count });
        }
        let bitmap = self.sheet_bitmap(kind, index)?.clone();
        if let Some(slot) = self.slots.get_mut(&kind) {
            slot.bitmap = bitmap;
            slot.variant = index;
        }
        Ok(())
    }

    pub fn variant(&self, kind: SpriteKind) -> Result<usize, SpriteError> {
        Ok(self.slot(kind)?.variant)
    }

    pub fn footprint(&self, kind: SpriteKind) -> Result<Footprint, SpriteError> {
        Ok(self.slot(kind)?.footprint)
    }

    /// Bitmap currently installed for `kind`.
    pub fn bitmap(&self, kind: SpriteKind) -> Result<&SpriteBitmap, SpriteError> {
        Ok(&self.slot(kind)?.bitmap)
    }

    /// Bitmap of a specific variant, straight from the sheet. Does not touch
    /// the installed bitmap.
    pub fn variant_bitmap(
        &self,
        kind: SpriteKind,
        index: usize,
    ) -> Result<&SpriteBitmap, SpriteError> {
        self.slot(kind)?;
        let count = kind.variant_count();
        if index >= count {
            return Err(SpriteError::InvalidVariant { kind, index, count });
        }
        self.sheet_bitmap(kind, index)
    }

    fn slot(&self, kind: SpriteKind) -> Result<&Slot, SpriteError> {
        self.slots.get(&kind).ok_or(SpriteError::Unregistered(kind))
    }

    fn sheet_bitmap(&self, kind: SpriteKind, variant: usize) -> Result<&SpriteBitmap, SpriteError> {
        let expected = self.slot(kind)?.footprint;
        let bitmap = self
            .sheet
            .get(kind, variant)
            .ok_or(SpriteError::MissingAsset { kind, variant })?;
        if bitmap.footprint() != expected {
            return Err(SpriteError::FootprintMismatch {
                kind,
                variant,
                expected,
                found: bitmap.footprint(),
            });
        }
        Ok(bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> SpriteStore {
        SpriteStore::standard(SpriteSheet::builtin().unwrap())
    }

    #[test]
    fn standard_store_loads_every_kind() {
        let store = standard();
        for kind in SpriteKind::ALL {
            let bmp = store.bitmap(kind).unwrap();
            assert_eq!(bmp.footprint(), kind.default_footprint());
            assert!(bmp.lit_count() > 0, "{kind} stayed empty");
            assert_eq!(store.variant(kind), Ok(0));
        }
    }

    #[test]
    fn register_twice_rejected() {
        let mut store = SpriteStore::new(SpriteSheet::default());
        store.register(SpriteKind::Bullet, Footprint::new(3, 5)).unwrap();
        assert_eq!(
            store.register(SpriteKind::Bullet, Footprint::new(1, 1)),
            Err(SpriteError::AlreadyRegistered(SpriteKind::Bullet))
        );
        assert_eq!(store.footprint(SpriteKind::Bullet), Ok(Footprint::new(3, 5)));
    }

    #[test]
    fn standard_store_registers_default_footprints_even_when_sheet_is_empty() {
        let mut store = SpriteStore::standard(SpriteSheet::default());
        for kind in SpriteKind::ALL {
            assert!(store.is_registered(kind));
            assert_eq!(store.footprint(kind), Ok(kind.default_footprint()));
            assert_eq!(store.bitmap(kind).unwrap().lit_count(), 0);
        }
        assert_eq!(
            store.register(SpriteKind::Ship, Footprint::new(1, 1)),
            Err(SpriteError::AlreadyRegistered(SpriteKind::Ship))
        );
    }

    #[test]
    fn unregistered_lookup_fails() {
        let store = SpriteStore::new(SpriteSheet::default());
        assert_eq!(
            store.bitmap(SpriteKind::Life).unwrap_err(),
            SpriteError::Unregistered(SpriteKind::Life)
        );
    }

    #[test]
    fn load_failures_keep_previous_bitmap() {
        let sheet = SpriteSheet::parse("[Item]\n##\n##\n").unwrap();
        let mut store = SpriteStore::new(sheet);
        store.register(SpriteKind::Item, Footprint::new(3, 3)).unwrap();
        store.register(SpriteKind::Life, Footprint::new(7, 7)).unwrap();

        assert!(matches!(
            store.load(SpriteKind::Item),
            Err(SpriteError::FootprintMismatch { .. })
        ));
        assert_eq!(
            store.load(SpriteKind::Life),
            Err(SpriteError::MissingAsset {
                kind: SpriteKind::Life,
                variant: 0
            })
        );
        assert_eq!(store.bitmap(SpriteKind::Item).unwrap().lit_count(), 0);
        assert_eq!(store.load_all(), 0);
    }

    #[test]
    fn set_variant_swaps_bitmap_and_keeps_footprint() {
        let mut store = standard();
        let original = store.bitmap(SpriteKind::Ship).unwrap().clone();

        store.set_variant(SpriteKind::Ship, 3).unwrap();
        let swapped = store.bitmap(SpriteKind::Ship).unwrap();
        assert_ne!(swapped, &original);
        assert_eq!(swapped.footprint(), Footprint::new(13, 8));
        assert_eq!(store.variant(SpriteKind::Ship), Ok(3));
        // the other player's ship is independent
        assert_eq!(store.variant(SpriteKind::Ship2), Ok(0));
    }

    #[test]
    fn invalid_variant_leaves_store_untouched() {
        let mut store = standard();
        store.set_variant(SpriteKind::Ship2, 2).unwrap();
        let before = store.bitmap(SpriteKind::Ship2).unwrap().clone();

        assert_eq!(
            store.set_variant(SpriteKind::Ship2, 6),
            Err(SpriteError::InvalidVariant {
                kind: SpriteKind::Ship2,
                index: 6,
                count: 6
            })
        );
        assert!(matches!(
            store.set_variant(SpriteKind::Bullet, 1),
            Err(SpriteError::InvalidVariant { count: 1, .. })
        ));
        assert_eq!(store.bitmap(SpriteKind::Ship2).unwrap(), &before);
        assert_eq!(store.variant(SpriteKind::Ship2), Ok(2));
    }

    #[test]
    fn variant_bitmap_reads_without_installing() {
        let store = standard();
        let v5 = store.variant_bitmap(SpriteKind::Ship, 5).unwrap();
        assert_ne!(v5, store.bitmap(SpriteKind::Ship).unwrap());
        assert_eq!(store.variant(SpriteKind::Ship), Ok(0));
    }
}
