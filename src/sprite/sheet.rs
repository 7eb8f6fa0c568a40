//! Keyed text sprite sheet.
//!
//! ```text
//! ; comment
//! [Ship:0, Ship2:0]
//! ......#......
//! .....###.....
//! [Bullet]
//! .#.
//! ###
//! ```
//!
//! A header names one or more `Kind[:variant]` keys; the rows under it are
//! `#`/`1` for a lit cell and `.`/`0` for an unlit one. Every row of an entry
//! has the same length, which together with the row count gives the entry's
//! footprint. Comments start with `;` so they never collide with a row of
//! lit cells.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::{Footprint, SpriteBitmap, SpriteKind};

/// Sheet compiled into the binary; used when no sheet is found on disk.
const BUILTIN: &str = include_str!("../../assets/sprites.txt");

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(?P<keys>[^\]]*)\]$").unwrap());
static KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<name>[A-Za-z][A-Za-z0-9]*)\s*(?::\s*(?P<variant>\d+))?\s*$").unwrap()
});

/// Things that can go wrong while reading a sheet.
#[derive(Error, Debug)]
pub enum SheetError {
    /// Underlying I/O failure – propagated with the offending path.
    #[error("cannot read sprite sheet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: malformed header")]
    BadHeader { line: usize },

    #[error("line {line}: unknown sprite kind `{name}`")]
    UnknownKind { line: usize, name: String },

    #[error("line {line}: {kind} has no variant {variant}")]
    UnknownVariant {
        line: usize,
        kind: SpriteKind,
        variant: usize,
    },

    #[error("line {line}: unexpected cell character {ch:?}")]
    BadCell { line: usize, ch: char },

    #[error("line {line}: row is {found} cells wide, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: entry has no rows")]
    EmptyEntry { line: usize },

    #[error("line {line}: bitmap row outside of any entry")]
    RowOutsideEntry { line: usize },

    #[error("{kind}:{variant} defined twice")]
    Duplicate { kind: SpriteKind, variant: usize },
}

/// Every bitmap (and every skin variant) found in one sheet.
#[derive(Clone, Debug, Default)]
pub struct SpriteSheet {
    entries: HashMap<(SpriteKind, usize), SpriteBitmap>,
}

/// Entry being accumulated while scanning.
struct Pending {
    line: usize,
    keys: Vec<(SpriteKind, usize)>,
    width: usize,
    rows: Vec<bool>,
    height: usize,
}

impl SpriteSheet {
    /// The sheet shipped inside the binary.
    pub fn builtin() -> Result<Self, SheetError> {
        Self::parse(BUILTIN)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, SheetError> {
        let mut sheet = SpriteSheet::default();
        let mut pending: Option<Pending> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }

            if let Some(caps) = HEADER.captures(trimmed) {
                if let Some(done) = pending.take() {
                    sheet.commit(done)?;
                }
                pending = Some(Pending {
                    line,
                    keys: parse_keys(&caps["keys"], line)?,
                    width: 0,
                    rows: Vec::new(),
                    height: 0,
                });
                continue;
            }

            let Some(entry) = pending.as_mut() else {
                return Err(SheetError::RowOutsideEntry { line });
            };
            let row = parse_row(trimmed, line)?;
            if entry.height == 0 {
                entry.width = row.len();
            } else if row.len() != entry.width {
                return Err(SheetError::RaggedRow {
                    line,
                    expected: entry.width,
                    found: row.len(),
                });
            }
            entry.rows.extend(row);
            entry.height += 1;
        }

        if let Some(done) = pending.take() {
            sheet.commit(done)?;
        }
        Ok(sheet)
    }

    fn commit(&mut self, entry: Pending) -> Result<(), SheetError> {
        if entry.height == 0 || entry.width == 0 {
            return Err(SheetError::EmptyEntry { line: entry.line });
        }
        let footprint = Footprint::new(entry.width, entry.height);
        let bitmap = SpriteBitmap::from_cells(footprint, entry.rows)
            .ok_or(SheetError::EmptyEntry { line: entry.line })?;
        for (kind, variant) in entry.keys {
            if self.entries.contains_key(&(kind, variant)) {
                return Err(SheetError::Duplicate { kind, variant });
            }
            self.entries.insert((kind, variant), bitmap.clone());
        }
        Ok(())
    }

    /// Bitmap stored for `kind` in skin `variant`, if the sheet has one.
    pub fn get(&self, kind: SpriteKind, variant: usize) -> Option<&SpriteBitmap> {
        self.entries.get(&(kind, variant))
    }

    /// Number of `(kind, variant)` keys in the sheet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_keys(keys: &str, line: usize) -> Result<Vec<(SpriteKind, usize)>, SheetError> {
    let mut out = Vec::new();
    for key in keys.split(',') {
        let caps = KEY.captures(key).ok_or(SheetError::BadHeader { line })?;
        let name = &caps["name"];
        let kind = SpriteKind::from_name(name).ok_or_else(|| SheetError::UnknownKind {
            line,
            name: name.to_owned(),
        })?;
        let variant = match caps.name("variant") {
            Some(v) => v.as_str().parse().map_err(|_| SheetError::BadHeader { line })?,
            None => 0,
        };
        if variant >= kind.variant_count() {
            return Err(SheetError::UnknownVariant {
                line,
                kind,
                variant,
            });
        }
        out.push((kind, variant));
    }
    if out.is_empty() {
        return Err(SheetError::BadHeader { line });
    }
    Ok(out)
}

fn parse_row(s: &str, line: usize) -> Result<Vec<bool>, SheetError> {
    s.chars()
        .map(|ch| match ch {
            '#' | '1' => Ok(true),
            '.' | '0' => Ok(false),
            _ => Err(SheetError::BadCell { line, ch }),
        })
        .collect()
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
