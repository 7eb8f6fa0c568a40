//! sprite_sheet.rs - check a sprite sheet and print its bitmaps as ASCII.
//!
//! Every kind the game draws must be present in every skin it has, with the
//! footprint the standard store registers it with.
//!
//! USAGE:
//! ```bash
//! cargo run --bin sprite_sheet -- \
//!     --sheet assets/sprites.txt \
//!     --filter '^Ship'
//! ```

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use regex::Regex;

use invaders_render::sprite::{SpriteBitmap, SpriteKind, SpriteSheet};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Sheet to check; the embedded sheet when omitted
    #[arg(long, value_name = "FILE")]
    sheet: Option<PathBuf>,

    /// Only preview kinds whose name matches this regex
    #[arg(long, value_name = "REGEX")]
    filter: Option<String>,

    /// Skip the ASCII previews and only report problems
    #[arg(long)]
    quiet: bool,
}

/// One thing wrong with a sheet.
#[derive(Debug)]
enum Problem {
    Missing { kind: SpriteKind, variant: usize },
    Footprint { kind: SpriteKind, variant: usize, found: String },
}

// ------------------------------------------------------------------
//  High-level entry point
// ------------------------------------------------------------------
fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    // 1. Load the sheet.
    let sheet = match &opts.sheet {
        Some(path) => SpriteSheet::from_file(path)?,
        None => SpriteSheet::builtin()?,
    };
    let filter = opts.filter.as_deref().map(Regex::new).transpose()?;

    // 2. Compare against the standard registrations.
    let problems = check(&sheet);

    // 3. Preview.
    if !opts.quiet {
        for kind in SpriteKind::ALL {
            if filter.as_ref().is_some_and(|re| !re.is_match(kind.name())) {
                continue;
            }
            for variant in 0..kind.variant_count() {
                if let Some(bitmap) = sheet.get(kind, variant) {
                    println!("[{}:{}] {}", kind, variant, bitmap.footprint());
                    print!("{}", render(bitmap));
                    println!();
                }
            }
        }
    }

    let label = opts
        .sheet
        .as_ref()
        .map_or_else(|| "<embedded>".to_string(), |p| p.display().to_string());
    println!("{label}: {} entries", sheet.len());

    if problems.is_empty() {
        println!("✔ sheet complete");
        return Ok(());
    }
    for p in &problems {
        match p {
            Problem::Missing { kind, variant } => eprintln!("✘ {kind}:{variant} missing"),
            Problem::Footprint { kind, variant, found } => eprintln!(
                "✘ {kind}:{variant} is {found}, expected {}",
                kind.default_footprint()
            ),
        }
    }
    bail!("{} problem(s) in sheet", problems.len())
}

// ------------------------------------------------------------------
//  Checks
// ------------------------------------------------------------------
fn check(sheet: &SpriteSheet) -> Vec<Problem> {
    let mut out = Vec::new();
    for kind in SpriteKind::ALL {
        for variant in 0..kind.variant_count() {
            match sheet.get(kind, variant) {
                None => out.push(Problem::Missing { kind, variant }),
                Some(bitmap) if bitmap.footprint() != kind.default_footprint() => {
                    out.push(Problem::Footprint {
                        kind,
                        variant,
                        found: bitmap.footprint().to_string(),
                    })
                }
                Some(_) => {}
            }
        }
    }
    out
}

/// Rows of `#` and `.`, one line per cell row.
fn render(bitmap: &SpriteBitmap) -> String {
    let fp = bitmap.footprint();
    let mut s = String::with_capacity((fp.width + 1) * fp.height);
    for j in 0..fp.height {
        for i in 0..fp.width {
            s.push(if bitmap.get(i, j) { '#' } else { '.' });
        }
        s.push('\n');
    }
    s
}
