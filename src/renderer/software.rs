//! ---------------------------------------------------------------------------
//! Off-screen software surface
//!
//! * Stores pixels in **0x00RRGGBB** format, row-major.
//! * Size is `width × (play_height + hud_height)`: the play-field plus a fixed
//!   HUD band under it.
//! * Primitives follow the integer conventions of the screens that use them:
//!   `stroke_rect(x, y, w, h)` covers `(w + 1) × (h + 1)` pixels,
//!   `fill_rect` covers `w × h`, lines include both end points.
//!
//! Everything is clipped to the surface; drawing off the edge is a no-op.
//! ---------------------------------------------------------------------------

use super::Rgba;

/// The unit of double buffering.
#[derive(Default)]
pub struct FrameBuffer {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
    hud_height: usize,
    /* bumped on every open so metric snapshots can detect a replaced surface */
    generation: u64,
}

impl FrameBuffer {
    /// (Re)allocate for the requested size and clear to `background`.
    pub fn open(&mut self, width: usize, play_height: usize, hud_height: usize, background: Rgba) {
        let height = play_height + hud_height;
        // reallocate only if resolution changed
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.pixels.resize(width * height, background);
        }
        self.hud_height = hud_height;
        self.pixels.fill(background);
        self.generation += 1;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Full height, HUD band included.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn play_height(&self) -> usize {
        self.height - self.hud_height
    }

    pub fn hud_height(&self) -> usize {
        self.hud_height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    #[inline]
    pub fn put(&mut self, x: i32, y: i32, col: Rgba) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = col;
        }
    }

    /// Solid `w × h` block with its top-left corner at `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, col: Rgba) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in y0..y1 {
            let start = row as usize * self.width;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(col);
        }
    }

    /// Outline whose right and bottom edges sit at `x + w` and `y + h`.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, col: Rgba) {
        if w < 0 || h < 0 {
            return;
        }
        self.draw_line(x, y, x + w, y, col);
        self.draw_line(x, y + h, x + w, y + h, col);
        self.draw_line(x, y, x, y + h, col);
        self.draw_line(x + w, y, x + w, y + h, col);
    }

    /// Integer Bresenham line-drawing algorithm.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, col: Rgba) {
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, col);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Paint every `mask` byte at or above `threshold` as a solid pixel.
    ///
    /// `mask` is a `w × h` row-major coverage map whose top-left lands on
    /// `(x, y)`. Text is not anti-aliased, so partial coverage is either in
    /// or out.
    pub fn blit_mask(
        &mut self,
        x: i32,
        y: i32,
        w: usize,
        h: usize,
        mask: &[u8],
        threshold: u8,
        col: Rgba,
    ) {
        debug_assert_eq!(mask.len(), w * h);
        for (row, line) in mask.chunks_exact(w.max(1)).take(h).enumerate() {
            for (column, &coverage) in line.iter().enumerate() {
                if coverage >= threshold {
                    self.put(x + column as i32, y + row as i32, col);
                }
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
