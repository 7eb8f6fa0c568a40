//! Pixel plumbing shared by every screen.
//!
//! *Nothing above this layer touches the visible window directly.*
//! Screens draw into a [`FrameBuffer`] owned by the draw façade and, once the
//! frame is complete, a type implementing [`Presenter`] copies it into the
//! window at the window's content offset.
//!
//! * [`software`] holds the off-screen surface and its raster primitives.
//! * [`window`] holds the presenters: a `minifb` window and an in-memory
//!   stand-in used by tests and screenshot tooling.

use glam::IVec2;
use thiserror::Error;

pub mod software;
pub mod window;

pub use software::FrameBuffer;
pub use window::{MemoryPresenter, WindowPresenter};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Fixed colors used across the screens.
pub mod palette {
    use super::Rgba;

    pub const BLACK: Rgba = 0x00_000000;
    pub const WHITE: Rgba = 0x00_FFFFFF;
    pub const GRAY: Rgba = 0x00_808080;
    pub const LIGHT_GRAY: Rgba = 0x00_C0C0C0;
    pub const DARK_GRAY: Rgba = 0x00_404040;
    pub const GREEN: Rgba = 0x00_00FF00;
    pub const RED: Rgba = 0x00_FF0000;
    pub const YELLOW: Rgba = 0x00_FFFF00;
    pub const ORANGE: Rgba = 0x00_FFC800;
    pub const CYAN: Rgba = 0x00_00FFFF;

    /// Every surface is cleared to this before drawing starts.
    pub const BACKGROUND: Rgba = BLACK;
}

/// Window decoration thickness around the drawable content area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Where the surface's top-left pixel lands inside the window buffer.
    pub fn content_offset(&self) -> IVec2 {
        IVec2::new(self.left, self.top)
    }

    /// Size of a window whose content area is exactly `w × h`.
    pub fn outer_size(&self, w: usize, h: usize) -> (usize, usize) {
        (
            w + (self.left + self.right).max(0) as usize,
            h + (self.top + self.bottom).max(0) as usize,
        )
    }
}

#[derive(Error, Debug)]
pub enum PresentError {
    /// Underlying window failure – propagated unchanged.
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    /// The window buffer does not match the size it was created with.
    #[error("window buffer holds {found} pixels, expected {expected}")]
    BufferSize { expected: usize, found: usize },
}

/// Second half of the double-buffer contract: receives a finished surface.
///
/// * `present` runs exactly once per frame, after every draw call.
/// * Implementations composite `frame` at [`Insets::content_offset`] and
///   must not keep a borrow of it.
pub trait Presenter {
    fn insets(&self) -> Insets;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), PresentError>;
}

/// Copy `frame` into a `dst_w × dst_h` window buffer at `offset`, clipping
/// whatever falls outside the window.
pub fn composite(dst: &mut [Rgba], dst_w: usize, dst_h: usize, frame: &FrameBuffer, offset: IVec2) {
    debug_assert_eq!(dst.len(), dst_w * dst_h);
    let src_w = frame.width();
    let pixels = frame.pixels();

    for (sy, row) in pixels.chunks_exact(src_w.max(1)).enumerate() {
        let dy = sy as i32 + offset.y;
        if dy < 0 || dy >= dst_h as i32 {
            continue;
        }
        // horizontal clip, computed once per row
        let x0 = offset.x.max(0);
        let x1 = (offset.x + src_w as i32).min(dst_w as i32);
        if x0 >= x1 {
            continue;
        }
        let src_from = (x0 - offset.x) as usize;
        let len = (x1 - x0) as usize;
        let dst_row = dy as usize * dst_w;
        dst[dst_row + x0 as usize..dst_row + x0 as usize + len]
            .copy_from_slice(&row[src_from..src_from + len]);
    }
}
