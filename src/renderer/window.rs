use minifb::{Window, WindowOptions};

use super::{FrameBuffer, Insets, PresentError, Presenter, Rgba, composite, palette};

/// Presents frames into a `minifb` window.
///
/// The window is sized so that its content area fits the surface plus the
/// configured insets; each frame is composited at the content offset and the
/// whole window buffer is pushed in one `update_with_buffer`.
pub struct WindowPresenter {
    window: Window,
    buffer: Vec<Rgba>,
    width: usize,
    height: usize,
    insets: Insets,
}

impl WindowPresenter {
    pub fn open(
        title: &str,
        content_w: usize,
        content_h: usize,
        insets: Insets,
        fps: usize,
    ) -> Result<Self, PresentError> {
        let (width, height) = insets.outer_size(content_w, content_h);
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        window.set_target_fps(fps);
        Ok(Self {
            window,
            buffer: vec![palette::BACKGROUND; width * height],
            width,
            height,
            insets,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }
}

impl Presenter for WindowPresenter {
    fn insets(&self) -> Insets {
        self.insets
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), PresentError> {
        if self.buffer.len() != self.width * self.height {
            return Err(PresentError::BufferSize {
                expected: self.width * self.height,
                found: self.buffer.len(),
            });
        }
        composite(
            &mut self.buffer,
            self.width,
            self.height,
            frame,
            self.insets.content_offset(),
        );
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }
}

/// Window stand-in that keeps the composited pixels in memory.
///
/// Used by tests and by screenshot tooling; behaves like a window whose
/// content area starts at the configured insets.
pub struct MemoryPresenter {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
    insets: Insets,
    frames: usize,
}

impl MemoryPresenter {
    pub fn new(content_w: usize, content_h: usize, insets: Insets) -> Self {
        let (width, height) = insets.outer_size(content_w, content_h);
        Self {
            pixels: vec![palette::BACKGROUND; width * height],
            width,
            height,
            insets,
            frames: 0,
        }
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Window pixel at `(x, y)` in window coordinates.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Presenter for MemoryPresenter {
    fn insets(&self) -> Insets {
        self.insets
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), PresentError> {
        composite(
            &mut self.pixels,
            self.width,
            self.height,
            frame,
            self.insets.content_offset(),
        );
        self.frames += 1;
        Ok(())
    }
}
