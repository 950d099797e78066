//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. Scenes read this to
//! fit the background and to place the sprite and overlays.

/// Current screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    pub fn width_f32(&self) -> f32 {
        self.w as f32
    }

    pub fn height_f32(&self) -> f32 {
        self.h as f32
    }
}
