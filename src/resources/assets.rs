//! Asset collaborator.
//!
//! [`AssetLoader`] is the seam between scene construction and the graphics
//! library. Each scene loads its own textures through it when it is created and
//! keeps them in [`OwnedTexture`]s, so dropping the scene releases them. The
//! font is loaded once by the caller and lent to scenes by reference.
//!
//! [`RaylibAssets`] is the production implementation. Raylib handles already
//! unload their GPU resource on `Drop`; `OwnedTexture` adds the bookkeeping
//! (source path, release log).
//!
//! Note: raylib handles must be created and dropped on the main thread.

use log::{debug, info};
use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Pixel dimensions of a loaded texture.
pub trait TextureInfo {
    fn texture_size(&self) -> (i32, i32);
}

impl TextureInfo for Texture2D {
    fn texture_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

/// Loads textures and fonts for scenes.
///
/// Failures are reported as strings with the offending path; callers treat
/// them as fatal.
pub trait AssetLoader {
    type Texture: TextureInfo;
    type Font;

    fn load_texture(&mut self, path: &str) -> Result<Self::Texture, String>;

    fn load_font(&mut self, path: &str) -> Result<Self::Font, String>;

    /// Switch a texture to nearest-neighbour sampling (pixel art).
    fn set_point_filter(&mut self, _texture: &mut Self::Texture) {}
}

/// A texture exclusively owned by one scene.
///
/// The wrapped handle is released when this value is dropped.
pub struct OwnedTexture<T> {
    path: String,
    handle: T,
}

impl<T> OwnedTexture<T> {
    /// Load `path` through `loader` and take ownership of the handle.
    pub fn load<L>(loader: &mut L, path: &str) -> Result<Self, String>
    where
        L: AssetLoader<Texture = T>,
    {
        let handle = loader.load_texture(path)?;
        info!("Loaded texture '{}'", path);
        Ok(Self {
            path: path.to_string(),
            handle,
        })
    }

    pub fn handle(&self) -> &T {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut T {
        &mut self.handle
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T: TextureInfo> OwnedTexture<T> {
    pub fn width(&self) -> i32 {
        self.handle.texture_size().0
    }

    pub fn height(&self) -> i32 {
        self.handle.texture_size().1
    }
}

impl<T> Drop for OwnedTexture<T> {
    fn drop(&mut self) {
        debug!("Releasing texture '{}'", self.path);
    }
}

/// Raylib-backed [`AssetLoader`].
///
/// Borrows the handle and thread for the duration of a loading step; create
/// one where scenes may be constructed and drop it before drawing.
pub struct RaylibAssets<'a> {
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
}

impl<'a> RaylibAssets<'a> {
    pub fn new(rl: &'a mut RaylibHandle, thread: &'a RaylibThread) -> Self {
        Self { rl, thread }
    }
}

impl AssetLoader for RaylibAssets<'_> {
    type Texture = Texture2D;
    type Font = Font;

    fn load_texture(&mut self, path: &str) -> Result<Texture2D, String> {
        self.rl
            .load_texture(self.thread, path)
            .map_err(|e| format!("Failed to load texture '{}': {}", path, e))
    }

    fn load_font(&mut self, path: &str) -> Result<Font, String> {
        let font = self
            .rl
            .load_font(self.thread, path)
            .map_err(|e| format!("Failed to load font '{}': {}", path, e))?;
        info!("Loaded font '{}'", path);
        Ok(font)
    }

    fn set_point_filter(&mut self, texture: &mut Texture2D) {
        unsafe {
            ffi::SetTextureFilter(**texture, TextureFilter::TEXTURE_FILTER_POINT as i32);
        }
    }
}
