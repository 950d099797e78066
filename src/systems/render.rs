//! Draw collaborator.
//!
//! Scenes never talk to raylib directly when drawing. They describe a frame
//! through the [`Canvas`] trait, which is implemented for raylib's
//! [`RaylibDrawHandle`] here and by recording fakes in the tests.
//!
//! The methods mirror the raylib calls the scenes need, with the same
//! argument order, so the raylib implementation is a thin forwarding layer.

use std::ffi::CString;

use raylib::ffi;
use raylib::prelude::*;

use crate::resources::screensize::ScreenSize;

/// Drawing surface for a single frame.
///
/// `Texture` and `Font` are the handle types produced by the matching
/// [`AssetLoader`](crate::resources::assets::AssetLoader).
pub trait Canvas {
    type Texture;
    type Font;

    /// Current viewport size in pixels.
    fn viewport(&self) -> ScreenSize;

    fn clear_background(&mut self, color: Color);

    /// Draw the `src` region of `texture` into `dst`.
    ///
    /// A negative `src.width` flips the region horizontally.
    fn draw_texture_pro(
        &mut self,
        texture: &Self::Texture,
        src: Rectangle,
        dst: Rectangle,
        origin: Vector2,
        rotation: f32,
        tint: Color,
    );

    /// Draw text with a loaded font.
    fn draw_text_ex(
        &mut self,
        font: &Self::Font,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        color: Color,
    );

    /// Size in pixels of `text` drawn with [`Canvas::draw_text_ex`].
    fn measure_text_ex(&self, font: &Self::Font, text: &str, font_size: f32, spacing: f32) -> Vector2;

    /// Draw text with the library's built-in font.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color);

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
}

impl Canvas for RaylibDrawHandle<'_> {
    type Texture = Texture2D;
    type Font = Font;

    fn viewport(&self) -> ScreenSize {
        ScreenSize {
            w: self.get_screen_width(),
            h: self.get_screen_height(),
        }
    }

    fn clear_background(&mut self, color: Color) {
        RaylibDraw::clear_background(self, color);
    }

    fn draw_texture_pro(
        &mut self,
        texture: &Texture2D,
        src: Rectangle,
        dst: Rectangle,
        origin: Vector2,
        rotation: f32,
        tint: Color,
    ) {
        RaylibDraw::draw_texture_pro(self, texture, src, dst, origin, rotation, tint);
    }

    fn draw_text_ex(
        &mut self,
        font: &Font,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        color: Color,
    ) {
        RaylibDraw::draw_text_ex(self, font, text, position, font_size, spacing, color);
    }

    fn measure_text_ex(&self, font: &Font, text: &str, font_size: f32, spacing: f32) -> Vector2 {
        // interior NUL cannot be passed to raylib
        let Ok(text) = CString::new(text) else {
            return Vector2 { x: 0.0, y: 0.0 };
        };
        let size = unsafe { ffi::MeasureTextEx(**font, text.as_ptr(), font_size, spacing) };
        Vector2 {
            x: size.x,
            y: size.y,
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        RaylibDraw::draw_text(self, text, x, y, font_size, color);
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        RaylibDraw::draw_rectangle(self, x, y, width, height, color);
    }
}
