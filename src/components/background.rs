//! Horizontally scrolling background.
//!
//! The background is one texture scaled to the viewport and drawn twice side
//! by side. Moving `offset_x` and wrapping it by one scaled width gives the
//! impression of an endless strip.
//!
//! At normal speeds a frame moves the background by a few pixels, so
//! [`ScrollingBackground::wrap`] applies at most one correction. It keeps
//! stepping when a frame drop produced a larger jump.

use raylib::prelude::{Color, Rectangle, Vector2};

use crate::resources::screensize::ScreenSize;
use crate::systems::render::Canvas;

/// How the texture is scaled to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundFit {
    /// Fill the viewport, cropping the overflow.
    #[default]
    Cover,
    /// Fit inside the viewport, leaving bars.
    Contain,
}

impl BackgroundFit {
    pub fn scale(self, viewport_w: f32, viewport_h: f32, texture_w: f32, texture_h: f32) -> f32 {
        match self {
            BackgroundFit::Cover => compute_cover_scale(viewport_w, viewport_h, texture_w, texture_h),
            BackgroundFit::Contain => {
                compute_contain_scale(viewport_w, viewport_h, texture_w, texture_h)
            }
        }
    }

    /// Parse a config value (`cover` / `contain`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cover" => Some(BackgroundFit::Cover),
            "contain" => Some(BackgroundFit::Contain),
            _ => None,
        }
    }
}

/// Smallest aspect-preserving scale that covers the whole viewport.
pub fn compute_cover_scale(viewport_w: f32, viewport_h: f32, texture_w: f32, texture_h: f32) -> f32 {
    (viewport_w / texture_w).max(viewport_h / texture_h)
}

/// Largest aspect-preserving scale that fits inside the viewport.
pub fn compute_contain_scale(
    viewport_w: f32,
    viewport_h: f32,
    texture_w: f32,
    texture_h: f32,
) -> f32 {
    (viewport_w / texture_w).min(viewport_h / texture_h)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollingBackground {
    /// Left edge of the primary copy, in screen pixels.
    pub offset_x: f32,
    /// Pixels per second applied by walking input.
    pub scroll_speed: f32,
    pub texture_width: i32,
    pub texture_height: i32,
    pub fit: BackgroundFit,
}

impl ScrollingBackground {
    /// Centre a `texture_width` wide texture horizontally in `viewport`.
    pub fn new(
        texture_width: i32,
        texture_height: i32,
        scroll_speed: f32,
        fit: BackgroundFit,
        viewport: ScreenSize,
    ) -> Self {
        Self {
            offset_x: -((texture_width - viewport.w) as f32) / 2.0,
            scroll_speed,
            texture_width,
            texture_height,
            fit,
        }
    }

    pub fn scale(&self, viewport: ScreenSize) -> f32 {
        self.fit.scale(
            viewport.width_f32(),
            viewport.height_f32(),
            self.texture_width as f32,
            self.texture_height as f32,
        )
    }

    /// Texture width after scaling to `viewport`.
    pub fn scaled_width(&self, viewport: ScreenSize) -> f32 {
        self.texture_width as f32 * self.scale(viewport)
    }

    /// Shift by a signed per-frame displacement.
    pub fn tick(&mut self, movement: f32) {
        self.offset_x += movement;
    }

    /// Rush the background past a dashing sprite, `step` pixels per frame
    /// against its facing.
    pub fn dash(&mut self, facing_right: bool, step: f32) {
        if facing_right {
            self.offset_x -= step;
        } else {
            self.offset_x += step;
        }
    }

    /// Bring `offset_x` back into `(-scaled_width, 0]`.
    ///
    /// A non-finite offset restarts at 0.
    pub fn wrap(&mut self, scaled_width: f32) {
        if !(scaled_width > 0.0) || !scaled_width.is_finite() {
            return;
        }
        if !self.offset_x.is_finite() {
            self.offset_x = 0.0;
            return;
        }
        if self.offset_x > -scaled_width && self.offset_x <= 0.0 {
            return;
        }
        // rem_euclid is in [0, w], and can round up to w itself
        let folded = self.offset_x.rem_euclid(scaled_width);
        self.offset_x = if folded == 0.0 || folded >= scaled_width {
            0.0
        } else {
            folded - scaled_width
        };
    }

    /// Draw the primary copy plus the one copy that fills the gap it leaves.
    pub fn render<C: Canvas>(&self, canvas: &mut C, texture: &C::Texture, viewport: ScreenSize) {
        let scale = self.scale(viewport);
        let width = self.texture_width as f32 * scale;
        let height = self.texture_height as f32 * scale;
        let y = (viewport.height_f32() - height) / 2.0;
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.texture_width as f32,
            height: self.texture_height as f32,
        };

        let mut draw_at = |x: f32| {
            canvas.draw_texture_pro(
                texture,
                src,
                Rectangle {
                    x,
                    y,
                    width,
                    height,
                },
                Vector2 { x: 0.0, y: 0.0 },
                0.0,
                Color::WHITE,
            );
        };

        draw_at(self.offset_x);
        if self.offset_x < 0.0 {
            draw_at(self.offset_x + width);
        } else if self.offset_x > 0.0 {
            draw_at(self.offset_x - width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn background(offset_x: f32) -> ScrollingBackground {
        ScrollingBackground {
            offset_x,
            scroll_speed: 180.0,
            texture_width: 1000,
            texture_height: 400,
            fit: BackgroundFit::Cover,
        }
    }

    #[test]
    fn test_cover_scale_uses_larger_ratio() {
        assert!(approx_eq(compute_cover_scale(850.0, 400.0, 1000.0, 200.0), 2.0));
        assert!(approx_eq(compute_cover_scale(850.0, 400.0, 425.0, 800.0), 2.0));
        assert!(approx_eq(compute_cover_scale(800.0, 400.0, 1600.0, 800.0), 0.5));
    }

    #[test]
    fn test_contain_scale_uses_smaller_ratio() {
        assert!(approx_eq(compute_contain_scale(850.0, 400.0, 1000.0, 200.0), 0.85));
        assert!(approx_eq(compute_contain_scale(850.0, 400.0, 425.0, 800.0), 0.5));
    }

    #[test]
    fn test_fit_from_name() {
        assert_eq!(BackgroundFit::from_name("cover"), Some(BackgroundFit::Cover));
        assert_eq!(BackgroundFit::from_name(" Contain "), Some(BackgroundFit::Contain));
        assert_eq!(BackgroundFit::from_name("stretch"), None);
    }

    #[test]
    fn test_new_centres_texture() {
        let bg = ScrollingBackground::new(
            1250,
            400,
            180.0,
            BackgroundFit::Cover,
            ScreenSize::new(850, 400),
        );
        assert!(approx_eq(bg.offset_x, -200.0));
        assert!(approx_eq(bg.scroll_speed, 180.0));
    }

    #[test]
    fn test_tick_then_wrap_left() {
        let mut bg = background(-5.0);
        bg.tick(-1000.0);
        assert!(approx_eq(bg.offset_x, -1005.0));
        bg.wrap(1000.0);
        assert!(approx_eq(bg.offset_x, -5.0));
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut bg = background(0.0);
        bg.wrap(1000.0);
        assert_eq!(bg.offset_x, 0.0);

        let mut bg = background(3.0);
        bg.wrap(1000.0);
        assert!(approx_eq(bg.offset_x, -997.0));

        let mut bg = background(-1000.0);
        bg.wrap(1000.0);
        assert_eq!(bg.offset_x, 0.0);
    }

    #[test]
    fn test_wrap_recovers_from_large_jump() {
        let mut bg = background(-3500.0);
        bg.wrap(1000.0);
        assert!(approx_eq(bg.offset_x, -500.0));

        let mut bg = background(1500.0);
        bg.wrap(1000.0);
        assert!(approx_eq(bg.offset_x, -500.0));
    }

    #[test]
    fn test_wrap_folds_huge_offsets() {
        let mut bg = background(-1.6e11);
        bg.wrap(1000.0);
        assert!(bg.offset_x > -1000.0 && bg.offset_x <= 0.0);

        let mut bg = background(3.0e12);
        bg.wrap(1000.0);
        assert!(bg.offset_x > -1000.0 && bg.offset_x <= 0.0);

        let mut bg = background(f32::MIN);
        bg.wrap(850.0);
        assert!(bg.offset_x > -850.0 && bg.offset_x <= 0.0);
    }

    #[test]
    fn test_wrap_resets_non_finite_offset() {
        for offset in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut bg = background(offset);
            bg.wrap(1000.0);
            assert_eq!(bg.offset_x, 0.0);
        }
    }

    #[test]
    fn test_wrap_ignores_degenerate_width() {
        let mut bg = background(25.0);
        bg.wrap(0.0);
        assert_eq!(bg.offset_x, 25.0);
    }

    #[test]
    fn test_wrap_keeps_in_range_offsets() {
        let mut bg = background(-420.0);
        bg.wrap(1000.0);
        assert!(approx_eq(bg.offset_x, -420.0));
    }

    #[test]
    fn test_wrap_holds_invariant_for_bounded_input() {
        let scaled = 1000.0;
        let mut x = -1999.0;
        while x < 1000.0 {
            let mut bg = background(x);
            bg.wrap(scaled);
            assert!(
                bg.offset_x > -scaled - EPSILON && bg.offset_x <= 0.0,
                "offset {} wrapped to {}",
                x,
                bg.offset_x
            );
            x += 7.3;
        }
    }

    #[test]
    fn test_dash_moves_against_facing() {
        let mut bg = background(-100.0);
        bg.dash(true, 5.0);
        assert!(approx_eq(bg.offset_x, -105.0));
        bg.dash(false, 5.0);
        bg.dash(false, 5.0);
        assert!(approx_eq(bg.offset_x, -95.0));
    }

    #[test]
    fn test_scaled_width_follows_fit() {
        let mut bg = background(0.0);
        let viewport = ScreenSize::new(850, 400);
        assert!(approx_eq(bg.scaled_width(viewport), 1000.0));
        bg.texture_height = 200;
        assert!(approx_eq(bg.scaled_width(viewport), 2000.0));
        bg.fit = BackgroundFit::Contain;
        assert!(approx_eq(bg.scaled_width(viewport), 850.0));
    }
}
