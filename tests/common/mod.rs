//! Fakes for the asset and draw collaborators.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use raylib::prelude::{Color, Rectangle, Vector2};

use scrollwalk::game::SceneController;
use scrollwalk::resources::assets::{AssetLoader, TextureInfo};
use scrollwalk::resources::gameconfig::GameConfig;
use scrollwalk::resources::input::InputState;
use scrollwalk::resources::screensize::ScreenSize;
use scrollwalk::systems::render::Canvas;

pub const EPSILON: f32 = 1e-3;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub fn same_color(a: Color, b: Color) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b && a.a == b.a
}

pub const VIEWPORT: ScreenSize = ScreenSize { w: 850, h: 400 };

/// Background size used by the fake loader. Covers 850x400 at scale 1.
pub const BACKGROUND_SIZE: (i32, i32) = (1000, 400);
pub const SPRITE_SHEET_SIZE: (i32, i32) = (1664, 1792);

#[derive(Debug)]
pub struct FakeTexture {
    pub path: String,
    pub width: i32,
    pub height: i32,
    pub point_filtered: bool,
    live: Rc<Cell<i32>>,
}

impl FakeTexture {
    pub fn new(path: &str, width: i32, height: i32) -> Self {
        Self::tracked(path, width, height, Rc::new(Cell::new(0)))
    }

    fn tracked(path: &str, width: i32, height: i32, live: Rc<Cell<i32>>) -> Self {
        live.set(live.get() + 1);
        Self {
            path: path.to_string(),
            width,
            height,
            point_filtered: false,
            live,
        }
    }
}

impl Drop for FakeTexture {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl TextureInfo for FakeTexture {
    fn texture_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

#[derive(Debug)]
pub struct FakeFont {
    pub path: String,
}

/// Loader that hands out sized fake textures and counts how many are alive.
#[derive(Default)]
pub struct FakeLoader {
    pub live_textures: Rc<Cell<i32>>,
    pub loaded: Vec<String>,
    /// Paths that fail to load.
    pub missing: Vec<String>,
}

impl FakeLoader {
    pub fn live(&self) -> i32 {
        self.live_textures.get()
    }
}

impl AssetLoader for FakeLoader {
    type Texture = FakeTexture;
    type Font = FakeFont;

    fn load_texture(&mut self, path: &str) -> Result<FakeTexture, String> {
        if self.missing.iter().any(|m| m == path) {
            return Err(format!("Failed to load texture '{}'", path));
        }
        self.loaded.push(path.to_string());
        let (w, h) = if path.contains("bgrollin") {
            BACKGROUND_SIZE
        } else {
            SPRITE_SHEET_SIZE
        };
        Ok(FakeTexture::tracked(path, w, h, self.live_textures.clone()))
    }

    fn load_font(&mut self, path: &str) -> Result<FakeFont, String> {
        if self.missing.iter().any(|m| m == path) {
            return Err(format!("Failed to load font '{}'", path));
        }
        Ok(FakeFont {
            path: path.to_string(),
        })
    }

    fn set_point_filter(&mut self, texture: &mut FakeTexture) {
        texture.point_filtered = true;
    }
}

#[derive(Debug)]
pub enum DrawCall {
    Clear(Color),
    Texture {
        path: String,
        src: Rectangle,
        dst: Rectangle,
    },
    TextEx {
        font: String,
        text: String,
        position: Vector2,
        size: f32,
        spacing: f32,
        color: Color,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        size: i32,
        color: Color,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
}

/// Canvas that records every call.
pub struct RecordingCanvas {
    pub viewport: ScreenSize,
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            viewport: VIEWPORT,
            calls: Vec::new(),
        }
    }

    pub fn textures(&self) -> Vec<(&str, Rectangle, Rectangle)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Texture { path, src, dst } => Some((path.as_str(), *src, *dst)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    type Texture = FakeTexture;
    type Font = FakeFont;

    fn viewport(&self) -> ScreenSize {
        self.viewport
    }

    fn clear_background(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_texture_pro(
        &mut self,
        texture: &FakeTexture,
        src: Rectangle,
        dst: Rectangle,
        _origin: Vector2,
        _rotation: f32,
        _tint: Color,
    ) {
        self.calls.push(DrawCall::Texture {
            path: texture.path.clone(),
            src,
            dst,
        });
    }

    fn draw_text_ex(
        &mut self,
        font: &FakeFont,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        color: Color,
    ) {
        self.calls.push(DrawCall::TextEx {
            font: font.path.clone(),
            text: text.to_string(),
            position,
            size: font_size,
            spacing,
            color,
        });
    }

    /// Monospace stand-in: half the size per char, one line high.
    fn measure_text_ex(&self, _font: &FakeFont, text: &str, font_size: f32, spacing: f32) -> Vector2 {
        let chars = text.chars().count() as f32;
        Vector2 {
            x: chars * font_size * 0.5 + (chars - 1.0).max(0.0) * spacing,
            y: font_size,
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            size: font_size,
            color,
        });
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }
}

pub type TestController = SceneController<FakeTexture, FakeFont>;

pub fn make_controller(loader: &mut FakeLoader) -> TestController {
    SceneController::new(loader, GameConfig::new(), VIEWPORT).expect("fake assets load")
}

/// Input with nothing held or pressed.
pub fn idle() -> InputState {
    InputState::default()
}

pub fn holding_right() -> InputState {
    let mut input = InputState::default();
    input.walk_right.active = true;
    input
}

pub fn holding_left() -> InputState {
    let mut input = InputState::default();
    input.walk_left.active = true;
    input
}

pub fn pressing_teleport() -> InputState {
    let mut input = InputState::default();
    input.teleport.active = true;
    input.teleport.just_pressed = true;
    input
}

pub fn pressing_hint() -> InputState {
    let mut input = InputState::default();
    input.show_hint.active = true;
    input.show_hint.just_pressed = true;
    input
}

pub fn pressing_switch() -> InputState {
    let mut input = InputState::default();
    input.switch_scene.active = true;
    input.switch_scene.just_pressed = true;
    input
}

pub fn pressing_quit() -> InputState {
    let mut input = InputState::default();
    input.quit.active = true;
    input.quit.just_pressed = true;
    input
}

pub fn step(controller: &mut TestController, loader: &mut FakeLoader, input: &InputState) {
    controller
        .step(loader, input, 0.1, VIEWPORT)
        .expect("step succeeds");
}
