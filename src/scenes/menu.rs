//! Menu scene: two lines of text and a key back to gameplay.

use raylib::prelude::Color;

use crate::resources::input::InputState;
use crate::resources::scenestate::{NextScene, SceneKind};
use crate::systems::render::Canvas;

pub const MENU_TITLE: &str = "Menu State : use 'E' to return";
pub const MENU_TIPS: &str = "Tips : use 'S' to dash with other animation :3";

#[derive(Debug, Default)]
pub struct MenuScene {
    next: NextScene,
}

impl MenuScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_input(&mut self, input: &InputState) {
        if input.switch_scene.just_pressed {
            self.next.set(SceneKind::Gameplay);
        }
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        canvas.clear_background(Color::BLACK);
        canvas.draw_text(MENU_TITLE, 100, 100, 20, Color::WHITE);
        canvas.draw_text(MENU_TIPS, 100, 150, 15, Color::WHITE);
    }

    pub fn take_transition_request(&mut self) -> Option<SceneKind> {
        self.next.take()
    }
}
