//! Scenes.
//!
//! A [`Scene`] is one screen of the demo. Every variant follows the same
//! per-frame contract, driven by [`SceneController`](crate::game::SceneController):
//!
//! 1. `handle_input` – read [`InputState`], possibly request a transition
//! 2. `update` – advance internal state by the frame delta
//! 3. `take_transition_request` – hand over (and clear) the request
//! 4. `render` – describe the frame on a [`Canvas`]
//!
//! Submodules overview
//! - [`gameplay`] – walking character over a scrolling background
//! - [`menu`] – static text screen

pub mod gameplay;
pub mod menu;

use crate::resources::assets::{AssetLoader, TextureInfo};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::scenestate::SceneKind;
use crate::resources::screensize::ScreenSize;
use crate::systems::render::Canvas;

use self::gameplay::GameplayScene;
use self::menu::MenuScene;

/// The active screen, generic over the texture handle it owns.
pub enum Scene<T> {
    Gameplay(GameplayScene<T>),
    Menu(MenuScene),
}

impl<T: TextureInfo> Scene<T> {
    /// Build a fresh scene of `kind`, loading whatever it owns.
    pub fn create<L>(
        kind: SceneKind,
        loader: &mut L,
        config: &GameConfig,
        viewport: ScreenSize,
    ) -> Result<Self, String>
    where
        L: AssetLoader<Texture = T>,
    {
        match kind {
            SceneKind::Gameplay => Ok(Scene::Gameplay(GameplayScene::new(loader, config, viewport)?)),
            SceneKind::Menu => Ok(Scene::Menu(MenuScene::new())),
        }
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Gameplay(_) => SceneKind::Gameplay,
            Scene::Menu(_) => SceneKind::Menu,
        }
    }

    pub fn handle_input(&mut self, input: &InputState, delta: f32) {
        match self {
            Scene::Gameplay(scene) => scene.handle_input(input, delta),
            Scene::Menu(scene) => scene.handle_input(input),
        }
    }

    pub fn update(&mut self, delta: f32, viewport: ScreenSize) {
        match self {
            Scene::Gameplay(scene) => scene.update(delta, viewport),
            Scene::Menu(_) => {}
        }
    }

    pub fn take_transition_request(&mut self) -> Option<SceneKind> {
        match self {
            Scene::Gameplay(scene) => scene.take_transition_request(),
            Scene::Menu(scene) => scene.take_transition_request(),
        }
    }

    pub fn render<C>(&self, canvas: &mut C, font: &C::Font)
    where
        C: Canvas<Texture = T>,
    {
        match self {
            Scene::Gameplay(scene) => scene.render(canvas, font),
            Scene::Menu(scene) => scene.render(canvas),
        }
    }

    pub fn as_gameplay(&self) -> Option<&GameplayScene<T>> {
        match self {
            Scene::Gameplay(scene) => Some(scene),
            Scene::Menu(_) => None,
        }
    }
}
