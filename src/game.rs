//! Top-level scene state machine.
//!
//! [`SceneController`] owns the font, the active [`Scene`] and the `running`
//! flag. Each frame runs input, quit check, update and transition in that
//! order; rendering is a separate call so the caller can open its drawing
//! scope after any scene swap has finished loading.
//!
//! Transitions always build a new scene from scratch. The previous scene is
//! dropped as soon as it is replaced, which releases its textures. The font
//! outlives every scene and is only lent to them while drawing.

use log::{debug, info};

use crate::resources::assets::{AssetLoader, TextureInfo};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::scenestate::SceneKind;
use crate::resources::screensize::ScreenSize;
use crate::scenes::Scene;
use crate::systems::render::Canvas;

pub struct SceneController<T, F> {
    config: GameConfig,
    font: F,
    scene: Scene<T>,
    running: bool,
}

impl<T: TextureInfo, F> SceneController<T, F> {
    /// Load the shared font and enter the gameplay scene.
    pub fn new<L>(loader: &mut L, config: GameConfig, viewport: ScreenSize) -> Result<Self, String>
    where
        L: AssetLoader<Texture = T, Font = F>,
    {
        let font = loader.load_font(&config.font_path)?;
        let scene = Scene::create(SceneKind::Gameplay, loader, &config, viewport)?;
        info!("Starting in {:?} scene", scene.kind());
        Ok(Self {
            config,
            font,
            scene,
            running: true,
        })
    }

    /// Run one frame of input, update and transition.
    ///
    /// An error means a new scene could not load its assets.
    pub fn step<L>(
        &mut self,
        loader: &mut L,
        input: &InputState,
        delta: f32,
        viewport: ScreenSize,
    ) -> Result<(), String>
    where
        L: AssetLoader<Texture = T, Font = F>,
    {
        self.scene.handle_input(input, delta);

        if input.quit.just_pressed {
            info!("Quit requested");
            self.running = false;
        }

        self.scene.update(delta, viewport);

        if let Some(next) = self.scene.take_transition_request() {
            self.switch_to(next, loader, viewport)?;
        }
        Ok(())
    }

    fn switch_to<L>(&mut self, next: SceneKind, loader: &mut L, viewport: ScreenSize) -> Result<(), String>
    where
        L: AssetLoader<Texture = T, Font = F>,
    {
        info!("Transitioning from {:?} to {:?}", self.scene.kind(), next);
        let scene = Scene::create(next, loader, &self.config, viewport)?;
        self.scene = scene;
        debug!("Previous scene dropped");
        Ok(())
    }

    /// Describe the current frame.
    pub fn render<C>(&self, canvas: &mut C)
    where
        C: Canvas<Texture = T, Font = F>,
    {
        self.scene.render(canvas, &self.font);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop, e.g. when the window was closed.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    pub fn scene(&self) -> &Scene<T> {
        &self.scene
    }

    pub fn scene_kind(&self) -> SceneKind {
        self.scene.kind()
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
