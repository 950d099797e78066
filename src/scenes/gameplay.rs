//! Gameplay scene: a character walking over an endless background.
//!
//! The character never moves on screen. Walking scrolls the background and
//! plays the walk strip; the teleport key plays a one-shot dash while the
//! background rushes past.
//!
//! # Teleport lock
//!
//! Pressing the teleport key sets `teleport_locked`. While locked, walking
//! input no longer picks the animation and further teleport presses are
//! ignored. The lock clears when the teleport strip reaches its last frame.

use log::info;
use raylib::prelude::{Color, Vector2};

use crate::components::animator::{AnimationState, SpriteAnimator};
use crate::components::background::ScrollingBackground;
use crate::resources::assets::{AssetLoader, OwnedTexture, TextureInfo};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::scenestate::{NextScene, SceneKind};
use crate::resources::screensize::ScreenSize;
use crate::systems::render::Canvas;

/// Cell size of the character sheet.
pub const SPRITE_FRAME_SIZE: i32 = 128;

pub const HINT_LABEL: &str = "[Untracked : Vinz?] [ Use 'E' to see hints ]";
pub const HINT_MESSAGE: &str =
    "[Apis] : What is this thing..? ,i thought it never happend before..";

const HINT_PANEL_COLOR: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 20,
};

pub struct GameplayScene<T> {
    sprite_sheet: OwnedTexture<T>,
    backdrop: OwnedTexture<T>,
    animator: SpriteAnimator,
    background: ScrollingBackground,
    anim_state: AnimationState,
    facing_right: bool,
    walking: bool,
    /// Background displacement requested by this frame's input.
    movement: f32,
    teleport_locked: bool,
    show_hint: bool,
    sprite_scale: f32,
    dash_step: f32,
    next: NextScene,
}

impl<T: TextureInfo> GameplayScene<T> {
    /// Load the scene's textures and place everything at its starting point.
    pub fn new<L>(loader: &mut L, config: &GameConfig, viewport: ScreenSize) -> Result<Self, String>
    where
        L: AssetLoader<Texture = T>,
    {
        let mut sprite_sheet = OwnedTexture::load(loader, &config.sprite_sheet_path)?;
        loader.set_point_filter(sprite_sheet.handle_mut());
        let backdrop = OwnedTexture::load(loader, &config.background_path)?;

        let background = ScrollingBackground::new(
            backdrop.width(),
            backdrop.height(),
            config.scroll_speed,
            config.background_fit,
            viewport,
        );

        Ok(Self {
            sprite_sheet,
            backdrop,
            animator: SpriteAnimator::new(SPRITE_FRAME_SIZE, SPRITE_FRAME_SIZE, AnimationState::Idle),
            background,
            anim_state: AnimationState::Idle,
            facing_right: true,
            walking: false,
            movement: 0.0,
            teleport_locked: false,
            show_hint: false,
            sprite_scale: config.sprite_scale,
            dash_step: config.dash_step,
            next: NextScene::new(),
        })
    }

    /// Read this frame's keys.
    ///
    /// Right scrolls the background left and faces right; left does the
    /// opposite. Holding both cancels out.
    pub fn handle_input(&mut self, input: &InputState, delta: f32) {
        self.walking = false;
        self.movement = 0.0;

        let step = self.background.scroll_speed * delta;
        if input.walk_right.active {
            self.movement -= step;
            self.facing_right = true;
            self.walking = true;
        }
        if input.walk_left.active {
            self.movement += step;
            self.facing_right = false;
            self.walking = true;
        }

        if input.teleport.just_pressed && !self.teleport_locked {
            self.anim_state = AnimationState::Teleporting;
            self.teleport_locked = true;
        }

        if input.show_hint.just_pressed {
            self.show_hint = true;
        }
        if self.walking {
            self.show_hint = false;
        }

        if input.debug_probe.just_pressed {
            info!("Key {:?} pressed", input.debug_probe.key_binding);
        }
        if input.switch_scene.just_pressed {
            self.next.set(SceneKind::Menu);
        }
    }

    /// Advance animation and background by one frame.
    pub fn update(&mut self, delta: f32, viewport: ScreenSize) {
        if !self.teleport_locked {
            self.anim_state = if self.walking {
                AnimationState::Walking
            } else {
                AnimationState::Idle
            };
        }
        self.animator.select_animation(self.anim_state);

        if self.anim_state == AnimationState::Teleporting && self.teleport_locked {
            self.background.dash(self.facing_right, self.dash_step);
            if self.animator.is_on_last_frame() {
                self.teleport_locked = false;
                self.anim_state = AnimationState::Idle;
            }
        }

        self.background.tick(self.movement);
        self.background.wrap(self.background.scaled_width(viewport));

        let wrapped = self.animator.advance(delta);
        // a long frame can step over the last teleport frame
        if wrapped && self.teleport_locked && self.anim_state == AnimationState::Teleporting {
            self.teleport_locked = false;
            self.anim_state = AnimationState::Idle;
        }
    }

    /// Bottom-centre anchor of the character.
    pub fn sprite_position(&self, viewport: ScreenSize) -> Vector2 {
        let frame_w = self.animator.frame_width as f32;
        let frame_h = self.animator.frame_height as f32;
        Vector2 {
            x: (viewport.width_f32() - frame_w * self.sprite_scale) / 2.0,
            y: viewport.height_f32() - frame_h * 0.2 - 2.0,
        }
    }

    pub fn render<C>(&self, canvas: &mut C, font: &C::Font)
    where
        C: Canvas<Texture = T>,
    {
        let viewport = canvas.viewport();
        canvas.clear_background(Color::GRAY);

        self.background.render(canvas, self.backdrop.handle(), viewport);
        self.animator.render(
            canvas,
            self.sprite_sheet.handle(),
            self.sprite_position(viewport),
            self.facing_right,
            self.sprite_scale,
        );

        canvas.draw_text_ex(
            font,
            HINT_LABEL,
            Vector2 { x: 10.0, y: 10.0 },
            20.0,
            0.2,
            Color::GRAY,
        );

        if self.show_hint {
            let panel_y = viewport.height_f32() * 0.10;
            // grow the panel if the message is taller than a tenth of the screen
            let text_h = canvas.measure_text_ex(font, HINT_MESSAGE, 20.0, 0.0).y;
            canvas.draw_rectangle(
                0,
                panel_y as i32,
                viewport.w,
                panel_y.max(text_h) as i32,
                HINT_PANEL_COLOR,
            );
            canvas.draw_text_ex(
                font,
                HINT_MESSAGE,
                Vector2 { x: 10.0, y: panel_y },
                20.0,
                0.0,
                Color::YELLOW,
            );
        }
    }

    pub fn take_transition_request(&mut self) -> Option<SceneKind> {
        self.next.take()
    }

    pub fn animator(&self) -> &SpriteAnimator {
        &self.animator
    }

    pub fn background(&self) -> &ScrollingBackground {
        &self.background
    }

    pub fn animation_state(&self) -> AnimationState {
        self.anim_state
    }

    pub fn is_teleport_locked(&self) -> bool {
        self.teleport_locked
    }

    pub fn is_hint_visible(&self) -> bool {
        self.show_hint
    }

    pub fn is_facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn is_walking(&self) -> bool {
        self.walking
    }
}
