//! Per-frame keyboard input.
//!
//! Captures the keys the demo reacts to and exposes them to scenes via
//! [`InputState`]. Arrow keys walk; letter keys trigger one-shot actions
//! and are read through `just_pressed`.
use raylib::prelude::KeyboardKey;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    /// Unpressed state bound to `key`.
    pub fn bound_to(key: KeyboardKey) -> Self {
        Self {
            key_binding: key,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Keyboard state relevant to the scenes.
#[derive(Debug, Clone)]
pub struct InputState {
    pub walk_left: BoolState,
    pub walk_right: BoolState,
    /// Start the dash/teleport animation.
    pub teleport: BoolState,
    /// Show the dialogue hint overlay.
    pub show_hint: BoolState,
    /// Toggle between gameplay and menu.
    pub switch_scene: BoolState,
    pub quit: BoolState,
    /// Logs a line; handy to check the key loop is alive.
    pub debug_probe: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            walk_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            walk_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            teleport: BoolState::bound_to(KeyboardKey::KEY_S),
            show_hint: BoolState::bound_to(KeyboardKey::KEY_R),
            switch_scene: BoolState::bound_to(KeyboardKey::KEY_E),
            quit: BoolState::bound_to(KeyboardKey::KEY_Q),
            debug_probe: BoolState::bound_to(KeyboardKey::KEY_A),
        }
    }
}

impl InputState {
    /// All bindings, for polling.
    pub fn states_mut(&mut self) -> [&mut BoolState; 7] {
        [
            &mut self.walk_left,
            &mut self.walk_right,
            &mut self.teleport,
            &mut self.show_hint,
            &mut self.switch_scene,
            &mut self.quit,
            &mut self.debug_probe,
        ]
    }
}
