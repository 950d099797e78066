//! Input polling.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`InputState`](crate::resources::input::InputState).
use raylib::RaylibHandle;

use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update `input`.
pub fn update_input_state(input: &mut InputState, rl: &RaylibHandle) {
    for state in input.states_mut() {
        let key = state.key_binding;
        state.active = rl.is_key_down(key);
        state.just_pressed = rl.is_key_pressed(key);
    }
}
