//! Sprite-sheet animation state.
//!
//! A [`SpriteAnimator`] plays one row ("frame strip") of a sprite sheet at a
//! time. Which row, how many frames and how fast is decided by the active
//! [`AnimationState`] through a fixed clip table.
//!
//! # Frame flow
//!
//! 1. The owning scene calls [`SpriteAnimator::select_animation`] once per
//!    frame with the state it wants. Changing state restarts playback.
//! 2. [`SpriteAnimator::advance`] accumulates elapsed time and steps the frame
//!    index, wrapping inside the strip.
//! 3. [`SpriteAnimator::render`] draws the current cell, optionally mirrored.

use raylib::prelude::{Color, Rectangle, Vector2};

use crate::systems::render::Canvas;

/// Animations available on the character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    Walking,
    Teleporting,
    #[default]
    Idle,
}

/// Row, length and speed of one animation strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    pub row: usize,
    pub frame_count: usize,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
}

impl AnimationState {
    /// Clip played for this state.
    pub fn clip(self) -> AnimationClip {
        match self {
            AnimationState::Walking => AnimationClip {
                row: 0,
                frame_count: 9,
                frame_duration: 0.1,
            },
            AnimationState::Teleporting => AnimationClip {
                row: 13,
                frame_count: 12,
                frame_duration: 0.1,
            },
            AnimationState::Idle => AnimationClip {
                row: 3,
                frame_count: 8,
                frame_duration: 0.1,
            },
        }
    }
}

/// Playback state for a single animated sprite.
///
/// Invariant: `current_frame < frame_count` of the selected clip.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimator {
    pub frame_width: i32,
    pub frame_height: i32,
    state: AnimationState,
    row: usize,
    frame_count: usize,
    frame_duration: f32,
    current_frame: usize,
    timer: f32,
}

impl SpriteAnimator {
    /// Create an animator for a sheet of `frame_width` x `frame_height` cells,
    /// starting on the first frame of `state`.
    pub fn new(frame_width: i32, frame_height: i32, state: AnimationState) -> Self {
        let clip = state.clip();
        Self {
            frame_width,
            frame_height,
            state,
            row: clip.row,
            frame_count: clip.frame_count,
            frame_duration: clip.frame_duration,
            current_frame: 0,
            timer: 0.0,
        }
    }

    /// Switch to the clip for `state`.
    ///
    /// Selecting the state that is already active keeps the playback position.
    /// Any other state restarts from frame 0 so the index never points past a
    /// shorter strip.
    pub fn select_animation(&mut self, state: AnimationState) {
        let clip = state.clip();
        self.row = clip.row;
        self.frame_count = clip.frame_count;
        self.frame_duration = clip.frame_duration;
        if state != self.state {
            self.current_frame = 0;
            self.timer = 0.0;
            self.state = state;
        }
    }

    /// Advance playback by `delta` seconds.
    ///
    /// Steps one frame per elapsed `frame_duration`, so a long frame never
    /// leaves the timer above the threshold. Returns true if playback wrapped
    /// from the last frame back to frame 0.
    pub fn advance(&mut self, delta: f32) -> bool {
        self.timer += delta;
        let mut wrapped = false;
        while self.timer >= self.frame_duration {
            self.timer -= self.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.frame_count;
            wrapped |= self.current_frame == 0;
        }
        wrapped
    }

    pub fn is_on_last_frame(&self) -> bool {
        self.current_frame == self.frame_count - 1
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Region of the sheet holding the current frame.
    ///
    /// When not `facing_right` the width is negative, which raylib draws
    /// mirrored.
    pub fn source_rect(&self, facing_right: bool) -> Rectangle {
        let width = self.frame_width as f32;
        Rectangle {
            x: (self.current_frame as i32 * self.frame_width) as f32,
            y: (self.row as i32 * self.frame_height) as f32,
            width: if facing_right { width } else { -width },
            height: self.frame_height as f32,
        }
    }

    /// Screen rectangle for a sprite whose bottom-centre sits at `position`.
    pub fn dest_rect(&self, position: Vector2, scale: f32) -> Rectangle {
        let width = self.frame_width as f32 * scale;
        let height = self.frame_height as f32 * scale;
        Rectangle {
            x: position.x - width * 0.5,
            y: position.y - height,
            width,
            height,
        }
    }

    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        texture: &C::Texture,
        position: Vector2,
        facing_right: bool,
        scale: f32,
    ) {
        canvas.draw_texture_pro(
            texture,
            self.source_rect(facing_right),
            self.dest_rect(position, scale),
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }
}
