//! Per-scene state types.
//!
//! Submodules overview:
//! - [`animator`] – sprite-sheet playback and the animation clip table
//! - [`background`] – horizontally wrapping background and fit modes

pub mod animator;
pub mod background;
