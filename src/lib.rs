//! Scrollwalk library.
//!
//! This module exposes the demo's components, resources, scenes, and systems
//! for use in integration tests and by the binary.
//!
//! The module names follow an ECS layout but there is no ECS here: they are
//! plain modules. `components` holds per-scene state machines, `resources`
//! holds frame-wide data and the asset/config seams, and `systems` holds the
//! raylib-facing input poll and draw collaborator.

pub mod components;
pub mod game;
pub mod resources;
pub mod scenes;
pub mod systems;
