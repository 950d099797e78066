//! Raylib glue.
//!
//! Submodules overview
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – the [`render::Canvas`] draw collaborator and its raylib implementation

pub mod input;
pub mod render;
