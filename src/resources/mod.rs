//! Long-lived data shared across the frame loop.
//!
//! Overview
//! - `assets` – asset loading collaborator and owned texture handles
//! - `gameconfig` – settings read from `config.ini`
//! - `input` – per-frame keyboard state of keys relevant to the demo
//! - `scenestate` – scene identity and pending transition requests
//! - `screensize` – current framebuffer dimensions in pixels
pub mod assets;
pub mod gameconfig;
pub mod input;
pub mod scenestate;
pub mod screensize;
