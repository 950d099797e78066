//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides
//! defaults for safe startup, so a missing file or key is never an error for
//! the game itself.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 850
//! height = 400
//! title = Test
//! target_fps = 60
//!
//! [assets]
//! font = ./assets/MapleMono-NF-Regular.ttf
//! sprite_sheet = ./assets/char_black.png
//! background = ./assets/assets_bgrollin.jpg
//!
//! [gameplay]
//! scroll_speed = 180
//! sprite_scale = 0.5
//! dash_step = 5
//! background_fit = cover
//! ```

use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::background::BackgroundFit;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 850;
const DEFAULT_WINDOW_HEIGHT: u32 = 400;
const DEFAULT_WINDOW_TITLE: &str = "Test";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FONT_PATH: &str = "./assets/MapleMono-NF-Regular.ttf";
const DEFAULT_SPRITE_SHEET_PATH: &str = "./assets/char_black.png";
const DEFAULT_BACKGROUND_PATH: &str = "./assets/assets_bgrollin.jpg";
const DEFAULT_SCROLL_SPEED: f32 = 180.0;
const DEFAULT_SPRITE_SCALE: f32 = 0.5;
const DEFAULT_DASH_STEP: f32 = 5.0;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub window_title: String,
    /// Target frames per second.
    pub target_fps: u32,
    pub font_path: String,
    /// Character sheet, 128x128 cells.
    pub sprite_sheet_path: String,
    pub background_path: String,
    /// Background pixels per second while walking.
    pub scroll_speed: f32,
    pub sprite_scale: f32,
    /// Background pixels per frame during a dash.
    pub dash_step: f32,
    pub background_fit: BackgroundFit,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            font_path: DEFAULT_FONT_PATH.to_string(),
            sprite_sheet_path: DEFAULT_SPRITE_SHEET_PATH.to_string(),
            background_path: DEFAULT_BACKGROUND_PATH.to_string(),
            scroll_speed: DEFAULT_SCROLL_SPEED,
            sprite_scale: DEFAULT_SPRITE_SCALE,
            dash_step: DEFAULT_DASH_STEP,
            background_fit: BackgroundFit::Cover,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window '{}', fps={}, scroll_speed={}, sprite_scale={}, fit={:?}",
            self.window_width,
            self.window_height,
            self.window_title,
            self.target_fps,
            self.scroll_speed,
            self.sprite_scale,
            self.background_fit
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, contents: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "font") {
            self.font_path = path;
        }
        if let Some(path) = config.get("assets", "sprite_sheet") {
            self.sprite_sheet_path = path;
        }
        if let Some(path) = config.get("assets", "background") {
            self.background_path = path;
        }

        // [gameplay] section
        if let Some(speed) = positive_float(config, "scroll_speed", self.scroll_speed) {
            self.scroll_speed = speed;
        }
        if let Some(scale) = config.getfloat("gameplay", "sprite_scale").ok().flatten() {
            self.sprite_scale = scale as f32;
        }
        if let Some(step) = positive_float(config, "dash_step", self.dash_step) {
            self.dash_step = step;
        }
        if let Some(name) = config.get("gameplay", "background_fit") {
            match BackgroundFit::from_name(&name) {
                Some(fit) => self.background_fit = fit,
                None => warn!("Unknown background_fit '{}', keeping {:?}", name, self.background_fit),
            }
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Read a `[gameplay]` float that must be finite and above zero.
///
/// Out-of-range values are logged and ignored.
fn positive_float(config: &Ini, key: &str, current: f32) -> Option<f32> {
    let value = config.getfloat("gameplay", key).ok().flatten()? as f32;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        warn!("Invalid {} '{}', keeping {}", key, value, current);
        None
    }
}
