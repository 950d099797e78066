//! Scrollwalk main entry point.
//!
//! A small 2D scene demo written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **configparser** for the optional `config.ini`
//!
//! A character stands over an endlessly scrolling background. Arrow keys walk,
//! `S` dashes, `R` shows a hint, `E` switches to the menu and back, `Q` quits.
//!
//! # Project Structure
//!
//! The logic lives in the `scrollwalk` library:
//! - `components` – animator and scrolling background state
//! - `game` – scene controller (top-level state machine)
//! - `resources` – input, config, assets, scene requests, screen size
//! - `scenes` – gameplay and menu scenes
//! - `systems` – raylib input polling and draw collaborator
//!
//! # Main Loop
//!
//! 1. Initialize raylib window, load font and the gameplay scene
//! 2. Each frame: poll input, step the controller (input, update, transition)
//! 3. Render the active scene inside raylib's drawing scope
//! 4. Stop on `Q` or when the window is closed
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use scrollwalk::game::SceneController;
use scrollwalk::resources::assets::RaylibAssets;
use scrollwalk::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use scrollwalk::resources::input::InputState;
use scrollwalk::resources::screensize::ScreenSize;
use scrollwalk::systems::input::update_input_state;

/// Scrollwalk, a scrolling background and sprite animation demo.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }

    if let Err(e) = run(config) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Closed");
}

fn run(config: GameConfig) -> Result<(), String> {
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title(&config.window_title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Q quits, not ESC
    rl.set_exit_key(None);

    let viewport = ScreenSize::new(rl.get_screen_width(), rl.get_screen_height());
    let mut controller = {
        let mut assets = RaylibAssets::new(&mut rl, &thread);
        SceneController::new(&mut assets, config, viewport)?
    };
    let mut input = InputState::default();

    // --------------- Main loop ---------------
    while controller.is_running() {
        if rl.window_should_close() {
            controller.request_quit();
            break;
        }

        update_input_state(&mut input, &rl);
        let dt = rl.get_frame_time();
        let viewport = ScreenSize::new(rl.get_screen_width(), rl.get_screen_height());
        {
            let mut assets = RaylibAssets::new(&mut rl, &thread);
            controller.step(&mut assets, &input, dt, viewport)?;
        }

        let mut d = rl.begin_drawing(&thread);
        controller.render(&mut d);
    }

    Ok(())
}
