//! Recurse Invaders - a ship, an enemy on a sine wave, and arrow keys
//!
//! Assets are read from `<install-root>/assets`, where the install root is
//! three path segments above the executable. An optional `invaders.toml`
//! in the install root can move the assets directory.
//!
//! Controls:
//!   Left/Right - Move
//!   Close      - Exit

use anyhow::{Context, Result};
use invaders_core::InvadersError;
use invaders_player::assets::current_install_root;
use invaders_player::{load_sprites, GameConfig, PlayerApp, CONFIG_FILE};
use winit::event_loop::{ControlFlow, EventLoop};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Everything owned by `run` is dropped before the exit status is set
    if let Err(err) = run() {
        log::error!("{}", failure_report(&err));
        std::process::exit(1);
    }

    log::info!("Exiting cleanly");
}

/// The error and its context chain on one line, reported once
fn failure_report(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

fn run() -> Result<()> {
    let install_root = current_install_root().context("Failed to resolve install root")?;
    let config =
        GameConfig::load(&install_root.join(CONFIG_FILE)).context("Failed to load config")?;
    let paths = config.asset_paths(&install_root);
    log::info!("Assets directory: {}", paths.assets_dir().display());

    let event_loop = EventLoop::new().map_err(|e| InvadersError::VideoInit(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Decode before any window exists
    let images = load_sprites(&paths, &config.assets).context("Failed to load sprites")?;

    let mut app = PlayerApp::new(images);
    event_loop
        .run_app(&mut app)
        .map_err(|e| InvadersError::VideoInit(e.to_string()))?;

    if let Some(err) = app.take_startup_error() {
        return Err(err).context("Failed to start");
    }

    Ok(())
}
