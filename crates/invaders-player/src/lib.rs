//! Invaders Player - the game binary's library half
//!
//! Resolves the install root and asset paths, reads the optional config
//! file, and provides the `PlayerApp` winit handler that drives the game loop.

pub mod assets;
pub mod config;
mod player_app;

pub use assets::{install_root_from_exe, load_sprites, AssetPaths, ENEMY_ASSET, SHIP_ASSET};
pub use config::{AssetConfig, GameConfig, CONFIG_FILE};
pub use player_app::PlayerApp;
