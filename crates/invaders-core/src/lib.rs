//! Invaders Core - Foundational types for Recurse Invaders
//!
//! This crate provides the types that every other crate depends on:
//! - `Position`, `Size`, `Rect` - Integer screen-space geometry
//! - `Color` - Clear color for the renderer
//! - Screen dimensions and window title
//! - Error types and Result alias

mod error;
mod types;

pub use error::{InvadersError, Result};
pub use types::{Color, Position, Rect, Size, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
