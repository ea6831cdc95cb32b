//! Invaders Render - wgpu-based 2D sprite renderer
//!
//! Decodes sprite images, uploads them as textures and blits them as
//! screen-space quads. `SpriteRenderer` is the `Canvas` the game loop draws
//! into.

mod context;
mod sprite;
mod sprite_pipeline;
mod sprite_renderer;

pub use context::{RenderContext, RenderError};
pub use sprite::{SpriteImage, SpriteTexture};
pub use sprite_pipeline::{SpriteDraw, SpritePipeline, SpriteUniforms};
pub use sprite_renderer::SpriteRenderer;
