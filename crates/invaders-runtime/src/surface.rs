//! Capabilities the game loop calls into but does not implement

use invaders_core::{Rect, Size};
use std::time::Duration;

/// Anything drawable that knows its own pixel dimensions
pub trait SpriteSource {
    fn size(&self) -> Size;
}

/// A draw target that can blit textures and present a finished frame.
///
/// Drawing is infallible from the loop's point of view: an implementation
/// that hits a transient surface error drops the frame itself.
pub trait Canvas {
    type Texture: SpriteSource;

    /// Start a frame by clearing the target
    fn clear(&mut self);

    /// Copy the `src` region of `texture` into `dst` (pixel rects)
    fn draw(&mut self, texture: &Self::Texture, src: Rect, dst: Rect);

    /// Show everything drawn since `clear`, in draw order
    fn present(&mut self);
}

/// Blocks the calling thread between frames
pub trait FramePacer {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread for the full duration
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl FramePacer for ThreadPacer {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
