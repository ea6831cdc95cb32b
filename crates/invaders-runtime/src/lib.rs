//! Invaders Runtime - Game loop infrastructure
//!
//! Provides the core game loop building blocks:
//! - `GameClock` - open-loop fixed-timestep simulation clock
//! - `InputState` - held-flag tracking for the two movement actions
//! - `InputEvent` / `InputQueue` - discrete input events buffered between polls
//! - `GameState` - the player and enemy entities and their update rule
//! - `Canvas` / `FramePacer` - the drawing and sleeping capabilities the loop calls into
//! - `GameLoop` - poll, update, render, pace

mod clock;
mod entity;
mod event;
mod game_loop;
mod input;
mod input_queue;
mod state;
mod surface;

pub use clock::{FrameStats, GameClock, FRAME_TIME};
pub use entity::{clamp_x, oscillator, Enemy, Player};
pub use event::{Action, InputEvent};
pub use game_loop::{GameLoop, SpriteSet};
pub use input::{action_for_key, input_event, InputState};
pub use input_queue::InputQueue;
pub use state::{GameState, LoopState};
pub use surface::{Canvas, FramePacer, SpriteSource, ThreadPacer};
