//! Open-loop simulation clock and frame statistics

use std::time::{Duration, Instant};

/// Fixed frame time in seconds (60 Hz)
pub const FRAME_TIME: f32 = 1.0 / 60.0;

/// Tracks simulation time.
///
/// The clock never measures wall-clock time: every frame advances it by
/// exactly [`FRAME_TIME`], however long the frame actually took. A slow frame
/// therefore makes the simulation run slower than real time.
///
/// Known limit: `elapsed` is an `f32`. The enemy's wave gets visibly coarser
/// after a few hours, and at 2^19 s (about 116 hours of play) adding one
/// frame no longer changes `elapsed`, so the enemy stops. `frame_count`
/// keeps counting.
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Total simulated time in seconds
    elapsed: f32,
    /// Fixed increment per frame in seconds
    frame_time: f32,
    /// Frames advanced so far
    frame_count: u64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            frame_time: FRAME_TIME,
            frame_count: 0,
        }
    }
}

impl GameClock {
    /// Create a clock at t = 0 with the 60Hz frame time
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one fixed frame. Call once per frame, after rendering.
    pub fn advance(&mut self) {
        self.elapsed += self.frame_time;
        self.frame_count += 1;
    }

    /// Total simulated time in seconds
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Frames advanced so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The wall-clock duration to sleep at the end of each frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f32(self.frame_time)
    }
}

/// Counts presented frames and reports a rate once per wall-clock second.
///
/// Purely observational; nothing here feeds back into [`GameClock`].
pub struct FrameStats {
    frames: u32,
    since: Instant,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frames: 0,
            since: Instant::now(),
        }
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame. Returns `(fps, average frame time)` when a second has passed.
    pub fn on_frame(&mut self) -> Option<(u32, Duration)> {
        self.on_frame_at(Instant::now())
    }

    fn on_frame_at(&mut self, now: Instant) -> Option<(u32, Duration)> {
        self.frames += 1;

        let window = now.duration_since(self.since);
        if window < Duration::from_secs(1) {
            return None;
        }

        let fps = self.frames;
        let per_frame = window / fps;
        self.frames = 0;
        self.since = now;

        Some((fps, per_frame))
    }
}
