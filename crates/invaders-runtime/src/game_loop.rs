//! The per-frame poll → update → render → pace sequence

use crate::clock::GameClock;
use crate::event::InputEvent;
use crate::input::InputState;
use crate::state::{GameState, LoopState};
use crate::surface::{Canvas, FramePacer, SpriteSource};
use invaders_core::Rect;

/// The two loaded textures, owned by the loop for its whole lifetime
pub struct SpriteSet<T> {
    pub ship: T,
    pub enemy: T,
}

/// Owns the clock, input flags, entities and textures.
///
/// Driven one frame at a time by whatever owns the event queue. Once a quit
/// event has been polled the loop is `Terminated` and further frames are
/// no-ops.
pub struct GameLoop<T> {
    game: GameState,
    input: InputState,
    clock: GameClock,
    sprites: SpriteSet<T>,
    state: LoopState,
}

impl<T: SpriteSource> GameLoop<T> {
    pub fn new(sprites: SpriteSet<T>) -> Self {
        Self {
            game: GameState::new(),
            input: InputState::new(),
            clock: GameClock::new(),
            sprites,
            state: LoopState::Running,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The simulated entities
    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Drain pending events into the input flags.
    ///
    /// A quit event terminates immediately; anything queued behind it is
    /// discarded.
    pub fn poll<I>(&mut self, events: I) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if self.state == LoopState::Terminated {
            return self.state;
        }

        for event in events {
            if event == InputEvent::Quit {
                log::info!(
                    "Quit requested after {} frames ({:.2}s simulated)",
                    self.clock.frame_count(),
                    self.clock.elapsed()
                );
                self.state = LoopState::Terminated;
                return self.state;
            }
            self.input.apply(event);
        }

        self.state
    }

    /// Move the player from the held flags and place the enemy on its wave
    pub fn update(&mut self) {
        self.game.update(&self.input, self.clock.elapsed());
    }

    /// Clear, draw the ship then the enemy as full-texture blits, present
    pub fn render<C>(&self, canvas: &mut C)
    where
        C: Canvas<Texture = T>,
    {
        canvas.clear();

        let player = &self.game.player;
        canvas.draw(
            &self.sprites.ship,
            Rect::of_size(self.sprites.ship.size()),
            Rect::from_position_size(player.position, player.size),
        );

        let enemy = &self.game.enemy;
        canvas.draw(
            &self.sprites.enemy,
            Rect::of_size(self.sprites.enemy.size()),
            Rect::from_position_size(enemy.position, enemy.size),
        );

        canvas.present();
    }

    /// Advance simulated time by one frame and sleep for the same fixed duration
    pub fn pace<P: FramePacer>(&mut self, pacer: &mut P) {
        self.clock.advance();
        pacer.sleep(self.clock.frame_duration());
    }

    /// Run one full iteration. Returns the state after the poll phase; a
    /// terminated loop skips update, render and pacing.
    pub fn run_frame<I, C, P>(&mut self, events: I, canvas: &mut C, pacer: &mut P) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
        C: Canvas<Texture = T>,
        P: FramePacer,
    {
        if self.poll(events) == LoopState::Terminated {
            return LoopState::Terminated;
        }

        self.update();
        self.render(canvas);
        self.pace(pacer);

        LoopState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;
    use invaders_core::Size;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct FakeTexture {
        name: &'static str,
        size: Size,
    }

    impl SpriteSource for FakeTexture {
        fn size(&self) -> Size {
            self.size
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Clear,
        Draw(&'static str, Rect, Rect),
        Present,
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<Call>,
    }

    impl Canvas for RecordingCanvas {
        type Texture = FakeTexture;

        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn draw(&mut self, texture: &FakeTexture, src: Rect, dst: Rect) {
            self.calls.push(Call::Draw(texture.name, src, dst));
        }

        fn present(&mut self) {
            self.calls.push(Call::Present);
        }
    }

    #[derive(Default)]
    struct RecordingPacer {
        sleeps: Vec<Duration>,
    }

    impl FramePacer for RecordingPacer {
        fn sleep(&mut self, duration: Duration) {
            self.sleeps.push(duration);
        }
    }

    fn new_loop() -> GameLoop<FakeTexture> {
        GameLoop::new(SpriteSet {
            ship: FakeTexture {
                name: "ship",
                size: Size::new(32, 24),
            },
            enemy: FakeTexture {
                name: "enemy",
                size: Size::new(48, 48),
            },
        })
    }

    #[test]
    fn test_first_frame_draws_in_order() {
        let mut game_loop = new_loop();
        let mut canvas = RecordingCanvas::default();
        let mut pacer = RecordingPacer::default();

        let state = game_loop.run_frame(Vec::new(), &mut canvas, &mut pacer);
        assert_eq!(state, LoopState::Running);

        assert_eq!(
            canvas.calls,
            vec![
                Call::Clear,
                Call::Draw("ship", Rect::new(0, 0, 32, 24), Rect::new(0, 400, 64, 64)),
                Call::Draw("enemy", Rect::new(0, 0, 48, 48), Rect::new(288, 0, 64, 64)),
                Call::Present,
            ]
        );
        assert_eq!(pacer.sleeps, vec![game_loop.clock().frame_duration()]);
        assert_eq!(game_loop.clock().frame_count(), 1);
    }

    #[test]
    fn test_quit_skips_rest_of_frame() {
        let mut game_loop = new_loop();
        let mut canvas = RecordingCanvas::default();
        let mut pacer = RecordingPacer::default();

        let events = vec![
            InputEvent::KeyDown(Action::MoveRight),
            InputEvent::Quit,
            InputEvent::KeyDown(Action::MoveLeft),
        ];
        let state = game_loop.run_frame(events, &mut canvas, &mut pacer);

        assert_eq!(state, LoopState::Terminated);
        assert_eq!(game_loop.state(), LoopState::Terminated);
        assert!(canvas.calls.is_empty());
        assert!(pacer.sleeps.is_empty());
        assert_eq!(game_loop.clock().frame_count(), 0);

        // Event before the quit was applied, the one after was discarded
        assert!(game_loop.input().move_right_held());
        assert!(!game_loop.input().move_left_held());
    }

    #[test]
    fn test_terminated_loop_stays_terminated() {
        let mut game_loop = new_loop();
        let mut canvas = RecordingCanvas::default();
        let mut pacer = RecordingPacer::default();

        game_loop.run_frame(vec![InputEvent::Quit], &mut canvas, &mut pacer);
        let state = game_loop.run_frame(
            vec![InputEvent::KeyDown(Action::MoveLeft)],
            &mut canvas,
            &mut pacer,
        );

        assert_eq!(state, LoopState::Terminated);
        assert!(canvas.calls.is_empty());
        assert!(!game_loop.input().move_left_held());
    }

    #[test]
    fn test_quit_mid_session() {
        let mut game_loop = new_loop();
        let mut canvas = RecordingCanvas::default();
        let mut pacer = RecordingPacer::default();

        for _ in 0..5 {
            game_loop.run_frame(Vec::new(), &mut canvas, &mut pacer);
        }
        let before = game_loop.game().clone();
        let state = game_loop.run_frame(vec![InputEvent::Quit], &mut canvas, &mut pacer);

        assert_eq!(state, LoopState::Terminated);
        assert_eq!(pacer.sleeps.len(), 5);
        assert_eq!(game_loop.game(), &before);
    }

    #[test]
    fn test_held_flags_persist_across_frames() {
        let mut game_loop = new_loop();
        let mut canvas = RecordingCanvas::default();
        let mut pacer = RecordingPacer::default();

        game_loop.run_frame(
            vec![InputEvent::KeyDown(Action::MoveRight)],
            &mut canvas,
            &mut pacer,
        );
        for _ in 0..9 {
            game_loop.run_frame(Vec::new(), &mut canvas, &mut pacer);
        }
        assert_eq!(game_loop.game().player.position.x, 40);

        game_loop.run_frame(
            vec![InputEvent::KeyUp(Action::MoveRight)],
            &mut canvas,
            &mut pacer,
        );
        assert_eq!(game_loop.game().player.position.x, 40);
    }

    #[test]
    fn test_enemy_golden_trace() {
        let expected = [
            (0, 288),
            (1, 292),
            (2, 297),
            (10, 335),
            (30, 426),
            (60, 530),
            (120, 549),
            (180, 328),
            (300, 11),
        ];

        let trace = |game_loop: &mut GameLoop<FakeTexture>| {
            let mut canvas = RecordingCanvas::default();
            let mut pacer = RecordingPacer::default();
            let mut xs = Vec::new();
            for _ in 0..=300 {
                game_loop.run_frame(Vec::new(), &mut canvas, &mut pacer);
                xs.push(game_loop.game().enemy.position.x);
            }
            xs
        };

        let first = trace(&mut new_loop());
        for (frame, x) in expected {
            assert_eq!(first[frame], x, "enemy x at frame {frame}");
        }

        // Replaying with different input reproduces the same enemy path
        let mut other = new_loop();
        other.poll(vec![InputEvent::KeyDown(Action::MoveLeft)]);
        assert_eq!(trace(&mut other), first);
    }
}
