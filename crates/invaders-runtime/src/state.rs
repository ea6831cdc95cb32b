//! Simulation state and the loop's two-state machine

use crate::entity::{clamp_x, Enemy, Player};
use crate::input::InputState;
use invaders_core::SCREEN_WIDTH;

/// Lifecycle of the game loop.
///
/// The only transition is `Running` → `Terminated`, taken when a quit event
/// is polled. There is no pause or menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// The single player and single enemy, mutated in place every frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub player: Player,
    pub enemy: Enemy,
    screen_width: i32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: Player::default(),
            enemy: Enemy::default(),
            screen_width: SCREEN_WIDTH,
        }
    }

    /// Run one update step.
    ///
    /// Movement is additive, so holding both directions nets zero. Only `x`
    /// is ever written; both entities end the step inside the screen.
    pub fn update(&mut self, input: &InputState, elapsed: f32) {
        if input.move_left_held() {
            self.player.position.x -= self.player.speed;
        }
        if input.move_right_held() {
            self.player.position.x += self.player.speed;
        }

        self.enemy.position.x = self.enemy.target_x(elapsed, self.screen_width);

        clamp_x(&mut self.player.position, self.player.size, self.screen_width);
        clamp_x(&mut self.enemy.position, self.enemy.size, self.screen_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Action, InputEvent};

    fn held(actions: &[Action]) -> InputState {
        let mut input = InputState::new();
        for &action in actions {
            input.apply(InputEvent::KeyDown(action));
        }
        input
    }

    #[test]
    fn test_move_left_decreases_until_floor() {
        let mut state = GameState::new();
        state.player.position.x = 100;
        let input = held(&[Action::MoveLeft]);

        for n in 1..=25 {
            state.update(&input, 0.0);
            assert_eq!(state.player.position.x, 100 - n * 4);
        }

        // 25 * 4 = 100, so the floor has been reached exactly
        state.update(&input, 0.0);
        assert_eq!(state.player.position.x, 0);
    }

    #[test]
    fn test_move_right_stops_at_right_edge() {
        let mut state = GameState::new();
        let input = held(&[Action::MoveRight]);

        for _ in 0..500 {
            state.update(&input, 0.0);
        }
        assert_eq!(state.player.position.x, 640 - 64);
    }

    #[test]
    fn test_both_held_is_net_zero() {
        let mut state = GameState::new();
        state.player.position.x = 200;
        let input = held(&[Action::MoveLeft, Action::MoveRight]);

        for _ in 0..10 {
            state.update(&input, 0.0);
            assert_eq!(state.player.position.x, 200);
        }
    }

    #[test]
    fn test_y_never_changes() {
        let mut state = GameState::new();
        let input = held(&[Action::MoveLeft]);
        let mut t = 0.0;
        for _ in 0..300 {
            state.update(&input, t);
            t += 1.0 / 60.0;
            assert_eq!(state.player.position.y, 400);
            assert_eq!(state.enemy.position.y, 0);
        }
    }

    #[test]
    fn test_positions_stay_on_screen() {
        let mut state = GameState::new();
        let inputs = [
            held(&[]),
            held(&[Action::MoveLeft]),
            held(&[Action::MoveRight]),
            held(&[Action::MoveLeft, Action::MoveRight]),
        ];

        let mut t = 0.0f32;
        for frame in 0..2000 {
            let input = &inputs[(frame / 97) % inputs.len()];
            state.update(input, t);
            t += 1.0 / 60.0;

            assert!((0..=576).contains(&state.player.position.x));
            assert!((0..=576).contains(&state.enemy.position.x));
        }
    }

    #[test]
    fn test_enemy_ignores_input() {
        let mut a = GameState::new();
        let mut b = GameState::new();
        a.update(&held(&[]), 1.25);
        b.update(&held(&[Action::MoveRight]), 1.25);
        assert_eq!(a.enemy, b.enemy);
    }
}
