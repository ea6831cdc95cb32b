//! The two hardcoded entities and the pure functions that move them

use invaders_core::{Position, Size};

/// Map elapsed time onto [0, 1] with a sine wave
pub fn oscillator(elapsed: f32) -> f32 {
    (elapsed.sin() + 1.0) / 2.0
}

/// Restrict `position.x` to `[0, screen_width - size.width]`. `y` is untouched.
pub fn clamp_x(position: &mut Position, size: Size, screen_width: i32) {
    position.x = position.x.max(0);
    position.x = position.x.min(screen_width - size.width);
}

/// The keyboard-controlled ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub position: Position,
    pub size: Size,
    /// Horizontal pixels per frame while a direction is held
    pub speed: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Position::new(0, 400),
            size: Size::new(64, 64),
            speed: 4,
        }
    }
}

/// The enemy, whose x is a function of elapsed time alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub position: Position,
    pub size: Size,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            position: Position::ZERO,
            size: Size::new(64, 64),
        }
    }
}

impl Enemy {
    /// Horizontal target for the given elapsed time, truncated toward zero
    pub fn target_x(&self, elapsed: f32, screen_width: i32) -> i32 {
        let max_x = screen_width - self.size.width;
        (oscillator(elapsed) * max_x as f32) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillator_range() {
        let mut t = 0.0f32;
        while t < 20.0 {
            let v = oscillator(t);
            assert!((0.0..=1.0).contains(&v), "oscillator({t}) = {v}");
            t += 0.01;
        }
        assert!((oscillator(0.0) - 0.5).abs() < 1e-7);
        assert!((oscillator(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_x_bounds() {
        let size = Size::new(64, 64);

        let mut p = Position::new(-12, 400);
        clamp_x(&mut p, size, 640);
        assert_eq!(p, Position::new(0, 400));

        let mut p = Position::new(700, 400);
        clamp_x(&mut p, size, 640);
        assert_eq!(p, Position::new(576, 400));

        let mut p = Position::new(123, 7);
        clamp_x(&mut p, size, 640);
        assert_eq!(p, Position::new(123, 7));
    }

    #[test]
    fn test_initial_entities() {
        let player = Player::default();
        assert_eq!(player.position, Position::new(0, 400));
        assert_eq!(player.size, Size::new(64, 64));
        assert_eq!(player.speed, 4);

        let enemy = Enemy::default();
        assert_eq!(enemy.position, Position::ZERO);
        assert_eq!(enemy.size, Size::new(64, 64));
    }

    #[test]
    fn test_enemy_centered_at_time_zero() {
        let enemy = Enemy::default();
        assert_eq!(enemy.target_x(0.0, 640), 288);
    }
}
