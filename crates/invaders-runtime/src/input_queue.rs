//! Window events buffered until the next poll phase

use crate::event::InputEvent;

/// Events gathered from window callbacks between two frames.
///
/// Once a `Quit` is queued nothing more is accepted: the poll phase stops at
/// the quit anyway, so later key events could never reach the input flags.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
    quit_queued: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next frame. Returns `false` if it was dropped
    /// because a quit is already pending.
    pub fn push(&mut self, event: InputEvent) -> bool {
        if self.quit_queued {
            return false;
        }
        self.quit_queued = event == InputEvent::Quit;
        self.pending.push(event);
        true
    }

    /// Hand over everything queued since the last frame, in arrival order
    pub fn take_frame(&mut self) -> Vec<InputEvent> {
        self.quit_queued = false;
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;

    #[test]
    fn test_frame_keeps_arrival_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::KeyDown(Action::MoveRight));
        queue.push(InputEvent::KeyDown(Action::MoveLeft));
        queue.push(InputEvent::KeyUp(Action::MoveRight));

        assert_eq!(
            queue.take_frame(),
            vec![
                InputEvent::KeyDown(Action::MoveRight),
                InputEvent::KeyDown(Action::MoveLeft),
                InputEvent::KeyUp(Action::MoveRight),
            ]
        );
        assert!(queue.take_frame().is_empty());
    }

    #[test]
    fn test_events_after_quit_are_dropped() {
        let mut queue = InputQueue::new();
        assert!(queue.push(InputEvent::KeyDown(Action::MoveLeft)));
        assert!(queue.push(InputEvent::Quit));
        assert!(!queue.push(InputEvent::KeyUp(Action::MoveLeft)));
        assert!(!queue.push(InputEvent::Quit));

        assert_eq!(
            queue.take_frame(),
            vec![InputEvent::KeyDown(Action::MoveLeft), InputEvent::Quit]
        );

        // A new frame accepts events again
        assert!(queue.push(InputEvent::KeyDown(Action::MoveRight)));
    }
}
