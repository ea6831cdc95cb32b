//! Discrete input events consumed by the poll phase

/// A logical movement action. Only these two keys are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
}

/// An input event translated from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or the platform asked the process to exit
    Quit,
    /// A bound key went down
    KeyDown(Action),
    /// A bound key came up
    KeyUp(Action),
}
