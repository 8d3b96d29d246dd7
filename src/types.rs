//! Core types for the elevator environment.
//!
//! Defines travel directions and the discrete per-elevator action set
//! used throughout the simulation.

use std::fmt;

/// Direction of a passenger request or elevator movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Returns the direction of travel from `from` toward `to`.
    ///
    /// The two floors must differ; a passenger's destination is never
    /// their arrival floor.
    pub fn between(from: usize, to: usize) -> Direction {
        debug_assert_ne!(from, to, "no direction between a floor and itself");
        if to > from {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Returns both directions in order.
    pub fn all() -> [Direction; 2] {
        [Direction::Up, Direction::Down]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// One discrete action for a single elevator in a single timestep.
///
/// Every action is always structurally legal. An action whose
/// precondition does not hold (moving up at the top of the car's range,
/// loading from an empty queue, unloading with no matching passengers)
/// is a silent no-op, never an error, so agents may explore the full
/// action space freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Do nothing and remain at the current floor.
    Idle,
    /// Move up one floor, clamped to the elevator's top floor.
    MoveUp,
    /// Move down one floor, clamped to the elevator's bottom floor.
    MoveDown,
    /// Board passengers from the up queue at the current floor,
    /// earliest-arrived first, until the queue empties or the car fills.
    LoadUp,
    /// Board passengers from the down queue at the current floor,
    /// earliest-arrived first, until the queue empties or the car fills.
    LoadDown,
    /// Release every passenger whose destination is the current floor.
    Unload,
}

impl Action {
    /// Number of distinct actions.
    pub const COUNT: usize = 6;

    /// Returns the wire code of this action (0..=5).
    pub fn code(&self) -> u8 {
        match self {
            Action::Idle => 0,
            Action::MoveUp => 1,
            Action::MoveDown => 2,
            Action::LoadUp => 3,
            Action::LoadDown => 4,
            Action::Unload => 5,
        }
    }

    /// Decodes an action from its wire code. Codes above 5 are not part
    /// of the action space and yield `None`.
    pub fn from_code(code: u8) -> Option<Action> {
        match code {
            0 => Some(Action::Idle),
            1 => Some(Action::MoveUp),
            2 => Some(Action::MoveDown),
            3 => Some(Action::LoadUp),
            4 => Some(Action::LoadDown),
            5 => Some(Action::Unload),
            _ => None,
        }
    }

    /// Returns all actions in code order.
    pub fn all() -> [Action; Action::COUNT] {
        [
            Action::Idle,
            Action::MoveUp,
            Action::MoveDown,
            Action::LoadUp,
            Action::LoadDown,
            Action::Unload,
        ]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Idle => write!(f, "idle"),
            Action::MoveUp => write!(f, "move_up"),
            Action::MoveDown => write!(f, "move_down"),
            Action::LoadUp => write!(f, "load_up"),
            Action::LoadDown => write!(f, "load_down"),
            Action::Unload => write!(f, "unload"),
        }
    }
}
