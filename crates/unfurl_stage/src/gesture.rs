//! Pointer feedback states
//!
//! A small hover/press state machine, the interactive counterpart to
//! viewport-driven reveals. Each state maps onto one of the canonical
//! gesture transition states so a press mid-hover retargets the same
//! scale tween without jumping.

use unfurl_animation::{HOVER, IDLE, PRESS};

/// Host-reported pointer happenings for one element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerInput {
    Enter,
    Leave,
    Down,
    Up,
}

/// Hover/press state of one interactive element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PressState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

impl PressState {
    /// Transition on a pointer input, or `None` when the state holds
    ///
    /// `Down` straight from `Idle` is a touch press (no hover phase).
    pub fn on_input(&self, input: PointerInput) -> Option<Self> {
        match (self, input) {
            (PressState::Idle, PointerInput::Enter) => Some(PressState::Hovered),
            (PressState::Idle, PointerInput::Down) => Some(PressState::Pressed),
            (PressState::Hovered, PointerInput::Leave) => Some(PressState::Idle),
            (PressState::Hovered, PointerInput::Down) => Some(PressState::Pressed),
            (PressState::Pressed, PointerInput::Up) => Some(PressState::Hovered),
            (PressState::Pressed, PointerInput::Leave) => Some(PressState::Idle),
            _ => None,
        }
    }

    /// The transition state name this press state drives
    pub fn state_name(&self) -> &'static str {
        match self {
            PressState::Idle => IDLE,
            PressState::Hovered => HOVER,
            PressState::Pressed => PRESS,
        }
    }
}
