//! Input mapping from raw events to semantic actions
//!
//! The window itself is the main input device (dragged by the OS title bar),
//! so only a handful of keys are mapped here.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Rebuild the scene from scratch (R key)
    ResetScene,
    /// Pause or resume the simulation (Space)
    TogglePause,
    /// Advance one step while paused (Period)
    StepOnce,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unmapped keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetScene),
            KeyCode::Space => Some(InputAction::TogglePause),
            KeyCode::Period => Some(InputAction::StepOnce),
            _ => None,
        }
    }
}
