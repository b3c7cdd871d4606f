use crate::utilities::direction::Direction;
use crate::utilities::motion_state::MotionState;
use crate::utilities::request::{Floor, HOME_FLOOR};

/// State carried by the controller from one cycle to the next.
///
/// `target` is `Some` exactly while the car is `Moving`.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerState {
    pub floor: Floor,
    pub state: MotionState,
    pub direction: Direction,
    pub target: Option<Floor>,
}

impl ControllerState {
    pub fn new() -> Self {
        ControllerState {
            floor: HOME_FLOOR,
            state: MotionState::Idle,
            direction: Direction::Idle,
            target: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.state == MotionState::Idle && self.target.is_none()
    }

    pub fn output(&self, accepted: bool) -> CycleOutput {
        CycleOutput {
            floor: self.floor,
            state: self.state,
            direction: self.direction,
            accepted,
        }
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

/// The four output ports, sampled at the end of a cycle.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleOutput {
    pub floor: Floor,
    pub state: MotionState,
    pub direction: Direction,
    pub accepted: bool,
}
