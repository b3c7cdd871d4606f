//! Single-car elevator controller.
//!
//! `step` is called once per cycle. Each call runs, in order, the reset path,
//! the request-acceptance path and then either the movement path or the door
//! path, all against the state left by the previous call.

use crate::utilities::direction::Direction;
use crate::utilities::elevator_status::{ControllerState, CycleOutput};
use crate::utilities::motion_state::MotionState;
use crate::utilities::request::{Floor, Request};

#[derive(Debug, Clone, Default)]
pub struct Controller {
    status: ControllerState,
}

impl Controller {
    pub fn new() -> Self {
        Controller { status: ControllerState::new() }
    }

    pub fn with_state(status: ControllerState) -> Self {
        Controller { status }
    }

    pub fn state(&self) -> &ControllerState {
        &self.status
    }

    pub fn into_state(self) -> ControllerState {
        self.status
    }

    pub fn reset(&mut self) {
        self.status = ControllerState::new();
    }

    /// Whether `request` would be accepted if submitted this cycle.
    pub fn would_accept(&self, request: &Request) -> bool {
        if !request.valid || !self.status.is_available() {
            return false;
        }
        match request.requestable_floor() {
            Some(floor) => floor != self.status.floor,
            None => false,
        }
    }

    pub fn step(&mut self, request: Request, reset: bool) -> CycleOutput {
        if reset {
            self.reset();
            return self.status.output(false);
        }

        let accepted = self.accept(&request);

        match (self.status.state, self.status.target) {
            (MotionState::Moving, Some(target)) => self.advance(target),
            (MotionState::DoorOpen, _) => self.status.state = MotionState::Idle,
            _ => (),
        }

        self.status.output(accepted)
    }

    fn accept(&mut self, request: &Request) -> bool {
        if !self.would_accept(request) {
            return false;
        }
        let Some(target) = request.requestable_floor() else {
            return false;
        };
        self.status.target = Some(target);
        self.status.direction = Direction::toward(self.status.floor, target);
        self.status.state = MotionState::Moving;
        true
    }

    fn advance(&mut self, target: Floor) {
        let direction = Direction::toward(self.status.floor, target);
        match direction {
            Direction::Up => self.status.floor += 1,
            Direction::Down => self.status.floor -= 1,
            Direction::Idle => (),
        }
        self.status.direction = direction;

        if self.status.floor == target {
            // arrived: doors open this cycle, close on the next
            self.status.state = MotionState::DoorOpen;
            self.status.direction = Direction::Idle;
            self.status.target = None;
        }
    }
}
