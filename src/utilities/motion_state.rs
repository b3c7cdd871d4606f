use std::fmt;

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Moving,
    DoorOpen,
}

impl MotionState {
    /// Output encoding of the state port: idle = 0, moving = 1, door open = 2.
    pub fn code(self) -> u8 {
        match self {
            MotionState::Idle => 0,
            MotionState::Moving => 1,
            MotionState::DoorOpen => 2,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            MotionState::Idle => String::from("idle"),
            MotionState::Moving => String::from("moving"),
            MotionState::DoorOpen => String::from("doorOpen"),
        }
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}
