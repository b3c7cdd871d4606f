use std::fmt;

use crate::utilities::request::Floor;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Down,
    #[default]
    Idle,
    Up,
}

impl Direction {
    /// Output encoding of the direction port: down = -1, idle = 0, up = 1.
    pub fn code(self) -> i8 {
        match self {
            Direction::Down => -1,
            Direction::Idle => 0,
            Direction::Up => 1,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Direction::Down => String::from("down"),
            Direction::Idle => String::from("idle"),
            Direction::Up => String::from("up"),
        }
    }

    /// Direction of travel needed to get from `from` to `to`.
    pub fn toward(from: Floor, to: Floor) -> Self {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Idle
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}
