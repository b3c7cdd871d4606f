/// Car position. Always within `0..=MAX_FLOOR`.
pub type Floor = u8;

/// Floor the car starts at and returns to on reset.
pub const HOME_FLOOR: Floor = 1;
/// Floor 0 exists on the position port but can never be requested.
pub const MIN_REQUEST_FLOOR: i32 = 1;
pub const MAX_FLOOR: i32 = 15;

/// What the driver puts on the request port for one cycle.
///
/// `floor` is taken as-is from the driver and is only range-checked when the
/// controller decides whether to accept it.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Request {
    pub floor: i32,
    pub valid: bool,
}

impl Request {
    pub fn to(floor: i32) -> Self {
        Request { floor, valid: true }
    }

    pub fn none() -> Self {
        Request::default()
    }

    /// The requested floor, if it lies within the requestable range.
    pub fn requestable_floor(&self) -> Option<Floor> {
        if (MIN_REQUEST_FLOOR..=MAX_FLOOR).contains(&self.floor) {
            Floor::try_from(self.floor).ok()
        } else {
            None
        }
    }
}
