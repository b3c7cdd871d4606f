use crate::utilities::elevator_status::CycleOutput;
use crate::utilities::error::Error;
use crate::utilities::request::{Floor, Request};

/// Everything the driver supplies for one cycle.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CycleInput {
    pub request: Request,
    pub reset: bool,
}

impl CycleInput {
    pub fn idle() -> Self {
        CycleInput::default()
    }

    pub fn reset() -> Self {
        CycleInput { request: Request::none(), reset: true }
    }

    pub fn request(floor: i32) -> Self {
        CycleInput { request: Request::to(floor), reset: false }
    }

    /// Parses one line of the interactive command language.
    ///
    /// `Ok(None)` means the operator asked to stop.
    pub fn parse_command(line: &str) -> Result<Option<Self>, Error> {
        let command = line.trim();
        match command.to_ascii_lowercase().as_str() {
            "" | "-" | "idle" => return Ok(Some(CycleInput::idle())),
            "r" | "reset" => return Ok(Some(CycleInput::reset())),
            "q" | "quit" => return Ok(None),
            _ => (),
        }

        let (floor, valid) = match command.strip_prefix('!') {
            Some(rest) => (rest.trim(), false),
            None => (command, true),
        };
        match floor.parse::<i32>() {
            Ok(floor) => Ok(Some(CycleInput { request: Request { floor, valid }, reset: false })),
            Err(_) => Err(Error::Command(command.to_string())),
        }
    }
}

/// One step of the controller as seen from outside.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleRecord {
    pub cycle: u64,
    pub input: CycleInput,
    pub output: CycleOutput,
    pub target: Option<Floor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_floor_requests() {
        assert_eq!(CycleInput::parse_command("3").unwrap(), Some(CycleInput::request(3)));
        assert_eq!(CycleInput::parse_command("  12 \n").unwrap(), Some(CycleInput::request(12)));
        // range is the controller's business, not the parser's
        assert_eq!(CycleInput::parse_command("0").unwrap(), Some(CycleInput::request(0)));
        assert_eq!(CycleInput::parse_command("-4").unwrap(), Some(CycleInput::request(-4)));
    }

    #[test]
    fn parses_unflagged_request() {
        let input = CycleInput::parse_command("!7").unwrap().unwrap();
        assert_eq!(input.request, Request { floor: 7, valid: false });
        assert!(!input.reset);
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(CycleInput::parse_command("").unwrap(), Some(CycleInput::idle()));
        assert_eq!(CycleInput::parse_command("-").unwrap(), Some(CycleInput::idle()));
        assert_eq!(CycleInput::parse_command("IDLE").unwrap(), Some(CycleInput::idle()));
        assert_eq!(CycleInput::parse_command("r").unwrap(), Some(CycleInput::reset()));
        assert_eq!(CycleInput::parse_command("Reset").unwrap(), Some(CycleInput::reset()));
        assert_eq!(CycleInput::parse_command("quit").unwrap(), None);
        assert_eq!(CycleInput::parse_command("q").unwrap(), None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(CycleInput::parse_command("up"), Err(Error::Command(_))));
        assert!(matches!(CycleInput::parse_command("!"), Err(Error::Command(_))));
        assert!(matches!(CycleInput::parse_command("3.5"), Err(Error::Command(_))));
    }

    #[test]
    fn script_entries_default_missing_fields() {
        let inputs: Vec<CycleInput> = serde_json::from_str(
            r#"[{"reset": true}, {"request": {"floor": 3, "valid": true}}, {}]"#,
        )
        .unwrap();
        assert_eq!(inputs, vec![CycleInput::reset(), CycleInput::request(3), CycleInput::idle()]);
    }
}
