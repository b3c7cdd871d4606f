use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::utilities::cycle::CycleRecord;
use crate::utilities::request::{Floor, MAX_FLOOR};

const SHAFT_ROWS: u16 = MAX_FLOOR as u16;
// shaft header, two lines per floor, spacer, state machine table
pub const STATUS_SIZE: u16 = 4 + 2 * SHAFT_ROWS + 3 + 15;

pub struct Debug<W: Write> {
    out: W,
    drawn: bool,
}

impl<W: Write> Debug<W> {
    pub fn new(out: W) -> Self {
        Debug { out, drawn: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn printstatus(&mut self, record: &CycleRecord) -> io::Result<()> {
        if self.drawn {
            self.out.queue(cursor::MoveUp(STATUS_SIZE))?;
            self.out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }
        self.drawn = true;

        let output = record.output;
        writeln!(self.out, "+-------------------------+")?;
        writeln!(self.out, "| SHAFT                   |")?;
        writeln!(self.out, "+------------+------------+")?;
        writeln!(self.out, "| {0:<10} | {1:<10} |", "FLOOR", "CAR")?;
        for floor in (1..=SHAFT_ROWS as Floor).rev() {
            writeln!(self.out, "+------------+------------+")?;
            let car = shaft_marker(floor, output.floor, record.target);
            writeln!(self.out, "| {0:<10} | {1:<10} |", floor, car)?;
        }
        writeln!(self.out, "+------------+------------+\n\n")?;

        writeln!(self.out, "+-------------------------+")?;
        writeln!(self.out, "| STATE MACHINE           |")?;
        writeln!(self.out, "+------------+------------+")?;
        writeln!(self.out, "| {0:<10} | {1:<10} |", "CYCLE", record.cycle)?;
        writeln!(self.out, "+------------+------------+")?;
        writeln!(self.out, "| {0:<10} | {1:<10} |", "STATE", output.state.as_string())?;
        writeln!(self.out, "+------------+------------+")?;
        writeln!(self.out, "| {0:<10} | {1:<10} |", "FLOOR", output.floor)?;
        writeln!(self.out, "+------------+------------+")?;
        writeln!(self.out, "| {0:<10} | {1:<10} |", "DIRECTION", output.direction.as_string())?;
        writeln!(self.out, "+------------+------------+")?;
        let target = record.target.map_or(String::from("none"), |t| t.to_string());
        writeln!(self.out, "| {0:<10} | {1:<10} |", "TARGET", target)?;
        writeln!(self.out, "+------------+------------+")?;
        writeln!(self.out, "| {0:<10} | {1:<10} |", "ACCEPTED", output.accepted)?;
        writeln!(self.out, "+------------+------------+")?;

        self.out.flush()
    }
}

fn shaft_marker(floor: Floor, car: Floor, target: Option<Floor>) -> &'static str {
    if floor == car {
        "[#]"
    } else if target == Some(floor) {
        "[ ]"
    } else {
        ""
    }
}
