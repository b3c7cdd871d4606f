use std::fs;
use std::path::Path;

use crate::utilities::cycle::CycleRecord;
use crate::utilities::error::Error;
use crate::utilities::motion_state::MotionState;
use crate::utilities::request::{Floor, HOME_FLOOR};

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TraceSummary {
    pub cycles: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub resets: u64,
    pub floors_travelled: u64,
    pub arrivals: u64,
    pub final_floor: Floor,
}

#[derive(serde::Serialize, Debug)]
struct TraceFile<'a> {
    records: &'a [CycleRecord],
    summary: TraceSummary,
}

/// Ordered log of every cycle the controller ran.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    records: Vec<CycleRecord>,
}

impl Trace {
    pub fn new() -> Self {
        Trace { records: Vec::new() }
    }

    pub fn push(&mut self, record: CycleRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[CycleRecord] {
        &self.records
    }

    pub fn summary(&self) -> TraceSummary {
        let mut summary = TraceSummary { final_floor: HOME_FLOOR, ..TraceSummary::default() };
        let mut previous_floor = HOME_FLOOR;

        for record in &self.records {
            summary.cycles += 1;
            let output = record.output;
            if record.input.reset {
                summary.resets += 1;
            } else {
                if output.accepted {
                    summary.accepted += 1;
                } else if record.input.request.valid {
                    summary.rejected += 1;
                }
                if output.floor != previous_floor {
                    summary.floors_travelled += 1;
                }
                if output.state == MotionState::DoorOpen {
                    summary.arrivals += 1;
                }
            }
            previous_floor = output.floor;
        }
        summary.final_floor = previous_floor;
        summary
    }

    pub fn write_json(&self, path: &Path) -> Result<(), Error> {
        let file = TraceFile { records: &self.records, summary: self.summary() };
        let contents = serde_json::to_string_pretty(&file)?;
        fs::write(path, contents).map_err(|source| Error::TraceWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
