use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::thread;

use crossbeam_channel::unbounded;
use tracing::{debug, info};

use crate::utilities::config::Config;
use crate::utilities::cycle::{CycleInput, CycleRecord};
use crate::utilities::debug::Debug;
use crate::utilities::error::Error;
use crate::utilities::trace::{Trace, TraceSummary};

use inputs::InputSource;

pub mod fsm;
pub mod inputs;

pub fn load_script(path: &Path) -> Result<Vec<CycleInput>, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ScriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| Error::ScriptParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs the controller until its input is exhausted, drawing the status
/// table to stdout when enabled.
pub fn run(config: &Config) -> Result<TraceSummary, Error> {
    let status_out = if config.show_status { Some(io::stdout()) } else { None };
    run_with(config, status_out)
}

pub fn run_with<W: Write>(config: &Config, status_out: Option<W>) -> Result<TraceSummary, Error> {
    // SELECT INPUT SOURCE
    let source = match &config.script {
        Some(path) => {
            let script = load_script(path)?;
            info!(path = %path.display(), cycles = script.len(), "replaying script");
            InputSource::Script(script)
        },
        None => {
            info!("reading commands from stdin (floor number, !floor, reset, idle, quit)");
            let (command_tx, command_rx) = unbounded();
            // never joined, it may still be blocked on stdin at shutdown
            thread::Builder::new()
                .name("commands".to_string())
                .spawn(move || inputs::read_commands(io::stdin().lock(), command_tx))
                .map_err(|source| Error::ThreadSpawn { name: "commands", source })?;
            InputSource::Commands(command_rx)
        },
    };

    // INITIALIZE CHANNELS
    let (cycle_tx, cycle_rx) = unbounded::<CycleInput>();
    let (record_tx, record_rx) = unbounded::<CycleRecord>();

    // INITIALIZE THREAD FOR CYCLE CLOCK
    let period = config.cycle_period;
    let settle_cycles = config.settle_cycles;
    let inputs_handle = thread::Builder::new()
        .name("inputs".to_string())
        .spawn(move || inputs::main(period, source, settle_cycles, cycle_tx))
        .map_err(|source| Error::ThreadSpawn { name: "inputs", source })?;

    // INITIALIZE THREAD FOR STATE MACHINE
    let fsm_handle = thread::Builder::new()
        .name("fsm".to_string())
        .spawn(move || fsm::main(cycle_rx, record_tx))
        .map_err(|source| Error::ThreadSpawn { name: "fsm", source })?;

    info!(period_ms = period.as_millis() as u64, settle_cycles, "elevator started");

    let mut status = status_out.map(Debug::new);
    let mut trace = Trace::new();

    for record in record_rx.iter() {
        log_cycle(&record);
        if let Some(status) = status.as_mut() {
            status.printstatus(&record).map_err(Error::Terminal)?;
        }
        trace.push(record);
    }

    inputs_handle.join().map_err(|_| Error::ThreadPanicked("inputs"))?;
    fsm_handle.join().map_err(|_| Error::ThreadPanicked("fsm"))?;

    if let Some(path) = &config.trace_path {
        trace.write_json(path)?;
        info!(path = %path.display(), "trace written");
    }

    let summary = trace.summary();
    info!(
        cycles = summary.cycles,
        accepted = summary.accepted,
        rejected = summary.rejected,
        resets = summary.resets,
        floors_travelled = summary.floors_travelled,
        arrivals = summary.arrivals,
        final_floor = summary.final_floor,
        "elevator stopped"
    );
    Ok(summary)
}

fn log_cycle(record: &CycleRecord) {
    let input = record.input;
    let output = record.output;
    if input.reset {
        debug!(cycle = record.cycle, "reset");
    } else if input.request.valid && !output.accepted {
        debug!(cycle = record.cycle, floor = input.request.floor, "request rejected");
    } else if output.accepted {
        debug!(cycle = record.cycle, floor = input.request.floor, direction = %output.direction, "request accepted");
    }
    debug!(
        cycle = record.cycle,
        floor = output.floor,
        state = %output.state,
        direction = %output.direction,
        accepted = output.accepted,
        "cycle"
    );
}
