/// ----- INPUTS MODULE -----
/// This module is the cycle clock. It decides what the controller sees
/// on its input ports each cycle, either from a prepared scenario or
/// from commands typed by an operator, and then lets the car settle.

use std::io::BufRead;
use std::time::Duration;

use crossbeam_channel::{tick, Receiver, Sender, TryRecvError};
use tracing::{debug, warn};

use crate::utilities::cycle::CycleInput;

pub enum InputSource {
    Script(Vec<CycleInput>),
    Commands(Receiver<CycleInput>),
}

pub fn main(
    period: Duration,
    source: InputSource,
    settle_cycles: u32,
    cycle_tx: Sender<CycleInput>,
) {
    let ticker = if period.is_zero() { None } else { Some(tick(period)) };
    let wait_for_tick = || {
        if let Some(ticker) = &ticker {
            let _ = ticker.recv();
        }
    };

    match source {
        InputSource::Script(inputs) => {
            for input in inputs {
                wait_for_tick();
                if cycle_tx.send(input).is_err() {
                    return;
                }
            }
        },
        InputSource::Commands(command_rx) => loop {
            let input = match &ticker {
                Some(ticker) => {
                    let _ = ticker.recv();
                    match command_rx.try_recv() {
                        Ok(input) => input,
                        Err(TryRecvError::Empty) => CycleInput::idle(),
                        Err(TryRecvError::Disconnected) => break,
                    }
                },
                None => match command_rx.recv() {
                    Ok(input) => input,
                    Err(_) => break,
                },
            };
            if cycle_tx.send(input).is_err() {
                return;
            }
        },
    }

    debug!(settle_cycles, "input exhausted, settling");
    for _ in 0..settle_cycles {
        wait_for_tick();
        if cycle_tx.send(CycleInput::idle()).is_err() {
            return;
        }
    }
}

pub fn read_commands<R: BufRead>(reader: R, command_tx: Sender<CycleInput>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("failed to read command: {}", e);
                return;
            }
        };
        match CycleInput::parse_command(&line) {
            Ok(Some(input)) => {
                if command_tx.send(input).is_err() {
                    return;
                }
            },
            Ok(None) => return,
            Err(e) => warn!("{}, skipping...", e),
        }
    }
}
