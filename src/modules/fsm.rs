/// ----- FSM MODULE -----
/// This module owns the elevator controller. It steps the controller
/// once for every cycle input it receives and reports the outcome of
/// each cycle. Inputs are handled strictly one at a time.

use crossbeam_channel::{Receiver, Sender};
use tracing::debug;

use crate::utilities::controller::Controller;
use crate::utilities::cycle::{CycleInput, CycleRecord};

pub fn main(
    cycle_rx: Receiver<CycleInput>,
    record_tx: Sender<CycleRecord>,
) {
    let mut controller = Controller::new();
    let mut cycle: u64 = 0;

    for input in cycle_rx.iter() {
        let output = controller.step(input.request, input.reset);
        let record = CycleRecord {
            cycle,
            input,
            output,
            target: controller.state().target,
        };
        if record_tx.send(record).is_err() {
            debug!(cycle, "record receiver gone, stopping state machine");
            return;
        }
        cycle += 1;
    }
}
