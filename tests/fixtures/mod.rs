// Test fixtures - reusable engine helpers
// Provides a manually clocked engine and tick helpers across test files

#![allow(dead_code)]

use flip_countdown::services::countdown::{CountdownEngine, ManualScheduler, PumpOutcome};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub const SECOND: Duration = Duration::from_secs(1);

/// Engine on a manual clock plus a counter of completion callbacks.
pub fn counting_engine() -> (CountdownEngine<ManualScheduler>, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    let engine = CountdownEngine::new(ManualScheduler::new())
        .with_on_finish(move || counter.set(counter.get() + 1));
    (engine, fired)
}

/// Advance the clock one second at a time, pumping after each step.
pub fn run_seconds(engine: &mut CountdownEngine<ManualScheduler>, seconds: u32) -> PumpOutcome {
    let mut total = PumpOutcome::default();
    for _ in 0..seconds {
        engine.scheduler_mut().advance(SECOND);
        let outcome = engine.pump();
        total.ticks += outcome.ticks;
        total.finished |= outcome.finished;
        total.pulse_ended |= outcome.pulse_ended;
    }
    total
}

/// Current "MM:SS" shown by the two cards.
pub fn shown(engine: &CountdownEngine<ManualScheduler>) -> String {
    format!(
        "{}:{}",
        engine.minutes_display().current_value(),
        engine.seconds_display().current_value()
    )
}
