mod controller;
mod digit;
mod engine;
mod input;
mod scheduler;

pub use controller::{CountdownCommand, CountdownController};
pub use digit::{two_digits, DigitDisplay, FlipFaces};
pub use engine::{
    CountdownEngine, FinishCallback, PumpOutcome, TickOutcome, FINISH_PULSE, MAX_TOTAL_SECONDS,
    TICK_INTERVAL,
};
pub use input::{clamp_inputs, parse_int_lenient, ClampedInputs};
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler, TimerToken};
