//! Glue between the minute/second input fields and the engine.

use std::cell::Cell;
use std::rc::Rc;

use super::engine::CountdownEngine;
use super::input::clamp_inputs;
use super::scheduler::Scheduler;

/// A button press or shortcut aimed at the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownCommand {
    Start,
    Pause,
    /// Start when idle, pause when running.
    Toggle,
    Reset,
}

pub struct CountdownController<S: Scheduler> {
    engine: CountdownEngine<S>,
    minutes_input: String,
    seconds_input: String,
    /// Length of the countdown last loaded from the inputs
    loaded_seconds: Rc<Cell<u32>>,
}

impl<S: Scheduler> CountdownController<S> {
    /// Wrap `engine` and load the given input text into it.
    pub fn new(
        engine: CountdownEngine<S>,
        minutes_input: impl Into<String>,
        seconds_input: impl Into<String>,
    ) -> Self {
        let mut controller = Self {
            engine,
            minutes_input: minutes_input.into(),
            seconds_input: seconds_input.into(),
            loaded_seconds: Rc::new(Cell::new(0)),
        };
        controller.load_from_inputs();
        controller
    }

    pub fn engine(&self) -> &CountdownEngine<S> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CountdownEngine<S> {
        &mut self.engine
    }

    pub fn minutes_input(&self) -> &str {
        &self.minutes_input
    }

    pub fn seconds_input(&self) -> &str {
        &self.seconds_input
    }

    /// Both text fields, for editing in place.
    pub fn inputs_mut(&mut self) -> (&mut String, &mut String) {
        (&mut self.minutes_input, &mut self.seconds_input)
    }

    pub fn loaded_seconds(&self) -> u32 {
        self.loaded_seconds.get()
    }

    /// Shared view of [`loaded_seconds`](Self::loaded_seconds) for the
    /// completion callback, which cannot borrow the controller.
    pub fn loaded_seconds_handle(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.loaded_seconds)
    }

    pub fn apply(&mut self, command: CountdownCommand) {
        match command {
            CountdownCommand::Start => self.start(),
            CountdownCommand::Pause => self.engine.pause(),
            CountdownCommand::Toggle if self.engine.is_running() => self.engine.pause(),
            CountdownCommand::Toggle => self.start(),
            CountdownCommand::Reset => {
                self.engine.pause();
                self.load_from_inputs();
            }
        }
    }

    /// Normalise the input fields and load them into the engine.
    pub fn load_from_inputs(&mut self) {
        let inputs = clamp_inputs(&self.minutes_input, &self.seconds_input);
        self.minutes_input = inputs.minutes_text();
        self.seconds_input = inputs.seconds_text();
        self.engine.set(i64::from(inputs.total_seconds()));
        self.loaded_seconds.set(inputs.total_seconds());
    }

    fn start(&mut self) {
        if !self.engine.is_running() && self.engine.remaining() == 0 {
            let inputs = clamp_inputs(&self.minutes_input, &self.seconds_input);
            if inputs.total_seconds() > 0 {
                self.load_from_inputs();
            }
        }
        self.engine.start();
    }
}
