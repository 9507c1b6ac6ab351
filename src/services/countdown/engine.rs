//! Countdown state machine driving the minutes and seconds flip cards.

use std::fmt;
use std::time::Duration;

use super::digit::DigitDisplay;
use super::input::parse_int_lenient;
use super::scheduler::{Scheduler, TimerToken};

/// Largest countdown the two cards can show (99:59).
pub const MAX_TOTAL_SECONDS: u32 = 99 * 60 + 59;
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);
/// How long the completion highlight stays on after reaching zero.
pub const FINISH_PULSE: Duration = Duration::from_millis(1200);

pub type FinishCallback = Box<dyn FnMut()>;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was not running.
    Ignored,
    Decremented,
    /// The countdown reached zero and the completion notice fired.
    Finished,
}

/// Summary of one [`CountdownEngine::pump`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpOutcome {
    pub ticks: u32,
    pub finished: bool,
    pub pulse_ended: bool,
}

pub struct CountdownEngine<S: Scheduler> {
    scheduler: S,
    total_seconds: u32,
    tick_token: Option<TimerToken>,
    pulse_token: Option<TimerToken>,
    minutes: DigitDisplay,
    seconds: DigitDisplay,
    on_finish: Option<FinishCallback>,
}

impl<S: Scheduler> CountdownEngine<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            total_seconds: 0,
            tick_token: None,
            pulse_token: None,
            minutes: DigitDisplay::new("MIN", 0),
            seconds: DigitDisplay::new("SEC", 0),
            on_finish: None,
        }
    }

    pub fn with_on_finish(mut self, callback: impl FnMut() + 'static) -> Self {
        self.set_on_finish(callback);
        self
    }

    pub fn set_on_finish(&mut self, callback: impl FnMut() + 'static) {
        self.on_finish = Some(Box::new(callback));
    }

    /// Begin ticking. Does nothing while already running or at zero.
    pub fn start(&mut self) {
        if self.is_running() || self.total_seconds == 0 {
            return;
        }
        self.tick_token = Some(self.scheduler.schedule(TICK_INTERVAL));
        log::debug!("countdown started at {}s", self.total_seconds);
    }

    /// Stop ticking and keep the remaining time. Idempotent.
    pub fn pause(&mut self) {
        if let Some(token) = self.tick_token.take() {
            self.scheduler.cancel(token);
            log::debug!("countdown paused at {}s", self.total_seconds);
        }
    }

    /// Halt the countdown without the completion notice.
    pub fn stop(&mut self) {
        self.pause();
    }

    /// Pause, then load `seconds` clamped into `0..=MAX_TOTAL_SECONDS` and
    /// re-render both cards immediately.
    pub fn set(&mut self, seconds: i64) {
        self.pause();
        // In range after the clamp, so the cast is lossless.
        self.total_seconds = seconds.clamp(0, i64::from(MAX_TOTAL_SECONDS)) as u32;
        self.render();
        log::debug!("countdown set to {}s", self.total_seconds);
    }

    /// [`set`](Self::set) from free-form text; malformed text loads zero.
    pub fn set_from_input(&mut self, text: &str) {
        self.set(parse_int_lenient(text));
    }

    pub fn is_running(&self) -> bool {
        self.tick_token.is_some()
    }

    pub fn remaining(&self) -> u32 {
        self.total_seconds
    }

    pub fn minutes_display(&self) -> &DigitDisplay {
        &self.minutes
    }

    pub fn seconds_display(&self) -> &DigitDisplay {
        &self.seconds
    }

    /// True while the completion highlight is showing.
    pub fn is_finishing_pulse(&self) -> bool {
        self.pulse_token.is_some()
    }

    /// Time until the next scheduled tick or pulse end.
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.scheduler.next_due_in()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The periodic tick callback.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        if self.total_seconds == 0 {
            self.finish();
            return TickOutcome::Finished;
        }

        self.total_seconds -= 1;
        self.render();

        if self.total_seconds == 0 {
            self.finish();
            TickOutcome::Finished
        } else {
            TickOutcome::Decremented
        }
    }

    /// Run every tick and pulse expiry that the scheduler reports as due.
    pub fn pump(&mut self) -> PumpOutcome {
        let mut outcome = PumpOutcome::default();

        if let Some(token) = self.pulse_token {
            if self.scheduler.poll(token) > 0 {
                self.scheduler.cancel(token);
                self.pulse_token = None;
                outcome.pulse_ended = true;
            }
        }

        if let Some(token) = self.tick_token {
            let due = self.scheduler.poll(token);
            for _ in 0..due {
                match self.tick() {
                    TickOutcome::Ignored => break,
                    TickOutcome::Decremented => outcome.ticks += 1,
                    TickOutcome::Finished => {
                        outcome.ticks += 1;
                        outcome.finished = true;
                        break;
                    }
                }
            }
        }

        outcome
    }

    fn render(&mut self) {
        let total = i64::from(self.total_seconds);
        self.minutes.update(total / 60);
        self.seconds.update(total % 60);
    }

    fn finish(&mut self) {
        self.pause();
        log::info!("countdown finished");

        if let Some(token) = self.pulse_token.take() {
            self.scheduler.cancel(token);
        }
        self.pulse_token = Some(self.scheduler.schedule(FINISH_PULSE));

        if let Some(callback) = self.on_finish.as_mut() {
            callback();
        }
    }
}

impl<S: Scheduler> Drop for CountdownEngine<S> {
    fn drop(&mut self) {
        if let Some(token) = self.tick_token.take() {
            self.scheduler.cancel(token);
        }
        if let Some(token) = self.pulse_token.take() {
            self.scheduler.cancel(token);
        }
    }
}

impl<S: Scheduler> fmt::Debug for CountdownEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownEngine")
            .field("total_seconds", &self.total_seconds)
            .field("running", &self.is_running())
            .field("minutes", &self.minutes.current_value())
            .field("seconds", &self.seconds.current_value())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::countdown::scheduler::{ManualScheduler, MockScheduler};
    use mockall::predicate::eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn engine_with_counter() -> (CountdownEngine<ManualScheduler>, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let engine = CountdownEngine::new(ManualScheduler::new())
            .with_on_finish(move || counter.set(counter.get() + 1));
        (engine, fired)
    }

    fn advance(engine: &mut CountdownEngine<ManualScheduler>, by: Duration) -> PumpOutcome {
        engine.scheduler_mut().advance(by);
        engine.pump()
    }

    #[test]
    fn set_clamps_and_renders_immediately() {
        let (mut engine, _) = engine_with_counter();
        engine.set(65);
        assert_eq!(engine.remaining(), 65);
        assert_eq!(engine.minutes_display().current_value(), "01");
        assert_eq!(engine.seconds_display().current_value(), "05");

        engine.set(10_000);
        assert_eq!(engine.remaining(), MAX_TOTAL_SECONDS);
        engine.set(-5);
        assert_eq!(engine.remaining(), 0);
    }

    #[test]
    fn start_at_zero_is_a_no_op() {
        let (mut engine, _) = engine_with_counter();
        engine.start();
        assert!(!engine.is_running());
        assert_eq!(engine.scheduler().scheduled_count(), 0);
    }

    #[test]
    fn set_pauses_a_running_countdown() {
        let (mut engine, _) = engine_with_counter();
        engine.set(30);
        engine.start();
        engine.set(20);
        assert!(!engine.is_running());
        assert_eq!(engine.scheduler().active_count(), 0);

        let outcome = advance(&mut engine, Duration::from_secs(3));
        assert_eq!(outcome.ticks, 0);
        assert_eq!(engine.remaining(), 20);
    }

    #[test]
    fn tick_after_pause_is_ignored() {
        let (mut engine, _) = engine_with_counter();
        engine.set(10);
        engine.start();
        engine.pause();
        assert_eq!(engine.tick(), TickOutcome::Ignored);
        assert_eq!(engine.remaining(), 10);
    }

    #[test]
    fn pump_decrements_once_per_second() {
        let (mut engine, fired) = engine_with_counter();
        engine.set(65);
        engine.start();

        let outcome = advance(&mut engine, Duration::from_secs(1));
        assert_eq!(outcome.ticks, 1);
        assert_eq!(engine.minutes_display().current_value(), "01");
        assert_eq!(engine.seconds_display().current_value(), "04");
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn run_to_zero_fires_callback_once_and_pulses() {
        let (mut engine, fired) = engine_with_counter();
        engine.set(3);
        engine.start();

        let outcome = advance(&mut engine, Duration::from_secs(10));
        assert_eq!(outcome.ticks, 3);
        assert!(outcome.finished);
        assert_eq!(fired.get(), 1);
        assert_eq!(engine.remaining(), 0);
        assert!(!engine.is_running());
        assert!(engine.is_finishing_pulse());

        let outcome = advance(&mut engine, Duration::from_millis(1100));
        assert!(!outcome.pulse_ended);
        let outcome = advance(&mut engine, Duration::from_millis(100));
        assert!(outcome.pulse_ended);
        assert!(!engine.is_finishing_pulse());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn manual_stop_and_pause_never_fire_callback() {
        let (mut engine, fired) = engine_with_counter();
        engine.set(5);
        engine.start();
        engine.stop();
        engine.start();
        engine.pause();
        engine.set(0);
        assert_eq!(fired.get(), 0);
        assert!(!engine.is_finishing_pulse());
    }

    #[test]
    fn callback_is_optional() {
        let mut engine = CountdownEngine::new(ManualScheduler::new());
        engine.set(1);
        engine.start();
        assert_eq!(engine.tick(), TickOutcome::Finished);
    }

    #[test]
    fn set_from_input_coerces_garbage_to_zero() {
        let (mut engine, _) = engine_with_counter();
        engine.set(40);
        engine.set_from_input("not a number");
        assert_eq!(engine.remaining(), 0);
        engine.set_from_input("90");
        assert_eq!(engine.remaining(), 90);
    }

    #[test]
    fn start_twice_schedules_one_timer() {
        let mut scheduler = MockScheduler::new();
        scheduler
            .expect_schedule()
            .with(eq(TICK_INTERVAL))
            .times(1)
            .return_const(TimerToken(7));
        scheduler
            .expect_cancel()
            .with(eq(TimerToken(7)))
            .times(1)
            .return_const(());

        let mut engine = CountdownEngine::new(scheduler);
        engine.set(30);
        engine.start();
        engine.start();
        assert!(engine.is_running());
        drop(engine);
    }

    #[test]
    fn pause_cancels_the_live_token() {
        let mut scheduler = MockScheduler::new();
        scheduler
            .expect_schedule()
            .times(1)
            .return_const(TimerToken(1));
        scheduler
            .expect_cancel()
            .with(eq(TimerToken(1)))
            .times(1)
            .return_const(());

        let mut engine = CountdownEngine::new(scheduler);
        engine.set(30);
        engine.start();
        engine.pause();
        engine.pause();
        assert!(!engine.is_running());
    }

    #[test]
    fn drop_releases_running_timer() {
        let mut scheduler = MockScheduler::new();
        scheduler
            .expect_schedule()
            .times(1)
            .return_const(TimerToken(3));
        scheduler
            .expect_cancel()
            .with(eq(TimerToken(3)))
            .times(1)
            .return_const(());

        let mut engine = CountdownEngine::new(scheduler);
        engine.set(30);
        engine.start();
        drop(engine);
    }
}
