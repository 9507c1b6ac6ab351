//! Periodic timer capability injected into [`CountdownEngine`](super::CountdownEngine).
//!
//! Schedulers do not own callbacks. The owner of a [`TimerToken`] polls it
//! and runs its callback once per elapsed period, which keeps the engine
//! single-owner and lets tests drive time by hand.

use std::collections::HashMap;
use std::time::{Duration, Instant};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to a live periodic timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

#[cfg_attr(test, mockall::automock)]
pub trait Scheduler {
    /// Start a timer firing every `interval`.
    fn schedule(&mut self, interval: Duration) -> TimerToken;
    /// Stop a timer. Unknown tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
    /// Whole periods elapsed for `token` since it was last polled. Always 0
    /// once the token has been cancelled.
    fn poll(&mut self, token: TimerToken) -> u32;
    /// Time until the earliest live timer is due, if any.
    fn next_due_in(&self) -> Option<Duration>;
}

#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    interval: Duration,
    next_due: Duration,
}

/// Timer bookkeeping shared by the manual and wall-clock schedulers. Times
/// are offsets from the owning scheduler's epoch.
#[derive(Debug, Default)]
struct TimerTable {
    timers: HashMap<TimerToken, TimerEntry>,
    next_token: u64,
    scheduled_total: usize,
}

impl TimerTable {
    fn schedule(&mut self, now: Duration, interval: Duration) -> TimerToken {
        let interval = interval.max(MIN_INTERVAL);
        self.next_token += 1;
        self.scheduled_total += 1;
        let token = TimerToken(self.next_token);
        self.timers.insert(
            token,
            TimerEntry {
                interval,
                next_due: now + interval,
            },
        );
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.timers.remove(&token);
    }

    fn poll(&mut self, now: Duration, token: TimerToken) -> u32 {
        let Some(entry) = self.timers.get_mut(&token) else {
            return 0;
        };

        if now < entry.next_due {
            return 0;
        }

        let elapsed = now - entry.next_due;
        let periods = elapsed.as_nanos() / entry.interval.as_nanos() + 1;
        let periods = u32::try_from(periods).unwrap_or(u32::MAX);
        entry.next_due += entry.interval * periods;
        periods
    }

    fn next_due_in(&self, now: Duration) -> Option<Duration> {
        self.timers
            .values()
            .map(|entry| entry.next_due.saturating_sub(now))
            .min()
    }
}

/// Scheduler driven by an explicitly advanced virtual clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    table: TimerTable,
    now: Duration,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the virtual clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Timers currently live.
    pub fn active_count(&self) -> usize {
        self.table.timers.len()
    }

    /// Timers ever scheduled, including cancelled ones.
    pub fn scheduled_count(&self) -> usize {
        self.table.scheduled_total
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) -> TimerToken {
        self.table.schedule(self.now, interval)
    }

    fn cancel(&mut self, token: TimerToken) {
        self.table.cancel(token);
    }

    fn poll(&mut self, token: TimerToken) -> u32 {
        self.table.poll(self.now, token)
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.table.next_due_in(self.now)
    }
}

/// Wall-clock scheduler for the desktop app. It never wakes anything up on
/// its own; the UI polls it every frame and asks egui to repaint after
/// [`Scheduler::next_due_in`].
#[derive(Debug)]
pub struct IntervalScheduler {
    table: TimerTable,
    epoch: Instant,
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self {
            table: TimerTable::default(),
            epoch: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&mut self, interval: Duration) -> TimerToken {
        let now = self.elapsed();
        self.table.schedule(now, interval)
    }

    fn cancel(&mut self, token: TimerToken) {
        self.table.cancel(token);
    }

    fn poll(&mut self, token: TimerToken) -> u32 {
        let now = self.elapsed();
        self.table.poll(now, token)
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.table.next_due_in(self.elapsed())
    }
}
