//! Background thread that wakes the UI when the next countdown tick is due.
//!
//! egui's own `request_repaint_after` is only honoured while the platform
//! keeps delivering frames; a minimized window may not. The waker owns its
//! own clock so completion still gets pumped and announced on time.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub struct RepaintWaker {
    sender: Sender<Duration>,
}

impl RepaintWaker {
    /// Spawn the waker thread. `wake` runs on that thread each time an armed
    /// delay runs out. The thread exits once the waker is dropped.
    pub fn spawn(wake: impl Fn() + Send + 'static) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<Duration>();

        thread::Builder::new()
            .name("repaint-waker".to_string())
            .spawn(move || {
                let mut due: Option<Instant> = None;
                loop {
                    let message = match due {
                        Some(at) => {
                            receiver.recv_timeout(at.saturating_duration_since(Instant::now()))
                        }
                        None => receiver.recv().map_err(|_| RecvTimeoutError::Disconnected),
                    };

                    match message {
                        // A newer request replaces the pending one.
                        Ok(delay) => due = Some(Instant::now() + delay),
                        Err(RecvTimeoutError::Timeout) => {
                            due = None;
                            wake();
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                log::debug!("repaint waker stopped");
            })?;

        Ok(Self { sender })
    }

    /// Wake once after `delay`, replacing any earlier request.
    pub fn arm(&self, delay: Duration) {
        if self.sender.send(delay).is_err() {
            log::warn!("repaint waker thread is gone");
        }
    }
}
