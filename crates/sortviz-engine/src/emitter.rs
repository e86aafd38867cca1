#![forbid(unsafe_code)]

//! Step emission and pacing.
//!
//! [`FrameEmitter`] is the production [`StepSink`]: on every step it
//! publishes an immutable snapshot and then parks the worker for the
//! configured pacing interval. The sleep is the only scheduling primitive
//! behind the animation's cadence — it is not a yield or cancellation
//! point, just wall-clock pacing.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use sortviz_core::{ArrayState, EngineEvent, Snapshot};

use crate::sorts::StepSink;

/// Fixed-interval pacing for the worker thread.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    /// Create a pacer with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// The configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Suspend the current thread for one interval. A zero interval skips
    /// the sleep entirely, so tests run at full speed.
    pub fn pause(&self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}

/// Single-slot, latest-wins snapshot cell shared between the worker and
/// pull-style readers.
#[derive(Debug, Clone)]
pub struct LatestSlot {
    inner: Arc<Mutex<Snapshot>>,
}

impl LatestSlot {
    /// Create a slot holding an initial snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(snapshot)),
        }
    }

    /// Read the most recently stored snapshot.
    pub fn load(&self) -> Snapshot {
        self.inner.lock().expect("latest slot lock").clone()
    }

    /// Replace the stored snapshot.
    pub fn store(&self, snapshot: Snapshot) {
        *self.inner.lock().expect("latest slot lock") = snapshot;
    }
}

/// The production step sink: publish a frame, then pace.
///
/// Per step, in order: (a) snapshot the array, store it in the latest
/// slot, and send it as [`EngineEvent::Step`]; (b) pause for one pacing
/// interval. Events travel a single channel, so consumers observe them in
/// exactly the order the algorithm produced them.
///
/// There is no cancellation primitive. When the receiver side has gone
/// away the emitter stops sending and stops pacing, and the sort runs to
/// completion at full speed; that is the frontend's shutdown path.
pub struct FrameEmitter {
    events: Sender<EngineEvent>,
    latest: LatestSlot,
    pacer: Pacer,
    connected: bool,
    steps: u64,
}

impl FrameEmitter {
    /// Create an emitter publishing to `events` and `latest`.
    pub fn new(events: Sender<EngineEvent>, latest: LatestSlot, pacer: Pacer) -> Self {
        Self {
            events,
            latest,
            pacer,
            connected: true,
            steps: 0,
        }
    }

    /// Steps emitted so far in this run.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl StepSink for FrameEmitter {
    fn step(&mut self, array: &ArrayState) {
        self.steps += 1;
        let snapshot = array.snapshot();
        self.latest.store(snapshot.clone());
        if !self.connected {
            return;
        }
        if self.events.send(EngineEvent::Step(snapshot)).is_err() {
            self.connected = false;
            return;
        }
        self.pacer.pause();
    }
}
