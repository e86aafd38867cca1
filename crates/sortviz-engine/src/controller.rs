#![forbid(unsafe_code)]

//! Run ownership and command dispatch.
//!
//! The [`Controller`] owns at most one active run. Start requests claim
//! the busy flag with an atomic compare-and-swap, so two callers racing on
//! an idle controller resolve to exactly one accepted run; the loser gets
//! [`SubmitOutcome::RejectedBusy`] and the request is dropped, never
//! queued. There is no mid-run cancellation: an accepted run always
//! executes to completion on its worker thread.
//!
//! Ownership of the array follows the run: between runs it is parked
//! inside the controller, and an accepted start moves it onto the worker,
//! which mutates it exclusively and publishes immutable snapshots. Readers
//! never see the mutable array, so a frame cannot observe a half-applied
//! mutation.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use sortviz_core::{
    ArrayState, Command, ConfigError, EngineConfig, EngineEvent, RunState, Snapshot, SortKind,
    SubmitOutcome,
};

use crate::emitter::{FrameEmitter, LatestSlot, Pacer};
use crate::sorts;

/// State shared between the controller and the worker thread.
struct Shared {
    /// The busy flag: true while a worker owns the array.
    busy: AtomicBool,
    /// The array, parked here whenever no run is in flight.
    ///
    /// This lock also serializes reset against start: reset regenerates
    /// under it, start takes the array out under it.
    slot: Mutex<Option<ArrayState>>,
}

/// Owns the array, the busy flag, and the worker of the active run.
pub struct Controller {
    config: EngineConfig,
    shared: Arc<Shared>,
    latest: LatestSlot,
    events: Sender<EngineEvent>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Controller {
    /// Create a controller with a freshly randomized array, returning the
    /// receiving end of its ordered event channel.
    pub fn new(config: EngineConfig) -> Result<(Self, Receiver<EngineEvent>), ConfigError> {
        config.validate()?;
        let array = ArrayState::random(
            config.array_size,
            config.value_range.clone(),
            &mut rand::thread_rng(),
        );
        let latest = LatestSlot::new(array.snapshot());
        let (events, receiver) = mpsc::channel();
        let controller = Self {
            config,
            shared: Arc::new(Shared {
                busy: AtomicBool::new(false),
                slot: Mutex::new(Some(array)),
            }),
            latest,
            events,
            worker: Mutex::new(None),
        };
        Ok((controller, receiver))
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether a run is currently in flight.
    pub fn run_state(&self) -> RunState {
        if self.shared.busy.load(Ordering::Acquire) {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// The most recently published snapshot (latest wins).
    pub fn latest(&self) -> Snapshot {
        self.latest.load()
    }

    /// Dispatch a command. Both commands are rejected while a run is in
    /// flight; neither is ever queued.
    pub fn submit(&self, command: Command) -> SubmitOutcome {
        match command {
            Command::Start(kind) => self.start(kind),
            Command::Reset => self.reset(),
        }
    }

    /// Block until the active run (if any) has finished.
    pub fn join(&self) {
        let handle = self.worker.lock().expect("worker handle lock").take();
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }

    fn start(&self, kind: SortKind) -> SubmitOutcome {
        if self
            .shared
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(%kind, "start rejected: run in flight");
            return SubmitOutcome::RejectedBusy;
        }

        let array = self
            .shared
            .slot
            .lock()
            .expect("array slot lock")
            .take()
            .expect("array parked while idle");

        // Reap the previous run's worker before spawning the next one.
        // It cleared the busy flag before we got here, but its final
        // `Finished` send may still be in flight; joining first keeps the
        // event stream strictly ordered across runs.
        let mut worker = self.worker.lock().expect("worker handle lock");
        if let Some(previous) = worker.take() {
            let _ = previous.join();
        }

        let shared = Arc::clone(&self.shared);
        let latest = self.latest.clone();
        let events = self.events.clone();
        let pacer = Pacer::new(self.config.delay);
        let handle = thread::Builder::new()
            .name("sortviz-worker".into())
            .spawn(move || run_worker(kind, array, shared, latest, events, pacer))
            .expect("failed to spawn sort worker");
        *worker = Some(handle);
        drop(worker);

        tracing::info!(%kind, size = self.config.array_size, "run started");
        SubmitOutcome::Accepted
    }

    fn reset(&self) -> SubmitOutcome {
        let mut slot = self.shared.slot.lock().expect("array slot lock");
        if self.shared.busy.load(Ordering::Acquire) {
            tracing::debug!("reset rejected: run in flight");
            return SubmitOutcome::RejectedBusy;
        }
        let array = ArrayState::random(
            self.config.array_size,
            self.config.value_range.clone(),
            &mut rand::thread_rng(),
        );
        let snapshot = array.snapshot();
        *slot = Some(array);
        drop(slot);

        self.latest.store(snapshot.clone());
        let _ = self.events.send(EngineEvent::Reset(snapshot));
        tracing::debug!(size = self.config.array_size, "array reset");
        SubmitOutcome::Accepted
    }
}

/// Body of the worker thread: run the algorithm, then hand everything
/// back and announce completion.
///
/// A panic in the algorithm is a programmer error (the only panics are
/// precondition violations), but the controller must not stay wedged in
/// `Running` forever: the panic is caught at the thread boundary, logged,
/// and the engine returns to idle. The array contents after a panicked
/// run are unspecified until the next reset.
fn run_worker(
    kind: SortKind,
    mut array: ArrayState,
    shared: Arc<Shared>,
    latest: LatestSlot,
    events: Sender<EngineEvent>,
    pacer: Pacer,
) {
    let started = Instant::now();
    let mut emitter = FrameEmitter::new(events.clone(), latest.clone(), pacer);
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        sorts::run(kind, &mut array, &mut emitter);
    }));
    match outcome {
        Ok(()) => {
            tracing::info!(
                %kind,
                steps = emitter.steps(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "run finished"
            );
        }
        Err(_) => {
            tracing::error!(%kind, "sort worker panicked; returning to idle");
        }
    }

    latest.store(array.snapshot());
    *shared.slot.lock().expect("array slot lock") = Some(array);
    shared.busy.store(false, Ordering::Release);
    let _ = events.send(EngineEvent::Finished(kind));
}
