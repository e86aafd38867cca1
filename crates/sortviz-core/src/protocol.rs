#![forbid(unsafe_code)]

//! The command/event protocol between the UI and the engine.
//!
//! The original tool wired each button straight to a listener; here every
//! request funnels through a single `submit(Command)` entry point and the
//! engine answers over one ordered event channel. Outcomes that used to be
//! silent (starting while busy, resetting under a live run) are explicit
//! [`SubmitOutcome`] values.

use std::fmt;

use crate::array::Snapshot;

/// The algorithm requested for a run. Immutable once accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    /// Adjacent-pair comparison; animates every comparison.
    Bubble,
    /// Recursive midpoint merge; animates every write-back.
    Merge,
    /// Lomuto-partition quicksort; animates swaps and call completions.
    Quick,
}

impl SortKind {
    /// All algorithms, in menu order.
    pub const ALL: [SortKind; 3] = [SortKind::Bubble, SortKind::Merge, SortKind::Quick];
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bubble => "Bubble",
            Self::Merge => "Merge",
            Self::Quick => "Quick",
        };
        f.write_str(name)
    }
}

/// A request from the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a run with the given algorithm if the engine is idle.
    Start(SortKind),
    /// Regenerate a fresh randomized array of the configured size.
    Reset,
}

/// Whether a run is in flight. At most one `Running` system-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No worker active; commands are accepted.
    Idle,
    /// A worker owns the array; start/reset are rejected.
    Running,
}

/// Result of submitting a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The command took effect.
    Accepted,
    /// A run is in flight; the command was dropped, not queued.
    RejectedBusy,
}

impl SubmitOutcome {
    /// Whether the command took effect.
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Event published by the engine, in the exact order it was produced.
///
/// `Step` is the "render now" notification: the snapshot was taken
/// immediately after the mutation (or call completion) it reports.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A mutating step (or completed recursive call) occurred.
    Step(Snapshot),
    /// The array was regenerated by a reset.
    Reset(Snapshot),
    /// The run finished and the engine returned to idle.
    Finished(SortKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_kind_display_names() {
        let names: Vec<String> = SortKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["Bubble", "Merge", "Quick"]);
    }

    #[test]
    fn accepted_predicate() {
        assert!(SubmitOutcome::Accepted.is_accepted());
        assert!(!SubmitOutcome::RejectedBusy.is_accepted());
    }
}
