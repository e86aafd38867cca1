#![forbid(unsafe_code)]

//! Engine: sorting algorithms, step pacing, and run control.
//!
//! The [`Controller`] accepts commands from a UI collaborator, runs one
//! algorithm at a time on a dedicated worker thread, and publishes
//! per-step snapshots over an ordered channel for the renderer.

pub mod controller;
pub mod emitter;
pub mod sorts;

pub use controller::Controller;
pub use emitter::{FrameEmitter, LatestSlot, Pacer};
pub use sorts::{FnSink, NullSink, StepSink, bubble_sort, merge_sort, quick_sort, run};
