#![forbid(unsafe_code)]

//! Terminal frontend for the sort visualization engine.
//!
//! Plays the role of the Renderer: consumes snapshots from the engine's
//! event channel and draws them as a row of bars. Keys replace the
//! original's buttons; the engine itself never knows a terminal exists.

pub mod cli;
pub mod term;
pub mod ui;
