#![forbid(unsafe_code)]

//! Core: array state, engine configuration, and the command/event protocol.

pub mod array;
pub mod config;
pub mod protocol;

pub use array::{ArrayState, Snapshot};
pub use config::{ConfigError, EngineConfig};
pub use protocol::{Command, EngineEvent, RunState, SortKind, SubmitOutcome};
