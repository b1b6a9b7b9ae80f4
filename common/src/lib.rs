//! Shared data model for `reachr`.
//!
//! Everything here is plain data: targets, probe outcomes, the errors a probe
//! can raise and the run configuration. No I/O happens in this crate.

pub mod config;
pub mod error;
pub mod network;
pub mod probe;
