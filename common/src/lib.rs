//! Shared types for the `netprobe` workspace.
//!
//! Everything in here is plain data: probe configuration, the address and
//! parameter parsing that happens before any socket or process is touched,
//! the error taxonomy, and the success records the checks hand back.

pub mod config;
pub mod error;
pub mod network;
pub mod report;
