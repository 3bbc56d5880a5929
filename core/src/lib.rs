//! Network primitives behind the `netprobe` checks.
//!
//! [`network::ping`] shells out to the system ping program, [`network::tcp`]
//! performs a connect plus one-byte write. [`prober::Prober`] binds both to a
//! [`ProbeConfig`](netprobe_common::config::ProbeConfig) and is what callers
//! normally hold on to.

pub mod network;
pub mod prober;
