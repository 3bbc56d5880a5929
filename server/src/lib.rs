//! HTTP surface for the `netprobe` checks.
//!
//! | Route | Check |
//! |---|---|
//! | `GET /ping/:ip` | reachability (one ICMP echo via the system ping) |
//! | `GET /tcp/:ip?port=443&timeout=3.0` | connectivity (handshake + one-byte write) |
//! | `GET /health` | liveness |

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, ServerConfig, router, serve};
