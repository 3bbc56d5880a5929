//! # Probe Error Taxonomy
//!
//! Every way a single check can end badly. Each variant belongs to exactly one
//! [`ErrorClass`], and the class alone decides how the failure is reported to
//! a caller (HTTP status, process exit code).

use std::net::IpAddr;
use std::time::Duration;

use thiserror::Error;

/// Coarse grouping of [`ProbeError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller sent something unusable. Nothing was probed.
    InvalidInput,
    /// The primitive did not finish inside its bound.
    Timeout,
    /// The primitive ran and the remote side failed it.
    RemoteFailure,
    /// This host could not run the primitive at all.
    Internal,
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid IP address: {input:?}")]
    InvalidAddress { input: String },

    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("{ip} did not answer within {secs}s", secs = .after.as_secs_f64())]
    Timeout {
        ip: IpAddr,
        port: Option<u16>,
        after: Duration,
    },

    #[error("host {ip} not reachable or didn't respond to ping")]
    Unreachable {
        ip: IpAddr,
        stdout: String,
        stderr: String,
    },

    #[error("connection refused by {ip}:{port}")]
    ConnectionRefused { ip: IpAddr, port: u16 },

    #[error("connection to {ip}:{port} failed: {message}")]
    Os {
        ip: IpAddr,
        port: u16,
        message: String,
    },

    #[error("connected to {ip}:{port} but the write failed: {message}")]
    WriteFailed {
        ip: IpAddr,
        port: u16,
        message: String,
    },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidAddress { .. } | Self::InvalidParameter { .. } => ErrorClass::InvalidInput,
            Self::Timeout { .. } => ErrorClass::Timeout,
            Self::Unreachable { .. }
            | Self::ConnectionRefused { .. }
            | Self::Os { .. }
            | Self::WriteFailed { .. } => ErrorClass::RemoteFailure,
            Self::Spawn { .. } => ErrorClass::Internal,
        }
    }

    /// The port the failure concerns, if the check had one.
    pub fn port(&self) -> Option<u16> {
        match self {
            Self::Timeout { port, .. } => *port,
            Self::ConnectionRefused { port, .. }
            | Self::Os { port, .. }
            | Self::WriteFailed { port, .. } => Some(*port),
            _ => None,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
