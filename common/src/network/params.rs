//! # TCP Check Parameters
//!
//! The connectivity check takes its port and timeout from untrusted query
//! strings. They are kept as raw text until [`TcpTarget::resolve`] turns them
//! into a bounded port and [`Duration`], so that a malformed value becomes a
//! [`ProbeError::InvalidParameter`] rather than an extractor rejection or a
//! panic inside `Duration::from_secs_f64`.

use std::net::IpAddr;
use std::time::Duration;

use serde::Deserialize;

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::network::address::parse_ip;

/// Raw `?port=..&timeout=..` input. Missing fields fall back to config defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TcpParams {
    pub port: Option<String>,
    pub timeout: Option<String>,
}

/// A fully validated connectivity check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TcpTarget {
    pub ip: IpAddr,
    pub port: u16,
    pub timeout: Duration,
}

impl TcpTarget {
    pub fn resolve(ip: &str, params: &TcpParams, cfg: &ProbeConfig) -> Result<Self, ProbeError> {
        let ip: IpAddr = parse_ip(ip)?;

        let port: u16 = match params.port.as_deref() {
            Some(raw) => parse_port(raw)?,
            None => cfg.tcp_default_port,
        };

        let timeout: Duration = match params.timeout.as_deref() {
            Some(raw) => parse_timeout(raw, cfg.tcp_max_timeout_secs)?,
            None => Duration::from_secs_f64(cfg.tcp_default_timeout_secs),
        };

        Ok(Self { ip, port, timeout })
    }
}

fn parse_port(raw: &str) -> Result<u16, ProbeError> {
    let value: i64 = raw.trim().parse::<i64>().map_err(|_| ProbeError::InvalidParameter {
        name: "port",
        reason: format!("{raw:?} is not an integer"),
    })?;

    match u16::try_from(value) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ProbeError::InvalidParameter {
            name: "port",
            reason: format!("{value} is outside 1-65535"),
        }),
    }
}

fn parse_timeout(raw: &str, max_secs: f64) -> Result<Duration, ProbeError> {
    let secs: f64 = raw.trim().parse::<f64>().map_err(|_| ProbeError::InvalidParameter {
        name: "timeout",
        reason: format!("{raw:?} is not a number"),
    })?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(ProbeError::InvalidParameter {
            name: "timeout",
            reason: format!("{raw} must be a positive number of seconds"),
        });
    }
    if secs > max_secs {
        return Err(ProbeError::InvalidParameter {
            name: "timeout",
            reason: format!("{secs}s exceeds the {max_secs}s limit"),
        });
    }

    Ok(Duration::from_secs_f64(secs))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
