//! # Target Address Parsing
//!
//! Both checks take a bare IP literal. Host names, CIDR blocks, ranges and
//! anything carrying whitespace are rejected before a probe is attempted.
//! Scoped IPv6 literals (`fe80::1%eth0`) are rejected too.

use std::net::{IpAddr, Ipv4Addr};

use crate::error::ProbeError;

/// Parses an IPv4 or IPv6 literal.
pub fn parse_ip(s: &str) -> Result<IpAddr, ProbeError> {
    s.parse::<IpAddr>().map_err(|_| ProbeError::InvalidAddress {
        input: s.to_string(),
    })
}

/// Narrows an address to IPv4 for sockets that only speak AF_INET.
///
/// Returns `None` for IPv6 literals, including IPv4-mapped ones.
pub fn as_ipv4(ip: IpAddr) -> Option<Ipv4Addr> {
    match ip {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
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
