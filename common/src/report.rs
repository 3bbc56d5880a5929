use std::net::IpAddr;

/// A ping that exited successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingReport {
    pub ip: IpAddr,
    /// Trimmed stdout of the ping program.
    pub raw_output: String,
}

/// A handshake plus sentinel write that both went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpReport {
    pub ip: IpAddr,
    pub port: u16,
}
