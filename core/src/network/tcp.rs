//! # Connectivity Check
//!
//! A TCP check is a bounded IPv4 connect followed by a one-byte write.
//! Refusals, kernel errors and failed writes surface as distinct
//! [`ProbeError`] variants so the caller can tell a closed port from a
//! silent one.

use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::{Duration, Instant};

use netprobe_common::error::ProbeError;
use netprobe_common::network::address::as_ipv4;
use netprobe_common::network::params::TcpTarget;
use netprobe_common::report::TcpReport;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info};

/// Written once the handshake completes, to catch half-open connections.
pub const SENTINEL: &[u8] = b"\0";

/// Connects to `target` over IPv4 and writes [`SENTINEL`].
///
/// The connect is bounded by `target.timeout`, the write by `write_timeout`.
/// The stream is owned by this function and closed on every return path.
pub async fn check_connectivity(
    target: TcpTarget,
    write_timeout: Duration,
) -> Result<TcpReport, ProbeError> {
    let TcpTarget { ip, port, timeout: connect_timeout } = target;

    let Some(v4): Option<Ipv4Addr> = as_ipv4(ip) else {
        return Err(ProbeError::Os {
            ip,
            port,
            message: "address family not supported (TCP check is IPv4 only)".into(),
        });
    };
    let socket_addr: SocketAddr = SocketAddr::V4(SocketAddrV4::new(v4, port));

    let started: Instant = Instant::now();
    debug!(%ip, port, timeout_ms = connect_timeout.as_millis() as u64, "connecting");

    let mut stream: TcpStream = match timeout(connect_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => return Err(classify_connect_error(e, target)),
        Err(_elapsed) => {
            info!(%ip, port, "connect timed out");
            return Err(ProbeError::Timeout {
                ip,
                port: Some(port),
                after: connect_timeout,
            });
        }
    };

    send_sentinel(&mut stream, write_timeout, ip, port).await?;

    info!(%ip, port, elapsed_ms = started.elapsed().as_millis() as u64, "tcp connection succeeded");
    Ok(TcpReport { ip, port })
}

/// Writes [`SENTINEL`] to an established connection within `write_timeout`.
pub(crate) async fn send_sentinel<W>(
    writer: &mut W,
    write_timeout: Duration,
    ip: IpAddr,
    port: u16,
) -> Result<(), ProbeError>
where
    W: AsyncWrite + Unpin,
{
    match timeout(write_timeout, writer.write_all(SENTINEL)).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            info!(%ip, port, "sentinel write failed: {e}");
            Err(ProbeError::WriteFailed { ip, port, message: e.to_string() })
        }
        Err(_elapsed) => {
            info!(%ip, port, "sentinel write timed out");
            Err(ProbeError::WriteFailed {
                ip,
                port,
                message: format!("write did not complete within {}s", write_timeout.as_secs_f64()),
            })
        }
    }
}

fn classify_connect_error(e: std::io::Error, target: TcpTarget) -> ProbeError {
    let TcpTarget { ip, port, timeout: after } = target;
    info!(%ip, port, "connect failed: {e}");

    match e.kind() {
        ErrorKind::ConnectionRefused => ProbeError::ConnectionRefused { ip, port },
        // The kernel gave up on the SYN before our own bound fired.
        ErrorKind::TimedOut => ProbeError::Timeout { ip, port: Some(port), after },
        _ => ProbeError::Os { ip, port, message: e.to_string() },
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
