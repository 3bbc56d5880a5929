//! # Reachability Check
//!
//! One ICMP echo, sent by the platform's `ping` program rather than a raw
//! socket so the server does not need `CAP_NET_RAW`.
//!
//! Two bounds apply. `ping` is told to wait [`ProbeConfig::ping_wait`] for its
//! single reply; independently of that the whole child is given
//! [`ProbeConfig::ping_deadline`] to exit. A child that outlives the deadline
//! is reported as a timeout and killed when its future is dropped.
//!
//! [`ProbeConfig::ping_wait`]: netprobe_common::config::ProbeConfig::ping_wait
//! [`ProbeConfig::ping_deadline`]: netprobe_common::config::ProbeConfig::ping_deadline

use std::net::IpAddr;
use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use netprobe_common::error::ProbeError;
use netprobe_common::report::PingReport;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// What a finished ping run left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PingOutput {
    /// `None` when the child was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl PingOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs one ping against `ip` and waits for it to exit.
///
/// Implementations must not apply their own overall deadline;
/// [`check_reachability`] does that.
#[async_trait]
pub trait PingRunner: Send + Sync {
    /// Name used in spawn errors and logs.
    fn program(&self) -> &str;

    async fn run(&self, ip: IpAddr) -> std::io::Result<PingOutput>;
}

/// Spawns the system ping executable.
#[derive(Debug, Clone)]
pub struct SystemPing {
    program: String,
    wait: Duration,
}

impl SystemPing {
    pub fn new(program: impl Into<String>, wait: Duration) -> Self {
        Self {
            program: program.into(),
            wait,
        }
    }

    fn command(&self, ip: IpAddr) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(ping_args(ip, self.wait))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl PingRunner for SystemPing {
    fn program(&self) -> &str {
        &self.program
    }

    async fn run(&self, ip: IpAddr) -> std::io::Result<PingOutput> {
        let output = self.command(ip).output().await?;
        Ok(PingOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Single probe, per-reply wait in whatever unit this platform's ping expects.
#[cfg(target_os = "linux")]
fn ping_args(ip: IpAddr, wait: Duration) -> Vec<String> {
    let wait_secs: u64 = wait.as_secs().max(1);
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        wait_secs.to_string(),
        ip.to_string(),
    ]
}

#[cfg(windows)]
fn ping_args(ip: IpAddr, wait: Duration) -> Vec<String> {
    vec![
        "-n".into(),
        "1".into(),
        "-w".into(),
        wait.as_millis().to_string(),
        ip.to_string(),
    ]
}

#[cfg(not(any(target_os = "linux", windows)))]
fn ping_args(ip: IpAddr, wait: Duration) -> Vec<String> {
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        wait.as_millis().to_string(),
        ip.to_string(),
    ]
}

/// Pings `ip` once, giving the whole run at most `deadline`.
pub async fn check_reachability(
    runner: &dyn PingRunner,
    ip: IpAddr,
    deadline: Duration,
) -> Result<PingReport, ProbeError> {
    let started: Instant = Instant::now();
    debug!(%ip, program = runner.program(), "spawning ping");

    let output: PingOutput = match timeout(deadline, runner.run(ip)).await {
        Ok(Ok(output)) => output,
        Ok(Err(source)) => {
            warn!(%ip, program = runner.program(), "could not run ping: {source}");
            return Err(ProbeError::Spawn {
                program: runner.program().to_string(),
                source,
            });
        }
        Err(_elapsed) => {
            warn!(%ip, deadline_ms = deadline.as_millis() as u64, "ping timed out");
            return Err(ProbeError::Timeout {
                ip,
                port: None,
                after: deadline,
            });
        }
    };

    let elapsed_ms: u64 = started.elapsed().as_millis() as u64;
    let stdout: String = decode(&output.stdout);

    if output.success() {
        info!(%ip, elapsed_ms, "host is reachable");
        return Ok(PingReport {
            ip,
            raw_output: stdout,
        });
    }

    info!(%ip, elapsed_ms, exit_code = ?output.exit_code, "host did not answer");
    Err(ProbeError::Unreachable {
        ip,
        stdout,
        stderr: decode(&output.stderr),
    })
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
