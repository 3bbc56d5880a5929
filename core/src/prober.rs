//! The entry point for both checks.
//!
//! A [`Prober`] validates raw caller input and then runs exactly one primitive.
//! It holds no per-request state, so a single instance is shared by every
//! request the server handles.

use std::net::IpAddr;
use std::sync::Arc;

use netprobe_common::config::ProbeConfig;
use netprobe_common::error::ProbeError;
use netprobe_common::network::address::parse_ip;
use netprobe_common::network::params::{TcpParams, TcpTarget};
use netprobe_common::report::{PingReport, TcpReport};

use crate::network::ping::{self, PingRunner, SystemPing};
use crate::network::tcp;

pub struct Prober {
    config: ProbeConfig,
    runner: Arc<dyn PingRunner>,
}

impl Prober {
    /// Uses the system ping program named in `config`.
    pub fn new(config: ProbeConfig) -> Self {
        let runner = Arc::new(SystemPing::new(config.ping_program.clone(), config.ping_wait));
        Self::with_runner(config, runner)
    }

    pub fn with_runner(config: ProbeConfig, runner: Arc<dyn PingRunner>) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Reachability check. An invalid address never reaches the runner.
    pub async fn ping(&self, ip: &str) -> Result<PingReport, ProbeError> {
        let ip: IpAddr = parse_ip(ip)?;
        ping::check_reachability(self.runner.as_ref(), ip, self.config.ping_deadline).await
    }

    /// Connectivity check. Address, port and timeout are all validated before
    /// a socket is opened.
    pub async fn tcp(&self, ip: &str, params: &TcpParams) -> Result<TcpReport, ProbeError> {
        let target: TcpTarget = TcpTarget::resolve(ip, params, &self.config)?;
        tcp::check_connectivity(target, self.config.tcp_write_timeout).await
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
