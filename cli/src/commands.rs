pub mod ping;
pub mod serve;
pub mod tcp;

use std::net::IpAddr;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use netprobe_common::config::{DEFAULT_PING_PROGRAM, ProbeConfig};
use netprobe_common::error::ErrorClass;

#[derive(Parser)]
#[command(name = "netprobe")]
#[command(version, about = "Ping and TCP reachability checks, over HTTP or from the shell.")]
pub struct CommandLine {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Ping executable to run for reachability checks
    #[arg(long, global = true, default_value = DEFAULT_PING_PROGRAM)]
    pub ping_program: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API
    #[command(alias = "s")]
    Serve {
        /// Address to bind
        #[arg(long, env = "NETPROBE_HOST", default_value = "0.0.0.0")]
        host: IpAddr,
        /// Port to bind
        #[arg(long, env = "NETPROBE_PORT", default_value_t = 8000)]
        port: u16,
    },
    /// Ping one host once
    #[command(alias = "p")]
    Ping { ip: String },
    /// Open one TCP connection and write a single byte
    #[command(alias = "t")]
    Tcp {
        ip: String,
        /// Destination port [default: 443]
        #[arg(short, long, allow_hyphen_values = true)]
        port: Option<String>,
        /// Connect timeout in seconds [default: 3.0]
        #[arg(short, long, allow_hyphen_values = true)]
        timeout: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            ping_program: self.ping_program.clone(),
            ..ProbeConfig::default()
        }
    }
}

/// Process exit status for a one-shot check.
pub fn exit_code(class: Option<ErrorClass>) -> ExitCode {
    match class {
        None => ExitCode::SUCCESS,
        Some(ErrorClass::RemoteFailure) => ExitCode::from(1),
        Some(ErrorClass::InvalidInput) => ExitCode::from(2),
        Some(ErrorClass::Timeout) => ExitCode::from(3),
        Some(ErrorClass::Internal) => ExitCode::from(4),
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
