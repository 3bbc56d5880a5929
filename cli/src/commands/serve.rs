use std::net::{IpAddr, SocketAddr};

use netprobe_common::config::ProbeConfig;
use netprobe_server::ServerConfig;
use tracing::info;

use crate::terminal::print;

pub async fn serve(host: IpAddr, port: u16, probe: ProbeConfig) -> anyhow::Result<()> {
    print::header("starting server");

    let config: ServerConfig = ServerConfig {
        addr: SocketAddr::new(host, port),
        probe,
    };
    info!(
        version = env!("CARGO_PKG_VERSION"),
        ping_program = %config.probe.ping_program,
        "Configuration loaded"
    );

    netprobe_server::serve(config).await
}
