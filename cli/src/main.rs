mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, ping, serve, tcp};
use netprobe_common::network::params::TcpParams;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;
    let probe = commands.probe_config();

    match commands.command {
        Commands::Serve { host, port } => {
            serve::serve(host, port, probe).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Ping { ip } => Ok(ping::ping(&ip, probe).await),
        Commands::Tcp { ip, port, timeout } => {
            let params: TcpParams = TcpParams { port, timeout };
            Ok(tcp::tcp(&ip, params, probe).await)
        }
    }
}
