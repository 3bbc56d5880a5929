use std::process::ExitCode;

use colored::*;
use netprobe_common::config::ProbeConfig;
use netprobe_common::network::params::TcpParams;
use netprobe_core::prober::Prober;

use crate::commands::exit_code;
use crate::terminal::print;

pub async fn tcp(ip: &str, params: TcpParams, probe: ProbeConfig) -> ExitCode {
    print::header("connectivity check");
    let prober: Prober = Prober::new(probe);

    let outcome = prober.tcp(ip, &params).await;
    print::aligned_line("Target", ip.bright_white());

    let code: ExitCode = match outcome {
        Ok(report) => {
            print::aligned_line("Port", report.port.to_string().bright_white());
            print::aligned_line("Status", "connected".green().bold());
            exit_code(None)
        }
        Err(err) => {
            if let Some(port) = err.port() {
                print::aligned_line("Port", port.to_string().bright_white());
            }
            print::aligned_line("Status", "failed".red().bold());
            print::aligned_line("Reason", err.to_string().normal());
            exit_code(Some(err.class()))
        }
    };

    print::end_of_program();
    code
}
