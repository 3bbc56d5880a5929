use std::process::ExitCode;

use colored::*;
use netprobe_common::config::ProbeConfig;
use netprobe_common::error::ProbeError;
use netprobe_core::prober::Prober;

use crate::commands::exit_code;
use crate::terminal::print;

pub async fn ping(ip: &str, probe: ProbeConfig) -> ExitCode {
    print::header("reachability check");
    let prober: Prober = Prober::new(probe);

    let outcome = prober.ping(ip).await;
    print::aligned_line("Target", ip.bright_white());

    let code: ExitCode = match outcome {
        Ok(report) => {
            print::aligned_line("Status", "reachable".green().bold());
            print::raw_block("Output", &report.raw_output);
            exit_code(None)
        }
        Err(err) => {
            let class = err.class();
            print::aligned_line("Status", "failed".red().bold());
            print::aligned_line("Reason", err.to_string().normal());
            if let ProbeError::Unreachable { stdout, stderr, .. } = &err {
                print::raw_block("Stdout", stdout);
                print::raw_block("Stderr", stderr);
            }
            exit_code(Some(class))
        }
    };

    print::end_of_program();
    code
}
