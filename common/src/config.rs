use std::time::Duration;

pub const DEFAULT_PING_PROGRAM: &str = "ping";
pub const DEFAULT_PING_WAIT: Duration = Duration::from_secs(2);
pub const DEFAULT_PING_DEADLINE: Duration = Duration::from_secs(6);
pub const DEFAULT_TCP_PORT: u16 = 443;
pub const DEFAULT_TCP_TIMEOUT_SECS: f64 = 3.0;
pub const DEFAULT_TCP_WRITE_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_MAX_TCP_TIMEOUT_SECS: f64 = 30.0;

/// Tunables for both checks. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Name or path of the ping executable.
    pub ping_program: String,
    /// How long ping itself waits for the single echo reply.
    pub ping_wait: Duration,
    /// Outer bound on the whole ping subprocess.
    ///
    /// Must be larger than `ping_wait`; it only exists to catch a hung child.
    pub ping_deadline: Duration,
    pub tcp_default_port: u16,
    pub tcp_default_timeout_secs: f64,
    /// Upper bound accepted for a caller-supplied connect timeout.
    pub tcp_max_timeout_secs: f64,
    /// Bound on the post-handshake sentinel write.
    pub tcp_write_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ping_program: DEFAULT_PING_PROGRAM.to_string(),
            ping_wait: DEFAULT_PING_WAIT,
            ping_deadline: DEFAULT_PING_DEADLINE,
            tcp_default_port: DEFAULT_TCP_PORT,
            tcp_default_timeout_secs: DEFAULT_TCP_TIMEOUT_SECS,
            tcp_max_timeout_secs: DEFAULT_MAX_TCP_TIMEOUT_SECS,
            tcp_write_timeout: DEFAULT_TCP_WRITE_TIMEOUT,
        }
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
