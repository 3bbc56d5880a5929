//! JSON bodies and the failure-to-status mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use netprobe_common::error::{ErrorClass, ProbeError};
use netprobe_common::report::{PingReport, TcpReport};
use serde::Serialize;

const STATUS_OK: &str = "ok";
const STATUS_ERROR: &str = "error";

pub fn status_for(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorClass::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorClass::RemoteFailure => StatusCode::BAD_GATEWAY,
        ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Serialize)]
pub struct PingOk {
    pub status: &'static str,
    pub ip: String,
    pub message: String,
    pub raw_output: String,
}

impl PingOk {
    /// `ip` is the caller's text, echoed as typed like the error bodies do.
    pub fn new(ip: &str, report: PingReport) -> Self {
        Self {
            status: STATUS_OK,
            ip: ip.to_string(),
            message: "host is reachable".into(),
            raw_output: report.raw_output,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TcpOk {
    pub status: &'static str,
    pub ip: String,
    pub port: u16,
    pub message: String,
}

impl TcpOk {
    pub fn new(ip: &str, report: TcpReport) -> Self {
        Self {
            status: STATUS_OK,
            ip: ip.to_string(),
            port: report.port,
            message: format!("TCP connection to {ip}:{} succeeded", report.port),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    /// Echoes the caller's input verbatim, even when it failed to parse.
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_stderr: Option<String>,
}

/// A failed check, ready to be rendered.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    fn new(ip: &str, err: &ProbeError, message: String) -> Self {
        Self {
            status: status_for(err.class()),
            body: ErrorBody {
                status: STATUS_ERROR,
                ip: ip.to_string(),
                port: err.port(),
                message,
                ping_stdout: None,
                ping_stderr: None,
            },
        }
    }

    pub fn from_ping(ip: &str, err: ProbeError) -> Self {
        let message: String = match &err {
            ProbeError::InvalidAddress { .. } => "Invalid IP address".into(),
            ProbeError::Timeout { .. } => format!("Ping to {ip} timed out"),
            ProbeError::Unreachable { .. } => "host not reachable or didn't respond to ping".into(),
            other => other.to_string(),
        };
        let mut api: ApiError = Self::new(ip, &err, message);

        if let ProbeError::Unreachable { stdout, stderr, .. } = err {
            api.body.ping_stdout = Some(stdout);
            api.body.ping_stderr = Some(stderr);
        }
        api
    }

    pub fn from_tcp(ip: &str, err: ProbeError) -> Self {
        let message: String = match &err {
            ProbeError::InvalidAddress { .. } => "Invalid IP address".into(),
            ProbeError::Timeout { port: Some(port), .. } => {
                format!("TCP connection to {ip}:{port} timed out")
            }
            other => other.to_string(),
        };
        Self::new(ip, &err, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
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
