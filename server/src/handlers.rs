use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use netprobe_common::error::ProbeError;
use netprobe_common::network::params::TcpParams;
use serde_json::json;

use crate::response::{ApiError, PingOk, TcpOk};
use crate::server::AppState;

/// Unwraps the `:ip` segment. A segment axum cannot decode (invalid UTF-8
/// after percent-decoding) becomes an invalid address carrying the raw,
/// still-encoded text.
fn address(path: Result<Path<String>, PathRejection>, uri: &Uri) -> Result<String, (String, ProbeError)> {
    match path {
        Ok(Path(ip)) => Ok(ip),
        Err(_) => {
            let raw: String = uri.path().rsplit('/').next().unwrap_or_default().to_string();
            let err = ProbeError::InvalidAddress { input: raw.clone() };
            Err((raw, err))
        }
    }
}

pub async fn ping(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let ip: String = match address(path, &uri) {
        Ok(ip) => ip,
        Err((raw, err)) => return ApiError::from_ping(&raw, err).into_response(),
    };

    match state.prober.ping(&ip).await {
        Ok(report) => Json(PingOk::new(&ip, report)).into_response(),
        Err(err) => ApiError::from_ping(&ip, err).into_response(),
    }
}

pub async fn tcp(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<TcpParams>, QueryRejection>,
) -> Response {
    let ip: String = match address(path, &uri) {
        Ok(ip) => ip,
        Err((raw, err)) => return ApiError::from_tcp(&raw, err).into_response(),
    };

    // Every field is an optional string, so only a malformed query string
    // (bad percent-encoding and the like) can get here.
    let params: TcpParams = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            let err = ProbeError::InvalidParameter {
                name: "query",
                reason: rejection.body_text(),
            };
            return ApiError::from_tcp(&ip, err).into_response();
        }
    };

    match state.prober.tcp(&ip, &params).await {
        Ok(report) => Json(TcpOk::new(&ip, report)).into_response(),
        Err(err) => ApiError::from_tcp(&ip, err).into_response(),
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
