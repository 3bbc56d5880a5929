#![cfg(test)]
use axum::http::StatusCode;
use netprobe_common::config::ProbeConfig;
use serde_json::json;
use tokio::net::TcpListener;

use crate::util::{app_with_system_ping, get};

async fn listener() -> (TcpListener, u16) {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    (listener, port)
}

#[tokio::test]
async fn invalid_address_is_bad_request() {
    for input in ["abc", "256.256.256.256", "localhost"] {
        let (status, body) = get(app_with_system_ping(ProbeConfig::default()), &format!("/tcp/{input}?port=80")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "input {input}");
        assert_eq!(body["status"], "error");
        assert_eq!(body["ip"], input);
        assert_eq!(body["message"], "Invalid IP address");
    }
}

#[tokio::test]
async fn undecodable_segment_is_a_json_bad_request() {
    let (status, body) = get(app_with_system_ping(ProbeConfig::default()), "/tcp/%FF?port=80").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["ip"], "%FF");
    assert_eq!(body["message"], "Invalid IP address");
}

#[tokio::test]
async fn open_local_port_is_ok() {
    let (listener, port) = listener().await;
    tokio::spawn(async move {
        while let Ok((sock, _)) = listener.accept().await {
            drop(sock);
        }
    });

    let uri: String = format!("/tcp/127.0.0.1?port={port}&timeout=2");
    let (status, body) = get(app_with_system_ping(ProbeConfig::default()), &uri).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "ip": "127.0.0.1",
            "port": port,
            "message": format!("TCP connection to 127.0.0.1:{port} succeeded"),
        })
    );
}

#[tokio::test]
async fn closed_local_port_is_bad_gateway() {
    let (listener, port) = listener().await;
    drop(listener);

    let uri: String = format!("/tcp/127.0.0.1?port={port}");
    let (status, body) = get(app_with_system_ping(ProbeConfig::default()), &uri).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY, "{body}");
    assert_eq!(body["status"], "error");
    assert_eq!(body["port"], port);
    assert!(body["message"].as_str().unwrap().contains("refused"), "{body}");
}

#[tokio::test]
async fn out_of_range_ports_are_bad_request() {
    for port in ["0", "65536", "-5", "abc", "1e3"] {
        let uri: String = format!("/tcp/127.0.0.1?port={port}");
        let (status, body) = get(app_with_system_ping(ProbeConfig::default()), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "port {port}: {body}");
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().starts_with("invalid port"), "{body}");
    }
}

#[tokio::test]
async fn unusable_timeouts_are_bad_request() {
    for timeout in ["0", "-1", "NaN", "inf", "later", "3600"] {
        let uri: String = format!("/tcp/127.0.0.1?port=80&timeout={timeout}");
        let (status, body) = get(app_with_system_ping(ProbeConfig::default()), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "timeout {timeout}: {body}");
        assert!(body["message"].as_str().unwrap().starts_with("invalid timeout"), "{body}");
    }
}

#[tokio::test]
async fn ipv6_target_is_bad_gateway() {
    let (status, body) = get(app_with_system_ping(ProbeConfig::default()), "/tcp/::1?port=80").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY, "{body}");
    assert_eq!(body["port"], 80);
}

#[tokio::test]
#[ignore]
async fn blackholed_address_is_gateway_timeout() {
    let (status, body) = get(
        app_with_system_ping(ProbeConfig::default()),
        "/tcp/10.255.255.1?port=443&timeout=0.5",
    )
    .await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT, "{body}");
    assert_eq!(body["message"], "TCP connection to 10.255.255.1:443 timed out");
}
