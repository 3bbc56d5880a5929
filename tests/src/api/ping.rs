#![cfg(test)]
use std::time::Duration;

use axum::http::StatusCode;
use netprobe_common::config::ProbeConfig;
use serde_json::json;

use crate::util::{FakePing, app_with, app_with_system_ping, get};

const PING_OK: &str = "PING 127.0.0.1 (127.0.0.1) 56(84) bytes of data.\n\
64 bytes from 127.0.0.1: icmp_seq=1 ttl=64 time=0.041 ms\n";

#[tokio::test]
async fn invalid_addresses_are_rejected_without_running_ping() {
    let fake = FakePing::exits(0, PING_OK, "");

    for input in ["abc", "300.1.1.1", "1.2.3.4.5", "10.0.0.0%2F8", "example.com"] {
        let (status, body) = get(app_with(fake.clone(), ProbeConfig::default()), &format!("/ping/{input}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "input {input}");
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Invalid IP address");
        assert!(body.get("ping_stdout").is_none());
    }

    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn undecodable_segment_is_a_json_bad_request() {
    let fake = FakePing::exits(0, PING_OK, "");
    let (status, body) = get(app_with(fake.clone(), ProbeConfig::default()), "/ping/%FF").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["ip"], "%FF");
    assert_eq!(body["message"], "Invalid IP address");
    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn reachable_host_returns_ok_with_raw_output() {
    let fake = FakePing::exits(0, PING_OK, "");
    let (status, body) = get(app_with(fake.clone(), ProbeConfig::default()), "/ping/127.0.0.1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "ip": "127.0.0.1",
            "message": "host is reachable",
            "raw_output": PING_OK.trim(),
        })
    );
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn ipv6_literals_are_accepted() {
    let fake = FakePing::exits(0, "ok", "");
    let (status, body) = get(app_with(fake, ProbeConfig::default()), "/ping/::1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ip"], "::1");
}

#[tokio::test]
async fn success_echoes_the_address_as_typed() {
    let fake = FakePing::exits(0, "ok", "");
    let (status, body) = get(app_with(fake, ProbeConfig::default()), "/ping/0:0:0:0:0:0:0:1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ip"], "0:0:0:0:0:0:0:1");
}

#[tokio::test]
async fn silent_host_is_bad_gateway_with_both_streams() {
    let fake = FakePing::exits(1, "1 packets transmitted, 0 received, 100% packet loss\n", "");
    let (status, body) = get(app_with(fake, ProbeConfig::default()), "/ping/192.0.2.1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body,
        json!({
            "status": "error",
            "ip": "192.0.2.1",
            "message": "host not reachable or didn't respond to ping",
            "ping_stdout": "1 packets transmitted, 0 received, 100% packet loss",
            "ping_stderr": "",
        })
    );
}

#[tokio::test]
async fn hung_ping_is_gateway_timeout_not_bad_gateway() {
    let config: ProbeConfig = ProbeConfig {
        ping_deadline: Duration::from_millis(50),
        ..ProbeConfig::default()
    };
    let (status, body) = get(app_with(FakePing::hangs(), config), "/ping/198.51.100.7").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Ping to 198.51.100.7 timed out");
}

#[tokio::test]
async fn missing_ping_program_is_internal_error() {
    let config: ProbeConfig = ProbeConfig {
        ping_program: "netprobe-no-such-ping".into(),
        ..ProbeConfig::default()
    };
    let (status, body) = get(app_with_system_ping(config), "/ping/127.0.0.1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("netprobe-no-such-ping"));
}

#[tokio::test]
async fn repeated_calls_give_the_same_status() {
    let fake = FakePing::exits(1, "", "ping: connect: Network is unreachable");
    let mut statuses: Vec<StatusCode> = Vec::new();

    for _ in 0..3 {
        let (status, _) = get(app_with(fake.clone(), ProbeConfig::default()), "/ping/203.0.113.9").await;
        statuses.push(status);
    }

    assert!(statuses.iter().all(|s| *s == StatusCode::BAD_GATEWAY), "{statuses:?}");
    assert_eq!(fake.calls(), 3);
}

#[tokio::test]
#[ignore]
async fn system_ping_reaches_loopback() {
    let (status, body) = get(app_with_system_ping(ProbeConfig::default()), "/ping/127.0.0.1").await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(!body["raw_output"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn system_ping_reports_documentation_address_as_unreachable() {
    let (status, body) = get(app_with_system_ping(ProbeConfig::default()), "/ping/192.0.2.1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY, "{body}");
    assert!(body["ping_stdout"].is_string());
    assert!(body["ping_stderr"].is_string());
}
