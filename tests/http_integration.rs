//! Dispatcher tests against a local single-shot HTTP server.
//!
//! Each test binds a listener on a random port, serves one canned response,
//! and captures the raw request (head + body) so URL construction and the
//! request-body contract can be asserted exactly as they appear on the wire.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use bonfida_sdk::prelude::*;

/// Serve exactly one request with the given status and body, returning the
/// server URL and a receiver for the raw request bytes (request line,
/// headers, and any body).
async fn stub_server(status: u16, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        let header_end = loop {
            let n = stream.read(&mut buf).await.unwrap();
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
            if n == 0 {
                break raw.len();
            }
        };

        let content_length = String::from_utf8_lossy(&raw[..header_end])
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);

        while raw.len() < header_end + content_length {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }

        let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());

        let reason = match status {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            404 => "Not Found",
            500 => "Internal Server Error",
            503 => "Service Unavailable",
            _ => "Unknown",
        };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
    });

    (format!("http://{}", addr), rx)
}

/// Path + query string from the captured request line.
fn request_target(raw: &str) -> &str {
    raw.lines()
        .next()
        .unwrap_or_default()
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
}

/// Bytes after the header terminator.
fn request_body(raw: &str) -> &str {
    raw.split_once("\r\n\r\n").map(|(_, body)| body).unwrap_or("")
}

fn client(base_url: &str) -> BonfidaClient {
    BonfidaClient::builder()
        .public_url(base_url)
        .private_url(base_url)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn pairs_unwraps_data_envelope() {
    let (url, _rx) = stub_server(200, r#"{"data": ["A/B", "C/D"]}"#).await;
    let pairs = client(&url).markets().pairs().await.unwrap();
    assert_eq!(pairs, vec!["A/B".to_string(), "C/D".to_string()]);
}

#[tokio::test]
async fn body_without_data_field_passes_through() {
    let (url, _rx) = stub_server(200, r#"{"success": true, "count": 3}"#).await;
    let value = client(&url)
        .http()
        .request(Scope::Public, Method::Get, "status", &Query::new())
        .await
        .unwrap();
    assert_eq!(value, serde_json::json!({"success": true, "count": 3}));
}

#[tokio::test]
async fn candles_builds_ordered_query_string() {
    let (url, rx) = stub_server(200, r#"{"data": []}"#).await;
    let candles = client(&url)
        .markets()
        .candles("A_B", Resolution::Minute1, Some(10), None, None)
        .await
        .unwrap();
    assert!(candles.is_empty());
    let raw = rx.await.unwrap();
    assert_eq!(request_target(&raw), "/candles/A_B?resolution=60&limit=10");
}

#[tokio::test]
async fn get_without_query_has_no_question_mark() {
    let (url, rx) = stub_server(200, r#"{"data": []}"#).await;
    client(&url).markets().pairs().await.unwrap();
    let raw = rx.await.unwrap();
    assert_eq!(request_target(&raw), "/pairs");
    assert_eq!(request_body(&raw), "");
}

#[tokio::test]
async fn recent_trades_selects_address_path_for_long_identifiers() {
    let addr = "C6tp2RVZnxBPFbnAsfTjis8BN9tycESAT4SgDQgbbrsA";
    let (url, rx) = stub_server(200, r#"{"data": []}"#).await;
    client(&url).markets().recent_trades(addr).await.unwrap();
    let raw = rx.await.unwrap();
    assert_eq!(request_target(&raw), format!("/trades/address/{}", addr));

    let (url, rx) = stub_server(200, r#"{"data": []}"#).await;
    client(&url).markets().recent_trades("SRM/USDC").await.unwrap();
    let raw = rx.await.unwrap();
    assert_eq!(request_target(&raw), "/trades/SRM/USDC");
}

#[tokio::test]
async fn pool_history_query_includes_mints_and_limit() {
    let (url, rx) = stub_server(200, r#"{"data": []}"#).await;
    client(&url)
        .pools()
        .historical_volume("mintAAAA", "mintBBBB", None, Some(1000), None)
        .await
        .unwrap();
    let raw = rx.await.unwrap();
    assert_eq!(
        request_target(&raw),
        "/pools/volumes?mintA=mintAAAA&mintB=mintBBBB&limit=100&startTime=1000"
    );
}

#[tokio::test]
async fn post_sends_query_as_json_body_in_insertion_order() {
    let (url, rx) = stub_server(200, r#"{"data": {}}"#).await;
    let query = Query::new().with("mintA", "abc").with("limit", 5u32);
    client(&url)
        .http()
        .request(Scope::Public, Method::Post, "orders", &query)
        .await
        .unwrap();
    let raw = rx.await.unwrap();
    assert!(raw.starts_with("POST /orders "));
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    assert_eq!(request_body(&raw), r#"{"mintA":"abc","limit":5}"#);
}

#[tokio::test]
async fn delete_with_empty_query_sends_no_body() {
    let (url, rx) = stub_server(200, r#"{"data": {}}"#).await;
    client(&url)
        .http()
        .request(Scope::Public, Method::Delete, "orders/1", &Query::new())
        .await
        .unwrap();
    let raw = rx.await.unwrap();
    assert!(raw.starts_with("DELETE /orders/1 "));
    assert!(!raw.to_ascii_lowercase().contains("content-type"));
    assert_eq!(request_body(&raw), "");
}

#[tokio::test]
async fn delete_with_query_sends_json_body() {
    let (url, rx) = stub_server(200, r#"{"data": {}}"#).await;
    let query = Query::new().with("orderId", 42i64);
    client(&url)
        .http()
        .request(Scope::Public, Method::Delete, "orders", &query)
        .await
        .unwrap();
    let raw = rx.await.unwrap();
    assert!(raw.starts_with("DELETE /orders "));
    assert_eq!(request_body(&raw), r#"{"orderId":42}"#);
}

#[tokio::test]
async fn client_error_statuses_surface_with_context() {
    for status in [400u16, 404, 500, 503] {
        let (url, _rx) = stub_server(status, r#"{"error": "nope"}"#).await;
        let err = client(&url)
            .http()
            .request(Scope::Public, Method::Get, "pairs", &Query::new())
            .await
            .unwrap_err();
        match err {
            HttpError::Status {
                status: got,
                method,
                ref url,
                ref body,
            } => {
                assert_eq!(got, status);
                assert_eq!(method, Method::Get);
                assert!(url.ends_with("/pairs"));
                assert!(body.contains("nope"));
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn success_statuses_parse() {
    for status in [200u16, 201] {
        let (url, _rx) = stub_server(status, r#"{"data": 1}"#).await;
        let value = client(&url)
            .http()
            .request(Scope::Public, Method::Get, "pairs", &Query::new())
            .await
            .unwrap();
        assert_eq!(value, serde_json::json!(1));
    }

    // 204 carries no body; the dispatcher yields null.
    let (url, _rx) = stub_server(204, "").await;
    let value = client(&url)
        .http()
        .request(Scope::Public, Method::Get, "pairs", &Query::new())
        .await
        .unwrap();
    assert_eq!(value, serde_json::Value::Null);
}

#[tokio::test]
async fn invalid_json_on_success_is_a_decode_error() {
    let (url, _rx) = stub_server(200, "not json").await;
    let err = client(&url)
        .http()
        .request(Scope::Public, Method::Get, "pairs", &Query::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Decode(_)));
}

#[tokio::test]
async fn unsupported_method_fails_before_any_network_call() {
    // Nothing listens on this address; an attempted connection would fail
    // with Transport, not UnsupportedMethod.
    let client = client("http://127.0.0.1:9");
    let err = client
        .http()
        .request_str(Scope::Public, "PATCH", "pairs", &Query::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::UnsupportedMethod(m) if m == "PATCH"));
}

#[tokio::test]
async fn private_scope_without_signer_fails_before_any_network_call() {
    let client = client("http://127.0.0.1:9");
    let err = client
        .http()
        .request(Scope::Private, Method::Get, "positions", &Query::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::MissingSigner));
}

#[tokio::test]
async fn transport_failure_is_not_masked_as_http_error() {
    let client = client("http://127.0.0.1:9");
    let err = client
        .http()
        .request(Scope::Public, Method::Get, "pairs", &Query::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Transport(_) | HttpError::Timeout));
}

#[tokio::test]
async fn typed_trades_deserialize_end_to_end() {
    let body = r#"{"data": [{
        "market": "SRM/USDC",
        "price": 1.24,
        "size": 200.0,
        "side": "buy",
        "time": 1597598613000
    }]}"#;
    let (url, _rx) = stub_server(200, body).await;
    let trades = client(&url).markets().all_recent_trades().await.unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].market, "SRM/USDC");
    assert_eq!(trades[0].side, Side::Buy);
}
