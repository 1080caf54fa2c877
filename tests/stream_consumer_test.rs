//! Test the streaming consumer against a loopback HTTP fixture.
//!
//! This bypasses Tauri completely and drives the request/stream logic with
//! canned responses served over a real TCP socket, so the status gate, the
//! rate-limit header capture, and the incremental decode all run exactly as
//! they do in the app.

use std::time::Duration;

use counsel_desk_lib::llm::generate::{generate, GenerateError};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one connection: swallow the request, then write `parts` in order
/// with a flush and a short pause between each, so chunk boundaries survive
/// to the client. Returns the endpoint URL to POST to.
async fn serve_once(parts: Vec<Vec<u8>>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;

        for part in parts {
            socket.write_all(&part).await.unwrap();
            socket.flush().await.unwrap();
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/api/generate")
}

/// Frame body pieces as one chunked-encoding response, one wire write per
/// piece.
fn chunked_response(pieces: &[&[u8]]) -> Vec<Vec<u8>> {
    let mut parts = vec![
        b"HTTP/1.1 200 OK\r\n\
          content-type: text/plain; charset=utf-8\r\n\
          transfer-encoding: chunked\r\n\r\n"
            .to_vec(),
    ];
    for piece in pieces {
        let mut framed = format!("{:x}\r\n", piece.len()).into_bytes();
        framed.extend_from_slice(piece);
        framed.extend_from_slice(b"\r\n");
        parts.push(framed);
    }
    parts.push(b"0\r\n\r\n".to_vec());
    parts
}

#[tokio::test]
async fn accumulates_chunks_in_arrival_order() {
    let endpoint = serve_once(chunked_response(&[b"Hello, ", b"world", b"!"])).await;

    let text = generate(&endpoint, "any prompt").await.expect("stream failed");
    assert_eq!(text, "Hello, world!");
}

#[tokio::test]
async fn multibyte_character_split_across_wire_chunks_decodes_cleanly() {
    // 'ñ' is C3 B1 — the boundary lands between its two bytes.
    let endpoint = serve_once(chunked_response(&[b"Se\xC3", b"\xB1or abogado"])).await;

    let text = generate(&endpoint, "any prompt").await.expect("stream failed");
    assert_eq!(text, "Señor abogado");
    assert!(!text.contains('\u{FFFD}'));
}

#[tokio::test]
async fn empty_body_yields_empty_text_not_an_error() {
    let endpoint = serve_once(vec![
        b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n".to_vec(),
    ])
    .await;

    let text = generate(&endpoint, "any prompt").await.expect("empty body failed");
    assert_eq!(text, "");
}

#[tokio::test]
async fn rejection_carries_status_body_and_rate_limit_headers() {
    let endpoint = serve_once(vec![
        b"HTTP/1.1 429 Too Many Requests\r\n\
          x-ratelimit-limit: 10\r\n\
          x-ratelimit-remaining: 0\r\n\
          content-length: 18\r\n\r\n\
          Rate limit reached"
            .to_vec(),
    ])
    .await;

    let err = generate(&endpoint, "any prompt").await.expect_err("expected rejection");
    match err {
        GenerateError::Rejected(failure) => {
            assert_eq!(failure.status, 429);
            assert_eq!(failure.body, "Rate limit reached");
            assert_eq!(failure.headers.limit.as_deref(), Some("10"));
            assert_eq!(failure.headers.remaining.as_deref(), Some("0"));
            assert_eq!(failure.headers.reset, None);
            assert_eq!(failure.message, "Request failed with status code 429");
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn rejection_with_no_rate_limit_headers_leaves_them_unset() {
    let endpoint = serve_once(vec![
        b"HTTP/1.1 500 Internal Server Error\r\n\
          content-length: 5\r\n\r\n\
          boom!"
            .to_vec(),
    ])
    .await;

    let err = generate(&endpoint, "any prompt").await.expect_err("expected rejection");
    match err {
        GenerateError::Rejected(failure) => {
            assert_eq!(failure.status, 500);
            assert_eq!(failure.body, "boom!");
            assert_eq!(failure.headers.limit, None);
            assert_eq!(failure.headers.remaining, None);
            assert_eq!(failure.headers.reset, None);
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_surfaces_as_transport_error() {
    // Nothing listens here; the connect itself fails.
    let err = generate("http://127.0.0.1:9/api/generate", "any prompt")
        .await
        .expect_err("expected transport failure");
    assert!(matches!(err, GenerateError::Transport(_)));
}
