//! Integration tests for the OpenRouter provider against a local
//! canned-response HTTP server. No external network access.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use lingua_bot::llm::providers::openrouter::OpenRouterProvider;
use lingua_bot::llm::{LlmProvider, ProviderError};
use lingua_bot::session::language::Language;
use lingua_bot::session::{Role, Session, Turn};

/// Serve exactly one HTTP exchange: read the full request (headers + body),
/// hand the raw request bytes back through `req_tx`, write the canned
/// response, close.
async fn serve_once(status_line: &str, body: &str, req_tx: oneshot::Sender<Vec<u8>>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut req = Vec::new();
        let mut buf = [0u8; 4096];

        // Read headers, then the declared body length.
        let header_end = loop {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break req.len();
            }
            req.extend_from_slice(&buf[..n]);
            if let Some(pos) = req.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let headers = String::from_utf8_lossy(&req[..header_end]).to_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);
        while req.len() < header_end + content_length {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            req.extend_from_slice(&buf[..n]);
        }

        let _ = req_tx.send(req);
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
    });

    format!("http://{addr}/api/v1/chat/completions")
}

fn provider_for(url: String) -> OpenRouterProvider {
    OpenRouterProvider::new(
        url,
        "test-model".into(),
        512,
        0.2,
        5,
        "sk-test".into(),
    )
    .unwrap()
}

#[tokio::test]
async fn success_returns_top_choice_text() {
    let (req_tx, _req_rx) = oneshot::channel();
    let url = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"choices":[{"message":{"content":"X"}}]}"#,
        req_tx,
    )
    .await;

    let provider = provider_for(url);
    let messages = [Turn::system("sys"), Turn::user("hi")];
    let text = provider.complete(&messages).await.unwrap();
    assert_eq!(text, "X");
}

#[tokio::test]
async fn request_carries_bearer_auth_and_payload() {
    let (req_tx, req_rx) = oneshot::channel();
    let url = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"choices":[{"message":{"content":"ok"}}]}"#,
        req_tx,
    )
    .await;

    let provider = provider_for(url);
    let messages = [Turn::system("sys"), Turn::user("hi")];
    provider.complete(&messages).await.unwrap();

    let raw = req_rx.await.unwrap();
    let raw = String::from_utf8_lossy(&raw);
    let lowered = raw.to_lowercase();
    assert!(lowered.contains("authorization: bearer sk-test"));
    assert!(raw.contains(r#""model":"test-model""#));
    assert!(raw.contains(r#""max_tokens":512"#));
    assert!(raw.contains(r#""role":"system""#));
    assert!(raw.contains(r#""role":"user""#));
}

#[tokio::test]
async fn http_500_surfaces_error_and_leaves_user_turn_last() {
    let (req_tx, _req_rx) = oneshot::channel();
    let url = serve_once(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"error":{"message":"boom","code":"server_error"}}"#,
        req_tx,
    )
    .await;

    let provider = LlmProvider::OpenRouter(provider_for(url));

    // Mirror the console's state discipline: user turn appended before the
    // call, assistant turn only on success.
    let mut session = Session::new(Language::English);
    let window = session.window_snapshot();
    session.append(Turn::user("hello?"));

    let mut messages = vec![Turn::system(session.system_prompt())];
    messages.extend(window);
    messages.push(Turn::user("hello?"));

    let err = provider.complete(&messages).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("HTTP 500"), "unexpected error: {msg}");
    assert!(msg.contains("boom"), "unexpected error: {msg}");

    let last = session.transcript().last().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.content, "hello?");
}

#[tokio::test]
async fn malformed_body_is_error() {
    let (req_tx, _req_rx) = oneshot::channel();
    let url = serve_once("HTTP/1.1 200 OK", "definitely not json", req_tx).await;

    let provider = provider_for(url);
    let messages = [Turn::user("hi")];
    let err = provider.complete(&messages).await.unwrap_err();
    assert!(matches!(err, ProviderError::Request(_)));
    assert!(err.to_string().contains("parse"));
}
