use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::app::Result;
use crate::domain::PostId;
use crate::poster::{PostError, Poster};

#[derive(Serialize)]
struct OutboundPost<'a> {
    text: &'a str,
    in_reply_to: Option<&'a str>,
}

/// Sends each post as JSON to an HTTP endpoint that answers with `{"id": ...}`.
///
/// Authentication with the platform is the endpoint's concern.
pub struct WebhookPoster {
    client: Client,
    url: String,
}

impl WebhookPoster {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("threader/0.1.0")
            .build()?;

        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Poster for WebhookPoster {
    async fn post(&self, text: &str, reply_to: Option<&PostId>) -> std::result::Result<PostId, PostError> {
        let payload = OutboundPost {
            text,
            in_reply_to: reply_to.map(PostId::as_str),
        };
        let body =
            serde_json::to_vec(&payload).map_err(|e| PostError::OutboundEncode(e.to_string()))?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| PostError::Rejected(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PostError::Rejected(e.to_string()))?;

        if !status.is_success() {
            return Err(PostError::Rejected(format!(
                "{}: {}",
                status,
                String::from_utf8_lossy(&bytes)
            )));
        }

        parse_post_id(&bytes)
    }
}

fn parse_post_id(bytes: &[u8]) -> std::result::Result<PostId, PostError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| PostError::Rejected(format!("unreadable response: {e}")))?;

    match value.get("id") {
        Some(Value::String(id)) => Ok(PostId::new(id.clone())),
        Some(Value::Number(id)) => Ok(PostId::new(id.to_string())),
        _ => Err(PostError::Rejected(format!(
            "response has no id: {value}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers one request with `status` and `body`, returning the request body it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/post", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let request_body = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf).to_string();
                if let Some(split) = text.find("\r\n\r\n") {
                    let length = text[..split]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    let received = &text[split + 4..];
                    if received.len() >= length {
                        break received.to_string();
                    }
                }
                if n == 0 {
                    break String::new();
                }
            };

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request_body
        });

        (url, handle)
    }

    // Bypass any proxy from the environment; the server is on loopback.
    fn local_poster(url: String) -> WebhookPoster {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        WebhookPoster::with_client(client, url)
    }

    #[test]
    fn test_new_builds_client() {
        assert!(WebhookPoster::new("http://localhost:9000/post", Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_post_returns_string_id() {
        let (url, server) = serve_once("200 OK", r#"{"id": "9001"}"#).await;
        let poster = local_poster(url);

        let id = poster
            .post("hello", Some(&PostId::new("41")))
            .await
            .unwrap();
        assert_eq!(id, PostId::new("9001"));

        let request: Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(request["text"], "hello");
        assert_eq!(request["in_reply_to"], "41");
    }

    #[tokio::test]
    async fn test_post_accepts_numeric_id() {
        let (url, _server) = serve_once("200 OK", r#"{"id": 12}"#).await;
        let poster = local_poster(url);

        let id = poster.post("hello", None).await.unwrap();
        assert_eq!(id, PostId::new("12"));
    }

    #[tokio::test]
    async fn test_error_status_is_rejected() {
        let (url, _server) = serve_once("403 Forbidden", r#"{"error": "duplicate"}"#).await;
        let poster = local_poster(url);

        let err = poster.post("hello", None).await.unwrap_err();
        assert!(matches!(err, PostError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_unreadable_response_is_rejected() {
        let (url, _server) = serve_once("200 OK", "not json").await;
        let poster = local_poster(url);

        let err = poster.post("hello", None).await.unwrap_err();
        assert!(matches!(err, PostError::Rejected(_)));
    }

    #[test]
    fn test_parse_post_id_requires_id() {
        assert!(matches!(
            parse_post_id(br#"{"ok": true}"#),
            Err(PostError::Rejected(_))
        ));
    }
}
