use super::reading::Reading;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("building HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("posting reading: {0}")]
    Send(#[from] reqwest::Error),

    #[error("encoding reading: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct Uplink {
    client: reqwest::Client,
    url: String,
}

impl Uplink {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, TransportError> {
        // The collector lives on the local network behind a self
        // signed certificate, so peer verification stays off.
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(timeout)
            .build()
            .map_err(TransportError::Client)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub async fn send(&self, reading: &Reading) -> Result<(), TransportError> {
        let body = serde_json::to_string(reading)?;
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        // Only the absence of a transport error counts as success; the
        // collector's status code is not inspected.
        debug!("collector answered {}", response.status());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    // Accepts a single connection, captures the whole HTTP request and
    // answers 200 with an empty body.
    async fn one_shot_server() -> (SocketAddr, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf).into_owned();
                if let Some(end) = text.find("\r\n\r\n") {
                    let length: usize = text[..end]
                        .lines()
                        .find_map(|line| {
                            line.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse().unwrap())
                        })
                        .unwrap_or(0);
                    if buf.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n")
                .await
                .unwrap();
            String::from_utf8_lossy(&buf).into_owned()
        });
        (addr, handle)
    }

    #[tokio::test]
    async fn posts_exact_json_body() {
        let (addr, server) = one_shot_server().await;
        let uplink = Uplink::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();

        let reading = Reading::new("station1", 20.0, 45.333, 1013.25);
        uplink.send(&reading).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST / HTTP/1.1\r\n"));
        let lowered = request.to_ascii_lowercase();
        assert!(lowered.contains("content-type: application/json"));
        assert!(request
            .ends_with(r#"{"name":"station1","temp":68.0,"humidity":45.33,"pressure":1013.25}"#));
    }

    #[tokio::test]
    async fn auth_code_never_leaves_the_process() {
        let (addr, server) = one_shot_server().await;
        let uplink = Uplink::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();

        let reading = Reading::new("station1", 20.0, 45.333, 1013.25);
        uplink.send(&reading).await.unwrap();

        let request = server.await.unwrap();
        assert!(!request.contains("auth"));
        assert!(!request.contains("s3cr3t"));
    }

    #[tokio::test]
    async fn non_2xx_status_is_still_success() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut chunk = [0u8; 4096];
            let _ = socket.read(&mut chunk).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\r\n")
                .await
                .unwrap();
        });

        let uplink = Uplink::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();
        let reading = Reading::new("station1", 20.0, 45.333, 1013.25);
        assert!(uplink.send(&reading).await.is_ok());
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Bind and drop to get a port nobody is listening on.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let uplink = Uplink::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();
        let reading = Reading::new("station1", 20.0, 45.333, 1013.25);
        match uplink.send(&reading).await {
            Err(TransportError::Send(_)) => (),
            other => panic!("expected a send error, got {other:?}"),
        }
    }
}
