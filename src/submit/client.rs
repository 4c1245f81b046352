//! HTTP client posting RSVPs to a form-collection service
//!
//! The endpoint is a hosted form backend (Formspree and similar) that
//! accepts `multipart/form-data` and answers JSON when asked to.

use super::error::SubmitError;
use super::traits::FormSubmitter;
use crate::state::RsvpValues;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart;
use std::time::Duration;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Submitter that POSTs the form as multipart data
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    /// The HTTP client
    client: reqwest::Client,
    /// The form's action URL
    endpoint: String,
}

impl HttpSubmitter {
    /// Create a new submitter for the given endpoint
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

/// Encode every named field as a text part
fn build_form(values: &RsvpValues) -> multipart::Form {
    values
        .form_fields()
        .into_iter()
        .fold(multipart::Form::new(), |form, (name, value)| {
            form.text(name, value)
        })
}

#[async_trait]
impl FormSubmitter for HttpSubmitter {
    async fn submit(&self, values: RsvpValues) -> Result<(), SubmitError> {
        tracing::info!("Submitting RSVP to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(build_form(&values))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("RSVP request failed: {e}");
                SubmitError::from(e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("RSVP accepted ({status})");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("RSVP rejected ({status}): {body}");
        Err(SubmitError::Rejected {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DinnerChoice;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn values() -> RsvpValues {
        RsvpValues {
            name: "Jane Doe".to_string(),
            phone: "(555) 123-4567".to_string(),
            venmo: "@jane".to_string(),
            friday_dinner: Some(DinnerChoice::Yes),
            notes: String::new(),
        }
    }

    /// Whether the bytes read so far hold the whole request
    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            });
        match content_length {
            Some(len) => request.len() >= header_end + 4 + len,
            None => text.ends_with("--\r\n"),
        }
    }

    /// Accept one connection, answer with `status_line` and hand back the raw request
    async fn serve_once(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];
            while !request_complete(&request) {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            let body = r#"{"ok":true}"#;
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{addr}/f/rsvp"), handle)
    }

    #[tokio::test]
    async fn test_success_status_posts_every_field() {
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK").await;
        let submitter = HttpSubmitter::new(endpoint, Some(Duration::from_secs(5)));

        let result = submitter.submit(values()).await;
        assert!(result.is_ok(), "{result:?}");

        let request = server.await.unwrap();
        let lower = request.to_ascii_lowercase();
        assert!(request.starts_with("POST /f/rsvp "));
        assert!(lower.contains("accept: application/json"));
        assert!(lower.contains("content-type: multipart/form-data; boundary="));
        for name in ["name", "phone", "venmo", "friday-dinner", "notes"] {
            assert!(
                request.contains(&format!("name=\"{name}\"")),
                "missing part {name}"
            );
        }
        assert!(request.contains("(555) 123-4567"));
        assert!(request.contains("@jane"));
    }

    #[tokio::test]
    async fn test_error_status_is_rejected() {
        let (endpoint, server) = serve_once("HTTP/1.1 422 Unprocessable Entity").await;
        let submitter = HttpSubmitter::new(endpoint, Some(Duration::from_secs(5)));

        let result = submitter.submit(values()).await;
        assert!(matches!(result, Err(SubmitError::Rejected { status: 422 })));
        server.await.unwrap();
    }

    #[test]
    fn test_build_form_uses_multipart_boundary() {
        let form = build_form(&values());
        assert!(!form.boundary().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Nothing listens on the discard port locally
        let submitter =
            HttpSubmitter::new("http://127.0.0.1:9/f/rsvp", Some(Duration::from_secs(2)));
        let result = submitter.submit(values()).await;
        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }

    #[tokio::test]
    async fn test_invalid_url_is_transport_error() {
        let submitter = HttpSubmitter::new("not a url", None);
        let result = submitter.submit(values()).await;
        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }
}
