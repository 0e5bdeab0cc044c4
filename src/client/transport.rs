//! Transport seam between the submitter and the server
//!
//! The submitter only needs "send a command string, get a response string";
//! putting that behind a trait lets tests drive the submitter with a fake
//! instead of a live server.

use crate::core::error::{QuestError, Result};
use crate::server::{CommandRequest, CommandResponse};
use async_trait::async_trait;
use reqwest::Client;

/// One command round trip
#[async_trait]
pub trait CommandTransport: Send + Sync {
    /// Send a command, returning the server's response text
    async fn send(&self, command: &str) -> Result<String>;
}

/// The real transport: `POST /command` with a JSON body
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for a server base URL (e.g. `http://127.0.0.1:3000`)
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/command", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl CommandTransport for HttpTransport {
    async fn send(&self, command: &str) -> Result<String> {
        let request = CommandRequest {
            command: command.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| QuestError::TransportError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(QuestError::TransportError(format!(
                "server returned {}: {}",
                status, error_text
            )));
        }

        // A body that is not JSON, or JSON without a `response` field, is
        // a failure like any transport error
        let body: CommandResponse = response
            .json()
            .await
            .map_err(|e| QuestError::TransportError(e.to_string()))?;

        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        let transport = HttpTransport::new("http://localhost:3000/");
        assert_eq!(transport.endpoint, "http://localhost:3000/command");

        let transport = HttpTransport::new("http://localhost:3000");
        assert_eq!(transport.endpoint, "http://localhost:3000/command");
    }
}
