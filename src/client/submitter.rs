//! The command submitter
//!
//! Reads the input field, posts the command, and renders the echoed
//! command and the server's reply into the transcript. The round trip is
//! fire-and-forget: `submit` returns as soon as the request is issued and
//! the rendering runs as a continuation when the response arrives, so
//! rapid submissions interleave in arrival order. Failures are logged to
//! the diagnostic channel and leave the page untouched.

use crate::client::page::{InputField, Transcript};
use crate::client::transport::CommandTransport;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Submits commands from an input field to a transport, rendering results
/// into a transcript
pub struct CommandSubmitter {
    input: InputField,
    transcript: Transcript,
    transport: Arc<dyn CommandTransport>,
}

impl CommandSubmitter {
    pub fn new(
        input: InputField,
        transcript: Transcript,
        transport: Arc<dyn CommandTransport>,
    ) -> Self {
        Self {
            input,
            transcript,
            transport,
        }
    }

    /// Submit the current input field contents
    ///
    /// If the trimmed input is empty, nothing happens and no request is
    /// issued. Otherwise the round trip is spawned and its handle
    /// returned; the caller may await it but does not have to. On
    /// success, in order: the command is echoed into the transcript
    /// prefixed with `"> "`, the response is appended, the input field is
    /// cleared, and the transcript scrolls to the bottom. On any failure
    /// the error is logged and nothing else changes.
    pub fn submit(&self) -> Option<JoinHandle<()>> {
        let command = self.input.value().trim().to_string();
        if command.is_empty() {
            return None;
        }

        let input = self.input.clone();
        let transcript = self.transcript.clone();
        let transport = Arc::clone(&self.transport);

        Some(tokio::spawn(async move {
            match transport.send(&command).await {
                Ok(response) => {
                    transcript.append(format!("> {}", command));
                    transcript.append(response);
                    input.clear();
                    transcript.scroll_to_bottom();
                }
                Err(error) => {
                    tracing::error!(%error, command = %command, "command submission failed");
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{QuestError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test double: counts calls, echoes a canned reply or fails
    struct FakeTransport {
        calls: AtomicUsize,
        reply: std::result::Result<String, String>,
    }

    impl FakeTransport {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply: Ok(reply.to_string()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply: Err(message.to_string()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CommandTransport for FakeTransport {
        async fn send(&self, _command: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(message) => Err(QuestError::TransportError(message.clone())),
            }
        }
    }

    fn submitter_with(
        transport: Arc<FakeTransport>,
    ) -> (CommandSubmitter, InputField, Transcript) {
        let input = InputField::new();
        let transcript = Transcript::new();
        let submitter = CommandSubmitter::new(input.clone(), transcript.clone(), transport);
        (submitter, input, transcript)
    }

    #[tokio::test]
    async fn test_empty_input_issues_no_request() {
        let transport = FakeTransport::replying("unused");
        let (submitter, input, transcript) = submitter_with(Arc::clone(&transport));

        for value in ["", "   ", "\t\n"] {
            input.set(value);
            assert!(submitter.submit().is_none());
        }

        assert_eq!(transport.calls(), 0);
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn test_successful_round_trip_renders_and_clears() {
        let transport = FakeTransport::replying("You see a room.");
        let (submitter, input, transcript) = submitter_with(Arc::clone(&transport));

        input.set("  look  ");
        submitter.submit().expect("request spawned").await.unwrap();

        assert_eq!(transport.calls(), 1);
        assert_eq!(transcript.entries(), vec!["> look", "You see a room."]);
        assert_eq!(input.value(), "");
        assert_eq!(transcript.scroll_top(), transcript.scroll_height());
    }

    #[tokio::test]
    async fn test_failure_leaves_page_untouched() {
        let transport = FakeTransport::failing("connection refused");
        let (submitter, input, transcript) = submitter_with(Arc::clone(&transport));

        input.set("go north");
        submitter.submit().expect("request spawned").await.unwrap();

        assert_eq!(transport.calls(), 1);
        assert!(transcript.is_empty());
        // Input keeps its prior, untrimmed value
        assert_eq!(input.value(), "go north");
        assert_eq!(transcript.scroll_top(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_submissions_interleave_by_arrival() {
        let transport = FakeTransport::replying("ok");
        let (submitter, input, transcript) = submitter_with(Arc::clone(&transport));

        input.set("first");
        let a = submitter.submit().expect("request spawned");
        input.set("second");
        let b = submitter.submit().expect("request spawned");
        a.await.unwrap();
        b.await.unwrap();

        assert_eq!(transport.calls(), 2);
        // Both round trips rendered; each echoed command precedes its reply
        let entries = transcript.entries();
        assert_eq!(entries.len(), 4);
        let first_pos = entries.iter().position(|e| e == "> first").unwrap();
        let second_pos = entries.iter().position(|e| e == "> second").unwrap();
        assert_eq!(entries[first_pos + 1], "ok");
        assert_eq!(entries[second_pos + 1], "ok");
    }
}
