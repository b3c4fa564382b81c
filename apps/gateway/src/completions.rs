//! Completion client: the single point of entry for all provider calls in
//! the gateway. No other module performs network I/O.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default chat-completion endpoint base. Override with `OPENAI_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// The model used for all completion calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4";

#[derive(Debug, Error)]
pub enum CompletionError {
    /// The provider could not be reached, or the transport failed mid-call.
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("completion provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider answered 2xx but the body is not a chat completion.
    #[error("malformed completion response: {0}")]
    Malformed(String),
}

/// A fully built prompt: the system role, the user message, and how long the
/// answer may be. Built once per request and never persisted.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_message: String,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for the chat-completions API.
///
/// One outbound call per invocation, with no retry loop. Callers are
/// responsible for checking that a credential exists before a client is
/// constructed; the client itself assumes it holds a valid key.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
    url: String,
}

impl CompletionClient {
    /// `timeout` of `None` leaves the transport default in place.
    pub fn new(api_key: String, base_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            client: builder.build().expect("Failed to build HTTP client"),
            api_key,
            url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        }
    }

    /// Sends the prompt as a chat-completion request and returns the first
    /// choice's message content, trimmed of surrounding whitespace.
    pub async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user_message,
                },
            ],
            max_tokens: prompt.max_output_tokens,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the provider's own error message when the body carries one
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("completion provider returned {status}: {message}");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: ChatResponse =
            serde_json::from_str(&body).map_err(|e| CompletionError::Malformed(e.to_string()))?;

        if let Some(usage) = &completion.usage {
            debug!(
                "completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::Malformed("response contained no choices".to_string()))?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prompt() -> Prompt {
        Prompt {
            system_instruction: "system role".to_string(),
            user_message: "user message".to_string(),
            max_output_tokens: 150,
        }
    }

    fn client_for(server: &mockito::ServerGuard) -> CompletionClient {
        CompletionClient::new("test-key".to_string(), &server.url(), None)
    }

    #[tokio::test]
    async fn test_complete_trims_content() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"  X  "}}]}"#)
            .create_async()
            .await;

        let text = client_for(&server).complete(&prompt()).await.unwrap();
        assert_eq!(text, "X");
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_and_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-4",
                "max_tokens": 150,
                "messages": [
                    { "role": "system", "content": "system role" },
                    { "role": "user", "content": "user message" }
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create_async()
            .await;

        let text = client_for(&server).complete(&prompt()).await.unwrap();
        assert_eq!(text, "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_trailing_slash_base_url() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create_async()
            .await;

        let base = format!("{}/", server.url());
        let client = CompletionClient::new("test-key".to_string(), &base, None);
        assert_eq!(client.complete(&prompt()).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_missing_choices_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"object":"chat.completion"}"#)
            .create_async()
            .await;

        let err = client_for(&server).complete(&prompt()).await.unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = client_for(&server).complete(&prompt()).await.unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_content_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant"}}]}"#)
            .create_async()
            .await;

        let err = client_for(&server).complete(&prompt()).await.unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_api_error_message_surfaced() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
            .create_async()
            .await;

        let err = client_for(&server).complete(&prompt()).await.unwrap_err();
        match err {
            CompletionError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_single_attempt_per_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .expect(1)
            .create_async()
            .await;

        let err = client_for(&server).complete(&prompt()).await.unwrap_err();
        assert!(matches!(err, CompletionError::Api { status: 500, .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        // Port 1 is never listening; the connection is refused outright.
        let client = CompletionClient::new("test-key".to_string(), "http://127.0.0.1:1", None);
        let err = client.complete(&prompt()).await.unwrap_err();
        assert!(matches!(err, CompletionError::Request(_)));
    }
}
