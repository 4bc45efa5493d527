/// OpenAI client — the single point of entry for all hosted-model calls.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// Both the chat completion used for grounded answers and the embedding
/// lookups used by the vector index go through this module.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";

/// Chat model used for grounded answer generation.
/// Intentionally hardcoded to prevent accidental drift.
pub const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Embedding model used for both index build and query-time lookups.
/// Changing this invalidates every persisted vector; see the index loader.
pub const EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Low sampling temperature to favor extractive, repeatable answers.
pub const ANSWER_TEMPERATURE: f32 = 0.1;

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Model returned empty content")]
    EmptyContent,

    #[error("Embedding response contained no vector")]
    EmptyEmbedding,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The single OpenAI client shared by the retrieval pipeline.
/// Wraps the chat-completion and embedding endpoints with retry logic.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Asks the chat model to answer `user` under the `system` instruction.
    /// Returns the first choice's text content.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request_body = ChatCompletionRequest {
            model: CHAT_MODEL,
            temperature: ANSWER_TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response: ChatCompletionResponse =
            self.send_with_retry(OPENAI_CHAT_URL, &request_body).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Chat call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens,
                usage.completion_tokens.unwrap_or(0)
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(LlmError::EmptyContent)
    }

    /// Maps a piece of text to its embedding vector.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        let request_body = EmbeddingRequest {
            model: EMBEDDING_MODEL,
            input: text,
        };

        let response: EmbeddingResponse = self
            .send_with_retry(OPENAI_EMBEDDINGS_URL, &request_body)
            .await?;

        response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .filter(|v| !v.is_empty())
            .ok_or(LlmError::EmptyEmbedding)
    }

    /// Posts a JSON body and deserializes the JSON response.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn send_with_retry<B, T>(&self, url: &str, body: &B) -> Result<T, LlmError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "OpenAI call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(url)
                .bearer_auth(&self.api_key)
                .header("content-type", "application/json")
                .json(body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("OpenAI API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = parse_error_message(&body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(response.json().await?);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// Extracts the human-readable message from an OpenAI error body,
/// falling back to the raw body when it is not the expected shape.
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<OpenAiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_openai_shape() {
        let body =
            r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(parse_error_message(body), "Incorrect API key provided");
    }

    #[test]
    fn test_parse_error_message_falls_back_to_raw_body() {
        let body = "upstream gateway timeout";
        assert_eq!(parse_error_message(body), body);
    }

    #[test]
    fn test_chat_response_deserializes() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Hi there"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3}
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Hi there")
        );
    }

    #[test]
    fn test_embedding_response_deserializes() {
        let body = r#"{"data": [{"embedding": [0.1, -0.2, 0.3], "index": 0}]}"#;
        let parsed: EmbeddingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data[0].embedding.len(), 3);
    }
}
