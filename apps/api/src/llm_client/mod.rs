/// LLM Client — the single point of entry for all Groq API calls in Disha.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All model interactions MUST go through this module.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod extract;
pub mod prompts;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Temperature for free-form chat replies.
pub const CHAT_TEMPERATURE: f32 = 0.7;
/// Temperature for structured JSON replies.
pub const JSON_TEMPERATURE: f32 = 0.3;
/// Default token budget for free-form chat.
pub const CHAT_MAX_TOKENS: u32 = 800;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,

    #[error("{0}")]
    Parse(String),
}

/// A single role-tagged message in a conversation.
/// Roles are "system", "user" or "assistant", as on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    message: String,
}

/// The single LLM client used by every capability module.
/// Wraps the Groq chat-completions API (OpenAI wire format).
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }

    /// Sends one chat completion request and returns the assistant reply.
    ///
    /// `system`, when non-empty, is prepended as a system message. `model`
    /// overrides the configured default for this call only. Errors propagate
    /// to the caller — there is no retry.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        system: &str,
        model: Option<&str>,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let mut full_messages = Vec::with_capacity(messages.len() + 1);
        if !system.is_empty() {
            full_messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.to_string(),
            });
        }
        full_messages.extend_from_slice(messages);

        let request_body = CompletionRequest {
            model: model.unwrap_or(&self.model),
            messages: &full_messages,
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's error message when the body carries one
            let message = serde_json::from_str::<GroqError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.is_empty())
            .ok_or(LlmError::EmptyContent)
    }

    /// Requests a JSON-only reply and decodes it into `T`.
    ///
    /// Forces `JSON_TEMPERATURE` and appends the JSON-only instruction to the
    /// system message. The reply goes through the tolerant extractor before
    /// the typed decode, so fences or stray prose around the payload do not
    /// fail the request — an unparseable payload does.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        max_tokens: u32,
    ) -> Result<T, LlmError> {
        let json_system = if system.is_empty() {
            prompts::JSON_ONLY_INSTRUCTION.to_string()
        } else {
            format!("{system}\n\n{}", prompts::JSON_ONLY_INSTRUCTION)
        };

        let messages = [ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }];

        let raw = self
            .complete(&messages, &json_system, None, max_tokens, JSON_TEMPERATURE)
            .await?;

        let payload = extract::extract_json(&raw).map_err(|e| LlmError::Parse(e.to_string()))?;
        serde_json::from_str(payload).map_err(|e| LlmError::Parse(e.to_string()))
    }
}
