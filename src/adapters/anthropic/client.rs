//! Anthropic Messages API client.
//!
//! One non-streaming completion per capability call. The client owns the
//! parse-retry behavior for truncated or malformed JSON replies: the
//! request is re-asked with a reduced-output instruction up to the
//! configured retry ceiling, after which the call fails as a schema
//! violation. Transport and HTTP failures are never retried.

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::models::AnthropicConfig;

/// A message request against the Messages API.
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageParam<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Thin blocking-per-call client for the Messages endpoint.
pub struct MessagesClient {
    http: Client,
    config: AnthropicConfig,
}

impl MessagesClient {
    pub fn new(config: AnthropicConfig, api_key: &str) -> ProviderResult<Self> {
        let mut headers = header::HeaderMap::new();
        let mut key_value = header::HeaderValue::from_str(api_key)
            .map_err(|_| ProviderError::Capability("API key is not a valid header value".into()))?;
        key_value.set_sensitive(true);
        headers.insert("x-api-key", key_value);
        headers.insert(
            "anthropic-version",
            header::HeaderValue::from_str(&config.api_version).map_err(|_| {
                ProviderError::Capability("API version is not a valid header value".into())
            })?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Capability(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// One completion; returns the concatenated text blocks and whether
    /// the reply was cut off at the token ceiling.
    pub async fn complete(&self, system: &str, prompt: &str) -> ProviderResult<Completion> {
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system,
            messages: vec![MessageParam {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(format!("{}/v1/messages", self.config.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Capability(format!("messages request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Capability(format!(
                "messages request returned {status}: {}",
                truncate_body(&body)
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Capability(format!("malformed messages response: {e}")))?;

        let text: String = parsed
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text.as_str())
            .collect();
        let truncated = parsed.stop_reason.as_deref() == Some("max_tokens");

        debug!(chars = text.len(), truncated, "completion received");
        Ok(Completion { text, truncated })
    }

    /// One completion parsed into `T`, re-asking with a reduced-output
    /// instruction when the model's JSON is truncated or malformed.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        system: &str,
        prompt: &str,
    ) -> ProviderResult<T> {
        let retries = self.config.max_parse_retries;
        let mut last_error = String::new();

        for attempt in 0..=retries {
            let effective_prompt = if attempt == 0 {
                prompt.to_string()
            } else {
                format!("{prompt}\n\n{}", reduced_output_instruction(attempt, retries))
            };

            let completion = self.complete(system, &effective_prompt).await?;
            match parse_json_reply::<T>(&completion.text) {
                Ok(value) => {
                    if attempt > 0 {
                        debug!(attempt, "reply parsed after retry");
                    }
                    return Ok(value);
                }
                Err(reason) => {
                    warn!(
                        attempt,
                        truncated = completion.truncated,
                        %reason,
                        "reply was not valid JSON"
                    );
                    last_error = reason;
                }
            }
        }

        Err(ProviderError::SchemaViolation(format!(
            "reply was not valid JSON after {} attempts: {last_error}",
            retries + 1
        )))
    }
}

/// Result of one raw completion.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub truncated: bool,
}

/// Pull the JSON object out of a model reply and parse it.
///
/// Accepts a bare object, an object inside a fenced code block, or an
/// object surrounded by prose.
pub fn parse_json_reply<T: DeserializeOwned>(reply: &str) -> Result<T, String> {
    let candidate = extract_json(reply).ok_or_else(|| "no JSON object found".to_string())?;
    serde_json::from_str(candidate).map_err(|e| e.to_string())
}

fn extract_json(reply: &str) -> Option<&str> {
    // Prefer a fenced block when present.
    if let Some(start) = reply.find("```json") {
        let after = &reply[start + 7..];
        if let Some(end) = after.find("```") {
            return Some(after[..end].trim());
        }
    }
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (end >= start).then(|| &reply[start..=end])
}

fn reduced_output_instruction(attempt: u32, retries: u32) -> String {
    format!(
        "RETRY {attempt}/{retries} - REDUCE OUTPUT VOLUME.\n\
         The previous reply was cut off at the token limit and its JSON was \
         broken. Strictly observe the following:\n\
         - limit findings to at most 8 entries, keeping only the most important\n\
         - limit evidence to at most 5 entries, keeping the most reliable\n\
         - keep the summary under 200 words\n\
         - keep any analysis fields brief\n\
         - a complete JSON structure with every bracket closed takes priority \
         over completeness of content"
    )
}

fn truncate_body(body: &str) -> String {
    body.chars().take(300).collect()
}
