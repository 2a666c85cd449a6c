//! Client for the OpenAI-compatible chat completions API.
//!
//! A thin pass-through: one POST per chat turn, no streaming, no retry. The
//! counseling service degrades to a fallback reply when this client fails.

use serde_json::{json, Value};

use crate::server::{error::AppError, model::chat::ChatTurn};

const MAX_COMPLETION_TOKENS: u32 = 1000;

#[derive(Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(client: reqwest::Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    /// Requests one completion for the given context window.
    ///
    /// # Returns
    /// - `Ok(String)` - The assistant reply text
    /// - `Err(AppError)` - Transport failure, non-2xx status, or a response
    ///   with no usable content
    pub async fn chat(&self, turns: &[ChatTurn]) -> Result<String, AppError> {
        let messages: Vec<Value> = turns
            .iter()
            .map(|turn| json!({ "role": turn.role.as_str(), "content": turn.content }))
            .collect();

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": messages,
                "max_tokens": MAX_COMPLETION_TOKENS,
            }))
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;

        extract_reply(&body).ok_or_else(|| {
            AppError::InternalError("Chat completion response had no content".to_string())
        })
    }
}

/// Pulls the reply text out of a chat completion response body.
fn extract_reply(body: &Value) -> Option<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extracts_reply_from_completion_body() {
        let body = json!({
            "choices": [{ "message": { "role": "assistant", "content": "  안녕하세요.  " } }]
        });

        assert_eq!(extract_reply(&body), Some("안녕하세요.".to_string()));
    }

    #[test]
    fn returns_none_for_missing_choices() {
        assert_eq!(extract_reply(&json!({})), None);
        assert_eq!(extract_reply(&json!({ "choices": [] })), None);
    }

    #[test]
    fn returns_none_for_empty_content() {
        let body = json!({
            "choices": [{ "message": { "content": "   " } }]
        });

        assert_eq!(extract_reply(&body), None);
    }
}
