//! Chat Proxy Module
//!
//! Thin forwarder to an external chat-completion API. A fixed system prompt
//! frames the assistant as a medical-education tutor; the client's prior
//! turns are passed through unchanged. Any upstream failure collapses into a
//! canned user-facing message — the caller never sees upstream error detail.
//! No retries, no backoff.

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Shown to the user whenever the upstream call fails for any reason
pub const FALLBACK_MESSAGE: &str =
    "I'm having trouble connecting right now. Please try again in a moment — \
     in the meantime, the library and drug reference are fully available.";

const SYSTEM_PROMPT: &str =
    "You are Synapse, a medical-education tutor. Explain clinical concepts \
     clearly and accurately for medical students, cite mechanisms rather than \
     mnemonics where possible, and remind users that you do not provide \
     personal medical advice.";

const DEFAULT_MODEL: &str = "gpt-4o-mini";

// ============================================================
// CONFIGURATION
// ============================================================

/// Upstream endpoint settings, read from the environment at startup
#[derive(Debug, Clone, Default)]
pub struct ChatConfig {
    /// Full completions URL, e.g. https://api.openai.com/v1/chat/completions
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
}

impl ChatConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("CHAT_API_URL").ok(),
            api_key: std::env::var("CHAT_API_KEY").ok(),
            model: std::env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

/// One prior turn of the conversation, passed through from the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// "user" or "assistant"
    pub role: String,
    pub content: String,
}

#[derive(Debug, Error)]
enum ChatError {
    #[error("chat upstream is not configured")]
    NotConfigured,

    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("upstream response had no completion text")]
    MalformedResponse,
}

// ============================================================
// CLIENT
// ============================================================

/// HTTP client wrapper around the upstream completion API
pub struct ChatClient {
    config: ChatConfig,
    http: reqwest::Client,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, http }
    }

    pub fn from_env() -> Self {
        Self::new(ChatConfig::from_env())
    }

    /// Forward a message (plus history) upstream. Always yields a message:
    /// on any failure the canned fallback is returned instead of an error.
    pub async fn complete(&self, message: &str, history: &[ChatTurn]) -> String {
        match self.try_complete(message, history).await {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("Chat upstream failed, serving fallback: {}", e);
                FALLBACK_MESSAGE.to_string()
            }
        }
    }

    async fn try_complete(&self, message: &str, history: &[ChatTurn]) -> Result<String, ChatError> {
        let url = self.config.api_url.as_deref().ok_or(ChatError::NotConfigured)?;

        let mut messages = vec![json!({"role": "system", "content": SYSTEM_PROMPT})];
        for turn in history {
            messages.push(json!({"role": turn.role, "content": turn.content}));
        }
        messages.push(json!({"role": "user", "content": message}));

        let mut request = self.http.post(url).json(&json!({
            "model": self.config.model,
            "messages": messages,
        }));
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ChatError::Status(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        body["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or(ChatError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_unconfigured_upstream_yields_fallback() {
        let client = ChatClient::new(ChatConfig {
            api_url: None,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        });

        let reply = client.complete("What causes S3 gallop?", &[]).await;
        assert_eq!(reply, FALLBACK_MESSAGE);
    }

    #[actix_web::test]
    async fn test_unreachable_upstream_yields_fallback() {
        // Nothing listens on this port; the connection is refused immediately.
        let client = ChatClient::new(ChatConfig {
            api_url: Some("http://127.0.0.1:9/v1/chat/completions".to_string()),
            api_key: Some("test-key".to_string()),
            model: DEFAULT_MODEL.to_string(),
        });

        let history = vec![ChatTurn {
            role: "user".to_string(),
            content: "Earlier question".to_string(),
        }];
        let reply = client.complete("Follow-up question", &history).await;
        assert_eq!(reply, FALLBACK_MESSAGE);
    }
}
