//! OpenAI-compatible chat completions advisor
//!
//! Uses ureq (sync HTTP), so no async runtime is needed.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::prompts::{SYSTEM_PROMPT, build_route_prompt};
use super::{AdviceError, AdviceResult, Advisor};
use crate::route::ScoredRoute;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdviceConfig {
    pub model: String,
    pub api_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            max_tokens: 500,
            temperature: 0.2,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Advisor backed by an OpenAI-compatible chat completions API.
pub struct OpenAiAdvisor {
    config: AdviceConfig,
    api_key: String,
    agent: ureq::Agent,
}

fn make_agent(timeout: Duration) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // status codes are mapped to AdviceError::Api below
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

impl OpenAiAdvisor {
    pub fn new(config: AdviceConfig, api_key: impl Into<String>) -> Self {
        let agent = make_agent(config.timeout);
        Self {
            config,
            api_key: api_key.into(),
            agent,
        }
    }

    /// Build an advisor from `OPENAI_API_KEY`.
    pub fn from_env(config: AdviceConfig) -> AdviceResult<Self> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AdviceError::MissingApiKey {
                env_var: API_KEY_ENV.to_string(),
            })?;
        Ok(Self::new(config, api_key))
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send a chat completion request and return the first choice, trimmed.
    pub fn complete(&self, messages: Vec<Message>) -> AdviceResult<String> {
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .agent
            .post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(&body)
            .map_err(|e| AdviceError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.into_body().read_to_string().unwrap_or_default();
            return Err(AdviceError::Api { status, message });
        }

        let resp: ChatResponse = response
            .into_body()
            .read_json()
            .map_err(|e| AdviceError::Parse(e.to_string()))?;

        parse_first_choice(resp)
    }
}

impl Advisor for OpenAiAdvisor {
    fn advise(&self, route: &ScoredRoute) -> AdviceResult<String> {
        self.complete(vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(build_route_prompt(route)),
        ])
    }

    fn name(&self) -> &str {
        "openai"
    }
}

fn parse_first_choice(resp: ChatResponse) -> AdviceResult<String> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| AdviceError::Parse("no response choices".to_string()))
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
