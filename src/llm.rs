use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::models;
use crate::prompt::Message;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, warn};

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

// -- OpenAI-compatible format --

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// A response with a single choice, as most endpoints return.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![ChatChoice {
                message: ChatChoiceMessage {
                    content: Some(text.into()),
                },
            }],
        }
    }

    /// Text of the first choice.
    pub fn into_first_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::parse("empty response from LLM"))?
            .message
            .content
            .ok_or_else(|| Error::parse("LLM response has no message content"))
    }
}

/// The remote end of a chat completion: one request in, one response out.
pub trait ChatBackend {
    fn chat(&self, request: &ChatRequest<'_>) -> impl Future<Output = Result<ChatResponse>> + Send;
}

/// `chat/completions` over HTTP with bearer auth.
pub struct OpenAiBackend {
    api_key: String,
    base_url: String,
    http: HttpClient,
}

impl OpenAiBackend {
    pub fn new(api_key: String, base_url: String, http: HttpClient) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        let http = HttpClient::new(
            concat!("doc-analyzer/", env!("CARGO_PKG_VERSION")),
            config.llm.timeout(),
        )?;
        Ok(Self::new(api_key, config.llm.base_url.clone(), http))
    }
}

impl ChatBackend for OpenAiBackend {
    async fn chat(&self, request: &ChatRequest<'_>) -> Result<ChatResponse> {
        let body = serde_json::to_string(request)
            .map_err(|e| Error::parse(format!("serialize request: {e}")))?;

        let url = format!("{}/chat/completions", self.base_url);
        let response_text = self
            .http
            .post_json_raw(
                &url,
                &body,
                &[("Authorization", &format!("Bearer {}", self.api_key))],
            )
            .await
            .map_err(|e| {
                warn!("LLM API error: {e}");
                e
            })?;

        serde_json::from_str(&response_text)
            .map_err(|e| Error::parse(format!("parse LLM response: {e}")))
    }
}

/// Sends a message sequence to a [`ChatBackend`] and returns the first candidate's text.
pub struct CompletionClient<B> {
    backend: B,
    sampling: SamplingParams,
}

impl<B: ChatBackend> CompletionClient<B> {
    pub fn new(backend: B, sampling: SamplingParams) -> Self {
        Self { backend, sampling }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// One request, no retry. The returned text is not post-processed.
    pub async fn complete(&self, messages: &[Message], model: &str) -> Result<String> {
        if messages.is_empty() {
            return Err(Error::InvalidRequest("no messages to send".into()));
        }
        models::check_model(model);

        debug!(
            model,
            messages = messages.len(),
            temperature = self.sampling.temperature,
            max_tokens = self.sampling.max_tokens,
            "sending LLM request"
        );
        let request = ChatRequest {
            model,
            messages,
            temperature: self.sampling.temperature,
            max_tokens: self.sampling.max_tokens,
        };
        let response = self.backend.chat(&request).await?;
        response.into_first_text()
    }
}

impl CompletionClient<OpenAiBackend> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = OpenAiBackend::from_config(config)?;
        let sampling = SamplingParams {
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
        };
        Ok(Self::new(backend, sampling))
    }
}
