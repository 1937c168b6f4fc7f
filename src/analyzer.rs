//! Library entry point: load documents and ask the model about them.

use crate::config::Config;
use crate::error::Result;
use crate::llm::{ChatBackend, CompletionClient, OpenAiBackend};
use crate::loader;
use crate::prompt::{self, DEFAULT_DOCUMENT_PROMPT, DEFAULT_TEXT_PROMPT, FewShotExample};
use std::path::Path;
use tracing::info;

pub struct DocumentAnalyzer<B> {
    client: CompletionClient<B>,
    default_model: String,
}

impl DocumentAnalyzer<OpenAiBackend> {
    /// Build the HTTP-backed analyzer. Fails if the API key is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = CompletionClient::from_config(config)?;
        Ok(Self::new(client, config.llm.model.clone()))
    }
}

impl<B: ChatBackend> DocumentAnalyzer<B> {
    pub fn new(client: CompletionClient<B>, default_model: impl Into<String>) -> Self {
        Self {
            client,
            default_model: default_model.into(),
        }
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn client(&self) -> &CompletionClient<B> {
        &self.client
    }

    pub fn load_text(&self, path: impl AsRef<Path>) -> Result<String> {
        loader::load(path)
    }

    /// Free-form analysis of `text`. Defaults to "Analyze this text" and the default model.
    pub async fn analyze_text(
        &self,
        text: &str,
        prompt: Option<&str>,
        model: Option<&str>,
    ) -> Result<String> {
        let prompt = prompt.unwrap_or(DEFAULT_TEXT_PROMPT);
        let messages = prompt::analysis_messages(prompt, text);
        self.client
            .complete(&messages, model.unwrap_or(&self.default_model))
            .await
    }

    pub async fn analyze_document(
        &self,
        path: impl AsRef<Path>,
        prompt: Option<&str>,
        model: Option<&str>,
    ) -> Result<String> {
        let path = path.as_ref();
        let text = self.load_text(path)?;
        info!(path = %path.display(), chars = text.len(), "analyzing document");
        self.analyze_text(&text, Some(prompt.unwrap_or(DEFAULT_DOCUMENT_PROMPT)), model)
            .await
    }

    /// Answer `prompt` about `text`, steered by a worked example.
    pub async fn ask_questions(
        &self,
        prompt: &str,
        example: &FewShotExample,
        text: &str,
        model: Option<&str>,
    ) -> Result<String> {
        let messages = prompt::few_shot_messages(example, prompt, text);
        self.client
            .complete(&messages, model.unwrap_or(&self.default_model))
            .await
    }
}
