use serde::{Deserialize, Serialize};

/// Persona used for open-ended analysis requests.
pub const ANALYST_PERSONA: &str = "You are a helpful assistant that analyzes text and documents.";

/// Persona used when answering questions after a worked example.
pub const LIST_PERSONA: &str = "You are a helpful assistant and you give answers in a list. \
                                People generally ask about text and books.";

pub const DEFAULT_TEXT_PROMPT: &str = "Analyze this text";
pub const DEFAULT_DOCUMENT_PROMPT: &str = "Analyze this document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One worked question/answer exchange shown to the model before the real question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FewShotExample {
    pub prompt: String,
    pub response: String,
}

impl FewShotExample {
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
        }
    }
}

/// `[system, user("{prompt}: {text}")]`
pub fn analysis_messages(prompt: &str, text: &str) -> Vec<Message> {
    vec![
        Message::system(ANALYST_PERSONA),
        Message::user(format!("{prompt}: {text}")),
    ]
}

/// `[system, user(example), assistant(example), user(question about text)]`
pub fn few_shot_messages(example: &FewShotExample, prompt: &str, text: &str) -> Vec<Message> {
    vec![
        Message::system(LIST_PERSONA),
        Message::user(example.prompt.as_str()),
        Message::assistant(example.response.as_str()),
        Message::user(format!("Now, about this following text, {prompt}: {text}")),
    ]
}
