#![allow(dead_code)]

use doc_analyzer::llm::{ChatBackend, ChatRequest, ChatResponse, CompletionClient, SamplingParams};
use doc_analyzer::prompt::Message;
use doc_analyzer::{DocumentAnalyzer, Result};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Backend that records every request and answers from a queue.
///
/// Once the queue is empty it answers with `fallback`.
pub struct FakeBackend {
    fallback: String,
    replies: Mutex<VecDeque<Result<ChatResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeBackend {
    pub fn replying(text: &str) -> Self {
        Self {
            fallback: text.to_string(),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_reply(&self, reply: Result<ChatResponse>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatBackend for FakeBackend {
    async fn chat(&self, request: &ChatRequest<'_>) -> Result<ChatResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            model: request.model.to_string(),
            messages: request.messages.to_vec(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        });
        let next = self.replies.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(ChatResponse::from_text(self.fallback.clone())))
    }
}

pub fn fake_analyzer(reply: &str) -> DocumentAnalyzer<FakeBackend> {
    let client = CompletionClient::new(FakeBackend::replying(reply), SamplingParams::default());
    DocumentAnalyzer::new(client, "gpt-4o")
}

/// Write a PDF with one page per entry in `pages`, each showing that text.
pub fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}
