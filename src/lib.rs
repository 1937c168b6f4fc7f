//! Ask a hosted chat model about a text or PDF document.
//!
//! The pipeline is linear: [`loader`] turns a path into text, [`prompt`]
//! builds the role-tagged message sequence, and [`llm::CompletionClient`]
//! sends it and returns the first candidate. [`analyzer::DocumentAnalyzer`]
//! ties the three together for library use, and [`shell`] runs the
//! interactive loop used by the binary.
//!
//! ## Environment variables
//! - `OPENAI_API_KEY`: required. The credential passed as a bearer token.
//! - `OPENAI_MODEL`: optional. Overrides the default model (`gpt-4o`).
//! - `OPENAI_BASE_URL`: optional. Any OpenAI-compatible endpoint.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod http;
pub mod llm;
pub mod loader;
pub mod models;
pub mod prompt;
pub mod shell;

pub use analyzer::DocumentAnalyzer;
pub use error::{Error, Result};
pub use prompt::FewShotExample;
