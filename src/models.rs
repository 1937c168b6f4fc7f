//! Known chat models.
//!
//! The list is advisory: the remote catalog changes on its own schedule, so an
//! unlisted model only produces a warning and the request still goes out.

use tracing::warn;

pub const DEFAULT_MODEL: &str = "gpt-4o";

pub const AVAILABLE_MODELS: &[&str] = &[
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4-turbo",
    "gpt-4-turbo-preview",
    "gpt-3.5-turbo",
    "gpt-3.5-turbo-16k",
];

pub fn is_known(model: &str) -> bool {
    AVAILABLE_MODELS.contains(&model)
}

/// Log a warning for models outside the allow-list. Never rejects.
pub fn check_model(model: &str) -> bool {
    let known = is_known(model);
    if !known {
        warn!(model, "model may not be available, proceeding anyway");
    }
    known
}

/// Outcome of a user's model selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelChoice {
    Selected(&'static str),
    /// A number outside `1..=AVAILABLE_MODELS.len()`.
    OutOfRange(u64),
    Unrecognized(String),
}

/// Interpret `input` as a 1-based index into [`AVAILABLE_MODELS`] or an exact model name.
pub fn choose_model(input: &str) -> ModelChoice {
    let input = input.trim();
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        return match input.parse::<u64>() {
            Ok(n) => match usize::try_from(n)
                .ok()
                .filter(|i| (1..=AVAILABLE_MODELS.len()).contains(i))
            {
                Some(i) => ModelChoice::Selected(AVAILABLE_MODELS[i - 1]),
                None => ModelChoice::OutOfRange(n),
            },
            // too many digits for u64
            Err(_) => ModelChoice::OutOfRange(u64::MAX),
        };
    }
    match AVAILABLE_MODELS.iter().find(|m| **m == input) {
        Some(model) => ModelChoice::Selected(*model),
        None => ModelChoice::Unrecognized(input.to_string()),
    }
}

/// The numbered model list shown by the interactive shell.
pub fn model_listing(default_model: &str) -> String {
    let mut out = String::from("Available models:\n");
    for (i, model) in AVAILABLE_MODELS.iter().enumerate() {
        let marker = if *model == default_model {
            " (default)"
        } else {
            ""
        };
        out.push_str(&format!("{}. {model}{marker}\n", i + 1));
    }
    out
}
