//! Interactive question loop over a single loaded document.
//!
//! Reads one command per line. `exit` quits, `model` switches the active
//! model, anything else is sent as a question. Completion errors are printed
//! and the loop keeps going.

use crate::analyzer::DocumentAnalyzer;
use crate::error::Result;
use crate::llm::ChatBackend;
use crate::models::{self, ModelChoice};
use crate::prompt::FewShotExample;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const RULE: &str = "========================================";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Model,
    Ask(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Self::Empty
        } else if line.eq_ignore_ascii_case("exit") {
            Self::Exit
        } else if line.eq_ignore_ascii_case("model") {
            Self::Model
        } else {
            Self::Ask(line.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingInput,
    DisplayingModels,
    Exiting,
}

pub struct Shell<'a, B> {
    analyzer: &'a DocumentAnalyzer<B>,
    example: FewShotExample,
    text: String,
    current_model: String,
}

impl<'a, B: ChatBackend> Shell<'a, B> {
    pub fn new(analyzer: &'a DocumentAnalyzer<B>, example: FewShotExample, text: String) -> Self {
        Self {
            current_model: analyzer.default_model().to_string(),
            analyzer,
            example,
            text,
        }
    }

    pub fn current_model(&self) -> &str {
        &self.current_model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.current_model = model.into();
    }

    pub fn write_banner(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Text Analysis with OpenAI Models")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Using model: {}", self.current_model)?;
        writeln!(out, "\nCommands:")?;
        writeln!(out, "- Type your question about the text")?;
        writeln!(out, "- Type 'model' to change the model")?;
        writeln!(out, "- Type 'exit' to quit")?;
        writeln!(out, "{RULE}")?;
        Ok(())
    }

    /// Run until `exit` or end of input.
    pub async fn run(&mut self, mut input: impl BufRead, mut out: impl Write) -> Result<()> {
        let mut state = State::AwaitingInput;
        loop {
            state = match state {
                State::AwaitingInput => {
                    write!(out, "\nWhat do you want to ask about the text? ")?;
                    out.flush()?;
                    match read_line(&mut input)? {
                        None => {
                            writeln!(out)?;
                            State::Exiting
                        }
                        Some(line) => self.handle(Command::parse(&line), &mut out).await?,
                    }
                }
                State::DisplayingModels => {
                    write!(out, "\n{}", models::model_listing(self.analyzer.default_model()))?;
                    write!(out, "\nEnter model number or name: ")?;
                    out.flush()?;
                    match read_line(&mut input)? {
                        None => State::Exiting,
                        Some(choice) => {
                            self.select_model(&choice, &mut out)?;
                            State::AwaitingInput
                        }
                    }
                }
                State::Exiting => {
                    writeln!(out, "Goodbye!")?;
                    return Ok(());
                }
            };
        }
    }

    async fn handle(&self, command: Command, out: &mut impl Write) -> Result<State> {
        match command {
            Command::Exit => return Ok(State::Exiting),
            Command::Model => return Ok(State::DisplayingModels),
            Command::Empty => writeln!(out, "Please enter a question or command.")?,
            Command::Ask(question) => {
                writeln!(out, "\nGenerating response...")?;
                out.flush()?;
                let answer = self
                    .analyzer
                    .ask_questions(
                        &question,
                        &self.example,
                        &self.text,
                        Some(self.current_model.as_str()),
                    )
                    .await;
                match answer {
                    Ok(answer) => writeln!(out, "\nAnswer:\n{answer}")?,
                    Err(e) => {
                        warn!(error = %e, "completion failed");
                        writeln!(out, "\nError generating response: {e}")?;
                    }
                }
            }
        }
        Ok(State::AwaitingInput)
    }

    fn select_model(&mut self, choice: &str, out: &mut impl Write) -> Result<()> {
        match models::choose_model(choice) {
            ModelChoice::Selected(model) => {
                self.current_model = model.to_string();
                info!(model, "model changed");
                writeln!(out, "Model changed to: {model}")?;
            }
            ModelChoice::OutOfRange(n) => {
                warn!(index = n, "model number out of range");
                writeln!(out, "Invalid model number.")?;
            }
            ModelChoice::Unrecognized(_) => writeln!(out, "Invalid model selection.")?,
        }
        Ok(())
    }
}

/// Next line without its line ending, or `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
