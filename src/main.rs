use anyhow::{Context, Result};
use clap::Parser;
use doc_analyzer::config::Config;
use doc_analyzer::shell::Shell;
use doc_analyzer::{DocumentAnalyzer, FewShotExample, loader};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "doc-analyzer",
    version,
    about = "Ask a chat model questions about a text or PDF document",
    after_help = "Example:\n  doc-analyzer example_prompt.txt example_response.txt document.pdf"
)]
struct Cli {
    /// File with an example question (.txt or .pdf)
    example_prompt: PathBuf,

    /// File with the answer to the example question (.txt or .pdf)
    example_response: PathBuf,

    /// Document to ask about (.txt or .pdf)
    document: PathBuf,

    /// Model to start with (overrides OPENAI_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ask a single question, print the answer and exit
    #[arg(short, long)]
    question: Option<String>,
}

struct Inputs {
    example: FewShotExample,
    text: String,
}

fn load_inputs(cli: &Cli) -> doc_analyzer::Result<Inputs> {
    let example = FewShotExample::new(
        loader::load(&cli.example_prompt)?,
        loader::load(&cli.example_response)?,
    );
    let text = loader::load(&cli.document)?;
    Ok(Inputs { example, text })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            println!("{}", e.render());
            std::process::exit(1);
        }
    };

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_analyzer=info".parse().unwrap()),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = Config::from_env(cli.config.as_deref())?;
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    let analyzer =
        DocumentAnalyzer::from_config(&config).context("failed to set up the LLM client")?;

    let Inputs { example, text } = match load_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(e) if e.is_input_error() => {
            println!("Error loading files: {e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("failed to load input files"),
    };
    info!(
        document = %cli.document.display(),
        chars = text.len(),
        model = %config.llm.model,
        "inputs loaded"
    );

    if let Some(question) = &cli.question {
        let answer = analyzer
            .ask_questions(question, &example, &text, None)
            .await
            .context("Error generating response")?;
        println!("{answer}");
        return Ok(());
    }

    let mut shell = Shell::new(&analyzer, example, text);
    {
        let mut stdout = io::stdout().lock();
        shell.write_banner(&mut stdout)?;
        stdout.flush()?;
    }
    shell.run(io::stdin().lock(), io::stdout()).await?;
    Ok(())
}
