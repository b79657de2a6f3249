//! Flashcards CLI
//!
//! Reads text, runs the flashcard pipeline and writes the cards as JSON.
//! Logs go to stderr so stdout carries only the JSON array.

mod args;

use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use flashcards::ai::OpenAI;
use flashcards::{
    to_json, FlashcardError, GenerativeModel, Pipeline, RuleAnalyzer, StrategyKind,
};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so env fallbacks see it
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,flashcards=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let config = args.flashcard_config();

    let model = build_model(&args)?;
    let pipeline = Pipeline::new(config, Arc::new(RuleAnalyzer::new()), model)
        .context("Invalid configuration")?;

    let text = read_input(args.input.as_deref())?;

    let cancel = CancellationToken::new();
    if let Some(timeout) = args.timeout() {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            cancel.cancel();
        });
    }

    let generation = match pipeline.generate_with_cancel(&text, cancel).await {
        Ok(generation) => generation,
        Err(FlashcardError::Cancelled) => {
            anyhow::bail!("Timed out after {} seconds", args.timeout_secs.unwrap_or_default())
        }
        Err(e) => return Err(e).context("Flashcard generation failed"),
    };

    if generation.input_error.is_some() {
        eprintln!("Please enter some text.");
    } else if generation.flashcards.is_empty() {
        eprintln!("No flashcards generated. Try different or longer text.");
    } else {
        tracing::info!(count = generation.flashcards.len(), "Generated flashcards");
    }

    let json = to_json(&generation.flashcards).context("Failed to serialize flashcards")?;
    write_output(args.output.as_deref(), &json)?;

    Ok(())
}

/// OpenAI model for the generative strategy, `None` otherwise.
fn build_model(args: &Args) -> Result<Option<Arc<dyn GenerativeModel>>> {
    if args.strategy != StrategyKind::Generative {
        return Ok(None);
    }

    let model = match &args.api_key {
        Some(api_key) => OpenAI::new(api_key.clone()),
        None => OpenAI::from_env().context("Generative strategy needs an API key")?,
    };

    let mut model = model.with_model(&args.model);
    if let Some(base_url) = &args.base_url {
        model = model.with_base_url(base_url);
    }

    tracing::debug!(model = %args.model, "Using OpenAI model");
    Ok(Some(Arc::new(model)))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write stdout")
        }
    }
}
