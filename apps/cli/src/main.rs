//! Command-line driver for the companion engines.
//!
//! Thin external caller: collects chat lines, runs memory extraction,
//! and runs the baseline/transformed question flow. All behavior
//! lives in the library crates; this binary only parses arguments and
//! prints results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use llm::{Client, ProviderConfig};
use memory::MemoryExtractor;
use persona::{PersonalityEngine, Style, Transformation};
use std::path::{Path, PathBuf};

/// Bundled thirty-line sample chat history.
const SAMPLE_CHATS: &str = include_str!("../data/sample_chats.json");

#[derive(Parser)]
#[command(
    name = "companion",
    about = "Memory extraction and personality transformation over a completion provider"
)]
struct Cli {
    /// Model identifier.
    #[arg(long, global = true, default_value = llm::DEFAULT_MODEL)]
    model: String,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Extract structured memory from a chat history.
    Extract {
        /// JSON file containing an array of chat lines.
        #[arg(long)]
        chats: Option<PathBuf>,
    },
    /// Answer a question, then rewrite the answer in a personality style.
    Ask {
        /// The question to answer.
        question: String,
        /// Personality id (neutral, calm_mentor, witty_friend, therapist_style).
        #[arg(long, default_value = "neutral")]
        style: String,
        /// JSON file containing an array of chat lines.
        #[arg(long)]
        chats: Option<PathBuf>,
        /// Skip extraction and personalization.
        #[arg(long)]
        no_memory: bool,
    },
    /// List the personality catalog.
    Styles,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Cmd::Styles = cli.cmd {
        for style in Style::ALL {
            let profile = style.profile();
            println!(
                "{:<16} {} ({})",
                style.id(),
                profile.name,
                profile.description
            );
        }
        return Ok(());
    }

    let config = ProviderConfig {
        api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
        model: cli.model.clone(),
        base_url: std::env::var("OPENAI_BASE_URL").ok(),
    };
    let provider = config
        .build(Client::new())
        .context("set OPENAI_API_KEY to use the companion CLI")?;

    match cli.cmd {
        Cmd::Extract { chats } => {
            let lines = load_chats(chats.as_deref())?;
            let extractor = MemoryExtractor::new(provider, cli.model);
            let record = extractor.extract(&lines).await;

            println!("{}", serde_json::to_string_pretty(&record)?);
            println!("\n{}", record.summary());
        }
        Cmd::Ask {
            question,
            style,
            chats,
            no_memory,
        } => {
            let engine = PersonalityEngine::new(provider.clone(), cli.model.clone());
            let record = if no_memory {
                None
            } else {
                let lines = load_chats(chats.as_deref())?;
                let extractor = MemoryExtractor::new(provider, cli.model);
                Some(extractor.extract(&lines).await)
            };

            let standard = engine.respond_text(&question).await;
            println!("--- standard ---\n{standard}\n");

            let style = Style::from_id(&style);
            let transformed = engine
                .transform_text(&Transformation {
                    question: &question,
                    standard_response: &standard,
                    style,
                    memory: record.as_ref(),
                })
                .await;
            println!("--- {} ---\n{transformed}", style.id());
        }
        Cmd::Styles => unreachable!(),
    }

    Ok(())
}

fn load_chats(path: Option<&Path>) -> Result<Vec<String>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => SAMPLE_CHATS.to_owned(),
    };
    serde_json::from_str(&text).context("chat file must be a JSON array of strings")
}
