//! AHA - Rule-based insight engine for journaling text
//!
//! Command-line driver that keeps a chamber in a JSON file and prints
//! statistics, profiles, drafts and agent payloads as JSON or text.

use aha::{
    chamber::{ChamberStore, JsonFileStore},
    config::AhaConfig,
    meta::{NoPhases, Phase, PhaseSource},
    Engine,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aha")]
#[command(author = "AHA Team")]
#[command(version)]
#[command(about = "Rule-based insight engine for journaling text")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "AHA_CONFIG")]
    config: Option<PathBuf>,

    /// Chamber file path (overrides storage.chamber_path)
    #[arg(long, env = "AHA_CHAMBER")]
    chamber: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a message (reads stdin when no text is given)
    Ingest {
        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        topic: String,

        /// Ingest each sentence as its own signal
        #[arg(long)]
        split: bool,

        text: Option<String>,
    },

    /// Show statistics for one topic
    Stats {
        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        topic: String,
    },

    /// Show statistics for every topic in the chamber
    Overview,

    /// Build the cross-topic meta profile of a subject
    Profile {
        #[arg(short, long)]
        subject: String,

        /// TOML file mapping topic ids to phases
        #[arg(long)]
        phases: Option<PathBuf>,
    },

    /// Print a text draft for one topic
    Draft {
        #[arg(value_enum)]
        kind: DraftKind,

        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        topic: String,
    },

    /// Print the narrative generator payload for one topic
    State {
        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        topic: String,

        /// TOML file mapping topic ids to phases
        #[arg(long)]
        phases: Option<PathBuf>,

        /// Include the meta profile
        #[arg(long)]
        meta: bool,

        /// Subject-area profile passed to the generator (e.g. "Historie")
        #[arg(long)]
        field_profile: Option<String>,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DraftKind {
    Path,
    Synthesis,
    Article,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("aha={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        AhaConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?
    } else {
        AhaConfig::default()
    };
    if let Some(chamber) = cli.chamber {
        config.storage.chamber_path = chamber;
    }

    let engine = Engine::new(&config)?;
    let store = JsonFileStore::new(config.storage.chamber_path.clone());

    match cli.command {
        Commands::Ingest {
            subject,
            topic,
            split,
            text,
        } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let mut chamber = store.load()?;
            let outcomes = engine.ingest_text(&mut chamber, &text, &subject, &topic, split);
            store.save(&chamber)?;
            tracing::info!(
                count = outcomes.len(),
                path = %store.path().display(),
                "Ingested signals"
            );
            print_json(&outcomes)?;
        }
        Commands::Stats { subject, topic } => {
            let chamber = store.load()?;
            print_json(&engine.topic_stats(&chamber, &subject, &topic))?;
        }
        Commands::Overview => {
            let chamber = store.load()?;
            print_json(&engine.topics_overview(&chamber))?;
        }
        Commands::Profile { subject, phases } => {
            let chamber = store.load()?;
            let phases = load_phases(phases.as_deref())?;
            print_json(&engine.meta_profile_with_phases(&chamber, &subject, &*phases))?;
        }
        Commands::Draft {
            kind,
            subject,
            topic,
        } => {
            let chamber = store.load()?;
            let insights = engine.insights_for_topic(&chamber, &subject, &topic);
            let text = match kind {
                DraftKind::Path => engine.path_steps(&insights).join("\n"),
                DraftKind::Synthesis => engine.synthesis_text(&insights, &topic),
                DraftKind::Article => {
                    let stats = engine.topic_stats(&chamber, &subject, &topic);
                    engine.article_draft(&insights, &stats, &topic)
                }
            };
            println!("{}", text);
        }
        Commands::State {
            subject,
            topic,
            phases,
            meta,
            field_profile,
        } => {
            let chamber = store.load()?;
            let phases = load_phases(phases.as_deref())?;
            let mut state = engine.agent_state(&chamber, &subject, &topic, &*phases, meta);
            if let Some(profile) = field_profile {
                state = state.with_field_profile(profile);
            }
            println!("{}", state.to_json()?);
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read message from stdin")?;
    Ok(text)
}

fn load_phases(path: Option<&Path>) -> Result<Box<dyn PhaseSource>> {
    let Some(path) = path else {
        return Ok(Box::new(NoPhases));
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read phases file {}", path.display()))?;
    let phases: HashMap<String, Phase> = toml::from_str(&content)
        .with_context(|| format!("Failed to parse phases file {}", path.display()))?;
    tracing::debug!(topics = phases.len(), "Loaded topic phases");
    Ok(Box::new(phases))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn show_config(config: Option<&AhaConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}
