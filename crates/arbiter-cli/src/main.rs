use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use arbiter_core::{DecisionContext, DecisionEngine, DecisionType, EngineConfig};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arbiter", version, about = "Run decision contexts through the decision engine.")]
struct Cli {
    /// Log filter used when RUST_LOG is not set (logs go to stderr).
    #[arg(long, global = true, env = "ARBITER_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decide on one context or an array of contexts read from a JSON file.
    Decide {
        /// JSON file holding a context object or an array of them.
        #[arg(long)]
        context: PathBuf,

        /// JSON engine configuration ({"enabled": bool, "max_history_size": n}).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Append every result as one JSON line to this file.
        #[arg(long)]
        history_out: Option<PathBuf>,

        /// Print decision statistics after the last result.
        #[arg(long)]
        stats: bool,
    },

    /// List the strategies each decision type is evaluated with.
    Strategies,
}

/// Either a single context or a batch.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContextInput {
    One(Box<DecisionContext>),
    Many(Vec<DecisionContext>),
}

impl ContextInput {
    fn into_vec(self) -> Vec<DecisionContext> {
        match self {
            ContextInput::One(ctx) => vec![*ctx],
            ContextInput::Many(all) => all,
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_contexts(path: &Path) -> Result<Vec<DecisionContext>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading contexts from {}", path.display()))?;
    let input: ContextInput = serde_json::from_str(&raw)
        .with_context(|| format!("parsing contexts in {}", path.display()))?;
    Ok(input.into_vec())
}

async fn run_decide(
    context: &Path,
    config: Option<&Path>,
    history_out: Option<&Path>,
    stats: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = DecisionEngine::new(config);
    if !engine.is_enabled() {
        bail!("decision engine is disabled by configuration");
    }

    let contexts = load_contexts(context)?;
    info!(count = contexts.len(), "loaded decision contexts");

    let mut log = match history_out {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening {}", path.display()))?,
        ),
        None => None,
    };

    for (i, ctx) in contexts.iter().enumerate() {
        let result = engine
            .make_decision(ctx)
            .await
            .with_context(|| format!("context #{i} ({})", ctx.decision_type))?;

        println!("{}", serde_json::to_string_pretty(&result)?);
        if let Some(file) = log.as_mut() {
            writeln!(file, "{}", serde_json::to_string(&result)?)?;
        }
    }

    if stats {
        let statistics = engine.get_decision_statistics().await;
        println!("{}", serde_json::to_string_pretty(&statistics)?);
    }
    Ok(())
}

fn run_strategies() {
    let engine = DecisionEngine::default();
    for decision_type in DecisionType::ALL {
        let names = engine.strategy_names(decision_type);
        if names.is_empty() {
            println!(
                "{decision_type}: fallback ({})",
                engine.fallback_strategy_name()
            );
        } else {
            println!("{decision_type}: {}", names.join(", "));
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Decide {
            context,
            config,
            history_out,
            stats,
        } => run_decide(&context, config.as_deref(), history_out.as_deref(), stats).await,
        Command::Strategies => {
            run_strategies();
            Ok(())
        }
    }
}
