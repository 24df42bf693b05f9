//! CDS Hooks command-line interface
//!
//! Composition root for the evaluation engine: seeds a hook registry
//! (built-in samples or a definitions file), loads a clinical data set and
//! drives the [`HookService`].

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use octofhir_cds::{
    Card, HookContext, HookDefinition, HookRegistry, HookRequest, HookService,
    InMemoryClinicalData, InMemoryHookRegistry, Indicator,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CDS Hooks command-line tool
#[derive(Parser)]
#[command(name = "cds")]
#[command(author, version, about = "CDS Hooks evaluation tools", long_about = None)]
struct Cli {
    /// Hook definitions JSON file (built-in sample set when omitted)
    #[arg(long, global = true)]
    hooks: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CDS Hooks discovery document
    Discovery,
    /// List registered hook definitions
    List,
    /// Execute a hook against a patient in a clinical data file
    Execute {
        /// Hook id to execute
        hook_id: String,
        /// Patient id to evaluate against
        #[arg(short, long)]
        patient: String,
        /// Clinical data JSON file
        #[arg(short, long)]
        data: PathBuf,
        /// Evaluation date (YYYY-MM-DD; today when omitted)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Evaluate a hook with a raw context JSON document
    Test {
        /// Hook id to evaluate
        hook_id: String,
        /// Context JSON, inline or @file
        #[arg(short, long)]
        context: String,
        /// Clinical data JSON file (empty data set when omitted)
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Evaluation date (YYYY-MM-DD; today when omitted)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let registry = Arc::new(load_registry(cli.hooks.as_deref())?);

    match cli.command {
        Commands::Discovery => {
            let service = HookService::new(registry, Arc::new(InMemoryClinicalData::new()));
            let discovery = service.discovery().await?;
            println!("{}", serde_json::to_string_pretty(&discovery)?);
        }
        Commands::List => {
            for hook in registry.list().await? {
                let status = if hook.enabled {
                    "enabled".green()
                } else {
                    "disabled".yellow()
                };
                println!(
                    "{} [{}] {} ({status})",
                    hook.id.bold(),
                    hook.hook,
                    hook.title.as_deref().unwrap_or("-"),
                );
            }
        }
        Commands::Execute {
            hook_id,
            patient,
            data,
            date,
        } => {
            let service = build_service(registry, Some(data.as_path()), date)?;
            let request = HookRequest {
                hook: None,
                hook_instance: None,
                fhir_server: None,
                context: HookContext::for_patient(patient),
            };
            let response = service.execute(&hook_id, request).await?;
            print_cards(&response.cards);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Test {
            hook_id,
            context,
            data,
            date,
        } => {
            let service = build_service(registry, data.as_deref(), date)?;
            let context = parse_context(context)?;
            let report = service.test(&hook_id, context).await?;
            print_cards(&report.result.cards);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn load_registry(path: Option<&Path>) -> anyhow::Result<InMemoryHookRegistry> {
    let Some(path) = path else {
        return Ok(InMemoryHookRegistry::with_samples());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading hook definitions from {}", path.display()))?;
    let definitions: Vec<HookDefinition> = serde_json::from_str(&json)
        .with_context(|| format!("parsing hook definitions from {}", path.display()))?;

    let registry = InMemoryHookRegistry::new();
    registry.seed(definitions);
    Ok(registry)
}

fn build_service(
    registry: Arc<InMemoryHookRegistry>,
    data: Option<&Path>,
    date: Option<NaiveDate>,
) -> anyhow::Result<HookService> {
    let data = match data {
        Some(path) => InMemoryClinicalData::from_file(path)
            .with_context(|| format!("loading clinical data from {}", path.display()))?,
        None => InMemoryClinicalData::new(),
    };

    let mut service = HookService::new(registry, Arc::new(data));
    if let Some(date) = date {
        service = service.with_evaluation_date(date);
    }
    Ok(service)
}

fn parse_context(raw: String) -> anyhow::Result<HookContext> {
    let json = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading context from {path}"))?,
        None => raw,
    };
    serde_json::from_str(&json).context("parsing context JSON")
}

fn print_cards(cards: &[Card]) {
    for card in cards {
        let indicator = match card.indicator {
            Indicator::Info => "info".cyan(),
            Indicator::Warning => "warning".yellow(),
            Indicator::Critical => "critical".red().bold(),
        };
        eprintln!("[{indicator}] {}", card.summary);
    }
}
