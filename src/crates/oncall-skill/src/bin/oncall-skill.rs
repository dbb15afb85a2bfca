//! oncall-skill binary
//!
//! Serves the skill endpoint over HTTP, or handles a single event file
//! locally for testing an interaction model.

use anyhow::Context;
use clap::{Parser, Subcommand};
use oncall_skill::api::create_router;
use oncall_skill::platform::RequestEnvelope;
use oncall_skill::{Skill, SkillConfig};
use pagerduty::PagerDutyClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "oncall-skill")]
#[command(about = "Voice skill that answers who is on call in PagerDuty", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Config file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "ONCALL_SKILL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP endpoint
    Serve,

    /// Handle one request envelope and print the response
    Invoke {
        /// Path to a request envelope JSON file
        #[arg(short, long)]
        event: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(rust_log)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SkillConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let skill = Arc::new(build_skill(config)?);

    match cli.command {
        Commands::Serve => serve(skill).await,
        Commands::Invoke { event } => invoke(&skill, &event).await,
    }
}

fn build_skill(config: SkillConfig) -> anyhow::Result<Skill> {
    let client = PagerDutyClient::new(config.pagerduty.clone()).context("Failed to build PagerDuty client")?;
    Skill::new(Arc::new(client), config).context("Invalid skill configuration")
}

async fn serve(skill: Arc<Skill>) -> anyhow::Result<()> {
    let addr = skill.config().server.socket_addr()?;
    match &skill.config().application_id {
        Some(id) => tracing::info!("Accepting requests for application {}", id),
        None => tracing::warn!("No application_id configured; accepting requests for any skill"),
    }

    let app = create_router(skill);

    tracing::info!("Starting oncall-skill on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("oncall-skill shut down gracefully");
    Ok(())
}

async fn invoke(skill: &Skill, event: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(event)
        .with_context(|| format!("Failed to read event file {}", event.display()))?;
    let envelope: RequestEnvelope = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a request envelope", event.display()))?;

    let response = skill.handle(&envelope).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for CTRL-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
