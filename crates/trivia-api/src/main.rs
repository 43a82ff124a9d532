//! Trivia server
//!
//! Opens the database, applies migrations, optionally loads the seed
//! data, and serves the HTTP API.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trivia_api::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "trivia-server")]
#[command(about = "REST API backing the trivia game", long_about = None)]
struct Cli {
    /// SQLite database path
    #[arg(long, default_value = "trivia.db")]
    db: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Load the canonical seed data before serving
    #[arg(long)]
    seed: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum LogFormat {
    /// Human-readable output for development
    Text,
    /// JSON structured output for production
    Json,
}

fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trivia=info"));

    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = trivia_store::db::open(&cli.db)?;
    trivia_store::db::configure(&conn)?;
    trivia_store::migrations::apply_migrations(&mut conn)?;

    if cli.seed {
        let inserted = trivia_store::seed::load_seed_data(&conn)?;
        tracing::info!(inserted, "seed data loaded");
    }

    let app = build_router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(addr = %cli.bind, "trivia server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
