mod config;

use anyhow::Context;
use clap::Parser;
use services::{AppServices, RandomSource};
use storage::fixtures::seed_sample_data;
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Cli, Command, sqlite_file_path};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let db_url = cli.sqlite_url();

    // Open + migrate SQLite at startup so the service layers never touch the filesystem.
    prepare_sqlite_file(&db_url)?;
    let storage = Storage::sqlite(&db_url)
        .await
        .with_context(|| format!("failed to open database {db_url}"))?;

    match cli.command() {
        Command::Serve => serve(&cli, &storage).await,
        Command::Seed => {
            let report = seed_sample_data(&storage)
                .await
                .context("failed to seed sample data")?;
            info!(
                categories = report.categories,
                questions = report.questions,
                "Seeded {db_url}"
            );
            Ok(())
        }
    }
}

async fn serve(cli: &Cli, storage: &Storage) -> anyhow::Result<()> {
    let random = match cli.quiz_seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::thread(),
    };
    let services = AppServices::from_storage(storage, cli.page_size, random)?;
    let app = api::create_app(api::ApiState::from(&services), &cli.cors_origin)?;

    let addr = cli.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Trivia API listening on http://{addr}");
    info!("CORS origin: {}", cli.cors_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(db_url) else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
    }

    Ok(())
}
