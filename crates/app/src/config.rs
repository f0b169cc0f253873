use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "trivia")]
#[command(about = "Trivia question and quiz API server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// SQLite database URL or file path.
    #[arg(long = "db", global = true, env = "TRIVIA_DB_URL", default_value = "sqlite://trivia.sqlite3")]
    pub db_url: String,

    #[arg(long, global = true, env = "TRIVIA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, global = true, env = "TRIVIA_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Questions returned per page.
    #[arg(long, global = true, env = "TRIVIA_PAGE_SIZE", default_value_t = 10, value_parser = parse_page_size)]
    pub page_size: usize,

    /// Allowed CORS origin, `*` for any.
    #[arg(long, global = true, env = "TRIVIA_CORS_ORIGIN", default_value = "*")]
    pub cors_origin: String,

    /// Seed for deterministic quiz question selection.
    #[arg(long, global = true, env = "TRIVIA_QUIZ_SEED")]
    pub quiz_seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Load the sample categories and questions into an empty database.
    Seed,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn sqlite_url(&self) -> String {
        normalize_sqlite_url(&self.db_url)
    }
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("page size must be greater than zero".into()),
        Ok(size) => Ok(size),
        Err(err) => Err(format!("invalid page size {raw:?}: {err}")),
    }
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("sqlite::memory:")
        || trimmed.starts_with("sqlite://")
        || trimmed.starts_with("sqlite:file:")
    {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// File path behind a `sqlite://` URL, or `None` for in-memory databases.
pub fn sqlite_file_path(db_url: &str) -> Option<PathBuf> {
    if db_url.contains("mode=memory") || db_url.starts_with("sqlite::memory:") {
        return None;
    }
    let path = db_url.strip_prefix("sqlite://")?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return None;
    }
    Some(PathBuf::from(path))
}
