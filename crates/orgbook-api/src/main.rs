//! orgbook server binary.
//!
//! Reads `orgbook.toml` (or the path given with `--config`), opens the
//! SQLite store, seeds the demo dataset into an empty store, and serves
//! the directory API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use orgbook_api::{AppState, ServerConfig, auth::AuthConfig, seed};
use orgbook_core::directory::Directory;
use orgbook_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "orgbook directory server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "orgbook.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ORGBOOK"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  if let Some(dir) = server_cfg.store_path.parent()
    && !dir.as_os_str().is_empty()
  {
    std::fs::create_dir_all(dir)
      .with_context(|| format!("failed to create {dir:?}"))?;
  }

  // Open SQLite store; the schema DDL runs idempotently at open.
  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.store_path)
    })?;

  if seed::seed_if_empty(&store).await.context("failed to seed store")? {
    tracing::info!("seeded demo dataset into empty store");
  }

  // Build application state.
  let state = AppState {
    directory: Arc::new(Directory::new(store)),
    auth:      Arc::new(AuthConfig {
      api_key: server_cfg.api_key.clone(),
    }),
  };

  let app = orgbook_api::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
