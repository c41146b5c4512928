use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use wikisearch_web::api::{AppState, create_router};
use wikisearch_web::config::Config;
use wikisearch_web::search_backend::HttpSearchBackend;

/// Web front-end for the WikiSearch API.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Address to listen on (overrides BIND_ADDR)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Search API host (overrides SEARCH_API_HOST)
    #[arg(long)]
    api_host: Option<String>,

    /// Search API port (overrides SEARCH_API_PORT)
    #[arg(long)]
    api_port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The fmt subscriber also picks up records from the log crate.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(host) = cli.api_host {
        config.api_host = host;
    }
    if let Some(port) = cli.api_port {
        config.api_port = port;
    }

    let backend = HttpSearchBackend::new(&config.api_host, config.api_port)
        .context("Failed to configure search backend")?;
    log::info!("forwarding searches to {}", backend.query_url());

    let state = AppState::new(Arc::new(backend), &config.site_name);
    let app = create_router(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    log::info!("{} listening on {}", config.site_name, config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("stopping server...");
}
