mod cli;

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
    let cli = cli::Cli::parse();

    if !cli.dist_dir.is_dir() {
        tracing::warn!(
            "{} does not exist, run `cargo run -p xtask -- launch` to build the frontend first",
            cli.dist_dir.display()
        );
    }

    // Unknown paths fall back to index.html so the single-page app can route them.
    let index = cli.dist_dir.join("index.html");
    let router =
        Router::new().fallback_service(ServeDir::new(&cli.dist_dir).fallback(ServeFile::new(index)));

    let addr = SocketAddr::new(cli.host, cli.port);
    tracing::info!("Serving {} on http://{}", cli.dist_dir.display(), addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
