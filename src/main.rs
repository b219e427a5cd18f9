use std::sync::Arc;

use clap::Parser;
use pangyo_catering_api::{Config, Template, api, fetch::build_client};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    // Pin the TLS provider before any client is built.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let config = Config::parse();
    let client = build_client(&config)?;
    let bind = config.bind;
    info!(menu_url = %config.menu_url, "default menu source");

    let state = Arc::new(api::AppState {
        config,
        client,
        template: Template::default(),
    });
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on http://{bind}");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
