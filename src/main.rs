use std::sync::Arc;

use omps::config::Config;
use omps::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may provide RUST_LOG and the OMPS_* variables
    dotenvy::dotenv().ok();

    // Initialize tracing before loading so loader warnings are kept
    let log_filter = logging::init();

    let config = Config::from_env()?;
    log_filter.apply_config(&config)?;

    if config.developer_mode {
        tracing::warn!("Developer mode enabled (section {})", config.section);
    }

    let addr = config.bind_addr();
    tracing::info!(
        "Limits: request body {} bytes, uncompressed archive {} bytes",
        config.max_content_length,
        config.zipfile_max_uncompressed_size
    );

    let app = omps::app(Arc::new(config));

    tracing::info!("omps listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
