use anyhow::Context;

use school_api::config::ApiConfig;
use school_infra::SchoolStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    school_observability::init(config.log_format);

    let store = if config.seed {
        SchoolStore::seeded()
    } else {
        SchoolStore::new()
    };
    let app = school_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!(seeded = config.seed, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
