use std::sync::Arc;

use fulfilment_api::app::{self, services::AppServices};
use fulfilment_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fulfilment_observability::init();

    let config = AppConfig::from_env()?;
    let services = Arc::new(AppServices::in_memory(config.seed_demo)?);
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
