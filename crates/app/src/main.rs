mod layouts;
mod order_page;
mod problem;
mod router;
mod telemetry;

use std::net::SocketAddr;

use lakoe_web_order::OrderClient;
use lakoe_web_util::{load_env_file, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;
    let metrics = telemetry::init_metrics()?;

    let http = reqwest::Client::builder().build()?;
    let orders = OrderClient::new(config.order_service_url.clone(), http);

    let state = router::AppState::new(metrics, orders);

    let addr: SocketAddr = config.bind_addr;
    info!(stage = "app", %addr, env = %config.environment.as_str(), "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router::app_router(state))
        .await
        .map_err(|err| err.into())
}
