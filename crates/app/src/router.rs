use std::{sync::Arc, time::Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::error;

use lakoe_web_order::OrderClient;
use lakoe_web_util::api_key_from_env;

use crate::layouts;
use crate::order_page::{self, ApiKeySource};
use crate::problem::ProblemResponse;
use crate::telemetry;

#[derive(Clone)]
pub struct AppState {
    metrics: PrometheusHandle,
    orders: OrderClient,
    api_key: ApiKeySource,
}

impl AppState {
    pub fn new(metrics: PrometheusHandle, orders: OrderClient) -> Self {
        let api_key: ApiKeySource = Arc::new(api_key_from_env);
        Self {
            metrics,
            orders,
            api_key,
        }
    }

    #[cfg(test)]
    pub fn with_api_key_source(mut self, source: ApiKeySource) -> Self {
        self.api_key = source;
        self
    }

    pub fn metrics(&self) -> &PrometheusHandle {
        &self.metrics
    }

    pub fn orders(&self) -> &OrderClient {
        &self.orders
    }

    pub fn api_key_source(&self) -> &ApiKeySource {
        &self.api_key
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .route("/order", get(order))
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = telemetry::render_metrics(state.metrics());
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; version=0.0.4")
        .body(Body::from(body))
        .unwrap()
}

/// Joins the order page loader and render halves for the hosting router.
///
/// A loader failure becomes the application's problem+json error response;
/// the loader itself neither logs nor maps it.
async fn order(State(state): State<AppState>) -> Result<Html<String>, ProblemResponse> {
    let start = Instant::now();

    let data = order_page::load(state.orders(), state.api_key_source())
        .await
        .map_err(|err| {
            counter!("order_page_requests_total", "result" => "error").increment(1);
            error!(stage = "order", error = %err, "order readiness query failed");
            ProblemResponse::new(
                StatusCode::BAD_GATEWAY,
                "order_service_unavailable",
                err.to_string(),
            )
        })?;

    let html = layouts::document("Order", &order_page::render(data));

    counter!("order_page_requests_total", "result" => "ok").increment(1);
    histogram!("order_page_latency_seconds").record(start.elapsed().as_secs_f64());

    Ok(Html(html))
}
