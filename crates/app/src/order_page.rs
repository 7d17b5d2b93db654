//! Order readiness page: a data-loading half and a pure render half.
//!
//! The `/order` handler in the router is the only place the two halves are
//! joined, so each can be exercised on its own.

use std::sync::Arc;

use dioxus::prelude::*;
use lakoe_web_core::OrderPageData;
use lakoe_web_order::{DataSourceError, OrderClient};

use crate::layouts::{CenterFlex, DashboardGrid, NavOrder};

/// Source for the per-request storefront API key.
///
/// Injected rather than read ambiently so loader tests never touch the
/// process environment.
pub type ApiKeySource = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Loads the order page view model.
///
/// Combines the order readiness query result with the API key current at
/// request time. A query failure is returned untransformed; recovery is the
/// caller's concern.
pub async fn load(
    orders: &OrderClient,
    api_key: &ApiKeySource,
) -> Result<OrderPageData, DataSourceError> {
    let api_key = api_key();
    let data_product_ready_to_ship = orders.products_ready_to_ship().await?;

    Ok(OrderPageData {
        data_product_ready_to_ship,
        api_key,
    })
}

/// Renders the loaded view model into the order page markup.
pub fn render(data: OrderPageData) -> String {
    dioxus_ssr::render_element(rsx! {
        DashboardGrid {
            CenterFlex {
                NavOrder { card_product: data }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use lakoe_web_core::OrderReadinessRecord;
    use serde_json::{json, Map};
    use url::Url;

    fn client(base_url: &Url) -> OrderClient {
        OrderClient::new(base_url.clone(), reqwest::Client::new())
    }

    fn key_source(value: Option<&str>) -> ApiKeySource {
        let value = value.map(str::to_string);
        Arc::new(move || value.clone())
    }

    fn widget_data(api_key: Option<&str>) -> OrderPageData {
        OrderPageData {
            data_product_ready_to_ship: vec![OrderReadinessRecord {
                id: "1".to_string(),
                name: "Widget".to_string(),
                details: Map::new(),
            }],
            api_key: api_key.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn loader_combines_query_result_with_api_key() {
        let server = MockServer::start_async().await;
        let base = Url::parse(&server.url("/api/v1/")).expect("url");

        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/products/ready-to-ship");
                then.status(200)
                    .json_body(json!({ "data": [{ "id": "1", "name": "Widget" }] }));
            })
            .await;

        let data = load(&client(&base), &key_source(Some("abc123")))
            .await
            .expect("loader should succeed");

        assert_eq!(data, widget_data(Some("abc123")));
        assert_eq!(
            serde_json::to_value(&data).expect("serialize"),
            json!({
                "dataProductReadyToShip": [{ "id": "1", "name": "Widget" }],
                "api_key": "abc123"
            })
        );
    }

    #[tokio::test]
    async fn loader_returns_empty_list_and_absent_key() {
        let server = MockServer::start_async().await;
        let base = Url::parse(&server.url("/api/v1/")).expect("url");

        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/products/ready-to-ship");
                then.status(200).json_body(json!({ "data": [] }));
            })
            .await;

        let data = load(&client(&base), &key_source(None))
            .await
            .expect("loader should succeed");

        assert!(data.data_product_ready_to_ship.is_empty());
        assert_eq!(data.api_key, None);
        assert_eq!(
            serde_json::to_value(&data).expect("serialize"),
            json!({ "dataProductReadyToShip": [] })
        );
    }

    #[tokio::test]
    async fn loader_propagates_query_failure() {
        let server = MockServer::start_async().await;
        let base = Url::parse(&server.url("/api/v1/")).expect("url");

        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/products/ready-to-ship");
                then.status(500).body("boom");
            })
            .await;

        let err = load(&client(&base), &key_source(Some("abc123")))
            .await
            .expect_err("loader should propagate the failure");

        match err {
            DataSourceError::Status { status, body } => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn render_nests_nav_inside_flex_inside_grid() {
        let html = render(widget_data(Some("abc123")));

        assert_eq!(html.matches("layout-grid").count(), 1);
        assert_eq!(html.matches("layout-center").count(), 1);
        assert_eq!(html.matches("nav-order\"").count(), 1);

        let grid = html.find("layout-grid").expect("grid rendered");
        let flex = html.find("layout-center").expect("flex rendered");
        let nav = html.find("nav-order").expect("nav rendered");
        assert!(grid < flex && flex < nav);

        assert!(html.contains("100vh"));
        assert!(html.contains("Widget"));
    }

    #[test]
    fn render_handles_empty_product_list() {
        let html = render(OrderPageData {
            data_product_ready_to_ship: Vec::new(),
            api_key: None,
        });

        assert!(html.contains("No products are ready to ship."));
        assert!(html.contains("0 products"));
    }

    #[test]
    fn render_embeds_loader_output_as_json_island() {
        let html = render(widget_data(Some("abc123")));
        assert!(html.contains("order-loader-data"));
        assert!(html.contains("\"dataProductReadyToShip\""));
        assert!(html.contains("\"api_key\":\"abc123\""));

        let without_key = render(widget_data(None));
        assert!(!without_key.contains("api_key"));
    }
}
