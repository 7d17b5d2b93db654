//! Presentation shells for the seller pages.
//!
//! The components here are plain server-rendered building blocks; routes
//! compose them and hand the result to [`dioxus_ssr`] for serialization.

use dioxus::prelude::*;
use lakoe_web_core::OrderPageData;

/// Wraps the rendered page tree in the application HTML document.
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{title}</title></head><body>{body}</body></html>"
    )
}

/// Grid shell shared by the seller dashboard pages.
#[component]
pub fn DashboardGrid(children: Element) -> Element {
    rsx! {
        div {
            class: "layout-grid",
            display: "grid",
            min_height: "100vh",
            {children}
        }
    }
}

/// Full-viewport flex container that centers its children both ways.
#[component]
pub fn CenterFlex(children: Element) -> Element {
    rsx! {
        div {
            class: "layout-center",
            display: "flex",
            align_items: "center",
            justify_content: "center",
            height: "100vh",
            {children}
        }
    }
}

/// Order navigation card listing the products ready to ship.
///
/// Receives the whole page view model as its single `card_product` prop and
/// embeds it as a JSON island so storefront scripts can read the loader
/// output the page was rendered from.
#[component]
pub fn NavOrder(card_product: OrderPageData) -> Element {
    let payload = loader_payload(&card_product);
    let count = card_product.data_product_ready_to_ship.len();

    rsx! {
        nav { class: "nav-order",
            script {
                id: "order-loader-data",
                r#type: "application/json",
                dangerous_inner_html: "{payload}",
            }
            header { class: "nav-order-header",
                h2 { "Ready to ship" }
                span { class: "nav-order-count", "{count} products" }
            }
            if card_product.data_product_ready_to_ship.is_empty() {
                p { class: "nav-order-empty", "No products are ready to ship." }
            } else {
                ul { class: "nav-order-list",
                    for product in card_product.data_product_ready_to_ship.iter() {
                        li { key: "{product.id}", class: "nav-order-card",
                            span { class: "nav-order-card-name", "{product.name}" }
                            span { class: "nav-order-card-id", "#{product.id}" }
                        }
                    }
                }
            }
        }
    }
}

// `<` must not survive inside the inline script or a crafted product name
// could close the island early.
fn loader_payload(data: &OrderPageData) -> String {
    serde_json::to_string(data)
        .unwrap_or_default()
        .replace('<', "\\u003c")
}
