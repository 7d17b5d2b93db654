use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product with at least one order ready to hand over to a shipper.
///
/// The record shape is owned by the order service. The page only types the
/// fields it displays; everything else the service sends is carried through
/// untouched in `details` so loader output reproduces the payload exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReadinessRecord {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// View model for the order page.
///
/// Built fresh for every request by the page loader, consumed whole by the
/// render step, and discarded with the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPageData {
    #[serde(rename = "dataProductReadyToShip")]
    pub data_product_ready_to_ship: Vec<OrderReadinessRecord>,
    // Serialized as snake_case `api_key`; storefront scripts parse that
    // exact key, unlike the camelCase used for the record list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}
