use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Statuses a purchase order moves through, in lifecycle order.
pub const PURCHASE_ORDER_STATUSES: [&str; 5] = [
    "CREATED",
    "SENT",
    "PARTIAL_RECEIVED",
    "RECEIVED",
    "CANCELLED",
];

/// A supplier-facing aggregation of sales-order line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    pub supplier_name: String,
    pub status: String,
    pub currency: String,
    pub total_amount: f64,
    #[serde(default)]
    pub expected_arrival_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderItem {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub product_option_id: Option<i64>,
    #[serde(default)]
    pub sku: Option<String>,
    pub unit_cost: f64,
    pub quantity: i64,
    pub line_total: f64,
    #[serde(default)]
    pub source_links: Vec<PurchaseOrderSourceLink>,
}

/// Back-reference from a purchase-order line to the sales order it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderSourceLink {
    pub id: i64,
    pub order_id: i64,
    pub order_item_id: i64,
    pub source_quantity: i64,
}

/// Body of `POST /api/purchase-orders`. `order_ids: None` aggregates every
/// NEW sales order; a list restricts aggregation to those orders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseOrderCreateRequest {
    pub order_ids: Option<Vec<i64>>,
}

/// Body of `PUT /api/purchase-orders/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderStatusUpdateRequest {
    pub new_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PurchaseOrderStatusUpdateRequest {
    pub fn new(new_status: impl Into<String>) -> Self {
        Self {
            new_status: new_status.into(),
            reason: None,
        }
    }
}
