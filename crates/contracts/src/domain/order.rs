use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A domestic sales order, as returned by `GET /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub external_order_id: String,
    pub channel_name: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub order_datetime: NaiveDateTime,
    pub status: String,
    pub total_amount_krw: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status_history: Vec<OrderStatusHistory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub product_option_id: Option<i64>,
    pub quantity: i64,
    pub unit_price_krw: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusHistory {
    pub id: i64,
    #[serde(default)]
    pub previous_status: Option<String>,
    pub new_status: String,
    pub changed_at: NaiveDateTime,
    #[serde(default)]
    pub reason: Option<String>,
}
