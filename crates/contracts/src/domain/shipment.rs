use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A tracked parcel on either the overseas or the domestic leg,
/// as returned by `GET /api/shipments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub id: i64,
    pub carrier_name: String,
    pub tracking_number: String,
    pub shipment_type: String,
    #[serde(default)]
    pub shipped_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub delivered_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_status: Option<String>,
}
