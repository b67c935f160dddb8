use crate::shared::api::{self, ApiError};
use contracts::domain::shipment::Shipment;

pub async fn fetch_shipments() -> Result<Vec<Shipment>, ApiError> {
    api::get_json("/api/shipments").await
}
