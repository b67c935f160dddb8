use crate::shared::api::{self, ApiError};
use contracts::domain::export::ExportRequest;
use contracts::domain::product::Product;
use contracts::pricing::PricingOverride;

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    api::get_json("/api/products").await
}

/// Apply validated pricing overrides to one product. The payload carries
/// only the fields the user actually filled in.
pub async fn save_pricing(product_id: i64, payload: &PricingOverride) -> Result<(), ApiError> {
    api::patch_unit(&format!("/api/products/{}", product_id), payload).await
}

/// Produce the channel CSV for the selected products; returns the raw bytes.
pub async fn export_channel(endpoint: &str, request: &ExportRequest) -> Result<Vec<u8>, ApiError> {
    api::post_binary(endpoint, request).await
}
