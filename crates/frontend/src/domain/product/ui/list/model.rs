use crate::shared::api::{self, ApiError};
use contracts::domain::product::{Product, ProductTranslateRequest};

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    api::get_json("/api/products").await
}

/// Queue a ko-KR localization for one product.
pub async fn translate_product(product_id: i64) -> Result<(), ApiError> {
    api::post_unit(
        &format!("/api/products/{}/translate", product_id),
        &ProductTranslateRequest::default(),
    )
    .await
}
