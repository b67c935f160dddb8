use crate::shared::api::{self, ApiError};
use contracts::domain::order::Order;

pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    api::get_json("/api/orders").await
}
