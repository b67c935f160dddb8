use crate::shared::api::{self, ApiError};
use contracts::domain::purchase_order::{
    PurchaseOrder, PurchaseOrderCreateRequest, PurchaseOrderStatusUpdateRequest,
};

pub async fn create_purchase_orders(
    request: &PurchaseOrderCreateRequest,
) -> Result<Vec<PurchaseOrder>, ApiError> {
    api::post_json("/api/purchase-orders", request).await
}

pub async fn fetch_purchase_order(id: &str) -> Result<PurchaseOrder, ApiError> {
    api::get_json(&format!(
        "/api/purchase-orders/{}",
        urlencoding::encode(id)
    ))
    .await
}

pub async fn update_status(id: i64, new_status: &str) -> Result<PurchaseOrder, ApiError> {
    api::put_json(
        &format!("/api/purchase-orders/{}/status", id),
        &PurchaseOrderStatusUpdateRequest::new(new_status),
    )
    .await
}

/// Parse the comma-separated order id filter. Empty input means "aggregate
/// everything"; any non-numeric token rejects the whole input.
pub fn parse_order_ids(raw: &str) -> Option<Vec<i64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }
    trimmed
        .split(',')
        .map(|token| token.trim().parse::<i64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_order_ids;

    #[test]
    fn empty_input_means_no_filter() {
        assert_eq!(parse_order_ids(""), Some(Vec::new()));
        assert_eq!(parse_order_ids("   "), Some(Vec::new()));
    }

    #[test]
    fn comma_separated_ids_are_parsed_with_whitespace() {
        assert_eq!(parse_order_ids("1,2,3"), Some(vec![1, 2, 3]));
        assert_eq!(parse_order_ids(" 10 , 20 "), Some(vec![10, 20]));
    }

    #[test]
    fn non_numeric_tokens_reject_the_input() {
        assert_eq!(parse_order_ids("1,abc"), None);
        assert_eq!(parse_order_ids("1,,2"), None);
    }
}
