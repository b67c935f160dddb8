use crate::shared::api::{self, ApiError};
use contracts::domain::product::ProductImportRequest;

/// Trigger scraping and product creation for one source URL.
pub async fn import_product(request: &ProductImportRequest) -> Result<(), ApiError> {
    api::post_unit("/api/products/import", request).await
}

/// Status line for an import outcome: a fixed success message, the backend's
/// `detail` on failure, or the generic fallback when there is none.
pub fn import_status(result: &Result<(), ApiError>) -> String {
    match result {
        Ok(()) => "Imported and queued for localization".to_string(),
        Err(err) => err.message("Failed to import"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_reports_the_queued_status() {
        assert_eq!(
            import_status(&Ok(())),
            "Imported and queued for localization"
        );
    }

    #[test]
    fn failure_surfaces_the_backend_detail() {
        let err = ApiError::Status {
            status: 422,
            detail: Some("상품 정보를 불러오지 못했습니다.".to_string()),
        };
        assert_eq!(
            import_status(&Err(err)),
            "상품 정보를 불러오지 못했습니다."
        );
    }

    #[test]
    fn failure_without_detail_uses_the_fallback() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(import_status(&Err(err)), "Failed to import");
    }
}
