use serde::{Deserialize, Serialize};

/// Body of `POST /api/exports/channel/{channel}`; the response is the CSV
/// blob itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub product_ids: Vec<i64>,
    pub template_type: String,
}

impl ExportRequest {
    /// Export with the channel's default CSV template.
    pub fn with_default_template(product_ids: Vec<i64>) -> Self {
        Self {
            product_ids,
            template_type: "default".to_string(),
        }
    }
}
