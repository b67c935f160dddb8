use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An overseas product collected for resale, as returned by
/// `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub source_url: String,
    pub source_site: String,
    pub raw_title: String,
    pub raw_price: f64,
    pub raw_currency: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub detail_image_urls: Vec<String>,
    #[serde(default)]
    pub clean_image_urls: Vec<String>,
    #[serde(default)]
    pub clean_detail_image_urls: Vec<String>,
    /// Stored pricing overrides; `None` means the channel defaults apply.
    #[serde(default)]
    pub exchange_rate: Option<f64>,
    #[serde(default)]
    pub margin_rate: Option<f64>,
    #[serde(default)]
    pub vat_rate: Option<f64>,
    #[serde(default)]
    pub shipping_fee: Option<f64>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub localizations: Vec<ProductLocalization>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: i64,
    pub option_key: String,
    pub raw_name: String,
    pub raw_price_diff: f64,
    #[serde(default)]
    pub localized_name: Option<String>,
}

/// Translated title/description for one target locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductLocalization {
    pub id: i64,
    pub locale: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub option_display_name_format: Option<String>,
}

/// Body of `POST /api/products/import`: scrape the URL and create a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImportRequest {
    pub source_url: String,
    pub source_site: String,
}

impl ProductImportRequest {
    pub fn new(source_url: impl Into<String>, source_site: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            source_site: source_site.into(),
        }
    }
}

/// Body of `POST /api/products/{id}/translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTranslateRequest {
    pub target_locale: String,
    pub provider: String,
}

impl Default for ProductTranslateRequest {
    fn default() -> Self {
        Self {
            target_locale: "ko-KR".to_string(),
            provider: "gcloud".to_string(),
        }
    }
}
