use super::model;
use crate::layout::channel_context::ChannelState;
use crate::shared::download::download_csv;
use contracts::domain::export::ExportRequest;
use contracts::domain::product::Product;
use contracts::pricing::{self, PricingField, PricingForm};
use leptos::prelude::*;
use std::collections::HashMap;

/// ViewModel for the channel export page: product selection, per-product
/// pricing forms and the export action itself.
#[derive(Clone, Copy)]
pub struct ChannelExportViewModel {
    pub products: RwSignal<Vec<Product>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub selected: RwSignal<Vec<i64>>,
    pub status: RwSignal<String>,
    forms: RwSignal<HashMap<i64, PricingForm>>,
    messages: RwSignal<HashMap<i64, String>>,
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

impl ChannelExportViewModel {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            selected: RwSignal::new(Vec::new()),
            status: RwSignal::new(String::new()),
            forms: RwSignal::new(HashMap::new()),
            messages: RwSignal::new(HashMap::new()),
        }
    }

    /// Fetch products and prefill pricing forms for ids we have not seen
    /// yet; forms the user is editing are left alone.
    pub fn load(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_products().await {
                Ok(list) => {
                    this.forms.update(|forms| {
                        for product in &list {
                            forms.entry(product.id).or_insert_with(|| {
                                PricingForm::from_saved(
                                    product.exchange_rate,
                                    product.margin_rate,
                                    product.vat_rate,
                                    product.shipping_fee,
                                )
                            });
                        }
                    });
                    this.products.set(list);
                }
                Err(err) => this.error.set(Some(err.message("Failed to load products"))),
            }
            this.loading.set(false);
        });
    }

    pub fn is_selected(&self, product_id: i64) -> bool {
        self.selected.with(|ids| ids.contains(&product_id))
    }

    pub fn toggle(&self, product_id: i64) {
        self.selected.update(|ids| {
            if let Some(pos) = ids.iter().position(|id| *id == product_id) {
                ids.remove(pos);
            } else {
                ids.push(product_id);
            }
        });
    }

    pub fn field_value(&self, product_id: i64, field: PricingField) -> String {
        self.forms.with(|forms| {
            forms
                .get(&product_id)
                .map(|form| form.get(field).to_string())
                .unwrap_or_default()
        })
    }

    pub fn update_field(&self, product_id: i64, field: PricingField, value: String) {
        self.forms.update(|forms| {
            forms.entry(product_id).or_default().set(field, value);
        });
    }

    pub fn message(&self, product_id: i64) -> Option<String> {
        self.messages.with(|messages| messages.get(&product_id).cloned())
    }

    fn set_message(&self, product_id: i64, message: String) {
        self.messages.update(|messages| {
            messages.insert(product_id, message);
        });
    }

    /// Validate the product's pricing form and, only when it passes, send
    /// the partial update. A failed validation never reaches the network.
    pub fn save_command(&self, product_id: i64) {
        let form = self
            .forms
            .with_untracked(|forms| forms.get(&product_id).cloned())
            .unwrap_or_default();

        let payload = match pricing::validate(&form) {
            Ok(payload) => payload,
            Err(err) => {
                self.set_message(product_id, err.to_string());
                return;
            }
        };

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_pricing(product_id, &payload).await {
                Ok(()) => {
                    this.set_message(product_id, "저장되었습니다.".to_string());
                    this.load();
                }
                Err(err) => {
                    this.set_message(product_id, err.message("저장에 실패했습니다."));
                }
            }
        });
    }

    /// Export the selected products through the current channel. The gate
    /// runs first; an unsupported channel never produces a request.
    pub fn export_command(&self, channel: ChannelState) {
        let current = channel.current.get_untracked();
        let selected = self.selected.get_untracked();

        if selected.is_empty() {
            self.status
                .set(format!("현재 채널 {}: 상품을 선택해주세요.", current.label));
            return;
        }

        let endpoint = match channel.export_endpoint(&current) {
            Ok(endpoint) => endpoint,
            Err(err) => {
                alert(&err.to_string());
                self.status
                    .set(format!("현재 채널 {}는 아직 지원되지 않습니다.", current.label));
                return;
            }
        };

        self.status
            .set(format!("{} 채널로 CSV 준비 중...", current.label));

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let request = ExportRequest::with_default_template(selected);
            match model::export_channel(&endpoint, &request).await {
                Ok(bytes) => {
                    let filename = format!("{}_products.csv", current.value);
                    if let Err(err) = download_csv(&bytes, &filename) {
                        log::warn!("download failed: {}", err);
                        this.status
                            .set(format!("{} 내보내기에 실패했습니다.", current.label));
                        return;
                    }
                    this.status.set(format!(
                        "{} 내보내기가 준비되었습니다. 다운로드가 시작됩니다.",
                        current.label
                    ));
                }
                Err(err) => {
                    this.status.set(
                        err.message(&format!("{} 내보내기에 실패했습니다.", current.label)),
                    );
                }
            }
        });
    }
}

impl Default for ChannelExportViewModel {
    fn default() -> Self {
        Self::new()
    }
}
