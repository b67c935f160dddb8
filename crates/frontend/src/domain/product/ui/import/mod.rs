pub mod model;

use crate::shared::components::ui::{Button, Input};
use contracts::domain::product::ProductImportRequest;
use leptos::prelude::*;

const DEFAULT_SOURCE_SITE: &str = "TAOBAO";

#[component]
pub fn ImportProductPage() -> impl IntoView {
    let source_url = RwSignal::new(String::new());
    let source_site = RwSignal::new(DEFAULT_SOURCE_SITE.to_string());
    let status = RwSignal::new(String::new());

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let url = source_url.get_untracked().trim().to_string();
        if url.is_empty() {
            return;
        }
        let site = {
            let site = source_site.get_untracked().trim().to_string();
            if site.is_empty() {
                DEFAULT_SOURCE_SITE.to_string()
            } else {
                site
            }
        };

        status.set("Submitting...".to_string());
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::import_product(&ProductImportRequest::new(url, site)).await;
            if result.is_ok() {
                source_url.set(String::new());
                source_site.set(DEFAULT_SOURCE_SITE.to_string());
            }
            status.set(model::import_status(&result));
        });
    };

    view! {
        <div class="import-page">
            <div class="page__header">
                <div>
                    <h1>"Collect an overseas product"</h1>
                    <p class="page__subtitle">
                        "Paste a Taobao/Tmall/1688 URL to trigger scraping and Product creation."
                    </p>
                </div>
            </div>
            <form class="card form" on:submit=handle_submit>
                <Input
                    label="Source URL"
                    id="source-url"
                    value=source_url
                    required=true
                    on_input=Callback::new(move |value: String| source_url.set(value))
                />
                <Input
                    label="Source Site"
                    id="source-site"
                    value=source_site
                    placeholder=DEFAULT_SOURCE_SITE
                    on_input=Callback::new(move |value: String| source_site.set(value))
                />
                <Button button_type="submit">"Submit"</Button>
                {move || {
                    let text = status.get();
                    (!text.is_empty()).then(|| view! { <div class="form__status">{text}</div> })
                }}
            </form>
        </div>
    }
}
