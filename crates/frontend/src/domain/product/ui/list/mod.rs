pub mod model;

use crate::shared::components::ui::Button;
use contracts::domain::product::Product;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone)]
struct Toast {
    message: String,
    kind: ToastKind,
}

/// Show a toast and clear it after 3 seconds, unless a newer one replaced it.
fn show_toast(
    toast: RwSignal<Option<Toast>>,
    toast_seq: RwSignal<u64>,
    message: impl Into<String>,
    kind: ToastKind,
) {
    let id = toast_seq.get_untracked() + 1;
    toast_seq.set(id);
    toast.set(Some(Toast {
        message: message.into(),
        kind,
    }));
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(3_000).await;
        if toast_seq.get_untracked() == id {
            toast.set(None);
        }
    });
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let toast: RwSignal<Option<Toast>> = RwSignal::new(None);
    let toast_seq: RwSignal<u64> = RwSignal::new(0);
    let translating = RwSignal::new(false);

    wasm_bindgen_futures::spawn_local(async move {
        match model::fetch_products().await {
            Ok(list) => products.set(list),
            Err(err) => error.set(Some(err.message("Failed to load products"))),
        }
        loading.set(false);
    });

    let handle_translate = move |product_id: i64| {
        show_toast(toast, toast_seq, "Translating...", ToastKind::Info);
        translating.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::translate_product(product_id).await {
                Ok(()) => {
                    show_toast(toast, toast_seq, "Translation completed", ToastKind::Success);
                    if let Ok(list) = model::fetch_products().await {
                        products.set(list);
                    }
                }
                Err(err) => {
                    let message = err.message("번역 실패");
                    show_toast(toast, toast_seq, message.clone(), ToastKind::Error);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                }
            }
            translating.set(false);
        });
    };

    let toast_class = move || match toast.get().map(|t| t.kind) {
        Some(ToastKind::Error) => "toast toast--error",
        Some(ToastKind::Success) => "toast toast--success",
        _ => "toast toast--info",
    };

    view! {
        <div class="products-page">
            <div class="page__header">
                <div>
                    <h1>"Products"</h1>
                    <p class="page__subtitle">
                        "Overseas items collected for resale. Import a URL, then translate and export them for SmartStore."
                    </p>
                </div>
                {move || toast.get().map(|t| view! {
                    <div class=toast_class>{t.message}</div>
                })}
            </div>
            {move || loading.get().then(|| view! { <div>"Loading..."</div> })}
            {move || error.get().map(|message| view! {
                <div class="page__error">{message}</div>
            })}
            <div class="card-grid">
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=move |product: Product| {
                        let product_id = product.id;
                        let localizations = product.localizations.clone();
                        view! {
                            <div class="card">
                                <div class="card__row">
                                    <div>
                                        <div class="card__title">{product.raw_title.clone()}</div>
                                        <div class="card__meta">{product.source_site.clone()}</div>
                                        <div class="card__meta card__meta--url">
                                            {product.source_url.clone()}
                                        </div>
                                    </div>
                                    <Button
                                        disabled=Signal::derive(move || translating.get())
                                        on_click=Callback::new(move |_| handle_translate(product_id))
                                    >
                                        "Translate to ko-KR"
                                    </Button>
                                </div>
                                <div class="card__meta">
                                    {format!(
                                        "{} options, {} localizations",
                                        product.options.len(),
                                        product.localizations.len(),
                                    )}
                                </div>
                                {(!localizations.is_empty()).then(|| view! {
                                    <div class="card__section">
                                        <div class="card__section-title">"Localizations"</div>
                                        {localizations
                                            .iter()
                                            .map(|loc| view! {
                                                <div class="card__meta">
                                                    {format!("{}: {}", loc.locale, loc.title)}
                                                </div>
                                            })
                                            .collect_view()}
                                    </div>
                                })}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
