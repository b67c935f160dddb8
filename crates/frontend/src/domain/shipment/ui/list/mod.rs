pub mod model;

use contracts::domain::shipment::Shipment;
use leptos::prelude::*;

#[component]
pub fn ShipmentsPage() -> impl IntoView {
    let shipments: RwSignal<Vec<Shipment>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    wasm_bindgen_futures::spawn_local(async move {
        match model::fetch_shipments().await {
            Ok(list) => shipments.set(list),
            Err(err) => error.set(Some(err.message("Failed to load shipments"))),
        }
        loading.set(false);
    });

    view! {
        <div class="shipments-page">
            <div class="page__header">
                <div>
                    <h1>"Shipments"</h1>
                    <p class="page__subtitle">
                        "Overseas and domestic parcels with their latest tracking status."
                    </p>
                </div>
            </div>
            {move || loading.get().then(|| view! { <div>"Loading..."</div> })}
            {move || error.get().map(|message| view! {
                <div class="page__error">{message}</div>
            })}
            <div class="card-grid">
                <For
                    each=move || shipments.get()
                    key=|shipment| shipment.id
                    children=move |shipment: Shipment| {
                        let status = shipment
                            .last_status
                            .clone()
                            .unwrap_or_else(|| "unknown".to_string());
                        view! {
                            <div class="card">
                                <div class="card__title">{shipment.carrier_name.clone()}</div>
                                <div class="card__meta">
                                    {format!("Tracking: {}", shipment.tracking_number)}
                                </div>
                                <div class="card__meta">
                                    {format!("Type: {}", shipment.shipment_type)}
                                </div>
                                <div class="card__meta">{format!("Status: {}", status)}</div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
