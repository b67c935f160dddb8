pub mod model;

use contracts::domain::order::Order;
use leptos::prelude::*;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    wasm_bindgen_futures::spawn_local(async move {
        match model::fetch_orders().await {
            Ok(list) => orders.set(list),
            Err(err) => error.set(Some(err.message("Failed to load orders"))),
        }
        loading.set(false);
    });

    view! {
        <div class="orders-page">
            <div class="page__header">
                <div>
                    <h1>"Orders"</h1>
                    <p class="page__subtitle">"Status tracking for domestic sales orders."</p>
                </div>
            </div>
            {move || loading.get().then(|| view! { <div>"Loading..."</div> })}
            {move || error.get().map(|message| view! {
                <div class="page__error">{message}</div>
            })}
            <div class="card-grid">
                <For
                    each=move || orders.get()
                    key=|order| order.id
                    children=move |order: Order| {
                        view! {
                            <div class="card">
                                <div class="card__title">
                                    {format!("{} ({})", order.external_order_id, order.channel_name)}
                                </div>
                                <div class="card__meta">{order.customer_name.clone()}</div>
                                <div class="card__meta">{format!("Status: {}", order.status)}</div>
                                <div class="card__meta">{format!("Items: {}", order.items.len())}</div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
