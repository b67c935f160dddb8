pub mod model;

use crate::shared::components::ui::{Button, Input};
use contracts::domain::purchase_order::{
    PurchaseOrder, PurchaseOrderCreateRequest, PURCHASE_ORDER_STATUSES,
};
use leptos::prelude::*;

#[component]
pub fn PurchaseOrdersPage() -> impl IntoView {
    let purchase_orders: RwSignal<Vec<PurchaseOrder>> = RwSignal::new(Vec::new());
    let order_ids_input = RwSignal::new(String::new());
    let lookup_input = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    // Drops a fresh or updated purchase order into the list, replacing any
    // existing entry with the same id.
    let upsert = move |po: PurchaseOrder| {
        purchase_orders.update(|list| {
            if let Some(existing) = list.iter_mut().find(|item| item.id == po.id) {
                *existing = po;
            } else {
                list.push(po);
            }
        });
    };

    let handle_create = move |_| {
        let Some(ids) = model::parse_order_ids(&order_ids_input.get_untracked()) else {
            status.set("Order ids must be numbers separated by commas".to_string());
            return;
        };
        let request = PurchaseOrderCreateRequest {
            order_ids: if ids.is_empty() { None } else { Some(ids) },
        };

        status.set("Creating purchase orders...".to_string());
        wasm_bindgen_futures::spawn_local(async move {
            match model::create_purchase_orders(&request).await {
                Ok(created) => {
                    status.set(format!("Created {} purchase order(s).", created.len()));
                    for po in created {
                        upsert(po);
                    }
                    order_ids_input.set(String::new());
                }
                Err(err) => status.set(err.message("Creation failed")),
            }
        });
    };

    let handle_lookup = move |_| {
        let id = lookup_input.get_untracked().trim().to_string();
        if id.is_empty() {
            return;
        }

        status.set("Loading purchase order...".to_string());
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_purchase_order(&id).await {
                Ok(po) => {
                    status.set(format!("Loaded purchase order #{}", po.id));
                    upsert(po);
                }
                Err(err) => status.set(err.message("Lookup failed")),
            }
        });
    };

    let handle_status_change = move |id: i64, new_status: String| {
        if new_status.is_empty() {
            return;
        }

        status.set("Updating status...".to_string());
        wasm_bindgen_futures::spawn_local(async move {
            match model::update_status(id, &new_status).await {
                Ok(po) => {
                    status.set(format!("Purchase order #{} set to {}", po.id, po.status));
                    upsert(po);
                }
                Err(err) => status.set(err.message("Status update failed")),
            }
        });
    };

    view! {
        <div class="purchase-orders-page">
            <div class="page__header">
                <div>
                    <h1>"Purchase Orders"</h1>
                    <p class="page__subtitle">
                        "Aggregate sales orders into supplier purchase orders."
                    </p>
                </div>
                {move || {
                    let text = status.get();
                    (!text.is_empty()).then(|| view! { <div class="page__status">{text}</div> })
                }}
            </div>
            <div class="card form">
                <Input
                    label="Order ids (comma separated, empty for all NEW orders)"
                    id="po-order-ids"
                    value=order_ids_input
                    placeholder="1, 2, 3"
                    on_input=Callback::new(move |value: String| order_ids_input.set(value))
                />
                <Button on_click=Callback::new(handle_create)>"Create purchase orders"</Button>
            </div>
            <div class="card form">
                <Input
                    label="Purchase order id"
                    id="po-lookup"
                    value=lookup_input
                    on_input=Callback::new(move |value: String| lookup_input.set(value))
                />
                <Button on_click=Callback::new(handle_lookup)>"Load"</Button>
            </div>
            <div class="card-grid">
                <For
                    each=move || purchase_orders.get()
                    key=|po| (po.id, po.status.clone())
                    children=move |po: PurchaseOrder| {
                        let po_id = po.id;
                        view! {
                            <div class="card">
                                <div class="card__title">
                                    {format!("PO #{} - {}", po.id, po.supplier_name)}
                                </div>
                                <div class="card__meta">{format!("Status: {}", po.status)}</div>
                                <div class="card__meta">
                                    {format!("{} {:.2}", po.currency, po.total_amount)}
                                </div>
                                <div class="card__meta">{format!("Items: {}", po.items.len())}</div>
                                <select
                                    class="card__select"
                                    on:change=move |ev| {
                                        handle_status_change(po_id, event_target_value(&ev));
                                    }
                                >
                                    <option value="" disabled=true selected=true>
                                        "Update status"
                                    </option>
                                    {PURCHASE_ORDER_STATUSES
                                        .iter()
                                        .map(|value| {
                                            view! { <option value=*value>{*value}</option> }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
