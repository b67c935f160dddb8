pub mod model;
pub mod view_model;

use crate::layout::channel_context::use_channel;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::components::ChannelSelector;
use contracts::domain::product::Product;
use contracts::pricing::PricingField;
use leptos::prelude::*;
use view_model::ChannelExportViewModel;

#[component]
fn PricingFieldInput(
    vm: ChannelExportViewModel,
    product_id: i64,
    field: PricingField,
    #[prop(into)] label: String,
    #[prop(into)] step: String,
) -> impl IntoView {
    view! {
        <Input
            label=label
            input_type="number"
            step=step
            placeholder="기본값"
            value=Signal::derive(move || vm.field_value(product_id, field))
            on_input=Callback::new(move |value: String| vm.update_field(product_id, field, value))
        />
    }
}

#[component]
pub fn ChannelExportPage() -> impl IntoView {
    let vm = ChannelExportViewModel::new();
    let channel = use_channel();

    vm.load();

    view! {
        <div class="export-page">
            <div class="page__header">
                <div>
                    <h1>"Channel Export"</h1>
                    <p class="page__subtitle">
                        "Choose localized products and download the channel bulk upload CSV."
                    </p>
                </div>
                {move || {
                    let text = vm.status.get();
                    (!text.is_empty()).then(|| view! { <div class="page__status">{text}</div> })
                }}
            </div>
            <ChannelSelector show_status=true />
            <div class="page__hint">{move || channel.status_message.get()}</div>
            {move || vm.loading.get().then(|| view! { <div>"Loading products..."</div> })}
            {move || vm.error.get().map(|message| view! {
                <div class="page__error">{message}</div>
            })}
            <div class="card-grid">
                <For
                    each=move || vm.products.get()
                    key=|product| product.id
                    children=move |product: Product| {
                        let product_id = product.id;
                        view! {
                            <div class="card">
                                <Checkbox
                                    id=format!("export-product-{}", product_id)
                                    label=product.raw_title.clone()
                                    checked=Signal::derive(move || vm.is_selected(product_id))
                                    on_change=Callback::new(move |_| vm.toggle(product_id))
                                />
                                <div class="card__meta">
                                    {format!("Localizations: {}", product.localizations.len())}
                                </div>
                                <div class="card__meta card__meta--url">
                                    {product.source_url.clone()}
                                </div>
                                <div class="pricing-grid">
                                    <PricingFieldInput
                                        vm=vm
                                        product_id=product_id
                                        field=PricingField::ExchangeRate
                                        label="환율"
                                        step="0.0001"
                                    />
                                    <PricingFieldInput
                                        vm=vm
                                        product_id=product_id
                                        field=PricingField::MarginRate
                                        label="마진율 %"
                                        step="0.1"
                                    />
                                    <PricingFieldInput
                                        vm=vm
                                        product_id=product_id
                                        field=PricingField::VatRate
                                        label="VAT %"
                                        step="0.1"
                                    />
                                    <PricingFieldInput
                                        vm=vm
                                        product_id=product_id
                                        field=PricingField::ShippingFee
                                        label="배송비"
                                        step="100"
                                    />
                                </div>
                                <div class="card__row">
                                    <Button on_click=Callback::new(move |_| vm.save_command(product_id))>
                                        "Save product pricing"
                                    </Button>
                                    {move || vm.message(product_id).map(|message| view! {
                                        <span class="card__message">{message}</span>
                                    })}
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <Button
                disabled=Signal::derive(move || vm.loading.get())
                on_click=Callback::new(move |_| vm.export_command(channel))
            >
                "Export selected"
            </Button>
        </div>
    }
}
