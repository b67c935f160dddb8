use crate::domain::order::ui::list::OrdersPage;
use crate::domain::order::ui::upload::UploadOrdersPage;
use crate::domain::product::ui::export::ChannelExportPage;
use crate::domain::product::ui::import::ImportProductPage;
use crate::domain::product::ui::list::ProductsPage;
use crate::domain::purchase_order::ui::list::PurchaseOrdersPage;
use crate::domain::shipment::ui::list::ShipmentsPage;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;
// Signal-based page switching; no router components.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Products,
    ImportProduct,
    ChannelExport,
    Orders,
    UploadOrders,
    PurchaseOrders,
    Shipments,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Products,
        Route::ImportProduct,
        Route::ChannelExport,
        Route::Orders,
        Route::UploadOrders,
        Route::PurchaseOrders,
        Route::Shipments,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Route::Products => "Products",
            Route::ImportProduct => "Import",
            Route::ChannelExport => "Export",
            Route::Orders => "Orders",
            Route::UploadOrders => "Upload Orders",
            Route::PurchaseOrders => "Purchase Orders",
            Route::Shipments => "Shipments",
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <main class="page">
            {move || match ctx.active.get() {
                Route::Products => view! { <ProductsPage /> }.into_any(),
                Route::ImportProduct => view! { <ImportProductPage /> }.into_any(),
                Route::ChannelExport => view! { <ChannelExportPage /> }.into_any(),
                Route::Orders => view! { <OrdersPage /> }.into_any(),
                Route::UploadOrders => view! { <UploadOrdersPage /> }.into_any(),
                Route::PurchaseOrders => view! { <PurchaseOrdersPage /> }.into_any(),
                Route::Shipments => view! { <ShipmentsPage /> }.into_any(),
            }}
        </main>
    }
}
