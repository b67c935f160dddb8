use crate::layout::channel_context::ChannelState;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::routes::AppRoutes;
use contracts::channel::{ChannelCatalog, ExportRegistry, DEFAULT_SUPPORTED_LABELS};
use leptos::prelude::*;

/// Comma-separated channel labels enabled for this build, e.g.
/// `SUPPORTED_CHANNEL_LABELS="SmartStore,Coupang"`.
const SUPPORTED_CHANNEL_LABELS: &str = match option_env!("SUPPORTED_CHANNEL_LABELS") {
    Some(labels) => labels,
    None => DEFAULT_SUPPORTED_LABELS,
};

#[component]
pub fn App() -> impl IntoView {
    // Navigation state for the whole app.
    provide_context(AppGlobalContext::new());

    // Channel selection: catalog and export registry are built once here and
    // injected, never reached for as globals.
    provide_context(ChannelState::new(
        ChannelCatalog::from_supported_labels(SUPPORTED_CHANNEL_LABELS),
        ExportRegistry::new(),
    ));

    view! {
        <Header />
        <AppRoutes />
    }
}
