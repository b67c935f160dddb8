use contracts::channel::{ChannelCatalog, ChannelError, ChannelOption, ExportRegistry};
use leptos::prelude::*;

/// Current sales-channel selection, shared app-wide via context.
///
/// The catalog and export registry are immutable for the session; only the
/// selection and its status line are reactive. There is always exactly one
/// current channel, starting from the first (supported) catalog entry.
#[derive(Clone, Copy)]
pub struct ChannelState {
    pub current: RwSignal<ChannelOption>,
    pub status_message: RwSignal<String>,
    catalog: StoredValue<ChannelCatalog>,
    registry: StoredValue<ExportRegistry>,
}

fn channel_status(channel: &ChannelOption) -> String {
    format!(
        "현재 채널: {} ({})",
        channel.label,
        if channel.supported { "지원됨" } else { "지원 예정" }
    )
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

impl ChannelState {
    pub fn new(catalog: ChannelCatalog, registry: ExportRegistry) -> Self {
        let first = catalog.first().clone();
        let status_message = RwSignal::new(channel_status(&first));
        Self {
            current: RwSignal::new(first),
            status_message,
            catalog: StoredValue::new(catalog),
            registry: StoredValue::new(registry),
        }
    }

    pub fn options(&self) -> Vec<ChannelOption> {
        self.catalog.with_value(|catalog| catalog.options().to_vec())
    }

    /// Apply a selection from the dropdown. Unknown values are rejected and
    /// the current selection stays as-is; a known-but-unsupported channel is
    /// selected for visibility and the user is warned right away.
    pub fn select_by_value(&self, value: &str) {
        let selected = self
            .catalog
            .with_value(|catalog| catalog.select(value).cloned());
        match selected {
            Err(err) => {
                alert(&err.to_string());
                self.status_message
                    .set("지원되지 않는 채널입니다. SmartStore를 사용해주세요.".to_string());
            }
            Ok(next) => {
                let unsupported = !next.supported;
                self.status_message.set(channel_status(&next));
                self.current.set(next);
                if unsupported {
                    alert(&ChannelError::Unsupported.to_string());
                }
            }
        }
    }

    /// Gate + endpoint lookup for a channel's bulk export. Runs before any
    /// export request is built; unsupported channels never reach the backend.
    pub fn export_endpoint(&self, channel: &ChannelOption) -> Result<String, ChannelError> {
        self.registry.with_value(|registry| {
            registry.assert_export_allowed(channel)?;
            match registry.endpoint(&channel.value) {
                Some(path) => Ok(path.to_string()),
                // assert_export_allowed already rejected this case
                None => Err(ChannelError::Unsupported),
            }
        })
    }
}

pub fn use_channel() -> ChannelState {
    use_context::<ChannelState>().expect("ChannelState context not found")
}
