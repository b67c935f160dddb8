use crate::layout::channel_context::use_channel;
use crate::shared::components::ui::{Button, Select};
use leptos::prelude::*;

/// Channel dropdown with an explicit apply step: picking an option only
/// stages it; the selection becomes current when the user hits 적용.
#[component]
pub fn ChannelSelector(
    /// Render the status line under the controls
    #[prop(optional)]
    show_status: bool,
) -> impl IntoView {
    let channel = use_channel();
    let pending = RwSignal::new(channel.current.get_untracked().value.clone());

    // Keep the staged value in step when the selection changes elsewhere.
    Effect::new(move |_| {
        pending.set(channel.current.get().value.clone());
    });

    let options: Vec<(String, String)> = channel
        .options()
        .into_iter()
        .map(|option| {
            let suffix = if option.supported {
                " (지원됨)"
            } else {
                " (지원 예정)"
            };
            (option.value.clone(), format!("{}{}", option.label, suffix))
        })
        .collect();
    let options = StoredValue::new(options);

    view! {
        <div class="channel-selector">
            <div class="channel-selector__row">
                <Select
                    label="채널 선택"
                    id="channel-select"
                    value=pending
                    options=Signal::derive(move || options.get_value())
                    on_change=Callback::new(move |value: String| pending.set(value))
                />
                <Button on_click=Callback::new(move |_| {
                    channel.select_by_value(&pending.get_untracked())
                })>"적용"</Button>
            </div>
            {show_status
                .then(|| view! {
                    <div class="channel-selector__status">
                        {move || channel.status_message.get()}
                    </div>
                })}
        </div>
    }
}
