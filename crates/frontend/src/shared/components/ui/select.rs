use leptos::prelude::*;

/// Labeled dropdown over `(value, label)` pairs. The current `value` decides
/// which option renders selected; picking one only fires `on_change`, the
/// caller owns the state.
#[component]
pub fn Select(
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|text| view! {
                <label class="form__label" for=select_id>{text}</label>
            })}
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(option_value, _)| option_value.clone()
                    children=move |(option_value, option_label)| {
                        let this_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == this_value
                            >
                                {option_label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
