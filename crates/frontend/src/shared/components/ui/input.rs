use leptos::prelude::*;

/// Labeled text input. Covers the console's two shapes: plain text fields
/// (import URL, id filters) and the numeric pricing fields, which set
/// `input_type="number"` plus a `step`.
#[component]
pub fn Input(
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] input_type: MaybeProp<String>,
    #[prop(optional, into)] step: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|text| view! {
                <label class="form__label" for=input_id>{text}</label>
            })}
            <input
                id=input_id
                class="form__input"
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                step=move || step.get().unwrap_or_default()
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
