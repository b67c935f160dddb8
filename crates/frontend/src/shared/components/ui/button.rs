use leptos::prelude::*;

/// Action button. Defaults to `type="button"` so a click inside a form does
/// not submit it; the submit buttons pass `button_type="submit"` explicitly.
#[component]
pub fn Button(
    #[prop(optional, into)] button_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class="button"
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
