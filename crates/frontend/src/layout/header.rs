use crate::layout::global_context::use_app_context;
use crate::routes::Route;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="header">
            <div class="header__title">"QQQ Purchase Agency Assistant"</div>
            <nav class="header__nav">
                {Route::ALL
                    .iter()
                    .map(|route| {
                        let route = *route;
                        view! {
                            <button
                                class=move || {
                                    if ctx.active.get() == route {
                                        "header__link header__link--active"
                                    } else {
                                        "header__link"
                                    }
                                }
                                on:click=move |_| ctx.navigate(route)
                            >
                                {route.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
