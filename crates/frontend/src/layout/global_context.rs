use crate::routes::Route;
use leptos::prelude::*;

/// App-wide navigation state, provided via context from `App`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Route>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Route::Products),
        }
    }

    pub fn navigate(&self, route: Route) {
        self.active.set(route);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
