use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::{load_config, DashboardConfig};
use leptos::prelude::*;

/// Id of an optional `<script type="application/toml">` block in index.html
/// that overrides the embedded configuration.
const CONFIG_ELEMENT_ID: &str = "dashboard-config";

fn page_config_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

#[component]
pub fn App() -> impl IntoView {
    let override_toml = page_config_override();
    let config = match load_config(override_toml.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid dashboard config, using defaults: {e:#}");
            DashboardConfig::default()
        }
    };

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    view! {
        <AppRoutes />
    }
}
