//! PageFrame: standard root wrapper for every page in the content area.
//!
//! Sets `id` (`"{route}--{category}"`) and `data-page-category` on the
//! root element and renders the page header with its title.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// Route id of the page, e.g. `"water_entry"`.
    route_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_ENTRY => "page page--entry",
        _ => "page",
    };

    view! {
        <div id=page_id(route_id, category) class=class data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
