//! TopHeader: title, breadcrumb, search box, panel toggles, user info and
//! logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::use_session;
use contracts::system::pages::{resolve, PageKey};
use leptos::prelude::*;

/// Breadcrumb trail for a page, root first.
pub fn breadcrumb(page: PageKey) -> Vec<&'static str> {
    if page == PageKey::Dashboard {
        vec![PageKey::Dashboard.title()]
    } else {
        vec![PageKey::Dashboard.title(), page.title()]
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let current_page = Memo::new(move |_| ctx.route.with(|route| resolve(route)));
    let search = move || ctx.app.with(|app| app.search_query().to_string());

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{ctx.title()}</span>
                <span class="top-header__breadcrumb">
                    {move || breadcrumb(current_page.get()).join(" / ")}
                </span>
            </div>

            <div class="top-header__search">
                {icon("search")}
                <input
                    type="search"
                    placeholder="بحث..."
                    prop:value=search
                    on:input=move |ev| ctx.set_search(event_target_value(&ev))
                />
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "إخفاء القائمة" } else { "إظهار القائمة" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_right()
                    title=move || if is_right_panel_visible() { "إخفاء سجل النشاط" } else { "إظهار سجل النشاط" }
                >
                    {move || if is_right_panel_visible() {
                        icon("panel-right-close")
                    } else {
                        icon("panel-right-open")
                    }}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || session.get()
                            .map(|s| format!("{} ({})", s.username, s.role.display_name()))
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| ctx.logout() title="تسجيل الخروج">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
