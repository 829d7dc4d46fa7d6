//! Management screens whose data the dashboard does not hold yet
//! (cameras, GIS layers, maintenance, projects, reports, analytics).

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MANAGEMENT;
use contracts::system::pages::PageKey;
use contracts::system::rbac::MENU_ITEMS;
use leptos::prelude::*;

fn page_icon(page: PageKey) -> &'static str {
    MENU_ITEMS
        .iter()
        .find(|item| item.id == page.route_id())
        .map(|item| item.icon)
        .unwrap_or("layout-dashboard")
}

#[component]
pub fn ManagementPage(page: PageKey) -> impl IntoView {
    view! {
        <PageFrame route_id=page.route_id() category=PAGE_CAT_MANAGEMENT title=page.title()>
            <div class="empty-state">
                <div class="empty-state__icon">{icon(page_icon(page))}</div>
                <p>"لا توجد بيانات لعرضها حالياً"</p>
            </div>
        </PageFrame>
    }
}
