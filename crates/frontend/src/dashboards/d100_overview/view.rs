use super::summary::session_summary;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::StatCard;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_session;
use contracts::system::pages::PageKey;
use leptos::prelude::*;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let page = PageKey::Dashboard;

    let summary = Memo::new(move |_| ctx.activity.with(|records| session_summary(records)));
    let quick_actions = move || ctx.app.with(|app| app.visible_quick_actions());

    let welcome = move || {
        session.get().map(|s| {
            format!(
                "مرحباً {} | {} | منذ {}",
                s.username,
                s.role.display_name(),
                format_timestamp(&s.logged_in_at)
            )
        })
    };

    view! {
        <PageFrame route_id=page.route_id() category=PAGE_CAT_DASHBOARD title=page.title() subtitle=Signal::derive(welcome)>
            <div class="stat-cards">
                <StatCard
                    label="الإدخالات في هذه الجلسة"
                    icon_name="clipboard"
                    value=Signal::derive(move || summary.get().entries.to_string())
                />
                <StatCard
                    label="إجمالي استهلاك المياه"
                    icon_name="droplet"
                    value=Signal::derive(move || format_quantity(summary.get().water_total, "م³"))
                />
                <StatCard
                    label="إجمالي مياه الري"
                    icon_name="sprout"
                    value=Signal::derive(move || format_quantity(summary.get().irrigation_total, "م³"))
                />
                <StatCard
                    label="الفحوصات اليومية"
                    icon_name="activity"
                    value=Signal::derive(move || summary.get().inspections.to_string())
                />
            </div>

            <h2 class="section-title">"إجراءات سريعة"</h2>
            <Show
                when=move || !quick_actions().is_empty()
                fallback=|| view! { <div class="empty-state">"لا توجد إجراءات متاحة لدورك"</div> }
            >
                <div class="quick-actions">
                    {move || quick_actions().into_iter().map(|action| view! {
                        <button class="quick-action" on:click=move |_| ctx.navigate(action.id)>
                            {icon(action.icon)}
                            <span>{action.label}</span>
                        </button>
                    }).collect_view()}
                </div>
            </Show>
        </PageFrame>
    }
}
