use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::system::app_state::RoutePolicy;
use contracts::system::pages::PageKey;
use leptos::prelude::*;

fn policy_label(policy: RoutePolicy) -> &'static str {
    match policy {
        RoutePolicy::Enforce => "مفعّل: لا يمكن فتح صفحة غير مسموح بها للدور",
        RoutePolicy::Permissive => "غير مفعّل: القائمة فقط تخفي الصفحات",
    }
}

/// Read-only view of the loaded configuration.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let page = PageKey::Settings;
    let policy = ctx.app.with_untracked(|app| app.policy());

    view! {
        <PageFrame route_id=page.route_id() category=PAGE_CAT_SYSTEM title=page.title()>
            <table class="data-table settings-table">
                <tbody>
                    <tr>
                        <th>"اسم النظام"</th>
                        <td>{ctx.title()}</td>
                    </tr>
                    <tr>
                        <th>"التحقق من الصلاحيات عند التنقل"</th>
                        <td>{policy_label(policy)}</td>
                    </tr>
                    <tr>
                        <th>"مدة الحفظ التجريبية"</th>
                        <td>{format!("{} ms", ctx.submission_delay_ms())}</td>
                    </tr>
                </tbody>
            </table>
        </PageFrame>
    }
}
