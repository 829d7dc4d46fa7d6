//! Session activity log: every record accepted since login.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::{format_date, format_timestamp};
use contracts::domain::form_spec;
use contracts::shared::entry_form::AcceptedRecord;
use leptos::prelude::*;

/// Pretty JSON of an accepted record for the details view
pub fn record_json(record: &AcceptedRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn record_title(record: &AcceptedRecord) -> String {
    let form = form_spec(record.form_id).map(|s| s.title).unwrap_or(record.form_id);
    format!("{} | {}", form, format_date(&record.date))
}

#[component]
pub fn ActivityPanel() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded = RwSignal::new(None::<String>);

    view! {
        <div class="activity-panel">
            <div class="activity-panel__header">"سجل النشاط"</div>
            <Show
                when=move || ctx.activity.with(|items| !items.is_empty())
                fallback=|| view! { <div class="empty-state">"لا يوجد نشاط بعد"</div> }
            >
                <For
                    each=move || ctx.activity.get()
                    key=|record| record.id
                    children=move |record: AcceptedRecord| {
                        let id = record.id.as_string();
                        let id_for_toggle = id.clone();
                        let json = record_json(&record);
                        view! {
                            <div class="activity-panel__item">
                                <div
                                    class="activity-panel__title"
                                    on:click=move |_| {
                                        let id = id_for_toggle.clone();
                                        expanded.update(|open| {
                                            *open = if open.as_deref() == Some(id.as_str()) { None } else { Some(id) };
                                        });
                                    }
                                >
                                    {record_title(&record)}
                                </div>
                                <div class="activity-panel__time">{format_timestamp(&record.accepted_at)}</div>
                                <Show when=move || expanded.get().as_deref() == Some(id.as_str())>
                                    <pre class="activity-panel__json">{json.clone()}</pre>
                                </Show>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
