//! Records accepted during the session for one form, with a shortcut to
//! the entry page when the role may open it.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::{format_date, format_timestamp};
use crate::shared::icons::icon;
use crate::shared::number_format::format_number_with_decimals;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MANAGEMENT;
use crate::system::auth::use_role;
use contracts::shared::entry_form::{AcceptedRecord, FormSpec};
use contracts::system::rbac;
use leptos::prelude::*;
use thaw::*;

fn row_cells(spec: &'static FormSpec, record: &AcceptedRecord) -> Vec<String> {
    let mut cells = vec![format_date(&record.date)];
    cells.extend(spec.numeric_fields.iter().map(|f| {
        let value = record.numbers.get(f.name).copied().unwrap_or_default();
        format_number_with_decimals(value, 2)
    }));
    if spec.has_total() {
        cells.push(format_number_with_decimals(record.total, 2));
    }
    cells.push(format_timestamp(&record.accepted_at));
    cells
}

fn header_cells(spec: &'static FormSpec) -> Vec<&'static str> {
    let mut headers = vec!["التاريخ"];
    headers.extend(spec.numeric_fields.iter().map(|f| f.label));
    if spec.has_total() {
        headers.push("الإجمالي");
    }
    headers.push("وقت الحفظ");
    headers
}

#[component]
pub fn EntryLogPage(
    route_id: &'static str,
    #[prop(into)] title: String,
    spec: &'static FormSpec,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let records = move || {
        ctx.activity.with(|items| {
            items
                .iter()
                .filter(|r| r.form_id == spec.id)
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let role = use_role();
    let can_enter = move || role.get().is_some_and(|role| rbac::is_allowed(role, spec.id));

    view! {
        <PageFrame route_id=route_id category=PAGE_CAT_MANAGEMENT title=title subtitle=spec.title>
            <Show when=can_enter>
                <div class="page__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(spec.id)>
                        {icon("clipboard")}
                        " إدخال بيانات جديدة"
                    </Button>
                </div>
            </Show>

            <Show
                when=move || !records().is_empty()
                fallback=|| view! { <div class="empty-state">"لا توجد بيانات مسجلة في هذه الجلسة"</div> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            {header_cells(spec).into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=records
                            key=|record| record.id
                            children=move |record: AcceptedRecord| view! {
                                <tr>
                                    {row_cells(spec, &record).into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{e101_water_entry, e103_monitoring_entry};
    use contracts::shared::entry_form::{EntryForm, ImmediateTransport, RejectionList};

    async fn accepted(spec: &'static FormSpec, fill: impl Fn(&mut EntryForm)) -> AcceptedRecord {
        let mut form = EntryForm::new(spec);
        fill(&mut form);
        let mut rejections = RejectionList::new();
        form.submit(&mut rejections, &ImmediateTransport).await.unwrap()
    }

    #[tokio::test]
    async fn water_columns_line_up_with_cells() {
        let spec = &e101_water_entry::FORM_SPEC;
        let record = accepted(spec, |f| {
            f.set_date("2024-05-01");
            f.set_text("recorded_by", "أحمد");
            f.set_number("station_north", "1200");
            f.set_number("station_south", "300.5");
        })
        .await;
        let cells = row_cells(spec, &record);
        assert_eq!(cells.len(), header_cells(spec).len());
        assert_eq!(cells[0], "01.05.2024");
        assert_eq!(cells[1], "1 200.00");
        assert_eq!(cells[cells.len() - 2], "1 500.50");
    }

    #[tokio::test]
    async fn monitoring_has_no_total_column() {
        let spec = &e103_monitoring_entry::FORM_SPEC;
        assert!(!header_cells(spec).contains(&"الإجمالي"));
        let record = accepted(spec, |f| {
            f.set_date("2024-05-02");
            f.set_text("station_name", "محطة الشمال");
            f.set_text("inspector", "سالم");
            f.set_number("ph_level", "7.2");
        })
        .await;
        assert_eq!(row_cells(spec, &record).len(), header_cells(spec).len());
    }
}
