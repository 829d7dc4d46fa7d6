//! Daily station inspection: pressure, chlorine, pH and turbidity.

use crate::shared::entry_form::{EntryFormPage, EntryLogPage};
use contracts::domain::e103_monitoring_entry::FORM_SPEC;
use contracts::system::pages::PageKey;
use leptos::prelude::*;

#[component]
pub fn MonitoringEntryPage() -> impl IntoView {
    view! { <EntryFormPage spec=&FORM_SPEC /> }
}

#[component]
pub fn StationMonitoringPage() -> impl IntoView {
    let page = PageKey::StationMonitoring;
    view! { <EntryLogPage route_id=page.route_id() title=page.title() spec=&FORM_SPEC /> }
}
