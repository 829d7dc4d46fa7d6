use crate::shared::entry_form::{EntryFormPage, EntryLogPage};
use contracts::domain::e102_irrigation_entry::FORM_SPEC;
use contracts::system::pages::PageKey;
use leptos::prelude::*;

#[component]
pub fn IrrigationEntryPage() -> impl IntoView {
    view! { <EntryFormPage spec=&FORM_SPEC /> }
}

#[component]
pub fn IrrigationConsumptionPage() -> impl IntoView {
    let page = PageKey::IrrigationConsumption;
    view! { <EntryLogPage route_id=page.route_id() title=page.title() spec=&FORM_SPEC /> }
}
