//! Daily water consumption per station.

use crate::shared::entry_form::{EntryFormPage, EntryLogPage};
use contracts::domain::e101_water_entry::FORM_SPEC;
use contracts::system::pages::PageKey;
use leptos::prelude::*;

#[component]
pub fn WaterEntryPage() -> impl IntoView {
    view! { <EntryFormPage spec=&FORM_SPEC /> }
}

/// Consumption screen: records entered this session.
#[component]
pub fn WaterConsumptionPage() -> impl IntoView {
    let page = PageKey::WaterConsumption;
    view! { <EntryLogPage route_id=page.route_id() title=page.title() spec=&FORM_SPEC /> }
}
