//! Data-entry screens. Each module only declares its [`FormSpec`]; the
//! workflow itself lives in [`crate::shared::entry_form`].

pub mod e101_water_entry;
pub mod e102_irrigation_entry;
pub mod e103_monitoring_entry;

use crate::shared::entry_form::FormSpec;

pub static ALL_FORMS: &[&FormSpec] = &[
    &e101_water_entry::FORM_SPEC,
    &e102_irrigation_entry::FORM_SPEC,
    &e103_monitoring_entry::FORM_SPEC,
];

pub fn form_spec(form_id: &str) -> Option<&'static FormSpec> {
    ALL_FORMS.iter().copied().find(|spec| spec.id == form_id)
}
