use contracts::domain::{e101_water_entry, e102_irrigation_entry, e103_monitoring_entry};
use contracts::shared::entry_form::AcceptedRecord;

/// Figures shown on the overview cards for the current session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSummary {
    pub entries: usize,
    pub water_total: f64,
    pub irrigation_total: f64,
    pub inspections: usize,
}

pub fn session_summary(records: &[AcceptedRecord]) -> SessionSummary {
    records.iter().fold(SessionSummary::default(), |mut acc, record| {
        acc.entries += 1;
        match record.form_id {
            id if id == e101_water_entry::FORM_SPEC.id => acc.water_total += record.total,
            id if id == e102_irrigation_entry::FORM_SPEC.id => acc.irrigation_total += record.total,
            id if id == e103_monitoring_entry::FORM_SPEC.id => acc.inspections += 1,
            _ => {}
        }
        acc
    })
}
