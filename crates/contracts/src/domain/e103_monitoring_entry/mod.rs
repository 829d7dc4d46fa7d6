//! Daily station inspection: water quality readings and follow-ups.
//! Readings are independent measurements, so the form has no total.

use crate::shared::entry_form::{ConditionalRule, DataRule, FormSpec, NumericField, TextField};

pub static FORM_SPEC: FormSpec = FormSpec {
    id: "monitoring_entry",
    title: "إدخال المراقبة اليومية",
    numeric_fields: &[
        NumericField::reading("pressure_bar", "الضغط", "بار", Some(16.0)),
        NumericField::reading("chlorine_ppm", "الكلور المتبقي", "ملغم/لتر", Some(5.0)),
        NumericField::reading("ph_level", "الرقم الهيدروجيني", "", Some(14.0)),
        NumericField::reading("turbidity_ntu", "العكارة", "NTU", None),
    ],
    text_fields: &[
        TextField::required("station_name", "اسم المحطة"),
        TextField::required("inspector", "اسم المفتش"),
        TextField::notes("issues_description", "وصف المشكلات"),
        TextField::notes("maintenance_notes", "تفاصيل الصيانة المطلوبة"),
    ],
    conditional_rules: &[
        ConditionalRule {
            flag: "issues_detected",
            flag_label: "تم رصد مشكلات",
            field: "issues_description",
        },
        ConditionalRule {
            flag: "maintenance_required",
            flag_label: "تحتاج إلى صيانة",
            field: "maintenance_notes",
        },
    ],
    data_rule: DataRule::None,
    total_unit: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entry_form::{EntryForm, EntryFormError, RejectionList};

    fn inspected() -> EntryForm {
        let mut form = EntryForm::new(&FORM_SPEC);
        form.set_date("2024-09-01");
        form.set_text("station_name", "محطة الشمال");
        form.set_text("inspector", "منى");
        form
    }

    #[test]
    fn test_readings_are_optional() {
        assert_eq!(inspected().validate(&RejectionList::new()), Ok(()));
    }

    #[test]
    fn test_required_texts_in_declaration_order() {
        let mut form = EntryForm::new(&FORM_SPEC);
        form.set_date("2024-09-01");
        assert_eq!(
            form.validate(&RejectionList::new()),
            Err(EntryFormError::MissingRequiredField("station_name".into()))
        );
        form.set_text("station_name", "x");
        assert_eq!(
            form.validate(&RejectionList::new()),
            Err(EntryFormError::MissingRequiredField("inspector".into()))
        );
    }

    #[test]
    fn test_chlorine_above_limit() {
        let mut form = inspected();
        form.set_number("chlorine_ppm", "5.5");
        assert_eq!(
            form.validate(&RejectionList::new()),
            Err(EntryFormError::InvalidNumericValue("chlorine_ppm".into()))
        );
    }

    #[test]
    fn test_conditionals_checked_in_order() {
        let mut form = inspected();
        form.set_flag("issues_detected", true);
        form.set_flag("maintenance_required", true);
        assert_eq!(
            form.validate(&RejectionList::new()),
            Err(EntryFormError::MissingConditionalField("issues_description".into()))
        );
        form.set_text("issues_description", "انخفاض الضغط");
        assert_eq!(
            form.validate(&RejectionList::new()),
            Err(EntryFormError::MissingConditionalField("maintenance_notes".into()))
        );
        form.set_text("maintenance_notes", "استبدال صمام");
        assert_eq!(form.validate(&RejectionList::new()), Ok(()));
    }

    #[test]
    fn test_no_total() {
        let mut form = inspected();
        form.set_number("pressure_bar", "4");
        assert_eq!(form.total(), 0.0);
        assert!(!FORM_SPEC.has_total());
    }
}
