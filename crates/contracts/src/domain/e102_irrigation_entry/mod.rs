//! Daily irrigation water consumption per farm zone

use crate::shared::entry_form::{ConditionalRule, DataRule, FormSpec, NumericField, TextField};

pub static FORM_SPEC: FormSpec = FormSpec {
    id: "irrigation_entry",
    title: "إدخال استهلاك مياه الري",
    numeric_fields: &[
        NumericField::station("farm_zone_a", "المنطقة الزراعية أ", "م³"),
        NumericField::station("farm_zone_b", "المنطقة الزراعية ب", "م³"),
        NumericField::station("farm_zone_c", "المنطقة الزراعية ج", "م³"),
        NumericField::station("public_gardens", "الحدائق العامة", "م³"),
    ],
    text_fields: &[TextField::notes("issues_description", "وصف المشكلات")],
    conditional_rules: &[ConditionalRule {
        flag: "issues_detected",
        flag_label: "تم رصد مشكلات",
        field: "issues_description",
    }],
    data_rule: DataRule::AtLeastOnePositive,
    total_unit: Some("م³"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entry_form::{EntryForm, EntryFormError, ImmediateTransport, RejectionList};

    #[test]
    fn test_requires_one_zone_above_zero() {
        let mut form = EntryForm::new(&FORM_SPEC);
        form.set_date("2024-08-20");
        form.set_number("farm_zone_a", "0");
        assert_eq!(
            form.validate(&RejectionList::new()),
            Err(EntryFormError::NoDataProvided)
        );
        form.set_number("public_gardens", "0.5");
        assert_eq!(form.validate(&RejectionList::new()), Ok(()));
    }

    #[tokio::test]
    async fn test_accepted_entry_resets_form() {
        let mut rejections = RejectionList::new();
        let mut form = EntryForm::new(&FORM_SPEC);
        form.set_date("2024-08-21");
        form.set_number("farm_zone_b", "40");
        form.set_flag("issues_detected", true);
        form.set_text("issues_description", "تسرب في الخط الرئيسي");

        let record = form.submit(&mut rejections, &ImmediateTransport).await.unwrap();
        assert_eq!(record.total, 40.0);
        assert_eq!(record.flags["issues_detected"], true);
        assert_eq!(form.draft().date(), "");
        assert!(!form.draft().flag("issues_detected"));
        assert_eq!(form.total(), 0.0);
    }
}
