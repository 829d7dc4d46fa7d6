use super::draft::{EntryDraft, NumericInput};
use super::error::EntryFormError;
use super::rejection::RejectionList;
use super::spec::{DataRule, FormSpec};

/// Check a draft against its form spec.
///
/// Checks run in a fixed order and the first failure wins:
/// date present, date not yet used, other required texts present, numeric
/// values valid and in range, data rule, conditional fields.
pub fn validate(
    spec: &FormSpec,
    draft: &EntryDraft,
    rejections: &RejectionList,
) -> Result<(), EntryFormError> {
    let date = draft.date().trim();
    if date.is_empty() {
        return Err(EntryFormError::MissingRequiredField("date".to_string()));
    }
    if rejections.contains(date) {
        return Err(EntryFormError::DuplicateKey(date.to_string()));
    }

    for field in spec.text_fields.iter().filter(|f| f.required) {
        if draft.text(field.name).trim().is_empty() {
            return Err(EntryFormError::MissingRequiredField(field.name.to_string()));
        }
    }

    for field in spec.numeric_fields {
        match draft.number(field.name) {
            NumericInput::Empty => {}
            NumericInput::Value(v) if field.accepts(v) => {}
            NumericInput::Value(_) | NumericInput::Invalid => {
                return Err(EntryFormError::InvalidNumericValue(field.name.to_string()));
            }
        }
    }

    if spec.data_rule == DataRule::AtLeastOnePositive
        && !spec
            .total_fields()
            .any(|f| draft.number(f.name).or_zero() > 0.0)
    {
        return Err(EntryFormError::NoDataProvided);
    }

    for rule in spec.conditional_rules {
        if draft.flag(rule.flag) && draft.text(rule.field).trim().is_empty() {
            return Err(EntryFormError::MissingConditionalField(rule.field.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entry_form::spec::{ConditionalRule, NumericField, TextField};
    use crate::shared::entry_form::EntryForm;

    static SPEC: FormSpec = FormSpec {
        id: "test_entry",
        title: "test",
        numeric_fields: &[
            NumericField::station("a", "A", "m3"),
            NumericField::station("b", "B", "m3"),
            NumericField::reading("ph", "pH", "", Some(14.0)),
        ],
        text_fields: &[
            TextField::required("operator", "Operator"),
            TextField::notes("issues", "Issues"),
        ],
        conditional_rules: &[ConditionalRule {
            flag: "has_issues",
            flag_label: "Issues?",
            field: "issues",
        }],
        data_rule: DataRule::AtLeastOnePositive,
        total_unit: Some("m3"),
    };

    fn valid_form() -> EntryForm {
        let mut form = EntryForm::new(&SPEC);
        form.set_date("2024-06-01");
        form.set_text("operator", "Omar");
        form.set_number("a", "10");
        form
    }

    fn check(form: &EntryForm) -> Result<(), EntryFormError> {
        validate(&SPEC, form.draft(), &RejectionList::new())
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(check(&valid_form()), Ok(()));
    }

    #[test]
    fn test_missing_date_comes_first() {
        let mut form = EntryForm::new(&SPEC);
        form.set_number("a", "-5");
        assert_eq!(
            check(&form),
            Err(EntryFormError::MissingRequiredField("date".into()))
        );

        form.set_date("   ");
        assert_eq!(
            check(&form),
            Err(EntryFormError::MissingRequiredField("date".into()))
        );
    }

    #[test]
    fn test_duplicate_date_before_field_checks() {
        let mut form = EntryForm::new(&SPEC);
        form.set_date("2024-06-01");
        let mut rejections = RejectionList::new();
        rejections.insert("2024-06-01");
        assert_eq!(
            validate(&SPEC, form.draft(), &rejections),
            Err(EntryFormError::DuplicateKey("2024-06-01".into()))
        );
    }

    #[test]
    fn test_required_text() {
        let mut form = valid_form();
        form.set_text("operator", "  ");
        assert_eq!(
            check(&form),
            Err(EntryFormError::MissingRequiredField("operator".into()))
        );
    }

    #[test]
    fn test_negative_value_rejected_regardless_of_other_fields() {
        let mut form = valid_form();
        form.set_number("b", "-5");
        assert_eq!(
            check(&form),
            Err(EntryFormError::InvalidNumericValue("b".into()))
        );
    }

    #[test]
    fn test_unparsable_value_rejected() {
        let mut form = valid_form();
        form.set_number("a", "12abc");
        assert_eq!(
            check(&form),
            Err(EntryFormError::InvalidNumericValue("a".into()))
        );
    }

    #[test]
    fn test_out_of_range_reading_rejected() {
        let mut form = valid_form();
        form.set_number("ph", "14.5");
        assert_eq!(
            check(&form),
            Err(EntryFormError::InvalidNumericValue("ph".into()))
        );
        form.set_number("ph", "7.2");
        assert_eq!(check(&form), Ok(()));
    }

    #[test]
    fn test_all_zero_or_empty_is_no_data() {
        let mut form = valid_form();
        form.set_number("a", "");
        assert_eq!(check(&form), Err(EntryFormError::NoDataProvided));
        form.set_number("a", "0");
        form.set_number("b", "0.0");
        assert_eq!(check(&form), Err(EntryFormError::NoDataProvided));
    }

    #[test]
    fn test_readings_do_not_count_as_data() {
        let mut form = valid_form();
        form.set_number("a", "");
        form.set_number("ph", "7");
        assert_eq!(check(&form), Err(EntryFormError::NoDataProvided));
    }

    #[test]
    fn test_conditional_field() {
        let mut form = valid_form();
        form.set_flag("has_issues", true);
        assert_eq!(
            check(&form),
            Err(EntryFormError::MissingConditionalField("issues".into()))
        );
        form.set_text("issues", "leak near valve 3");
        assert_eq!(check(&form), Ok(()));

        form.set_flag("has_issues", false);
        form.set_text("issues", "");
        assert_eq!(check(&form), Ok(()));
    }
}
