use contracts::shared::entry_form::{EntryFormError, FormSpec};

fn field_label<'a>(spec: &FormSpec, name: &'a str) -> &'a str {
    match spec.label_of(name) {
        "" => name,
        label => label,
    }
}

/// Arabic message shown under the form for a rejected submission.
pub fn error_message(spec: &FormSpec, err: &EntryFormError) -> String {
    match err {
        EntryFormError::MissingRequiredField(field) => {
            format!("الرجاء إدخال {}", field_label(spec, field))
        }
        EntryFormError::DuplicateKey(date) => {
            format!("تم إدخال البيانات لهذا التاريخ مسبقاً ({})", date)
        }
        EntryFormError::InvalidNumericValue(field) => {
            let label = field_label(spec, field);
            match spec.numeric_field(field).and_then(|f| f.max.map(|max| (f.min, max))) {
                Some((min, max)) => {
                    format!("قيمة غير صالحة في حقل {}: يجب أن تكون بين {} و {}", label, min, max)
                }
                None => format!("قيمة غير صالحة في حقل {}: يجب أن تكون رقماً موجباً", label),
            }
        }
        EntryFormError::NoDataProvided => {
            "الرجاء إدخال قيمة أكبر من صفر لمحطة واحدة على الأقل".to_string()
        }
        EntryFormError::MissingConditionalField(field) => {
            format!("الرجاء تعبئة حقل {}", field_label(spec, field))
        }
        EntryFormError::SubmissionInProgress => "جاري الحفظ، الرجاء الانتظار".to_string(),
        EntryFormError::Transport(reason) => format!("تعذر حفظ البيانات: {}", reason),
        EntryFormError::SessionClosed => {
            "انتهت الجلسة قبل اكتمال الحفظ، لم يتم حفظ البيانات".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{e101_water_entry, e103_monitoring_entry};

    #[test]
    fn missing_date_uses_date_label() {
        let msg = error_message(
            &e101_water_entry::FORM_SPEC,
            &EntryFormError::MissingRequiredField("date".into()),
        );
        assert!(msg.contains("التاريخ"));
    }

    #[test]
    fn duplicate_mentions_date() {
        let msg = error_message(
            &e101_water_entry::FORM_SPEC,
            &EntryFormError::DuplicateKey("2024-05-01".into()),
        );
        assert!(msg.contains("2024-05-01"));
    }

    #[test]
    fn bounded_reading_shows_range() {
        let msg = error_message(
            &e103_monitoring_entry::FORM_SPEC,
            &EntryFormError::InvalidNumericValue("ph_level".into()),
        );
        assert!(msg.contains("14"));
    }

    #[test]
    fn unknown_field_falls_back_to_name() {
        let msg = error_message(
            &e101_water_entry::FORM_SPEC,
            &EntryFormError::MissingConditionalField("mystery".into()),
        );
        assert!(msg.contains("mystery"));
    }

    #[test]
    fn station_label_is_used() {
        let spec = &e101_water_entry::FORM_SPEC;
        let msg = error_message(spec, &EntryFormError::InvalidNumericValue("station_north".into()));
        assert!(msg.contains(spec.label_of("station_north")));
    }
}
