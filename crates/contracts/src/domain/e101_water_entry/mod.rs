//! Daily drinking-water consumption per pumping station

use crate::shared::entry_form::{ConditionalRule, DataRule, FormSpec, NumericField, TextField};

pub static FORM_SPEC: FormSpec = FormSpec {
    id: "water_entry",
    title: "إدخال استهلاك المياه",
    numeric_fields: &[
        NumericField::station("station_north", "محطة الشمال", "م³"),
        NumericField::station("station_south", "محطة الجنوب", "م³"),
        NumericField::station("station_east", "محطة الشرق", "م³"),
        NumericField::station("station_west", "محطة الغرب", "م³"),
        NumericField::station("station_central", "المحطة المركزية", "م³"),
    ],
    text_fields: &[
        TextField::required("recorded_by", "اسم المدخل"),
        TextField::notes("notes", "ملاحظات"),
    ],
    conditional_rules: &[ConditionalRule {
        flag: "has_notes",
        flag_label: "توجد ملاحظات",
        field: "notes",
    }],
    data_rule: DataRule::AtLeastOnePositive,
    total_unit: Some("م³"),
};
