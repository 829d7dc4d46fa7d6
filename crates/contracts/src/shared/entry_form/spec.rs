//! Per-screen form configuration

/// Numeric input with its accepted range. Values below `min` or above `max`
/// are rejected as invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: Option<f64>,
    /// Counted in the derived total
    pub in_total: bool,
}

impl NumericField {
    /// Per-station consumption value, summed into the total
    pub const fn station(name: &'static str, label: &'static str, unit: &'static str) -> Self {
        Self {
            name,
            label,
            unit,
            min: 0.0,
            max: None,
            in_total: true,
        }
    }

    /// Standalone measurement with an optional upper bound
    pub const fn reading(
        name: &'static str,
        label: &'static str,
        unit: &'static str,
        max: Option<f64>,
    ) -> Self {
        Self {
            name,
            label,
            unit,
            min: 0.0,
            max,
            in_total: false,
        }
    }

    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub multiline: bool,
}

impl TextField {
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: true,
            multiline: false,
        }
    }

    pub const fn notes(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
            multiline: true,
        }
    }
}

/// When `flag` is checked, text field `field` must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalRule {
    pub flag: &'static str,
    pub flag_label: &'static str,
    pub field: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataRule {
    #[default]
    None,
    /// At least one total field must be greater than zero
    AtLeastOnePositive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSpec {
    /// Also the route id of the form page
    pub id: &'static str,
    pub title: &'static str,
    pub numeric_fields: &'static [NumericField],
    pub text_fields: &'static [TextField],
    pub conditional_rules: &'static [ConditionalRule],
    pub data_rule: DataRule,
    /// Unit of the derived total, `None` when the form has no total
    pub total_unit: Option<&'static str>,
}

impl FormSpec {
    pub fn numeric_field(&self, name: &str) -> Option<&'static NumericField> {
        self.numeric_fields.iter().find(|f| f.name == name)
    }

    pub fn text_field(&self, name: &str) -> Option<&'static TextField> {
        self.text_fields.iter().find(|f| f.name == name)
    }

    pub fn total_fields(&self) -> impl Iterator<Item = &'static NumericField> {
        self.numeric_fields.iter().filter(|f| f.in_total)
    }

    pub fn has_total(&self) -> bool {
        self.total_unit.is_some()
    }

    /// Label of any field or flag; empty for unknown names
    pub fn label_of(&self, name: &str) -> &'static str {
        if name == "date" {
            return "التاريخ";
        }
        if let Some(f) = self.numeric_field(name) {
            return f.label;
        }
        if let Some(f) = self.text_field(name) {
            return f.label;
        }
        self.conditional_rules
            .iter()
            .find(|r| r.flag == name)
            .map(|r| r.flag_label)
            .unwrap_or("")
    }
}
