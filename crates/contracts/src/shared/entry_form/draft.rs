use super::spec::FormSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of reading a raw numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput {
    Empty,
    Value(f64),
    /// Not a finite number
    Invalid,
}

impl NumericInput {
    /// Contribution to sums: empty and invalid inputs count as zero
    pub fn or_zero(self) -> f64 {
        match self {
            NumericInput::Value(v) => v,
            NumericInput::Empty | NumericInput::Invalid => 0.0,
        }
    }
}

pub fn parse_number(raw: &str) -> NumericInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NumericInput::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => NumericInput::Value(v),
        _ => NumericInput::Invalid,
    }
}

/// Values typed into an entry form. Numbers are kept as typed so that
/// invalid input survives a rejected submission unchanged.
///
/// Mutation goes through [`EntryForm`](super::EntryForm), which keeps the
/// derived total in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub(crate) date: String,
    pub(crate) numbers: BTreeMap<String, String>,
    pub(crate) texts: BTreeMap<String, String>,
    pub(crate) flags: BTreeMap<String, bool>,
    pub(crate) total: f64,
}

impl EntryDraft {
    /// Blank draft with every field of the form present
    pub fn new(spec: &FormSpec) -> Self {
        Self {
            date: String::new(),
            numbers: spec
                .numeric_fields
                .iter()
                .map(|f| (f.name.to_string(), String::new()))
                .collect(),
            texts: spec
                .text_fields
                .iter()
                .map(|f| (f.name.to_string(), String::new()))
                .collect(),
            flags: spec
                .conditional_rules
                .iter()
                .map(|r| (r.flag.to_string(), false))
                .collect(),
            total: 0.0,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn number_raw(&self, field: &str) -> &str {
        self.numbers.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn number(&self, field: &str) -> NumericInput {
        parse_number(self.number_raw(field))
    }

    pub fn text(&self, field: &str) -> &str {
        self.texts.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn flag(&self, field: &str) -> bool {
        self.flags.get(field).copied().unwrap_or(false)
    }

    /// Derived sum of the total fields
    pub fn total(&self) -> f64 {
        self.total
    }

    pub(crate) fn recompute_total(&mut self, spec: &FormSpec) {
        self.total = spec
            .total_fields()
            .map(|f| self.number(f.name).or_zero())
            .sum();
    }
}
