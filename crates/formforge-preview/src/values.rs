//! Interactive value state for the preview.
//!
//! Values are keyed by field name, mirror the generator's default-value
//! rules, and change through the same interaction semantics the emitted
//! handlers implement.

use formforge_core::{Field, FieldKind};
use indexmap::IndexMap;

/// A runtime field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value yet (select/number fields start here).
    Absent,
    Text(String),
    Number(f64),
    /// Checkbox membership (option ids).
    NumberList(Vec<u32>),
    /// Multi-combobox membership (stringified option ids).
    TextList(Vec<String>),
}

impl Value {
    /// Whether this value counts as "not provided" for required checks.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::Text(s) => s.is_empty(),
            Value::Number(_) => false,
            Value::NumberList(items) => items.is_empty(),
            Value::TextList(items) => items.is_empty(),
        }
    }
}

/// Per-field runtime values, in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewState {
    values: IndexMap<String, Value>,
}

impl PreviewState {
    /// Seed every field with its generator default: empty lists for
    /// checkbox and multi-combobox, absent for select and number, the
    /// empty string for everything else.
    pub fn with_defaults(fields: &[Field]) -> Self {
        let mut values = IndexMap::new();
        for field in fields {
            let value = match field.kind {
                FieldKind::Checkbox => Value::NumberList(Vec::new()),
                FieldKind::Select | FieldKind::Number => Value::Absent,
                FieldKind::Combobox if field.is_multi => Value::TextList(Vec::new()),
                _ => Value::Text(String::new()),
            };
            values.insert(field.name.clone(), value);
        }
        Self { values }
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) {
        self.values.insert(name.to_string(), Value::Text(text.into()));
    }

    pub fn set_number(&mut self, name: &str, number: f64) {
        self.values.insert(name.to_string(), Value::Number(number));
    }

    pub fn clear(&mut self, name: &str) {
        self.values.insert(name.to_string(), Value::Absent);
    }

    /// Toggle an option id in a checkbox membership list.
    pub fn toggle_checkbox(&mut self, name: &str, option_id: u32) {
        let entry = self
            .values
            .entry(name.to_string())
            .or_insert_with(|| Value::NumberList(Vec::new()));
        if let Value::NumberList(items) = entry {
            if let Some(index) = items.iter().position(|id| *id == option_id) {
                items.remove(index);
            } else {
                items.push(option_id);
            }
        }
    }

    /// Apply a choice to a select/radio/combobox field, with the same
    /// semantics the emitted handlers have: select and radio replace the
    /// value, a single combobox clears when the current option is chosen
    /// again, and a multi combobox toggles membership.
    pub fn choose(&mut self, field: &Field, option_id: u32) {
        match field.kind {
            FieldKind::Select => {
                self.set_number(&field.name, option_id as f64);
            }
            FieldKind::Radio => {
                self.set_text(&field.name, option_id.to_string());
            }
            FieldKind::Combobox if field.is_multi => {
                let entry = self
                    .values
                    .entry(field.name.clone())
                    .or_insert_with(|| Value::TextList(Vec::new()));
                if let Value::TextList(items) = entry {
                    let id = option_id.to_string();
                    if let Some(index) = items.iter().position(|item| *item == id) {
                        items.remove(index);
                    } else {
                        items.push(id);
                    }
                }
            }
            FieldKind::Combobox => {
                let id = option_id.to_string();
                let current = self.values.get(&field.name);
                if current == Some(&Value::Text(id.clone())) {
                    self.clear(&field.name);
                } else {
                    self.set_text(&field.name, id);
                }
            }
            _ => {}
        }
    }
}
