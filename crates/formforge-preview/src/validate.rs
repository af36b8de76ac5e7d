//! Direct validation of preview values.
//!
//! Applies the same rules the generated Zod schema enforces, without going
//! through generated code. Constraints are checked in the schema chain's
//! order and the first failing constraint per field decides the message,
//! matching the fail-fast behavior of the emitted validator.

use std::sync::OnceLock;

use formforge_core::{Field, FieldKind, SubType, PASSWORD_RULES};
use regex::Regex;

use crate::values::{PreviewState, Value};

/// A failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub name: String,
    pub message: String,
}

/// Validate every field's value, in field order, at most one issue each.
pub fn validate(fields: &[Field], state: &PreviewState) -> Vec<ValidationIssue> {
    fields
        .iter()
        .filter_map(|field| {
            field_issue(field, state).map(|message| ValidationIssue {
                name: field.name.clone(),
                message,
            })
        })
        .collect()
}

static ABSENT: Value = Value::Absent;

fn field_issue(field: &Field, state: &PreviewState) -> Option<String> {
    let value = state.value(&field.name).unwrap_or(&ABSENT);
    let required_message = format!("{} is required", field.label);

    match field.kind {
        FieldKind::Text => match field.sub_type {
            Some(SubType::Email) => email_issue(field, value, required_message),
            Some(SubType::Password) => password_issue(field, value, required_message),
            _ => text_issue(field, value, required_message),
        },
        FieldKind::Checkbox | FieldKind::Combobox if list_valued(field) => {
            if field.required && value.is_empty() {
                Some(required_message)
            } else {
                None
            }
        }
        FieldKind::Select => {
            if field.required && matches!(value, Value::Absent) {
                Some(required_message)
            } else {
                None
            }
        }
        // Textarea, Radio, Datepicker, single combobox, Number and any
        // future kind validate as plain text.
        _ => text_issue(field, value, required_message),
    }
}

fn list_valued(field: &Field) -> bool {
    field.kind == FieldKind::Checkbox || (field.kind == FieldKind::Combobox && field.is_multi)
}

fn text_issue(field: &Field, value: &Value, required_message: String) -> Option<String> {
    if field.required && value.is_empty() {
        Some(required_message)
    } else {
        None
    }
}

/// Empty optional emails count as "no value provided", not a failure.
fn email_issue(field: &Field, value: &Value, required_message: String) -> Option<String> {
    let text = match value {
        Value::Text(s) => s.as_str(),
        _ => "",
    };
    if text.is_empty() {
        return field.required.then_some(required_message);
    }
    if !email_regex().is_match(text) {
        let message = if field.required {
            required_message
        } else {
            "Invalid email".to_string()
        };
        return Some(message);
    }
    None
}

/// Check the password chain in schema order: min length, then patterns in
/// array order, then the required tail.
fn password_issue(field: &Field, value: &Value, required_message: String) -> Option<String> {
    let text = match value {
        Value::Text(s) => s.as_str(),
        _ => "",
    };

    if let Some(rules) = &field.validation {
        if let Some(min) = rules.min {
            if text.chars().count() < min as usize {
                return Some(format!(
                    "{} must be at least {} characters",
                    field.label, min
                ));
            }
        }
        for key in &rules.patterns {
            if let Some((_, regex, message)) = compiled_rules()
                .iter()
                .find(|(id, _, _)| *id == key.as_str())
            {
                if !regex.is_match(text) {
                    return Some(message.to_string());
                }
            }
        }
    }

    if field.required && text.is_empty() {
        return Some(required_message);
    }
    None
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // Same permissive shape Zod uses: local@domain.tld, no spaces.
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
    })
}

/// The rule table with patterns compiled once. Entries whose pattern does
/// not compile are dropped, which reads as "rule absent" downstream.
fn compiled_rules() -> &'static [(&'static str, Regex, &'static str)] {
    static COMPILED: OnceLock<Vec<(&'static str, Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        PASSWORD_RULES
            .iter()
            .filter_map(|rule| {
                Regex::new(rule.pattern)
                    .ok()
                    .map(|regex| (rule.id, regex, rule.message))
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_core::ValidationRules;
    use smallvec::smallvec;

    use crate::values::PreviewState;

    fn password_field() -> Field {
        Field::new(FieldKind::Text, "pw")
            .with_label("Password")
            .with_sub_type(SubType::Password)
            .required(true)
            .with_validation(ValidationRules {
                min: Some(8),
                patterns: smallvec!["uppercase".to_string(), "number".to_string()],
                ..Default::default()
            })
    }

    #[test]
    fn test_required_text_field() {
        let field = Field::new(FieldKind::Text, "name")
            .with_label("Name")
            .required(true);
        let fields = vec![field];
        let state = PreviewState::with_defaults(&fields);

        let issues = validate(&fields, &state);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Name is required");
    }

    #[test]
    fn test_password_chain_fails_fast_in_order() {
        let fields = vec![password_field()];
        let mut state = PreviewState::with_defaults(&fields);

        state.set_text("pw", "short");
        assert_eq!(
            validate(&fields, &state)[0].message,
            "Password must be at least 8 characters"
        );

        state.set_text("pw", "longenough");
        assert_eq!(validate(&fields, &state)[0].message, "Uppercase is required");

        state.set_text("pw", "Longenough");
        assert_eq!(validate(&fields, &state)[0].message, "Number is required");

        state.set_text("pw", "Longenough1");
        assert!(validate(&fields, &state).is_empty());
    }

    #[test]
    fn test_unknown_pattern_key_is_skipped() {
        let mut field = password_field();
        field.validation = Some(ValidationRules {
            patterns: smallvec!["retired-rule".to_string()],
            ..Default::default()
        });
        let fields = vec![field];
        let mut state = PreviewState::with_defaults(&fields);
        state.set_text("pw", "anything");

        assert!(validate(&fields, &state).is_empty());
    }

    #[test]
    fn test_optional_email_accepts_empty_but_not_garbage() {
        let field = Field::new(FieldKind::Text, "email")
            .with_label("Email")
            .with_sub_type(SubType::Email);
        let fields = vec![field];
        let mut state = PreviewState::with_defaults(&fields);

        assert!(validate(&fields, &state).is_empty());

        state.set_text("email", "not-an-email");
        assert_eq!(validate(&fields, &state)[0].message, "Invalid email");

        state.set_text("email", "a@b.co");
        assert!(validate(&fields, &state).is_empty());
    }

    #[test]
    fn test_required_checkbox_needs_membership() {
        let field = Field::new(FieldKind::Checkbox, "c")
            .with_label("Choices")
            .required(true);
        let fields = vec![field];
        let mut state = PreviewState::with_defaults(&fields);

        assert_eq!(validate(&fields, &state)[0].message, "Choices is required");

        state.toggle_checkbox("c", 1);
        assert!(validate(&fields, &state).is_empty());
    }

    #[test]
    fn test_required_select_needs_a_value() {
        let field = Field::new(FieldKind::Select, "plan")
            .with_label("Plan")
            .required(true);
        let fields = vec![field.clone()];
        let mut state = PreviewState::with_defaults(&fields);

        assert_eq!(validate(&fields, &state)[0].message, "Plan is required");

        state.choose(&field, 2);
        assert!(validate(&fields, &state).is_empty());
    }

    #[test]
    fn test_issues_follow_field_order() {
        let fields = vec![
            Field::new(FieldKind::Text, "b").with_label("B").required(true),
            Field::new(FieldKind::Text, "a").with_label("A").required(true),
        ];
        let state = PreviewState::with_defaults(&fields);
        let issues = validate(&fields, &state);
        assert_eq!(issues[0].name, "b");
        assert_eq!(issues[1].name, "a");
    }
}
