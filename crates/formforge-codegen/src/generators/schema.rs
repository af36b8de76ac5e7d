//! Zod schema fragment generation.
//!
//! One construction expression per field, keyed by the field's data key.
//! Constraint order inside a chain is load-bearing: Zod validators fail
//! fast, so the first failing constraint decides the user-visible message.

use formforge_core::{password_rule, Field, FieldKind, SubType};
use indexmap::IndexMap;

use crate::emit;

/// Map each field to its Zod construction expression, in input order.
pub fn generate(fields: &[Field]) -> IndexMap<String, String> {
    let mut schema = IndexMap::new();
    for field in fields {
        schema.insert(field.name.clone(), field_schema(field));
    }
    schema
}

/// The Zod expression for one field.
pub fn field_schema(field: &Field) -> String {
    let msg = required_message(field);
    match field.kind {
        FieldKind::Text => match field.sub_type {
            Some(SubType::Email) => email_schema(field.required, &msg),
            Some(SubType::Password) => password_schema(field, &msg),
            _ => text_schema(field.required, &msg),
        },
        FieldKind::Textarea | FieldKind::Radio | FieldKind::Datepicker => {
            text_schema(field.required, &msg)
        }
        FieldKind::Checkbox => {
            if field.required {
                format!("z.array(z.number()).min(1, {msg})")
            } else {
                "z.array(z.number()).optional()".to_string()
            }
        }
        FieldKind::Select => select_schema(field.required, &msg),
        FieldKind::Combobox => {
            if field.is_multi {
                if field.required {
                    format!("z.array(z.string()).min(1, {msg})")
                } else {
                    "z.array(z.string()).optional()".to_string()
                }
            } else {
                text_schema(field.required, &msg)
            }
        }
        // Anything else, Number included, validates as plain text.
        _ => text_schema(field.required, &msg),
    }
}

/// The quoted `"{label} is required"` literal for a field.
fn required_message(field: &Field) -> String {
    format!("\"{} is required\"", emit::js_string(&field.label))
}

fn text_schema(required: bool, msg: &str) -> String {
    if required {
        format!("z.string().nonempty({msg})")
    } else {
        "z.string().optional()".to_string()
    }
}

/// Required email fields must carry a value; optional ones accept the
/// empty string as "no value provided" rather than a validation failure.
fn email_schema(required: bool, msg: &str) -> String {
    if required {
        format!("z.string().email({msg})")
    } else {
        "z.string().email().optional().or(z.literal(\"\"))".to_string()
    }
}

/// Build the password chain: base string, then min length, then one regex
/// per selected rule in array order, then the required/optional tail.
fn password_schema(field: &Field, msg: &str) -> String {
    let label = emit::js_string(&field.label);
    let mut chain = String::from("z.string()\n");

    if let Some(rules) = &field.validation {
        if let Some(min) = rules.min {
            chain.push_str(&format!(
                "    .min({min}, \"{label} must be at least {min} characters\")\n"
            ));
        }
        for key in &rules.patterns {
            if let Some(rule) = password_rule(key) {
                chain.push_str(&format!(
                    "    .regex(new RegExp(\"{}\"), \"{}\")\n",
                    emit::js_string(rule.pattern),
                    emit::js_string(rule.message)
                ));
            }
        }
    }

    if field.required {
        chain.push_str(&format!("    .nonempty({msg})"));
    } else {
        chain.push_str("    .optional()");
    }
    chain
}

/// Select values arrive as strings from the DOM; blank coerces to absent
/// before the number check so an untouched control reads as "no value".
fn select_schema(required: bool, msg: &str) -> String {
    let coerce = "(v) => (v === \"\" || v === null ? undefined : Number(v))";
    if required {
        format!("z.preprocess({coerce}, z.number({{ error: {msg} }}))")
    } else {
        format!("z.preprocess({coerce}, z.number().optional())")
    }
}
